use crate::api::{ApiError, Department, DepartmentPayload, EmployeeProfile, OrgEntity};
use crate::components::forms::{SelectField, TextAreaField, TextField};
use crate::pages::org::{
    form::{optional_id, required_text},
    or_dash, org_detail, org_form, org_index, CrudRepository, EntityForm, FormMode, OrgPage,
};
use crate::pages::use_id_param;
use crate::state::fetch::use_fetch;
use leptos::*;

impl OrgPage for Department {
    const BASE_PATH: &'static str = "/admin/departements";
    const INDEX_SUBTITLE: &'static str = "Services de l'entreprise et leurs responsables.";
    const NEW_TITLE: &'static str = "Nouveau département";
    const EDIT_TITLE: &'static str = "Modifier le département";
    const DETAIL_TITLE: &'static str = "Département";
    const EMPTY_MESSAGE: &'static str = "Aucun département";
    const TABLE_HEADERS: &'static [&'static str] = &["Nom", "Description", "Chef de département"];

    fn table_cells(&self) -> Vec<String> {
        vec![
            self.nom.clone(),
            or_dash(self.description.clone()),
            self.chef_display(),
        ]
    }

    fn detail_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Nom", self.nom.clone()),
            ("Description", or_dash(self.description.clone())),
            ("Chef de département", self.chef_display()),
        ]
    }
}

/// `(id, label)` choices for selects referencing employee profiles.
pub fn employee_options(profiles: &[EmployeeProfile]) -> Vec<(String, String)> {
    profiles
        .iter()
        .map(|profile| (OrgEntity::id(profile).to_string(), profile.label()))
        .collect()
}

#[derive(Clone, Copy)]
pub struct DepartmentForm {
    nom: RwSignal<String>,
    description: RwSignal<String>,
    chef: RwSignal<String>,
    chef_options: Signal<Vec<(String, String)>>,
}

impl DepartmentForm {
    fn with_options(chef_options: Signal<Vec<(String, String)>>) -> Self {
        Self {
            nom: create_rw_signal(String::new()),
            description: create_rw_signal(String::new()),
            chef: create_rw_signal(String::new()),
            chef_options,
        }
    }
}

impl EntityForm for DepartmentForm {
    type Entity = Department;

    fn new() -> Self {
        let employees = CrudRepository::<EmployeeProfile>::from_context();
        let profiles = use_fetch(move || {
            let repo = employees.clone();
            async move { repo.list().await }
        });
        Self::with_options(Signal::derive(move || {
            profiles
                .data()
                .map(|items| employee_options(&items))
                .unwrap_or_default()
        }))
    }

    fn load(&self, entity: &Department) {
        self.nom.set(entity.nom.clone());
        self.description.set(entity.description.clone());
        self.chef.set(
            entity
                .chef_departement
                .as_ref()
                .map(|chef| chef.id().to_string())
                .unwrap_or_default(),
        );
    }

    fn payload(&self, _creating: bool) -> Result<DepartmentPayload, ApiError> {
        Ok(DepartmentPayload {
            nom: required_text(&self.nom.get_untracked(), "nom", "Le nom est obligatoire.")?,
            description: self.description.get_untracked().trim().to_string(),
            chef_departement: optional_id(&self.chef.get_untracked(), "chef_departement")?,
        })
    }

    fn fields(self, error: Signal<Option<ApiError>>, _creating: bool) -> View {
        view! {
            <TextField label="Nom" value=self.nom field="nom" required=true error=error />
            <TextAreaField label="Description" value=self.description field="description" error=error />
            <SelectField
                label="Chef de département"
                value=self.chef
                field="chef_departement"
                options=self.chef_options
                placeholder="Aucun"
                error=error
            />
        }
        .into_view()
    }
}

#[component]
pub fn DepartementsPage() -> impl IntoView {
    org_index::<Department>(None)
}

#[component]
pub fn DepartementDetailPage() -> impl IntoView {
    org_detail::<Department>(use_id_param())
}

#[component]
pub fn DepartementNewPage() -> impl IntoView {
    org_form::<DepartmentForm>(FormMode::Create)
}

#[component]
pub fn DepartementEditPage() -> impl IntoView {
    org_form::<DepartmentForm>(FormMode::Edit(use_id_param()))
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn index_renders_toolbar() {
        let html = render_to_string(|| view! { <DepartementsPage /> });
        assert!(html.contains("Départements"));
        assert!(html.contains("Exporter CSV"));
        assert!(html.contains("/admin/departements/new"));
    }

    #[test]
    fn new_form_renders_fields() {
        let html = render_to_string(|| view! { <DepartementNewPage /> });
        assert!(html.contains("Nouveau département"));
        assert!(html.contains("field-nom"));
        assert!(html.contains("field-chef_departement"));
    }
}
