use crate::api::{
    ApiError, EmployeePayload, EmployeeProfile, EmployeeStatus, EmployeeUserPayload, Poste, Ref,
};
use crate::components::forms::{SelectField, TextAreaField, TextField};
use crate::pages::org::{
    form::{optional_id, required_text},
    or_dash, org_detail, org_form, org_index, CrudRepository, EntityForm, FormMode, IndexFilter,
    OrgPage,
};
use crate::pages::use_id_param;
use crate::state::fetch::use_fetch;
use crate::utils::dates::{format_date_fr, format_date_input, parse_date_input};
use chrono::NaiveDate;
use leptos::*;

fn status_options() -> Vec<(String, String)> {
    EmployeeStatus::ALL
        .iter()
        .map(|status| (status.as_str().to_string(), status.label().to_string()))
        .collect()
}

fn employee_has_status(profile: &EmployeeProfile, status: &str) -> bool {
    profile.statut.as_str() == status
}

fn optional_date(value: &str, field: &str) -> Result<Option<NaiveDate>, ApiError> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    parse_date_input(value)
        .map(Some)
        .ok_or_else(|| ApiError::field(field, "Date invalide."))
}

fn date_or_dash(date: Option<NaiveDate>) -> String {
    date.map(format_date_fr).unwrap_or_else(|| "—".to_string())
}

impl OrgPage for EmployeeProfile {
    const BASE_PATH: &'static str = "/admin/employes";
    const INDEX_SUBTITLE: &'static str = "Dossiers du personnel et affectations.";
    const NEW_TITLE: &'static str = "Nouvel employé";
    const EDIT_TITLE: &'static str = "Modifier l'employé";
    const DETAIL_TITLE: &'static str = "Employé";
    const EMPTY_MESSAGE: &'static str = "Aucun employé";
    const TABLE_HEADERS: &'static [&'static str] =
        &["Matricule", "Nom", "Email", "Poste", "Statut"];

    fn table_cells(&self) -> Vec<String> {
        vec![
            self.matricule.clone(),
            self.display_name(),
            or_dash(self.email()),
            self.poste_display(),
            self.statut.label().to_string(),
        ]
    }

    fn detail_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Matricule", self.matricule.clone()),
            ("Nom", self.display_name()),
            ("Email", or_dash(self.email())),
            ("Téléphone", or_dash(self.telephone.clone())),
            ("Adresse", or_dash(self.adresse.clone())),
            ("Date de naissance", date_or_dash(self.date_naissance)),
            ("Date d'embauche", date_or_dash(self.date_embauche)),
            ("Poste", self.poste_display()),
            ("Statut", self.statut.label().to_string()),
        ]
    }
}

#[derive(Clone, Copy)]
pub struct EmployeeForm {
    first_name: RwSignal<String>,
    last_name: RwSignal<String>,
    email: RwSignal<String>,
    matricule: RwSignal<String>,
    telephone: RwSignal<String>,
    adresse: RwSignal<String>,
    date_naissance: RwSignal<String>,
    date_embauche: RwSignal<String>,
    statut: RwSignal<String>,
    poste: RwSignal<String>,
    poste_options: Signal<Vec<(String, String)>>,
}

impl EmployeeForm {
    fn with_options(poste_options: Signal<Vec<(String, String)>>) -> Self {
        Self {
            first_name: create_rw_signal(String::new()),
            last_name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            matricule: create_rw_signal(String::new()),
            telephone: create_rw_signal(String::new()),
            adresse: create_rw_signal(String::new()),
            date_naissance: create_rw_signal(String::new()),
            date_embauche: create_rw_signal(String::new()),
            statut: create_rw_signal(EmployeeStatus::Actif.as_str().to_string()),
            poste: create_rw_signal(String::new()),
            poste_options,
        }
    }
}

impl EntityForm for EmployeeForm {
    type Entity = EmployeeProfile;

    fn new() -> Self {
        let repo = CrudRepository::<Poste>::from_context();
        let postes = use_fetch(move || {
            let repo = repo.clone();
            async move { repo.list().await }
        });
        Self::with_options(Signal::derive(move || {
            postes
                .data()
                .map(|items| {
                    items
                        .iter()
                        .map(|poste| (poste.id.to_string(), poste.titre.clone()))
                        .collect()
                })
                .unwrap_or_default()
        }))
    }

    fn load(&self, profile: &EmployeeProfile) {
        if let Ref::Embedded(user) = &profile.user {
            self.first_name.set(user.first_name.clone());
            self.last_name.set(user.last_name.clone());
            self.email.set(user.email.clone());
        }
        self.matricule.set(profile.matricule.clone());
        self.telephone.set(profile.telephone.clone());
        self.adresse.set(profile.adresse.clone());
        self.date_naissance
            .set(profile.date_naissance.map(format_date_input).unwrap_or_default());
        self.date_embauche
            .set(profile.date_embauche.map(format_date_input).unwrap_or_default());
        self.statut.set(profile.statut.as_str().to_string());
        self.poste
            .set(profile.poste_id().map(|id| id.to_string()).unwrap_or_default());
    }

    fn payload(&self, _creating: bool) -> Result<EmployeePayload, ApiError> {
        let user = EmployeeUserPayload {
            first_name: required_text(
                &self.first_name.get_untracked(),
                "user.first_name",
                "Le prénom est obligatoire.",
            )?,
            last_name: required_text(
                &self.last_name.get_untracked(),
                "user.last_name",
                "Le nom est obligatoire.",
            )?,
            email: required_text(
                &self.email.get_untracked(),
                "user.email",
                "L'email est obligatoire.",
            )?,
        };
        if !user.email.contains('@') {
            return Err(ApiError::field("user.email", "Adresse email invalide."));
        }
        let statut = EmployeeStatus::parse(&self.statut.get_untracked())
            .ok_or_else(|| ApiError::field("statut", "Statut invalide."))?;
        Ok(EmployeePayload {
            user,
            matricule: required_text(
                &self.matricule.get_untracked(),
                "matricule",
                "Le matricule est obligatoire.",
            )?,
            telephone: self.telephone.get_untracked().trim().to_string(),
            adresse: self.adresse.get_untracked().trim().to_string(),
            date_naissance: optional_date(&self.date_naissance.get_untracked(), "date_naissance")?,
            date_embauche: optional_date(&self.date_embauche.get_untracked(), "date_embauche")?,
            statut,
            poste: optional_id(&self.poste.get_untracked(), "poste")?,
        })
    }

    fn fields(self, error: Signal<Option<ApiError>>, _creating: bool) -> View {
        view! {
            <div class="grid gap-4 sm:grid-cols-2">
                <TextField label="Prénom" value=self.first_name field="user.first_name" required=true error=error />
                <TextField label="Nom" value=self.last_name field="user.last_name" required=true error=error />
                <TextField label="Email" value=self.email field="user.email" input_type="email" required=true error=error />
                <TextField label="Matricule" value=self.matricule field="matricule" required=true error=error />
                <TextField label="Téléphone" value=self.telephone field="telephone" input_type="tel" error=error />
                <SelectField
                    label="Statut"
                    value=self.statut
                    field="statut"
                    options=Signal::derive(status_options)
                    required=true
                    error=error
                />
                <TextField label="Date de naissance" value=self.date_naissance field="date_naissance" input_type="date" error=error />
                <TextField label="Date d'embauche" value=self.date_embauche field="date_embauche" input_type="date" error=error />
            </div>
            <SelectField
                label="Poste"
                value=self.poste
                field="poste"
                options=self.poste_options
                placeholder="Aucun"
                error=error
            />
            <TextAreaField label="Adresse" value=self.adresse field="adresse" rows=2 error=error />
        }
        .into_view()
    }
}

#[component]
pub fn EmployesPage() -> impl IntoView {
    org_index::<EmployeeProfile>(Some(IndexFilter {
        label: "Tous les statuts",
        options: Signal::derive(status_options),
        matches: employee_has_status,
    }))
}

#[component]
pub fn EmployeDetailPage() -> impl IntoView {
    org_detail::<EmployeeProfile>(use_id_param())
}

#[component]
pub fn EmployeNewPage() -> impl IntoView {
    org_form::<EmployeeForm>(FormMode::Create)
}

#[component]
pub fn EmployeEditPage() -> impl IntoView {
    org_form::<EmployeeForm>(FormMode::Edit(use_id_param()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::with_runtime;
    use serde_json::json;

    fn profile() -> EmployeeProfile {
        serde_json::from_value(json!({
            "id": 3,
            "user": { "id": 8, "first_name": "Jean", "last_name": "Dupont", "email": "jd@rh.fr", "role": "employee" },
            "matricule": "EMP-003",
            "telephone": null,
            "statut": "suspendu",
            "date_embauche": "2021-09-01",
            "poste": { "id": 2, "titre": "Comptable", "salaire_de_base": "2500.00" }
        }))
        .unwrap()
    }

    #[test]
    fn status_filter_compares_wire_values() {
        let profile = profile();
        assert!(employee_has_status(&profile, "suspendu"));
        assert!(!employee_has_status(&profile, "actif"));
        assert_eq!(status_options().len(), EmployeeStatus::ALL.len());
    }

    #[test]
    fn detail_rows_fill_blanks_with_a_dash() {
        let rows = profile().detail_rows();
        let value = |label: &str| {
            rows.iter()
                .find(|(name, _)| *name == label)
                .map(|(_, value)| value.clone())
                .unwrap()
        };
        assert_eq!(value("Téléphone"), "—");
        assert_eq!(value("Date de naissance"), "—");
        assert_eq!(value("Date d'embauche"), "01/09/2021");
        assert_eq!(value("Poste"), "Comptable");
        assert_eq!(value("Statut"), "Suspendu");
    }

    #[test]
    fn load_then_payload_keeps_the_record() {
        with_runtime(|| {
            let form = EmployeeForm::with_options(Signal::derive(Vec::new));
            form.load(&profile());

            let payload = form.payload(false).unwrap();

            assert_eq!(payload.user.email, "jd@rh.fr");
            assert_eq!(payload.matricule, "EMP-003");
            assert_eq!(payload.statut, EmployeeStatus::Suspendu);
            assert_eq!(payload.poste, Some(2));
            assert_eq!(payload.date_naissance, None);
            assert_eq!(
                payload.date_embauche,
                NaiveDate::from_ymd_opt(2021, 9, 1)
            );
        });
    }

    #[test]
    fn payload_flags_missing_identity_and_bad_dates() {
        with_runtime(|| {
            let form = EmployeeForm::with_options(Signal::derive(Vec::new));
            let err = form.payload(true).unwrap_err();
            assert!(err.field_message("user.first_name").is_some());

            form.first_name.set("Lina".into());
            form.last_name.set("Roux".into());
            form.email.set("lina.rh.fr".into());
            form.matricule.set("EMP-010".into());
            let err = form.payload(true).unwrap_err();
            assert!(err.field_message("user.email").is_some());

            form.email.set("lina@rh.fr".into());
            form.date_naissance.set("31/12/1990".into());
            let err = form.payload(true).unwrap_err();
            assert!(err.field_message("date_naissance").is_some());
        });
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn new_form_lists_every_status() {
        let html = render_to_string(|| view! { <EmployeNewPage /> });
        assert!(html.contains("Nouvel employé"));
        for status in EmployeeStatus::ALL {
            assert!(html.contains(status.label()));
        }
        assert!(html.contains("field-user-first_name"));
    }
}
