use crate::api::{ApiError, Department, Poste, PostePayload};
use crate::components::forms::{SelectField, TextAreaField, TextField};
use crate::pages::org::{
    form::{optional_id, required_text},
    or_dash, org_detail, org_form, org_index, CrudRepository, EntityForm, FormMode, IndexFilter,
    OrgPage,
};
use crate::pages::use_id_param;
use crate::state::fetch::use_fetch;
use leptos::*;

/// `2500.5` -> `2 500,50 €`.
pub fn format_salary(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (units, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::new();
    for (index, digit) in units.chars().enumerate() {
        if index > 0 && (units.len() - index) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(digit);
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}{},{} €", sign, grouped, cents)
}

/// Accepts `2500`, `2500.50` or `2500,50`; negative amounts are refused.
pub fn parse_salary(value: &str) -> Result<f64, ApiError> {
    let normalized: String = value
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if normalized.is_empty() {
        return Err(ApiError::field(
            "salaire_de_base",
            "Le salaire de base est obligatoire.",
        ));
    }
    match normalized.parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount >= 0.0 => Ok(amount),
        Ok(_) => Err(ApiError::field(
            "salaire_de_base",
            "Le salaire ne peut pas être négatif.",
        )),
        Err(_) => Err(ApiError::field(
            "salaire_de_base",
            "Montant invalide.",
        )),
    }
}

fn poste_in_department(poste: &Poste, department_id: &str) -> bool {
    poste
        .departement_id()
        .map(|id| id.to_string() == department_id)
        .unwrap_or(false)
}

fn department_options(departments: &[Department]) -> Vec<(String, String)> {
    departments
        .iter()
        .map(|dept| (dept.id.to_string(), dept.nom.clone()))
        .collect()
}

fn use_department_options() -> Signal<Vec<(String, String)>> {
    let repo = CrudRepository::<Department>::from_context();
    let departments = use_fetch(move || {
        let repo = repo.clone();
        async move { repo.list().await }
    });
    Signal::derive(move || {
        departments
            .data()
            .map(|items| department_options(&items))
            .unwrap_or_default()
    })
}

impl OrgPage for Poste {
    const BASE_PATH: &'static str = "/admin/postes";
    const INDEX_SUBTITLE: &'static str = "Intitulés de poste et salaires de référence.";
    const NEW_TITLE: &'static str = "Nouveau poste";
    const EDIT_TITLE: &'static str = "Modifier le poste";
    const DETAIL_TITLE: &'static str = "Poste";
    const EMPTY_MESSAGE: &'static str = "Aucun poste";
    const TABLE_HEADERS: &'static [&'static str] =
        &["Titre", "Département", "Salaire de base", "Description"];

    fn table_cells(&self) -> Vec<String> {
        vec![
            self.titre.clone(),
            self.departement_display(),
            format_salary(self.salaire_de_base),
            or_dash(self.description.clone()),
        ]
    }

    fn detail_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Titre", self.titre.clone()),
            ("Département", self.departement_display()),
            ("Salaire de base", format_salary(self.salaire_de_base)),
            ("Description", or_dash(self.description.clone())),
        ]
    }
}

#[derive(Clone, Copy)]
pub struct PosteForm {
    titre: RwSignal<String>,
    description: RwSignal<String>,
    salaire: RwSignal<String>,
    departement: RwSignal<String>,
    departement_options: Signal<Vec<(String, String)>>,
}

impl PosteForm {
    fn with_options(departement_options: Signal<Vec<(String, String)>>) -> Self {
        Self {
            titre: create_rw_signal(String::new()),
            description: create_rw_signal(String::new()),
            salaire: create_rw_signal(String::new()),
            departement: create_rw_signal(String::new()),
            departement_options,
        }
    }
}

impl EntityForm for PosteForm {
    type Entity = Poste;

    fn new() -> Self {
        Self::with_options(use_department_options())
    }

    fn load(&self, poste: &Poste) {
        self.titre.set(poste.titre.clone());
        self.description.set(poste.description.clone());
        self.salaire.set(format!("{:.2}", poste.salaire_de_base));
        self.departement.set(
            poste
                .departement_id()
                .map(|id| id.to_string())
                .unwrap_or_default(),
        );
    }

    fn payload(&self, _creating: bool) -> Result<PostePayload, ApiError> {
        let titre = required_text(
            &self.titre.get_untracked(),
            "titre",
            "Le titre est obligatoire.",
        )?;
        let salaire_de_base = parse_salary(&self.salaire.get_untracked())?;
        Ok(PostePayload {
            titre,
            description: self.description.get_untracked().trim().to_string(),
            salaire_de_base,
            departement: optional_id(&self.departement.get_untracked(), "departement")?,
        })
    }

    fn fields(self, error: Signal<Option<ApiError>>, _creating: bool) -> View {
        view! {
            <TextField label="Titre" value=self.titre field="titre" required=true error=error />
            <SelectField
                label="Département"
                value=self.departement
                field="departement"
                options=self.departement_options
                placeholder="Aucun"
                error=error
            />
            <TextField
                label="Salaire de base (€)"
                value=self.salaire
                field="salaire_de_base"
                required=true
                placeholder="2500,00"
                error=error
            />
            <TextAreaField label="Description" value=self.description field="description" error=error />
        }
        .into_view()
    }
}

#[component]
pub fn PostesPage() -> impl IntoView {
    org_index::<Poste>(Some(IndexFilter {
        label: "Tous les départements",
        options: use_department_options(),
        matches: poste_in_department,
    }))
}

#[component]
pub fn PosteDetailPage() -> impl IntoView {
    org_detail::<Poste>(use_id_param())
}

#[component]
pub fn PosteNewPage() -> impl IntoView {
    org_form::<PosteForm>(FormMode::Create)
}

#[component]
pub fn PosteEditPage() -> impl IntoView {
    org_form::<PosteForm>(FormMode::Edit(use_id_param()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::OrgEntity;
    use crate::test_support::helpers::with_runtime;
    use serde_json::json;

    #[test]
    fn salary_is_grouped_with_french_separators() {
        assert_eq!(format_salary(2500.5), "2 500,50 €");
        assert_eq!(format_salary(1_234_567.0), "1 234 567,00 €");
        assert_eq!(format_salary(0.0), "0,00 €");
        assert_eq!(format_salary(950.0), "950,00 €");
    }

    #[test]
    fn salary_input_accepts_comma_and_rejects_negatives() {
        assert_eq!(parse_salary("2500,50").unwrap(), 2500.5);
        assert_eq!(parse_salary(" 3 000 ").unwrap(), 3000.0);
        assert!(parse_salary("-10")
            .unwrap_err()
            .field_message("salaire_de_base")
            .is_some());
        assert!(parse_salary("abc").is_err());
        assert!(parse_salary("").is_err());
    }

    #[test]
    fn department_filter_matches_by_id() {
        let poste: Poste = serde_json::from_value(json!({
            "id": 1,
            "titre": "Développeur",
            "salaire_de_base": 3200,
            "departement": { "id": 2, "nom": "Informatique" }
        }))
        .unwrap();
        assert!(poste_in_department(&poste, "2"));
        assert!(!poste_in_department(&poste, "3"));

        let orphan: Poste =
            serde_json::from_value(json!({ "id": 2, "titre": "Stagiaire", "salaire_de_base": 0 }))
                .unwrap();
        assert!(!poste_in_department(&orphan, "2"));
        assert_eq!(orphan.table_cells()[1], "—");
    }

    #[test]
    fn form_builds_payload_from_inputs() {
        with_runtime(|| {
            let form = PosteForm::with_options(Signal::derive(Vec::new));
            form.titre.set("Comptable".into());
            form.salaire.set("2800,75".into());
            form.departement.set("4".into());

            let payload = form.payload(true).unwrap();

            assert_eq!(payload.titre, "Comptable");
            assert_eq!(payload.salaire_de_base, 2800.75);
            assert_eq!(payload.departement, Some(4));
            assert_eq!(payload.description, "");
        });
    }

    #[test]
    fn loading_a_poste_fills_the_inputs() {
        with_runtime(|| {
            let poste: Poste = serde_json::from_value(json!({
                "id": 5,
                "titre": "Juriste",
                "salaire_de_base": "3100.00",
                "departement": 3
            }))
            .unwrap();
            let form = PosteForm::with_options(Signal::derive(Vec::new));
            form.load(&poste);
            assert_eq!(form.salaire.get_untracked(), "3100.00");
            assert_eq!(form.departement.get_untracked(), "3");
            assert_eq!(poste.label(), "Juriste");
        });
    }
}
