use serde::{de::DeserializeOwned, Deserialize, Serialize};

use super::{
    client::ApiClient,
    error::ApiError,
    types::{
        Department, DepartmentPayload, EmployeePayload, EmployeeProfile, HasId, Poste,
        PostePayload, StaffPayload, User,
    },
};
use crate::utils::dates::format_date_fr;

/// An org-structure record managed through the generic CRUD pages.
pub trait OrgEntity: Clone + PartialEq + Serialize + DeserializeOwned + 'static {
    type Payload: Serialize + Clone + 'static;

    /// Collection segment under `/users/`, e.g. `departements`.
    const COLLECTION: &'static str;
    /// Plural noun used in titles and messages.
    const PLURAL_LABEL: &'static str;
    /// Base name of exported CSV files.
    const EXPORT_NAME: &'static str;

    fn id(&self) -> i64;
    fn label(&self) -> String;
    /// Lowercase-insensitive text matched by the index search box.
    fn search_text(&self) -> String;
    fn csv_headers() -> &'static [&'static str];
    fn csv_row(&self) -> Vec<String>;
}

pub fn collection_path<E: OrgEntity>() -> String {
    format!("/users/{}/", E::COLLECTION)
}

pub fn item_path<E: OrgEntity>(id: i64) -> String {
    format!("/users/{}/{}/", E::COLLECTION, id)
}

impl ApiClient {
    pub async fn list_entities<E: OrgEntity>(&self) -> Result<Vec<E>, ApiError> {
        self.get_list(&collection_path::<E>()).await
    }

    pub async fn get_entity<E: OrgEntity>(&self, id: i64) -> Result<E, ApiError> {
        self.get_json(&item_path::<E>(id)).await
    }

    pub async fn create_entity<E: OrgEntity>(&self, payload: &E::Payload) -> Result<E, ApiError> {
        self.post_json(&collection_path::<E>(), payload).await
    }

    pub async fn update_entity<E: OrgEntity>(
        &self,
        id: i64,
        payload: &E::Payload,
    ) -> Result<E, ApiError> {
        self.put_json(&item_path::<E>(id), payload).await
    }

    pub async fn delete_entity<E: OrgEntity>(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&item_path::<E>(id)).await
    }
}

impl OrgEntity for Department {
    type Payload = DepartmentPayload;
    const COLLECTION: &'static str = "departements";
    const PLURAL_LABEL: &'static str = "Départements";
    const EXPORT_NAME: &'static str = "departements";

    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> String {
        self.nom.clone()
    }

    fn search_text(&self) -> String {
        format!("{} {} {}", self.nom, self.description, self.chef_display())
    }

    fn csv_headers() -> &'static [&'static str] {
        &["ID", "Nom", "Description", "Chef de département"]
    }

    fn csv_row(&self) -> Vec<String> {
        let chef = if self.chef_departement.is_some() {
            self.chef_display()
        } else {
            String::new()
        };
        vec![
            self.id.to_string(),
            self.nom.clone(),
            self.description.clone(),
            chef,
        ]
    }
}

impl OrgEntity for Poste {
    type Payload = PostePayload;
    const COLLECTION: &'static str = "postes";
    const PLURAL_LABEL: &'static str = "Postes";
    const EXPORT_NAME: &'static str = "postes";

    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> String {
        self.titre.clone()
    }

    fn search_text(&self) -> String {
        format!(
            "{} {} {}",
            self.titre,
            self.description,
            self.departement_display()
        )
    }

    fn csv_headers() -> &'static [&'static str] {
        &["ID", "Titre", "Description", "Salaire de base", "Département"]
    }

    fn csv_row(&self) -> Vec<String> {
        let departement = if self.departement.is_some() {
            self.departement_display()
        } else {
            String::new()
        };
        vec![
            self.id.to_string(),
            self.titre.clone(),
            self.description.clone(),
            format!("{:.2}", self.salaire_de_base),
            departement,
        ]
    }
}

impl OrgEntity for EmployeeProfile {
    type Payload = EmployeePayload;
    const COLLECTION: &'static str = "employe-profiles";
    const PLURAL_LABEL: &'static str = "Employés";
    const EXPORT_NAME: &'static str = "employes";

    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> String {
        format!("{} ({})", self.display_name(), self.matricule)
    }

    fn search_text(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.display_name(),
            self.matricule,
            self.email(),
            self.telephone,
            self.poste_display()
        )
    }

    fn csv_headers() -> &'static [&'static str] {
        &[
            "ID",
            "Matricule",
            "Nom",
            "Email",
            "Téléphone",
            "Adresse",
            "Date de naissance",
            "Date d'embauche",
            "Statut",
            "Poste",
        ]
    }

    fn csv_row(&self) -> Vec<String> {
        let poste = if self.poste.is_some() {
            self.poste_display()
        } else {
            String::new()
        };
        vec![
            self.id.to_string(),
            self.matricule.clone(),
            self.display_name(),
            self.email(),
            self.telephone.clone(),
            self.adresse.clone(),
            self.date_naissance.map(format_date_fr).unwrap_or_default(),
            self.date_embauche.map(format_date_fr).unwrap_or_default(),
            self.statut.label().to_string(),
            poste,
        ]
    }
}

/// Administrator account, served by `/users/admins/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdminAccount(pub User);

/// Super-administrator account, served by `/users/superadmins/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SuperAdminAccount(pub User);

fn staff_csv_row(user: &User) -> Vec<String> {
    vec![
        user.id.to_string(),
        user.first_name.clone(),
        user.last_name.clone(),
        user.email.clone(),
        if user.is_verified { "Oui" } else { "Non" }.to_string(),
    ]
}

const STAFF_HEADERS: &[&str] = &["ID", "Prénom", "Nom", "Email", "Vérifié"];

macro_rules! staff_entity {
    ($ty:ty, $collection:literal, $plural:literal, $export:literal) => {
        impl OrgEntity for $ty {
            type Payload = StaffPayload;
            const COLLECTION: &'static str = $collection;
            const PLURAL_LABEL: &'static str = $plural;
            const EXPORT_NAME: &'static str = $export;

            fn id(&self) -> i64 {
                self.0.id()
            }

            fn label(&self) -> String {
                self.0.full_name()
            }

            fn search_text(&self) -> String {
                format!("{} {}", self.0.full_name(), self.0.email)
            }

            fn csv_headers() -> &'static [&'static str] {
                STAFF_HEADERS
            }

            fn csv_row(&self) -> Vec<String> {
                staff_csv_row(&self.0)
            }
        }
    };
}

staff_entity!(AdminAccount, "admins", "Administrateurs", "administrateurs");
staff_entity!(
    SuperAdminAccount,
    "superadmins",
    "Super administrateurs",
    "super-administrateurs"
);
