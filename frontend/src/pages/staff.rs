//! Administrator and super-administrator accounts.
//!
//! Both collections share one form and one set of screens; only the
//! [`OrgPage`] constants differ.

use crate::api::{AdminAccount, ApiError, OrgEntity, StaffPayload, SuperAdminAccount, User};
use crate::components::forms::TextField;
use crate::pages::org::{
    form::required_text, org_detail, org_form, org_index, EntityForm, FormMode, OrgPage,
};
use crate::pages::use_id_param;
use crate::utils::dates::format_datetime_fr;
use leptos::*;
use std::marker::PhantomData;

pub const MIN_PASSWORD_LEN: usize = 8;

/// Staff account types, unwrapped to their user record.
pub trait StaffAccount: OrgPage + OrgEntity<Payload = StaffPayload> {
    fn user(&self) -> &User;
}

impl StaffAccount for AdminAccount {
    fn user(&self) -> &User {
        &self.0
    }
}

impl StaffAccount for SuperAdminAccount {
    fn user(&self) -> &User {
        &self.0
    }
}

fn staff_cells(user: &User) -> Vec<String> {
    vec![
        user.full_name(),
        user.email.clone(),
        if user.is_verified { "Oui" } else { "Non" }.to_string(),
    ]
}

fn staff_rows(user: &User) -> Vec<(&'static str, String)> {
    vec![
        ("Prénom", user.first_name.clone()),
        ("Nom", user.last_name.clone()),
        ("Email", user.email.clone()),
        ("Rôle", user.role.label().to_string()),
        (
            "Compte vérifié",
            if user.is_verified { "Oui" } else { "Non" }.to_string(),
        ),
        (
            "Créé le",
            user.created_at
                .map(format_datetime_fr)
                .unwrap_or_else(|| "—".to_string()),
        ),
    ]
}

const STAFF_TABLE_HEADERS: &[&str] = &["Nom", "Email", "Vérifié"];

impl OrgPage for AdminAccount {
    const BASE_PATH: &'static str = "/superadmin/admins";
    const INDEX_SUBTITLE: &'static str = "Comptes ayant accès à la gestion du personnel.";
    const NEW_TITLE: &'static str = "Nouvel administrateur";
    const EDIT_TITLE: &'static str = "Modifier l'administrateur";
    const DETAIL_TITLE: &'static str = "Administrateur";
    const EMPTY_MESSAGE: &'static str = "Aucun administrateur";
    const TABLE_HEADERS: &'static [&'static str] = STAFF_TABLE_HEADERS;

    fn table_cells(&self) -> Vec<String> {
        staff_cells(&self.0)
    }

    fn detail_rows(&self) -> Vec<(&'static str, String)> {
        staff_rows(&self.0)
    }
}

impl OrgPage for SuperAdminAccount {
    const BASE_PATH: &'static str = "/superadmin/superadmins";
    const INDEX_SUBTITLE: &'static str = "Comptes disposant de tous les droits.";
    const NEW_TITLE: &'static str = "Nouveau super administrateur";
    const EDIT_TITLE: &'static str = "Modifier le super administrateur";
    const DETAIL_TITLE: &'static str = "Super administrateur";
    const EMPTY_MESSAGE: &'static str = "Aucun super administrateur";
    const TABLE_HEADERS: &'static [&'static str] = STAFF_TABLE_HEADERS;

    fn table_cells(&self) -> Vec<String> {
        staff_cells(&self.0)
    }

    fn detail_rows(&self) -> Vec<(&'static str, String)> {
        staff_rows(&self.0)
    }
}

/// Builds the account body. The password is only sent on creation, and only
/// when one was typed.
pub fn build_staff_payload(
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
    creating: bool,
) -> Result<StaffPayload, ApiError> {
    let first_name = required_text(first_name, "first_name", "Le prénom est obligatoire.")?;
    let last_name = required_text(last_name, "last_name", "Le nom est obligatoire.")?;
    let email = required_text(email, "email", "L'email est obligatoire.")?;
    if !email.contains('@') {
        return Err(ApiError::field("email", "Adresse email invalide."));
    }
    let password = if creating && !password.is_empty() {
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ApiError::field(
                "password",
                format!(
                    "Le mot de passe doit contenir au moins {} caractères.",
                    MIN_PASSWORD_LEN
                ),
            ));
        }
        Some(password.to_string())
    } else {
        None
    };
    Ok(StaffPayload {
        first_name,
        last_name,
        email,
        password,
    })
}

pub struct StaffForm<A> {
    first_name: RwSignal<String>,
    last_name: RwSignal<String>,
    email: RwSignal<String>,
    password: RwSignal<String>,
    _account: PhantomData<A>,
}

impl<A> Clone for StaffForm<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for StaffForm<A> {}

impl<A: StaffAccount> EntityForm for StaffForm<A> {
    type Entity = A;

    fn new() -> Self {
        Self {
            first_name: create_rw_signal(String::new()),
            last_name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            _account: PhantomData,
        }
    }

    fn load(&self, account: &A) {
        let user = account.user();
        self.first_name.set(user.first_name.clone());
        self.last_name.set(user.last_name.clone());
        self.email.set(user.email.clone());
        self.password.set(String::new());
    }

    fn payload(&self, creating: bool) -> Result<StaffPayload, ApiError> {
        build_staff_payload(
            &self.first_name.get_untracked(),
            &self.last_name.get_untracked(),
            &self.email.get_untracked(),
            &self.password.get_untracked(),
            creating,
        )
    }

    fn fields(self, error: Signal<Option<ApiError>>, creating: bool) -> View {
        let password = creating.then(|| {
            view! {
                <TextField
                    label="Mot de passe (optionnel)"
                    value=self.password
                    field="password"
                    input_type="password"
                    error=error
                />
                <p class="text-xs text-fg-muted">
                    {format!(
                        "Facultatif. Au moins {} caractères s'il est renseigné.",
                        MIN_PASSWORD_LEN
                    )}
                </p>
            }
        });
        view! {
            <div class="grid gap-4 sm:grid-cols-2">
                <TextField label="Prénom" value=self.first_name field="first_name" required=true error=error />
                <TextField label="Nom" value=self.last_name field="last_name" required=true error=error />
            </div>
            <TextField label="Email" value=self.email field="email" input_type="email" required=true error=error />
            {password}
        }
        .into_view()
    }
}

#[component]
pub fn AdminsPage() -> impl IntoView {
    org_index::<AdminAccount>(None)
}

#[component]
pub fn AdminDetailPage() -> impl IntoView {
    org_detail::<AdminAccount>(use_id_param())
}

#[component]
pub fn AdminNewPage() -> impl IntoView {
    org_form::<StaffForm<AdminAccount>>(FormMode::Create)
}

#[component]
pub fn AdminEditPage() -> impl IntoView {
    org_form::<StaffForm<AdminAccount>>(FormMode::Edit(use_id_param()))
}

#[component]
pub fn SuperAdminsPage() -> impl IntoView {
    org_index::<SuperAdminAccount>(None)
}

#[component]
pub fn SuperAdminDetailPage() -> impl IntoView {
    org_detail::<SuperAdminAccount>(use_id_param())
}

#[component]
pub fn SuperAdminNewPage() -> impl IntoView {
    org_form::<StaffForm<SuperAdminAccount>>(FormMode::Create)
}

#[component]
pub fn SuperAdminEditPage() -> impl IntoView {
    org_form::<StaffForm<SuperAdminAccount>>(FormMode::Edit(use_id_param()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, with_runtime};

    #[test]
    fn password_is_optional_on_create_and_never_sent_on_edit() {
        let created = build_staff_payload("Ana", "Lopes", "ana@rh.fr", "", true).unwrap();
        assert_eq!(created.password, None);

        let created = build_staff_payload("Ana", "Lopes", "ana@rh.fr", "s3cretpass", true).unwrap();
        assert_eq!(created.password.as_deref(), Some("s3cretpass"));

        let edited = build_staff_payload("Ana", "Lopes", "ana@rh.fr", "s3cretpass", false).unwrap();
        assert_eq!(edited.password, None);
    }

    #[test]
    fn short_password_and_bad_email_are_field_errors() {
        let err = build_staff_payload("Ana", "Lopes", "ana@rh.fr", "court", true).err().unwrap();
        assert!(err.field_message("password").is_some());

        let err = build_staff_payload("Ana", "Lopes", "ana.rh.fr", "", true).err().unwrap();
        assert!(err.field_message("email").is_some());

        let err = build_staff_payload(" ", "Lopes", "ana@rh.fr", "", true).err().unwrap();
        assert!(err.field_message("first_name").is_some());
    }

    #[test]
    fn both_account_kinds_share_columns_but_not_paths() {
        let admin = AdminAccount(admin_user());
        let superadmin = SuperAdminAccount(admin_user());
        assert_eq!(admin.table_cells(), superadmin.table_cells());
        assert_eq!(admin.table_cells().len(), AdminAccount::TABLE_HEADERS.len());
        assert_eq!(AdminAccount::detail_path(20), "/superadmin/admins/20");
        assert_eq!(SuperAdminAccount::new_path(), "/superadmin/superadmins/new");
        assert_eq!(admin.label(), "Adam Moreau");
    }

    #[test]
    fn loading_an_account_clears_the_password() {
        with_runtime(|| {
            let form = StaffForm::<AdminAccount>::new();
            form.password.set("leftover".into());
            form.load(&AdminAccount(admin_user()));
            assert_eq!(form.first_name.get_untracked(), "Adam");
            assert_eq!(form.password.get_untracked(), "");
        });
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn create_form_offers_a_password_field() {
        let html = render_to_string(|| view! { <SuperAdminNewPage /> });
        assert!(html.contains("Nouveau super administrateur"));
        assert!(html.contains("field-password"));
    }

    #[test]
    fn admin_index_links_to_creation() {
        let html = render_to_string(|| view! { <AdminsPage /> });
        assert!(html.contains("Administrateurs"));
        assert!(html.contains("/superadmin/admins/new"));
    }
}
