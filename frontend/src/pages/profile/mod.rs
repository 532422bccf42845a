use leptos::*;

pub mod repository;
pub mod view_model;

mod panel;

pub use panel::ProfilePanel;

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! { <ProfilePanel /> }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{employee_user, provide_auth};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn profile_shows_account_and_password_forms() {
        let html = render_to_string(|| {
            provide_auth(Some(employee_user()));
            view! { <ProfilePage /> }
        });
        assert!(html.contains("emma@rh.fr"));
        assert!(html.contains("Employé"));
        assert!(html.contains("field-old_password"));
        assert!(html.contains("Changer le mot de passe"));
    }
}
