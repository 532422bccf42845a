use leptos::*;

pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::ForgotPasswordPanel;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    view! { <ForgotPasswordPanel /> }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn wizard_starts_on_the_email_step() {
        let html = render_to_string(|| view! { <ForgotPasswordPage /> });
        assert!(html.contains("Recevoir un code"));
        assert!(html.contains("field-email"));
        assert!(!html.contains("field-otp"));
        assert!(html.contains("3. Nouveau mot de passe"));
    }
}
