use leptos::*;

pub mod utils;
pub mod view_model;

mod panel;

pub use panel::LoginPanel;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! { <LoginPanel /> }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn login_page_links_to_password_reset() {
        let html = render_to_string(|| view! { <LoginPage /> });
        assert!(html.contains("Se connecter"));
        assert!(html.contains("href=\"/forgot-password\""));
        assert!(html.contains("field-email"));
    }
}
