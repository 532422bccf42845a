//! Role landing pages.

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::{AdminDashboardPage, EmployeeDashboardPage, SuperAdminDashboardPage};

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{employee_user, provide_auth, superadmin_user};
    use crate::test_support::ssr::render_to_string;
    use leptos::*;

    #[test]
    fn employee_dashboard_greets_and_links_to_leaves() {
        let html = render_to_string(|| {
            provide_auth(Some(employee_user()));
            view! { <EmployeeDashboardPage /> }
        });
        assert!(html.contains("Bonjour, Emma"));
        assert!(html.contains("/employee/leaves"));
        assert!(html.contains("En attente"));
    }

    #[test]
    fn superadmin_dashboard_links_to_review_list() {
        let html = render_to_string(|| {
            provide_auth(Some(superadmin_user()));
            view! { <SuperAdminDashboardPage /> }
        });
        assert!(html.contains("Demandes en attente"));
        assert!(html.contains("/superadmin/leaves"));
        assert!(html.contains("/superadmin/admins"));
    }
}
