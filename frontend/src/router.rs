use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::{ApiClient, Role},
    components::{
        common::PRIMARY_ACTION,
        guard::{RedirectIfAuthenticated, RequireRole},
        layout::Layout,
        toast::ToastHost,
    },
    pages::{
        dashboard::{AdminDashboardPage, EmployeeDashboardPage, SuperAdminDashboardPage},
        departements::{
            DepartementDetailPage, DepartementEditPage, DepartementNewPage, DepartementsPage,
        },
        employes::{EmployeDetailPage, EmployeEditPage, EmployeNewPage, EmployesPage},
        forgot_password::ForgotPasswordPage,
        leave_review::{LeaveReviewDetailPage, LeaveReviewListPage},
        leaves::{EmployeeLeaveDetailPage, EmployeeLeaveEditPage, EmployeeLeavesPage},
        login::LoginPage,
        postes::{PosteDetailPage, PosteEditPage, PosteNewPage, PostesPage},
        profile::ProfilePage,
        staff::{
            AdminDetailPage, AdminEditPage, AdminNewPage, AdminsPage, SuperAdminDetailPage,
            SuperAdminEditPage, SuperAdminNewPage, SuperAdminsPage,
        },
    },
    state::{auth::AuthProvider, theme::provide_theme, toast::provide_toasts},
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/forgot-password",
    "/profile",
    "/employee/dashboard",
    "/employee/leaves",
    "/employee/leaves/:id",
    "/employee/leaves/:id/edit",
    "/admin/dashboard",
    "/admin/departements",
    "/admin/departements/new",
    "/admin/departements/:id",
    "/admin/departements/:id/edit",
    "/admin/postes",
    "/admin/postes/new",
    "/admin/postes/:id",
    "/admin/postes/:id/edit",
    "/admin/employes",
    "/admin/employes/new",
    "/admin/employes/:id",
    "/admin/employes/:id/edit",
    "/superadmin/dashboard",
    "/superadmin/leaves",
    "/superadmin/leaves/:id",
    "/superadmin/admins",
    "/superadmin/admins/new",
    "/superadmin/admins/:id",
    "/superadmin/admins/:id/edit",
    "/superadmin/superadmins",
    "/superadmin/superadmins/new",
    "/superadmin/superadmins/:id",
    "/superadmin/superadmins/:id/edit",
];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/forgot-password"];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    "/profile",
    "/employee/dashboard",
    "/employee/leaves",
    "/employee/leaves/:id",
    "/employee/leaves/:id/edit",
    "/admin/dashboard",
    "/admin/departements",
    "/admin/departements/new",
    "/admin/departements/:id",
    "/admin/departements/:id/edit",
    "/admin/postes",
    "/admin/postes/new",
    "/admin/postes/:id",
    "/admin/postes/:id/edit",
    "/admin/employes",
    "/admin/employes/new",
    "/admin/employes/:id",
    "/admin/employes/:id/edit",
    "/superadmin/dashboard",
    "/superadmin/leaves",
    "/superadmin/leaves/:id",
    "/superadmin/admins",
    "/superadmin/admins/new",
    "/superadmin/admins/:id",
    "/superadmin/admins/:id/edit",
    "/superadmin/superadmins",
    "/superadmin/superadmins/new",
    "/superadmin/superadmins/:id",
    "/superadmin/superadmins/:id/edit",
];

const EVERYONE: &[Role] = &[];
const EMPLOYEE: &[Role] = &[Role::Employee];
const ADMIN: &[Role] = &[Role::Admin];
const STAFF: &[Role] = &[Role::Admin, Role::SuperAdmin];
const SUPERADMIN: &[Role] = &[Role::SuperAdmin];

/// Roles admitted on a protected path; `None` for public or unknown paths.
pub fn required_roles(path: &str) -> Option<&'static [Role]> {
    if !PROTECTED_ROUTE_PATHS.contains(&path) {
        return None;
    }
    let roles = if path == "/profile" {
        EVERYONE
    } else if path.starts_with("/employee/") {
        EMPLOYEE
    } else if path == "/admin/dashboard" {
        ADMIN
    } else if path.starts_with("/admin/") {
        STAFF
    } else {
        SUPERADMIN
    };
    Some(roles)
}

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new());
    provide_theme();
    provide_toasts();
    view! {
        <Title text="GestionRH"/>
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=|| public(LoginPage)/>
                    <Route path="/forgot-password" view=|| public(ForgotPasswordPage)/>
                    <Route path="/profile" view=|| protected("/profile", ProfilePage)/>

                    <Route path="/employee/dashboard" view=|| protected("/employee/dashboard", EmployeeDashboardPage)/>
                    <Route path="/employee/leaves" view=|| protected("/employee/leaves", EmployeeLeavesPage)/>
                    <Route path="/employee/leaves/:id" view=|| protected("/employee/leaves/:id", EmployeeLeaveDetailPage)/>
                    <Route path="/employee/leaves/:id/edit" view=|| protected("/employee/leaves/:id/edit", EmployeeLeaveEditPage)/>

                    <Route path="/admin/dashboard" view=|| protected("/admin/dashboard", AdminDashboardPage)/>
                    <Route path="/admin/departements" view=|| protected("/admin/departements", DepartementsPage)/>
                    <Route path="/admin/departements/new" view=|| protected("/admin/departements/new", DepartementNewPage)/>
                    <Route path="/admin/departements/:id" view=|| protected("/admin/departements/:id", DepartementDetailPage)/>
                    <Route path="/admin/departements/:id/edit" view=|| protected("/admin/departements/:id/edit", DepartementEditPage)/>
                    <Route path="/admin/postes" view=|| protected("/admin/postes", PostesPage)/>
                    <Route path="/admin/postes/new" view=|| protected("/admin/postes/new", PosteNewPage)/>
                    <Route path="/admin/postes/:id" view=|| protected("/admin/postes/:id", PosteDetailPage)/>
                    <Route path="/admin/postes/:id/edit" view=|| protected("/admin/postes/:id/edit", PosteEditPage)/>
                    <Route path="/admin/employes" view=|| protected("/admin/employes", EmployesPage)/>
                    <Route path="/admin/employes/new" view=|| protected("/admin/employes/new", EmployeNewPage)/>
                    <Route path="/admin/employes/:id" view=|| protected("/admin/employes/:id", EmployeDetailPage)/>
                    <Route path="/admin/employes/:id/edit" view=|| protected("/admin/employes/:id/edit", EmployeEditPage)/>

                    <Route path="/superadmin/dashboard" view=|| protected("/superadmin/dashboard", SuperAdminDashboardPage)/>
                    <Route path="/superadmin/leaves" view=|| protected("/superadmin/leaves", LeaveReviewListPage)/>
                    <Route path="/superadmin/leaves/:id" view=|| protected("/superadmin/leaves/:id", LeaveReviewDetailPage)/>
                    <Route path="/superadmin/admins" view=|| protected("/superadmin/admins", AdminsPage)/>
                    <Route path="/superadmin/admins/new" view=|| protected("/superadmin/admins/new", AdminNewPage)/>
                    <Route path="/superadmin/admins/:id" view=|| protected("/superadmin/admins/:id", AdminDetailPage)/>
                    <Route path="/superadmin/admins/:id/edit" view=|| protected("/superadmin/admins/:id/edit", AdminEditPage)/>
                    <Route path="/superadmin/superadmins" view=|| protected("/superadmin/superadmins", SuperAdminsPage)/>
                    <Route path="/superadmin/superadmins/new" view=|| protected("/superadmin/superadmins/new", SuperAdminNewPage)/>
                    <Route path="/superadmin/superadmins/:id" view=|| protected("/superadmin/superadmins/:id", SuperAdminDetailPage)/>
                    <Route path="/superadmin/superadmins/:id/edit" view=|| protected("/superadmin/superadmins/:id/edit", SuperAdminEditPage)/>

                    <Route path="/*any" view=NotFoundPage/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

fn public<F, IV>(page: F) -> View
where
    F: Fn() -> IV + Copy + 'static,
    IV: IntoView,
{
    view! {
        <RedirectIfAuthenticated>
            {page()}
            <ToastHost/>
        </RedirectIfAuthenticated>
    }
    .into_view()
}

fn protected<F, IV>(path: &'static str, page: F) -> View
where
    F: Fn() -> IV + Copy + 'static,
    IV: IntoView,
{
    let roles = required_roles(path).unwrap_or(EVERYONE).to_vec();
    view! {
        <RequireRole roles=roles>
            <Layout>{page()}</Layout>
        </RequireRole>
    }
    .into_view()
}

#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col items-center justify-center gap-4 bg-surface">
            <h1 class="text-3xl font-bold text-fg">"Page introuvable"</h1>
            <p class="text-fg-muted">"La page demandée n'existe pas."</p>
            <a href="/" class=PRIMARY_ACTION>"Retour à l'accueil"</a>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::layout::nav_items_for;
    use std::collections::HashSet;

    const ALL_ROLES: [Role; 3] = [Role::Employee, Role::Admin, Role::SuperAdmin];

    #[test]
    fn route_paths_include_org_and_staff_routes() {
        assert!(ROUTE_PATHS.contains(&"/admin/postes/:id/edit"));
        assert!(ROUTE_PATHS.contains(&"/superadmin/superadmins/new"));
        assert!(ROUTE_PATHS.contains(&"/forgot-password"));
    }

    #[test]
    fn protected_and_public_routes_partition_all() {
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        for path in PROTECTED_ROUTE_PATHS.iter().chain(PUBLIC_ROUTE_PATHS) {
            assert!(all.contains(path), "path missing from ROUTE_PATHS: {}", path);
        }
        assert_eq!(
            PROTECTED_ROUTE_PATHS.len() + PUBLIC_ROUTE_PATHS.len(),
            ROUTE_PATHS.len()
        );
        for path in PUBLIC_ROUTE_PATHS {
            assert!(!PROTECTED_ROUTE_PATHS.contains(path));
        }
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }

    #[test]
    fn every_landing_page_admits_its_role() {
        for role in ALL_ROLES {
            let roles = required_roles(role.landing_path()).expect("landing is protected");
            assert!(roles.contains(&role), "{:?}", role);
        }
    }

    #[test]
    fn sidebar_links_resolve_to_routes_the_role_may_open() {
        for role in ALL_ROLES {
            for item in nav_items_for(role) {
                let roles = required_roles(item.href)
                    .unwrap_or_else(|| panic!("{} is not a protected route", item.href));
                assert!(
                    roles.is_empty() || roles.contains(&role),
                    "{:?} cannot open {}",
                    role,
                    item.href
                );
            }
        }
    }

    #[test]
    fn role_areas_are_segregated() {
        assert_eq!(required_roles("/employee/leaves/:id"), Some(EMPLOYEE));
        assert_eq!(required_roles("/admin/employes/new"), Some(STAFF));
        assert_eq!(required_roles("/superadmin/leaves/:id"), Some(SUPERADMIN));
        assert_eq!(required_roles("/profile"), Some(EVERYONE));
        assert_eq!(required_roles("/"), None);
    }
}
