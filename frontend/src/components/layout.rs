use crate::{
    api::Role,
    components::{theme::ThemeToggle, toast::ToastHost},
    state::auth::{use_auth, use_logout},
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

const fn nav(href: &'static str, label: &'static str, icon: &'static str) -> NavItem {
    NavItem { href, label, icon }
}

/// Sidebar entries for each role, in display order.
pub fn nav_items_for(role: Role) -> Vec<NavItem> {
    match role {
        Role::Employee => vec![
            nav("/employee/dashboard", "Tableau de bord", "fa-gauge"),
            nav("/employee/leaves", "Mes congés", "fa-umbrella-beach"),
            nav("/profile", "Mon profil", "fa-user"),
        ],
        Role::Admin => vec![
            nav("/admin/dashboard", "Tableau de bord", "fa-gauge"),
            nav("/admin/departements", "Départements", "fa-sitemap"),
            nav("/admin/postes", "Postes", "fa-briefcase"),
            nav("/admin/employes", "Employés", "fa-users"),
            nav("/profile", "Mon profil", "fa-user"),
        ],
        Role::SuperAdmin => vec![
            nav("/superadmin/dashboard", "Tableau de bord", "fa-gauge"),
            nav("/superadmin/leaves", "Demandes de congé", "fa-calendar-check"),
            nav("/admin/departements", "Départements", "fa-sitemap"),
            nav("/admin/postes", "Postes", "fa-briefcase"),
            nav("/admin/employes", "Employés", "fa-users"),
            nav("/superadmin/admins", "Administrateurs", "fa-user-shield"),
            nav("/superadmin/superadmins", "Super administrateurs", "fa-crown"),
            nav("/profile", "Mon profil", "fa-user"),
        ],
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let (menu_open, set_menu_open) = create_signal(false);
    let on_logout = use_logout();

    let user_name = move || {
        auth.get()
            .user
            .as_ref()
            .map(|user| user.full_name())
            .unwrap_or_default()
    };
    let role_label = move || auth.get().role().map(|role| role.label()).unwrap_or_default();
    let items = move || auth.get().role().map(nav_items_for).unwrap_or_default();

    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center gap-3">
                        <button
                            type="button"
                            class="lg:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                            on:click=toggle_menu
                            aria-expanded=move || menu_open.get()
                            aria-controls="side-nav"
                        >
                            <span class="sr-only">
                                {move || if menu_open.get() { "Fermer le menu" } else { "Ouvrir le menu" }}
                            </span>
                            <i class="fas fa-bars"></i>
                        </button>
                        <h1 class="text-xl font-semibold text-fg">"GestionRH"</h1>
                    </div>
                    <div class="flex items-center gap-4">
                        <div class="hidden sm:flex flex-col items-end">
                            <span class="text-sm font-medium text-fg">{user_name}</span>
                            <span class="text-xs text-fg-muted">{role_label}</span>
                        </div>
                        <ThemeToggle />
                        <button
                            type="button"
                            class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                            on:click=move |_| on_logout.call(())
                        >
                            <i class="fas fa-right-from-bracket mr-1"></i>
                            "Déconnexion"
                        </button>
                    </div>
                </div>
            </div>
            <Show when=move || menu_open.get()>
                <nav id="side-nav" class="lg:hidden border-t border-border px-4 py-3 space-y-1">
                    <For each=items key=|item| item.href let:item>
                        <a
                            href=item.href
                            class="block text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                            on:click=move |_| set_menu_open.set(false)
                        >
                            {item.label}
                        </a>
                    </For>
                </nav>
            </Show>
        </header>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let (auth, _) = use_auth();
    let items = move || auth.get().role().map(nav_items_for).unwrap_or_default();

    view! {
        <aside class="hidden lg:block w-64 shrink-0 border-r border-border bg-surface-elevated min-h-[calc(100vh-4rem)]">
            <nav class="px-3 py-6 space-y-1">
                <For each=items key=|item| item.href let:item>
                    <a
                        href=item.href
                        class="flex items-center gap-3 text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                    >
                        <i class=format!("fas {} w-4", item.icon)></i>
                        {item.label}
                    </a>
                </For>
            </nav>
        </aside>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <div class="flex">
                <Sidebar/>
                <main class="flex-1 max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                    {children()}
                </main>
            </div>
            <ToastHost/>
        </div>
    }
}

#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional, into)] actions: Option<View>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-3 sm:flex-row sm:items-center sm:justify-between mb-6">
            <div>
                <h2 class="text-2xl font-bold text-fg">{title}</h2>
                {subtitle.map(|text| view! { <p class="text-sm text-fg-muted mt-1">{text}</p> })}
            </div>
            {actions.map(|actions| view! { <div class="flex flex-wrap gap-2">{actions}</div> })}
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-exclamation-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-check-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, provide_auth};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn layout_renders_sidebar_and_children() {
        let html = render_to_string(move || {
            provide_auth(Some(admin_user()));
            view! { <Layout><div>"contenu"</div></Layout> }
        });
        assert!(html.contains("contenu"));
        assert!(html.contains("/admin/postes"));
        assert!(html.contains("Adam Moreau"));
        assert!(html.contains("Déconnexion"));
    }

    #[test]
    fn renders_feedback_components() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <LoadingSpinner />
                    <ErrorMessage message="erreur" />
                    <SuccessMessage message="réussi" />
                </div>
            }
        });
        assert!(html.contains("animate-spin"));
        assert!(html.contains("erreur"));
        assert!(html.contains("réussi"));
    }
}
