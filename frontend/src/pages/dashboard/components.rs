use super::utils::OrgCounts;
use crate::components::layout::LoadingSpinner;
use leptos::*;

/// Counter tile linking to the matching list.
#[component]
pub fn StatCard(
    label: &'static str,
    icon: &'static str,
    href: &'static str,
    #[prop(into)] value: Signal<Option<usize>>,
) -> impl IntoView {
    view! {
        <a
            href=href
            class="flex items-center gap-4 rounded-lg border border-border bg-surface-elevated p-5 shadow-sm hover:bg-surface-muted"
        >
            <span class="flex h-12 w-12 items-center justify-center rounded-full bg-surface-muted text-action-primary-bg">
                <i class=format!("fas {} text-lg", icon)></i>
            </span>
            <span>
                <span class="block text-sm text-fg-muted">{label}</span>
                <span class="block text-2xl font-semibold text-fg">
                    {move || match value.get() {
                        Some(count) => count.to_string(),
                        None => "…".to_string(),
                    }}
                </span>
            </span>
        </a>
    }
}

#[component]
pub fn OrgCountCards(#[prop(into)] counts: Signal<Option<OrgCounts>>) -> impl IntoView {
    view! {
        <div class="grid gap-4 sm:grid-cols-3">
            <StatCard
                label="Départements"
                icon="fa-building"
                href="/admin/departements"
                value=Signal::derive(move || counts.get().map(|c| c.departements))
            />
            <StatCard
                label="Postes"
                icon="fa-briefcase"
                href="/admin/postes"
                value=Signal::derive(move || counts.get().map(|c| c.postes))
            />
            <StatCard
                label="Employés"
                icon="fa-users"
                href="/admin/employes"
                value=Signal::derive(move || counts.get().map(|c| c.employes))
            />
        </div>
    }
}

#[component]
pub fn DashboardSection(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class="space-y-3">
            <h2 class="text-lg font-semibold text-fg">{title}</h2>
            {children()}
        </section>
    }
}

/// Spinner while `loading`, otherwise nothing.
#[component]
pub fn LoadingHint(#[prop(into)] loading: Signal<bool>) -> impl IntoView {
    view! {
        <Show when=move || loading.get()>
            <LoadingSpinner />
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn org_cards_show_counts_and_links() {
        let html = render_to_string(|| {
            let counts = Signal::derive(|| {
                Some(OrgCounts {
                    departements: 4,
                    postes: 9,
                    employes: 4217,
                })
            });
            view! { <OrgCountCards counts=counts /> }
        });
        assert!(html.contains("/admin/postes"));
        assert!(html.contains("4217"));
    }

    #[test]
    fn unknown_count_shows_placeholder() {
        let html = render_to_string(|| {
            view! { <StatCard label="Test" icon="fa-x" href="/" value=Signal::derive(|| None) /> }
        });
        assert!(html.contains("…"));
    }
}
