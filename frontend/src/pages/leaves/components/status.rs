use crate::api::LeaveStatus;
use crate::pages::leaves::utils::{StatusCounts, StatusFilter};
use leptos::*;

#[component]
pub fn StatusBadge(status: LeaveStatus) -> impl IntoView {
    view! {
        <span class=format!(
            "inline-flex items-center rounded-full border px-2.5 py-0.5 text-xs font-medium {}",
            status.badge_class()
        )>
            {status.label()}
        </span>
    }
}

#[component]
fn CountCard(label: &'static str, value: Signal<usize>, accent: &'static str) -> impl IntoView {
    view! {
        <div class="rounded-lg border border-border bg-surface-elevated p-4 shadow-sm">
            <p class="text-sm text-fg-muted">{label}</p>
            <p class=format!("mt-1 text-2xl font-semibold {}", accent)>{move || value.get()}</p>
        </div>
    }
}

#[component]
pub fn StatusCountCards(#[prop(into)] counts: Signal<StatusCounts>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 gap-4 md:grid-cols-4 mb-6">
            <CountCard label="Total" value=Signal::derive(move || counts.get().total) accent="text-fg" />
            <CountCard
                label="En attente"
                value=Signal::derive(move || counts.get().pending)
                accent="text-status-warning-text"
            />
            <CountCard
                label="Approuvées"
                value=Signal::derive(move || counts.get().approved)
                accent="text-status-success-text"
            />
            <CountCard
                label="Rejetées"
                value=Signal::derive(move || counts.get().rejected)
                accent="text-status-error-text"
            />
        </div>
    }
}

#[component]
pub fn StatusFilterSelect(value: RwSignal<String>) -> impl IntoView {
    view! {
        <select
            aria-label="Filtrer par statut"
            class=crate::components::forms::INPUT_CLASS
            on:change=move |ev| value.set(event_target_value(&ev))
        >
            {StatusFilter::CHOICES
                .into_iter()
                .map(|choice| {
                    view! {
                        <option
                            value=choice.as_value()
                            selected=move || value.get() == choice.as_value()
                        >
                            {choice.label()}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn badge_uses_status_label_and_colour() {
        let html = render_to_string(|| view! { <StatusBadge status=LeaveStatus::Rejete /> });
        assert!(html.contains("Rejeté"));
        assert!(html.contains("bg-status-error-bg"));
    }

    #[test]
    fn count_cards_render_each_total() {
        let html = render_to_string(|| {
            let counts = StatusCounts {
                total: 7,
                pending: 3,
                approved: 2,
                rejected: 2,
            };
            view! { <StatusCountCards counts=Signal::derive(move || counts) /> }
        });
        assert!(html.contains("En attente"));
        assert!(html.contains('7'));
        assert!(html.contains('3'));
    }
}
