use crate::state::toast::use_toasts;
use leptos::*;

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();
    let items = toasts.items;

    view! {
        <div class="fixed bottom-4 right-4 z-[80] flex flex-col gap-2 w-80" aria-live="polite">
            <For each=move || items.get() key=|toast| toast.id let:toast>
                <div
                    role="status"
                    class=format!("flex items-start justify-between gap-3 rounded-md border px-4 py-3 shadow-lg text-sm {}", toast.kind.class())
                >
                    <span>{toast.message.clone()}</span>
                    <button
                        type="button"
                        aria-label="Fermer"
                        class="opacity-70 hover:opacity-100"
                        on:click=move |_| toasts.dismiss(toast.id)
                    >
                        {"✕"}
                    </button>
                </div>
            </For>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::toast::provide_toasts;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn viewport_lists_pending_toasts() {
        let html = render_to_string(move || {
            let toasts = provide_toasts();
            toasts.success("Département créé.");
            toasts.error("Suppression impossible.");
            view! { <ToastHost /> }
        });
        assert!(html.contains("Département créé."));
        assert!(html.contains("Suppression impossible."));
        assert!(html.contains("role=\"status\""));
    }
}
