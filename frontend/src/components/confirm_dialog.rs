use crate::components::common::{DANGER_ACTION, PRIMARY_ACTION, SECONDARY_ACTION};
use leptos::ev::KeyboardEvent;
use leptos::*;

fn label_or(text: String, fallback: &str) -> String {
    if text.trim().is_empty() {
        fallback.to_string()
    } else {
        text
    }
}

/// Modal shell: backdrop, title bar and Escape handling. Closing goes
/// through `on_close` so the owner decides what "cancel" means.
#[component]
pub fn Modal(
    is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    on_close: Callback<()>,
    #[prop(optional, into)] max_width: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    let panel_class = format!(
        "relative z-[71] w-full {} rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4",
        max_width.unwrap_or("max-w-md")
    );
    let panel_class = store_value(panel_class);
    let children = store_value(children);
    let title = Signal::derive(move || title.get());

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Fermer"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| on_close.call(())
                ></button>
                <div
                    class=panel_class.get_value()
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            on_close.call(());
                        }
                    }
                >
                    <div class="flex items-start justify-between gap-3">
                        <h2 class="text-lg font-semibold text-fg">{move || title.get()}</h2>
                        <button
                            type="button"
                            aria-label="Fermer"
                            class="text-fg-muted hover:text-fg"
                            on:click=move |_| on_close.call(())
                        >
                            {"✕"}
                        </button>
                    </div>
                    {children.with_value(|children| children())}
                </div>
            </div>
        </Show>
    }
}

#[component]
pub fn ConfirmDialog(
    is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(into)] message: MaybeSignal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] confirm_label: MaybeSignal<String>,
    #[prop(optional, into)] cancel_label: MaybeSignal<String>,
    #[prop(optional, into)] confirm_disabled: MaybeSignal<bool>,
    #[prop(optional)] destructive: bool,
) -> impl IntoView {
    let confirm_button_class = if destructive {
        DANGER_ACTION
    } else {
        PRIMARY_ACTION
    };
    let confirm_text = Signal::derive(move || label_or(confirm_label.get(), "Confirmer"));
    let cancel_text = Signal::derive(move || label_or(cancel_label.get(), "Annuler"));
    let message = Signal::derive(move || message.get());

    view! {
        <Modal is_open=is_open title=title on_close=on_cancel>
            <p class="text-sm text-fg-muted">{move || message.get()}</p>
            <div class="flex justify-end gap-2">
                <button
                    type="button"
                    class=SECONDARY_ACTION
                    on:click=move |_| on_cancel.call(())
                >
                    {move || cancel_text.get()}
                </button>
                <button
                    type="button"
                    class=confirm_button_class
                    disabled=move || confirm_disabled.get()
                    on:click=move |_| on_confirm.call(())
                >
                    {move || confirm_text.get()}
                </button>
            </div>
        </Modal>
    }
}
