use crate::api::ApiError;
use leptos::*;

/// Banner for a failed request. Field errors also list each message so the
/// user sees them even when the form has no matching input.
#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div
                role="alert"
                class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2"
            >
                <div class="font-bold">{move || error.get().map(|e| e.banner_message()).unwrap_or_default()}</div>
                {move || {
                    error
                        .get()
                        .and_then(|e| e.field_errors().cloned())
                        .map(|errors| {
                            view! {
                                <ul class="list-disc list-inside text-sm">
                                    {errors
                                        .into_iter()
                                        .filter(|(field, _)| field != "non_field_errors")
                                        .map(|(field, messages)| {
                                            view! { <li>{format!("{} : {}", field, messages.join(" "))}</li> }
                                        })
                                        .collect_view()}
                                </ul>
                            }
                            .into_view()
                        })
                        .unwrap_or_else(|| ().into_view())
                }}
            </div>
        </Show>
    }
}

/// Message under one input, read from the last field-error response.
#[component]
pub fn FieldError(
    #[prop(into)] error: Signal<Option<ApiError>>,
    field: &'static str,
) -> impl IntoView {
    let message = move || error.get().and_then(|e| e.field_message(field));
    view! {
        <Show when=move || message().is_some()>
            <p class="mt-1 text-xs text-status-error-text">{move || message().unwrap_or_default()}</p>
        </Show>
    }
}
