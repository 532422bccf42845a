use crate::{api::ApiError, components::error::FieldError};
use leptos::*;

pub const INPUT_CLASS: &str = "mt-1 block w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-fg shadow-sm focus:border-action-primary-bg focus:outline-none focus:ring-2 focus:ring-action-primary-focus disabled:opacity-50";
const LABEL_CLASS: &str = "block text-sm font-medium text-fg-muted";

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    /// API field name; used for the input id and for matching field errors.
    field: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] required: bool,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] error: Option<Signal<Option<ApiError>>>,
) -> impl IntoView {
    let id = format!("field-{}", field.replace('.', "-"));
    view! {
        <div>
            <label for=id.clone() class=LABEL_CLASS>
                {label}
                {required.then_some(" *")}
            </label>
            <input
                id=id
                name=field
                type=input_type.unwrap_or("text")
                class=INPUT_CLASS
                required=required
                placeholder=placeholder.unwrap_or_default()
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            {error.map(|error| view! { <FieldError error=error field=field /> })}
        </div>
    }
}

#[component]
pub fn TextAreaField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    field: &'static str,
    #[prop(optional)] rows: Option<u32>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] error: Option<Signal<Option<ApiError>>>,
) -> impl IntoView {
    let id = format!("field-{}", field);
    view! {
        <div>
            <label for=id.clone() class=LABEL_CLASS>
                {label}
                {required.then_some(" *")}
            </label>
            <textarea
                id=id
                name=field
                rows=rows.unwrap_or(3)
                class=INPUT_CLASS
                required=required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
            {error.map(|error| view! { <FieldError error=error field=field /> })}
        </div>
    }
}

/// `options` are `(value, label)` pairs; an empty `value` is the "none" choice.
#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    field: &'static str,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] error: Option<Signal<Option<ApiError>>>,
) -> impl IntoView {
    let id = format!("field-{}", field);
    view! {
        <div>
            <label for=id.clone() class=LABEL_CLASS>
                {label}
                {required.then_some(" *")}
            </label>
            <select
                id=id
                name=field
                class=INPUT_CLASS
                required=required
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                {placeholder.map(|text| view! {
                    <option value="" selected=move || value.get().is_empty()>{text}</option>
                })}
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|(option_value, option_label)| {
                            let selected = value.get() == option_value;
                            view! { <option value=option_value selected=selected>{option_label}</option> }
                        })
                        .collect_view()
                }}
            </select>
            {error.map(|error| view! { <FieldError error=error field=field /> })}
        </div>
    }
}

#[component]
pub fn SearchInput(
    value: RwSignal<String>,
    #[prop(optional)] placeholder: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="relative w-full sm:w-72">
            <span class="absolute inset-y-0 left-3 flex items-center text-fg-muted">
                <i class="fas fa-search text-xs"></i>
            </span>
            <input
                type="search"
                aria-label="Rechercher"
                class=format!("{} pl-8 mt-0", INPUT_CLASS)
                placeholder=placeholder.unwrap_or("Rechercher…")
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn text_field_renders_label_and_field_error() {
        let html = render_to_string(move || {
            let value = create_rw_signal("RH".to_string());
            let error = create_rw_signal(Some(ApiError::field("nom", "Nom déjà pris.")));
            view! {
                <TextField label="Nom" value=value field="nom" required=true error=error />
            }
        });
        assert!(html.contains("Nom"));
        assert!(html.contains("id=\"field-nom\""));
        assert!(html.contains("Nom déjà pris."));
    }

    #[test]
    fn select_field_marks_current_value() {
        let html = render_to_string(move || {
            let value = create_rw_signal("2".to_string());
            let options = Signal::derive(|| {
                vec![
                    ("1".to_string(), "Finance".to_string()),
                    ("2".to_string(), "Informatique".to_string()),
                ]
            });
            view! {
                <SelectField
                    label="Département"
                    value=value
                    field="departement"
                    options=options
                    placeholder="Aucun"
                />
            }
        });
        assert!(html.contains("Informatique"));
        assert!(html.contains("Aucun"));
        assert!(html.contains("selected"));
    }
}
