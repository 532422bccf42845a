use crate::api::{ApiError, LeaveRequest};
use crate::components::{
    common::{PRIMARY_ACTION, SECONDARY_ACTION},
    confirm_dialog::Modal,
    error::InlineErrorMessage,
    forms::{SelectField, TextAreaField, TextField},
};
use crate::pages::leaves::{
    repository::LeaveRepository,
    utils::{leave_type_options, LeaveFormInput, LeaveFormState},
    view_model::submit_new_leave,
};
use crate::utils::dates::format_duration_fr;
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LeaveFormFields(
    form: LeaveFormState,
    #[prop(into)] error: Signal<Option<ApiError>>,
) -> impl IntoView {
    let duration = move || {
        form.duration()
            .map(format_duration_fr)
            .unwrap_or_else(|| "—".to_string())
    };

    view! {
        <div class="space-y-4">
            <SelectField
                label="Type de congé"
                value=form.type_signal()
                field="type_conge"
                options=Signal::derive(leave_type_options)
                required=true
                error=error
            />
            <div class="grid grid-cols-1 gap-4 sm:grid-cols-2">
                <TextField
                    label="Date de début"
                    value=form.start_signal()
                    field="date_debut"
                    input_type="date"
                    required=true
                    error=error
                />
                <TextField
                    label="Date de fin"
                    value=form.end_signal()
                    field="date_fin"
                    input_type="date"
                    required=true
                    error=error
                />
            </div>
            <p class="text-sm text-fg-muted">
                "Durée : " <span class="font-medium text-fg">{duration}</span>
            </p>
            <TextAreaField
                label="Description"
                value=form.description_signal()
                field="description"
                rows=3
                error=error
            />
        </div>
    }
}

/// New-request dialog. `on_created` runs after the modal has closed and reset.
#[component]
pub fn CreateLeaveModal(is_open: RwSignal<bool>, on_created: Callback<LeaveRequest>) -> impl IntoView {
    let form = LeaveFormState::default();
    let error = create_rw_signal(None::<ApiError>);
    let repo = LeaveRepository::from_context();

    let create_action = create_action(move |input: &LeaveFormInput| {
        let repo = repo.clone();
        let input = input.clone();
        async move { submit_new_leave(&repo, input).await }
    });
    let pending = create_action.pending();

    create_effect(move |_| {
        if let Some(result) = create_action.value().get() {
            match result {
                Ok(leave) => {
                    error.set(None);
                    form.reset();
                    is_open.set(false);
                    on_created.call(leave);
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    let close = Callback::new(move |_| {
        error.set(None);
        is_open.set(false);
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        create_action.dispatch(form.snapshot());
    };

    view! {
        <Modal
            is_open=is_open.into()
            title="Nouvelle demande de congé"
            on_close=close
            max_width="max-w-lg"
        >
            <form class="space-y-4" on:submit=on_submit>
                <InlineErrorMessage error=error />
                <LeaveFormFields form=form error=error />
                <div class="flex justify-end gap-2">
                    <button type="button" class=SECONDARY_ACTION on:click=move |_| close.call(())>
                        "Annuler"
                    </button>
                    <button
                        type="submit"
                        class=PRIMARY_ACTION
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Envoi…" } else { "Soumettre" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn form_fields_show_every_input_and_duration() {
        let html = render_to_string(|| {
            let form = LeaveFormState::default();
            form.start_signal().set("2024-01-01".into());
            form.end_signal().set("2024-01-05".into());
            let error = create_rw_signal(None::<ApiError>);
            view! { <LeaveFormFields form=form error=error /> }
        });
        assert!(html.contains("field-type_conge"));
        assert!(html.contains("field-date_debut"));
        assert!(html.contains("field-date_fin"));
        assert!(html.contains("5 jours"));
        assert!(html.contains("Congé payé"));
    }

    #[test]
    fn modal_renders_when_open() {
        let html = render_to_string(|| {
            let is_open = create_rw_signal(true);
            view! { <CreateLeaveModal is_open=is_open on_created=Callback::new(|_| {}) /> }
        });
        assert!(html.contains("Nouvelle demande de congé"));
        assert!(html.contains("Soumettre"));
    }
}
