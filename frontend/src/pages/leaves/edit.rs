use super::{
    components::form::LeaveFormFields,
    detail::missing_id,
    repository::LeaveRepository,
    utils::{edit_gate, EditGate, LeaveFormInput, LeaveFormState},
    view_model::submit_leave_update,
};
use crate::api::ApiError;
use crate::components::{
    common::{PRIMARY_ACTION, SECONDARY_ACTION},
    error::InlineErrorMessage,
    layout::{LoadingSpinner, PageHeader},
};
use crate::pages::use_id_param;
use crate::state::{fetch::use_keyed_fetch, toast::use_toasts};
use crate::utils::browser;
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn EmployeeLeaveEditPage() -> impl IntoView {
    view! { <EmployeeLeaveEdit id=use_id_param() /> }
}

#[component]
pub fn EmployeeLeaveEdit(#[prop(into)] id: Signal<Option<i64>>) -> impl IntoView {
    let repo = LeaveRepository::from_context();
    let toasts = use_toasts();
    let navigate = browser::use_navigator();
    let form = LeaveFormState::default();
    let error = create_rw_signal(None::<ApiError>);

    let fetch_repo = repo.clone();
    let fetch = use_keyed_fetch(
        move || id.get(),
        move |id| {
            let repo = fetch_repo.clone();
            async move {
                match id {
                    Some(id) => repo.get(id).await,
                    None => Err(missing_id()),
                }
            }
        },
    );

    let gate = create_memo(move |_| fetch.data().map(|leave| edit_gate(&leave)));

    create_effect(move |loaded_id: Option<Option<i64>>| {
        let loaded_id = loaded_id.flatten();
        match (fetch.data(), gate.get()) {
            (Some(leave), Some(EditGate::Form)) => {
                if loaded_id != Some(leave.id) {
                    form.load_from(&leave);
                }
                Some(leave.id)
            }
            (_, Some(EditGate::Redirect(path))) => {
                navigate.call(path);
                loaded_id
            }
            _ => loaded_id,
        }
    });

    let update_action = create_action(move |(id, input): &(i64, LeaveFormInput)| {
        let repo = repo.clone();
        let (id, input) = (*id, input.clone());
        async move { submit_leave_update(&repo, id, input).await }
    });
    let pending = update_action.pending();

    create_effect(move |_| {
        if let Some(result) = update_action.value().get() {
            match result {
                Ok(leave) => {
                    error.set(None);
                    toasts.success("Demande de congé mise à jour.");
                    navigate.call(format!("/employee/leaves/{}", leave.id));
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        if let Some(id) = id.get_untracked() {
            update_action.dispatch((id, form.snapshot()));
        }
    };

    let back_href = move || {
        id.get()
            .map(|id| format!("/employee/leaves/{}", id))
            .unwrap_or_else(|| "/employee/leaves".to_string())
    };

    view! {
        <PageHeader title="Modifier la demande" />
        <InlineErrorMessage error=Signal::derive(move || fetch.error()) />
        <Show
            when=move || gate.get() == Some(EditGate::Form)
            fallback=move || {
                if fetch.loading() { view! { <LoadingSpinner /> }.into_view() } else { ().into_view() }
            }
        >
            <form
                class="space-y-4 rounded-lg border border-border bg-surface-elevated p-6 shadow-sm"
                on:submit=on_submit
            >
                <InlineErrorMessage error=error />
                <LeaveFormFields form=form error=error />
                <div class="flex justify-end gap-2">
                    <a href=back_href class=SECONDARY_ACTION>"Annuler"</a>
                    <button type="submit" class=PRIMARY_ACTION disabled=move || pending.get()>
                        {move || if pending.get() { "Enregistrement…" } else { "Enregistrer" }}
                    </button>
                </div>
            </form>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn form_is_hidden_until_the_request_is_loaded() {
        let html = render_to_string(|| view! { <EmployeeLeaveEdit id=Signal::derive(|| Some(4)) /> });
        assert!(html.contains("Modifier la demande"));
        assert!(!html.contains("field-date_debut"));
    }
}
