use super::{repository::CrudRepository, OrgPage};
use crate::api::ApiError;
use crate::components::{
    common::{DetailRow, DANGER_ACTION, PRIMARY_ACTION, SECONDARY_ACTION},
    confirm_dialog::ConfirmDialog,
    error::InlineErrorMessage,
    layout::{LoadingSpinner, PageHeader},
};
use crate::state::{fetch::use_keyed_fetch, toast::use_toasts};
use crate::utils::browser;
use leptos::*;

fn missing_record() -> ApiError {
    ApiError::validation("Identifiant invalide.")
}

/// Detail screen with edit and delete actions.
pub fn org_detail<E: OrgPage>(id: Signal<Option<i64>>) -> impl IntoView {
    let repo = CrudRepository::<E>::from_context();
    let toasts = use_toasts();
    let navigate = browser::use_navigator();

    let fetch_repo = repo.clone();
    let fetch = use_keyed_fetch(
        move || id.get(),
        move |id| {
            let repo = fetch_repo.clone();
            async move {
                match id {
                    Some(id) => repo.get(id).await,
                    None => Err(missing_record()),
                }
            }
        },
    );

    let confirm_open = create_rw_signal(false);
    let delete_error = create_rw_signal(None::<ApiError>);
    let delete_action = create_action(move |id: &i64| {
        let repo = repo.clone();
        let id = *id;
        async move { repo.delete(id).await }
    });
    let deleting = delete_action.pending();

    create_effect(move |_| {
        if let Some(result) = delete_action.value().get() {
            confirm_open.set(false);
            match result {
                Ok(()) => {
                    toasts.success("Élément supprimé.");
                    navigate.call(E::BASE_PATH.to_string());
                }
                Err(err) => delete_error.set(Some(err)),
            }
        }
    });

    let confirm_message = Signal::derive(move || {
        let label = fetch.data().map(|item| item.label()).unwrap_or_default();
        format!("« {} » sera définitivement supprimé.", label)
    });

    view! {
        <PageHeader title=E::DETAIL_TITLE />
        <InlineErrorMessage error=Signal::derive(move || fetch.error()) />
        <InlineErrorMessage error=delete_error />
        {move || match fetch.data() {
            Some(item) => {
                let id = item.id();
                view! {
                    <div class="space-y-4">
                        <dl class="divide-y divide-border rounded-lg border border-border bg-surface-elevated px-4 shadow-sm">
                            {item
                                .detail_rows()
                                .into_iter()
                                .map(|(label, value)| view! { <DetailRow label=label>{value}</DetailRow> })
                                .collect_view()}
                        </dl>
                        <div class="flex flex-wrap gap-2">
                            <a href=E::BASE_PATH class=SECONDARY_ACTION>"Retour à la liste"</a>
                            <a href=E::edit_path(id) class=PRIMARY_ACTION>
                                <i class="fas fa-pen mr-2"></i>
                                "Modifier"
                            </a>
                            <button
                                type="button"
                                class=DANGER_ACTION
                                on:click=move |_| confirm_open.set(true)
                            >
                                <i class="fas fa-trash mr-2"></i>
                                "Supprimer"
                            </button>
                        </div>
                    </div>
                }
                .into_view()
            }
            None if fetch.loading() => view! { <LoadingSpinner /> }.into_view(),
            None => view! { <a href=E::BASE_PATH class=SECONDARY_ACTION>"Retour à la liste"</a> }.into_view(),
        }}
        <ConfirmDialog
            is_open=confirm_open.into()
            title="Confirmer la suppression"
            message=confirm_message
            confirm_label="Supprimer"
            confirm_disabled=deleting
            on_confirm=Callback::new(move |_| {
                if let Some(id) = id.get_untracked() {
                    delete_error.set(None);
                    delete_action.dispatch(id);
                }
            })
            on_cancel=Callback::new(move |_| confirm_open.set(false))
            destructive=true
        />
    }
}
