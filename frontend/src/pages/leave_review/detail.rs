use super::{components::ReviewDialog, utils::ReviewDecision};
use crate::api::ApiError;
use crate::components::{
    common::{DANGER_ACTION, PRIMARY_ACTION, SECONDARY_ACTION},
    confirm_dialog::ConfirmDialog,
    error::InlineErrorMessage,
    layout::{LoadingSpinner, PageHeader},
};
use crate::pages::leaves::{components::detail::LeaveSummary, missing_id, repository::LeaveRepository};
use crate::pages::use_id_param;
use crate::state::{fetch::use_keyed_fetch, toast::use_toasts};
use crate::utils::browser;
use leptos::*;

const LIST_PATH: &str = "/superadmin/leaves";

#[component]
pub fn LeaveReviewDetailPage() -> impl IntoView {
    view! { <LeaveReviewDetail id=use_id_param() /> }
}

#[component]
pub fn LeaveReviewDetail(#[prop(into)] id: Signal<Option<i64>>) -> impl IntoView {
    let repo = LeaveRepository::from_context();
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
                    None => Err(missing_id()),
                }
            }
        },
    );

    let decision = create_rw_signal(None::<ReviewDecision>);
    let on_reviewed = Callback::new(move |done: ReviewDecision| {
        toasts.success(done.success_message());
        fetch.refetch();
    });

    let delete_open = create_rw_signal(false);
    let delete_error = create_rw_signal(None::<ApiError>);
    let delete_action = create_action(move |id: &i64| {
        let repo = repo.clone();
        let id = *id;
        async move { repo.delete(id).await }
    });
    let deleting = delete_action.pending();

    create_effect(move |_| {
        if let Some(result) = delete_action.value().get() {
            delete_open.set(false);
            match result {
                Ok(()) => {
                    toasts.success("La demande a été supprimée.");
                    navigate.call(LIST_PATH.to_string());
                }
                Err(err) => delete_error.set(Some(err)),
            }
        }
    });

    let confirm_delete = Callback::new(move |_| {
        if let Some(id) = id.get_untracked() {
            delete_error.set(None);
            delete_action.dispatch(id);
        }
    });

    let pending_request = move || fetch.data().map(|leave| leave.is_pending()).unwrap_or(false);

    view! {
        <PageHeader title="Demande de congé" />
        <InlineErrorMessage error=Signal::derive(move || fetch.error()) />
        <InlineErrorMessage error=delete_error />
        {move || match fetch.data() {
            Some(leave) => view! { <LeaveSummary leave=leave show_employee=true /> }.into_view(),
            None if fetch.loading() => view! { <LoadingSpinner /> }.into_view(),
            None => ().into_view(),
        }}
        <div class="mt-4 flex flex-wrap gap-2">
            <a href=LIST_PATH class=SECONDARY_ACTION>"Retour à la liste"</a>
            <Show when=pending_request>
                <button
                    type="button"
                    class=PRIMARY_ACTION
                    on:click=move |_| decision.set(Some(ReviewDecision::Approve))
                >
                    <i class="fas fa-check mr-2"></i>
                    "Approuver"
                </button>
                <button
                    type="button"
                    class=DANGER_ACTION
                    on:click=move |_| decision.set(Some(ReviewDecision::Reject))
                >
                    <i class="fas fa-xmark mr-2"></i>
                    "Rejeter"
                </button>
            </Show>
            <Show when=move || fetch.data().is_some()>
                <button type="button" class=SECONDARY_ACTION on:click=move |_| delete_open.set(true)>
                    <i class="fas fa-trash mr-2"></i>
                    "Supprimer"
                </button>
            </Show>
        </div>
        <ReviewDialog
            decision=decision
            leave=Signal::derive(move || fetch.data())
            on_reviewed=on_reviewed
        />
        <ConfirmDialog
            is_open=delete_open.into()
            title="Supprimer la demande"
            message="Cette demande de congé sera définitivement supprimée."
            confirm_label="Supprimer"
            confirm_disabled=deleting
            on_confirm=confirm_delete
            on_cancel=Callback::new(move |_| delete_open.set(false))
            destructive=true
        />
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn detail_starts_with_back_link_and_no_actions() {
        let html = render_to_string(|| view! { <LeaveReviewDetail id=Signal::derive(|| Some(3)) /> });
        assert!(html.contains("Retour à la liste"));
        assert!(!html.contains("Approuver"));
    }
}
