use super::{components::detail::LeaveSummary, repository::LeaveRepository};
use crate::api::ApiError;
use crate::components::{
    common::{PRIMARY_ACTION, SECONDARY_ACTION},
    error::InlineErrorMessage,
    layout::{LoadingSpinner, PageHeader},
};
use crate::pages::use_id_param;
use crate::state::fetch::use_keyed_fetch;
use leptos::*;

pub(crate) fn missing_id() -> ApiError {
    ApiError::validation("Identifiant de demande invalide.")
}

#[component]
pub fn EmployeeLeaveDetailPage() -> impl IntoView {
    view! { <EmployeeLeaveDetail id=use_id_param() /> }
}

#[component]
pub fn EmployeeLeaveDetail(#[prop(into)] id: Signal<Option<i64>>) -> impl IntoView {
    let repo = LeaveRepository::from_context();
    let fetch = use_keyed_fetch(
        move || id.get(),
        move |id| {
            let repo = repo.clone();
            async move {
                match id {
                    Some(id) => repo.get(id).await,
                    None => Err(missing_id()),
                }
            }
        },
    );

    view! {
        <PageHeader title="Détail de la demande" />
        <InlineErrorMessage error=Signal::derive(move || fetch.error()) />
        {move || match fetch.data() {
            Some(leave) => {
                let edit_href = format!("/employee/leaves/{}/edit", leave.id);
                let pending = leave.is_pending();
                view! {
                    <div class="space-y-4">
                        <LeaveSummary leave=leave />
                        <div class="flex gap-2">
                            <a href="/employee/leaves" class=SECONDARY_ACTION>"Retour à la liste"</a>
                            {pending.then(|| view! {
                                <a href=edit_href class=PRIMARY_ACTION>
                                    <i class="fas fa-pen mr-2"></i>
                                    "Modifier"
                                </a>
                            })}
                        </div>
                    </div>
                }
                .into_view()
            }
            None if fetch.loading() => view! { <LoadingSpinner /> }.into_view(),
            None => ().into_view(),
        }}
    }
}
