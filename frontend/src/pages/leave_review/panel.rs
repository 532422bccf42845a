use crate::components::{
    empty_state::EmptyState,
    error::InlineErrorMessage,
    forms::SearchInput,
    layout::{LoadingSpinner, PageHeader},
};
use crate::pages::leaves::{
    components::{
        status::{StatusCountCards, StatusFilterSelect},
        table::LeaveTable,
    },
    view_model::use_leave_list_view_model,
};
use leptos::*;

#[component]
pub fn LeaveReviewListPage() -> impl IntoView {
    let vm = use_leave_list_view_model();
    let fetch = vm.fetch;

    view! {
        <PageHeader
            title="Demandes de congé"
            subtitle="Examinez et traitez les demandes des employés."
        />
        <StatusCountCards counts=vm.counts />
        <div class="mb-4 flex flex-col gap-3 sm:flex-row sm:items-center sm:justify-between">
            <SearchInput value=vm.query placeholder="Rechercher un employé…" />
            <div class="w-full sm:w-60">
                <StatusFilterSelect value=vm.status_filter />
            </div>
        </div>
        <InlineErrorMessage error=Signal::derive(move || fetch.error()) />
        {move || {
            if fetch.loading() && fetch.data().is_none() {
                view! { <LoadingSpinner /> }.into_view()
            } else if fetch.data().is_some() && vm.visible.with(Vec::is_empty) {
                view! {
                    <EmptyState
                        title="Aucune demande"
                        description="Aucune demande ne correspond à votre recherche."
                        icon="fa-calendar-check"
                    />
                }
                .into_view()
            } else {
                view! {
                    <LeaveTable leaves=vm.visible detail_base="/superadmin/leaves" show_employee=true />
                }
                .into_view()
            }
        }}
    }
}
