use super::{
    components::{
        form::CreateLeaveModal,
        status::{StatusCountCards, StatusFilterSelect},
        table::LeaveTable,
    },
    view_model::use_leave_list_view_model,
};
use crate::components::{
    common::PRIMARY_ACTION,
    empty_state::EmptyState,
    error::InlineErrorMessage,
    layout::{LoadingSpinner, PageHeader},
};
use crate::state::toast::use_toasts;
use leptos::*;

#[component]
pub fn EmployeeLeavesPage() -> impl IntoView {
    let vm = use_leave_list_view_model();
    let toasts = use_toasts();
    let create_open = create_rw_signal(false);
    let fetch = vm.fetch;

    let on_created = Callback::new(move |_| {
        toasts.success("Votre demande de congé a été envoyée.");
        fetch.refetch();
    });

    view! {
        <PageHeader
            title="Mes congés"
            subtitle="Suivez vos demandes de congé et déposez-en de nouvelles."
            actions=view! {
                <button
                    type="button"
                    class=PRIMARY_ACTION
                    on:click=move |_| create_open.set(true)
                >
                    <i class="fas fa-plus mr-2"></i>
                    "Nouvelle demande"
                </button>
            }
            .into_view()
        />
        <StatusCountCards counts=vm.counts />
        <div class="mb-4 flex justify-end">
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
                        description="Aucune demande de congé ne correspond à ce filtre."
                        icon="fa-umbrella-beach"
                    />
                }
                .into_view()
            } else {
                view! { <LeaveTable leaves=vm.visible detail_base="/employee/leaves" /> }.into_view()
            }
        }}
        <CreateLeaveModal is_open=create_open on_created=on_created />
    }
}
