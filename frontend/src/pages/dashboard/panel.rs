use super::{
    components::{DashboardSection, LoadingHint, OrgCountCards, StatCard},
    repository::DashboardRepository,
    utils::greeting,
    view_model::{use_leave_overview, use_org_counts},
};
use crate::components::{
    common::SECONDARY_ACTION, empty_state::EmptyState, error::InlineErrorMessage,
    layout::PageHeader,
};
use crate::pages::leaves::components::{status::StatusCountCards, table::LeaveTable};
use crate::state::auth::use_auth;
use leptos::*;

fn use_greeting() -> Signal<String> {
    let (auth, _) = use_auth();
    Signal::derive(move || {
        auth.with(|state| {
            greeting(
                state
                    .user
                    .as_ref()
                    .map(|user| user.first_name.as_str())
                    .unwrap_or_default(),
            )
        })
    })
}

#[component]
pub fn EmployeeDashboardPage() -> impl IntoView {
    let repo = DashboardRepository::from_context();
    let overview = use_leave_overview(&repo);
    let fetch = overview.fetch;

    view! {
        <PageHeader
            title=use_greeting().get_untracked()
            subtitle="Suivi de vos demandes de congé."
            actions=view! {
                <a href="/employee/leaves" class=SECONDARY_ACTION>
                    <i class="fas fa-calendar-plus mr-2"></i>
                    "Mes congés"
                </a>
            }
            .into_view()
        />
        <InlineErrorMessage error=Signal::derive(move || fetch.error()) />
        <StatusCountCards counts=overview.counts />
        <DashboardSection title="Dernières demandes">
            <LoadingHint loading=Signal::derive(move || fetch.loading() && fetch.data().is_none()) />
            {move || {
                if fetch.data().is_some() && overview.latest.with(Vec::is_empty) {
                    view! {
                        <EmptyState
                            title="Aucune demande"
                            description="Vos demandes de congé apparaîtront ici."
                            icon="fa-umbrella-beach"
                        />
                    }
                    .into_view()
                } else {
                    view! { <LeaveTable leaves=overview.latest detail_base="/employee/leaves" /> }
                        .into_view()
                }
            }}
        </DashboardSection>
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let repo = DashboardRepository::from_context();
    let counts = use_org_counts(&repo);

    view! {
        <PageHeader title=use_greeting().get_untracked() subtitle="Vue d'ensemble de l'organisation." />
        <InlineErrorMessage error=Signal::derive(move || counts.error()) />
        <OrgCountCards counts=Signal::derive(move || counts.data()) />
    }
}

#[component]
pub fn SuperAdminDashboardPage() -> impl IntoView {
    let repo = DashboardRepository::from_context();
    let counts = use_org_counts(&repo);
    let overview = use_leave_overview(&repo);
    let leaves = overview.fetch;
    let pending = Signal::derive(move || leaves.data().map(|_| overview.counts.get().pending));

    view! {
        <PageHeader title=use_greeting().get_untracked() subtitle="Administration générale." />
        <InlineErrorMessage error=Signal::derive(move || leaves.error().or_else(|| counts.error())) />
        <DashboardSection title="Congés">
            <div class="grid gap-4 sm:grid-cols-3">
                <StatCard
                    label="Demandes en attente"
                    icon="fa-hourglass-half"
                    href="/superadmin/leaves"
                    value=pending
                />
            </div>
        </DashboardSection>
        <DashboardSection title="Organisation">
            <OrgCountCards counts=Signal::derive(move || counts.data()) />
        </DashboardSection>
        <DashboardSection title="Comptes">
            <div class="flex flex-wrap gap-2">
                <a href="/superadmin/admins" class=SECONDARY_ACTION>"Administrateurs"</a>
                <a href="/superadmin/superadmins" class=SECONDARY_ACTION>"Super administrateurs"</a>
            </div>
        </DashboardSection>
    }
}
