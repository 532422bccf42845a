use super::{
    repository::DashboardRepository,
    utils::{latest_leaves, OrgCounts, LATEST_LEAVES},
};
use crate::api::LeaveRequest;
use crate::pages::leaves::{repository::LeaveRepository, utils::StatusCounts};
use crate::state::fetch::{use_fetch, Fetch};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LeaveOverview {
    pub fetch: Fetch<Vec<LeaveRequest>>,
    pub counts: Signal<StatusCounts>,
    pub latest: Signal<Vec<LeaveRequest>>,
}

pub fn use_leave_overview(repo: &DashboardRepository) -> LeaveOverview {
    let leaves = LeaveRepository::new_with_client(repo.client());
    let fetch = use_fetch(move || {
        let repo = leaves.clone();
        async move { repo.list().await }
    });
    LeaveOverview {
        fetch,
        counts: Signal::derive(move || {
            fetch
                .data()
                .map(|items| StatusCounts::from_leaves(&items))
                .unwrap_or_default()
        }),
        latest: Signal::derive(move || {
            fetch
                .data()
                .map(|items| latest_leaves(&items, LATEST_LEAVES))
                .unwrap_or_default()
        }),
    }
}

pub fn use_org_counts(repo: &DashboardRepository) -> Fetch<OrgCounts> {
    let repo = repo.clone();
    use_fetch(move || {
        let repo = repo.clone();
        async move { repo.org_counts().await }
    })
}
