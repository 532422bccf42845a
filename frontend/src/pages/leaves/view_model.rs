use super::{
    repository::LeaveRepository,
    utils::{filter_leaves, sort_newest_first, LeaveFormInput, StatusCounts, StatusFilter},
};
use crate::api::{ApiError, LeaveRequest};
use crate::state::fetch::{use_fetch, Fetch};
use leptos::*;

/// Validates first; an invalid form never reaches the API.
pub async fn submit_new_leave(
    repo: &LeaveRepository,
    input: LeaveFormInput,
) -> Result<LeaveRequest, ApiError> {
    let payload = input.validate()?;
    repo.create(payload).await
}

pub async fn submit_leave_update(
    repo: &LeaveRepository,
    id: i64,
    input: LeaveFormInput,
) -> Result<LeaveRequest, ApiError> {
    let payload = input.validate()?;
    repo.update(id, payload).await
}

#[derive(Clone, Copy)]
pub struct LeaveListViewModel {
    pub fetch: Fetch<Vec<LeaveRequest>>,
    pub status_filter: RwSignal<String>,
    pub query: RwSignal<String>,
    pub counts: Signal<StatusCounts>,
    pub visible: Signal<Vec<LeaveRequest>>,
}

pub fn use_leave_list_view_model() -> LeaveListViewModel {
    let repo = LeaveRepository::from_context();
    let fetch = use_fetch(move || {
        let repo = repo.clone();
        async move {
            let mut leaves = repo.list().await?;
            sort_newest_first(&mut leaves);
            Ok(leaves)
        }
    });
    let status_filter = create_rw_signal(String::new());
    let query = create_rw_signal(String::new());

    let counts = Signal::derive(move || {
        fetch
            .state
            .with(|state| state.data.as_deref().map(StatusCounts::from_leaves))
            .unwrap_or_default()
    });
    let visible = Signal::derive(move || {
        let filter = StatusFilter::parse(&status_filter.get());
        let query = query.get();
        fetch
            .state
            .with(|state| {
                state
                    .data
                    .as_deref()
                    .map(|leaves| filter_leaves(leaves, filter, &query))
            })
            .unwrap_or_default()
    });

    LeaveListViewModel {
        fetch,
        status_filter,
        query,
        counts,
        visible,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::{prelude::*, Method};
    use serde_json::json;
    use std::rc::Rc;

    fn repo_for(server: &MockServer) -> LeaveRepository {
        LeaveRepository::new_with_client(Rc::new(crate::api::ApiClient::new_with_base_url(
            server.url("/api"),
        )))
    }

    fn input(start: &str, end: &str) -> LeaveFormInput {
        LeaveFormInput {
            type_conge: "conge_paye".into(),
            date_debut: start.into(),
            date_fin: end.into(),
            description: "Vacances".into(),
        }
    }

    #[tokio::test]
    async fn inverted_range_never_calls_the_api() {
        let server = MockServer::start_async().await;
        let create = server.mock(|when, then| {
            when.method(POST).path("/api/users/leaves/");
            then.status(201);
        });

        let err = submit_new_leave(&repo_for(&server), input("2024-05-10", "2024-05-01"))
            .await
            .unwrap_err();

        assert_eq!(
            err.field_message("date_fin").as_deref(),
            Some(super::super::utils::INVERTED_RANGE_MESSAGE)
        );
        create.assert_hits(0);
    }

    #[tokio::test]
    async fn valid_form_posts_the_payload() {
        let server = MockServer::start_async().await;
        let create = server.mock(|when, then| {
            when.method(POST)
                .path("/api/users/leaves/")
                .json_body(json!({
                    "type_conge": "conge_paye",
                    "date_debut": "2024-05-01",
                    "date_fin": "2024-05-03",
                    "description": "Vacances"
                }));
            then.status(201).json_body(json!({
                "id": 8,
                "employee": 10,
                "date_debut": "2024-05-01",
                "date_fin": "2024-05-03",
                "type_conge": "conge_paye",
                "description": "Vacances",
                "statut": "en_attente"
            }));
        });

        let leave = submit_new_leave(&repo_for(&server), input("2024-05-01", "2024-05-03"))
            .await
            .unwrap();

        create.assert();
        assert_eq!(leave.id, 8);
        assert_eq!(leave.duration_days(), 3);
    }

    #[tokio::test]
    async fn update_rejects_inverted_range_before_patch() {
        let server = MockServer::start_async().await;
        let patch = server.mock(|when, then| {
            when.method(Method::PATCH).path("/api/users/leaves/4/");
            then.status(200);
        });

        assert!(submit_leave_update(&repo_for(&server), 4, input("2024-05-10", "2024-05-09"))
            .await
            .is_err());
        patch.assert_hits(0);
    }
}
