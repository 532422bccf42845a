use super::utils::{build_review_payload, ReviewDecision};
use crate::api::{ApiError, LeaveRequest};
use crate::pages::leaves::repository::LeaveRepository;

/// Validates the reason, then sends the full update.
pub async fn submit_review(
    repo: &LeaveRepository,
    leave: &LeaveRequest,
    decision: ReviewDecision,
    raison: &str,
) -> Result<LeaveRequest, ApiError> {
    let payload = build_review_payload(leave, decision, raison)?;
    let updated = repo.review(leave.id, payload).await?;
    log::info!("Leave {} reviewed: {}", leave.id, decision.status().as_str());
    Ok(updated)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{ApiClient, LeaveStatus};
    use crate::pages::leaves::utils::fixtures::leave;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::rc::Rc;

    fn repo_for(server: &MockServer) -> LeaveRepository {
        LeaveRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(server.url("/api"))))
    }

    #[tokio::test]
    async fn empty_rejection_reason_is_blocked_locally() {
        let server = MockServer::start_async().await;
        let put = server.mock(|when, then| {
            when.method(PUT).path("/api/users/leaves/5/");
            then.status(200);
        });

        let source = leave(5, LeaveStatus::EnAttente, "Emma Leroy");
        let result = submit_review(&repo_for(&server), &source, ReviewDecision::Reject, "  ").await;

        assert!(result.is_err());
        put.assert_hits(0);
    }

    #[tokio::test]
    async fn approval_without_reason_is_sent() {
        let server = MockServer::start_async().await;
        let put = server.mock(|when, then| {
            when.method(PUT)
                .path("/api/users/leaves/5/")
                .json_body_partial(r#"{"statut": "approuve", "raison": ""}"#);
            then.status(200).json_body(json!({
                "id": 5,
                "employee": 105,
                "date_debut": "2024-03-05",
                "date_fin": "2024-03-07",
                "type_conge": "conge_paye",
                "description": "Vacances",
                "statut": "approuve",
                "raison": ""
            }));
        });

        let source = leave(5, LeaveStatus::EnAttente, "Emma Leroy");
        let updated = submit_review(&repo_for(&server), &source, ReviewDecision::Approve, "")
            .await
            .unwrap();

        put.assert();
        assert_eq!(updated.statut, LeaveStatus::Approuve);
    }
}
