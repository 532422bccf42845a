use crate::api::{
    ApiClient, ApiError, LeaveRequest, LeaveRequestPayload, LeaveReviewPayload,
};
use leptos::use_context;
use std::rc::Rc;

/// Leave endpoints as used by both the employee and reviewer pages.
#[derive(Clone)]
pub struct LeaveRepository {
    client: Rc<ApiClient>,
}

impl LeaveRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    /// Uses the client provided at the app root, or a default one.
    pub fn from_context() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        Self::new_with_client(Rc::new(api))
    }

    pub async fn list(&self) -> Result<Vec<LeaveRequest>, ApiError> {
        self.client.list_leaves().await
    }

    pub async fn get(&self, id: i64) -> Result<LeaveRequest, ApiError> {
        self.client.get_leave(id).await
    }

    pub async fn create(&self, payload: LeaveRequestPayload) -> Result<LeaveRequest, ApiError> {
        self.client.create_leave(&payload).await
    }

    pub async fn update(
        &self,
        id: i64,
        payload: LeaveRequestPayload,
    ) -> Result<LeaveRequest, ApiError> {
        self.client.patch_leave(id, &payload).await
    }

    pub async fn review(
        &self,
        id: i64,
        payload: LeaveReviewPayload,
    ) -> Result<LeaveRequest, ApiError> {
        self.client.review_leave(id, &payload).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete_leave(id).await
    }
}
