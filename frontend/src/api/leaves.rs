use super::{
    client::ApiClient,
    error::ApiError,
    types::{LeaveRequest, LeaveRequestPayload, LeaveReviewPayload},
};

const LEAVES_PATH: &str = "/users/leaves/";

fn leave_path(id: i64) -> String {
    format!("{}{}/", LEAVES_PATH, id)
}

impl ApiClient {
    /// Requests visible to the caller: own requests for an employee, all for a reviewer.
    pub async fn list_leaves(&self) -> Result<Vec<LeaveRequest>, ApiError> {
        self.get_list(LEAVES_PATH).await
    }

    pub async fn get_leave(&self, id: i64) -> Result<LeaveRequest, ApiError> {
        self.get_json(&leave_path(id)).await
    }

    pub async fn create_leave(&self, payload: &LeaveRequestPayload) -> Result<LeaveRequest, ApiError> {
        self.post_json(LEAVES_PATH, payload).await
    }

    pub async fn patch_leave(
        &self,
        id: i64,
        payload: &LeaveRequestPayload,
    ) -> Result<LeaveRequest, ApiError> {
        self.patch_json(&leave_path(id), payload).await
    }

    pub async fn review_leave(
        &self,
        id: i64,
        payload: &LeaveReviewPayload,
    ) -> Result<LeaveRequest, ApiError> {
        self.put_json(&leave_path(id), payload).await
    }

    pub async fn delete_leave(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&leave_path(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leave_paths_keep_trailing_slash() {
        assert_eq!(leave_path(12), "/users/leaves/12/");
    }
}
