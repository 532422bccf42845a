use crate::api::{
    ApiClient, ApiError, ChangePasswordRequest, MessageResponse, ProfileUpdateRequest, User,
};
use leptos::use_context;
use std::rc::Rc;

#[derive(Clone)]
pub struct ProfileRepository {
    client: Rc<ApiClient>,
}

impl ProfileRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub fn from_context() -> Self {
        Self::new_with_client(Rc::new(
            use_context::<ApiClient>().unwrap_or_else(ApiClient::new),
        ))
    }

    pub async fn update_names(&self, request: &ProfileUpdateRequest) -> Result<User, ApiError> {
        self.client.update_profile(request).await
    }

    pub async fn change_password(
        &self,
        request: &ChangePasswordRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.client.change_password(request).await
    }
}
