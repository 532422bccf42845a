use super::{
    client::{persist_session, store_current_user, ApiClient},
    error::ApiError,
    types::{
        ChangePasswordRequest, LoginRequest, LoginResponse, MessageResponse,
        PasswordResetRequest, ProfileUpdateRequest, ResetPasswordRequest, User, VerifyOtpRequest,
    },
};
use serde::{de::DeserializeOwned, Serialize};

impl ApiClient {
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        let url = self.endpoint("/users/login/").await;
        let response = self
            .send_public(self.http_client().post(url).json(&request))
            .await?;
        let login: LoginResponse = Self::map_json_response(response).await?;
        persist_session(&login)?;
        log::info!("Signed in as {} ({})", login.user.email, login.user.role.as_str());
        Ok(login)
    }

    pub async fn get_profile(&self) -> Result<User, ApiError> {
        let user: User = self.get_json("/users/profile/").await?;
        store_current_user(&user)?;
        Ok(user)
    }

    pub async fn update_profile(&self, request: &ProfileUpdateRequest) -> Result<User, ApiError> {
        let user: User = self.put_json("/users/profile/", request).await?;
        store_current_user(&user)?;
        Ok(user)
    }

    pub async fn change_password(
        &self,
        request: &ChangePasswordRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.post_json("/users/change-password/", request).await
    }

    pub async fn request_password_reset(&self, email: &str) -> Result<MessageResponse, ApiError> {
        self.post_public(
            "/users/password-reset/request/",
            &PasswordResetRequest {
                email: email.to_string(),
            },
        )
        .await
    }

    pub async fn verify_reset_otp(&self, request: &VerifyOtpRequest) -> Result<MessageResponse, ApiError> {
        self.post_public("/users/password-reset/verify-otp/", request)
            .await
    }

    pub async fn reset_password(
        &self,
        request: &ResetPasswordRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.post_public("/users/password-reset/reset/", request).await
    }

    pub async fn resend_reset_otp(&self, email: &str) -> Result<MessageResponse, ApiError> {
        self.post_public(
            "/users/password-reset/resend-otp/",
            &PasswordResetRequest {
                email: email.to_string(),
            },
        )
        .await
    }

    async fn post_public<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path).await;
        let response = self
            .send_public(self.http_client().post(url).json(body))
            .await?;
        Self::map_json_response(response).await
    }
}
