use crate::api::{
    ApiClient, ApiError, MessageResponse, ResetPasswordRequest, VerifyOtpRequest,
};
use leptos::use_context;
use std::rc::Rc;

#[derive(Clone)]
pub struct ForgotPasswordRepository {
    client: Rc<ApiClient>,
}

impl ForgotPasswordRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub fn from_context() -> Self {
        Self::new_with_client(Rc::new(
            use_context::<ApiClient>().unwrap_or_else(ApiClient::new),
        ))
    }

    pub async fn request_reset(&self, email: &str) -> Result<MessageResponse, ApiError> {
        self.client.request_password_reset(email).await
    }

    pub async fn verify_otp(&self, email: &str, otp: &str) -> Result<MessageResponse, ApiError> {
        self.client
            .verify_reset_otp(&VerifyOtpRequest {
                email: email.to_string(),
                otp: otp.to_string(),
            })
            .await
    }

    pub async fn reset_password(
        &self,
        email: &str,
        otp: &str,
        new_password: &str,
    ) -> Result<MessageResponse, ApiError> {
        self.client
            .reset_password(&ResetPasswordRequest {
                email: email.to_string(),
                otp: otp.to_string(),
                new_password: new_password.to_string(),
            })
            .await
    }

    pub async fn resend_otp(&self, email: &str) -> Result<MessageResponse, ApiError> {
        self.client.resend_reset_otp(email).await
    }
}
