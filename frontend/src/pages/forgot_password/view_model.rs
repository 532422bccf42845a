use super::{
    repository::ForgotPasswordRepository,
    utils::{validate_email, validate_new_password, validate_otp, ResetStep},
};
use crate::api::{ApiError, MessageResponse};
use crate::state::toast::use_toasts;
use crate::utils::browser;
use leptos::*;

/// Raw wizard inputs at the time of a submit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResetInput {
    pub email: String,
    pub otp: String,
    pub new_password: String,
    pub confirm_password: String,
}

/// Validates and sends the request belonging to `step`.
pub async fn submit_step(
    repo: &ForgotPasswordRepository,
    step: ResetStep,
    input: &ResetInput,
) -> Result<MessageResponse, ApiError> {
    let email = validate_email(&input.email)?;
    match step {
        ResetStep::Email => repo.request_reset(&email).await,
        ResetStep::OtpVerify => {
            let otp = validate_otp(&input.otp)?;
            repo.verify_otp(&email, &otp).await
        }
        ResetStep::NewPassword => {
            let otp = validate_otp(&input.otp)?;
            let password = validate_new_password(&input.new_password, &input.confirm_password)?;
            repo.reset_password(&email, &otp, &password).await
        }
    }
}

#[derive(Clone, Copy)]
pub struct ForgotPasswordViewModel {
    pub step: RwSignal<ResetStep>,
    pub email: RwSignal<String>,
    pub otp: RwSignal<String>,
    pub new_password: RwSignal<String>,
    pub confirm_password: RwSignal<String>,
    pub error: RwSignal<Option<ApiError>>,
    pub notice: RwSignal<Option<String>>,
    pub submit_action: Action<(ResetStep, ResetInput), Result<MessageResponse, ApiError>>,
    pub resend_action: Action<String, Result<MessageResponse, ApiError>>,
}

impl ForgotPasswordViewModel {
    fn input(&self) -> ResetInput {
        ResetInput {
            email: self.email.get_untracked(),
            otp: self.otp.get_untracked(),
            new_password: self.new_password.get_untracked(),
            confirm_password: self.confirm_password.get_untracked(),
        }
    }

    pub fn submit(&self) {
        if self.submit_action.pending().get_untracked() {
            return;
        }
        self.error.set(None);
        self.submit_action
            .dispatch((self.step.get_untracked(), self.input()));
    }

    pub fn resend(&self) {
        if self.resend_action.pending().get_untracked() {
            return;
        }
        self.error.set(None);
        self.resend_action.dispatch(self.email.get_untracked());
    }

    pub fn back(&self) {
        self.error.set(None);
        self.notice.set(None);
        self.otp.set(String::new());
        self.step.update(|step| *step = step.back());
    }
}

pub fn use_forgot_password_view_model() -> ForgotPasswordViewModel {
    let repository = ForgotPasswordRepository::from_context();
    let toasts = use_toasts();
    let navigate = browser::use_navigator();

    let step = create_rw_signal(ResetStep::Email);
    let error = create_rw_signal(None::<ApiError>);
    let notice = create_rw_signal(None::<String>);

    let submit_repo = repository.clone();
    let submit_action = create_action(move |(step, input): &(ResetStep, ResetInput)| {
        let repo = submit_repo.clone();
        let (step, input) = (*step, input.clone());
        async move { submit_step(&repo, step, &input).await }
    });

    let resend_action = create_action(move |email: &String| {
        let repo = repository.clone();
        let email = email.clone();
        async move {
            let email = validate_email(&email)?;
            repo.resend_otp(&email).await
        }
    });

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(response) => {
                    error.set(None);
                    match step.get_untracked().advance() {
                        Some(next) => {
                            notice.set(Some(response.message).filter(|m| !m.is_empty()));
                            step.set(next);
                        }
                        None => {
                            toasts.success("Mot de passe réinitialisé. Vous pouvez vous connecter.");
                            navigate.call("/".to_string());
                        }
                    }
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = resend_action.value().get() {
            match result {
                Ok(_) => notice.set(Some("Un nouveau code vous a été envoyé.".to_string())),
                Err(err) => error.set(Some(err)),
            }
        }
    });

    ForgotPasswordViewModel {
        step,
        email: create_rw_signal(String::new()),
        otp: create_rw_signal(String::new()),
        new_password: create_rw_signal(String::new()),
        confirm_password: create_rw_signal(String::new()),
        error,
        notice,
        submit_action,
        resend_action,
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ApiClient;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::rc::Rc;

    fn repo(server: &MockServer) -> ForgotPasswordRepository {
        ForgotPasswordRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )))
    }

    fn input() -> ResetInput {
        ResetInput {
            email: "alice@rh.fr".into(),
            otp: "123456".into(),
            new_password: "nouveau-secret".into(),
            confirm_password: "nouveau-secret".into(),
        }
    }

    #[tokio::test]
    async fn each_step_calls_its_own_endpoint() {
        let server = MockServer::start_async().await;
        let request = server.mock(|when, then| {
            when.method(POST)
                .path("/api/users/password-reset/request/")
                .json_body(json!({ "email": "alice@rh.fr" }));
            then.status(200).json_body(json!({ "message": "Code envoyé." }));
        });
        let verify = server.mock(|when, then| {
            when.method(POST)
                .path("/api/users/password-reset/verify-otp/")
                .json_body(json!({ "email": "alice@rh.fr", "otp": "123456" }));
            then.status(200).json_body(json!({ "message": "Code valide." }));
        });
        let reset = server.mock(|when, then| {
            when.method(POST)
                .path("/api/users/password-reset/reset/")
                .json_body_partial(r#"{ "new_password": "nouveau-secret" }"#);
            then.status(200).json_body(json!({ "message": "OK" }));
        });
        let repo = repo(&server);

        let sent = submit_step(&repo, ResetStep::Email, &input()).await.unwrap();
        submit_step(&repo, ResetStep::OtpVerify, &input()).await.unwrap();
        submit_step(&repo, ResetStep::NewPassword, &input()).await.unwrap();

        assert_eq!(sent.message, "Code envoyé.");
        request.assert();
        verify.assert();
        reset.assert();
    }

    #[tokio::test]
    async fn mismatched_confirmation_never_reaches_the_api() {
        let server = MockServer::start_async().await;
        let reset = server.mock(|when, then| {
            when.method(POST).path("/api/users/password-reset/reset/");
            then.status(200).json_body(json!({ "message": "OK" }));
        });
        let mut input = input();
        input.confirm_password = "autre-secret".into();

        let err = submit_step(&repo(&server), ResetStep::NewPassword, &input)
            .await
            .unwrap_err();

        assert!(err.field_message("confirm_password").is_some());
        reset.assert_hits(0);
    }

    #[tokio::test]
    async fn wrong_code_surfaces_the_server_message() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/users/password-reset/verify-otp/");
            then.status(400).json_body(json!({ "error": "Code invalide ou expiré." }));
        });

        let err = submit_step(&repo(&server), ResetStep::OtpVerify, &input())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Code invalide ou expiré.");
    }
}
