use super::utils::LoginFormState;
use crate::api::{ApiError, LoginRequest, User};
use crate::state::auth;
use crate::utils::browser;
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<LoginRequest, Result<User, ApiError>>,
}

impl LoginViewModel {
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        match self.form.to_request() {
            Ok(request) => {
                self.error.set(None);
                self.login_action.dispatch(request);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let form = LoginFormState::default();
    let error = create_rw_signal(None::<ApiError>);
    let login_action = auth::use_login_action();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(user) => {
                    error.set(None);
                    form.password.set(String::new());
                    log::info!("Signed in as {}", user.role.as_str());
                    browser::redirect(user.role.landing_path());
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    LoginViewModel {
        form,
        error,
        login_action,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::with_runtime;

    #[test]
    fn empty_submit_sets_a_field_error_without_dispatching() {
        with_runtime(|| {
            let vm = use_login_view_model();
            vm.submit();
            let error = vm.error.get_untracked().unwrap();
            assert!(error.field_message("email").is_some());
            assert_eq!(vm.login_action.version().get_untracked(), 0);
        });
    }
}
