use crate::api::{ApiError, LoginRequest};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

impl LoginFormState {
    pub fn to_request(&self) -> Result<LoginRequest, ApiError> {
        validate_credentials(&self.email.get_untracked(), &self.password.get_untracked())
    }
}

pub fn validate_credentials(email: &str, password: &str) -> Result<LoginRequest, ApiError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ApiError::field("email", "Veuillez saisir votre email."));
    }
    if password.is_empty() {
        return Err(ApiError::field("password", "Veuillez saisir votre mot de passe."));
    }
    Ok(LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_are_trimmed_and_required() {
        let request = validate_credentials("  alice@rh.fr ", "secret").unwrap();
        assert_eq!(request.email, "alice@rh.fr");
        assert_eq!(request.password, "secret");

        assert!(validate_credentials("", "secret")
            .unwrap_err()
            .field_message("email")
            .is_some());
        assert!(validate_credentials("alice@rh.fr", "")
            .unwrap_err()
            .field_message("password")
            .is_some());
    }
}
