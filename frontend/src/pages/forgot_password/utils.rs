use crate::api::ApiError;

pub const MIN_PASSWORD_LEN: usize = 8;

/// Wizard position. Moves forward only after the step's request succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetStep {
    Email,
    OtpVerify,
    NewPassword,
}

impl ResetStep {
    /// Next step, or `None` once the new password is saved.
    pub fn advance(self) -> Option<Self> {
        match self {
            ResetStep::Email => Some(ResetStep::OtpVerify),
            ResetStep::OtpVerify => Some(ResetStep::NewPassword),
            ResetStep::NewPassword => None,
        }
    }

    /// Only the code step can go back, to correct the email.
    pub fn back(self) -> Self {
        match self {
            ResetStep::OtpVerify => ResetStep::Email,
            other => other,
        }
    }

    pub fn can_go_back(self) -> bool {
        self.back() != self
    }

    pub fn number(self) -> usize {
        match self {
            ResetStep::Email => 1,
            ResetStep::OtpVerify => 2,
            ResetStep::NewPassword => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ResetStep::Email => "Adresse email",
            ResetStep::OtpVerify => "Code de vérification",
            ResetStep::NewPassword => "Nouveau mot de passe",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            ResetStep::Email => "Saisissez l'email de votre compte pour recevoir un code.",
            ResetStep::OtpVerify => "Saisissez le code reçu par email.",
            ResetStep::NewPassword => "Choisissez votre nouveau mot de passe.",
        }
    }
}

pub fn validate_email(email: &str) -> Result<String, ApiError> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(ApiError::field("email", "Veuillez saisir une adresse email valide."));
    }
    Ok(email.to_string())
}

pub fn validate_otp(otp: &str) -> Result<String, ApiError> {
    let otp = otp.trim();
    if otp.is_empty() || !otp.chars().all(|c| c.is_ascii_digit()) {
        return Err(ApiError::field("otp", "Le code doit contenir uniquement des chiffres."));
    }
    Ok(otp.to_string())
}

/// Shared by the reset wizard and the profile page.
pub fn validate_new_password(password: &str, confirmation: &str) -> Result<String, ApiError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ApiError::field(
            "new_password",
            format!(
                "Le mot de passe doit contenir au moins {} caractères.",
                MIN_PASSWORD_LEN
            ),
        ));
    }
    if password != confirmation {
        return Err(ApiError::field(
            "confirm_password",
            "Les mots de passe ne correspondent pas.",
        ));
    }
    Ok(password.to_string())
}
