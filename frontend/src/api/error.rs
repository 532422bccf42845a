use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

pub const GENERIC_ERROR_MESSAGE: &str = "Une erreur inattendue est survenue. Veuillez réessayer.";

pub type FieldErrorMap = BTreeMap<String, Vec<String>>;

/// Every failure the API client can report, decoded once at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum ApiError {
    /// Field-keyed validation messages.
    #[error("{}", join_field_errors(.0))]
    FieldErrors(FieldErrorMap),
    /// Business or non-field error meant for the user as-is.
    #[error("{0}")]
    Message(String),
    /// Network failure or an undecodable response. The detail is for logs only.
    #[error("{}", GENERIC_ERROR_MESSAGE)]
    Unknown(String),
}

fn join_field_errors(errors: &FieldErrorMap) -> String {
    errors
        .iter()
        .flat_map(|(field, messages)| {
            messages.iter().map(move |msg| {
                if field == "non_field_errors" {
                    msg.clone()
                } else {
                    format!("{} : {}", field, msg)
                }
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.to_string()
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.to_string().into_view()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Message(msg.into())
    }

    pub fn field(name: impl Into<String>, msg: impl Into<String>) -> Self {
        let mut errors = FieldErrorMap::new();
        errors.insert(name.into(), vec![msg.into()]);
        Self::FieldErrors(errors)
    }

    pub fn unknown(detail: impl Into<String>) -> Self {
        Self::Unknown(detail.into())
    }

    pub fn request_failed(detail: impl Into<String>) -> Self {
        Self::Unknown(format!("Request failed: {}", detail.into()))
    }

    pub fn field_errors(&self) -> Option<&FieldErrorMap> {
        match self {
            Self::FieldErrors(errors) => Some(errors),
            _ => None,
        }
    }

    /// Messages attached to one input, joined for display under it.
    pub fn field_message(&self, name: &str) -> Option<String> {
        self.field_errors()
            .and_then(|errors| errors.get(name))
            .filter(|messages| !messages.is_empty())
            .map(|messages| messages.join(" "))
    }

    /// Text for a banner: the message itself, or a summary for field errors.
    pub fn banner_message(&self) -> String {
        match self {
            Self::FieldErrors(errors) => {
                if let Some(general) = errors.get("non_field_errors") {
                    return general.join(" ");
                }
                "Veuillez corriger les champs signalés.".to_string()
            }
            other => other.to_string(),
        }
    }

    /// Decodes one of the envelopes the API returns on failure.
    ///
    /// Accepted shapes: `{errors: {field: [..]}}`, `{errors: "text"}`,
    /// `{non_field_errors: [..]}` (with or without field keys beside it),
    /// `{error}`, `{message}`, `{detail}` and a bare `{field: [..]}` object.
    pub fn from_envelope(body: &Value) -> Option<Self> {
        let object = body.as_object()?;

        match object.get("errors") {
            Some(errors @ Value::Object(_)) => {
                if let Some(errors) = decode_field_map(errors) {
                    return Some(Self::FieldErrors(errors));
                }
            }
            Some(other) => {
                if let Some(text) = message_text(other) {
                    return Some(Self::Message(text));
                }
            }
            None => {}
        }
        if let Some(messages) = object.get("non_field_errors").and_then(string_list) {
            // Field errors sent alongside stay inline; the banner reads `non_field_errors`.
            if let Some(errors) = decode_field_map(body).filter(|errors| errors.len() > 1) {
                return Some(Self::FieldErrors(errors));
            }
            return Some(Self::Message(messages.join(" ")));
        }
        for key in ["error", "message", "detail"] {
            if let Some(text) = object.get(key).and_then(message_text) {
                return Some(Self::Message(text));
            }
        }
        decode_field_map(body).map(Self::FieldErrors)
    }

    pub fn from_status(status: u16, body: &str) -> Self {
        if let Ok(value) = serde_json::from_str::<Value>(body) {
            if let Some(error) = Self::from_envelope(&value) {
                return error;
            }
        }
        match status {
            401 => Self::Message("Session expirée. Veuillez vous reconnecter.".to_string()),
            403 => Self::Message("Vous n'avez pas les droits nécessaires.".to_string()),
            404 => Self::Message("Ressource introuvable.".to_string()),
            _ => Self::Unknown(format!("HTTP {}", status)),
        }
    }
}

fn message_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        Value::Array(_) => string_list(value).map(|items| items.join(" ")),
        _ => None,
    }
}

fn string_list(value: &Value) -> Option<Vec<String>> {
    let items: Vec<String> = match value {
        Value::String(text) => vec![text.clone()],
        Value::Array(items) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => return None,
    };
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}

fn decode_field_map(value: &Value) -> Option<FieldErrorMap> {
    let object = value.as_object()?;
    let mut errors = FieldErrorMap::new();
    for (field, messages) in object {
        match messages {
            Value::Object(_) => {
                // Nested serializer errors, e.g. {"user": {"email": [..]}}.
                for (nested, nested_messages) in decode_field_map(messages)? {
                    errors.insert(format!("{}.{}", field, nested), nested_messages);
                }
            }
            other => {
                errors.insert(field.clone(), string_list(other)?);
            }
        }
    }
    if errors.is_empty() {
        None
    } else {
        Some(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_errors_map_as_field_errors() {
        let error = ApiError::from_envelope(&json!({
            "errors": { "nom": ["Ce nom existe déjà."], "description": ["Trop long."] }
        }))
        .unwrap();
        assert_eq!(
            error.field_message("nom").as_deref(),
            Some("Ce nom existe déjà.")
        );
        assert_eq!(error.field_message("description").as_deref(), Some("Trop long."));
        assert!(error.field_message("autre").is_none());
    }

    #[test]
    fn decodes_non_field_errors_as_message() {
        let error = ApiError::from_envelope(&json!({
            "non_field_errors": ["Identifiants invalides."]
        }))
        .unwrap();
        assert_eq!(error, ApiError::Message("Identifiants invalides.".into()));
    }

    #[test]
    fn errors_key_holding_text_is_a_message() {
        assert_eq!(
            ApiError::from_envelope(&json!({ "errors": "Solde de congés insuffisant." })),
            Some(ApiError::Message("Solde de congés insuffisant.".into()))
        );
        let error =
            ApiError::from_envelope(&json!({ "errors": ["Période déjà demandée."] })).unwrap();
        assert_eq!(error.banner_message(), "Période déjà demandée.");
    }

    #[test]
    fn non_field_errors_beside_fields_keep_both() {
        let error = ApiError::from_envelope(&json!({
            "non_field_errors": ["Compte déjà existant."],
            "email": ["Adresse invalide."]
        }))
        .unwrap();
        assert_eq!(error.field_message("email").as_deref(), Some("Adresse invalide."));
        assert_eq!(error.banner_message(), "Compte déjà existant.");
    }

    #[test]
    fn decodes_error_message_and_detail_keys() {
        assert_eq!(
            ApiError::from_envelope(&json!({ "error": "Code OTP invalide" })),
            Some(ApiError::Message("Code OTP invalide".into()))
        );
        assert_eq!(
            ApiError::from_envelope(&json!({ "message": "Déjà traité" })),
            Some(ApiError::Message("Déjà traité".into()))
        );
        assert_eq!(
            ApiError::from_envelope(&json!({ "detail": "Non trouvé." })),
            Some(ApiError::Message("Non trouvé.".into()))
        );
    }

    #[test]
    fn decodes_bare_field_object_including_nested_serializers() {
        let error = ApiError::from_envelope(&json!({
            "matricule": ["Ce champ est obligatoire."],
            "user": { "email": ["Adresse invalide."] }
        }))
        .unwrap();
        assert!(error.field_message("matricule").is_some());
        assert_eq!(
            error.field_message("user.email").as_deref(),
            Some("Adresse invalide.")
        );
    }

    #[test]
    fn unknown_shapes_fall_back_on_status() {
        assert_eq!(
            ApiError::from_status(500, "<html>oops</html>"),
            ApiError::Unknown("HTTP 500".into())
        );
        assert_eq!(
            ApiError::from_status(404, "{}"),
            ApiError::Message("Ressource introuvable.".into())
        );
        assert!(matches!(
            ApiError::from_status(400, "{\"weird\": 3}"),
            ApiError::Unknown(_)
        ));
    }

    #[test]
    fn unknown_errors_display_generic_text() {
        let error = ApiError::request_failed("connection refused");
        assert_eq!(error.to_string(), GENERIC_ERROR_MESSAGE);
        let raw: String = ApiError::validation("Date invalide").into();
        assert_eq!(raw, "Date invalide");
    }

    #[test]
    fn banner_message_summarises_field_errors() {
        let error = ApiError::field("email", "Adresse invalide.");
        assert_eq!(error.banner_message(), "Veuillez corriger les champs signalés.");
        assert_eq!(error.to_string(), "email : Adresse invalide.");
    }

    #[test]
    fn api_error_survives_serde_round_trip_for_resources() {
        let error = ApiError::field("nom", "Requis");
        let encoded = serde_json::to_string(&error).unwrap();
        let decoded: ApiError = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, error);
    }
}
