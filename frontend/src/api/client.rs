use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{
    api::{error::ApiError, types::*},
    config,
    utils::{browser, storage},
};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        let base = if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        };
        base.trim_end_matches('/').to_string()
    }

    pub(crate) async fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await, path)
    }

    /// Sends a request carrying the stored bearer token, if any.
    ///
    /// A 401 tears the session down and sends the user back to `/`.
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let request = match storage::get_item(storage::ACCESS_TOKEN_KEY) {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        let response = request.send().await.map_err(|err| {
            log::warn!("API request failed: {}", err);
            ApiError::request_failed(err.to_string())
        })?;
        Self::handle_unauthorized_status(response.status());
        Ok(response)
    }

    /// Sends without credentials and without the 401 teardown (login, reset).
    pub(crate) async fn send_public(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        request.send().await.map_err(|err| {
            log::warn!("API request failed: {}", err);
            ApiError::request_failed(err.to_string())
        })
    }

    fn handle_unauthorized_status(status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            log::info!("API answered 401, clearing session");
            clear_auth_session();
            browser::redirect("/");
        }
    }

    pub(crate) async fn map_json_response<T: DeserializeOwned>(
        response: Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::map_error_response(response).await)
        }
    }

    pub(crate) async fn map_empty_response(response: Response) -> Result<(), ApiError> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::map_error_response(response).await)
        }
    }

    async fn map_error_response(response: Response) -> ApiError {
        let status = response.status().as_u16();
        let url = response.url().path().to_string();
        let body = response.text().await.unwrap_or_default();
        let error = ApiError::from_status(status, &body);
        log::warn!("API error {} on {}: {:?}", status, url, error);
        error
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.endpoint(path).await;
        let response = self.send(self.http_client().get(url)).await?;
        Self::map_json_response(response).await
    }

    pub(crate) async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        self.get_json::<ListEnvelope<T>>(path)
            .await
            .map(ListEnvelope::into_vec)
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path).await;
        let response = self.send(self.http_client().post(url).json(body)).await?;
        Self::map_json_response(response).await
    }

    pub(crate) async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path).await;
        let response = self.send(self.http_client().put(url).json(body)).await?;
        Self::map_json_response(response).await
    }

    pub(crate) async fn patch_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path).await;
        let response = self.send(self.http_client().patch(url).json(body)).await?;
        Self::map_json_response(response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = self.endpoint(path).await;
        let response = self.send(self.http_client().delete(url)).await?;
        Self::map_empty_response(response).await
    }
}

pub(crate) fn persist_session(response: &LoginResponse) -> Result<(), ApiError> {
    storage::set_item(storage::ACCESS_TOKEN_KEY, &response.token).map_err(ApiError::unknown)?;
    store_current_user(&response.user)
}

pub(crate) fn store_current_user(user: &User) -> Result<(), ApiError> {
    let user_json = serde_json::to_string(user)
        .map_err(|_| ApiError::unknown("Failed to serialize user profile"))?;
    storage::set_item(storage::CURRENT_USER_KEY, &user_json).map_err(ApiError::unknown)
}

pub(crate) fn clear_auth_session() {
    storage::remove_item(storage::ACCESS_TOKEN_KEY);
    storage::remove_item(storage::CURRENT_USER_KEY);
}

/// Token and cached profile left by a previous login, if still usable.
pub(crate) fn stored_session() -> Option<(String, User)> {
    let token = storage::get_item(storage::ACCESS_TOKEN_KEY)?;
    if token_is_expired(&token, now_epoch_seconds()) {
        clear_auth_session();
        return None;
    }
    let user = storage::get_item(storage::CURRENT_USER_KEY)
        .and_then(|raw| serde_json::from_str::<User>(&raw).ok())?;
    Some((token, user))
}

fn decode_claims(token: &str) -> Option<Value> {
    let mut parts = token.split('.');
    parts.next()?;
    let payload = parts.next()?;
    let decoded = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    serde_json::from_slice(&decoded).ok()
}

/// Opaque tokens (no JWT `exp` claim) are never considered expired here.
fn token_is_expired(token: &str, now: i64) -> bool {
    decode_claims(token)
        .and_then(|claims| claims.get("exp").and_then(Value::as_i64))
        .map(|exp| exp <= now)
        .unwrap_or(false)
}

fn now_epoch_seconds() -> i64 {
    chrono::Utc::now().timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jwt_with_exp(exp: i64) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256"}"#);
        let claims = URL_SAFE_NO_PAD.encode(format!(r#"{{"exp":{}}}"#, exp));
        format!("{}.{}.sig", header, claims)
    }

    #[test]
    fn expired_jwt_is_detected() {
        assert!(token_is_expired(&jwt_with_exp(100), 200));
        assert!(!token_is_expired(&jwt_with_exp(300), 200));
    }

    #[test]
    fn opaque_tokens_are_not_expired() {
        assert!(!token_is_expired("a1b2c3", 200));
    }

    #[test]
    fn stored_session_requires_token_and_user() {
        clear_auth_session();
        assert!(stored_session().is_none());

        let response = LoginResponse {
            token: "opaque-token".into(),
            user: User {
                id: 1,
                first_name: "Lina".into(),
                last_name: "Benali".into(),
                email: "lina@rh.fr".into(),
                role: Role::Employee,
                is_verified: true,
                created_at: None,
                updated_at: None,
            },
        };
        persist_session(&response).unwrap();
        let (token, user) = stored_session().unwrap();
        assert_eq!(token, "opaque-token");
        assert_eq!(user.email, "lina@rh.fr");

        clear_auth_session();
        assert!(stored_session().is_none());
    }

    #[test]
    fn stored_session_discards_expired_token() {
        storage::set_item(storage::ACCESS_TOKEN_KEY, &jwt_with_exp(1)).unwrap();
        storage::set_item(storage::CURRENT_USER_KEY, "{}").unwrap();
        assert!(stored_session().is_none());
        assert!(storage::get_item(storage::ACCESS_TOKEN_KEY).is_none());
    }
}
