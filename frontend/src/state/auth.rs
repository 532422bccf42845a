use crate::{
    api::{clear_auth_session, stored_session, ApiClient, ApiError, LoginRequest, Role, User},
    utils::{browser, storage},
};
use leptos::*;

pub type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

/// Immutable session snapshot. Every change replaces the whole value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub is_authenticated: bool,
    pub loading: bool,
}

impl AuthState {
    pub fn signed_in(token: impl Into<String>, user: User) -> Self {
        Self {
            user: Some(user),
            token: Some(token.into()),
            is_authenticated: true,
            loading: false,
        }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }

    pub fn with_user(&self, user: User) -> Self {
        Self {
            user: Some(user),
            ..self.clone()
        }
    }

    pub fn with_loading(&self, loading: bool) -> Self {
        Self {
            loading,
            ..self.clone()
        }
    }
}

/// Snapshot rebuilt from persisted storage at startup.
pub fn hydrate_from_storage() -> AuthState {
    match stored_session() {
        Some((token, user)) => AuthState::signed_in(token, user),
        None => AuthState::signed_out(),
    }
}

fn create_auth_context() -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(hydrate_from_storage());

    if auth_state.get_untracked().is_authenticated {
        let api_client = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        set_auth_state.update(|state| *state = state.with_loading(true));
        spawn_local(async move {
            refresh_profile(&api_client, set_auth_state).await;
        });
    }

    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

/// Re-reads the profile after hydration. Any failure ends the session.
pub async fn refresh_profile(api_client: &ApiClient, set_auth_state: WriteSignal<AuthState>) {
    match api_client.get_profile().await {
        Ok(user) => set_auth_state.update(|state| *state = state.with_user(user).with_loading(false)),
        Err(err) => {
            log::warn!("Session refresh failed: {:?}", err);
            clear_auth_session();
            set_auth_state.set(AuthState::signed_out());
        }
    }
}

pub async fn login_request(
    request: LoginRequest,
    api_client: &ApiClient,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<User, ApiError> {
    set_auth_state.update(|state| *state = state.with_loading(true));

    match api_client.login(request).await {
        Ok(response) => {
            let user = response.user.clone();
            set_auth_state.set(AuthState::signed_in(response.token, response.user));
            Ok(user)
        }
        Err(error) => {
            set_auth_state.update(|state| *state = state.with_loading(false));
            Err(error)
        }
    }
}

/// Local teardown only: the API keeps no server-side session to revoke.
pub fn logout(set_auth_state: WriteSignal<AuthState>) {
    clear_auth_session();
    set_auth_state.set(AuthState::signed_out());
    log::info!("Signed out");
    browser::redirect("/");
}

/// Replaces the cached user after a profile edit.
pub fn set_current_user(set_auth_state: WriteSignal<AuthState>, user: User) {
    set_auth_state.update(|state| *state = state.with_user(user));
}

pub fn use_login_action() -> Action<LoginRequest, Result<User, ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let api = api.clone();
        async move { login_request(payload, &api, set_auth).await }
    })
}

pub fn use_logout() -> Callback<()> {
    let (_auth, set_auth) = use_auth();
    Callback::new(move |_| logout(set_auth))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::employee_user;
    use crate::test_support::helpers::with_runtime;

    #[test]
    fn use_auth_returns_default_without_context() {
        with_runtime(|| {
            let (state, _set_state) = use_auth();
            let snapshot = state.get();
            assert!(!snapshot.is_authenticated);
            assert!(snapshot.user.is_none());
        });
    }

    #[test]
    fn snapshots_are_replaced_not_mutated() {
        let before = AuthState::signed_in("tok", employee_user());
        let after = before.with_loading(true);
        assert!(!before.loading);
        assert!(after.loading);
        assert_eq!(after.role(), Some(Role::Employee));
    }

    #[test]
    fn hydrate_reads_persisted_session() {
        clear_auth_session();
        assert_eq!(hydrate_from_storage(), AuthState::signed_out());

        crate::api::client::store_current_user(&employee_user()).unwrap();
        storage::set_item(storage::ACCESS_TOKEN_KEY, "tok").unwrap();
        let state = hydrate_from_storage();
        assert!(state.is_authenticated);
        assert_eq!(state.token.as_deref(), Some("tok"));
        clear_auth_session();
    }

    #[test]
    fn logout_clears_storage_and_redirects_home() {
        with_runtime(|| {
            storage::set_item(storage::ACCESS_TOKEN_KEY, "tok").unwrap();
            let (state, set_state) = create_signal(AuthState::signed_in("tok", employee_user()));
            logout(set_state);
            assert_eq!(state.get(), AuthState::signed_out());
            assert!(storage::get_item(storage::ACCESS_TOKEN_KEY).is_none());
            assert_eq!(browser::take_last_redirect().as_deref(), Some("/"));
        });
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn user_json(role: &str) -> serde_json::Value {
        json!({
            "id": 1,
            "first_name": "Alice",
            "last_name": "Martin",
            "email": "alice@rh.fr",
            "role": role,
            "is_verified": true
        })
    }

    #[tokio::test]
    async fn login_then_logout_updates_auth_state() {
        clear_auth_session();
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/users/login/");
            then.status(200)
                .json_body(json!({ "token": "tok-9", "user": user_json("superadmin") }));
        });

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let api = ApiClient::new_with_base_url(server.url("/api"));

        let user = login_request(
            LoginRequest {
                email: "alice@rh.fr".into(),
                password: "secret123".into(),
            },
            &api,
            set_state,
        )
        .await
        .unwrap();

        assert_eq!(user.role, Role::SuperAdmin);
        let snapshot = state.get();
        assert!(snapshot.is_authenticated);
        assert_eq!(snapshot.token.as_deref(), Some("tok-9"));

        logout(set_state);
        let snapshot = state.get();
        assert!(!snapshot.is_authenticated);
        assert!(snapshot.user.is_none());
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_login_leaves_state_signed_out() {
        clear_auth_session();
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/users/login/");
            then.status(400)
                .json_body(json!({ "error": "Email ou mot de passe incorrect." }));
        });

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let api = ApiClient::new_with_base_url(server.url("/api"));

        let error = login_request(
            LoginRequest {
                email: "alice@rh.fr".into(),
                password: "bad".into(),
            },
            &api,
            set_state,
        )
        .await
        .unwrap_err();

        assert_eq!(error.to_string(), "Email ou mot de passe incorrect.");
        assert!(!state.get().is_authenticated);
        assert!(!state.get().loading);
        runtime.dispose();
    }

    #[tokio::test]
    async fn refresh_after_unauthorized_signs_out() {
        clear_auth_session();
        storage::set_item(storage::ACCESS_TOKEN_KEY, "expired").unwrap();
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/users/profile/");
            then.status(401).json_body(json!({ "detail": "Jeton expiré." }));
        });

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::signed_in(
            "expired",
            serde_json::from_value(user_json("admin")).unwrap(),
        ));
        let api = ApiClient::new_with_base_url(server.url("/api"));

        refresh_profile(&api, set_state).await;

        assert_eq!(state.get(), AuthState::signed_out());
        runtime.dispose();
    }
}
