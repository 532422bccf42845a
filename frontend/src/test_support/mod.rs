#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{Role, User};
    use crate::state::auth::AuthState;
    use leptos::*;

    pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = f();
        runtime.dispose();
        result
    }

    fn user_with_role(id: i64, role: Role, first_name: &str, last_name: &str) -> User {
        User {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: format!("{}@rh.fr", first_name.to_lowercase()),
            role,
            is_verified: true,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn employee_user() -> User {
        user_with_role(10, Role::Employee, "Emma", "Leroy")
    }

    pub fn admin_user() -> User {
        user_with_role(20, Role::Admin, "Adam", "Moreau")
    }

    pub fn superadmin_user() -> User {
        user_with_role(30, Role::SuperAdmin, "Sophie", "Bernard")
    }

    pub fn provide_auth(user: Option<User>) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let state = match user {
            Some(user) => AuthState::signed_in("test-token", user),
            None => AuthState::signed_out(),
        };
        let (auth, set_auth) = create_signal(state);
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}
