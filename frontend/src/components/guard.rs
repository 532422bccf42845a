use crate::{
    api::Role,
    components::layout::LoadingSpinner,
    state::auth::{use_auth, AuthState},
    utils::browser,
};
use leptos::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    Wait,
    Render,
    Redirect(&'static str),
}

/// Decides what a protected route does for the current session.
///
/// Anonymous visitors go to the login page; signed-in users without one of
/// `allowed` roles go to their own dashboard.
pub fn guard_outcome(state: &AuthState, allowed: &[Role]) -> GuardOutcome {
    if !state.is_authenticated {
        return if state.loading {
            GuardOutcome::Wait
        } else {
            GuardOutcome::Redirect("/")
        };
    }
    match state.role() {
        Some(role) if allowed.is_empty() || allowed.contains(&role) => GuardOutcome::Render,
        Some(role) => GuardOutcome::Redirect(role.landing_path()),
        None if state.loading => GuardOutcome::Wait,
        None => GuardOutcome::Redirect("/"),
    }
}

/// Renders `children` only for a signed-in user holding one of `roles`.
/// An empty list admits every role.
#[component]
pub fn RequireRole(#[prop(into)] roles: Vec<Role>, children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let roles = store_value(roles);
    let outcome =
        create_memo(move |_| roles.with_value(|roles| guard_outcome(&auth.get(), roles)));

    create_effect(move |_| {
        if let GuardOutcome::Redirect(path) = outcome.get() {
            log::debug!("Route guard redirecting to {}", path);
            browser::redirect(path);
        }
    });

    view! {
        <Show
            when=move || outcome.get() == GuardOutcome::Render
            fallback=move || {
                if outcome.get() == GuardOutcome::Wait {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

/// Public pages (login, password reset) send signed-in users to their dashboard.
#[component]
pub fn RedirectIfAuthenticated(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let landing = create_memo(move |_| {
        let state = auth.get();
        state
            .role()
            .filter(|_| state.is_authenticated)
            .map(|role| role.landing_path())
    });

    create_effect(move |_| {
        if let Some(path) = landing.get() {
            browser::redirect(path);
        }
    });

    view! {
        <Show when=move || landing.get().is_none()>
            {children()}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, employee_user, superadmin_user};

    const STAFF: &[Role] = &[Role::Admin, Role::SuperAdmin];

    #[test]
    fn anonymous_visitors_are_sent_to_login() {
        assert_eq!(
            guard_outcome(&AuthState::signed_out(), STAFF),
            GuardOutcome::Redirect("/")
        );
    }

    #[test]
    fn loading_without_session_waits() {
        let loading = AuthState::signed_out().with_loading(true);
        assert_eq!(guard_outcome(&loading, STAFF), GuardOutcome::Wait);
    }

    #[test]
    fn wrong_role_lands_on_own_dashboard() {
        let employee = AuthState::signed_in("t", employee_user());
        assert_eq!(
            guard_outcome(&employee, STAFF),
            GuardOutcome::Redirect("/employee/dashboard")
        );
        let admin = AuthState::signed_in("t", admin_user());
        assert_eq!(
            guard_outcome(&admin, &[Role::SuperAdmin]),
            GuardOutcome::Redirect("/admin/dashboard")
        );
    }

    #[test]
    fn employee_is_turned_away_from_superadmin_pages() {
        let employee = AuthState::signed_in("t", employee_user());
        let outcome = guard_outcome(&employee, &[Role::SuperAdmin]);
        assert_eq!(outcome, GuardOutcome::Redirect("/employee/dashboard"));
        assert_ne!(outcome, GuardOutcome::Render);
    }

    #[test]
    fn matching_role_renders_even_while_refreshing() {
        let superadmin = AuthState::signed_in("t", superadmin_user()).with_loading(true);
        assert_eq!(guard_outcome(&superadmin, STAFF), GuardOutcome::Render);
        let employee = AuthState::signed_in("t", employee_user());
        assert_eq!(guard_outcome(&employee, &[]), GuardOutcome::Render);
    }
}
