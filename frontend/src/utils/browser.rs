//! Navigation helpers.
//!
//! [`redirect`] reloads the document and is kept for session teardown.
//! In-app moves go through [`use_navigator`] so context state survives.
//! Native builds record the requested location instead of touching a DOM.

use leptos::*;
use leptos_router::{use_navigate, NavigateOptions, RouterContext};

/// Navigates through the mounted router; without one, falls back to [`redirect`].
pub fn use_navigator() -> Callback<String> {
    if use_context::<RouterContext>().is_some() {
        let navigate = use_navigate();
        Callback::new(move |path: String| navigate(&path, NavigateOptions::default()))
    } else {
        Callback::new(move |path: String| redirect(&path))
    }
}

#[cfg(target_arch = "wasm32")]
pub fn current_path() -> Option<String> {
    web_sys::window().and_then(|w| w.location().pathname().ok())
}

#[cfg(target_arch = "wasm32")]
pub fn redirect(path: &str) {
    if current_path().as_deref() == Some(path) {
        return;
    }
    if let Some(window) = web_sys::window() {
        if window.location().set_href(path).is_err() {
            log::error!("Failed to navigate to {}", path);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
thread_local! {
    static LAST_REDIRECT: std::cell::RefCell<Option<String>> = const { std::cell::RefCell::new(None) };
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current_path() -> Option<String> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
pub fn redirect(path: &str) {
    LAST_REDIRECT.with(|last| *last.borrow_mut() = Some(path.to_string()));
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub fn take_last_redirect() -> Option<String> {
    LAST_REDIRECT.with(|last| last.borrow_mut().take())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::toast::provide_toasts;
    use crate::test_support::helpers::with_runtime;

    #[test]
    fn navigating_keeps_queued_toasts() {
        with_runtime(|| {
            let toasts = provide_toasts();
            let navigate = use_navigator();
            toasts.success("Modifications enregistrées.");
            navigate.call("/admin/postes/3".to_string());
            assert_eq!(take_last_redirect().as_deref(), Some("/admin/postes/3"));
            assert_eq!(toasts.items.with_untracked(Vec::len), 1);
        });
    }
}
