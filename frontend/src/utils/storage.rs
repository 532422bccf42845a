//! String key/value persistence.
//!
//! In the browser this is `localStorage`. Native builds (host tests) use a
//! thread-local map with the same API so session code runs without a DOM.

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const CURRENT_USER_KEY: &str = "current_user";
pub const THEME_KEY: &str = "theme";

#[cfg(target_arch = "wasm32")]
mod backend {
    use web_sys::{Storage, Window};

    pub fn window() -> Result<Window, String> {
        web_sys::window().ok_or_else(|| "No window object".to_string())
    }

    pub fn local_storage() -> Result<Storage, String> {
        window()?
            .local_storage()
            .map_err(|_| "No localStorage".to_string())?
            .ok_or_else(|| "No localStorage".to_string())
    }

    pub fn get_item(key: &str) -> Result<Option<String>, String> {
        local_storage()?
            .get_item(key)
            .map_err(|_| format!("Failed to read {}", key))
    }

    pub fn set_item(key: &str, value: &str) -> Result<(), String> {
        local_storage()?
            .set_item(key, value)
            .map_err(|_| format!("Failed to store {}", key))
    }

    pub fn remove_item(key: &str) -> Result<(), String> {
        local_storage()?
            .remove_item(key)
            .map_err(|_| format!("Failed to remove {}", key))
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static STORE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub fn get_item(key: &str) -> Result<Option<String>, String> {
        Ok(STORE.with(|store| store.borrow().get(key).cloned()))
    }

    pub fn set_item(key: &str, value: &str) -> Result<(), String> {
        STORE.with(|store| {
            store.borrow_mut().insert(key.to_string(), value.to_string());
        });
        Ok(())
    }

    pub fn remove_item(key: &str) -> Result<(), String> {
        STORE.with(|store| {
            store.borrow_mut().remove(key);
        });
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use backend::{local_storage, window};

pub fn get_item(key: &str) -> Option<String> {
    backend::get_item(key).ok().flatten()
}

pub fn set_item(key: &str, value: &str) -> Result<(), String> {
    backend::set_item(key, value)
}

pub fn remove_item(key: &str) {
    if let Err(err) = backend::remove_item(key) {
        log::warn!("{}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn set_get_and_remove_round_trip_through_store() {
        set_item("storage-test-key", "value").unwrap();
        assert_eq!(get_item("storage-test-key").as_deref(), Some("value"));
        remove_item("storage-test-key");
        assert!(get_item("storage-test-key").is_none());
    }
}
