use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(alias = "API_BASE_URL")]
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

fn normalize_base_url(value: &str) -> Option<String> {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn cache_base_url(value: &str) -> String {
    let value = value.to_string();
    let _ = API_BASE_URL.set(value.clone());
    value
}

#[cfg(target_arch = "wasm32")]
mod globals {
    use super::RuntimeConfig;
    use wasm_bindgen::JsValue;

    fn read_string(object: &JsValue, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| {
            js_sys::Reflect::get(object, &JsValue::from_str(key))
                .ok()
                .filter(|value| !value.is_undefined() && !value.is_null())
                .and_then(|value| value.as_string())
        })
    }

    fn read_global(name: &str, keys: &[&str]) -> Option<String> {
        let window = web_sys::window()?;
        let object = js_sys::Reflect::get(&window, &JsValue::from_str(name)).ok()?;
        if object.is_undefined() || object.is_null() {
            return None;
        }
        read_string(&object, keys)
    }

    /// `window.__GESTIONRH_ENV` wins over `window.__GESTIONRH_CONFIG`.
    pub fn snapshot() -> Option<String> {
        read_global("__GESTIONRH_ENV", &["API_BASE_URL", "api_base_url"])
            .or_else(|| read_global("__GESTIONRH_CONFIG", &["api_base_url", "API_BASE_URL"]))
    }

    pub fn write_config(config: &RuntimeConfig) {
        let (Some(window), Some(url)) = (web_sys::window(), config.api_base_url.as_ref()) else {
            return;
        };
        let object = js_sys::Object::new();
        let _ = js_sys::Reflect::set(
            &object,
            &JsValue::from_str("api_base_url"),
            &JsValue::from_str(url),
        );
        let _ = js_sys::Reflect::set(&window, &JsValue::from_str("__GESTIONRH_CONFIG"), &object);
    }

    pub fn config_json_url() -> Option<String> {
        let origin = web_sys::window()?.location().origin().ok()?;
        Some(format!("{}/config.json", origin))
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let url = globals::config_json_url()?;
    let response = reqwest::get(url).await.ok()?;
    if !response.status().is_success() {
        log::debug!("No runtime config.json ({}), using defaults", response.status());
        return None;
    }
    response.json::<RuntimeConfig>().await.ok()
}

/// Resolves the API base URL once and caches it for the session.
#[cfg(target_arch = "wasm32")]
pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = globals::snapshot().as_deref().and_then(normalize_base_url) {
        return cache_base_url(&existing);
    }
    if let Some(config) = fetch_runtime_config().await {
        globals::write_config(&config);
        if let Some(url) = config.api_base_url.as_deref().and_then(normalize_base_url) {
            return cache_base_url(&url);
        }
    }
    cache_base_url(DEFAULT_API_BASE_URL)
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn await_api_base_url() -> String {
    API_BASE_URL
        .get()
        .cloned()
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

pub async fn init() {
    let base_url = await_api_base_url().await;
    log::info!("API base URL: {}", base_url);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_trailing_slashes() {
        assert_eq!(
            normalize_base_url("https://rh.example.com/api/").as_deref(),
            Some("https://rh.example.com/api")
        );
        assert!(normalize_base_url("   ").is_none());
    }

    #[test]
    fn runtime_config_accepts_both_key_styles() {
        let lower: RuntimeConfig =
            serde_json::from_str(r#"{"api_base_url":"http://a/api"}"#).unwrap();
        let upper: RuntimeConfig =
            serde_json::from_str(r#"{"API_BASE_URL":"http://b/api"}"#).unwrap();
        assert_eq!(lower.api_base_url.as_deref(), Some("http://a/api"));
        assert_eq!(upper.api_base_url.as_deref(), Some("http://b/api"));
    }
}
