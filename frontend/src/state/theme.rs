use crate::utils::storage;
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|m| m.matches())
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
fn system_prefers_dark() -> bool {
    false
}

/// Stored preference first, then the OS colour scheme.
pub fn initial_theme() -> Theme {
    storage::get_item(storage::THEME_KEY)
        .as_deref()
        .and_then(Theme::parse)
        .unwrap_or_else(|| {
            if system_prefers_dark() {
                Theme::Dark
            } else {
                Theme::Light
            }
        })
}

#[cfg(target_arch = "wasm32")]
fn apply_to_dom(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let class_list = root.class_list();
    let result = match theme {
        Theme::Dark => class_list.add_1("dark"),
        Theme::Light => class_list.remove_1("dark"),
    };
    if result.is_err() {
        log::warn!("Failed to apply theme class");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn apply_to_dom(_theme: Theme) {}

#[derive(Clone, Copy)]
pub struct ThemeState {
    pub theme: RwSignal<Theme>,
}

impl ThemeState {
    pub fn new(initial: Theme) -> Self {
        Self {
            theme: create_rw_signal(initial),
        }
    }

    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        if let Err(err) = storage::set_item(storage::THEME_KEY, theme.as_str()) {
            log::warn!("Failed to persist theme: {}", err);
        }
        apply_to_dom(theme);
    }

    pub fn toggle(&self) {
        self.set_theme(self.theme.get_untracked().toggled());
    }

    pub fn current(&self) -> ReadSignal<Theme> {
        self.theme.read_only()
    }
}

pub fn use_theme() -> ThemeState {
    use_context::<ThemeState>().unwrap_or_else(provide_theme)
}

pub fn provide_theme() -> ThemeState {
    let theme = initial_theme();
    let state = ThemeState::new(theme);
    provide_context(state);
    apply_to_dom(theme);
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::with_runtime;

    #[test]
    fn toggle_flips_and_persists() {
        with_runtime(|| {
            storage::remove_item(storage::THEME_KEY);
            let state = ThemeState::new(Theme::Light);
            state.toggle();
            assert_eq!(state.current().get(), Theme::Dark);
            assert_eq!(storage::get_item(storage::THEME_KEY).as_deref(), Some("dark"));
            state.toggle();
            assert_eq!(state.current().get(), Theme::Light);
        });
    }

    #[test]
    fn initial_theme_reads_stored_preference() {
        storage::set_item(storage::THEME_KEY, "dark").unwrap();
        assert_eq!(initial_theme(), Theme::Dark);
        storage::set_item(storage::THEME_KEY, "sepia").unwrap();
        assert_eq!(initial_theme(), Theme::Light);
        storage::remove_item(storage::THEME_KEY);
    }
}
