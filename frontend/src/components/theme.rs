use crate::state::theme::{use_theme, Theme};
use leptos::*;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme_state = use_theme();
    let current_theme = theme_state.current();
    let is_dark = move || current_theme.get() == Theme::Dark;

    view! {
        <button
            type="button"
            class="relative inline-flex h-6 w-11 items-center rounded-full bg-gray-200 dark:bg-gray-700 transition-colors focus:outline-none focus:ring-2 focus:ring-primary-500 focus:ring-offset-2"
            on:click=move |_| theme_state.toggle()
            aria-label="Changer de thème"
            aria-pressed=move || is_dark().to_string()
        >
            <span class="sr-only">"Changer de thème"</span>
            <span
                class=move || {
                    format!(
                        "inline-block h-4 w-4 transform rounded-full transition-transform shadow-theme-switch {}",
                        if is_dark() { "translate-x-6 bg-primary-600" } else { "translate-x-1 bg-white" },
                    )
                }
            />
            <span
                class=move || {
                    format!(
                        "absolute left-1 top-1/2 -translate-y-1/2 text-xs text-gray-400 transition-opacity {}",
                        if is_dark() { "opacity-100" } else { "opacity-0" },
                    )
                }
            >
                <i class="fas fa-moon"></i>
            </span>
            <span
                class=move || {
                    format!(
                        "absolute right-1 top-1/2 -translate-y-1/2 text-xs text-yellow-500 transition-opacity {}",
                        if is_dark() { "opacity-0" } else { "opacity-100" },
                    )
                }
            >
                <i class="fas fa-sun"></i>
            </span>
        </button>
    }
}
