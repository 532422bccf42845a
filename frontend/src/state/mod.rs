pub mod auth;
pub mod fetch;
pub mod theme;
pub mod toast;
