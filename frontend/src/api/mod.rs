mod auth;
pub mod client;
pub mod error;
mod leaves;
pub mod org;
pub mod types;

pub use client::*;
pub use error::*;
pub use org::{AdminAccount, OrgEntity, SuperAdminAccount};
pub use types::*;
