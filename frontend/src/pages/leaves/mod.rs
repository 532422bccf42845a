//! Employee-facing leave requests: list with create dialog, detail and edit.
//!
//! The repository, filters and table are shared with the reviewer pages.

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod detail;
mod edit;
mod panel;

pub(crate) use detail::missing_id;
pub use detail::EmployeeLeaveDetailPage;
pub use edit::EmployeeLeaveEditPage;
pub use panel::EmployeeLeavesPage;
