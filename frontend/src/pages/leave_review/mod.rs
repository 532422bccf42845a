//! Super-admin review of leave requests: list, detail, approve, reject, delete.

pub mod components;
pub mod utils;
pub mod view_model;

mod detail;
mod panel;

pub use detail::LeaveReviewDetailPage;
pub use panel::LeaveReviewListPage;
