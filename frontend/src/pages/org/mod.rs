//! Shared index, detail and form screens for the org-structure records.
//!
//! Each record type implements [`OrgPage`] (and [`EntityForm`] for its form);
//! the screens here are generic over it.

pub mod detail;
pub mod form;
pub mod index;
pub mod repository;
pub mod utils;
pub mod view_model;

use crate::api::OrgEntity;

pub use detail::org_detail;
pub use form::{org_form, EntityForm, FormMode};
pub use index::{org_index, IndexFilter};
pub use repository::{BulkDeleteOutcome, CrudRepository};

/// Routing and display details of an org record's screens.
pub trait OrgPage: OrgEntity {
    /// Index path, e.g. `/admin/departements`.
    const BASE_PATH: &'static str;
    const INDEX_SUBTITLE: &'static str;
    const NEW_TITLE: &'static str;
    const EDIT_TITLE: &'static str;
    const DETAIL_TITLE: &'static str;
    const EMPTY_MESSAGE: &'static str;
    const TABLE_HEADERS: &'static [&'static str];

    fn table_cells(&self) -> Vec<String>;
    fn detail_rows(&self) -> Vec<(&'static str, String)>;

    fn detail_path(id: i64) -> String {
        format!("{}/{}", Self::BASE_PATH, id)
    }

    fn edit_path(id: i64) -> String {
        format!("{}/{}/edit", Self::BASE_PATH, id)
    }

    fn new_path() -> String {
        format!("{}/new", Self::BASE_PATH)
    }
}

/// Text for an optional related record in tables.
pub(crate) fn or_dash(value: String) -> String {
    if value.trim().is_empty() {
        "—".to_string()
    } else {
        value
    }
}
