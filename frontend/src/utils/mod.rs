pub mod browser;
pub mod csv;
pub mod dates;
pub mod download;
pub mod storage;

pub use download::trigger_csv_download;
