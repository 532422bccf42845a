pub mod detail;
pub mod form;
pub mod status;
pub mod table;
