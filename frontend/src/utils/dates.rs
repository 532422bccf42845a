use chrono::{DateTime, NaiveDate, Utc};

pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Inclusive number of days covered by a leave: `|end - start| + 1`.
///
/// The absolute difference keeps the count positive for an inverted range;
/// callers reject inverted ranges before showing or submitting a duration.
pub fn leave_duration_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days().abs() + 1
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_INPUT_FORMAT).ok()
}

pub fn format_date_input(date: NaiveDate) -> String {
    date.format(DATE_INPUT_FORMAT).to_string()
}

pub fn format_date_fr(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

pub fn format_datetime_fr(value: DateTime<Utc>) -> String {
    value.format("%d/%m/%Y %H:%M").to_string()
}

pub fn format_duration_fr(days: i64) -> String {
    if days <= 1 {
        format!("{} jour", days)
    } else {
        format!("{} jours", days)
    }
}
