pub mod dashboard;
pub mod departements;
pub mod employes;
pub mod forgot_password;
pub mod leave_review;
pub mod leaves;
pub mod login;
pub mod org;
pub mod postes;
pub mod profile;
pub mod staff;

use leptos::*;
use leptos_router::use_params_map;

/// Numeric `:id` segment of the current route; `None` when absent or malformed.
pub fn use_id_param() -> Signal<Option<i64>> {
    let params = use_params_map();
    Signal::derive(move || params.with(|params| parse_id(params.get("id").map(String::as_str))))
}

fn parse_id(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .filter(|id| *id > 0)
}

#[cfg(test)]
mod tests {
    use super::parse_id;

    #[test]
    fn route_ids_must_be_positive_integers() {
        assert_eq!(parse_id(Some("42")), Some(42));
        assert_eq!(parse_id(Some("abc")), None);
        assert_eq!(parse_id(Some("-3")), None);
        assert_eq!(parse_id(None), None);
    }
}
