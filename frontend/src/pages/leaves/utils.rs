use crate::api::{ApiError, LeaveRequest, LeaveRequestPayload, LeaveStatus, LeaveType};
use crate::utils::dates::{format_date_input, leave_duration_days, parse_date_input};
use leptos::*;

pub const INVERTED_RANGE_MESSAGE: &str =
    "La date de fin doit être postérieure ou égale à la date de début.";

/// Checks raw form input and builds the request body.
///
/// An inverted range is rejected here so that no request is ever sent for it.
pub fn validate_leave_form(
    type_conge: &str,
    date_debut: &str,
    date_fin: &str,
    description: &str,
) -> Result<LeaveRequestPayload, ApiError> {
    let type_conge = LeaveType::parse(type_conge)
        .ok_or_else(|| ApiError::field("type_conge", "Veuillez choisir un type de congé."))?;
    let start = parse_date_input(date_debut)
        .ok_or_else(|| ApiError::field("date_debut", "Veuillez saisir une date de début valide."))?;
    let end = parse_date_input(date_fin)
        .ok_or_else(|| ApiError::field("date_fin", "Veuillez saisir une date de fin valide."))?;
    if end < start {
        return Err(ApiError::field("date_fin", INVERTED_RANGE_MESSAGE));
    }
    Ok(LeaveRequestPayload {
        type_conge,
        date_debut: start,
        date_fin: end,
        description: description.trim().to_string(),
    })
}

/// Duration shown next to the form; `None` until both dates are valid and ordered.
pub fn duration_preview(date_debut: &str, date_fin: &str) -> Option<i64> {
    let start = parse_date_input(date_debut)?;
    let end = parse_date_input(date_fin)?;
    (end >= start).then(|| leave_duration_days(start, end))
}

#[derive(Clone, Copy)]
pub struct LeaveFormState {
    type_conge: RwSignal<String>,
    date_debut: RwSignal<String>,
    date_fin: RwSignal<String>,
    description: RwSignal<String>,
}

impl Default for LeaveFormState {
    fn default() -> Self {
        Self {
            type_conge: create_rw_signal(LeaveType::CongePaye.as_str().to_string()),
            date_debut: create_rw_signal(String::new()),
            date_fin: create_rw_signal(String::new()),
            description: create_rw_signal(String::new()),
        }
    }
}

impl LeaveFormState {
    pub fn type_signal(&self) -> RwSignal<String> {
        self.type_conge
    }

    pub fn start_signal(&self) -> RwSignal<String> {
        self.date_debut
    }

    pub fn end_signal(&self) -> RwSignal<String> {
        self.date_fin
    }

    pub fn description_signal(&self) -> RwSignal<String> {
        self.description
    }

    pub fn reset(&self) {
        self.type_conge.set(LeaveType::CongePaye.as_str().to_string());
        self.date_debut.set(String::new());
        self.date_fin.set(String::new());
        self.description.set(String::new());
    }

    pub fn load_from(&self, leave: &LeaveRequest) {
        self.type_conge.set(leave.type_conge.as_str().to_string());
        self.date_debut.set(format_date_input(leave.date_debut));
        self.date_fin.set(format_date_input(leave.date_fin));
        self.description.set(leave.description.clone());
    }

    pub fn duration(&self) -> Option<i64> {
        duration_preview(&self.date_debut.get(), &self.date_fin.get())
    }

    pub fn snapshot(&self) -> LeaveFormInput {
        LeaveFormInput {
            type_conge: self.type_conge.get_untracked(),
            date_debut: self.date_debut.get_untracked(),
            date_fin: self.date_fin.get_untracked(),
            description: self.description.get_untracked(),
        }
    }
}

/// Raw form values captured at submit time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LeaveFormInput {
    pub type_conge: String,
    pub date_debut: String,
    pub date_fin: String,
    pub description: String,
}

impl LeaveFormInput {
    pub fn validate(&self) -> Result<LeaveRequestPayload, ApiError> {
        validate_leave_form(
            &self.type_conge,
            &self.date_debut,
            &self.date_fin,
            &self.description,
        )
    }
}

pub fn leave_type_options() -> Vec<(String, String)> {
    LeaveType::ALL
        .iter()
        .map(|kind| (kind.as_str().to_string(), kind.label().to_string()))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(LeaveStatus),
}

impl StatusFilter {
    pub const CHOICES: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Only(LeaveStatus::EnAttente),
        StatusFilter::Only(LeaveStatus::Approuve),
        StatusFilter::Only(LeaveStatus::Rejete),
    ];

    /// Select value: empty for "all", otherwise the wire status.
    pub fn as_value(&self) -> &'static str {
        match self {
            StatusFilter::All => "",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "Tous les statuts",
            StatusFilter::Only(status) => status.label(),
        }
    }

    pub fn parse(value: &str) -> Self {
        Self::CHOICES
            .into_iter()
            .find(|choice| choice.as_value() == value)
            .unwrap_or_default()
    }

    pub fn matches(&self, leave: &LeaveRequest) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => leave.statut == *status,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl StatusCounts {
    pub fn from_leaves(leaves: &[LeaveRequest]) -> Self {
        leaves.iter().fold(Self::default(), |mut counts, leave| {
            counts.total += 1;
            match leave.statut {
                LeaveStatus::EnAttente => counts.pending += 1,
                LeaveStatus::Approuve => counts.approved += 1,
                LeaveStatus::Rejete => counts.rejected += 1,
            }
            counts
        })
    }
}

/// Status filter plus a case-insensitive match on the employee name.
pub fn filter_leaves(leaves: &[LeaveRequest], filter: StatusFilter, query: &str) -> Vec<LeaveRequest> {
    let needle = query.trim().to_lowercase();
    leaves
        .iter()
        .filter(|leave| filter.matches(leave))
        .filter(|leave| needle.is_empty() || leave.employee_display().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Newest first, by start date then id.
pub fn sort_newest_first(leaves: &mut [LeaveRequest]) {
    leaves.sort_by(|a, b| b.date_debut.cmp(&a.date_debut).then(b.id.cmp(&a.id)));
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditGate {
    Form,
    Redirect(String),
}

/// Only pending requests can be edited; anything else goes back to its detail page.
pub fn edit_gate(leave: &LeaveRequest) -> EditGate {
    if leave.is_pending() {
        EditGate::Form
    } else {
        EditGate::Redirect(format!("/employee/leaves/{}", leave.id))
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::api::{LeaveRequest, LeaveStatus, LeaveType, PersonSummary, Ref};
    use chrono::NaiveDate;

    pub fn leave(id: i64, statut: LeaveStatus, employee: &str) -> LeaveRequest {
        let (first_name, last_name) = employee.split_once(' ').unwrap_or((employee, ""));
        LeaveRequest {
            id,
            employee: Ref::Embedded(PersonSummary {
                id: 100 + id,
                first_name: first_name.into(),
                last_name: last_name.into(),
                email: String::new(),
                matricule: None,
                user: None,
            }),
            employee_name: None,
            date_debut: NaiveDate::from_ymd_opt(2024, 3, id as u32).unwrap(),
            date_fin: NaiveDate::from_ymd_opt(2024, 3, id as u32 + 2).unwrap(),
            type_conge: LeaveType::CongePaye,
            description: "Vacances".into(),
            statut,
            raison: None,
            created_at: None,
            updated_at: None,
        }
    }
}
