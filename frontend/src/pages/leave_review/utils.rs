use crate::api::{ApiError, LeaveRequest, LeaveReviewPayload, LeaveStatus};

pub const MISSING_REASON_MESSAGE: &str = "Veuillez indiquer la raison du rejet.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDecision {
    Approve,
    Reject,
}

impl ReviewDecision {
    pub fn status(&self) -> LeaveStatus {
        match self {
            ReviewDecision::Approve => LeaveStatus::Approuve,
            ReviewDecision::Reject => LeaveStatus::Rejete,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ReviewDecision::Approve => "Approuver la demande",
            ReviewDecision::Reject => "Rejeter la demande",
        }
    }

    pub fn confirm_label(&self) -> &'static str {
        match self {
            ReviewDecision::Approve => "Approuver",
            ReviewDecision::Reject => "Rejeter",
        }
    }

    pub fn reason_label(&self) -> &'static str {
        match self {
            ReviewDecision::Approve => "Commentaire (facultatif)",
            ReviewDecision::Reject => "Raison du rejet",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            ReviewDecision::Approve => "La demande a été approuvée.",
            ReviewDecision::Reject => "La demande a été rejetée.",
        }
    }

    pub fn requires_reason(&self) -> bool {
        matches!(self, ReviewDecision::Reject)
    }
}

/// A rejection needs a non-blank reason; an approval accepts an empty one.
pub fn validate_review(decision: ReviewDecision, raison: &str) -> Result<String, ApiError> {
    let raison = raison.trim();
    if decision.requires_reason() && raison.is_empty() {
        return Err(ApiError::field("raison", MISSING_REASON_MESSAGE));
    }
    Ok(raison.to_string())
}

/// Full-update body: the request's own fields plus the decision.
pub fn build_review_payload(
    leave: &LeaveRequest,
    decision: ReviewDecision,
    raison: &str,
) -> Result<LeaveReviewPayload, ApiError> {
    let raison = validate_review(decision, raison)?;
    Ok(LeaveReviewPayload {
        type_conge: leave.type_conge,
        date_debut: leave.date_debut,
        date_fin: leave.date_fin,
        description: leave.description.clone(),
        statut: decision.status(),
        raison,
    })
}
