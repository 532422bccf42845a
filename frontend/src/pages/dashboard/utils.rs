use crate::api::LeaveRequest;
use crate::pages::leaves::utils::sort_newest_first;
use serde::{Deserialize, Serialize};

pub const LATEST_LEAVES: usize = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgCounts {
    pub departements: usize,
    pub postes: usize,
    pub employes: usize,
}

pub fn latest_leaves(leaves: &[LeaveRequest], limit: usize) -> Vec<LeaveRequest> {
    let mut sorted = leaves.to_vec();
    sort_newest_first(&mut sorted);
    sorted.truncate(limit);
    sorted
}

pub fn greeting(first_name: &str) -> String {
    let name = first_name.trim();
    if name.is_empty() {
        "Bonjour".to_string()
    } else {
        format!("Bonjour, {}", name)
    }
}
