use crate::api::OrgEntity;
use crate::utils::csv::build_csv;
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Case-insensitive substring match over each item's search text.
pub fn filter_by_query<E: OrgEntity>(items: &[E], query: &str) -> Vec<E> {
    let needle = query.trim().to_lowercase();
    items
        .iter()
        .filter(|item| needle.is_empty() || item.search_text().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Ids ticked in an index table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: BTreeSet<i64>,
}

impl SelectionState {
    pub fn is_selected(&self, id: i64) -> bool {
        self.selected.contains(&id)
    }

    pub fn toggle(&mut self, id: i64) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// True when every visible row is ticked (and there is at least one).
    pub fn all_selected(&self, visible: &[i64]) -> bool {
        !visible.is_empty() && visible.iter().all(|id| self.selected.contains(id))
    }

    /// Ticks every visible row, or unticks them all if they already are.
    pub fn toggle_all(&mut self, visible: &[i64]) {
        if self.all_selected(visible) {
            for id in visible {
                self.selected.remove(id);
            }
        } else {
            self.selected.extend(visible.iter().copied());
        }
    }

    /// Drops ids no longer on screen, e.g. after a search or a reload.
    pub fn retain_visible(&mut self, visible: &[i64]) {
        self.selected.retain(|id| visible.contains(id));
    }

    pub fn remove_all(&mut self, ids: &[i64]) {
        for id in ids {
            self.selected.remove(id);
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn ids(&self) -> Vec<i64> {
        self.selected.iter().copied().collect()
    }
}

pub fn export_csv<E: OrgEntity>(items: &[E]) -> String {
    let rows: Vec<Vec<String>> = items.iter().map(OrgEntity::csv_row).collect();
    build_csv(E::csv_headers(), &rows)
}

pub fn export_filename<E: OrgEntity>(date: NaiveDate) -> String {
    format!("{}_{}.csv", E::EXPORT_NAME, date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Department, PersonSummary, Ref};

    fn department(id: i64, nom: &str, chef: Option<&str>) -> Department {
        Department {
            id,
            nom: nom.into(),
            description: format!("Service {}", nom),
            chef_departement: chef.map(|name| {
                let (first, last) = name.split_once(' ').unwrap_or((name, ""));
                Ref::Embedded(PersonSummary {
                    id: id * 10,
                    first_name: first.into(),
                    last_name: last.into(),
                    email: String::new(),
                    matricule: None,
                    user: None,
                })
            }),
        }
    }

    fn sample() -> Vec<Department> {
        vec![
            department(1, "Informatique", Some("Hugo Petit")),
            department(2, "Finance", None),
            department(3, "Ressources humaines", Some("Emma Leroy")),
        ]
    }

    #[test]
    fn search_is_case_insensitive_and_covers_related_names() {
        let items = sample();
        let ids = |found: Vec<Department>| found.iter().map(|d| d.id).collect::<Vec<_>>();
        assert_eq!(ids(filter_by_query(&items, "FINANCE")), vec![2]);
        assert_eq!(ids(filter_by_query(&items, "leroy")), vec![3]);
        assert_eq!(ids(filter_by_query(&items, "  ")), vec![1, 2, 3]);
    }

    #[test]
    fn select_all_applies_to_visible_rows_only() {
        let mut selection = SelectionState::default();
        selection.toggle(9);
        selection.toggle_all(&[1, 2]);
        assert_eq!(selection.ids(), vec![1, 2, 9]);
        assert!(selection.all_selected(&[1, 2]));

        selection.toggle_all(&[1, 2]);
        assert_eq!(selection.ids(), vec![9]);

        selection.retain_visible(&[1, 2]);
        assert!(selection.is_empty());
        assert!(!selection.all_selected(&[]));
    }

    #[test]
    fn toggling_twice_unselects() {
        let mut selection = SelectionState::default();
        selection.toggle(4);
        assert!(selection.is_selected(4));
        selection.toggle(4);
        assert!(!selection.is_selected(4));
    }

    #[test]
    fn csv_export_has_one_line_per_filtered_row_plus_header() {
        let filtered = filter_by_query(&sample(), "e");
        let csv = export_csv(&filtered);
        assert_eq!(csv.lines().count(), filtered.len() + 1);
        assert!(csv.starts_with("\"ID\",\"Nom\""));
        assert!(csv.contains("\"Hugo Petit\""));
    }

    #[test]
    fn export_file_name_carries_the_date() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(export_filename::<Department>(date), "departements_2024-06-01.csv");
    }
}
