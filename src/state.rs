//! Explicit application state with pure transitions.
//!
//! Session and selection state is a value threaded through the program, not
//! an ambient singleton. Every transition consumes a state and returns the
//! next one; the persistent vector makes cloning across transitions cheap.

use im::Vector;

use crate::core::{Area, MetricRecord};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub authenticated: bool,
    pub selected_area: Option<Area>,
    pub records: Vector<MetricRecord>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login(self) -> Self {
        Self {
            authenticated: true,
            ..self
        }
    }

    pub fn logout(self) -> Self {
        Self {
            authenticated: false,
            ..self
        }
    }

    pub fn select_area(self, area: Option<Area>) -> Self {
        Self {
            selected_area: area,
            ..self
        }
    }

    /// Append a KPI entry. Records are immutable once added.
    pub fn record(self, record: MetricRecord) -> Self {
        let mut records = self.records;
        records.push_back(record);
        Self { records, ..self }
    }

    pub fn records_for(&self, area: Area) -> impl Iterator<Item = &MetricRecord> {
        self.records.iter().filter(move |r| r.area == area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(area: Area, line: &str) -> MetricRecord {
        MetricRecord {
            id: format!("{area}-{line}"),
            area,
            date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            line: line.into(),
            shift: "T1".into(),
            metrics: Vec::new(),
        }
    }

    #[test]
    fn login_and_logout_toggle_authentication_only() {
        let state = AppState::new().select_area(Some(Area::Safety)).login();
        assert!(state.authenticated);
        let state = state.logout();
        assert!(!state.authenticated);
        // selection survives logout, as the original store behaved
        assert_eq!(state.selected_area, Some(Area::Safety));
    }

    #[test]
    fn transitions_leave_prior_states_untouched() {
        let before = AppState::new().record(record(Area::Safety, "L06"));
        let after = before.clone().record(record(Area::Quality, "L07"));
        assert_eq!(before.records.len(), 1);
        assert_eq!(after.records.len(), 2);
    }

    #[test]
    fn records_for_filters_by_area() {
        let state = AppState::new()
            .record(record(Area::Safety, "L06"))
            .record(record(Area::Quality, "L07"))
            .record(record(Area::Safety, "ENT"));
        let lines: Vec<&str> = state
            .records_for(Area::Safety)
            .map(|r| r.line.as_str())
            .collect();
        assert_eq!(lines, vec!["L06", "ENT"]);
    }
}
