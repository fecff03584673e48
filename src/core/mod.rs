pub mod types;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use types::{
    Action, ActionStatus, Area, CalendarMode, Cause, ComparisonMode, DailyMetricPoint, GroupBy,
    GroupKey, GroupedSeriesPoint, MetricRecord, MetricValue, RankedCause,
};

/// Result of aggregating a metric series over a date range, ready for rendering.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SeriesReport {
    pub generated: DateTime<Utc>,
    pub group_by: GroupBy,
    pub calendar: CalendarMode,
    pub comparison: ComparisonMode,
    /// Categories (production lines) in display order.
    pub categories: Vec<String>,
    /// Compliance threshold applied when rendering, if any.
    pub target: Option<f64>,
    pub points: Vec<GroupedSeriesPoint>,
}

/// Result of ranking a set of corrective-action causes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ParetoReport {
    pub generated: DateTime<Utc>,
    pub total_units: u64,
    pub causes: Vec<RankedCause>,
}

impl SeriesReport {
    /// Column headers for tabular rendering: one per group in series order.
    pub fn column_labels(&self) -> Vec<String> {
        self.points.iter().map(|p| p.key.to_string()).collect()
    }
}
