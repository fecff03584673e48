//! Common type definitions used across the codebase

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// KPI areas reviewed at the tier board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Area {
    Safety,
    Quality,
    Delivery,
    Production,
    Cost,
}

impl Area {
    /// Get the display name for this area
    pub fn display_name(&self) -> &str {
        match self {
            Area::Safety => "Safety",
            Area::Quality => "Quality",
            Area::Delivery => "Delivery",
            Area::Production => "Production",
            Area::Cost => "Cost",
        }
    }

    /// All areas in board review order
    pub fn all() -> [Area; 5] {
        [
            Area::Safety,
            Area::Quality,
            Area::Delivery,
            Area::Production,
            Area::Cost,
        ]
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl std::str::FromStr for Area {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "safety" => Ok(Area::Safety),
            "quality" => Ok(Area::Quality),
            "delivery" => Ok(Area::Delivery),
            "production" => Ok(Area::Production),
            "cost" => Ok(Area::Cost),
            other => Err(format!("unknown KPI area: {other}")),
        }
    }
}

/// One measurement for one category (production line) on one day.
/// Immutable once recorded; corrections are new points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyMetricPoint {
    pub date: NaiveDate,
    pub category: String,
    pub value: f64,
}

impl DailyMetricPoint {
    pub fn new(date: NaiveDate, category: impl Into<String>, value: f64) -> Self {
        Self {
            date,
            category: category.into(),
            value,
        }
    }
}

/// A corrective-action cause, as admitted by the entry boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cause {
    pub id: String,
    pub description: String,
    pub units: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

/// A cause with its position in the Pareto ranking attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCause {
    pub id: String,
    pub description: String,
    pub units: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    /// Running share of total units, 0-100, non-decreasing across the ranking.
    pub accumulated_percent: f64,
}

/// Key identifying one bucket of an aggregated series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GroupKey {
    Day(NaiveDate),
    Label(String),
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::Day(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            GroupKey::Label(label) => f.write_str(label),
        }
    }
}

/// One bucket of an aggregated series: one value per category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedSeriesPoint {
    pub key: GroupKey,
    pub values: BTreeMap<String, f64>,
}

impl GroupedSeriesPoint {
    /// Value for a category, zero when absent.
    pub fn value(&self, category: &str) -> f64 {
        self.values.get(category).copied().unwrap_or(0.0)
    }
}

/// How days are bucketed into series groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupBy {
    Day,
    Week,
    Month,
}

/// Which calendar convention week bucketing follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalendarMode {
    Natural,
    Corporate,
}

/// Optional companion series shown next to each category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComparisonMode {
    None,
    PreviousWeek,
    PreviousYear,
}

/// One metric value inside a recorded KPI entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricValue {
    pub id: String,
    pub name: String,
    pub target: f64,
    pub current: f64,
    pub unit: String,
}

/// A full KPI entry for one area, line, shift and day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    pub id: String,
    pub area: Area,
    pub date: NaiveDate,
    pub line: String,
    pub shift: String,
    pub metrics: Vec<MetricValue>,
}

/// Follow-up state of a corrective action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionStatus {
    Pending,
    InProgress,
    Completed,
}

impl fmt::Display for ActionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActionStatus::Pending => "pending",
            ActionStatus::InProgress => "in-progress",
            ActionStatus::Completed => "completed",
        };
        f.write_str(name)
    }
}

/// A corrective action tied to a ranked cause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub id: String,
    pub cause_id: String,
    pub description: String,
    pub responsible: String,
    pub due_date: NaiveDate,
    pub status: ActionStatus,
}
