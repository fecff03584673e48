//! Data-entry boundary: admission checks for causes and actions, shift
//! totals, and below-target detection.
//!
//! The pure aggregation core never rejects input; everything that can be
//! refused is refused here, before it reaches the core.

use chrono::NaiveDate;
use thiserror::Error;

use crate::config::MetricDef;
use crate::core::{Action, ActionStatus, Cause};

/// Errors raised when admitting user-entered records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    #[error("cause description must not be empty")]
    EmptyDescription,
    #[error("cause units must be greater than zero")]
    ZeroUnits,
    #[error("action is missing required field: {0}")]
    MissingField(&'static str),
}

/// Admit a cause for Pareto analysis. Rejects an empty description or zero
/// units.
pub fn validate_cause(
    id: impl Into<String>,
    description: impl Into<String>,
    units: u32,
    comments: Option<String>,
) -> Result<Cause, EntryError> {
    let description = description.into();
    if description.trim().is_empty() {
        return Err(EntryError::EmptyDescription);
    }
    if units == 0 {
        return Err(EntryError::ZeroUnits);
    }
    Ok(Cause {
        id: id.into(),
        description,
        units,
        comments: comments.filter(|c| !c.trim().is_empty()),
    })
}

/// Admit a corrective action. Every field except status is required.
pub fn validate_action(
    id: impl Into<String>,
    cause_id: impl Into<String>,
    description: impl Into<String>,
    responsible: impl Into<String>,
    due_date: NaiveDate,
    status: ActionStatus,
) -> Result<Action, EntryError> {
    let cause_id = cause_id.into();
    if cause_id.trim().is_empty() {
        return Err(EntryError::MissingField("cause_id"));
    }
    let description = description.into();
    if description.trim().is_empty() {
        return Err(EntryError::MissingField("description"));
    }
    let responsible = responsible.into();
    if responsible.trim().is_empty() {
        return Err(EntryError::MissingField("responsible"));
    }
    Ok(Action {
        id: id.into(),
        cause_id,
        description,
        responsible,
        due_date,
        status,
    })
}

/// Compliance of a single entered value against its metric target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TargetStatus {
    Compliant,
    BelowTarget { gap: f64 },
}

/// A value at or above target is compliant; below target carries the signed
/// gap (value minus target, negative).
pub fn check_target(value: f64, target: f64) -> TargetStatus {
    if value >= target {
        TargetStatus::Compliant
    } else {
        TargetStatus::BelowTarget {
            gap: value - target,
        }
    }
}

/// Context handed to the corrective-action workflow when an entered value
/// misses its target.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrectiveActionPrompt {
    pub metric: String,
    pub line: String,
    pub date: NaiveDate,
    pub value: f64,
    pub target: f64,
}

impl CorrectiveActionPrompt {
    /// Signed shortfall shown to the operator.
    pub fn gap(&self) -> f64 {
        self.value - self.target
    }
}

/// Raise a corrective-action prompt when an entered value misses the metric
/// target.
pub fn prompt_if_below(
    metric: &MetricDef,
    line: impl Into<String>,
    date: NaiveDate,
    value: f64,
) -> Option<CorrectiveActionPrompt> {
    match check_target(value, metric.target) {
        TargetStatus::Compliant => None,
        TargetStatus::BelowTarget { .. } => Some(CorrectiveActionPrompt {
            metric: metric.name.clone(),
            line: line.into(),
            date,
            value,
            target: metric.target,
        }),
    }
}

/// Total across a line's shifts for one day; unentered cells count as zero.
pub fn shift_total<I>(values: I) -> f64
where
    I: IntoIterator<Item = Option<f64>>,
{
    values.into_iter().map(|v| v.unwrap_or(0.0)).sum()
}
