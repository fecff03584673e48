// Export modules for library usage
pub mod aggregate;
pub mod calendar;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod entry;
pub mod generate;
pub mod io;
pub mod pareto;
pub mod state;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionStatus, Area, CalendarMode, Cause, ComparisonMode, DailyMetricPoint, GroupBy,
    GroupKey, GroupedSeriesPoint, MetricRecord, MetricValue, ParetoReport, RankedCause,
    SeriesReport,
};

pub use crate::aggregate::{aggregate, aggregate_with_comparison};
pub use crate::calendar::{corporate_week, enumerate_days, natural_week_of_month};
pub use crate::config::KpiConfig;
pub use crate::entry::{check_target, validate_cause, EntryError, TargetStatus};
pub use crate::io::output::{create_writer, ColorPalette, OutputFormat, ReportWriter};
pub use crate::pareto::{rank_pareto, total_units};
pub use crate::state::AppState;
