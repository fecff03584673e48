use anyhow::{anyhow, Context, Result};
use chrono::{Duration, Local, NaiveDate, Utc};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use crate::aggregate::aggregate_with_comparison;
use crate::config::KpiConfig;
use crate::core::{CalendarMode, ComparisonMode, DailyMetricPoint, GroupBy, SeriesReport};
use crate::generate::demo_series;
use crate::io::output::{create_writer, ColorPalette, OutputFormat};

pub struct ReportOptions {
    pub input: Option<PathBuf>,
    pub demo: bool,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub group_by: GroupBy,
    pub calendar: CalendarMode,
    pub compare: ComparisonMode,
    pub line: Option<String>,
    pub metric: Option<String>,
    pub target: Option<f64>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub palette: ColorPalette,
    pub config: Option<PathBuf>,
}

pub fn run(options: ReportOptions) -> Result<()> {
    let config = KpiConfig::load_or_default(options.config.as_deref())?;
    let points = load_points(&options, &config)?;

    let today = Local::now().date_naive();
    let end = options.end.unwrap_or(today);
    let start = options
        .start
        .unwrap_or_else(|| end - Duration::days(i64::from(config.default_window_days) - 1));

    let categories = match &options.line {
        Some(line) => {
            if !config.lines.contains(line) {
                log::warn!("line {line} is not in the configured line list");
            }
            vec![line.clone()]
        }
        None => config.lines.clone(),
    };

    let target = resolve_target(&options, &config);
    let grouped = aggregate_with_comparison(
        &points,
        (start, end),
        &categories,
        options.group_by,
        options.calendar,
        options.compare,
    );
    log::info!(
        "aggregated {} points into {} groups over {start}..{end}",
        points.len(),
        grouped.len()
    );

    let report = SeriesReport {
        generated: Utc::now(),
        group_by: options.group_by,
        calendar: options.calendar,
        comparison: options.compare,
        categories,
        target,
        points: grouped,
    };
    let mut writer = create_writer(options.output.as_deref(), options.format, options.palette)?;
    writer.write_series(&report)
}

fn resolve_target(options: &ReportOptions, config: &KpiConfig) -> Option<f64> {
    if options.target.is_some() {
        return options.target;
    }
    let metric_id = options.metric.as_deref()?;
    match config.metric(metric_id) {
        Some(metric) => Some(metric.target),
        None => {
            log::warn!("metric {metric_id} is not configured, reporting without a target");
            None
        }
    }
}

fn load_points(options: &ReportOptions, config: &KpiConfig) -> Result<Vec<DailyMetricPoint>> {
    if options.demo {
        let today = Local::now().date_naive();
        return Ok(demo_series(&config.lines, today, 365, 42));
    }
    let path = options
        .input
        .as_ref()
        .ok_or_else(|| anyhow!("an input file is required unless --demo is set"))?;
    let file = File::open(path)
        .with_context(|| format!("failed to open series file {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse series file {}", path.display()))
}
