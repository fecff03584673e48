use anyhow::{Context, Result};
use chrono::Utc;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use crate::core::{Cause, ParetoReport};
use crate::entry::validate_cause;
use crate::io::output::{create_writer, ColorPalette, OutputFormat};
use crate::pareto::{rank_pareto, total_units};

pub struct ParetoOptions {
    pub input: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub palette: ColorPalette,
}

pub fn run(options: ParetoOptions) -> Result<()> {
    let file = File::open(&options.input)
        .with_context(|| format!("failed to open causes file {}", options.input.display()))?;
    let raw: Vec<Cause> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse causes file {}", options.input.display()))?;

    // File input passes through the same admission checks as interactive
    // entry; entries the form would have refused are skipped.
    let mut causes = Vec::with_capacity(raw.len());
    for cause in raw {
        match validate_cause(
            cause.id.clone(),
            cause.description.clone(),
            cause.units,
            cause.comments.clone(),
        ) {
            Ok(cause) => causes.push(cause),
            Err(err) => log::warn!("skipping cause {}: {err}", cause.id),
        }
    }

    let report = ParetoReport {
        generated: Utc::now(),
        total_units: total_units(&causes),
        causes: rank_pareto(&causes),
    };
    log::info!("ranked {} causes", report.causes.len());

    let mut writer = create_writer(options.output.as_deref(), options.format, options.palette)?;
    writer.write_pareto(&report)
}
