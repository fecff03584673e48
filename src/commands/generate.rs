use anyhow::{Context, Result};
use chrono::Local;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::KpiConfig;
use crate::generate::demo_series;

pub struct GenerateOptions {
    pub days: u32,
    pub seed: u64,
    pub lines: Option<Vec<String>>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

pub fn run(options: GenerateOptions) -> Result<()> {
    let config = KpiConfig::load_or_default(options.config.as_deref())?;
    let lines = options.lines.unwrap_or_else(|| config.lines.clone());
    let today = Local::now().date_naive();
    let points = demo_series(&lines, today, options.days, options.seed);
    log::info!(
        "generated {} points across {} lines",
        points.len(),
        lines.len()
    );

    let json = serde_json::to_string_pretty(&points)?;
    match options.output {
        Some(path) => {
            let mut file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            file.write_all(json.as_bytes())?;
            writeln!(file)?;
        }
        None => {
            let mut stdout = io::stdout();
            stdout.write_all(json.as_bytes())?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}
