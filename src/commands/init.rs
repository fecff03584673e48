use anyhow::{bail, Result};
use std::fs;
use std::path::PathBuf;

use crate::config::{KpiConfig, DEFAULT_CONFIG_FILE};

/// Write the default configuration file.
pub fn init_config(force: bool, path: Option<PathBuf>) -> Result<()> {
    let path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    if path.exists() && !force {
        bail!(
            "{} already exists, pass --force to overwrite it",
            path.display()
        );
    }
    fs::write(&path, KpiConfig::default().to_toml()?)?;
    println!("wrote default configuration to {}", path.display());
    Ok(())
}
