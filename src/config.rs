//! Static configuration: KPI areas and metric targets, production lines,
//! shifts and the default reporting window. Loaded from `kpimap.toml` with
//! serde defaults so a partial file only overrides what it names.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::Area;

pub const DEFAULT_CONFIG_FILE: &str = "kpimap.toml";

/// Definition of one KPI metric within an area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricDef {
    pub id: String,
    pub name: String,
    pub target: f64,
    pub unit: String,
}

/// One KPI area with its metrics and board icon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaConfig {
    pub name: Area,
    pub icon: String,
    pub metrics: Vec<MetricDef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiConfig {
    #[serde(default = "default_areas")]
    pub areas: Vec<AreaConfig>,

    /// Production lines, in display order.
    #[serde(default = "default_lines")]
    pub lines: Vec<String>,

    /// Shifts per line per day.
    #[serde(default = "default_shifts")]
    pub shifts: Vec<String>,

    /// Default reporting window in days, ending today.
    #[serde(default = "default_window_days")]
    pub default_window_days: u32,
}

impl Default for KpiConfig {
    fn default() -> Self {
        Self {
            areas: default_areas(),
            lines: default_lines(),
            shifts: default_shifts(),
            default_window_days: default_window_days(),
        }
    }
}

impl KpiConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: KpiConfig = toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        config
            .validate()
            .map_err(|message| anyhow::anyhow!("invalid config {}: {message}", path.display()))?;
        Ok(config)
    }

    /// Load from `path` when given and present, otherwise fall back to the
    /// built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::load(default_path)
                } else {
                    log::debug!("no {DEFAULT_CONFIG_FILE} found, using built-in defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.areas.is_empty() {
            return Err("at least one KPI area is required".into());
        }
        if self.lines.is_empty() {
            return Err("at least one production line is required".into());
        }
        if self.default_window_days == 0 {
            return Err("default_window_days must be at least 1".into());
        }
        for area in &self.areas {
            for metric in &area.metrics {
                if !metric.target.is_finite() || metric.target < 0.0 {
                    return Err(format!(
                        "metric {} has an invalid target {}",
                        metric.id, metric.target
                    ));
                }
            }
        }
        Ok(())
    }

    pub fn area(&self, area: Area) -> Option<&AreaConfig> {
        self.areas.iter().find(|config| config.name == area)
    }

    /// Look up a metric definition across all areas.
    pub fn metric(&self, id: &str) -> Option<&MetricDef> {
        self.areas
            .iter()
            .flat_map(|area| area.metrics.iter())
            .find(|metric| metric.id == id)
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("failed to serialize config")
    }
}

fn default_lines() -> Vec<String> {
    ["L06", "L07", "Rapid Rhino", "ENT"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_shifts() -> Vec<String> {
    ["T1", "T2", "T3"].into_iter().map(String::from).collect()
}

fn default_window_days() -> u32 {
    10
}

fn metric(id: &str, name: &str, target: f64, unit: &str) -> MetricDef {
    MetricDef {
        id: id.into(),
        name: name.into(),
        target,
        unit: unit.into(),
    }
}

fn default_areas() -> Vec<AreaConfig> {
    vec![
        AreaConfig {
            name: Area::Safety,
            icon: "shield-check".into(),
            metrics: vec![
                metric("casi-cerrados", "Casi Casi Cerrados", 80.0, "%"),
                metric(
                    "accidents-mtd",
                    "Accidentes y Primeros Auxilios (MTD)",
                    0.0,
                    "incidents",
                ),
            ],
        },
        AreaConfig {
            name: Area::Quality,
            icon: "badge-check".into(),
            metrics: vec![
                metric("quality-ideas", "Ideas de Calidad", 90.0, "%"),
                metric("ncs", "NCS", 0.0, "issues"),
            ],
        },
        AreaConfig {
            name: Area::Delivery,
            icon: "truck".into(),
            metrics: vec![
                metric(
                    "production-vs-plan",
                    "Producción vs Plan Semanal",
                    95.0,
                    "%",
                ),
                metric("complete-orders", "Órdenes Completas", 98.0, "%"),
            ],
        },
        AreaConfig {
            name: Area::Production,
            icon: "factory".into(),
            metrics: vec![
                metric("yield", "Yield", 85.0, "%"),
                metric("off-standards", "Tiempo Fuera de Estándar", 5.0, "%"),
            ],
        },
        AreaConfig {
            name: Area::Cost,
            icon: "dollar-sign".into(),
            metrics: vec![
                metric("total-absorption", "Absorción Total Acumulada", 100.0, "%"),
                metric(
                    "budget-compliance",
                    "Cumplimiento Presupuestario",
                    95.0,
                    "%",
                ),
            ],
        },
    ]
}
