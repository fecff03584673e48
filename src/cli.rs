use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::{CalendarMode, ComparisonMode, GroupBy};
use crate::io::output::{ColorPalette, OutputFormat};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Json,
    Markdown,
    Terminal,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Markdown => OutputFormat::Markdown,
            FormatArg::Terminal => OutputFormat::Terminal,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum GroupByArg {
    Day,
    Week,
    Month,
}

impl From<GroupByArg> for GroupBy {
    fn from(arg: GroupByArg) -> Self {
        match arg {
            GroupByArg::Day => GroupBy::Day,
            GroupByArg::Week => GroupBy::Week,
            GroupByArg::Month => GroupBy::Month,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CalendarArg {
    Natural,
    Corporate,
}

impl From<CalendarArg> for CalendarMode {
    fn from(arg: CalendarArg) -> Self {
        match arg {
            CalendarArg::Natural => CalendarMode::Natural,
            CalendarArg::Corporate => CalendarMode::Corporate,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CompareArg {
    None,
    PreviousWeek,
    PreviousYear,
}

impl From<CompareArg> for ComparisonMode {
    fn from(arg: CompareArg) -> Self {
        match arg {
            CompareArg::None => ComparisonMode::None,
            CompareArg::PreviousWeek => ComparisonMode::PreviousWeek,
            CompareArg::PreviousYear => ComparisonMode::PreviousYear,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PaletteArg {
    Default,
    Colorblind,
}

impl From<PaletteArg> for ColorPalette {
    fn from(arg: PaletteArg) -> Self {
        match arg {
            PaletteArg::Default => ColorPalette::Default,
            PaletteArg::Colorblind => ColorPalette::Colorblind,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "kpimap")]
#[command(about = "Manufacturing KPI tracking and Pareto analysis toolkit", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Aggregate a daily metric series into a dashboard report
    Report {
        /// JSON file of daily metric points
        input: Option<PathBuf>,

        /// Use a generated demo series instead of an input file
        #[arg(long)]
        demo: bool,

        /// Range start (YYYY-MM-DD); defaults to the configured window
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Range end (YYYY-MM-DD); defaults to today
        #[arg(long)]
        end: Option<NaiveDate>,

        /// Bucket size
        #[arg(long = "group-by", value_enum, default_value = "day")]
        group_by: GroupByArg,

        /// Calendar convention for week bucketing
        #[arg(long, value_enum, default_value = "natural")]
        calendar: CalendarArg,

        /// Companion series shown next to each line
        #[arg(long, value_enum, default_value = "none")]
        compare: CompareArg,

        /// Show a single production line instead of all configured lines
        #[arg(long)]
        line: Option<String>,

        /// Pull the compliance target from this configured metric
        #[arg(long)]
        metric: Option<String>,

        /// Explicit compliance target (overrides --metric)
        #[arg(long)]
        target: Option<f64>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: FormatArg,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Compliance colour palette
        #[arg(long, value_enum, default_value = "default")]
        palette: PaletteArg,

        /// Configuration file (defaults to kpimap.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Rank a set of corrective-action causes
    Pareto {
        /// JSON file of causes
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: FormatArg,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Compliance colour palette
        #[arg(long, value_enum, default_value = "default")]
        palette: PaletteArg,
    },

    /// Generate a demo metric series
    Generate {
        /// Days of history to generate
        #[arg(long, default_value = "365")]
        days: u32,

        /// RNG seed
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Production lines (defaults to the configured lines)
        #[arg(long, value_delimiter = ',')]
        lines: Option<Vec<String>>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to kpimap.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Write a default kpimap.toml
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,

        /// Where to write the file
        #[arg(long)]
        path: Option<PathBuf>,
    },
}
