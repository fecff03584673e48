//! Report writers for the presentation surface: JSON for machines, Markdown
//! for review packs, and a colored terminal table for the board room.

use anyhow::Result;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::aggregate::comparison_key;
use crate::core::{ComparisonMode, ParetoReport, SeriesReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

/// Compliance colour pairs: green/red by default, blue/orange for the
/// colorblind palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorPalette {
    #[default]
    Default,
    Colorblind,
}

impl ColorPalette {
    fn compliant(self) -> Color {
        match self {
            ColorPalette::Default => Color::Green,
            ColorPalette::Colorblind => Color::Blue,
        }
    }

    fn below(self) -> Color {
        match self {
            ColorPalette::Default => Color::Red,
            ColorPalette::Colorblind => Color::DarkYellow,
        }
    }
}

pub trait ReportWriter {
    fn write_series(&mut self, report: &SeriesReport) -> Result<()>;
    fn write_pareto(&mut self, report: &ParetoReport) -> Result<()>;
}

/// Create a writer for the chosen format, targeting a file or stdout.
pub fn create_writer(
    output: Option<&Path>,
    format: OutputFormat,
    palette: ColorPalette,
) -> Result<Box<dyn ReportWriter>> {
    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };
    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(sink)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(sink, palette)),
    })
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for JsonWriter<W> {
    fn write_series(&mut self, report: &SeriesReport) -> Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_pareto(&mut self, report: &ParetoReport) -> Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_series_header(&mut self, report: &SeriesReport) -> Result<()> {
        writeln!(self.writer, "# KPI Series Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.generated.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(
            self.writer,
            "Grouping: {:?} ({:?} calendar)",
            report.group_by, report.calendar
        )?;
        if let Some(target) = report.target {
            writeln!(self.writer, "Target: {target}")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> ReportWriter for MarkdownWriter<W> {
    fn write_series(&mut self, report: &SeriesReport) -> Result<()> {
        self.write_series_header(report)?;

        let labels = report.column_labels();
        writeln!(self.writer, "| Line | {} |", labels.join(" | "))?;
        writeln!(
            self.writer,
            "|------|{}",
            "------|".repeat(labels.len())
        )?;
        for category in series_row_keys(report) {
            let cells: Vec<String> = report
                .points
                .iter()
                .map(|point| format!("{:.1}", point.value(&category)))
                .collect();
            writeln!(self.writer, "| {category} | {} |", cells.join(" | "))?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_pareto(&mut self, report: &ParetoReport) -> Result<()> {
        writeln!(self.writer, "# Pareto Analysis")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.generated.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer, "Total units: {}", report.total_units)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| # | Cause | Units | Cumulative % | Comments |")?;
        writeln!(self.writer, "|---|-------|-------|--------------|----------|")?;
        for (index, cause) in report.causes.iter().enumerate() {
            writeln!(
                self.writer,
                "| {} | {} | {} | {:.1} | {} |",
                index + 1,
                cause.description,
                cause.units,
                cause.accumulated_percent,
                cause.comments.as_deref().unwrap_or("")
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    palette: ColorPalette,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, palette: ColorPalette) -> Self {
        Self { writer, palette }
    }

    fn value_cell(&self, value: f64, target: Option<f64>) -> Cell {
        let text = format!("{value:.1}");
        match target {
            Some(target) if value >= target => Cell::new(text).fg(self.palette.compliant()),
            Some(_) => Cell::new(text).fg(self.palette.below()),
            None => Cell::new(text),
        }
    }
}

impl<W: Write> ReportWriter for TerminalWriter<W> {
    fn write_series(&mut self, report: &SeriesReport) -> Result<()> {
        writeln!(self.writer, "{}", "KPI Series Report".bold())?;

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        let mut header = vec![Cell::new("Line")];
        header.extend(report.column_labels().into_iter().map(Cell::new));
        table.set_header(header);

        for category in series_row_keys(report) {
            // comparison rows stay uncolored so the current values stand out
            let target = if category.ends_with(" (Comp)") {
                None
            } else {
                report.target
            };
            let mut row = vec![Cell::new(&category)];
            for point in &report.points {
                row.push(self.value_cell(point.value(&category), target));
            }
            table.add_row(row);
        }
        writeln!(self.writer, "{table}")?;

        if let Some(target) = report.target {
            writeln!(
                self.writer,
                "{} at or above {target}, {} below",
                "green".green(),
                "red".red()
            )?;
        }
        Ok(())
    }

    fn write_pareto(&mut self, report: &ParetoReport) -> Result<()> {
        writeln!(self.writer, "{}", "Pareto Analysis".bold())?;
        writeln!(self.writer, "Total units: {}", report.total_units)?;

        let max_units = report.causes.iter().map(|c| c.units).max().unwrap_or(0);
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["#", "Cause", "Units", "Cumulative %", ""]);
        for (index, cause) in report.causes.iter().enumerate() {
            table.add_row(vec![
                Cell::new(index + 1),
                Cell::new(&cause.description),
                Cell::new(cause.units),
                Cell::new(format!("{:.1}", cause.accumulated_percent)),
                Cell::new(unit_bar(cause.units, max_units)),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        Ok(())
    }
}

/// Row keys in display order: each category, followed by its comparison
/// companion when the report carries one.
fn series_row_keys(report: &SeriesReport) -> Vec<String> {
    let mut keys = Vec::new();
    for category in &report.categories {
        keys.push(category.clone());
        if report.comparison != ComparisonMode::None {
            keys.push(comparison_key(category));
        }
    }
    keys
}

fn unit_bar(units: u32, max_units: u32) -> String {
    const WIDTH: u32 = 24;
    if max_units == 0 {
        return String::new();
    }
    let len = (units * WIDTH).div_ceil(max_units);
    "#".repeat(len as usize)
}
