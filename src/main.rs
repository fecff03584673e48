use anyhow::Result;
use clap::Parser;
use kpimap::cli::{Cli, Commands};
use kpimap::commands;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            input,
            demo,
            start,
            end,
            group_by,
            calendar,
            compare,
            line,
            metric,
            target,
            format,
            output,
            palette,
            config,
        } => {
            let options = commands::report::ReportOptions {
                input,
                demo,
                start,
                end,
                group_by: group_by.into(),
                calendar: calendar.into(),
                compare: compare.into(),
                line,
                metric,
                target,
                format: format.into(),
                output,
                palette: palette.into(),
                config,
            };
            commands::report::run(options)
        }
        Commands::Pareto {
            input,
            format,
            output,
            palette,
        } => {
            let options = commands::pareto::ParetoOptions {
                input,
                format: format.into(),
                output,
                palette: palette.into(),
            };
            commands::pareto::run(options)
        }
        Commands::Generate {
            days,
            seed,
            lines,
            output,
            config,
        } => {
            let options = commands::generate::GenerateOptions {
                days,
                seed,
                lines,
                output,
                config,
            };
            commands::generate::run(options)
        }
        Commands::Init { force, path } => commands::init::init_config(force, path),
    }
}
