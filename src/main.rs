use anyhow::{Context, anyhow};
use clap::Parser;
use env_logger::Builder;
use log::{LevelFilter, info};

use crate::cli::{Cli, OutputMode};
use crate::config::ReportConfig;
use crate::report::LoadedReport;

mod cli;
mod config;
mod output;
mod report;
mod ui;

fn main() -> anyhow::Result<()> {
    // Logging setup
    Builder::new()
        .filter_level(LevelFilter::Info)
        .filter(Some("render_log_report"), LevelFilter::Debug)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    let log_file = match cli.log_file {
        Some(path) => path,
        None => cli::prompt_for_log_file(&mut std::io::stdin().lock(), &mut std::io::stdout())
            .context("failed to read the log file name")?
            .ok_or_else(|| anyhow!("no log file specified"))?,
    };

    let working_dir = std::env::current_dir().context("cannot determine the working directory")?;
    let config = ReportConfig::resolve(cli.config.as_deref(), &working_dir).map_err(anyhow::Error::msg)?;

    // Everything that can fail on the log itself happens before the window opens
    let loaded = LoadedReport::load(&log_file).with_context(|| format!("cannot build a report for {}", log_file.display()))?;
    info!(
        "Loaded {}: {} memory samples, {} warnings, {} errors, {} sections",
        log_file.display(),
        loaded.report.summary.memory_samples.len(),
        loaded.overview.diagnostics.warnings,
        loaded.overview.diagnostics.errors,
        loaded.report.sections.len()
    );

    match cli.output {
        Some(OutputMode::Human) => {
            print!("{}", output::render_human(&loaded.report, &loaded.overview));
            Ok(())
        }
        Some(OutputMode::Json) => {
            println!("{}", output::render_json(&loaded.report, &loaded.overview)?);
            Ok(())
        }
        None => ui::run(loaded, config),
    }
}
