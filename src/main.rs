//! purposeviz CLI - personal-data purpose report generator
//!
//! Usage: purposeviz [OPTIONS] <DIR>
//!
//! Reads every `*.json` purpose file in DIR and writes DIR/report.html.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use purposeviz::{Config, ReportPipeline};

mod ui;

/// Render a directory of purpose declarations into an HTML report
#[derive(Parser, Debug)]
#[command(name = "purposeviz")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory to scan for purpose files
    dir: PathBuf,

    /// Emit NDJSON events instead of human-readable output
    #[arg(long)]
    json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            ui::error::print_error(&err, cli.json);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let dir: &Path = &cli.dir;

    if cli.json {
        ui::json::emit_event(&ui::json::StartEvent::new(&dir.display().to_string()))?;
    }

    let (config, warnings) = Config::load_for_directory(dir)
        .with_context(|| format!("loading configuration for {}", dir.display()))?;
    if cli.json {
        for w in &warnings {
            ui::json::emit_event(&ui::json::WarningEvent::new(w.to_string()))?;
        }
    } else {
        ui::output::print_config_warnings(&warnings);
    }

    let summary = ReportPipeline::new(dir, config).generate()?;

    if cli.json {
        ui::json::emit_event(&ui::json::CompleteEvent::new(&summary))?;
    } else {
        println!("{}", ui::output::render_summary(&summary));
    }
    Ok(())
}
