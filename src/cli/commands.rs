use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::{debug, warn};

use crate::config::Config;
use crate::reporter::{HistoryStats, Reporter};
use crate::tracker::Tracker;
use crate::utils::format_path_with_tilde;

#[derive(Parser)]
#[command(name = "gemini-activity-log")]
#[command(version = "0.1.0")]
#[command(about = "Record CLI tool activity and summarize it per turn", long_about = None)]
pub struct Cli {
    /// Project root to record activity for (defaults to $GEMINI_PROJECT_DIR, then the current directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub project_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record one tool event read from stdin (run after every tool call)
    Track,
    /// Print this turn's activity summary and reset it (run at the end of a turn)
    Report,
    /// Show statistics about the recent history
    Stats {
        /// Print the statistics as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Parse arguments and run the selected hook
///
/// Hook failures never escape: they are logged through `tracing` and the process still
/// exits successfully, so a broken log directory cannot disturb the host's turn.
pub fn run() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Some(Commands::Track) => track(&cli),
        Some(Commands::Report) => report(&cli),
        Some(Commands::Stats { json }) => show_stats(&cli, *json),
        None => emit(&mut io::stdout().lock(), "Use --help for usage information"),
    };

    if let Err(e) = result {
        warn!("activity hook failed: {:#}", e);
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let config =
        Config::from_env(cli.project_dir.as_deref()).context("Failed to load configuration")?;
    debug!(?config, "resolved configuration");
    Ok(config)
}

fn track(cli: &Cli) -> Result<()> {
    let mut payload = String::new();
    io::stdin().read_to_string(&mut payload).context("Failed to read event from stdin")?;

    let tracker = Tracker::new(load_config(cli)?);
    tracker.track_payload(&payload, Utc::now())?;
    Ok(())
}

fn report(cli: &Cli) -> Result<()> {
    let reporter = Reporter::new(load_config(cli)?);
    match reporter.report()? {
        Some(text) => emit(&mut io::stdout().lock(), &text),
        None => Ok(()),
    }
}

fn show_stats(cli: &Cli, json: bool) -> Result<()> {
    let reporter = Reporter::new(load_config(cli)?);
    let stats = reporter.history_stats()?;

    let text = if json {
        serde_json::to_string_pretty(&stats).context("Failed to serialize statistics")?
    } else {
        format_stats(&stats, &format_path_with_tilde(reporter.history_path()))
    };
    emit(&mut io::stdout().lock(), &text)
}

/// Write `text` plus a newline, surfacing failures such as a closed pipe as errors
fn emit(out: &mut impl Write, text: &str) -> Result<()> {
    writeln!(out, "{}", text)
        .and_then(|()| out.flush())
        .context("Failed to write to stdout")
}

fn format_stats(stats: &HistoryStats, history_path: &str) -> String {
    let mut lines = vec![
        "CLI Activity Statistics".to_string(),
        "=======================".to_string(),
        format!("Total entries: {}", stats.total),
    ];
    lines.extend(
        stats.by_category.iter().map(|entry| format!("  {}: {}", entry.category, entry.count)),
    );
    lines.push(String::new());
    lines.push(format!("History file: {}", history_path));

    if let Some(oldest) = &stats.oldest {
        lines.push(format!("Oldest entry: {}", oldest));
    }
    if let Some(newest) = &stats.newest {
        lines.push(format!("Newest entry: {}", newest));
    }
    lines.join("\n")
}
