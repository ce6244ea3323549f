//! Activity reporter: summarizes and resets the current turn's logs
//!
//! [`Reporter::report`] always deletes the turn logs, even when reading them failed or
//! there was nothing to print, so the next turn starts clean.

pub mod stats;
pub mod summary;

use std::path::Path;

use anyhow::Result;

pub use stats::{CategoryCount, HistoryStats};
pub use summary::TurnSummary;

use crate::config::Config;
use crate::log_storage::{RollingHistory, TurnLogKind, TurnLogs};
use crate::models::LogRow;

#[derive(Debug, Clone)]
pub struct Reporter {
    turn_logs: TurnLogs,
    history: RollingHistory,
}

impl Reporter {
    pub fn new(config: Config) -> Self {
        Self {
            turn_logs: TurnLogs::new(&config.turn_log_dir),
            history: RollingHistory::new(config.recent_history_path(), config.max_rows),
        }
    }

    /// Unique, sorted reads and writes recorded since the last report
    pub fn collect(&self) -> Result<TurnSummary> {
        Ok(TurnSummary {
            reads: self.turn_logs.read_unique(TurnLogKind::Read)?,
            writes: self.turn_logs.read_unique(TurnLogKind::Write)?,
        })
    }

    /// Render this turn's summary and clear the turn logs
    ///
    /// Returns `Ok(None)` when nothing was recorded.
    pub fn report(&self) -> Result<Option<String>> {
        let summary = self.collect();
        self.turn_logs.clear();
        Ok(summary?.render())
    }

    /// Statistics over the rolling history window
    pub fn history_stats(&self) -> Result<HistoryStats> {
        let rows: Vec<LogRow> =
            self.history.read_rows()?.iter().filter_map(|row| LogRow::parse(row)).collect();
        Ok(HistoryStats::from_rows(&rows))
    }

    pub fn history_path(&self) -> &Path {
        self.history.path()
    }
}
