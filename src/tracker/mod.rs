//! Event tracker: one tool event in, one log entry per target out
//!
//! # Error Handling Strategy
//!
//! - **Malformed payloads**: unparsable JSON or a missing tool name is not a failure.
//!   [`Tracker::track_payload`] logs it at debug level and returns `Ok(None)` without
//!   touching any file.
//! - **I/O failures**: directory creation and log writes propagate as `anyhow` errors with
//!   context. The CLI boundary swallows them so the host's turn is never interrupted.

pub mod classify;
pub mod targets;

use std::fs;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing::debug;

pub use classify::classify;
pub use targets::extract_targets;

use crate::config::Config;
use crate::log_storage::{RollingHistory, StreamLog, TurnLogKind, TurnLogs};
use crate::models::{ActionInfo, LogRow, Target, ToolEvent};
use crate::parsers::parse_event;
use crate::utils::format_timestamp;

/// What one tracked event produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackSummary {
    pub tool_name: String,
    pub action: ActionInfo,
    pub targets: Vec<Target>,
}

/// Writes targets to the stream log, the rolling history and the current turn's log
#[derive(Debug, Clone)]
pub struct Tracker {
    config: Config,
    stream_log: StreamLog,
    history: RollingHistory,
    turn_logs: TurnLogs,
}

impl Tracker {
    pub fn new(config: Config) -> Self {
        Self {
            stream_log: StreamLog::new(config.stream_log_path()),
            history: RollingHistory::new(config.recent_history_path(), config.max_rows),
            turn_logs: TurnLogs::new(&config.turn_log_dir),
            config,
        }
    }

    /// Parse a raw payload and track it
    ///
    /// Returns `Ok(None)` when the payload is not a usable event.
    pub fn track_payload(&self, payload: &str, now: DateTime<Utc>) -> Result<Option<TrackSummary>> {
        let event = match parse_event(payload) {
            Ok(event) => event,
            Err(e) => {
                debug!(error = %e, "ignoring event payload");
                return Ok(None);
            }
        };
        self.track(&event, now).map(Some)
    }

    /// Classify an event and record every target it yields
    ///
    /// For each target, in order: stream log line, rolling history row, turn log line.
    pub fn track(&self, event: &ToolEvent, now: DateTime<Utc>) -> Result<TrackSummary> {
        self.ensure_dirs()?;

        let action = classify(&event.tool_name);
        let targets = extract_targets(event, &action);
        let timestamp = format_timestamp(&now);
        let turn_kind = TurnLogKind::for_category(action.category);

        for target in &targets {
            self.stream_log.append(&timestamp, action.category, target)?;
            let row = LogRow::new(&timestamp, &action, target.as_str());
            self.history.append(&row.to_string(), &timestamp)?;
            self.turn_logs.append(turn_kind, target)?;
        }

        debug!(
            tool = %event.tool_name,
            category = %action.category,
            targets = targets.len(),
            "tracked event"
        );

        Ok(TrackSummary { tool_name: event.tool_name.clone(), action, targets })
    }

    fn ensure_dirs(&self) -> Result<()> {
        for dir in [&self.config.history_dir, &self.config.turn_log_dir] {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
        }
        Ok(())
    }
}
