//! Configuration for the tracker and reporter hooks.
//!
//! Every run builds one [`Config`] up front and hands it to
//! [`Tracker::new`](crate::tracker::Tracker::new) or
//! [`Reporter::new`](crate::reporter::Reporter::new). Nothing is kept in globals.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `GEMINI_PROJECT_DIR` | current directory | Project root (overridden by `--project-dir`) |
//! | `GEMINI_ACTIVITY_TEMP_DIR` | OS temp dir | Root for the per-turn scratch logs |
//! | `GEMINI_ACTIVITY_MAX_ROWS` | 200 | Rows kept in `recent_history.md` |
//! | `GEMINI_ACTIVITY_LOG` | `off` | `tracing` filter for diagnostics on stderr |

use std::env;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::utils::environment::{PROJECT_DIR_ENV, resolve_project_dir};
use crate::utils::{history_dir, turn_log_dir};

/// Rows kept in the rolling history before the oldest are evicted.
pub const DEFAULT_MAX_ROWS: usize = 200;

/// Overrides the OS temp directory as the root for per-turn logs.
pub const TEMP_DIR_ENV: &str = "GEMINI_ACTIVITY_TEMP_DIR";

/// Overrides [`DEFAULT_MAX_ROWS`].
pub const MAX_ROWS_ENV: &str = "GEMINI_ACTIVITY_MAX_ROWS";

const STREAM_LOG_FILENAME: &str = "stream_log.txt";
const RECENT_HISTORY_FILENAME: &str = "recent_history.md";

/// Errors that can occur while building a [`Config`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has an invalid value.
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    /// The process working directory could not be read.
    #[error("failed to determine current directory: {0}")]
    CurrentDir(#[source] std::io::Error),
}

/// Resolved locations and limits for one hook invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Absolute project root the activity belongs to.
    pub project_dir: PathBuf,

    /// `<project>/.gemini/cli_history`
    pub history_dir: PathBuf,

    /// Per-project scratch directory for the current turn.
    pub turn_log_dir: PathBuf,

    /// Cap on rows in the rolling history.
    pub max_rows: usize,
}

impl Config {
    /// Builds a config for `project_dir` with turn logs under `temp_root`.
    pub fn new(project_dir: impl Into<PathBuf>, temp_root: &Path) -> Self {
        let project_dir = project_dir.into();
        Self {
            history_dir: history_dir(&project_dir),
            turn_log_dir: turn_log_dir(temp_root, &project_dir),
            project_dir,
            max_rows: DEFAULT_MAX_ROWS,
        }
    }

    /// Replaces the rolling history cap.
    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = max_rows;
        self
    }

    /// Creates a `Config` from the process environment.
    ///
    /// `project_flag` is the `--project-dir` argument, which wins over
    /// `GEMINI_PROJECT_DIR`; the current directory is the last resort.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if:
    /// - The current directory cannot be read
    /// - `GEMINI_ACTIVITY_MAX_ROWS` is set but is not a positive integer
    pub fn from_env(project_flag: Option<&Path>) -> Result<Self, ConfigError> {
        let cwd = env::current_dir().map_err(ConfigError::CurrentDir)?;
        let project_env = env::var(PROJECT_DIR_ENV).ok();
        let project_dir = resolve_project_dir(project_flag, project_env.as_deref(), &cwd);

        let temp_root = env::var_os(TEMP_DIR_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(env::temp_dir);

        let max_rows = match env::var(MAX_ROWS_ENV) {
            Ok(val) => parse_max_rows(&val)?,
            Err(_) => DEFAULT_MAX_ROWS,
        };

        Ok(Self::new(project_dir, &temp_root).with_max_rows(max_rows))
    }

    /// Append-only plain text log of every target.
    pub fn stream_log_path(&self) -> PathBuf {
        self.history_dir.join(STREAM_LOG_FILENAME)
    }

    /// Bounded Markdown table of the most recent targets.
    pub fn recent_history_path(&self) -> PathBuf {
        self.history_dir.join(RECENT_HISTORY_FILENAME)
    }
}

fn parse_max_rows(val: &str) -> Result<usize, ConfigError> {
    let rows = val.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
        key: MAX_ROWS_ENV.to_string(),
        message: format!("expected positive integer, got '{val}'"),
    })?;
    if rows == 0 {
        return Err(ConfigError::InvalidValue {
            key: MAX_ROWS_ENV.to_string(),
            message: "row cap must be greater than 0".to_string(),
        });
    }
    Ok(rows)
}
