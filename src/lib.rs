//! Gemini Activity Log - tool activity hooks for an interactive agent CLI
//!
//! The host CLI runs this crate's binary as two short-lived hooks:
//!
//! - `track` after every tool call: classifies the event read from stdin and appends each
//!   derived target to a stream log, a bounded Markdown history and the current turn's
//!   scratch log
//! - `report` at the end of a turn: prints a deduplicated summary of what was read and
//!   written, then clears the scratch logs
//!
//! # Example
//!
//! ```no_run
//! use chrono::Utc;
//! use gemini_activity_log::{Config, Reporter, Tracker};
//!
//! let config = Config::new("/work/app", &std::env::temp_dir());
//! let tracker = Tracker::new(config.clone());
//! tracker.track_payload(r#"{"tool_name":"read_file","tool_input":{"file_path":"a.rs"}}"#, Utc::now())?;
//!
//! if let Some(summary) = Reporter::new(config).report()? {
//!     println!("{summary}");
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod log_storage;
pub mod models;
pub mod parsers;
pub mod reporter;
pub mod tracker;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::EventError;
pub use models::{ActionInfo, Category, Target, ToolEvent};
pub use parsers::parse_event;
pub use reporter::Reporter;
pub use tracker::Tracker;
pub use utils::paths::{encode_path, format_path_with_tilde};
