//! Flat-file logs written by the tracker and drained by the reporter
//!
//! - [`StreamLog`] - unbounded, append-only plain text
//! - [`RollingHistory`] - Markdown table capped at a fixed number of rows, rewritten in full
//! - [`TurnLogs`] - per-turn scratch files split into reads and writes
//!
//! None of these take locks. The host runs one hook process at a time per project.

pub mod rolling;
pub mod stream;
pub mod turn;

pub use rolling::RollingHistory;
pub use stream::StreamLog;
pub use turn::{TurnLogKind, TurnLogs};
