//! Parsers for the hook's two inputs: the host's event payload and the rolling history file
//!
//! # Error Handling Strategy
//!
//! Both parsers are lenient in the way a best-effort hook needs:
//!
//! - **Event payloads**: the tool name and arguments are looked up in several locations to
//!   tolerate schema drift between host versions. A payload without a tool name is an
//!   [`EventError`](crate::error::EventError) that callers drop silently.
//!
//! - **History rows**: anything that does not look like a data row (header, separator,
//!   footer, hand edits) is ignored rather than rejected.

pub mod event;
pub mod history;

pub use event::parse_event;
pub use history::{extract_data_rows, is_data_row};
