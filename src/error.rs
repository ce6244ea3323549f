//! Error types for event payload handling.
//!
//! I/O failures travel as `anyhow::Error` with context. Payload problems get their own
//! enum because the tracker treats them differently: a malformed event is dropped
//! quietly instead of being reported as a failure.

use thiserror::Error;

/// Reasons an event payload cannot become a [`ToolEvent`](crate::models::ToolEvent).
#[derive(Error, Debug)]
pub enum EventError {
    /// The payload is not valid JSON.
    #[error("invalid event payload: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The payload parsed, but its top level is not an object.
    #[error("event payload is not a JSON object")]
    NotAnObject,

    /// None of the known locations holds a tool name.
    #[error("event payload has no tool name")]
    MissingToolName,
}
