//! Data models for tracked tool activity.
//!
//! - [`ToolEvent`] - One tool invocation as delivered by the host CLI
//! - [`Category`] / [`ActionInfo`] - Classification of a tool name
//! - [`Target`] - A single loggable string derived from an event
//! - [`LogRow`] - One data row of the rolling history table

pub mod action;
pub mod event;
pub mod row;
pub mod target;

pub use action::{ActionInfo, Category};
pub use event::ToolEvent;
pub use row::LogRow;
pub use target::Target;
