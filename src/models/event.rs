use serde_json::{Map, Value};

/// A tool invocation reported by the host CLI
///
/// Only lives for one hook run. `args` keeps the raw argument object since its shape
/// depends on the tool.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolEvent {
    pub tool_name: String,
    pub args: Map<String, Value>,
}

impl ToolEvent {
    pub fn new(tool_name: impl Into<String>, args: Map<String, Value>) -> Self {
        Self { tool_name: tool_name.into(), args }
    }
}
