use serde_json::{Map, Value};

use crate::models::{ActionInfo, Category, Target, ToolEvent};

/// Argument keys logged verbatim, in precedence order
const VERBATIM_KEYS: [&str; 4] = ["file_path", "dir_path", "url", "query"];

const OBJECTIVE_KEY: &str = "objective";
const COMMAND_KEY: &str = "command";

const OBJECTIVE_PREFIX: &str = "Agent Objective: ";

/// Characters kept from objectives and shell commands
pub const TRUNCATE_CHARS: usize = 50;

const ELLIPSIS: &str = "...";

/// Target used when an event has nothing more specific to log
pub const PLACEHOLDER: &str = "N/A";

/// Derive every loggable target from an event, in precedence order
///
/// Each populated argument among `file_path`, `dir_path`, `url`, `query` and
/// `objective` contributes one target. When none is populated, shell commands log
/// their (truncated) command line and everything else logs [`PLACEHOLDER`]. The
/// result is never empty.
pub fn extract_targets(event: &ToolEvent, info: &ActionInfo) -> Vec<Target> {
    let mut targets: Vec<Target> = VERBATIM_KEYS
        .iter()
        .filter_map(|key| arg_text(&event.args, key))
        .map(|text| Target::new(&text))
        .collect();

    if let Some(objective) = arg_text(&event.args, OBJECTIVE_KEY) {
        let (head, _) = truncate_chars(&objective, TRUNCATE_CHARS);
        targets.push(Target::new(&format!("{OBJECTIVE_PREFIX}{head}{ELLIPSIS}")));
    }

    if targets.is_empty() {
        let fallback = match (info.category, arg_text(&event.args, COMMAND_KEY)) {
            (Category::Exec, Some(command)) => match truncate_chars(&command, TRUNCATE_CHARS) {
                (head, true) => format!("{head}{ELLIPSIS}"),
                (head, false) => head.to_string(),
            },
            _ => PLACEHOLDER.to_string(),
        };
        targets.push(Target::new(&fallback));
    }

    targets
}

/// String form of a scalar argument; null, empty strings and containers count as absent
fn arg_text(args: &Map<String, Value>, key: &str) -> Option<String> {
    match args.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// First `max` characters of `text`, and whether anything was cut
fn truncate_chars(text: &str, max: usize) -> (&str, bool) {
    match text.char_indices().nth(max) {
        Some((idx, _)) => (&text[..idx], true),
        None => (text, false),
    }
}
