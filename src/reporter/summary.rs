use crate::utils::strip_control_sequences;

const RULE: &str = "---";
const HEADER: &str = "### 🛠 Activity Log";
const READ_HEADING: &str = "**Read:**";
const WRITE_HEADING: &str = "**Written/Modified:**";

/// Unique, sorted targets touched during one turn
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TurnSummary {
    pub reads: Vec<String>,
    pub writes: Vec<String>,
}

impl TurnSummary {
    pub fn is_empty(&self) -> bool {
        self.reads.is_empty() && self.writes.is_empty()
    }

    /// Markdown fragment for the console, or `None` when nothing happened this turn
    ///
    /// The fragment opens with a blank line before the rule.
    pub fn render(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }

        let mut lines = vec![String::new(), RULE.to_string(), HEADER.to_string()];

        if !self.reads.is_empty() {
            lines.push(READ_HEADING.to_string());
            lines.extend(self.reads.iter().map(|t| bullet(t)));
        }

        if !self.writes.is_empty() {
            if !self.reads.is_empty() {
                lines.push(String::new());
            }
            lines.push(WRITE_HEADING.to_string());
            lines.extend(self.writes.iter().map(|t| bullet(t)));
        }

        Some(lines.join("\n"))
    }
}

fn bullet(target: &str) -> String {
    format!("- `{}`", strip_control_sequences(target))
}
