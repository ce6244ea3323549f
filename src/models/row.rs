use std::fmt;

use super::{ActionInfo, Category};

/// One data row of the rolling history table: ``| timestamp | glyph **CATEGORY** | `target` |``
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRow {
    pub timestamp: String,
    pub glyph: String,
    pub category: Category,
    pub target: String,
}

impl LogRow {
    pub fn new(timestamp: &str, info: &ActionInfo, target: &str) -> Self {
        Self {
            timestamp: timestamp.to_string(),
            glyph: info.glyph.to_string(),
            category: info.category,
            target: target.to_string(),
        }
    }

    /// Parse a table row written by [`LogRow`]'s `Display` impl
    ///
    /// The target is the last column, so a `" | "` inside it stays part of the target.
    /// Plain rows without the bold label or the backticks are accepted too.
    /// Unknown category labels map to [`Category::Other`].
    pub fn parse(line: &str) -> Option<Self> {
        let inner = line.trim().strip_prefix("| ")?.strip_suffix(" |")?;
        let mut columns = inner.splitn(3, " | ");
        let timestamp = columns.next()?;
        let action = columns.next()?;
        let target = columns.next()?;

        let (glyph, label) = action.split_once(' ')?;
        let label = unwrap_delimited(label.trim(), "**");
        Some(Self {
            timestamp: timestamp.to_string(),
            glyph: glyph.to_string(),
            category: Category::from_label(label).unwrap_or(Category::Other),
            target: unwrap_delimited(target, "`").to_string(),
        })
    }
}

impl fmt::Display for LogRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "| {} | {} **{}** | `{}` |", self.timestamp, self.glyph, self.category, self.target)
    }
}

fn unwrap_delimited<'a>(text: &'a str, delimiter: &str) -> &'a str {
    text.strip_prefix(delimiter).and_then(|t| t.strip_suffix(delimiter)).unwrap_or(text)
}
