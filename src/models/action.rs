use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification bucket for a tool invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Read,
    Search,
    List,
    Glob,
    Write,
    Edit,
    Exec,
    Fetch,
    Web,
    Agent,
    Other,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Category; 11] = [
        Category::Read,
        Category::Search,
        Category::List,
        Category::Glob,
        Category::Write,
        Category::Edit,
        Category::Exec,
        Category::Fetch,
        Category::Web,
        Category::Agent,
        Category::Other,
    ];

    /// Upper-case label written to the logs
    pub fn label(self) -> &'static str {
        match self {
            Category::Read => "READ",
            Category::Search => "SEARCH",
            Category::List => "LIST",
            Category::Glob => "GLOB",
            Category::Write => "WRITE",
            Category::Edit => "EDIT",
            Category::Exec => "EXEC",
            Category::Fetch => "FETCH",
            Category::Web => "WEB",
            Category::Agent => "AGENT",
            Category::Other => "OTHER",
        }
    }

    /// Inverse of [`Category::label`]
    pub fn from_label(label: &str) -> Option<Category> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    /// Whether targets of this category go to the turn's read log
    ///
    /// Lookups (reads, searches, listings, globs, fetches, web searches) are reads;
    /// everything else, including unknown tools, counts as a modification.
    pub fn is_read_class(self) -> bool {
        matches!(
            self,
            Category::Read
                | Category::Search
                | Category::List
                | Category::Glob
                | Category::Fetch
                | Category::Web
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Static lookup record for a tool name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionInfo {
    pub category: Category,
    pub glyph: &'static str,
}
