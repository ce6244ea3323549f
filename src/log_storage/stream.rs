use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::models::{Category, Target};

/// Append-only log with one `[timestamp] [CATEGORY] target` line per target
#[derive(Debug, Clone)]
pub struct StreamLog {
    path: PathBuf,
}

impl StreamLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one line; the file is created on first use
    pub fn append(&self, timestamp: &str, category: Category, target: &Target) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open stream log: {}", self.path.display()))?;
        writeln!(file, "{}", format_line(timestamp, category, target))
            .with_context(|| format!("Failed to append to stream log: {}", self.path.display()))
    }
}

fn format_line(timestamp: &str, category: Category, target: &Target) -> String {
    format!("[{timestamp}] [{category}] {target}")
}
