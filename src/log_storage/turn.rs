use std::collections::BTreeSet;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::models::{Category, Target};

const READ_LOG_FILENAME: &str = "read_log.txt";
const WRITE_LOG_FILENAME: &str = "write_log.txt";

/// Which of the two per-turn scratch files a target belongs in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnLogKind {
    Read,
    Write,
}

impl TurnLogKind {
    pub fn for_category(category: Category) -> Self {
        if category.is_read_class() { TurnLogKind::Read } else { TurnLogKind::Write }
    }

    fn filename(self) -> &'static str {
        match self {
            TurnLogKind::Read => READ_LOG_FILENAME,
            TurnLogKind::Write => WRITE_LOG_FILENAME,
        }
    }
}

/// The current turn's read and write logs, one bare target per line
#[derive(Debug, Clone)]
pub struct TurnLogs {
    dir: PathBuf,
}

impl TurnLogs {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self, kind: TurnLogKind) -> PathBuf {
        self.dir.join(kind.filename())
    }

    pub fn append(&self, kind: TurnLogKind, target: &Target) -> Result<()> {
        let path = self.path(kind);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open turn log: {}", path.display()))?;
        writeln!(file, "{target}")
            .with_context(|| format!("Failed to append to turn log: {}", path.display()))
    }

    /// Trimmed, non-empty, deduplicated lines sorted ascending; a missing file has none
    ///
    /// Invalid UTF-8 decodes to U+FFFD instead of failing the read.
    pub fn read_unique(&self, kind: TurnLogKind) -> Result<Vec<String>> {
        let path = self.path(kind);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read turn log: {}", path.display()));
            }
        };

        let content = String::from_utf8_lossy(&bytes);
        let unique: BTreeSet<&str> =
            content.lines().map(str::trim).filter(|line| !line.is_empty()).collect();
        Ok(unique.into_iter().map(str::to_string).collect())
    }

    /// Delete both files so the next turn starts empty; failures are only logged
    pub fn clear(&self) {
        for kind in [TurnLogKind::Read, TurnLogKind::Write] {
            let path = self.path(kind);
            match fs::remove_file(&path) {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => debug!(path = %path.display(), error = %e, "failed to remove turn log"),
            }
        }
    }
}
