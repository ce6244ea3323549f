//! Rolling history: a Markdown table of the most recent targets
//!
//! Every update reads the current data rows back, appends one, evicts from the front
//! past the cap, and rewrites the whole file (temp file + rename). The cost is
//! proportional to the cap, not to the total number of events ever seen.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::parsers::extract_data_rows;

const TABLE_HEAD: &str = "| Timestamp | Action | Target |\n| :--- | :--- | :--- |\n";

/// Bounded, most-recent-last Markdown history
#[derive(Debug, Clone)]
pub struct RollingHistory {
    path: PathBuf,
    max_rows: usize,
}

impl RollingHistory {
    pub fn new(path: impl Into<PathBuf>, max_rows: usize) -> Self {
        Self { path: path.into(), max_rows }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current data rows in append order; a missing file has none
    ///
    /// Invalid UTF-8 decodes to U+FFFD instead of failing the read.
    pub fn read_rows(&self) -> Result<Vec<String>> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(extract_data_rows(&String::from_utf8_lossy(&bytes))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to read rolling history: {}", self.path.display())),
        }
    }

    /// Append `row` and rewrite the file, keeping only the newest `max_rows` rows
    ///
    /// `updated_at` is stamped into the footer.
    pub fn append(&self, row: &str, updated_at: &str) -> Result<()> {
        let mut rows = self.read_rows()?;
        rows.push(row.to_string());
        if rows.len() > self.max_rows {
            let excess = rows.len() - self.max_rows;
            rows.drain(..excess);
        }

        let temp_path = self.temp_path();
        fs::write(&temp_path, render(&rows, self.max_rows, updated_at)).with_context(|| {
            format!("Failed to write rolling history temp file: {}", temp_path.display())
        })?;
        fs::rename(&temp_path, &self.path)
            .with_context(|| format!("Failed to replace rolling history: {}", self.path.display()))?;

        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

fn render(rows: &[String], max_rows: usize, updated_at: &str) -> String {
    format!(
        "# 📜 CLI Activity History (Last {max_rows})\n\n{TABLE_HEAD}{}\n\n*Last updated: {updated_at}*",
        rows.join("\n")
    )
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn row(n: usize) -> String {
        format!("| 2025-01-15 09:{:02}:{:02} | 📖 **READ** | `file_{n}.txt` |", n / 60 % 60, n % 60)
    }

    fn history(temp_dir: &TempDir, max_rows: usize) -> RollingHistory {
        RollingHistory::new(temp_dir.path().join("recent_history.md"), max_rows)
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let temp_dir = TempDir::new().unwrap();
        assert!(history(&temp_dir, 200).read_rows().unwrap().is_empty());
    }

    #[test]
    fn test_first_write_layout() {
        let temp_dir = TempDir::new().unwrap();
        let history = history(&temp_dir, 200);

        history.append(&row(1), "2025-01-15 09:00:01").unwrap();

        let content = fs::read_to_string(history.path()).unwrap();
        assert_eq!(
            content,
            "# 📜 CLI Activity History (Last 200)\n\n\
             | Timestamp | Action | Target |\n\
             | :--- | :--- | :--- |\n\
             | 2025-01-15 09:00:01 | 📖 **READ** | `file_1.txt` |\n\n\
             *Last updated: 2025-01-15 09:00:01*"
        );
        assert!(!history.temp_path().exists());
    }

    #[test]
    fn test_cap_keeps_last_rows_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let history = history(&temp_dir, 200);

        for n in 0..205 {
            history.append(&row(n), "2025-01-15 10:00:00").unwrap();
        }

        let rows = history.read_rows().unwrap();
        let expected: Vec<String> = (5..205).map(row).collect();
        assert_eq!(rows.len(), 200);
        assert_eq!(rows, expected);
    }

    #[test]
    fn test_roundtrip_below_cap() {
        let temp_dir = TempDir::new().unwrap();
        let history = history(&temp_dir, 200);

        let appended: Vec<String> = (0..17).map(row).collect();
        for r in &appended {
            history.append(r, "2025-01-15 10:00:00").unwrap();
        }

        assert_eq!(history.read_rows().unwrap(), appended);
    }

    #[test]
    fn test_footer_restamped_once() {
        let temp_dir = TempDir::new().unwrap();
        let history = history(&temp_dir, 3);

        history.append(&row(1), "2025-01-15 09:00:01").unwrap();
        history.append(&row(2), "2025-01-15 09:00:02").unwrap();

        let content = fs::read_to_string(history.path()).unwrap();
        assert_eq!(content.matches("*Last updated:").count(), 1);
        assert!(content.ends_with("*Last updated: 2025-01-15 09:00:02*"));
        assert!(content.starts_with("# 📜 CLI Activity History (Last 3)\n"));
        assert_eq!(content.matches("| Timestamp |").count(), 1);
    }

    #[test]
    fn test_foreign_lines_discarded_on_rewrite() {
        let temp_dir = TempDir::new().unwrap();
        let history = history(&temp_dir, 10);
        fs::write(history.path(), "some notes\n| 2025-01-15 09:00:00 | 📖 **READ** | `kept.txt` |\n- bullet\n").unwrap();

        history.append(&row(1), "2025-01-15 09:00:01").unwrap();

        let rows = history.read_rows().unwrap();
        assert_eq!(rows, vec!["| 2025-01-15 09:00:00 | 📖 **READ** | `kept.txt` |".to_string(), row(1)]);
        let content = fs::read_to_string(history.path()).unwrap();
        assert!(!content.contains("some notes"));
    }

    #[test]
    fn test_small_cap_evicts_fifo() {
        let temp_dir = TempDir::new().unwrap();
        let history = history(&temp_dir, 2);

        for n in 0..4 {
            history.append(&row(n), "2025-01-15 09:00:00").unwrap();
        }

        assert_eq!(history.read_rows().unwrap(), vec![row(2), row(3)]);
    }

    #[test]
    fn test_invalid_utf8_does_not_block_updates() {
        let temp_dir = TempDir::new().unwrap();
        let history = history(&temp_dir, 10);
        let mut damaged = row(0).into_bytes();
        damaged.extend_from_slice(b"\xff\n| 2025-01-15 09:00:59 \xfe| broken\n");
        fs::write(history.path(), damaged).unwrap();

        history.append(&row(1), "2025-01-15 09:00:01").unwrap();

        let rows = history.read_rows().unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with(&row(0)));
        assert_eq!(rows[2], row(1));
        assert!(String::from_utf8(fs::read(history.path()).unwrap()).is_ok());
    }
}
