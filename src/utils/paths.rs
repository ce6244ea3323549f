use std::borrow::Cow;
use std::env;
use std::path::{Path, PathBuf};

/// History directory relative to the project root
const HISTORY_SUBDIR: [&str; 2] = [".gemini", "cli_history"];

/// Namespace under the OS temp directory holding one directory per project
const TEMP_NAMESPACE: &str = "gemini_hooks";

/// Characters that separate path components on any supported platform
const SEPARATORS: [char; 3] = ['/', '\\', ':'];

/// Encodes an absolute path into a single filesystem-safe directory name
///
/// Path separators (and the drive colon on Windows) become underscores.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use gemini_activity_log::encode_path;
///
/// let path = PathBuf::from("/Users/foo/bar");
/// assert_eq!(encode_path(&path), "_Users_foo_bar");
/// ```
pub fn encode_path(path: &Path) -> String {
    path.to_string_lossy().replace(SEPARATORS, "_")
}

/// Project-local directory holding the stream log and the rolling history
pub fn history_dir(project_dir: &Path) -> PathBuf {
    HISTORY_SUBDIR.iter().fold(project_dir.to_path_buf(), |dir, part| dir.join(part))
}

/// Per-project scratch directory for the current turn's read and write logs
pub fn turn_log_dir(temp_root: &Path, project_dir: &Path) -> PathBuf {
    temp_root.join(TEMP_NAMESPACE).join(encode_path(project_dir))
}

/// Formats a path with ~ substitution for the home directory
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use gemini_activity_log::format_path_with_tilde;
///
/// let path = PathBuf::from("/Users/alice/project/.gemini/cli_history");
/// // Returns "~/project/.gemini/cli_history" if HOME=/Users/alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, env::var("HOME").ok().as_deref())
}

pub(crate) fn format_path_with_tilde_internal(path: &Path, home: Option<&str>) -> String {
    let path_str = path.to_string_lossy();
    if let Some(home) = home
        && !home.is_empty()
        && let Ok(rest) = path.strip_prefix(home)
    {
        return Path::new("~").join(rest).to_string_lossy().into_owned();
    }

    match path_str {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}
