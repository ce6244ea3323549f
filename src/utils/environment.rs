use std::path::{Path, PathBuf};

/// Environment variable the host CLI sets to the root of the active project
pub const PROJECT_DIR_ENV: &str = "GEMINI_PROJECT_DIR";

/// Pick the project directory: explicit flag, then the host's env var, then the cwd
///
/// Relative candidates are resolved against `cwd` so the result is always absolute
/// (as long as `cwd` is). Empty values are treated as unset.
pub fn resolve_project_dir(flag: Option<&Path>, env_value: Option<&str>, cwd: &Path) -> PathBuf {
    let candidate = flag
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .or_else(|| env_value.filter(|v| !v.trim().is_empty()).map(PathBuf::from));

    match candidate {
        Some(path) if path.is_absolute() => path,
        Some(path) => cwd.join(path),
        None => cwd.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefers_flag() {
        let dir = resolve_project_dir(Some(Path::new("/flag")), Some("/env"), Path::new("/cwd"));
        assert_eq!(dir, PathBuf::from("/flag"));
    }

    #[test]
    fn test_resolve_falls_back_to_env() {
        let dir = resolve_project_dir(None, Some("/env"), Path::new("/cwd"));
        assert_eq!(dir, PathBuf::from("/env"));
    }

    #[test]
    fn test_resolve_falls_back_to_cwd() {
        assert_eq!(resolve_project_dir(None, None, Path::new("/cwd")), PathBuf::from("/cwd"));
        assert_eq!(resolve_project_dir(None, Some("  "), Path::new("/cwd")), PathBuf::from("/cwd"));
    }

    #[test]
    fn test_resolve_relative_against_cwd() {
        let dir = resolve_project_dir(Some(Path::new("app")), None, Path::new("/cwd"));
        assert_eq!(dir, PathBuf::from("/cwd/app"));
    }
}
