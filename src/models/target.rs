use std::fmt;

/// A single loggable string derived from one event's arguments
///
/// Always one line: line breaks in the source value are flattened to spaces so the
/// target maps to exactly one line in each log file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Target(String);

impl Target {
    pub fn new(raw: &str) -> Self {
        Self(raw.replace("\r\n", " ").replace(['\r', '\n'], " "))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Target {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
