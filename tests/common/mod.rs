//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use gemini_activity_log::Config;
use gemini_activity_log::parsers::extract_data_rows;
use serde_json::{Value, json};
use tempfile::TempDir;

/// A project directory plus an isolated temp root for turn logs
pub struct Workspace {
    project: TempDir,
    temp_root: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            project: TempDir::new().expect("Failed to create project dir"),
            temp_root: TempDir::new().expect("Failed to create temp root"),
        }
    }

    pub fn project_dir(&self) -> &Path {
        self.project.path()
    }

    pub fn temp_root(&self) -> &Path {
        self.temp_root.path()
    }

    /// Config equivalent to what the binary resolves under [`Workspace::command`]
    pub fn config(&self) -> Config {
        Config::new(self.project_dir(), self.temp_root())
    }

    /// Binary invocation scoped to this workspace, with host env vars cleared
    pub fn command(&self, subcommand: &str) -> Command {
        Command::from_std(self.std_command(subcommand))
    }

    /// Same invocation as [`Workspace::command`], for tests that manage the child's pipes
    pub fn std_command(&self, subcommand: &str) -> std::process::Command {
        let mut cmd = std::process::Command::new(env!("CARGO_BIN_EXE_gemini-activity-log"));
        cmd.env_remove("GEMINI_PROJECT_DIR")
            .env_remove("GEMINI_ACTIVITY_MAX_ROWS")
            .env_remove("GEMINI_ACTIVITY_LOG")
            .env("GEMINI_ACTIVITY_TEMP_DIR", self.temp_root())
            .arg(subcommand)
            .arg("--project-dir")
            .arg(self.project_dir());
        cmd
    }

    /// Run `track` with the given payload, asserting the silent-success contract
    pub fn track(&self, payload: &str) {
        self.command("track").write_stdin(payload.to_string()).assert().success().stdout("");
    }

    /// Run `report` and return its stdout
    pub fn report(&self) -> String {
        let output = self.command("report").assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("report output is not UTF-8")
    }

    pub fn stream_log(&self) -> String {
        read_or_empty(&self.config().stream_log_path())
    }

    pub fn history(&self) -> String {
        read_or_empty(&self.config().recent_history_path())
    }

    pub fn history_rows(&self) -> Vec<String> {
        extract_data_rows(&self.history())
    }

    pub fn turn_log_path(&self, name: &str) -> PathBuf {
        self.config().turn_log_dir.join(name)
    }

    pub fn turn_log(&self, name: &str) -> String {
        read_or_empty(&self.turn_log_path(name))
    }

    /// Seed a turn log directly, bypassing the tracker
    pub fn write_turn_log(&self, name: &str, content: &str) {
        let path = self.turn_log_path(name);
        fs::create_dir_all(path.parent().expect("turn log has a parent")).expect("Failed to create turn dir");
        fs::write(path, content).expect("Failed to write turn log");
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

fn read_or_empty(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_default()
}

/// Builder for host event payloads
pub struct EventBuilder {
    tool_name: String,
    args: serde_json::Map<String, Value>,
}

impl EventBuilder {
    pub fn new(tool_name: &str) -> Self {
        Self { tool_name: tool_name.to_string(), args: serde_json::Map::new() }
    }

    /// Set one argument
    pub fn arg(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.args.insert(key.to_string(), value.into());
        self
    }

    /// `{"tool_name": ..., "tool_input": {...}}`
    pub fn to_json(&self) -> String {
        json!({ "tool_name": self.tool_name, "tool_input": self.args }).to_string()
    }

    /// `{"tool": {"name": ..., "args": {...}}}`
    pub fn to_nested_json(&self) -> String {
        json!({ "tool": { "name": self.tool_name, "args": self.args } }).to_string()
    }
}

pub fn read_file_event(path: &str) -> String {
    EventBuilder::new("read_file").arg("file_path", path).to_json()
}

pub fn write_file_event(path: &str) -> String {
    EventBuilder::new("write_file").arg("file_path", path).to_json()
}
