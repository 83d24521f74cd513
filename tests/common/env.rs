//! Test environment for isolated salted runs.
//!
//! Provides `TestEnv` - a temp project directory with a `salted.toml`,
//! payload files, and helpers to run the CLI from inside it.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

use super::fixtures::*;

/// Variables the binary reads; cleared so the host environment cannot leak in
const SALTED_VARS: &[&str] = &[
    "SALTED_VARIANT",
    "SALTED_RECORD_MODE",
    "SALTED_RECORD_PATH",
    "RUST_LOG",
];

/// Result of running a salted CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("invalid JSON line {:?}: {}", line, e))
            })
            .collect()
    }
}

/// Isolated project directory
pub struct TestEnv {
    pub project_root: TempDir,
    salted_bin: PathBuf,
}

impl TestEnv {
    /// Empty project
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().expect("Failed to create temp dir"),
            salted_bin: PathBuf::from(env!("CARGO_BIN_EXE_salted")),
        }
    }

    /// Project with `HARBOR_CONFIG` and its payload files
    pub fn with_harbor() -> Self {
        let env = Self::new();
        env.write_project_file("build/Harbor.json", HARBOR_ARTIFACT);
        env.write_project_file("build/harbor.hex", HARBOR_CREATION_HEX);
        env.write_project_file("salted.toml", HARBOR_CONFIG);
        env
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Run salted in the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run salted in the project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    /// Run salted from a specific directory with extra env vars
    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.salted_bin);
        cmd.current_dir(cwd).args(args);
        for var in SALTED_VARS {
            cmd.env_remove(var);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute salted");
        output_to_result(output)
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Read a project file
    pub fn read_project_file(&self, relative_path: &str) -> String {
        std::fs::read_to_string(self.project_path(relative_path))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative_path, e))
    }

    /// Parse a record file
    pub fn read_record(&self, relative_path: &str) -> serde_json::Value {
        serde_json::from_str(&self.read_project_file(relative_path))
            .unwrap_or_else(|e| panic!("Record {} is not JSON: {}", relative_path, e))
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
