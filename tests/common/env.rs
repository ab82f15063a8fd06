//! Test environment for isolated purposeviz runs.
//!
//! `TestEnv` owns a temp purpose directory plus a temp home directory, so no
//! user config leaks into a run.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running the purposeviz CLI
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
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Parent of the purpose directory
    pub root: TempDir,
    /// Temporary directory used as HOME and XDG_CONFIG_HOME
    pub home_dir: TempDir,
    dir_name: String,
}

impl TestEnv {
    /// Environment with an empty purpose directory called `purposes`
    pub fn new() -> Self {
        Self::named("purposes")
    }

    /// Environment with an empty purpose directory called `name`
    pub fn named(name: &str) -> Self {
        let root = tempfile::tempdir().expect("Failed to create temp dir");
        let home_dir = tempfile::tempdir().expect("Failed to create temp home");
        std::fs::create_dir_all(root.path().join(name)).expect("Failed to create purpose dir");
        Self {
            root,
            home_dir,
            dir_name: name.to_string(),
        }
    }

    /// The purpose directory
    pub fn dir(&self) -> PathBuf {
        self.root.path().join(&self.dir_name)
    }

    /// Path inside the purpose directory
    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir().join(relative)
    }

    pub fn report_path(&self) -> PathBuf {
        self.path("report.html")
    }

    /// Write a file into the purpose directory
    pub fn write(&self, relative: &str, content: &str) -> &Self {
        write_file(&self.path(relative), content);
        self
    }

    /// Write a file into the isolated home directory
    pub fn write_home_file(&self, relative: &str, content: &str) -> &Self {
        write_file(&self.home_dir.path().join(relative), content);
        self
    }

    /// Read the generated report
    pub fn read_report(&self) -> String {
        std::fs::read_to_string(self.report_path())
            .unwrap_or_else(|e| panic!("Failed to read report: {}", e))
    }

    /// Run the CLI with `args`, passing the purpose directory last
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let dir = self.dir();
        self.run_raw(args, Some(&dir), env_vars)
    }

    /// Run the CLI from `root`; `dir` is appended after `args` when given
    pub fn run_raw(
        &self,
        args: &[&str],
        dir: Option<&Path>,
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(bin());
        cmd.current_dir(self.root.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("USERPROFILE", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("GITHUB_ACTIONS")
            .env_remove("PURPOSEVIZ_STYLESHEET")
            .env_remove("PURPOSEVIZ_TITLE");
        if let Some(dir) = dir {
            cmd.arg(dir);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        output_to_result(cmd.output().expect("Failed to execute purposeviz"))
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

pub fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_purposeviz")
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
