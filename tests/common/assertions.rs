//! Assertion macros for report tests.
//!
//! Failure messages include the report or command output to aid debugging.

use std::path::Path;

/// List all files directly inside a directory (for debugging)
pub fn list_files(dir: &Path) -> Vec<String> {
    let mut files: Vec<String> = std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .flatten()
                .map(|e| e.file_name().to_string_lossy().to_string())
                .collect()
        })
        .unwrap_or_default();
    files.sort();
    files
}

/// Assert that the generated report contains a fragment.
///
/// # Example
/// ```ignore
/// assert_report_contains!(env, "<span> Billing</span>");
/// ```
#[macro_export]
macro_rules! assert_report_contains {
    ($env:expr, $needle:expr) => {
        let report = $env.read_report();
        assert!(
            report.contains($needle),
            "Expected report to contain '{}'.\nReport:\n{}",
            $needle,
            report
        );
    };
}

/// Assert that no report was written.
#[macro_export]
macro_rules! assert_no_report {
    ($env:expr) => {
        assert!(
            !$env.report_path().exists(),
            "Expected no report, but found one.\nFiles: {:?}",
            $crate::common::list_files(&$env.dir())
        );
    };
}

/// Assert that a command succeeded, showing its output otherwise.
#[macro_export]
macro_rules! assert_success {
    ($result:expr) => {
        assert!(
            $result.success,
            "Expected success (exit {}).\n{}",
            $result.exit_code,
            $result.combined_output()
        );
    };
}
