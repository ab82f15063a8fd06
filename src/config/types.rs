//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ReportResult;

use super::loader::{self, ConfigWarning};

/// Name of the generated document inside the scanned directory
pub const REPORT_FILE_NAME: &str = "report.html";

/// Report presentation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Stylesheet linked from the document, relative to the report
    #[serde(default = "default_stylesheet")]
    pub stylesheet: String,

    /// Prepended to the directory name to form the title
    #[serde(default = "default_title_prefix")]
    pub title_prefix: String,

    /// Full title, replacing prefix + directory name
    #[serde(default)]
    pub title: Option<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            stylesheet: default_stylesheet(),
            title_prefix: default_title_prefix(),
            title: None,
        }
    }
}

fn default_stylesheet() -> String {
    "styles.css".to_string()
}

fn default_title_prefix() -> String {
    "Purpose data for ".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub report: ReportConfig,
}

impl Config {
    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ReportResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load the config that applies to a scanned directory
    pub fn load_for_directory(dir: &Path) -> ReportResult<(Self, Vec<ConfigWarning>)> {
        loader::load_for_directory(dir)
    }

    /// Title for a report generated from `dir_name`
    pub fn title_for(&self, dir_name: &str) -> String {
        match &self.report.title {
            Some(title) => title.clone(),
            None => format!("{}{}", self.report.title_prefix, dir_name),
        }
    }
}
