//! Report generation pipeline
//!
//! ## Flow
//!
//! 1. Load purpose files from the directory
//! 2. Aggregate them into the report model
//! 3. Render the HTML document
//! 4. Write `report.html` atomically
//!
//! Nothing is written unless steps 1 to 3 all succeed.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::config::{Config, REPORT_FILE_NAME};
use crate::domain::entities::AggregatedModel;
use crate::domain::services::aggregate;
use crate::error::ReportResult;
use crate::fs::write_atomic;
use crate::parser::load_directory;
use crate::render::{render, Document, RenderOptions};

/// Counts and location of a generated report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub records: usize,
    pub purposes: usize,
    pub composed_purposes: usize,
    pub data_categories: usize,
    pub recipients: usize,
    pub report: PathBuf,
}

impl ReportSummary {
    fn new(records: usize, model: &AggregatedModel, report: PathBuf) -> Self {
        Self {
            records,
            purposes: model.top_purposes.len(),
            composed_purposes: model.child_purposes.len(),
            data_categories: model.data_categories.len(),
            recipients: model.transfers.len(),
            report,
        }
    }
}

/// Load + aggregate + render + write for one directory.
#[derive(Debug, Clone)]
pub struct ReportPipeline {
    dir: PathBuf,
    config: Config,
}

impl ReportPipeline {
    pub fn new(dir: impl Into<PathBuf>, config: Config) -> Self {
        Self {
            dir: dir.into(),
            config,
        }
    }

    /// Where the report is written
    pub fn report_path(&self) -> PathBuf {
        self.dir.join(REPORT_FILE_NAME)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::new(
            self.config.title_for(&directory_title(&self.dir)),
            self.config.report.stylesheet.clone(),
        )
    }

    /// Load, aggregate and render without writing anything.
    pub fn build(&self) -> ReportResult<(Document, ReportSummary)> {
        let records = load_directory(&self.dir)?;
        let record_count = records.len();

        let model = aggregate(records)?;
        let document = render(&model, &self.render_options());

        Ok((
            document,
            ReportSummary::new(record_count, &model, self.report_path()),
        ))
    }

    /// Build the report and write it, replacing any previous one.
    pub fn generate(&self) -> ReportResult<ReportSummary> {
        let (document, summary) = self.build()?;
        write_atomic(&summary.report, document.as_str())?;
        info!(
            report = %summary.report.display(),
            purposes = summary.purposes,
            composed = summary.composed_purposes,
            "wrote report"
        );
        Ok(summary)
    }
}

/// Name of the scanned directory, as used in the report title
///
/// Falls back to the canonical path's last component for paths like `.`
/// and to the path as given when neither has a name.
pub fn directory_title(dir: &Path) -> String {
    if let Some(name) = dir.file_name() {
        return name.to_string_lossy().into_owned();
    }

    dir.canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| dir.display().to_string())
}
