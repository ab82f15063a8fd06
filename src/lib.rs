//! purposeviz - personal-data purpose report generator
//!
//! Reads a directory of purpose declarations (one JSON file per purpose,
//! possibly with nested composed purposes), numbers and deduplicates them,
//! and renders a single HTML report laying out purposes, data categories and
//! recipients as cross-referenced lanes.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod fs;
pub mod models;
pub mod parser;
pub mod render;

// Re-exports for convenience
pub use application::{ReportPipeline, ReportSummary};
pub use config::Config;
pub use domain::entities::{AggregatedModel, Purpose};
pub use domain::services::aggregate;
pub use domain::value_objects::{DataCategory, PurposeId};
pub use error::{ReportError, ReportResult};
pub use models::{Flag, RawPurposeRecord, Retention, Transfer};
pub use parser::{load_directory, parse_record};
pub use render::{render, Document, RenderOptions};
