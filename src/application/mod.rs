//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on the Domain layer (entities, services)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between file I/O and Domain
//!
//! ## Use Cases
//!
//! - `ReportPipeline` - Load purpose files, aggregate, render and write the report

pub mod report;

pub use report::{directory_title, ReportPipeline, ReportSummary};
