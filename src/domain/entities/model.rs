//! Aggregated report model

use crate::domain::value_objects::DataCategory;
use crate::models::Transfer;

use super::Purpose;

/// Filtered, numbered and deduplicated view of one directory of records
///
/// Built once per run by [`crate::domain::services::aggregate`] and only
/// read afterwards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AggregatedModel {
    /// Kept top-level purposes, each with its kept composed purposes
    pub top_purposes: Vec<Purpose>,
    /// Every kept composed purpose, parent-major
    pub child_purposes: Vec<Purpose>,
    /// Categories used by top-level purposes, unique and ascending
    pub data_categories: Vec<DataCategory>,
    /// Recipients of top-level purposes, unique per (recipient, policy), by recipient
    pub transfers: Vec<Transfer>,
}
