//! Purpose Entity
//!
//! A purpose that survived filtering and carries its report identifier.

use crate::domain::services::naming;
use crate::domain::value_objects::{DataCategory, PurposeId};
use crate::error::{ReportError, ReportResult};
use crate::models::{Flag, RawPurposeRecord, Retention, Transfer};

/// A kept, numbered purpose
///
/// Top-level purposes carry their kept composed purposes in `purposes`;
/// composed purposes always have an empty `purposes` list in the report.
#[derive(Debug, Clone, PartialEq)]
pub struct Purpose {
    pub id: PurposeId,
    pub name: String,
    pub description: Option<String>,
    pub opt_out: Option<Flag>,
    pub required: Option<Flag>,
    /// Effective retention (defaulted when the record has none)
    pub retention: Retention,
    pub pm: Option<serde_json::Value>,
    pub data: Vec<DataCategory>,
    pub transfers: Vec<Transfer>,
    pub purposes: Vec<Purpose>,
}

impl Purpose {
    /// Stamp `id` on a raw record.
    ///
    /// Nested `purposes` are not carried over; the aggregator numbers them in
    /// a later pass. `record` names the record in error messages.
    pub fn from_raw(raw: RawPurposeRecord, id: PurposeId, record: &str) -> ReportResult<Self> {
        let name = raw.name.ok_or_else(|| ReportError::MissingField {
            field: "name".to_string(),
            record: record.to_string(),
        })?;

        Ok(Self {
            id,
            name,
            description: raw.description,
            opt_out: raw.opt_out,
            required: raw.required,
            retention: raw.retention.unwrap_or_default(),
            pm: raw.pm,
            data: raw.data.into_iter().map(DataCategory::from).collect(),
            transfers: raw.transfers,
            purposes: Vec::new(),
        })
    }

    /// Label shown in the Purposes lane
    pub fn display_name(&self) -> &str {
        naming::display_name(&self.name)
    }

    /// Label shown for this purpose underneath its parent
    pub fn child_label(&self) -> String {
        naming::child_label(&self.name)
    }

    /// Description, if non-empty
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}
