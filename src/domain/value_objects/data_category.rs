//! Data Category Value Object

use std::fmt;

use crate::domain::services::naming;

/// A category of personal data, e.g. `person.contact.email`
///
/// Identity is the literal string; ordering is plain string ordering.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DataCategory(String);

impl DataCategory {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last namespace segment, used as the label in the report
    pub fn display_name(&self) -> &str {
        naming::category_display_name(&self.0)
    }
}

impl fmt::Display for DataCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for DataCategory {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for DataCategory {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
