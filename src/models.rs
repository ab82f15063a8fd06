//! Raw purpose declarations as they appear on disk
//!
//! Defines the serde shapes read by the loader:
//! - `RawPurposeRecord`: one JSON file, or one entry of a parent's `purposes`
//! - `Transfer`: a data recipient reference
//! - `Retention`: retention policy and duration
//! - `Flag`: boolean-like `optOut` / `required` values
//!
//! Nothing here is filtered or numbered; see `domain::aggregate` for that.

use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize};

/// Retention policy used when a record declares none
pub const DEFAULT_RETENTION_POLICY: &str = "AfterPurpose";

/// A purpose declaration before aggregation.
///
/// Every member is optional at this stage. `name` only becomes mandatory once
/// the record survives filtering.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPurposeRecord {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "de_flag")]
    pub opt_out: Option<Flag>,

    #[serde(default, deserialize_with = "de_flag")]
    pub required: Option<Flag>,

    #[serde(default)]
    pub retention: Option<Retention>,

    /// Processing mechanism, passed through untouched
    #[serde(default)]
    pub pm: Option<serde_json::Value>,

    #[serde(default, deserialize_with = "de_null_default")]
    pub data: Vec<String>,

    #[serde(default, deserialize_with = "de_null_default")]
    pub transfers: Vec<Transfer>,

    /// Composed (child) purposes
    #[serde(default, deserialize_with = "de_null_default")]
    pub purposes: Vec<RawPurposeRecord>,

    /// File this record was read from (set by the loader)
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl RawPurposeRecord {
    /// Create a record with a name and data categories
    pub fn new<I, S>(name: impl Into<String>, data: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: Some(name.into()),
            data: data.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_transfer(mut self, transfer: Transfer) -> Self {
        self.transfers.push(transfer);
        self
    }

    pub fn with_child(mut self, child: RawPurposeRecord) -> Self {
        self.purposes.push(child);
        self
    }

    /// Whether the record touches any personal data at all
    pub fn has_data(&self) -> bool {
        !self.data.is_empty()
    }
}

/// A reference to a third party receiving data under a policy
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Transfer {
    #[serde(default, rename = "recipientId")]
    pub recipient_id: String,

    #[serde(default, rename = "policyURL")]
    pub policy_url: String,
}

impl Transfer {
    pub fn new(recipient_id: impl Into<String>, policy_url: impl Into<String>) -> Self {
        Self {
            recipient_id: recipient_id.into(),
            policy_url: policy_url.into(),
        }
    }

    /// Identity used when deduplicating recipients across records
    pub fn key(&self) -> (&str, &str) {
        (&self.recipient_id, &self.policy_url)
    }
}

/// How long data is kept, and under which policy
///
/// Accepts both the table form:
///   "retention": { "policy": "Fixed", "duration": 30 }
///
/// And the pair form:
///   "retention": ["Fixed", 30]
///
/// Anything else is kept as raw JSON and shown as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Retention {
    Period { policy: String, duration: u64 },
    Other(serde_json::Value),
}

impl Retention {
    pub fn new(policy: impl Into<String>, duration: u64) -> Self {
        Retention::Period {
            policy: policy.into(),
            duration,
        }
    }
}

impl Default for Retention {
    fn default() -> Self {
        Self::new(DEFAULT_RETENTION_POLICY, 0)
    }
}

impl std::fmt::Display for Retention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Retention::Period { policy, duration } => write!(f, "({}, {})", policy, duration),
            Retention::Other(value) => write!(f, "{}", value),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct RetentionTable {
    #[serde(default = "default_policy")]
    policy: String,
    #[serde(default)]
    duration: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RetentionDe {
    Table(RetentionTable),
    Pair(String, u64),
    Other(serde_json::Value),
}

fn default_policy() -> String {
    DEFAULT_RETENTION_POLICY.to_string()
}

impl<'de> Deserialize<'de> for Retention {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RetentionDe::deserialize(deserializer)? {
            RetentionDe::Table(RetentionTable { policy, duration })
            | RetentionDe::Pair(policy, duration) => Retention::Period { policy, duration },
            RetentionDe::Other(value) => Retention::Other(value),
        })
    }
}

/// A boolean-like flag (`optOut`, `required`)
///
/// `true`/`false`, `0`/`1` and the strings `"true"`/`"false"` (any case) are
/// read as booleans; any other value is kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Flag {
    Bool(bool),
    Other(serde_json::Value),
}

impl From<serde_json::Value> for Flag {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match &value {
            Value::Bool(b) => Flag::Bool(*b),
            Value::Number(n) if n.as_u64() == Some(0) => Flag::Bool(false),
            Value::Number(n) if n.as_u64() == Some(1) => Flag::Bool(true),
            Value::String(s) if s.trim().eq_ignore_ascii_case("true") => Flag::Bool(true),
            Value::String(s) if s.trim().eq_ignore_ascii_case("false") => Flag::Bool(false),
            _ => Flag::Other(value),
        }
    }
}

impl std::fmt::Display for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Flag::Bool(b) => write!(f, "{}", b),
            Flag::Other(value) => write!(f, "{}", value),
        }
    }
}

fn de_flag<'de, D>(deserializer: D) -> Result<Option<Flag>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<serde_json::Value>::deserialize(deserializer)?
        .filter(|v| !v.is_null())
        .map(Flag::from))
}

fn de_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
