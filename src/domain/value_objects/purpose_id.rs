//! Purpose Identifier Value Objects
//!
//! `PurposeId` is the number shown as `p{n}` in the report. `IdSequence` is
//! the counter handed from one numbering stage to the next.

use std::fmt;

/// Identifier stamped on every kept purpose
///
/// Unique within one aggregation pass; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PurposeId(u32);

impl PurposeId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PurposeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Next identifier to hand out
///
/// Issuing consumes the sequence and returns its successor, so every stage
/// that numbers purposes has to return the sequence it ended with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdSequence {
    next: u32,
}

impl IdSequence {
    /// Sequence starting at 1
    pub fn start() -> Self {
        Self { next: 1 }
    }

    /// Issue the next identifier
    #[must_use]
    pub fn issue(self) -> (PurposeId, IdSequence) {
        (PurposeId(self.next), IdSequence { next: self.next + 1 })
    }

    /// Number of identifiers issued so far
    pub fn issued(&self) -> u32 {
        self.next - 1
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::start()
    }
}
