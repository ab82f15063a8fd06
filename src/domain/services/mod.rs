//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod aggregator;
mod dedup;
pub mod naming;

pub use aggregator::aggregate;
pub use dedup::dedup_by_key;
