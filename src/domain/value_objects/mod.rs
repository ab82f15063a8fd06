//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod data_category;
mod purpose_id;

pub use data_category::DataCategory;
pub use purpose_id::{IdSequence, PurposeId};
