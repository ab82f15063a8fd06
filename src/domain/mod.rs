//! Domain Layer
//!
//! Pure aggregation logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `value_objects/` - Identifier and data-category value types
//! - `entities/` - Numbered purposes and the aggregated report model
//! - `services/` - Naming rules, deduplication and the aggregator
//!
//! Nothing in this layer touches the file system.

pub mod entities;
pub mod services;
pub mod value_objects;
