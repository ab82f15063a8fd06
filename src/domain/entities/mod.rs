//! Domain Entities
//!
//! - `Purpose` - A kept, numbered purpose (top-level or composed)
//! - `AggregatedModel` - Everything the renderer needs for one report

mod model;
mod purpose;

pub use model::AggregatedModel;
pub use purpose::Purpose;
