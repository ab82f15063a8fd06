//! HTML report rendering
//!
//! Turns a [`crate::domain::entities::AggregatedModel`] into a complete HTML
//! document. No aggregation happens here; ids, ordering and dedup all come
//! from the model.

mod document;
pub mod escaping;
pub mod lanes;

pub use document::{render, Document, RenderOptions};
pub use escaping::escape_html;
