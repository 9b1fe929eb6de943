//! Features Module - model input schema
//!
//! - `layout` - authoritative feature order
//! - `input` - user-supplied record and its bounds
//! - `vector` - ordered vector handed to the model

pub mod input;
pub mod layout;
pub mod vector;

// Re-export common types
pub use input::{FieldBounds, InputRecord, FIELD_BOUNDS};
pub use layout::{FEATURE_COUNT, FEATURE_LAYOUT};
pub use vector::FeatureVector;
