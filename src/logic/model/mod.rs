//! Model Module - predictive model backings
//!
//! Inference is kept apart from scoring so the model can be swapped.

pub mod inference;
pub mod linear;

// Re-export common types
pub use inference::{model_from_bytes, OnnxModel, PredictiveModel};
pub use linear::LinearModel;
