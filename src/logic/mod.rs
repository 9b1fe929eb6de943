//! Logic Module - scoring core
//!
//! - `features/` - input record, feature layout, ordered vector
//! - `model/` - predictive model backings (ONNX, linear)
//! - `reference/` - reference store (model + reference population)
//! - `scoring/` - classification engine

pub mod features;
pub mod model;
pub mod reference;
pub mod scoring;
