//! Scoring Module - score → category, percentile, recommendation
//!
//! - `types` - data structures
//! - `rules` - thresholds and recommendation copy
//! - `engine` - evaluate

pub mod engine;
pub mod rules;
pub mod types;


// Re-export common types
pub use engine::{classify, evaluate, evaluate_with_table, ScoringEngine};
pub use rules::RecommendationTable;
pub use types::{AddictionCategory, ClassificationResult, Comparison};
