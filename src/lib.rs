//! # Addiction Predictor
//!
//! Scores a user's phone habits with a pre-trained regression model,
//! classifies the score into Low / Moderate / High, and compares it with a
//! reference population.
//!
//! ```no_run
//! use std::sync::Arc;
//! use addiction_predictor::{InputRecord, ReferenceStore, ScoringEngine};
//!
//! let store = ReferenceStore::load("addiction_model.onnx", "dataset.csv")?;
//! let engine = ScoringEngine::new(Arc::new(store));
//!
//! let result = engine.evaluate(&InputRecord {
//!     age: 25,
//!     daily_usage_hours: 5.0,
//!     sleep_hours: 6.5,
//!     phone_checks_per_day: 80,
//!     apps_used_daily: 10,
//!     social_media_hours: 3.0,
//!     gaming_hours: 1.0,
//! })?;
//! println!("{:.2} ({})", result.score, result.category.label());
//! # Ok::<(), addiction_predictor::PredictorError>(())
//! ```

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod logic;

// Re-export main types
pub use config::AppConfig;
pub use error::{PredictorError, Result};
pub use logic::features::{FeatureVector, InputRecord};
pub use logic::model::{LinearModel, OnnxModel, PredictiveModel};
pub use logic::reference::{ReferencePopulation, ReferenceStore};
pub use logic::scoring::{evaluate, AddictionCategory, ClassificationResult, ScoringEngine};
