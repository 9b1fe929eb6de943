//! Linear Model - `intercept + Σ wᵢ·xᵢ`
//!
//! JSON-described backing for tests and for deployments without ONNX Runtime.
//!
//! ```json
//! { "intercept": 0.5, "weights": [0.0, 0.6, -0.2, 0.02, 0.05, 0.3, 0.2] }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{PredictorError, Result};
use crate::logic::features::{FeatureVector, FEATURE_COUNT};
use super::inference::PredictiveModel;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub intercept: f32,
    pub weights: [f32; FEATURE_COUNT],
}

#[derive(Deserialize)]
struct RawLinearModel {
    intercept: f32,
    weights: Vec<f32>,
}

impl LinearModel {
    pub fn new(intercept: f32, weights: [f32; FEATURE_COUNT]) -> Self {
        Self { intercept, weights }
    }

    /// Constant output, ignores every feature
    pub fn constant(value: f32) -> Self {
        Self::new(value, [0.0; FEATURE_COUNT])
    }

    pub fn from_json_str(json: &str, source: &str) -> Result<Self> {
        let raw: RawLinearModel = serde_json::from_str(json)
            .map_err(|e| PredictorError::artifact("model", source, e))?;

        let weights: [f32; FEATURE_COUNT] = raw.weights.as_slice().try_into().map_err(|_| {
            PredictorError::artifact(
                "model",
                source,
                format!("expected {} weights, got {}", FEATURE_COUNT, raw.weights.len()),
            )
        })?;

        Ok(Self::new(raw.intercept, weights))
    }
}

impl PredictiveModel for LinearModel {
    fn predict(&self, features: &FeatureVector) -> Result<f32> {
        let dot: f32 = self
            .weights
            .iter()
            .zip(features.as_slice())
            .map(|(w, x)| w * x)
            .sum();
        Ok(self.intercept + dot)
    }

    fn kind(&self) -> &'static str {
        "linear"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict() {
        let model = LinearModel::new(1.0, [0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.5]);
        let vector = FeatureVector::from_values([30.0, 4.0, 7.0, 50.0, 8.0, 2.0, 2.0]);
        assert_eq!(model.predict(&vector).unwrap(), 6.0);
    }

    #[test]
    fn test_constant_ignores_features() {
        let model = LinearModel::constant(7.25);
        let vector = FeatureVector::from_values([99.0; FEATURE_COUNT]);
        assert_eq!(model.predict(&vector).unwrap(), 7.25);
    }

    #[test]
    fn test_wrong_weight_count() {
        let err = LinearModel::from_json_str(r#"{"intercept": 0, "weights": [1, 2]}"#, "inline")
            .unwrap_err();
        assert!(err.to_string().contains("expected 7 weights"));
    }

    #[test]
    fn test_from_json_str() {
        let model =
            LinearModel::from_json_str(r#"{"intercept": 2.0, "weights": [0, 0, 0, 0, 0, 0, 1]}"#, "inline")
                .unwrap();
        assert_eq!(model.intercept, 2.0);
        assert_eq!(model.weights[6], 1.0);
    }
}
