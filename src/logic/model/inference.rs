//! Inference Engine - ONNX Runtime Integration
//!
//! The model is an opaque capability: ordered vector in, scalar out.
//! Concrete backings are swapped behind `PredictiveModel`.

use std::path::Path;
use std::sync::Arc;

use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use parking_lot::Mutex;

use crate::error::{PredictorError, Result};
use crate::logic::features::{FeatureVector, FEATURE_COUNT};
use super::linear::LinearModel;

// ============================================================================
// PREDICTIVE MODEL TRAIT
// ============================================================================

/// Trait for model backings (ONNX, linear formula, test doubles)
pub trait PredictiveModel: Send + Sync + std::fmt::Debug {
    /// Score one feature vector. The result is not clamped.
    fn predict(&self, features: &FeatureVector) -> Result<f32>;

    /// Short backing name for status output ("onnx", "linear", ...)
    fn kind(&self) -> &'static str;
}

// ============================================================================
// ONNX IMPLEMENTATION
// ============================================================================

/// Regressor exported to ONNX (e.g. scikit-learn via skl2onnx)
pub struct OnnxModel {
    // `Session::run` needs `&mut`
    session: Mutex<Session>,
    output_name: String,
}

impl std::fmt::Debug for OnnxModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnnxModel")
            .field("output_name", &self.output_name)
            .finish_non_exhaustive()
    }
}

impl OnnxModel {
    /// Load ONNX model from bytes. `source` names the artifact in errors.
    pub fn load_from_bytes(model_bytes: &[u8], source: &str) -> Result<Self> {
        log::info!("Loading ONNX model from {} ({} bytes)", source, model_bytes.len());

        let session = Session::builder()
            .map_err(|e| PredictorError::artifact("model", source, format!("session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| PredictorError::artifact("model", source, format!("optimization: {}", e)))?
            .commit_from_memory(model_bytes)
            .map_err(|e| PredictorError::artifact("model", source, e))?;

        let output_name = session
            .outputs
            .first()
            .map(|o| o.name.clone())
            .ok_or_else(|| PredictorError::artifact("model", source, "model defines no outputs"))?;

        log::info!("ONNX model loaded successfully (output: {})", output_name);

        Ok(Self {
            session: Mutex::new(session),
            output_name,
        })
    }
}

impl PredictiveModel for OnnxModel {
    fn predict(&self, features: &FeatureVector) -> Result<f32> {
        let input_array = Array2::<f32>::from_shape_vec(
            (1, FEATURE_COUNT),
            features.as_slice().to_vec(),
        )
        .map_err(|e| PredictorError::inference(format!("Array error: {}", e)))?;

        let input_tensor = Value::from_array(input_array)
            .map_err(|e| PredictorError::inference(format!("Tensor error: {}", e)))?;

        let mut session = self.session.lock();
        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(PredictorError::inference)?;

        let output = outputs
            .get(&self.output_name)
            .ok_or_else(|| PredictorError::inference("No output"))?;

        let output_tensor = output
            .try_extract_tensor::<f32>()
            .map_err(|e| PredictorError::inference(format!("Extract error: {}", e)))?;

        output_tensor
            .1
            .first()
            .copied()
            .ok_or_else(|| PredictorError::inference("Empty output tensor"))
    }

    fn kind(&self) -> &'static str {
        "onnx"
    }
}

// ============================================================================
// LOADER
// ============================================================================

/// Build a model from artifact bytes, picking the backing from the
/// extension of `source`
pub fn model_from_bytes(source: &str, bytes: &[u8]) -> Result<Arc<dyn PredictiveModel>> {
    let extension = Path::new(source)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("onnx") => Ok(Arc::new(OnnxModel::load_from_bytes(bytes, source)?)),
        Some("json") => {
            let json = std::str::from_utf8(bytes)
                .map_err(|e| PredictorError::artifact("model", source, e))?;
            Ok(Arc::new(LinearModel::from_json_str(json, source)?))
        }
        _ => Err(PredictorError::artifact(
            "model",
            source,
            "unsupported model format (expected .onnx or .json)",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::features::InputRecord;

    const LINEAR_FIXTURE: &[u8] = include_bytes!("../../../tests/fixtures/linear_7.onnx");

    #[test]
    fn test_unknown_extension_rejected() {
        let err = model_from_bytes("addiction_model.pkl", b"\x80\x04").unwrap_err();
        match err {
            PredictorError::ArtifactLoad { reason, .. } => {
                assert!(reason.contains("unsupported"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_corrupt_onnx_bytes_rejected() {
        let err = model_from_bytes("broken.onnx", b"not an onnx graph").unwrap_err();
        assert!(matches!(err, PredictorError::ArtifactLoad { artifact: "model", .. }));
    }

    #[test]
    fn test_json_backing_by_extension() {
        let json = br#"{"intercept": 1.5, "weights": [0, 0, 0, 0, 0, 0, 0]}"#;
        let model = model_from_bytes("model.JSON", json).unwrap();
        assert_eq!(model.kind(), "linear");
    }

    /// Fixture graph: input[1,7] · W[7,1] + 0.5
    /// W = [0.25, 0.5, -0.25, 0.0625, 0.125, 0.5, 0.25]
    #[test]
    fn test_onnx_predict_linear_fixture() {
        let model = model_from_bytes("linear_7.onnx", LINEAR_FIXTURE).unwrap();
        assert_eq!(model.kind(), "onnx");

        let vector = FeatureVector::from_record(&InputRecord {
            age: 25,
            daily_usage_hours: 5.0,
            sleep_hours: 6.5,
            phone_checks_per_day: 80,
            apps_used_daily: 10,
            social_media_hours: 3.0,
            gaming_hours: 1.0,
        });

        // 6.25 + 2.5 - 1.625 + 5.0 + 1.25 + 1.5 + 0.25 + 0.5
        let score = model.predict(&vector).unwrap();
        assert!((score - 15.625).abs() < 1e-4, "score {}", score);

        // order matters: swapping two features changes the score
        let swapped = FeatureVector::from_values([5.0, 25.0, 6.5, 80.0, 10.0, 3.0, 1.0]);
        let other = model.predict(&swapped).unwrap();
        assert!((other - score).abs() > 1.0);
    }
}
