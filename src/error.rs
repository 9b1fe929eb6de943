//! Error types for the predictor core

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PredictorError>;

/// Errors surfaced by the predictor core
#[derive(Debug, Error)]
pub enum PredictorError {
    /// Model or dataset missing, corrupt, or missing the score column.
    /// Fatal at startup.
    #[error("Failed to load {artifact} from {path}: {reason}")]
    ArtifactLoad {
        artifact: &'static str,
        path: String,
        reason: String,
    },

    /// Reference population has no rows, percentile is undefined
    #[error("Reference population is empty; percentile comparison is undefined")]
    EmptyReferencePopulation,

    /// Input field outside its closed range (or not finite)
    #[error("Input field '{field}' = {value} is outside [{min}, {max}]")]
    InputOutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Model failed to produce a usable score
    #[error("Inference failed: {reason}")]
    Inference { reason: String },

    /// Invalid runtime configuration
    #[error("Configuration error: {reason}")]
    Config { reason: String },
}

impl PredictorError {
    pub(crate) fn artifact(artifact: &'static str, path: &str, reason: impl ToString) -> Self {
        PredictorError::ArtifactLoad {
            artifact,
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn inference(reason: impl ToString) -> Self {
        PredictorError::Inference {
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_load_message() {
        let err = PredictorError::artifact("model", "missing.onnx", "not found");
        assert_eq!(
            err.to_string(),
            "Failed to load model from missing.onnx: not found"
        );
    }

    #[test]
    fn test_inference_message() {
        assert_eq!(
            PredictorError::inference("empty output").to_string(),
            "Inference failed: empty output"
        );
    }
}
