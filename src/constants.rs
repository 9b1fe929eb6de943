//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.

/// Default model artifact
pub const DEFAULT_MODEL_PATH: &str = "addiction_model.onnx";

/// Default reference dataset
pub const DEFAULT_DATASET_PATH: &str = "dataset.csv";

/// Column holding historical addiction-level scores
pub const DEFAULT_SCORE_COLUMN: &str = "Addiction_Level";

/// Default dataset field delimiter
pub const DEFAULT_DELIMITER: u8 = b',';

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "Phone Addiction Level Predictor";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get model path from environment or use default
pub fn get_model_path() -> String {
    std::env::var("PREDICTOR_MODEL_PATH")
        .unwrap_or_else(|_| DEFAULT_MODEL_PATH.to_string())
}

/// Get dataset path from environment or use default
pub fn get_dataset_path() -> String {
    std::env::var("PREDICTOR_DATASET_PATH")
        .unwrap_or_else(|_| DEFAULT_DATASET_PATH.to_string())
}

/// Get score column from environment or use default
pub fn get_score_column() -> String {
    std::env::var("PREDICTOR_SCORE_COLUMN")
        .unwrap_or_else(|_| DEFAULT_SCORE_COLUMN.to_string())
}

/// Get recommendation override file, if any
pub fn get_recommendations_path() -> Option<String> {
    std::env::var("PREDICTOR_RECOMMENDATIONS")
        .ok()
        .filter(|s| !s.trim().is_empty())
}
