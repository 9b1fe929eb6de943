//! Configuration module

use crate::constants;
use crate::error::{PredictorError, Result};
use crate::logic::reference::DatasetOptions;
use crate::logic::scoring::RecommendationTable;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Model artifact (.onnx or .json)
    pub model_path: String,

    /// Reference dataset (delimited, with header)
    pub dataset_path: String,

    /// Column holding historical scores
    pub score_column: String,

    /// Dataset field delimiter
    pub delimiter: u8,

    /// Optional JSON file overriding recommendation copy
    pub recommendations_path: Option<String>,
}

/// Per-field overrides, typically from CLI flags
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub model_path: Option<String>,
    pub dataset_path: Option<String>,
    pub score_column: Option<String>,
    pub delimiter: Option<char>,
    pub recommendations_path: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model_path: constants::DEFAULT_MODEL_PATH.to_string(),
            dataset_path: constants::DEFAULT_DATASET_PATH.to_string(),
            score_column: constants::DEFAULT_SCORE_COLUMN.to_string(),
            delimiter: constants::DEFAULT_DELIMITER,
            recommendations_path: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            model_path: constants::get_model_path(),
            dataset_path: constants::get_dataset_path(),
            score_column: constants::get_score_column(),
            delimiter: constants::DEFAULT_DELIMITER,
            recommendations_path: constants::get_recommendations_path(),
        }
    }

    /// Apply overrides field by field
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Result<Self> {
        if let Some(path) = overrides.model_path {
            self.model_path = path;
        }
        if let Some(path) = overrides.dataset_path {
            self.dataset_path = path;
        }
        if let Some(column) = overrides.score_column {
            self.score_column = column;
        }
        if let Some(delimiter) = overrides.delimiter {
            if !delimiter.is_ascii() {
                return Err(PredictorError::Config {
                    reason: format!("delimiter '{}' must be a single ASCII character", delimiter),
                });
            }
            self.delimiter = delimiter as u8;
        }
        if overrides.recommendations_path.is_some() {
            self.recommendations_path = overrides.recommendations_path;
        }
        Ok(self)
    }

    pub fn dataset_options(&self) -> DatasetOptions {
        DatasetOptions {
            score_column: self.score_column.clone(),
            delimiter: self.delimiter,
        }
    }

    /// Recommendation copy: override file if configured, defaults otherwise
    pub fn recommendations(&self) -> Result<RecommendationTable> {
        match &self.recommendations_path {
            Some(path) => RecommendationTable::from_json_file(path),
            None => Ok(RecommendationTable::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_fields() {
        let config = AppConfig::default()
            .with_overrides(ConfigOverrides {
                dataset_path: Some("ref.tsv".to_string()),
                delimiter: Some('\t'),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(config.model_path, constants::DEFAULT_MODEL_PATH);
        assert_eq!(config.dataset_path, "ref.tsv");
        assert_eq!(config.dataset_options().delimiter, b'\t');
        assert_eq!(config.dataset_options().score_column, "Addiction_Level");
    }

    #[test]
    fn test_non_ascii_delimiter_rejected() {
        let err = AppConfig::default()
            .with_overrides(ConfigOverrides {
                delimiter: Some('é'),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, PredictorError::Config { .. }));
    }

    #[test]
    fn test_default_recommendations() {
        let table = AppConfig::default().recommendations().unwrap();
        assert_eq!(table, RecommendationTable::default());
    }

    #[test]
    fn test_missing_recommendations_file() {
        let config = AppConfig {
            recommendations_path: Some("no/such/copy.json".to_string()),
            ..AppConfig::default()
        };
        assert!(config.recommendations().is_err());
    }
}
