//! Classification Rules & Recommendation Copy
//!
//! Constants and config only. No classify logic here.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{PredictorError, Result};
use super::types::AddictionCategory;

// ============================================================================
// THRESHOLDS
// ============================================================================

/// Below this score = Low
pub const LOW_MAX: f32 = 5.0;

/// At or above this score = High; between LOW_MAX and here = Moderate
pub const MODERATE_MAX: f32 = 8.0;

// ============================================================================
// RECOMMENDATIONS
// ============================================================================

pub const LOW_RECOMMENDATION: &str =
    "Keep up the good habits! Maintain balance between phone use and other activities.";

pub const MODERATE_RECOMMENDATION: &str =
    "Consider reducing screen time and increasing offline activities.";

pub const HIGH_RECOMMENDATION: &str =
    "High risk of phone addiction! Try setting app timers and taking regular breaks.";

/// Category → message lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationTable {
    pub low: String,
    pub moderate: String,
    pub high: String,
}

impl Default for RecommendationTable {
    fn default() -> Self {
        Self {
            low: LOW_RECOMMENDATION.to_string(),
            moderate: MODERATE_RECOMMENDATION.to_string(),
            high: HIGH_RECOMMENDATION.to_string(),
        }
    }
}

impl RecommendationTable {
    pub fn message(&self, category: AddictionCategory) -> &str {
        match category {
            AddictionCategory::Low => &self.low,
            AddictionCategory::Moderate => &self.moderate,
            AddictionCategory::High => &self.high,
        }
    }

    /// Override copy from JSON. Missing categories keep the default text.
    ///
    /// ```json
    /// { "low": "...", "moderate": "...", "high": "..." }
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let overrides: HashMap<AddictionCategory, String> = serde_json::from_str(json)
            .map_err(|e| PredictorError::Config {
                reason: format!("invalid recommendations: {}", e),
            })?;

        let mut table = Self::default();
        for (category, message) in overrides {
            let slot = match category {
                AddictionCategory::Low => &mut table.low,
                AddictionCategory::Moderate => &mut table.moderate,
                AddictionCategory::High => &mut table.high,
            };
            *slot = message;
        }
        Ok(table)
    }

    pub fn from_json_file(path: &str) -> Result<Self> {
        log::info!("Loading recommendation copy from: {}", path);
        let json = std::fs::read_to_string(path).map_err(|e| PredictorError::Config {
            reason: format!("cannot read {}: {}", path, e),
        })?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_copy() {
        let table = RecommendationTable::default();
        assert_eq!(table.message(AddictionCategory::Low), LOW_RECOMMENDATION);
        assert_eq!(table.message(AddictionCategory::Moderate), MODERATE_RECOMMENDATION);
        assert_eq!(table.message(AddictionCategory::High), HIGH_RECOMMENDATION);
    }

    #[test]
    fn test_partial_override() {
        let table = RecommendationTable::from_json_str(r#"{"high": "Take a break."}"#).unwrap();
        assert_eq!(table.message(AddictionCategory::High), "Take a break.");
        assert_eq!(table.message(AddictionCategory::Low), LOW_RECOMMENDATION);
    }

    #[test]
    fn test_unknown_category_rejected() {
        let err = RecommendationTable::from_json_str(r#"{"extreme": "?"}"#).unwrap_err();
        assert!(matches!(err, PredictorError::Config { .. }));
    }
}
