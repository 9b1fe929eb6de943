//! Presentation-boundary commands
//!
//! Front-ends (CLI, UI) call these and render what comes back.
//! Errors are flattened to strings for display.

use serde::{Deserialize, Serialize};

use crate::logic::features::layout::{layout_info, LayoutInfo};
use crate::logic::features::InputRecord;
use crate::logic::reference::{ReferenceStore, StoreMetadata};
use crate::logic::scoring::{ClassificationResult, ScoringEngine};

// ============================================================================
// PREDICTION
// ============================================================================

/// Validate at the boundary, then score
pub fn run_prediction(engine: &ScoringEngine, record: InputRecord) -> Result<ClassificationResult, String> {
    record.validate().map_err(|e| e.to_string())?;
    engine.evaluate(&record).map_err(|e| e.to_string())
}

// ============================================================================
// STATUS
// ============================================================================

/// Store status for display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreStatus {
    pub app_version: String,
    pub metadata: StoreMetadata,
    pub layout: LayoutInfo,
}

pub fn get_store_status(store: &ReferenceStore) -> StoreStatus {
    StoreStatus {
        app_version: crate::constants::APP_VERSION.to_string(),
        metadata: store.metadata().clone(),
        layout: layout_info(),
    }
}

/// Re-hash the model artifact against the load-time checksum
pub fn verify_model_checksum(store: &ReferenceStore) -> Result<bool, String> {
    store.verify_model_checksum().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::logic::model::LinearModel;
    use crate::logic::reference::ReferencePopulation;
    use crate::logic::scoring::AddictionCategory;

    fn engine(score: f32) -> ScoringEngine {
        ScoringEngine::new(Arc::new(ReferenceStore::new(
            Arc::new(LinearModel::constant(score)),
            ReferencePopulation::new(vec![3.0, 4.5, 6.0, 7.0, 9.0]),
        )))
    }

    fn record() -> InputRecord {
        InputRecord {
            age: 30,
            daily_usage_hours: 8.0,
            sleep_hours: 5.0,
            phone_checks_per_day: 120,
            apps_used_daily: 15,
            social_media_hours: 4.0,
            gaming_hours: 2.0,
        }
    }

    #[test]
    fn test_run_prediction() {
        let result = run_prediction(&engine(9.0), record()).unwrap();
        assert_eq!(result.category, AddictionCategory::High);
        assert_eq!(result.percentile_at_or_above, 20.0);
    }

    #[test]
    fn test_run_prediction_rejects_bad_input() {
        let bad = InputRecord { apps_used_daily: 21, ..record() };
        let err = run_prediction(&engine(9.0), bad).unwrap_err();
        assert!(err.contains("apps_used_daily"));
    }

    #[test]
    fn test_store_status() {
        let engine = engine(1.0);
        let status = get_store_status(engine.store());
        assert_eq!(status.metadata.model_kind, "linear");
        assert_eq!(status.metadata.reference_count, 5);
        assert_eq!(status.layout.feature_count, 7);
    }
}
