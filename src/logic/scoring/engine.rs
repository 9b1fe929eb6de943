//! Scoring Engine
//!
//! Input: InputRecord + ReferenceStore
//! Output: ClassificationResult
//!
//! Single-shot, no state. Concurrent calls share only the immutable store.

use std::sync::Arc;

use crate::error::{PredictorError, Result};
use crate::logic::features::{FeatureVector, InputRecord};
use crate::logic::reference::ReferenceStore;
use super::rules::{RecommendationTable, LOW_MAX, MODERATE_MAX};
use super::types::{AddictionCategory, ClassificationResult};

// ============================================================================
// CLASSIFY
// ============================================================================

/// Map a score onto its band. Half-open: 5.0 is Moderate, 8.0 is High.
pub fn classify(score: f32) -> AddictionCategory {
    if score < LOW_MAX {
        AddictionCategory::Low
    } else if score < MODERATE_MAX {
        AddictionCategory::Moderate
    } else {
        AddictionCategory::High
    }
}

// ============================================================================
// EVALUATE
// ============================================================================

/// Evaluate with the default recommendation copy
pub fn evaluate(record: &InputRecord, store: &ReferenceStore) -> Result<ClassificationResult> {
    evaluate_with_table(record, store, &RecommendationTable::default())
}

/// Evaluate with custom recommendation copy
pub fn evaluate_with_table(
    record: &InputRecord,
    store: &ReferenceStore,
    recommendations: &RecommendationTable,
) -> Result<ClassificationResult> {
    record.validate()?;

    let vector = FeatureVector::from_record(record);

    let score = store.model().predict(&vector)?;
    if !score.is_finite() {
        return Err(PredictorError::inference(format!(
            "model returned non-finite score {}",
            score
        )));
    }

    let category = classify(score);
    let percentile_at_or_above = store
        .reference_scores()
        .percentile_at_or_above(f64::from(score))?;

    log::debug!(
        "Evaluated {:?}: score {:.4}, {}, {:.2}% at or above",
        vector.as_array(),
        score,
        category,
        percentile_at_or_above
    );

    Ok(ClassificationResult {
        score,
        category,
        percentile_at_or_above,
        recommendation: recommendations.message(category).to_string(),
    })
}

// ============================================================================
// ENGINE
// ============================================================================

/// Store + recommendation copy, built once and shared
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    store: Arc<ReferenceStore>,
    recommendations: RecommendationTable,
}

impl ScoringEngine {
    pub fn new(store: Arc<ReferenceStore>) -> Self {
        Self::with_recommendations(store, RecommendationTable::default())
    }

    pub fn with_recommendations(store: Arc<ReferenceStore>, recommendations: RecommendationTable) -> Self {
        Self {
            store,
            recommendations,
        }
    }

    pub fn evaluate(&self, record: &InputRecord) -> Result<ClassificationResult> {
        evaluate_with_table(record, &self.store, &self.recommendations)
    }

    pub fn store(&self) -> &ReferenceStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(4.999), AddictionCategory::Low);
        assert_eq!(classify(5.0), AddictionCategory::Moderate);
        assert_eq!(classify(7.999), AddictionCategory::Moderate);
        assert_eq!(classify(8.0), AddictionCategory::High);
    }

    #[test]
    fn test_classify_out_of_scale() {
        assert_eq!(classify(-3.0), AddictionCategory::Low);
        assert_eq!(classify(12.5), AddictionCategory::High);
    }

    #[test]
    fn test_classify_just_below_boundaries() {
        let below_five = f32::from_bits(5.0f32.to_bits() - 1);
        let below_eight = f32::from_bits(8.0f32.to_bits() - 1);
        assert_eq!(classify(below_five), AddictionCategory::Low);
        assert_eq!(classify(below_eight), AddictionCategory::Moderate);
    }
}
