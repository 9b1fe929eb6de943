//! Reference Population - historical scores used for percentile comparison

use serde::{Deserialize, Serialize};

use crate::error::{PredictorError, Result};

/// Previously observed addiction-level scores.
///
/// Stored sorted ascending (order is irrelevant to callers) so counts are a
/// binary search. Held as f64 so dataset values are compared at the
/// precision they were written with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferencePopulation {
    scores: Vec<f64>,
}

impl ReferencePopulation {
    pub fn new(mut scores: Vec<f64>) -> Self {
        scores.sort_by(f64::total_cmp);
        Self { scores }
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Scores in ascending order
    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// Number of reference scores `>= score`
    pub fn count_at_or_above(&self, score: f64) -> usize {
        let below = self.scores.partition_point(|&s| s < score);
        self.scores.len() - below
    }

    /// `100 × count(ref ≥ score) / len(ref)`
    pub fn percentile_at_or_above(&self, score: f64) -> Result<f64> {
        if self.is_empty() {
            return Err(PredictorError::EmptyReferencePopulation);
        }
        let count = self.count_at_or_above(score);
        Ok(100.0 * count as f64 / self.scores.len() as f64)
    }
}
