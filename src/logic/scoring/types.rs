//! Scoring Types
//!
//! Data structures only. Classification logic lives in `engine.rs`.

use serde::{Deserialize, Serialize};

// ============================================================================
// ADDICTION CATEGORY
// ============================================================================

/// Addiction level bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddictionCategory {
    /// score < 5
    Low,
    /// 5 ≤ score < 8
    Moderate,
    /// score ≥ 8
    High,
}

impl AddictionCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AddictionCategory::Low => "low",
            AddictionCategory::Moderate => "moderate",
            AddictionCategory::High => "high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AddictionCategory::Low => "Low Addiction",
            AddictionCategory::Moderate => "Moderate Addiction",
            AddictionCategory::High => "High Addiction",
        }
    }

    /// Indicator colour for front-ends
    pub fn color(&self) -> &'static str {
        match self {
            AddictionCategory::Low => "green",
            AddictionCategory::Moderate => "orange",
            AddictionCategory::High => "red",
        }
    }

    /// Nominal band on the 0-10 scale, for display only
    pub fn score_range(&self) -> (f32, f32) {
        match self {
            AddictionCategory::Low => (0.0, 5.0),
            AddictionCategory::Moderate => (5.0, 8.0),
            AddictionCategory::High => (8.0, 10.0),
        }
    }
}

impl std::fmt::Display for AddictionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// CLASSIFICATION RESULT
// ============================================================================

/// Outcome of one evaluation. Recreated on every call, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Raw model output, not clamped
    pub score: f32,
    pub category: AddictionCategory,
    /// Share of the reference population scoring ≥ `score`, in [0, 100]
    pub percentile_at_or_above: f64,
    pub recommendation: String,
}

impl ClassificationResult {
    /// The two bars of the "you or higher / lower than you" chart
    pub fn comparison(&self) -> Comparison {
        Comparison {
            at_or_above_percent: self.percentile_at_or_above,
            below_percent: 100.0 - self.percentile_at_or_above,
        }
    }
}

/// Split of the reference population around the user's score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub at_or_above_percent: f64,
    pub below_percent: f64,
}
