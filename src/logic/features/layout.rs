//! Feature Layout - Centralized Feature Definition
//!
//! **CRITICAL: This file controls the model input schema**
//!
//! The model contract is positional, not named. The order below must match
//! the column order the model was trained on.

use serde::{Deserialize, Serialize};

// ============================================================================
// FEATURE LAYOUT (Authoritative source)
// ============================================================================

/// Feature names in exact order they are handed to the model
pub const FEATURE_LAYOUT: &[&str] = &[
    "age",                  // 0: years
    "daily_usage_hours",    // 1: hours/day on the phone
    "sleep_hours",          // 2: hours/day of sleep
    "phone_checks_per_day", // 3: unlocks / checks per day
    "apps_used_daily",      // 4: distinct apps per day
    "social_media_hours",   // 5: hours/day on social media
    "gaming_hours",         // 6: hours/day on mobile games
];

/// Total number of features
/// IMPORTANT: Must match FEATURE_LAYOUT.len()!
pub const FEATURE_COUNT: usize = 7;

/// Layout info for status reporting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutInfo {
    pub feature_count: usize,
    pub features: Vec<String>,
}

pub fn layout_info() -> LayoutInfo {
    LayoutInfo {
        feature_count: FEATURE_COUNT,
        features: FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_count_matches() {
        assert_eq!(FEATURE_LAYOUT.len(), FEATURE_COUNT);
    }

    #[test]
    fn test_layout_info_order() {
        let info = layout_info();
        assert_eq!(info.feature_count, 7);
        assert_eq!(info.features.first().map(String::as_str), Some("age"));
        assert_eq!(info.features.last().map(String::as_str), Some("gaming_hours"));
    }
}
