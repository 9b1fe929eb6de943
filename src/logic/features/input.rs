//! Input Record - the seven measurements collected from the user
//!
//! Bounds are enforced at the presentation boundary. The engine re-checks
//! them and fails instead of clamping.

use serde::{Deserialize, Serialize};

use crate::error::{PredictorError, Result};
use super::layout::FEATURE_COUNT;

// ============================================================================
// FIELD BOUNDS
// ============================================================================

/// Closed range for one input field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldBounds {
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
}

impl FieldBounds {
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }
}

/// Bounds in layout order
pub const FIELD_BOUNDS: [FieldBounds; FEATURE_COUNT] = [
    FieldBounds { name: "age", min: 10.0, max: 100.0 },
    FieldBounds { name: "daily_usage_hours", min: 0.0, max: 12.0 },
    FieldBounds { name: "sleep_hours", min: 0.0, max: 24.0 },
    FieldBounds { name: "phone_checks_per_day", min: 0.0, max: 150.0 },
    FieldBounds { name: "apps_used_daily", min: 0.0, max: 20.0 },
    FieldBounds { name: "social_media_hours", min: 0.0, max: 24.0 },
    FieldBounds { name: "gaming_hours", min: 0.0, max: 24.0 },
];

// ============================================================================
// INPUT RECORD
// ============================================================================

/// Personal-habit measurements for one evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputRecord {
    /// Age in years [10, 100]
    pub age: u32,
    /// Phone usage, hours/day [0, 12]
    #[serde(alias = "dailyUsageHours")]
    pub daily_usage_hours: f32,
    /// Sleep, hours/day [0, 24]
    #[serde(alias = "sleepHours")]
    pub sleep_hours: f32,
    /// Phone checks per day [0, 150]
    #[serde(alias = "phoneChecksPerDay")]
    pub phone_checks_per_day: u32,
    /// Distinct apps used per day [0, 20]
    #[serde(alias = "appsUsedDaily")]
    pub apps_used_daily: u32,
    /// Social media, hours/day [0, 24]
    #[serde(alias = "socialMediaHours")]
    pub social_media_hours: f32,
    /// Gaming, hours/day [0, 24]
    #[serde(alias = "gamingHours")]
    pub gaming_hours: f32,
}

impl InputRecord {
    /// Field values in layout order, widened for range checks
    pub fn ordered_values(&self) -> [f64; FEATURE_COUNT] {
        [
            self.age as f64,
            self.daily_usage_hours as f64,
            self.sleep_hours as f64,
            self.phone_checks_per_day as f64,
            self.apps_used_daily as f64,
            self.social_media_hours as f64,
            self.gaming_hours as f64,
        ]
    }

    /// Reject the first field (in layout order) outside its bounds
    pub fn validate(&self) -> Result<()> {
        for (bounds, value) in FIELD_BOUNDS.iter().zip(self.ordered_values()) {
            if !bounds.contains(value) {
                return Err(PredictorError::InputOutOfRange {
                    field: bounds.name,
                    value,
                    min: bounds.min,
                    max: bounds.max,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::features::layout::FEATURE_LAYOUT;

    fn sample() -> InputRecord {
        InputRecord {
            age: 25,
            daily_usage_hours: 5.0,
            sleep_hours: 6.5,
            phone_checks_per_day: 80,
            apps_used_daily: 10,
            social_media_hours: 3.0,
            gaming_hours: 1.0,
        }
    }

    #[test]
    fn test_bounds_follow_layout() {
        for (bounds, name) in FIELD_BOUNDS.iter().zip(FEATURE_LAYOUT) {
            assert_eq!(bounds.name, *name);
        }
    }

    #[test]
    fn test_valid_record() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_inclusive_bounds() {
        let record = InputRecord {
            age: 100,
            daily_usage_hours: 12.0,
            sleep_hours: 0.0,
            phone_checks_per_day: 150,
            apps_used_daily: 0,
            social_media_hours: 24.0,
            gaming_hours: 24.0,
        };
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_age_below_min() {
        let record = InputRecord { age: 9, ..sample() };
        match record.validate() {
            Err(PredictorError::InputOutOfRange { field, value, .. }) => {
                assert_eq!(field, "age");
                assert_eq!(value, 9.0);
            }
            other => panic!("expected InputOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_usage_above_max() {
        let record = InputRecord { daily_usage_hours: 12.5, ..sample() };
        assert!(matches!(
            record.validate(),
            Err(PredictorError::InputOutOfRange { field: "daily_usage_hours", .. })
        ));
    }

    #[test]
    fn test_nan_rejected() {
        let record = InputRecord { sleep_hours: f32::NAN, ..sample() };
        assert!(matches!(
            record.validate(),
            Err(PredictorError::InputOutOfRange { field: "sleep_hours", .. })
        ));
    }

    #[test]
    fn test_camel_case_alias() {
        let json = r#"{
            "age": 25, "dailyUsageHours": 5.0, "sleepHours": 6.5,
            "phoneChecksPerDay": 80, "appsUsedDaily": 10,
            "socialMediaHours": 3.0, "gamingHours": 1.0
        }"#;
        let record: InputRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record, sample());
    }
}
