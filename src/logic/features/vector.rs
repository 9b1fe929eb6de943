//! Feature Vector - ordered model input
//!
//! Uses the centralized layout from `layout.rs`. Values are copied raw
//! from the `InputRecord`: no normalization, scaling or imputation.

use super::input::InputRecord;
use super::layout::FEATURE_COUNT;

/// Feature values in order defined by FEATURE_LAYOUT
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    values: [f32; FEATURE_COUNT],
}

impl FeatureVector {
    pub fn from_values(values: [f32; FEATURE_COUNT]) -> Self {
        Self { values }
    }

    /// Assemble from an input record in layout order
    pub fn from_record(record: &InputRecord) -> Self {
        Self::from_values([
            record.age as f32,
            record.daily_usage_hours,
            record.sleep_hours,
            record.phone_checks_per_day as f32,
            record.apps_used_daily as f32,
            record.social_media_hours,
            record.gaming_hours,
        ])
    }

    pub fn as_array(&self) -> &[f32; FEATURE_COUNT] {
        &self.values
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_record_preserves_order() {
        let record = InputRecord {
            age: 25,
            daily_usage_hours: 5.0,
            sleep_hours: 6.5,
            phone_checks_per_day: 80,
            apps_used_daily: 10,
            social_media_hours: 3.0,
            gaming_hours: 1.0,
        };

        let vector = FeatureVector::from_record(&record);
        assert_eq!(vector.as_array(), &[25.0, 5.0, 6.5, 80.0, 10.0, 3.0, 1.0]);
    }
}
