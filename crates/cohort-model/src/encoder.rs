//! One-hot encoding of survey records

use crate::artifact::{FeatureSpec, UnknownPolicy};
use crate::error::{ModelError, ModelResult};
use cohort_types::{SurveyRecord, COLUMNS};
use std::collections::HashSet;

/// Encodes categorical records into dense one-hot vectors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneHotEncoder {
    features: Vec<FeatureSpec>,
    policy: UnknownPolicy,
    width: usize,
}

impl OneHotEncoder {
    /// Create encoder from feature specs
    ///
    /// # Errors
    /// `ModelError::InvalidFeature` if a column is not a survey column or is
    /// listed twice
    pub fn new(features: Vec<FeatureSpec>, policy: UnknownPolicy) -> ModelResult<Self> {
        let mut seen = HashSet::new();
        for feature in &features {
            if !COLUMNS.contains(&feature.column.as_str()) || !seen.insert(feature.column.as_str())
            {
                return Err(ModelError::InvalidFeature(feature.column.clone()));
            }
        }
        let width = features.iter().map(|f| f.categories.len()).sum();

        Ok(Self {
            features,
            policy,
            width,
        })
    }

    /// Encoded vector length
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Encode one record
    ///
    /// # Errors
    /// `ModelError::UnknownCategory` for an out-of-vocabulary value when the
    /// policy is [`UnknownPolicy::Error`]
    pub fn encode(&self, record: &SurveyRecord) -> ModelResult<Vec<f64>> {
        let mut out = vec![0.0; self.width];
        let mut offset = 0;

        for feature in &self.features {
            // columns were checked against COLUMNS in new()
            let value = record.get(&feature.column).unwrap_or_default();
            match feature.categories.iter().position(|c| c == value) {
                Some(slot) => out[offset + slot] = 1.0,
                None if self.policy == UnknownPolicy::Ignore => {}
                None => {
                    return Err(ModelError::UnknownCategory {
                        column: feature.column.clone(),
                        value: value.to_string(),
                    })
                }
            }
            offset += feature.categories.len();
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cohort_types::{AgeBracket, EduLevel, FavAnimals, FavPlace, Gender};

    fn record() -> SurveyRecord {
        SurveyRecord::new(
            AgeBracket::Unknown,
            EduLevel::Higher,
            FavAnimals::Dogs,
            FavPlace::InTheMountains,
            Gender::Female,
        )
    }

    fn features() -> Vec<FeatureSpec> {
        vec![
            FeatureSpec::new("age", ["18-24", "25-34"]),
            FeatureSpec::new("gender", ["Mężczyzna", "Kobieta"]),
        ]
    }

    #[test]
    fn encoder_width() {
        let encoder = OneHotEncoder::new(features(), UnknownPolicy::Error).unwrap();
        assert_eq!(encoder.width(), 4);
    }

    #[test]
    fn rejects_unknown_column() {
        let result = OneHotEncoder::new(
            vec![FeatureSpec::new("income", ["low"])],
            UnknownPolicy::Error,
        );
        assert_eq!(result, Err(ModelError::InvalidFeature("income".to_string())));
    }

    #[test]
    fn rejects_duplicate_column() {
        let result = OneHotEncoder::new(
            vec![
                FeatureSpec::new("gender", ["Kobieta"]),
                FeatureSpec::new("gender", ["Mężczyzna"]),
            ],
            UnknownPolicy::Error,
        );
        assert!(matches!(result, Err(ModelError::InvalidFeature(_))));
    }

    #[test]
    fn unseen_value_errors_by_default() {
        let encoder = OneHotEncoder::new(features(), UnknownPolicy::Error).unwrap();
        let err = encoder.encode(&record()).unwrap_err();
        assert_eq!(
            err,
            ModelError::UnknownCategory {
                column: "age".to_string(),
                value: "unknown".to_string(),
            }
        );
    }

    #[test]
    fn unseen_value_ignored_as_zeros() {
        let encoder = OneHotEncoder::new(features(), UnknownPolicy::Ignore).unwrap();
        assert_eq!(encoder.encode(&record()).unwrap(), vec![0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn encodes_in_feature_order() {
        let encoder = OneHotEncoder::new(
            vec![
                FeatureSpec::new("fav_place", ["Nad wodą", "W górach"]),
                FeatureSpec::new("edu_level", ["Wyższe", "Średnie"]),
            ],
            UnknownPolicy::Error,
        )
        .unwrap();
        assert_eq!(encoder.encode(&record()).unwrap(), vec![0.0, 1.0, 1.0, 0.0]);
    }
}
