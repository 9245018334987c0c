//! Cluster assignment service

use crate::error::{CohortError, CohortResult, IntegrityViolation};
use crate::population::Population;
use cohort_model::{ClusteringModel, RecordBatch};
use cohort_types::{ClusterId, ModelFingerprint, RawSurveyRecord, SurveyRecord};
use std::path::Path;
use std::sync::Arc;

/// Assigns survey records to clusters with a loaded model
///
/// The same instance labels the population and answers queries, so both
/// always see the same model.
#[derive(Debug, Clone)]
pub struct AssignmentService {
    model: Arc<dyn ClusteringModel>,
}

impl AssignmentService {
    /// Create service around a loaded model
    #[must_use]
    pub fn new(model: Arc<dyn ClusteringModel>) -> Self {
        Self { model }
    }

    /// Fingerprint of the model in use
    #[inline]
    #[must_use]
    pub fn fingerprint(&self) -> ModelFingerprint {
        self.model.fingerprint()
    }

    /// Underlying model
    #[inline]
    #[must_use]
    pub fn model(&self) -> &Arc<dyn ClusteringModel> {
        &self.model
    }

    /// Assign one record to its cluster
    ///
    /// # Errors
    /// - `CohortError::InvalidInput` if the model rejects a value
    /// - `CohortError::ModelUnavailable` on any other model failure
    pub fn assign(&self, record: &SurveyRecord) -> CohortResult<ClusterId> {
        let labels = self
            .model
            .predict(&RecordBatch::single(*record))
            .map_err(CohortError::from_prediction)?;

        let count = labels.len();
        labels.into_iter().next().filter(|_| count == 1).ok_or_else(|| {
            IntegrityViolation::LabelCountMismatch {
                rows: 1,
                labels: count,
            }
            .into()
        })
    }

    /// Validate an unchecked record, then assign it
    ///
    /// # Errors
    /// `CohortError::InvalidInput` if a field is missing or out of vocabulary
    pub fn assign_raw(&self, raw: &RawSurveyRecord) -> CohortResult<ClusterId> {
        let record = raw.validate()?;
        self.assign(&record)
    }

    /// Label every respondent of the population file at `source`
    ///
    /// # Errors
    /// `CohortError::IntegrityError` if the model rejects a population row
    /// or returns the wrong number of labels
    pub fn label_population(
        &self,
        records: Vec<SurveyRecord>,
        source: &Path,
    ) -> CohortResult<Population> {
        let batch = RecordBatch::new(records);
        let labels = self.model.predict(&batch).map_err(|e| {
            if e.is_input_error() {
                CohortError::from(IntegrityViolation::PopulationVocabulary {
                    path: source.to_path_buf(),
                    reason: e.to_string(),
                })
            } else {
                CohortError::ModelUnavailable(e.to_string())
            }
        })?;

        if labels.len() != batch.len() {
            return Err(IntegrityViolation::LabelCountMismatch {
                rows: batch.len(),
                labels: labels.len(),
            }
            .into());
        }

        let records = batch
            .into_rows()
            .into_iter()
            .zip(labels)
            .map(|(record, label)| record.labeled(label))
            .collect();

        tracing::info!(
            model = self.model.name(),
            fingerprint = %self.fingerprint().short(),
            "population labeled"
        );
        Ok(Population::new(records, self.fingerprint()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use cohort_model::{ModelError, ModelResult};
    use cohort_types::{AgeBracket, Category, EduLevel, FavAnimals, FavPlace, Gender};

    /// Labels by gender; returns a fixed number of labels when `truncate` is set
    #[derive(Debug)]
    struct GenderModel {
        truncate: Option<usize>,
    }

    impl ClusteringModel for GenderModel {
        fn name(&self) -> &str {
            "gender"
        }

        fn fingerprint(&self) -> ModelFingerprint {
            ModelFingerprint::compute(b"gender")
        }

        fn labels(&self) -> Vec<ClusterId> {
            vec![ClusterId::from("Cluster 0"), ClusterId::from("Cluster 1")]
        }

        fn predict(&self, batch: &RecordBatch) -> ModelResult<Vec<ClusterId>> {
            let mut labels = Vec::new();
            for row in batch.rows() {
                if row.age() == AgeBracket::Unknown {
                    return Err(ModelError::UnknownCategory {
                        column: "age".to_string(),
                        value: "unknown".to_string(),
                    });
                }
                labels.push(ClusterId::new(format!("Cluster {}", row.gender().ordinal())));
            }
            if let Some(n) = self.truncate {
                labels.truncate(n);
            }
            Ok(labels)
        }
    }

    fn record(age: AgeBracket, gender: Gender) -> SurveyRecord {
        SurveyRecord::new(age, EduLevel::Higher, FavAnimals::Cats, FavPlace::InTheForest, gender)
    }

    fn service(truncate: Option<usize>) -> AssignmentService {
        AssignmentService::new(Arc::new(GenderModel { truncate }))
    }

    #[test]
    fn assigns_single_record() {
        let id = service(None)
            .assign(&record(AgeBracket::From18To24, Gender::Female))
            .unwrap();
        assert_eq!(id.as_str(), "Cluster 1");
    }

    #[test]
    fn unknown_value_is_invalid_input() {
        let err = service(None)
            .assign(&record(AgeBracket::Unknown, Gender::Male))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn raw_record_with_missing_field_is_invalid_input() {
        let mut raw = RawSurveyRecord::from(record(AgeBracket::From18To24, Gender::Male));
        raw.gender = None;
        let err = service(None).assign_raw(&raw).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn labels_population_in_row_order() {
        let rows = vec![
            record(AgeBracket::From18To24, Gender::Male),
            record(AgeBracket::From35To44, Gender::Female),
        ];
        let population = service(None)
            .label_population(rows, Path::new("survey.csv"))
            .unwrap();

        let labels: Vec<_> = population.iter().map(|r| r.cluster_id().as_str()).collect();
        assert_eq!(labels, ["Cluster 0", "Cluster 1"]);
        assert_eq!(population.labeled_by(), ModelFingerprint::compute(b"gender"));
    }

    #[test]
    fn population_outside_vocabulary_is_integrity_error() {
        let rows = vec![record(AgeBracket::Unknown, Gender::Male)];
        let err = service(None)
            .label_population(rows, Path::new("survey.csv"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IntegrityError);
        assert!(err.to_string().contains("survey.csv"));
    }

    #[test]
    fn label_count_mismatch_is_integrity_error() {
        let rows = vec![
            record(AgeBracket::From18To24, Gender::Male),
            record(AgeBracket::From18To24, Gender::Male),
        ];
        let err = service(Some(1))
            .label_population(rows, Path::new("survey.csv"))
            .unwrap_err();
        assert!(matches!(
            err,
            CohortError::IntegrityError(IntegrityViolation::LabelCountMismatch { rows: 2, labels: 1 })
        ));

        let err = service(Some(0))
            .assign(&record(AgeBracket::From18To24, Gender::Male))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IntegrityError);
    }
}
