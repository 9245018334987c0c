//! Row batches fed to a model

use cohort_types::SurveyRecord;

/// Ordered rows handed to [`crate::ClusteringModel::predict`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordBatch {
    rows: Vec<SurveyRecord>,
}

impl RecordBatch {
    /// Create batch from rows
    #[inline]
    #[must_use]
    pub fn new(rows: Vec<SurveyRecord>) -> Self {
        Self { rows }
    }

    /// Single-row batch for one query
    #[inline]
    #[must_use]
    pub fn single(record: SurveyRecord) -> Self {
        Self { rows: vec![record] }
    }

    /// Rows in order
    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[SurveyRecord] {
        &self.rows
    }

    /// Number of rows
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the batch has no rows
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Take the rows back
    #[inline]
    #[must_use]
    pub fn into_rows(self) -> Vec<SurveyRecord> {
        self.rows
    }
}

impl From<Vec<SurveyRecord>> for RecordBatch {
    fn from(rows: Vec<SurveyRecord>) -> Self {
        Self::new(rows)
    }
}

impl FromIterator<SurveyRecord> for RecordBatch {
    fn from_iter<I: IntoIterator<Item = SurveyRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
