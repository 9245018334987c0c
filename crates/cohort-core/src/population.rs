//! Labeled survey population

use cohort_types::{ClusterId, LabeledRecord, ModelFingerprint};
use std::collections::BTreeMap;

/// Every survey respondent with the cluster the model assigned them
///
/// Built once per model; `labeled_by` names the model whose labels these are.
#[derive(Debug, Clone)]
pub struct Population {
    records: Vec<LabeledRecord>,
    labeled_by: ModelFingerprint,
}

impl Population {
    /// Create population from labeled records
    #[must_use]
    pub fn new(records: Vec<LabeledRecord>, labeled_by: ModelFingerprint) -> Self {
        Self {
            records,
            labeled_by,
        }
    }

    /// Model that produced the labels
    #[inline]
    #[must_use]
    pub fn labeled_by(&self) -> ModelFingerprint {
        self.labeled_by
    }

    /// Number of respondents
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate all respondents
    pub fn iter(&self) -> impl Iterator<Item = &LabeledRecord> {
        self.records.iter()
    }

    /// Respondents in cluster `cluster_id`
    pub fn peers<'a>(&'a self, cluster_id: &'a ClusterId) -> impl Iterator<Item = &'a LabeledRecord> {
        self.records.iter().filter(move |r| r.is_in(cluster_id))
    }

    /// Respondent count per cluster
    #[must_use]
    pub fn cluster_sizes(&self) -> BTreeMap<ClusterId, usize> {
        let mut sizes = BTreeMap::new();
        for record in &self.records {
            *sizes.entry(record.cluster_id().clone()).or_insert(0) += 1;
        }
        sizes
    }
}
