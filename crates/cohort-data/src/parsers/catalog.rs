//! Cluster metadata parser

use crate::error::{DataError, DataResult};
use crate::parsers::SourceParser;
use cohort_types::{ClusterId, ClusterProfile};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Read-only mapping from cluster id to its display profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClusterCatalog {
    profiles: BTreeMap<ClusterId, ClusterProfile>,
}

impl ClusterCatalog {
    /// Create catalog from profiles
    #[must_use]
    pub fn new(profiles: impl IntoIterator<Item = (ClusterId, ClusterProfile)>) -> Self {
        Self {
            profiles: profiles.into_iter().collect(),
        }
    }

    /// Profile for cluster
    #[inline]
    #[must_use]
    pub fn get(&self, cluster_id: &ClusterId) -> Option<&ClusterProfile> {
        self.profiles.get(cluster_id)
    }

    /// Whether cluster has a profile
    #[inline]
    #[must_use]
    pub fn contains(&self, cluster_id: &ClusterId) -> bool {
        self.profiles.contains_key(cluster_id)
    }

    /// Number of profiles
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether the catalog is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Profiles ordered by cluster id
    pub fn iter(&self) -> impl Iterator<Item = (&ClusterId, &ClusterProfile)> {
        self.profiles.iter()
    }

    /// Ids from `labels` that have no profile
    #[must_use]
    pub fn missing<'a>(&self, labels: &'a [ClusterId]) -> Vec<&'a ClusterId> {
        labels.iter().filter(|id| !self.contains(id)).collect()
    }
}

/// Parses cluster metadata JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogParser;

impl SourceParser for CatalogParser {
    type Output = ClusterCatalog;

    fn parse(&self, content: &[u8], path: &Path) -> DataResult<Self::Output> {
        serde_json::from_slice(content).map_err(|e| DataError::MalformedMetadata {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    fn describe(&self) -> &'static str {
        "cluster metadata"
    }
}
