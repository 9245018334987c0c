//! Peer-group statistics
//!
//! Counts a cluster's members per category of every survey column. Counts
//! are always taken over the full population as labeled by the current
//! model; no sampling, no weighting.

use crate::population::Population;
use cohort_types::{
    AgeBracket, Category, ClusterId, EduLevel, FavAnimals, FavPlace, Gender, LabeledRecord,
};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

/// Member count per category of one column
///
/// Only categories with at least one member are kept, in the canonical
/// order of the category type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution<C: Category> {
    counts: Vec<(C, usize)>,
}

impl<C: Category> Distribution<C> {
    /// Count occurrences of each category
    pub fn from_values(values: impl IntoIterator<Item = C>) -> Self {
        let mut tally = BTreeMap::new();
        for value in values {
            *tally.entry(value).or_insert(0_usize) += 1;
        }
        Self {
            counts: tally.into_iter().collect(),
        }
    }

    /// Members in `category` (zero if absent)
    #[must_use]
    pub fn count(&self, category: C) -> usize {
        self.counts
            .iter()
            .find(|(c, _)| *c == category)
            .map_or(0, |(_, n)| *n)
    }

    /// Sum of all counts
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, n)| n).sum()
    }

    /// Non-zero categories and counts, in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (C, usize)> + '_ {
        self.counts.iter().copied()
    }

    /// Number of non-zero categories
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if no category has members
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl<C: Category> Default for Distribution<C> {
    fn default() -> Self {
        Self { counts: Vec::new() }
    }
}

impl<C: Category> Serialize for Distribution<C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (category, count) in &self.counts {
            map.serialize_entry(category.as_str(), count)?;
        }
        map.end()
    }
}

/// Statistics of one peer group
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ClusterStatistics {
    /// Cluster the statistics describe
    pub cluster_id: ClusterId,
    /// Number of members
    pub total: usize,
    /// Members per gender
    pub gender: Distribution<Gender>,
    /// Members per age bracket
    pub age: Distribution<AgeBracket>,
    /// Members per education level
    pub edu_level: Distribution<EduLevel>,
    /// Members per favorite animals
    pub fav_animals: Distribution<FavAnimals>,
    /// Members per favorite place
    pub fav_place: Distribution<FavPlace>,
}

impl ClusterStatistics {
    /// Number of men
    #[inline]
    #[must_use]
    pub fn men(&self) -> usize {
        self.gender.count(Gender::Male)
    }

    /// Number of women
    #[inline]
    #[must_use]
    pub fn women(&self) -> usize {
        self.gender.count(Gender::Female)
    }
}

/// Computes per-cluster statistics over a labeled population
#[derive(Debug, Clone, Copy, Default)]
pub struct AggregationEngine;

impl AggregationEngine {
    /// Create new engine
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Statistics of the members of `cluster_id`
    ///
    /// A cluster with no members yields zero totals and empty distributions.
    #[must_use]
    pub fn summarize(&self, population: &Population, cluster_id: &ClusterId) -> ClusterStatistics {
        let peers: Vec<&LabeledRecord> = population.peers(cluster_id).collect();
        let statistics = ClusterStatistics {
            cluster_id: cluster_id.clone(),
            total: peers.len(),
            gender: Distribution::from_values(peers.iter().map(|r| r.record().gender())),
            age: Distribution::from_values(peers.iter().map(|r| r.record().age())),
            edu_level: Distribution::from_values(peers.iter().map(|r| r.record().edu_level())),
            fav_animals: Distribution::from_values(peers.iter().map(|r| r.record().fav_animals())),
            fav_place: Distribution::from_values(peers.iter().map(|r| r.record().fav_place())),
        };

        tracing::debug!(cluster = %cluster_id, members = statistics.total, "cluster summarized");
        statistics
    }
}
