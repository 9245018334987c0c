//! Nearest-centroid cluster assignment
//!
//! Inference half of K-Means: training happened elsewhere, the artifact
//! carries the fitted centroids.

use crate::artifact::ModelArtifact;
use crate::batch::RecordBatch;
use crate::encoder::OneHotEncoder;
use crate::error::{ModelError, ModelResult};
use crate::ClusteringModel;
use cohort_types::{ClusterId, ModelFingerprint};

/// Clustering model backed by fitted centroids over one-hot features
#[derive(Debug, Clone)]
pub struct NearestCentroidModel {
    name: String,
    label_prefix: String,
    encoder: OneHotEncoder,
    centroids: Vec<Vec<f64>>,
    fingerprint: ModelFingerprint,
}

impl NearestCentroidModel {
    /// Build model from a decoded artifact
    ///
    /// # Errors
    /// - `ModelError::NoCentroids` if the artifact has no centroids
    /// - `ModelError::DimensionMismatch` if a centroid width differs from the encoder
    /// - `ModelError::InvalidFeature` for a bad feature column
    pub fn from_artifact(
        artifact: ModelArtifact,
        fingerprint: ModelFingerprint,
    ) -> ModelResult<Self> {
        let encoder = OneHotEncoder::new(artifact.features, artifact.handle_unknown)?;

        if artifact.centroids.is_empty() {
            return Err(ModelError::NoCentroids);
        }
        for (index, centroid) in artifact.centroids.iter().enumerate() {
            if centroid.len() != encoder.width() {
                return Err(ModelError::DimensionMismatch {
                    index,
                    expected: encoder.width(),
                    actual: centroid.len(),
                });
            }
        }

        Ok(Self {
            name: artifact.name,
            label_prefix: artifact.label_prefix,
            encoder,
            centroids: artifact.centroids,
            fingerprint,
        })
    }

    /// Decode and build model from artifact bytes, fingerprinting the bytes
    ///
    /// # Errors
    /// Any error of [`ModelArtifact::from_slice`] or [`Self::from_artifact`]
    pub fn from_slice(bytes: &[u8]) -> ModelResult<Self> {
        let artifact = ModelArtifact::from_slice(bytes)?;
        Self::from_artifact(artifact, ModelFingerprint::compute(bytes))
    }

    /// Number of clusters
    #[inline]
    #[must_use]
    pub fn n_clusters(&self) -> usize {
        self.centroids.len()
    }

    fn label(&self, index: usize) -> ClusterId {
        ClusterId::new(format!("{} {}", self.label_prefix, index))
    }

    fn nearest(&self, point: &[f64]) -> usize {
        let mut min_dist = f64::INFINITY;
        let mut min_cluster = 0;

        for (k, centroid) in self.centroids.iter().enumerate() {
            let dist: f64 = point
                .iter()
                .zip(centroid)
                .map(|(a, b)| (a - b) * (a - b))
                .sum();

            // strict: ties keep the lower index
            if dist < min_dist {
                min_dist = dist;
                min_cluster = k;
            }
        }

        min_cluster
    }
}

impl ClusteringModel for NearestCentroidModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn fingerprint(&self) -> ModelFingerprint {
        self.fingerprint
    }

    fn labels(&self) -> Vec<ClusterId> {
        (0..self.centroids.len()).map(|k| self.label(k)).collect()
    }

    fn predict(&self, batch: &RecordBatch) -> ModelResult<Vec<ClusterId>> {
        let labels = batch
            .rows()
            .iter()
            .map(|row| {
                let point = self.encoder.encode(row)?;
                Ok(self.label(self.nearest(&point)))
            })
            .collect::<ModelResult<Vec<_>>>()?;

        tracing::trace!(model = %self.name, rows = labels.len(), "predicted batch");
        Ok(labels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::{FeatureSpec, UnknownPolicy};
    use cohort_types::{
        AgeBracket, Category, EduLevel, FavAnimals, FavPlace, Gender, SurveyRecord,
    };
    use proptest::prelude::*;

    fn artifact() -> ModelArtifact {
        ModelArtifact {
            name: "places".to_string(),
            label_prefix: "Cluster".to_string(),
            handle_unknown: UnknownPolicy::Error,
            features: vec![
                FeatureSpec::new("fav_place", ["Nad wodą", "W lesie", "W górach", "Inne"]),
                FeatureSpec::new("gender", ["Mężczyzna", "Kobieta"]),
            ],
            centroids: vec![
                vec![1.0, 0.0, 0.0, 0.0, 0.5, 0.5],
                vec![0.0, 1.0, 0.0, 0.0, 0.5, 0.5],
                vec![0.0, 0.0, 1.0, 0.0, 0.9, 0.1],
                vec![0.0, 0.0, 1.0, 0.0, 0.1, 0.9],
            ],
        }
    }

    fn model() -> NearestCentroidModel {
        NearestCentroidModel::from_artifact(artifact(), ModelFingerprint::compute(b"places"))
            .unwrap()
    }

    fn record(place: FavPlace, gender: Gender) -> SurveyRecord {
        SurveyRecord::new(
            AgeBracket::From25To34,
            EduLevel::Higher,
            FavAnimals::Dogs,
            place,
            gender,
        )
    }

    #[test]
    fn assigns_nearest_centroid() {
        let model = model();
        let batch = RecordBatch::new(vec![
            record(FavPlace::ByTheWater, Gender::Male),
            record(FavPlace::InTheForest, Gender::Female),
            record(FavPlace::InTheMountains, Gender::Male),
            record(FavPlace::InTheMountains, Gender::Female),
        ]);

        let labels = model.predict(&batch).unwrap();
        let labels: Vec<&str> = labels.iter().map(ClusterId::as_str).collect();
        assert_eq!(labels, vec!["Cluster 0", "Cluster 1", "Cluster 2", "Cluster 3"]);
    }

    #[test]
    fn ties_resolve_to_lowest_index() {
        let mut artifact = artifact();
        artifact.centroids[0] = artifact.centroids[1].clone();
        let model =
            NearestCentroidModel::from_artifact(artifact, ModelFingerprint::default()).unwrap();

        let labels = model
            .predict(&RecordBatch::single(record(FavPlace::InTheForest, Gender::Male)))
            .unwrap();
        assert_eq!(labels, vec![ClusterId::from("Cluster 0")]);
    }

    #[test]
    fn labels_cover_every_centroid() {
        let model = model();
        assert_eq!(model.n_clusters(), 4);
        assert_eq!(
            model.labels(),
            (0..4).map(|k| ClusterId::new(format!("Cluster {k}"))).collect::<Vec<_>>()
        );
    }

    #[test]
    fn custom_label_prefix() {
        let mut artifact = artifact();
        artifact.label_prefix = "Grupa".to_string();
        let model =
            NearestCentroidModel::from_artifact(artifact, ModelFingerprint::default()).unwrap();
        assert_eq!(model.labels()[0], ClusterId::from("Grupa 0"));
    }

    #[test]
    fn rejects_empty_centroids() {
        let mut artifact = artifact();
        artifact.centroids.clear();
        assert_eq!(
            NearestCentroidModel::from_artifact(artifact, ModelFingerprint::default()).unwrap_err(),
            ModelError::NoCentroids
        );
    }

    #[test]
    fn rejects_ragged_centroid() {
        let mut artifact = artifact();
        artifact.centroids[2].pop();
        assert_eq!(
            NearestCentroidModel::from_artifact(artifact, ModelFingerprint::default()).unwrap_err(),
            ModelError::DimensionMismatch {
                index: 2,
                expected: 6,
                actual: 5
            }
        );
    }

    #[test]
    fn from_slice_fingerprints_bytes() {
        let bytes = artifact().to_json_vec().unwrap();
        let model = NearestCentroidModel::from_slice(&bytes).unwrap();
        assert_eq!(model.fingerprint(), ModelFingerprint::compute(&bytes));
        assert_eq!(model.name(), "places");
    }

    #[test]
    fn empty_batch_yields_no_labels() {
        assert!(model().predict(&RecordBatch::default()).unwrap().is_empty());
    }

    fn any_place() -> impl Strategy<Value = FavPlace> {
        prop::sample::select(FavPlace::ALL.to_vec())
    }

    fn any_gender() -> impl Strategy<Value = Gender> {
        prop::sample::select(Gender::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn batch_and_single_predictions_agree(
            rows in proptest::collection::vec((any_place(), any_gender()), 1..40)
        ) {
            let model = model();
            let records: Vec<_> = rows.iter().map(|(p, g)| record(*p, *g)).collect();
            let batch_labels = model.predict(&RecordBatch::new(records.clone())).unwrap();

            for (record, label) in records.into_iter().zip(batch_labels) {
                let single = model.predict(&RecordBatch::single(record)).unwrap();
                prop_assert_eq!(&single[0], &label);
            }
        }
    }
}
