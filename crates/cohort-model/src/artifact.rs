//! On-disk model artifact

use crate::error::{ModelError, ModelResult};
use serde::{Deserialize, Serialize};

/// What to do with a value the model never saw in training
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownPolicy {
    /// Reject the row
    #[default]
    Error,
    /// Encode the column as all zeros
    Ignore,
}

/// One encoded column and its training vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSpec {
    /// Survey column name
    pub column: String,
    /// Categories in one-hot order
    pub categories: Vec<String>,
}

impl FeatureSpec {
    /// Create a feature column
    #[must_use]
    pub fn new<I, S>(column: impl Into<String>, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            column: column.into(),
            categories: categories.into_iter().map(Into::into).collect(),
        }
    }
}

/// Serialized form of a trained model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Model name
    pub name: String,
    /// Prefix of emitted labels (`"{prefix} {index}"`)
    #[serde(default = "default_label_prefix")]
    pub label_prefix: String,
    /// Unknown-category handling
    #[serde(default)]
    pub handle_unknown: UnknownPolicy,
    /// Encoded columns, in order
    pub features: Vec<FeatureSpec>,
    /// Cluster centroids in encoded space
    pub centroids: Vec<Vec<f64>>,
}

fn default_label_prefix() -> String {
    crate::LABEL_COLUMN.to_string()
}

impl ModelArtifact {
    /// Decode artifact from JSON bytes
    ///
    /// # Errors
    /// `ModelError::Malformed` if the bytes are not a valid artifact
    pub fn from_slice(bytes: &[u8]) -> ModelResult<Self> {
        serde_json::from_slice(bytes).map_err(|e| ModelError::malformed(e.to_string()))
    }

    /// Encode artifact as pretty JSON
    ///
    /// # Errors
    /// `ModelError::Malformed` if a centroid holds a non-finite value
    pub fn to_json_vec(&self) -> ModelResult<Vec<u8>> {
        serde_json::to_vec_pretty(self).map_err(|e| ModelError::malformed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_omitted() {
        let json = r#"{
            "name": "m",
            "features": [{"column": "gender", "categories": ["Kobieta", "Mężczyzna"]}],
            "centroids": [[1.0, 0.0]]
        }"#;
        let artifact = ModelArtifact::from_slice(json.as_bytes()).unwrap();

        assert_eq!(artifact.label_prefix, "Cluster");
        assert_eq!(artifact.handle_unknown, UnknownPolicy::Error);
        assert_eq!(artifact.features[0].categories.len(), 2);
    }

    #[test]
    fn policy_parses_lowercase() {
        let json = br#"{
            "name": "m",
            "handle_unknown": "ignore",
            "features": [],
            "centroids": []
        }"#;
        let artifact = ModelArtifact::from_slice(json).unwrap();
        assert_eq!(artifact.handle_unknown, UnknownPolicy::Ignore);
    }

    #[test]
    fn missing_centroids_is_malformed() {
        let json = br#"{"name": "m", "features": []}"#;
        assert!(matches!(
            ModelArtifact::from_slice(json),
            Err(ModelError::Malformed(_))
        ));
    }

    #[test]
    fn json_round_trip() {
        let artifact = ModelArtifact {
            name: "m".to_string(),
            label_prefix: "Cluster".to_string(),
            handle_unknown: UnknownPolicy::Ignore,
            features: vec![FeatureSpec::new("gender", ["Kobieta", "Mężczyzna"])],
            centroids: vec![vec![0.25, 0.75]],
        };
        let bytes = artifact.to_json_vec().unwrap();
        assert_eq!(ModelArtifact::from_slice(&bytes).unwrap(), artifact);
    }
}
