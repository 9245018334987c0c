//! Cohort Model
//!
//! The pre-trained clustering model, treated as an opaque artifact with one
//! operation: assign a cluster label to every row of a batch.
//!
//! # Artifact format
//!
//! ```text
//! { "name", "label_prefix", "handle_unknown",
//!   "features": [{ "column", "categories": [...] }, ...],
//!   "centroids": [[f64; width], ...] }
//! ```
//!
//! Rows are one-hot encoded in `features` order and assigned to the nearest
//! centroid by squared Euclidean distance. Ties go to the lowest index.
//!
//! # Example
//!
//! ```rust,ignore
//! use cohort_model::{ClusteringModel, NearestCentroidModel, RecordBatch};
//!
//! let model = NearestCentroidModel::from_slice(&std::fs::read("model.json")?)?;
//! let labels = model.predict(&RecordBatch::single(record))?;
//! println!("{}", labels[0]);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod artifact;
mod batch;
mod centroid;
mod encoder;
mod error;

pub use artifact::{FeatureSpec, ModelArtifact, UnknownPolicy};
pub use batch::RecordBatch;
pub use centroid::NearestCentroidModel;
pub use encoder::OneHotEncoder;
pub use error::{ModelError, ModelResult};

use cohort_types::{ClusterId, ModelFingerprint};

/// Name of the label column a model produces
pub const LABEL_COLUMN: &str = "Cluster";

/// A pre-trained clustering model
///
/// Implementations are immutable after loading and must be deterministic:
/// the same row always receives the same label, whether predicted alone or
/// as part of a larger batch.
pub trait ClusteringModel: Send + Sync + std::fmt::Debug {
    /// Name the model was loaded under
    fn name(&self) -> &str;

    /// Identity of the artifact the model was built from
    fn fingerprint(&self) -> ModelFingerprint;

    /// Every label the model can emit
    fn labels(&self) -> Vec<ClusterId>;

    /// Label each row of `batch`, in row order
    ///
    /// # Errors
    /// `ModelError::UnknownCategory` if a row carries a value outside the
    /// model vocabulary and the model rejects unknown values.
    fn predict(&self, batch: &RecordBatch) -> ModelResult<Vec<ClusterId>>;
}
