//! Error types for Cohort Core
//!
//! Four failure classes, all unrecoverable at the core level:
//! - Data files missing or corrupt
//! - Model artifact missing or corrupt
//! - Query record incomplete or out of vocabulary
//! - Model, metadata and population disagreeing with each other

use cohort_data::DataError;
use cohort_model::ModelError;
use cohort_types::{ClusterId, ModelFingerprint, RecordError};
use std::path::PathBuf;

/// Main Cohort error type
#[derive(Debug, Clone, thiserror::Error)]
pub enum CohortError {
    /// Population or metadata file missing or corrupt
    #[error("data unavailable: {0}")]
    DataUnavailable(#[source] DataError),

    /// Model artifact missing or corrupt
    #[error("model unavailable: {0}")]
    ModelUnavailable(String),

    /// Query record incomplete or out of vocabulary
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Model, metadata and population disagree
    #[error("integrity error: {0}")]
    IntegrityError(#[from] IntegrityViolation),
}

impl CohortError {
    /// Failure class
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DataUnavailable(_) => ErrorKind::DataUnavailable,
            Self::ModelUnavailable(_) => ErrorKind::ModelUnavailable,
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::IntegrityError(_) => ErrorKind::IntegrityError,
        }
    }

    /// Map a prediction failure on a query record
    pub(crate) fn from_prediction(error: ModelError) -> Self {
        if error.is_input_error() {
            Self::InvalidInput(error.to_string())
        } else {
            Self::ModelUnavailable(error.to_string())
        }
    }
}

impl From<DataError> for CohortError {
    fn from(error: DataError) -> Self {
        if error.is_model_error() {
            Self::ModelUnavailable(error.to_string())
        } else {
            Self::DataUnavailable(error)
        }
    }
}

impl From<RecordError> for CohortError {
    fn from(error: RecordError) -> Self {
        Self::InvalidInput(error.to_string())
    }
}

/// Failure class of a [`CohortError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Data files missing or corrupt
    DataUnavailable,
    /// Model artifact missing or corrupt
    ModelUnavailable,
    /// Bad query record
    InvalidInput,
    /// Inconsistent model, metadata or population
    IntegrityError,
}

/// Ways model, metadata and population can disagree
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntegrityViolation {
    /// Model produced a cluster with no profile
    #[error("cluster '{0}' has no profile")]
    MissingProfile(ClusterId),

    /// Model can produce clusters with no profile
    #[error("clusters without profile: {}", join(.0))]
    MissingProfiles(Vec<ClusterId>),

    /// Population labeled by a different model than the query
    #[error("population labeled by model {population}, query model is {model}")]
    ModelMismatch {
        /// Model that labeled the population
        population: ModelFingerprint,
        /// Model answering the query
        model: ModelFingerprint,
    },

    /// Model returned the wrong number of labels
    #[error("model returned {labels} labels for {rows} rows")]
    LabelCountMismatch {
        /// Rows submitted
        rows: usize,
        /// Labels returned
        labels: usize,
    },

    /// Population holds values the model never saw in training
    #[error("population {path} outside model vocabulary: {reason}")]
    PopulationVocabulary {
        /// Population file
        path: PathBuf,
        /// Encoder message
        reason: String,
    },
}

fn join(ids: &[ClusterId]) -> String {
    ids.iter()
        .map(ClusterId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for core operations
pub type CohortResult<T> = Result<T, CohortError>;

/// Errors loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("io error reading config {path}: {source}")]
    Io {
        /// Config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for the config schema
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Cache too small to keep every resource loaded
    #[error("cache_capacity {capacity} is below the minimum of {min}")]
    CacheCapacity {
        /// Configured capacity
        capacity: u64,
        /// Smallest accepted capacity
        min: u64,
    },
}
