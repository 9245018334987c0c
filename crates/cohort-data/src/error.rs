//! Error types for the loaders
//!
//! Every variant carries the path it concerns. Errors are `Clone` so that a
//! failed one-time load can be reported to every caller that waited on it.

use cohort_model::ModelError;
use std::path::PathBuf;

/// Errors while loading a backing file
#[derive(Debug, Clone, thiserror::Error)]
pub enum DataError {
    /// File could not be read
    #[error("io error reading {path}: {reason}")]
    Io {
        /// File being read
        path: PathBuf,
        /// Rendered I/O error
        reason: String,
    },

    /// File exceeds the configured size limit
    #[error("{path} too large: {size} bytes (max: {max})")]
    TooLarge {
        /// Oversized file
        path: PathBuf,
        /// Actual size in bytes
        size: usize,
        /// Configured limit in bytes
        max: usize,
    },

    /// Population file lacks a required column
    #[error("{path}: missing required column '{column}'")]
    MissingColumn {
        /// Population file
        path: PathBuf,
        /// Absent column
        column: &'static str,
    },

    /// Population row could not be parsed
    #[error("{path}: line {line}: {reason}")]
    MalformedRow {
        /// Population file
        path: PathBuf,
        /// 1-based line, header included
        line: u64,
        /// What was wrong with the row
        reason: String,
    },

    /// Cluster metadata is not a valid id → profile mapping
    #[error("{path}: malformed cluster metadata: {reason}")]
    MalformedMetadata {
        /// Metadata file
        path: PathBuf,
        /// Parser message
        reason: String,
    },

    /// Model artifact file does not exist
    #[error("model artifact not found: {path}")]
    ModelNotFound {
        /// Expected artifact location
        path: PathBuf,
    },

    /// Model artifact exists but is unusable
    #[error("model artifact {path}: {source}")]
    ModelArtifact {
        /// Artifact file
        path: PathBuf,
        /// Why the model was rejected
        #[source]
        source: ModelError,
    },

    /// Cached entry holds a different type than requested
    #[error("cache entry {key} holds an unexpected type")]
    CacheTypeMismatch {
        /// Rendered resource key
        key: String,
    },
}

impl DataError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: &std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            reason: source.to_string(),
        }
    }

    /// Create malformed-row error
    pub fn malformed_row(path: impl Into<PathBuf>, line: u64, reason: impl Into<String>) -> Self {
        Self::MalformedRow {
            path: path.into(),
            line,
            reason: reason.into(),
        }
    }

    /// Whether the error concerns the model artifact
    #[inline]
    #[must_use]
    pub fn is_model_error(&self) -> bool {
        matches!(self, Self::ModelNotFound { .. } | Self::ModelArtifact { .. })
    }
}

/// Result type alias for loader operations
pub type DataResult<T> = Result<T, DataError>;
