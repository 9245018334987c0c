//! Error types for model loading and prediction

/// Errors raised by the clustering model
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    /// Artifact is not valid JSON or misses a field
    #[error("malformed model artifact: {0}")]
    Malformed(String),

    /// Artifact declares no centroids
    #[error("model has no centroids")]
    NoCentroids,

    /// Centroid width disagrees with the encoder
    #[error("centroid {index} has width {actual}, encoder expects {expected}")]
    DimensionMismatch {
        /// Centroid position in the artifact
        index: usize,
        /// Encoded width
        expected: usize,
        /// Centroid width
        actual: usize,
    },

    /// Feature column is not a survey column, or appears twice
    #[error("invalid feature column: '{0}'")]
    InvalidFeature(String),

    /// Row value outside the model vocabulary
    #[error("value '{value}' for column '{column}' was not seen in training")]
    UnknownCategory {
        /// Feature column
        column: String,
        /// Unseen value
        value: String,
    },
}

impl ModelError {
    /// Create malformed-artifact error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed(message.into())
    }

    /// Whether the error is caused by the input rather than the artifact
    #[inline]
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::UnknownCategory { .. })
    }
}

/// Result type alias for model operations
pub type ModelResult<T> = Result<T, ModelError>;
