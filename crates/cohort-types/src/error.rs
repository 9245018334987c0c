//! Error types for survey records

/// Errors raised while building a [`crate::SurveyRecord`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// A required column has no value
    #[error("missing required field: '{0}'")]
    MissingField(&'static str),

    /// A value outside the fixed enumeration of its column
    #[error("unknown value '{value}' for column '{column}'")]
    UnknownCategory {
        /// Column the value was given for
        column: &'static str,
        /// Offending value
        value: String,
    },
}

impl RecordError {
    /// Create unknown-category error for column
    pub fn unknown(column: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownCategory {
            column,
            value: value.into(),
        }
    }
}
