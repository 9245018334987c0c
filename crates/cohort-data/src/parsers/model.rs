//! Model artifact parser

use crate::error::{DataError, DataResult};
use crate::parsers::SourceParser;
use cohort_model::NearestCentroidModel;
use std::path::{Path, PathBuf};

/// File extension of model artifacts
const MODEL_EXTENSION: &str = "json";

/// Path of the artifact for model `name` under `dir`
#[must_use]
pub fn model_path(dir: impl AsRef<Path>, name: &str) -> PathBuf {
    dir.as_ref().join(format!("{name}.{MODEL_EXTENSION}"))
}

/// Parses a model artifact into a ready-to-use model
#[derive(Debug, Clone, Copy, Default)]
pub struct ModelParser;

impl SourceParser for ModelParser {
    type Output = NearestCentroidModel;

    fn parse(&self, content: &[u8], path: &Path) -> DataResult<Self::Output> {
        NearestCentroidModel::from_slice(content).map_err(|source| DataError::ModelArtifact {
            path: path.to_path_buf(),
            source,
        })
    }

    fn describe(&self) -> &'static str {
        "model"
    }

    fn io_error(&self, path: &Path, source: &std::io::Error) -> DataError {
        if source.kind() == std::io::ErrorKind::NotFound {
            DataError::ModelNotFound {
                path: path.to_path_buf(),
            }
        } else {
            DataError::ModelArtifact {
                path: path.to_path_buf(),
                source: cohort_model::ModelError::malformed(source.to_string()),
            }
        }
    }
}
