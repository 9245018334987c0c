//! Parsers for the three backing files
//!
//! - Population: semicolon-separated survey answers via `csv`
//! - Cluster metadata: id → `{name, description}` JSON via serde
//! - Model artifact: centroid JSON via `cohort-model`

use crate::error::DataResult;
use std::path::Path;

mod catalog;
mod model;
mod population;

pub use catalog::{CatalogParser, ClusterCatalog};
pub use model::{model_path, ModelParser};
pub use population::{PopulationParser, SEPARATOR};

/// Parser trait for turning file bytes into an in-memory structure
///
/// Implement this trait to add support for new backing files.
pub trait SourceParser: Send + Sync + 'static {
    /// The structure this parser produces
    type Output: Send + Sync + 'static;

    /// Parse file content; `path` is used for error reporting only
    ///
    /// # Errors
    /// A `DataError` describing why the content is unusable
    fn parse(&self, content: &[u8], path: &Path) -> DataResult<Self::Output>;

    /// Short name used in logs
    fn describe(&self) -> &'static str;

    /// Map a read failure of `path` to this source's error
    fn io_error(&self, path: &Path, source: &std::io::Error) -> crate::DataError {
        crate::DataError::io_error(path, source)
    }
}
