//! Source loader - the only component that touches the filesystem
//!
//! Reads a backing file, enforces the size limit and hands the bytes to a
//! [`SourceParser`].

use crate::error::{DataError, DataResult};
use crate::parsers::SourceParser;
use std::path::Path;
use std::time::Instant;

/// Default maximum file size to load (bytes)
pub const DEFAULT_MAX_FILE_SIZE: usize = 64 * 1024 * 1024;

/// Reads backing files and parses them
#[derive(Debug, Clone, Copy)]
pub struct SourceLoader {
    max_file_size: usize,
}

impl SourceLoader {
    /// Create loader with the default size limit
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_max_file_size(DEFAULT_MAX_FILE_SIZE)
    }

    /// Create loader with a specific size limit
    #[inline]
    #[must_use]
    pub fn with_max_file_size(max_file_size: usize) -> Self {
        Self { max_file_size }
    }

    /// Maximum accepted file size
    #[inline]
    #[must_use]
    pub fn max_file_size(&self) -> usize {
        self.max_file_size
    }

    /// Read and parse one file
    ///
    /// # Errors
    /// - the parser's IO error if the file cannot be read
    /// - `DataError::TooLarge` if the file exceeds the limit
    /// - any parse error of `parser`
    pub async fn load<P: SourceParser>(
        &self,
        parser: &P,
        path: impl AsRef<Path>,
    ) -> DataResult<P::Output> {
        let path = path.as_ref();
        let started = Instant::now();

        let content = tokio::fs::read(path).await.map_err(|e| {
            tracing::error!(source = parser.describe(), path = %path.display(), "read failed: {}", e);
            parser.io_error(path, &e)
        })?;

        if content.len() > self.max_file_size {
            return Err(DataError::TooLarge {
                path: path.to_path_buf(),
                size: content.len(),
                max: self.max_file_size,
            });
        }

        let output = parser.parse(&content, path)?;
        tracing::debug!(
            source = parser.describe(),
            path = %path.display(),
            bytes = content.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "loaded"
        );
        Ok(output)
    }
}

impl Default for SourceLoader {
    fn default() -> Self {
        Self::new()
    }
}
