//! Cohort Data Layer
//!
//! The boundary between the backing files and the in-memory structures the
//! core works on.
//!
//! # Core Operations
//!
//! - **Load**: read a file through [`SourceLoader`] and a [`parsers::SourceParser`]
//! - **Cache**: keep each loaded resource for the process lifetime in [`ResourceCache`]
//!
//! # Architecture
//!
//! ```text
//! survey.csv  ─┐
//! clusters.json ├→ SourceLoader → SourceParser → value → ResourceCache (read-once)
//! model.json  ─┘
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod cache;
pub mod error;
pub mod loader;
pub mod parsers;

pub use cache::{CacheStats, ResourceCache, ResourceKey, MIN_CACHE_CAPACITY};
pub use error::{DataError, DataResult};
pub use loader::{SourceLoader, DEFAULT_MAX_FILE_SIZE};
pub use parsers::{model_path, CatalogParser, ClusterCatalog, ModelParser, PopulationParser};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
