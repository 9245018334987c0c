//! Read-once resource cache using moka
//!
//! Holds the loaded model, cluster catalog and labeled population for the
//! process lifetime. Concurrent requests for a missing key share one load:
//! the loader runs once and every waiter receives its result.

use crate::error::DataError;
use cohort_types::ModelFingerprint;
use moka::future::Cache;
use std::any::Any;
use std::fmt::{self, Display, Formatter};
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

/// Smallest capacity that holds the model, the catalog and the population
/// at once
pub const MIN_CACHE_CAPACITY: u64 = 3;

/// Statistics for cache monitoring
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of entries in cache
    pub entry_count: u64,
}

/// Identity of a cached resource
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceKey {
    /// Model artifact at path
    Model(PathBuf),
    /// Cluster metadata at path
    Catalog(PathBuf),
    /// Population at path, labeled by the model with this fingerprint
    Population {
        /// Population file
        path: PathBuf,
        /// Model that labeled it
        labeled_by: ModelFingerprint,
    },
}

impl Display for ResourceKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Model(path) => write!(f, "model:{}", path.display()),
            Self::Catalog(path) => write!(f, "catalog:{}", path.display()),
            Self::Population { path, labeled_by } => {
                write!(f, "population:{}@{}", path.display(), labeled_by.short())
            }
        }
    }
}

/// Typed, single-initialization cache of loaded resources
#[derive(Debug, Clone)]
pub struct ResourceCache {
    inner: Cache<ResourceKey, Arc<dyn Any + Send + Sync>>,
}

impl ResourceCache {
    /// Create cache with max capacity
    ///
    /// Capacities below [`MIN_CACHE_CAPACITY`] are raised to it, so no
    /// resource is evicted and loaded a second time.
    #[inline]
    #[must_use]
    pub fn new(max_capacity: u64) -> Self {
        Self {
            inner: Cache::new(max_capacity.max(MIN_CACHE_CAPACITY)),
        }
    }

    /// Get cached resource, or run `load` once and cache its output
    ///
    /// A failed load is not cached; the next call retries it. Callers that
    /// waited on a failed load all receive a clone of its error.
    ///
    /// # Errors
    /// - the error returned by `load`
    /// - `DataError::CacheTypeMismatch` if `key` already holds another type
    pub async fn get_or_try_load<T, E, F, Fut>(&self, key: ResourceKey, load: F) -> Result<Arc<T>, E>
    where
        T: Send + Sync + 'static,
        E: From<DataError> + Clone + Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let entry = self
            .inner
            .try_get_with(key.clone(), async move {
                load()
                    .await
                    .map(|value| Arc::new(value) as Arc<dyn Any + Send + Sync>)
            })
            .await
            .map_err(|e: Arc<E>| (*e).clone())?;

        entry.downcast::<T>().map_err(|_| {
            E::from(DataError::CacheTypeMismatch {
                key: key.to_string(),
            })
        })
    }

    /// Check if key is cached
    #[inline]
    #[must_use]
    pub fn contains(&self, key: &ResourceKey) -> bool {
        self.inner.contains_key(key)
    }

    /// Cache statistics, after applying pending maintenance
    pub async fn stats(&self) -> CacheStats {
        self.inner.run_pending_tasks().await;
        CacheStats {
            entry_count: self.inner.entry_count(),
        }
    }
}

impl Default for ResourceCache {
    /// Create cache with default capacity (16 entries)
    fn default() -> Self {
        Self::new(16)
    }
}
