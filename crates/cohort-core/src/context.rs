//! Dashboard context - lazily loaded, shared, read-only resources
//!
//! Owns the loader and the resource cache. The model, the cluster catalog
//! and the labeled population are each loaded on first use and then served
//! from the cache for the lifetime of the context. Concurrent first requests
//! share a single load.

use crate::assignment::AssignmentService;
use crate::config::CohortConfig;
use crate::error::{CohortError, CohortResult, IntegrityViolation};
use crate::population::Population;
use cohort_data::{
    CatalogParser, ClusterCatalog, DataError, ModelParser, PopulationParser, ResourceCache,
    ResourceKey, SourceLoader,
};
use cohort_model::{ClusteringModel, NearestCentroidModel};
use cohort_types::{ClusterId, ModelFingerprint};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

/// Outcome of a successful integrity check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntegrityReport {
    /// Model that was checked
    pub model: ModelFingerprint,
    /// Every label the model can emit
    pub labels: Vec<ClusterId>,
    /// Number of cluster profiles
    pub profiles: usize,
    /// Profiles no model label points to
    pub unused_profiles: Vec<ClusterId>,
    /// Number of labeled respondents
    pub respondents: usize,
}

/// Shared resources of the dashboard
#[derive(Debug)]
pub struct DashboardContext {
    config: CohortConfig,
    loader: SourceLoader,
    cache: ResourceCache,
}

impl DashboardContext {
    /// Create context; nothing is loaded until first use
    #[must_use]
    pub fn new(config: CohortConfig) -> Self {
        Self {
            loader: SourceLoader::with_max_file_size(config.max_file_size),
            cache: ResourceCache::new(config.cache_capacity),
            config,
        }
    }

    /// Configuration in use
    #[inline]
    #[must_use]
    pub fn config(&self) -> &CohortConfig {
        &self.config
    }

    /// Resource cache
    #[inline]
    #[must_use]
    pub fn cache(&self) -> &ResourceCache {
        &self.cache
    }

    /// Clustering model
    ///
    /// # Errors
    /// `CohortError::ModelUnavailable` if the artifact is missing or invalid
    pub async fn model(&self) -> CohortResult<Arc<dyn ClusteringModel>> {
        let path = self.config.model_path();
        let loader = self.loader;
        let model: Arc<NearestCentroidModel> = self
            .cache
            .get_or_try_load(ResourceKey::Model(path.clone()), || async move {
                let model = loader.load(&ModelParser, &path).await?;
                tracing::info!(
                    model = model.name(),
                    clusters = model.n_clusters(),
                    fingerprint = %model.fingerprint().short(),
                    "model loaded"
                );
                Ok::<_, DataError>(model)
            })
            .await?;
        Ok(model)
    }

    /// Cluster names and descriptions
    ///
    /// # Errors
    /// `CohortError::DataUnavailable` if the metadata file is missing or invalid
    pub async fn catalog(&self) -> CohortResult<Arc<ClusterCatalog>> {
        let path = self.config.metadata_path.clone();
        let loader = self.loader;
        let catalog = self
            .cache
            .get_or_try_load(ResourceKey::Catalog(path.clone()), || async move {
                let catalog = loader.load(&CatalogParser, &path).await?;
                tracing::info!(profiles = catalog.len(), "cluster metadata loaded");
                Ok::<_, DataError>(catalog)
            })
            .await?;
        Ok(catalog)
    }

    /// Service assigning records with the current model
    ///
    /// # Errors
    /// `CohortError::ModelUnavailable` if the model cannot be loaded
    pub async fn assignment_service(&self) -> CohortResult<AssignmentService> {
        Ok(AssignmentService::new(self.model().await?))
    }

    /// Population labeled by the current model
    ///
    /// Cached per model fingerprint, so a population is never paired with a
    /// model other than the one that labeled it.
    ///
    /// # Errors
    /// - `CohortError::ModelUnavailable` if the model cannot be loaded
    /// - `CohortError::DataUnavailable` if the population file is missing or invalid
    /// - `CohortError::IntegrityError` if the model rejects a population row
    pub async fn population(&self) -> CohortResult<Arc<Population>> {
        let service = self.assignment_service().await?;
        let path = self.config.data_path.clone();
        let key = ResourceKey::Population {
            path: path.clone(),
            labeled_by: service.fingerprint(),
        };
        let loader = self.loader;

        self.cache
            .get_or_try_load(key, || async move {
                let started = Instant::now();
                let records = loader.load(&PopulationParser, &path).await?;
                let population = service.label_population(records, &path)?;
                tracing::info!(
                    respondents = population.len(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "population loaded"
                );
                Ok::<_, CohortError>(population)
            })
            .await
    }

    /// Check that model, metadata and population agree
    ///
    /// # Errors
    /// - `CohortError::IntegrityError` with `MissingProfiles` if the model
    ///   can emit a label with no cluster profile
    /// - any load error of the three resources
    pub async fn verify_integrity(&self) -> CohortResult<IntegrityReport> {
        let model = self.model().await?;
        let catalog = self.catalog().await?;
        let population = self.population().await?;

        let labels = model.labels();
        let missing: Vec<ClusterId> = catalog.missing(&labels).into_iter().cloned().collect();
        if !missing.is_empty() {
            tracing::warn!(missing = missing.len(), "model labels without cluster profile");
            return Err(IntegrityViolation::MissingProfiles(missing).into());
        }

        if population.labeled_by() != model.fingerprint() {
            tracing::warn!("population labeled by a different model");
            return Err(IntegrityViolation::ModelMismatch {
                population: population.labeled_by(),
                model: model.fingerprint(),
            }
            .into());
        }

        let unused_profiles = catalog
            .iter()
            .map(|(id, _)| id)
            .filter(|id| !labels.contains(*id))
            .cloned()
            .collect();

        Ok(IntegrityReport {
            model: model.fingerprint(),
            profiles: catalog.len(),
            unused_profiles,
            respondents: population.len(),
            labels,
        })
    }
}
