//! Dashboard - the query pipeline
//!
//! One query runs: assign → look up profile → summarize peers. Every step
//! reads the shared context; nothing is written back.

use crate::aggregation::{AggregationEngine, ClusterStatistics};
use crate::context::{DashboardContext, IntegrityReport};
use crate::error::{CohortResult, IntegrityViolation};
use cohort_types::{ClusterId, ClusterProfile, ModelFingerprint, RawSurveyRecord, SurveyRecord};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Answer to one query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeerGroupReport {
    /// Record the query was made with
    pub query: SurveyRecord,
    /// Cluster the record was assigned to
    pub cluster_id: ClusterId,
    /// Display name and description of the cluster
    pub profile: ClusterProfile,
    /// Statistics of the peer group
    pub statistics: ClusterStatistics,
    /// Model that produced the assignment
    pub model: ModelFingerprint,
}

/// One row of the cluster overview
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClusterOverview {
    /// Cluster label
    pub cluster_id: ClusterId,
    /// Profile, if the metadata has one
    pub profile: Option<ClusterProfile>,
    /// Respondents in the cluster
    pub size: usize,
}

/// Entry point for peer-group queries
#[derive(Debug, Clone)]
pub struct Dashboard {
    context: Arc<DashboardContext>,
    engine: AggregationEngine,
    integrity: Arc<OnceCell<IntegrityReport>>,
}

impl Dashboard {
    /// Create dashboard over a shared context
    #[must_use]
    pub fn new(context: Arc<DashboardContext>) -> Self {
        Self {
            context,
            engine: AggregationEngine::new(),
            integrity: Arc::new(OnceCell::new()),
        }
    }

    /// Shared context
    #[inline]
    #[must_use]
    pub fn context(&self) -> &Arc<DashboardContext> {
        &self.context
    }

    /// Integrity report, checked on first call only
    ///
    /// # Errors
    /// See [`DashboardContext::verify_integrity`]; a failed check is retried
    /// on the next call.
    pub async fn integrity(&self) -> CohortResult<&IntegrityReport> {
        self.integrity
            .get_or_try_init(|| self.context.verify_integrity())
            .await
    }

    /// Assign `record` to its cluster and summarize its peer group
    ///
    /// # Errors
    /// - `CohortError::InvalidInput` if the model rejects a value of `record`
    /// - `CohortError::IntegrityError` if the resources disagree
    /// - any load error of the model, metadata or population
    pub async fn report(&self, record: &SurveyRecord) -> CohortResult<PeerGroupReport> {
        self.integrity().await?;

        let service = self.context.assignment_service().await?;
        let population = self.context.population().await?;
        if population.labeled_by() != service.fingerprint() {
            return Err(IntegrityViolation::ModelMismatch {
                population: population.labeled_by(),
                model: service.fingerprint(),
            }
            .into());
        }

        let cluster_id = service.assign(record)?;
        tracing::debug!(cluster = %cluster_id, "query assigned");

        let catalog = self.context.catalog().await?;
        let profile = catalog.get(&cluster_id).cloned().ok_or_else(|| {
            tracing::warn!(cluster = %cluster_id, "assigned cluster has no profile");
            IntegrityViolation::MissingProfile(cluster_id.clone())
        })?;

        let statistics = self.engine.summarize(&population, &cluster_id);
        Ok(PeerGroupReport {
            query: *record,
            cluster_id,
            profile,
            statistics,
            model: service.fingerprint(),
        })
    }

    /// Validate an unchecked record, then report on it
    ///
    /// # Errors
    /// `CohortError::InvalidInput` if a field is missing or out of vocabulary,
    /// otherwise as [`Dashboard::report`]
    pub async fn report_raw(&self, raw: &RawSurveyRecord) -> CohortResult<PeerGroupReport> {
        let record = raw.validate()?;
        self.report(&record).await
    }

    /// Every cluster the model can emit, with profile and population size
    ///
    /// # Errors
    /// Any load error of the model, metadata or population
    pub async fn overview(&self) -> CohortResult<Vec<ClusterOverview>> {
        let model = self.context.model().await?;
        let catalog = self.context.catalog().await?;
        let sizes = self.context.population().await?.cluster_sizes();

        Ok(model
            .labels()
            .into_iter()
            .map(|cluster_id| ClusterOverview {
                profile: catalog.get(&cluster_id).cloned(),
                size: sizes.get(&cluster_id).copied().unwrap_or(0),
                cluster_id,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CohortConfig;
    use crate::error::ErrorKind;
    use cohort_test_utils::TestWorkspace;
    use cohort_types::{AgeBracket, EduLevel, FavAnimals, FavPlace, Gender};

    fn dashboard(workspace: &TestWorkspace) -> Dashboard {
        let config = CohortConfig::default()
            .with_data_path(workspace.data_path())
            .with_model_dir(workspace.model_dir())
            .with_model_name(workspace.model_name())
            .with_metadata_path(workspace.metadata_path());
        Dashboard::new(Arc::new(DashboardContext::new(config)))
    }

    fn query() -> SurveyRecord {
        SurveyRecord::new(
            AgeBracket::From25To34,
            EduLevel::Higher,
            FavAnimals::Dogs,
            FavPlace::InTheMountains,
            Gender::Female,
        )
    }

    #[tokio::test]
    async fn report_combines_assignment_profile_and_statistics() {
        let workspace = TestWorkspace::sample();
        let report = dashboard(&workspace).report(&query()).await.unwrap();

        assert_eq!(report.query, query());
        assert_eq!(report.statistics.cluster_id, report.cluster_id);
        assert_eq!(
            report.statistics.men() + report.statistics.women(),
            report.statistics.total
        );
        assert!(!report.profile.name.is_empty());
    }

    #[tokio::test]
    async fn report_raw_rejects_incomplete_record() {
        let workspace = TestWorkspace::sample();
        let mut raw = RawSurveyRecord::from(query());
        raw.fav_place = Some("Na Księżycu".to_string());

        let err = dashboard(&workspace).report_raw(&raw).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[tokio::test]
    async fn overview_covers_every_label() {
        let workspace = TestWorkspace::sample();
        let overview = dashboard(&workspace).overview().await.unwrap();

        assert_eq!(overview.len(), workspace.cluster_count());
        assert!(overview.iter().all(|row| row.profile.is_some()));
        assert_eq!(
            overview.iter().map(|row| row.size).sum::<usize>(),
            workspace.population_size()
        );
    }

    #[tokio::test]
    async fn integrity_is_checked_once() {
        let workspace = TestWorkspace::sample();
        let dashboard = dashboard(&workspace);

        let first: *const IntegrityReport = dashboard.integrity().await.unwrap();
        let second: *const IntegrityReport = dashboard.integrity().await.unwrap();
        assert_eq!(first, second);
    }
}
