//! The bundled demo files under `data/` stay consistent

use cohort_core::prelude::*;
use std::path::PathBuf;
use std::sync::Arc;

fn demo_config() -> CohortConfig {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/cohort.toml");
    CohortConfig::from_file(path).unwrap()
}

#[tokio::test]
async fn demo_files_pass_integrity_check() {
    let context = DashboardContext::new(demo_config());
    let report = context.verify_integrity().await.unwrap();

    assert_eq!(report.labels.len(), 10);
    assert_eq!(report.profiles, 10);
    assert_eq!(report.respondents, 229);
}

#[tokio::test]
async fn demo_query_is_deterministic() {
    let dashboard = Dashboard::new(Arc::new(DashboardContext::new(demo_config())));
    let query = SurveyRecord::new(
        AgeBracket::From25To34,
        EduLevel::Higher,
        FavAnimals::Dogs,
        FavPlace::InTheMountains,
        Gender::Female,
    );

    let first = dashboard.report(&query).await.unwrap();
    for _ in 0..3 {
        assert_eq!(dashboard.report(&query).await.unwrap().cluster_id, first.cluster_id);
    }
    assert_eq!(
        first.statistics.total,
        dashboard
            .overview()
            .await
            .unwrap()
            .iter()
            .find(|row| row.cluster_id == first.cluster_id)
            .map(|row| row.size)
            .unwrap()
    );
}
