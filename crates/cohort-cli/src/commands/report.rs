//! `cohort report`

use crate::render::{report_text, ReportView};
use anyhow::Context;
use cohort_core::Dashboard;
use cohort_types::RawSurveyRecord;

/// Assign the answers to a cluster and describe its peer group
///
/// # Errors
/// Every core error of [`Dashboard::report_raw`]
pub async fn run(dashboard: &Dashboard, answers: &RawSurveyRecord, json: bool) -> anyhow::Result<String> {
    let report = dashboard.report_raw(answers).await?;
    tracing::info!(
        cluster = %report.cluster_id,
        peers = report.statistics.total,
        "peer group found"
    );

    if json {
        serde_json::to_string_pretty(&ReportView::new(&report)).context("serializing report")
    } else {
        Ok(report_text(&report))
    }
}
