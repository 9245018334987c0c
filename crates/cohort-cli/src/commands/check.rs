//! `cohort check`

use crate::render::integrity_text;
use anyhow::Context;
use cohort_core::Dashboard;

/// Load every resource and check that they agree
///
/// # Errors
/// Any load or integrity error
pub async fn run(dashboard: &Dashboard, json: bool) -> anyhow::Result<String> {
    let report = dashboard.integrity().await?;
    if json {
        serde_json::to_string_pretty(report).context("serializing integrity report")
    } else {
        Ok(integrity_text(report))
    }
}
