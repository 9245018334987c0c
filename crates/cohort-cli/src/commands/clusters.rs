//! `cohort clusters`

use crate::render::overview_text;
use anyhow::Context;
use cohort_core::Dashboard;

/// List every cluster with its profile and population size
///
/// # Errors
/// Any load error of the model, metadata or population
pub async fn run(dashboard: &Dashboard, json: bool) -> anyhow::Result<String> {
    let overview = dashboard.overview().await?;
    if json {
        serde_json::to_string_pretty(&overview).context("serializing cluster overview")
    } else {
        Ok(overview_text(&overview))
    }
}
