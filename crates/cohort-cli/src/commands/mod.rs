//! Subcommands
//!
//! Each command renders its output to a `String`; printing is left to the
//! binary so commands can be exercised in tests.

pub mod check;
pub mod clusters;
pub mod report;

use crate::settings;
use anyhow::bail;
use clap::ArgMatches;
use cohort_core::{Dashboard, DashboardContext};
use std::sync::Arc;

/// Run the selected subcommand and return its output
///
/// # Errors
/// Configuration errors, and every core error of the command
pub async fn dispatch(matches: &ArgMatches) -> anyhow::Result<String> {
    let Some((name, args)) = matches.subcommand() else {
        bail!("no subcommand given");
    };

    let config = settings::resolve(args)?;
    let dashboard = Dashboard::new(Arc::new(DashboardContext::new(config)));
    let json = args.get_flag("json");

    match name {
        "report" => report::run(&dashboard, &settings::survey_answers(args), json).await,
        "clusters" => clusters::run(&dashboard, json).await,
        "check" => check::run(&dashboard, json).await,
        other => bail!("unknown subcommand '{other}'"),
    }
}
