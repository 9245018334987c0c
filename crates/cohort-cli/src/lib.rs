//! Cohort CLI
//!
//! Command-line front end of the peer-group dashboard: configuration
//! resolution, logging setup, and text/JSON presentation of core results.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod artwork;
pub mod cli;
pub mod commands;
pub mod logging;
pub mod render;
pub mod settings;

use cohort_core::{CohortError, ErrorKind};

/// Process exit code for a failed invocation
///
/// Core failures map to one code per error class; anything else is 1.
#[must_use]
pub fn exit_code(error: &anyhow::Error) -> u8 {
    match error.downcast_ref::<CohortError>().map(CohortError::kind) {
        Some(ErrorKind::InvalidInput) => 2,
        Some(ErrorKind::DataUnavailable) => 3,
        Some(ErrorKind::ModelUnavailable) => 4,
        Some(ErrorKind::IntegrityError) => 5,
        None => 1,
    }
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
