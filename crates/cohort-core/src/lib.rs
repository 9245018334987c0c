//! Cohort Core - peer-group lookup
//!
//! Assigns a survey record to a pre-trained cluster and describes the
//! respondents who share it:
//! - Loads the model, cluster metadata and population once per process
//! - Labels the whole population with the same model used for queries
//! - Summarizes a cluster's members per survey column
//! - Checks that model, metadata and population agree
//!
//! # Example
//!
//! ```rust,ignore
//! use cohort_core::{CohortConfig, Dashboard, DashboardContext};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let context = Arc::new(DashboardContext::new(CohortConfig::default()));
//! let dashboard = Dashboard::new(context);
//!
//! let report = dashboard.report(&record).await?;
//! println!("{}: {} peers", report.profile.name, report.statistics.total);
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod aggregation;
pub mod assignment;
pub mod config;
pub mod context;
pub mod dashboard;
pub mod error;
pub mod population;

pub use aggregation::{AggregationEngine, ClusterStatistics, Distribution};
pub use assignment::AssignmentService;
pub use config::CohortConfig;
pub use context::{DashboardContext, IntegrityReport};
pub use dashboard::{ClusterOverview, Dashboard, PeerGroupReport};
pub use error::{CohortError, CohortResult, ConfigError, ErrorKind, IntegrityViolation};
pub use population::Population;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with Cohort Core
    pub use crate::{
        AggregationEngine, AssignmentService, ClusterStatistics, CohortConfig, CohortError,
        Dashboard, DashboardContext, ErrorKind, PeerGroupReport,
    };
    pub use cohort_types::{
        AgeBracket, Category, ClusterId, ClusterProfile, EduLevel, FavAnimals, FavPlace, Gender,
        RawSurveyRecord, SurveyRecord,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
