//! Cohort Types
//!
//! The vocabulary shared by every layer of the peer-group lookup.
//!
//! # Core Concepts
//!
//! - [`Category`]: a closed, ordered enumeration backing one survey column
//! - [`SurveyRecord`]: the five categorical answers of one respondent or query
//! - [`LabeledRecord`]: a record plus the [`ClusterId`] a model assigned to it
//! - [`ClusterProfile`]: display name and description of a cluster
//! - [`ModelFingerprint`]: Blake3 identity of a model artifact
//!
//! # Example
//!
//! ```rust
//! use cohort_types::{AgeBracket, EduLevel, FavAnimals, FavPlace, Gender, SurveyRecord};
//!
//! let record = SurveyRecord::new(
//!     AgeBracket::From25To34,
//!     EduLevel::Higher,
//!     FavAnimals::Dogs,
//!     FavPlace::InTheMountains,
//!     Gender::Female,
//! );
//! assert_eq!(record.get("fav_place"), Some("W górach"));
//! ```

#![warn(unreachable_pub)]

mod category;
mod cluster;
mod error;
mod fingerprint;
mod record;

pub use category::{AgeBracket, Category, EduLevel, FavAnimals, FavPlace, Gender};
pub use cluster::{ClusterId, ClusterProfile};
pub use error::RecordError;
pub use fingerprint::ModelFingerprint;
pub use record::{LabeledRecord, RawSurveyRecord, SurveyRecord, COLUMNS};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
