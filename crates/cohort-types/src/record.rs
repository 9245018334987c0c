//! Survey records, raw and validated

use crate::category::{AgeBracket, Category, EduLevel, FavAnimals, FavPlace, Gender};
use crate::cluster::ClusterId;
use crate::error::RecordError;
use serde::{Deserialize, Serialize};

/// Survey columns, in the order a record lays them out
pub const COLUMNS: [&str; 5] = [
    AgeBracket::COLUMN,
    EduLevel::COLUMN,
    FavAnimals::COLUMN,
    FavPlace::COLUMN,
    Gender::COLUMN,
];

/// One respondent or one query: five categorical answers
///
/// Every field is drawn from its fixed enumeration, so a constructed
/// record is always complete and in-vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SurveyRecord {
    age: AgeBracket,
    edu_level: EduLevel,
    fav_animals: FavAnimals,
    fav_place: FavPlace,
    gender: Gender,
}

impl SurveyRecord {
    /// Create record from validated answers
    #[inline]
    #[must_use]
    pub const fn new(
        age: AgeBracket,
        edu_level: EduLevel,
        fav_animals: FavAnimals,
        fav_place: FavPlace,
        gender: Gender,
    ) -> Self {
        Self {
            age,
            edu_level,
            fav_animals,
            fav_place,
            gender,
        }
    }

    /// Age bracket
    #[inline]
    #[must_use]
    pub const fn age(&self) -> AgeBracket {
        self.age
    }

    /// Education level
    #[inline]
    #[must_use]
    pub const fn edu_level(&self) -> EduLevel {
        self.edu_level
    }

    /// Favorite animals
    #[inline]
    #[must_use]
    pub const fn fav_animals(&self) -> FavAnimals {
        self.fav_animals
    }

    /// Favorite place
    #[inline]
    #[must_use]
    pub const fn fav_place(&self) -> FavPlace {
        self.fav_place
    }

    /// Gender
    #[inline]
    #[must_use]
    pub const fn gender(&self) -> Gender {
        self.gender
    }

    /// Survey label for a column name, `None` for columns outside [`COLUMNS`]
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&'static str> {
        let label = if column == AgeBracket::COLUMN {
            self.age.as_str()
        } else if column == EduLevel::COLUMN {
            self.edu_level.as_str()
        } else if column == FavAnimals::COLUMN {
            self.fav_animals.as_str()
        } else if column == FavPlace::COLUMN {
            self.fav_place.as_str()
        } else if column == Gender::COLUMN {
            self.gender.as_str()
        } else {
            return None;
        };
        Some(label)
    }

    /// Attach a cluster label
    #[inline]
    #[must_use]
    pub fn labeled(self, cluster_id: ClusterId) -> LabeledRecord {
        LabeledRecord {
            record: self,
            cluster_id,
        }
    }
}

/// Unvalidated answers as they arrive from a form or a file row
///
/// Unknown columns in the source are ignored; absent ones stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSurveyRecord {
    /// Age bracket label
    #[serde(default)]
    pub age: Option<String>,
    /// Education level label
    #[serde(default)]
    pub edu_level: Option<String>,
    /// Favorite animals label
    #[serde(default)]
    pub fav_animals: Option<String>,
    /// Favorite place label
    #[serde(default)]
    pub fav_place: Option<String>,
    /// Gender label
    #[serde(default)]
    pub gender: Option<String>,
}

impl RawSurveyRecord {
    /// Validate into a [`SurveyRecord`]
    ///
    /// # Errors
    /// - `RecordError::MissingField` if a column is absent or blank
    /// - `RecordError::UnknownCategory` if a value is outside its enumeration
    pub fn validate(&self) -> Result<SurveyRecord, RecordError> {
        Ok(SurveyRecord::new(
            parse_field(self.age.as_deref())?,
            parse_field(self.edu_level.as_deref())?,
            parse_field(self.fav_animals.as_deref())?,
            parse_field(self.fav_place.as_deref())?,
            parse_field(self.gender.as_deref())?,
        ))
    }
}

impl TryFrom<RawSurveyRecord> for SurveyRecord {
    type Error = RecordError;

    fn try_from(raw: RawSurveyRecord) -> Result<Self, Self::Error> {
        raw.validate()
    }
}

impl From<SurveyRecord> for RawSurveyRecord {
    fn from(record: SurveyRecord) -> Self {
        Self {
            age: Some(record.age.as_str().to_string()),
            edu_level: Some(record.edu_level.as_str().to_string()),
            fav_animals: Some(record.fav_animals.as_str().to_string()),
            fav_place: Some(record.fav_place.as_str().to_string()),
            gender: Some(record.gender.as_str().to_string()),
        }
    }
}

fn parse_field<C: Category>(value: Option<&str>) -> Result<C, RecordError> {
    value
        .ok_or(RecordError::MissingField(C::COLUMN))?
        .parse()
}

/// A survey record with the cluster a model assigned to it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LabeledRecord {
    record: SurveyRecord,
    cluster_id: ClusterId,
}

impl LabeledRecord {
    /// The respondent's answers
    #[inline]
    #[must_use]
    pub fn record(&self) -> &SurveyRecord {
        &self.record
    }

    /// Assigned cluster
    #[inline]
    #[must_use]
    pub fn cluster_id(&self) -> &ClusterId {
        &self.cluster_id
    }

    /// Whether this record belongs to `cluster_id`
    #[inline]
    #[must_use]
    pub fn is_in(&self, cluster_id: &ClusterId) -> bool {
        &self.cluster_id == cluster_id
    }
}
