//! Closed categorical enumerations for the five survey columns
//!
//! Declaration order is the canonical order: it drives `Ord`, chart
//! ordering and one-hot layout. Age buckets run youngest to oldest with
//! `unknown` last, never in lexical order.

use crate::error::RecordError;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::str::FromStr;

/// One survey column backed by a fixed enumeration
pub trait Category:
    Copy + Eq + Ord + Hash + Debug + Display + FromStr<Err = RecordError> + Send + Sync + 'static
{
    /// Column name in the population file and model artifact
    const COLUMN: &'static str;

    /// Every value, in canonical order
    const ALL: &'static [Self];

    /// Survey label exactly as it appears in source data
    fn as_str(self) -> &'static str;

    /// Position in [`Category::ALL`]
    fn ordinal(self) -> usize;
}

macro_rules! categorical {
    (
        $(#[$meta:meta])*
        $name:ident in $column:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl Category for $name {
            const COLUMN: &'static str = $column;
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            #[inline]
            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }

            #[inline]
            fn ordinal(self) -> usize {
                self as usize
            }
        }

        impl FromStr for $name {
            type Err = RecordError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value = s.trim();
                if value.is_empty() {
                    return Err(RecordError::MissingField($column));
                }
                Self::ALL
                    .iter()
                    .copied()
                    .find(|c| c.as_str() == value)
                    .ok_or_else(|| RecordError::unknown($column, value))
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

categorical! {
    /// Age bracket of the respondent
    AgeBracket in "age" {
        /// Under eighteen
        Under18 => "<18",
        /// 18 to 24
        From18To24 => "18-24",
        /// 25 to 34
        From25To34 => "25-34",
        /// 35 to 44
        From35To44 => "35-44",
        /// 45 to 54
        From45To54 => "45-54",
        /// 55 to 64
        From55To64 => "55-64",
        /// 65 and over
        From65 => ">=65",
        /// Not disclosed
        Unknown => "unknown",
    }
}

categorical! {
    /// Highest completed education level
    EduLevel in "edu_level" {
        /// Primary
        Primary => "Podstawowe",
        /// Secondary
        Secondary => "Średnie",
        /// Higher
        Higher => "Wyższe",
    }
}

categorical! {
    /// Favorite animals
    FavAnimals in "fav_animals" {
        /// No favorites
        NoFavorite => "Brak ulubionych",
        /// Dogs
        Dogs => "Psy",
        /// Cats
        Cats => "Koty",
        /// Something else
        Other => "Inne",
        /// Both cats and dogs
        CatsAndDogs => "Koty i Psy",
    }
}

categorical! {
    /// Favorite place
    FavPlace in "fav_place" {
        /// By the water
        ByTheWater => "Nad wodą",
        /// In the forest
        InTheForest => "W lesie",
        /// In the mountains
        InTheMountains => "W górach",
        /// Somewhere else
        Other => "Inne",
    }
}

categorical! {
    /// Gender of the respondent
    Gender in "gender" {
        /// Man
        Male => "Mężczyzna",
        /// Woman
        Female => "Kobieta",
    }
}
