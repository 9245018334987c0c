//! Configuration for the dashboard core

use crate::error::ConfigError;
use cohort_data::{model_path, DEFAULT_MAX_FILE_SIZE, MIN_CACHE_CAPACITY};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default population file
pub const DEFAULT_DATA_PATH: &str = "welcome_survey_simple_v2.csv";
/// Default model name
pub const DEFAULT_MODEL_NAME: &str = "welcome_survey_clustering_pipeline_v2";
/// Default cluster metadata file
pub const DEFAULT_METADATA_PATH: &str = "welcome_survey_cluster_names_and_descriptions_v2.json";

/// Locations of the backing files and cache limits
///
/// Every field is optional in the TOML form; missing fields take defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CohortConfig {
    /// Semicolon-separated population file
    pub data_path: PathBuf,
    /// Directory holding model artifacts
    pub model_dir: PathBuf,
    /// Model artifact name, without extension
    pub model_name: String,
    /// Cluster names and descriptions
    pub metadata_path: PathBuf,
    /// Maximum cached resources, at least [`MIN_CACHE_CAPACITY`]
    pub cache_capacity: u64,
    /// Maximum size of any backing file (bytes)
    pub max_file_size: usize,
}

impl Default for CohortConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            model_dir: PathBuf::from("."),
            model_name: DEFAULT_MODEL_NAME.to_string(),
            metadata_path: PathBuf::from(DEFAULT_METADATA_PATH),
            cache_capacity: 16,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

impl CohortConfig {
    /// Parse config from TOML text
    ///
    /// # Errors
    /// - `ConfigError::Parse` if the text is not valid for the schema
    /// - `ConfigError::CacheCapacity` if `cache_capacity` is too small
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        if config.cache_capacity < MIN_CACHE_CAPACITY {
            return Err(ConfigError::CacheCapacity {
                capacity: config.cache_capacity,
                min: MIN_CACHE_CAPACITY,
            });
        }
        Ok(config)
    }

    /// Read config from a TOML file
    ///
    /// Relative paths in the file are resolved against the file's directory.
    ///
    /// # Errors
    /// - `ConfigError::Io` if the file cannot be read
    /// - `ConfigError::Parse` if it is not valid
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;

        match path.parent() {
            Some(base) if !base.as_os_str().is_empty() => Ok(config.relative_to(base)),
            _ => Ok(config),
        }
    }

    fn relative_to(mut self, base: &Path) -> Self {
        for path in [&mut self.data_path, &mut self.model_dir, &mut self.metadata_path] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
        self
    }

    /// Full path of the model artifact
    #[inline]
    #[must_use]
    pub fn model_path(&self) -> PathBuf {
        model_path(&self.model_dir, &self.model_name)
    }

    /// Set population file
    #[must_use]
    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }

    /// Set model directory
    #[must_use]
    pub fn with_model_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.model_dir = dir.into();
        self
    }

    /// Set model name
    #[must_use]
    pub fn with_model_name(mut self, name: impl Into<String>) -> Self {
        self.model_name = name.into();
        self
    }

    /// Set cluster metadata file
    #[must_use]
    pub fn with_metadata_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.metadata_path = path.into();
        self
    }

    /// Set cache capacity, raised to [`MIN_CACHE_CAPACITY`] if smaller
    #[must_use]
    pub fn with_cache_capacity(mut self, capacity: u64) -> Self {
        self.cache_capacity = capacity.max(MIN_CACHE_CAPACITY);
        self
    }

    /// Set maximum file size
    #[must_use]
    pub fn with_max_file_size(mut self, bytes: usize) -> Self {
        self.max_file_size = bytes;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_published_files() {
        let config = CohortConfig::default();
        assert_eq!(config.data_path, PathBuf::from("welcome_survey_simple_v2.csv"));
        assert_eq!(
            config.model_path(),
            PathBuf::from("./welcome_survey_clustering_pipeline_v2.json")
        );
        assert_eq!(config.cache_capacity, 16);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = CohortConfig::from_toml_str(
            r#"
            model_dir = "models"
            cache_capacity = 4
            "#,
        )
        .unwrap();
        assert_eq!(config.model_dir, PathBuf::from("models"));
        assert_eq!(config.cache_capacity, 4);
        assert_eq!(config.model_name, DEFAULT_MODEL_NAME);
    }

    #[test]
    fn rejects_wrong_types() {
        let err = CohortConfig::from_toml_str("cache_capacity = \"many\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn rejects_cache_too_small_for_all_resources() {
        let err = CohortConfig::from_toml_str("cache_capacity = 2").unwrap_err();
        assert!(matches!(err, ConfigError::CacheCapacity { capacity: 2, min: 3 }));
        assert!(CohortConfig::from_toml_str("cache_capacity = 3").is_ok());
    }

    #[test]
    fn file_paths_resolve_against_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cohort.toml");
        std::fs::write(&path, "data_path = \"survey.csv\"\nmetadata_path = \"/abs/meta.json\"\n").unwrap();

        let config = CohortConfig::from_file(&path).unwrap();
        assert_eq!(config.data_path, dir.path().join("survey.csv"));
        assert_eq!(config.metadata_path, PathBuf::from("/abs/meta.json"));
        assert_eq!(config.model_dir, dir.path().join("."));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = CohortConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn builder_overrides() {
        let config = CohortConfig::default()
            .with_data_path("a.csv")
            .with_model_dir("m")
            .with_model_name("v3")
            .with_metadata_path("b.json")
            .with_cache_capacity(2)
            .with_max_file_size(1024);
        assert_eq!(config.model_path(), PathBuf::from("m/v3.json"));
        assert_eq!(config.metadata_path, PathBuf::from("b.json"));
        assert_eq!(config.cache_capacity, MIN_CACHE_CAPACITY);
        assert_eq!(config.max_file_size, 1024);
    }
}
