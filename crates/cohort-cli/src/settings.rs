//! Configuration resolution: defaults, then config file, then flags

use anyhow::Context;
use clap::ArgMatches;
use cohort_core::CohortConfig;
use cohort_types::RawSurveyRecord;
use std::path::PathBuf;

/// Resolve configuration for one invocation
///
/// # Errors
/// If `--config` names a file that cannot be read or parsed
pub fn resolve(args: &ArgMatches) -> anyhow::Result<CohortConfig> {
    let mut config = match args.get_one::<PathBuf>("config") {
        Some(path) => CohortConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => CohortConfig::default(),
    };

    if let Some(path) = args.get_one::<PathBuf>("data") {
        config = config.with_data_path(path);
    }
    if let Some(dir) = args.get_one::<PathBuf>("model-dir") {
        config = config.with_model_dir(dir);
    }
    if let Some(name) = args.get_one::<String>("model-name") {
        config = config.with_model_name(name);
    }
    if let Some(path) = args.get_one::<PathBuf>("metadata") {
        config = config.with_metadata_path(path);
    }

    tracing::debug!(?config, "configuration resolved");
    Ok(config)
}

/// Survey answers given on the command line, unvalidated
#[must_use]
pub fn survey_answers(args: &ArgMatches) -> RawSurveyRecord {
    let value = |id: &str| args.get_one::<String>(id).cloned();
    RawSurveyRecord {
        age: value("age"),
        edu_level: value("edu_level"),
        fav_animals: value("fav_animals"),
        fav_place: value("fav_place"),
        gender: value("gender"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli;

    fn matches(argv: &[&str]) -> ArgMatches {
        let matches = cli::build().try_get_matches_from(argv).unwrap();
        matches.subcommand().unwrap().1.clone()
    }

    #[test]
    fn flags_override_defaults() {
        let args = matches(&["cohort", "check", "--model-dir", "models", "--model-name", "v3"]);
        let config = resolve(&args).unwrap();
        assert_eq!(config.model_path(), PathBuf::from("models/v3.json"));
        assert_eq!(config.data_path, CohortConfig::default().data_path);
    }

    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("cohort.toml");
        std::fs::write(&file, "model_name = \"from_file\"\ndata_path = \"/srv/survey.csv\"\n").unwrap();

        let args = matches(&[
            "cohort",
            "clusters",
            "--config",
            file.to_str().unwrap(),
            "--data",
            "/tmp/other.csv",
        ]);
        let config = resolve(&args).unwrap();
        assert_eq!(config.model_name, "from_file");
        assert_eq!(config.data_path, PathBuf::from("/tmp/other.csv"));
    }

    #[test]
    fn unreadable_config_is_an_error() {
        let args = matches(&["cohort", "check", "--config", "/no/such/cohort.toml"]);
        let err = resolve(&args).unwrap_err();
        assert!(err.to_string().contains("/no/such/cohort.toml"));
    }

    #[test]
    fn collects_survey_answers() {
        let args = matches(&["cohort", "report", "--age", "<18", "--gender", "Kobieta"]);
        let raw = survey_answers(&args);
        assert_eq!(raw.age.as_deref(), Some("<18"));
        assert_eq!(raw.gender.as_deref(), Some("Kobieta"));
        assert_eq!(raw.edu_level, None);
    }
}
