//! Testing utilities for Cohort workspace
//!
//! Shared fixtures: a small model covering the full survey vocabulary, a
//! deterministic population, cluster metadata, and a temporary directory
//! holding all three as files.

#![allow(missing_docs)]

use cohort_model::{FeatureSpec, ModelArtifact, OneHotEncoder, UnknownPolicy};
use cohort_types::{
    AgeBracket, Category, ClusterId, ClusterProfile, EduLevel, FavAnimals, FavPlace, Gender,
    SurveyRecord, COLUMNS,
};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tempfile::TempDir;

pub const MODEL_NAME: &str = "sample_clustering_pipeline";
pub const DATA_FILE: &str = "survey.csv";
pub const METADATA_FILE: &str = "clusters.json";

/// Records the sample model's centroids are built from; prototype `i`
/// is the center of `Cluster i`.
pub const PROTOTYPES: [SurveyRecord; 3] = [
    SurveyRecord::new(
        AgeBracket::From25To34,
        EduLevel::Higher,
        FavAnimals::Dogs,
        FavPlace::InTheMountains,
        Gender::Female,
    ),
    SurveyRecord::new(
        AgeBracket::From18To24,
        EduLevel::Secondary,
        FavAnimals::Cats,
        FavPlace::InTheForest,
        Gender::Male,
    ),
    SurveyRecord::new(
        AgeBracket::From45To54,
        EduLevel::Primary,
        FavAnimals::NoFavorite,
        FavPlace::ByTheWater,
        Gender::Male,
    ),
];

const PROFILE_NAMES: [(&str, &str); 3] = [
    ("Górscy Mędrcy", "Wykształceni miłośnicy gór i psów."),
    ("Leśni Młodzi Odkrywcy", "Młodzi kociarze spędzający czas w lesie."),
    ("Wodni Samotnicy", "Bez ulubionych zwierząt, najlepiej nad wodą."),
];

fn label(index: usize) -> ClusterId {
    ClusterId::new(format!("Cluster {index}"))
}

fn feature<C: Category>() -> FeatureSpec {
    FeatureSpec::new(C::COLUMN, C::ALL.iter().map(|c| c.as_str()))
}

/// One feature per survey column, covering every category
pub fn full_vocabulary() -> Vec<FeatureSpec> {
    vec![
        feature::<AgeBracket>(),
        feature::<EduLevel>(),
        feature::<FavAnimals>(),
        feature::<FavPlace>(),
        feature::<Gender>(),
    ]
}

/// Model artifact with one centroid per entry of `prototypes`
pub fn artifact_from_prototypes(prototypes: &[SurveyRecord], policy: UnknownPolicy) -> ModelArtifact {
    let encoder = OneHotEncoder::new(full_vocabulary(), policy).expect("valid vocabulary");
    let centroids = prototypes
        .iter()
        .map(|p| encoder.encode(p).expect("prototype in vocabulary"))
        .collect();

    ModelArtifact {
        name: MODEL_NAME.to_string(),
        label_prefix: "Cluster".to_string(),
        handle_unknown: policy,
        features: full_vocabulary(),
        centroids,
    }
}

/// Three-cluster model over the full vocabulary
pub fn sample_artifact() -> ModelArtifact {
    artifact_from_prototypes(&PROTOTYPES, UnknownPolicy::Error)
}

/// Profiles for `Cluster 0` .. `Cluster 2`
pub fn sample_profiles() -> BTreeMap<ClusterId, ClusterProfile> {
    PROFILE_NAMES
        .iter()
        .enumerate()
        .map(|(i, (name, description))| (label(i), ClusterProfile::new(*name, *description)))
        .collect()
}

/// Deterministic population touching every category of every column
pub fn sample_population() -> Vec<SurveyRecord> {
    let mut records: Vec<SurveyRecord> = (0..60)
        .map(|i| {
            SurveyRecord::new(
                AgeBracket::ALL[i % AgeBracket::ALL.len()],
                EduLevel::ALL[i % EduLevel::ALL.len()],
                FavAnimals::ALL[(i / 2) % FavAnimals::ALL.len()],
                FavPlace::ALL[(i / 3) % FavPlace::ALL.len()],
                Gender::ALL[(i / 5) % Gender::ALL.len()],
            )
        })
        .collect();
    records.extend(PROTOTYPES);
    records
}

/// Population file text, with an extra leading `id` column
pub fn population_csv(records: &[SurveyRecord]) -> String {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());

    let mut header = vec!["id"];
    header.extend(COLUMNS);
    writer.write_record(&header).expect("write header");

    for (i, record) in records.iter().enumerate() {
        let id = i.to_string();
        let mut row = vec![id.as_str()];
        row.extend(COLUMNS.iter().map(|c| record.get(c).unwrap_or_default()));
        writer.write_record(&row).expect("write row");
    }

    let bytes = writer.into_inner().expect("flush csv");
    String::from_utf8(bytes).expect("utf-8 csv")
}

/// Cluster metadata file text
pub fn catalog_json(profiles: &BTreeMap<ClusterId, ClusterProfile>) -> String {
    serde_json::to_string_pretty(profiles).expect("serialize profiles")
}

/// Temporary directory holding a model, a population and cluster metadata
#[derive(Debug)]
pub struct TestWorkspace {
    dir: TempDir,
    artifact: ModelArtifact,
    records: Vec<SurveyRecord>,
    profiles: BTreeMap<ClusterId, ClusterProfile>,
}

impl TestWorkspace {
    /// Workspace with the sample model, population and metadata
    pub fn sample() -> Self {
        let workspace = Self {
            dir: tempfile::tempdir().expect("create temp dir"),
            artifact: sample_artifact(),
            records: sample_population(),
            profiles: sample_profiles(),
        };
        workspace.write_model();
        workspace.write_population();
        workspace.write_metadata();
        workspace
    }

    /// Drop one cluster profile from the metadata file
    pub fn without_profile(mut self, cluster: &str) -> Self {
        self.profiles.remove(cluster);
        self.write_metadata();
        self
    }

    /// Replace the population file
    pub fn with_population(mut self, records: Vec<SurveyRecord>) -> Self {
        self.records = records;
        self.write_population();
        self
    }

    /// Replace the model artifact
    pub fn with_artifact(mut self, artifact: ModelArtifact) -> Self {
        self.artifact = artifact;
        self.write_model();
        self
    }

    /// Write an arbitrary file into the workspace
    pub fn write(&self, name: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, content).expect("write fixture file");
        path
    }

    fn write_model(&self) {
        let bytes = self.artifact.to_json_vec().expect("serialize artifact");
        self.write(&format!("{MODEL_NAME}.json"), bytes);
    }

    fn write_population(&self) {
        self.write(DATA_FILE, population_csv(&self.records));
    }

    fn write_metadata(&self) {
        self.write(METADATA_FILE, catalog_json(&self.profiles));
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn data_path(&self) -> PathBuf {
        self.path(DATA_FILE)
    }

    pub fn model_dir(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    pub fn model_name(&self) -> &'static str {
        MODEL_NAME
    }

    pub fn metadata_path(&self) -> PathBuf {
        self.path(METADATA_FILE)
    }

    pub fn population_size(&self) -> usize {
        self.records.len()
    }

    pub fn cluster_count(&self) -> usize {
        self.artifact.centroids.len()
    }
}
