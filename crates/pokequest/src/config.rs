//! Runtime configuration loaded from an optional TOML file

use std::path::{Path, PathBuf};

use anyhow::Context;
use pq_data::DataPaths;
use serde::Deserialize;

/// Settings read from `--config`; every field is optional in the file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory holding the table files
    pub data_dir: PathBuf,
    pub species_file: String,
    pub spawn_file: String,
    /// Suggestions per quest
    pub count: usize,
    /// Process gender quests
    pub include_gender: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            species_file: DataPaths::SPECIES_FILE.to_string(),
            spawn_file: DataPaths::SPAWN_FILE.to_string(),
            count: pq_core::DEFAULT_LIMIT,
            include_gender: false,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {path:?}"))?;
        Self::parse(&contents).with_context(|| format!("failed to parse config {path:?}"))
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn data_paths(&self) -> DataPaths {
        DataPaths {
            species: self.data_dir.join(&self.species_file),
            spawn_rates: self.data_dir.join(&self.spawn_file),
            gender_dir: self.data_dir.clone(),
        }
    }
}
