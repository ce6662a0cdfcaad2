//! Runtime settings for the `catalog-import` binary.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use thiserror::Error;

use crate::forms::categories::CreateCategoryForm;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to load settings: {0}")]
    Config(#[from] ConfigError),
    #[error("no seed file configured, pass --seed or set `seed_path` / CATALOG_SEED_PATH")]
    MissingSeedPath,
}

/// Settings layered from defaults, an optional YAML file and `CATALOG_*`
/// environment variables (highest priority).
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub log_level: String,
    pub seed_path: Option<PathBuf>,
}

impl Settings {
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        let mut builder = Config::builder().set_default("log_level", "info")?;
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }
        let settings: Settings = builder
            .add_source(Environment::with_prefix("CATALOG"))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    pub fn seed_path(&self) -> Result<&Path, SettingsError> {
        self.seed_path
            .as_deref()
            .ok_or(SettingsError::MissingSeedPath)
    }
}

/// Categories to import, read from a YAML file with a top-level
/// `categories` list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedFile {
    #[serde(default)]
    pub categories: Vec<CreateCategoryForm>,
}

impl SeedFile {
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let seed: SeedFile = Config::builder()
            .add_source(File::from(path).required(true))
            .build()?
            .try_deserialize()?;
        Ok(seed)
    }
}
