use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::fetcher::{DEFAULT_DB_KEY, DEFAULT_ENDPOINT};
use crate::storage::DEFAULT_EXPORT_FILE;
use crate::{Error, Result};

const DATABASE_FILE: &str = ".ads_ref.db";
const CONFIG_FILE: &str = ".ads_ref.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AdsRefConfig {
    pub database: Option<String>,
    pub endpoint: Option<String>,
    pub db_key: Option<String>,
    pub output: Option<String>,
}

impl AdsRefConfig {
    /// Database path: explicit override, then config, then `$HOME/.ads_ref.db`
    pub fn database_path(&self, cli: Option<&Path>) -> Result<PathBuf> {
        match (cli, &self.database) {
            (Some(path), _) => Ok(path.to_path_buf()),
            (None, Some(path)) => Ok(PathBuf::from(path)),
            (None, None) => default_database_path(),
        }
    }

    /// Export path: explicit override, then config, then `ref.bib`
    pub fn output_path(&self, cli: Option<&Path>) -> PathBuf {
        cli.map(Path::to_path_buf)
            .or_else(|| self.output.as_ref().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_FILE))
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    pub fn db_key(&self) -> &str {
        self.db_key.as_deref().unwrap_or(DEFAULT_DB_KEY)
    }
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| Error::Config("cannot determine home directory".to_string()))
}

pub fn default_database_path() -> Result<PathBuf> {
    Ok(home_dir()?.join(DATABASE_FILE))
}

pub fn default_config_path() -> Result<PathBuf> {
    Ok(home_dir()?.join(CONFIG_FILE))
}

/// Load the config file; a missing file yields the defaults.
pub fn load_config(path: Option<&Path>) -> Result<AdsRefConfig> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => default_config_path()?,
    };
    if !path.exists() {
        return Ok(AdsRefConfig::default());
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: AdsRefConfig = toml::from_str(&contents)
        .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}
