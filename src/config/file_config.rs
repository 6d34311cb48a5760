use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    pub db_path: Option<String>,
    pub seed: Option<bool>,
    pub artist: Option<String>,
    pub album_id: Option<i64>,
    pub output: Option<String>,

    pub new_album: Option<NewAlbumConfig>,
}

/// The album added by a run. Missing fields fall back to the CLI values.
#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct NewAlbumConfig {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub price: Option<f64>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::parse(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
