mod file_config;

pub use file_config::{FileConfig, NewAlbumConfig};

use crate::album_store::NewAlbum;
use anyhow::{anyhow, Result};
use clap::ValueEnum;
use std::path::PathBuf;

pub const DEFAULT_ARTIST: &str = "John Coltrane";
pub const DEFAULT_ALBUM_ID: i64 = 2;
pub const DEFAULT_NEW_ALBUM_TITLE: &str = "The Modern Sound of Betty Carter";
pub const DEFAULT_NEW_ALBUM_ARTIST: &str = "Betty Carter";
pub const DEFAULT_NEW_ALBUM_PRICE: f64 = 49.99;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn parse_output_format(s: &str) -> Result<OutputFormat> {
    OutputFormat::from_str(s, true).map_err(|_| anyhow!("Unknown output format: {}", s))
}

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub db_path: Option<PathBuf>,
    pub seed: bool,
    pub artist: String,
    pub album_id: i64,
    pub new_album_title: String,
    pub new_album_artist: String,
    pub new_album_price: f64,
    pub output: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            seed: false,
            artist: DEFAULT_ARTIST.to_string(),
            album_id: DEFAULT_ALBUM_ID,
            new_album_title: DEFAULT_NEW_ALBUM_TITLE.to_string(),
            new_album_artist: DEFAULT_NEW_ALBUM_ARTIST.to_string(),
            new_album_price: DEFAULT_NEW_ALBUM_PRICE,
            output: OutputFormat::Text,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub seed: bool,
    pub output: OutputFormat,
    pub plan: RunPlan,
}

/// The three queries a run performs.
#[derive(Debug, Clone, PartialEq)]
pub struct RunPlan {
    pub artist: String,
    pub album_id: i64,
    pub new_album: NewAlbum,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let db_path = file
            .db_path
            .map(PathBuf::from)
            .or_else(|| cli.db_path.clone())
            .ok_or_else(|| {
                anyhow!(
                    "db_path must be specified as an argument, via --db-path, RECORDINGS_DB or in config file"
                )
            })?;

        let seed = file.seed.unwrap_or(cli.seed);

        let output = match file.output {
            Some(s) => parse_output_format(&s)?,
            None => cli.output,
        };

        let new_album_file = file.new_album.unwrap_or_default();
        let new_album = NewAlbum {
            title: new_album_file
                .title
                .unwrap_or_else(|| cli.new_album_title.clone()),
            artist: new_album_file
                .artist
                .unwrap_or_else(|| cli.new_album_artist.clone()),
            price: new_album_file.price.unwrap_or(cli.new_album_price),
        };

        let plan = RunPlan {
            artist: file.artist.unwrap_or_else(|| cli.artist.clone()),
            album_id: file.album_id.unwrap_or(cli.album_id),
            new_album,
        };

        Ok(Self {
            db_path,
            seed,
            output,
            plan,
        })
    }
}
