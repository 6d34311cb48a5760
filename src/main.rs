use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use recordings::app;
use recordings::config::{
    AppConfig, CliConfig, FileConfig, OutputFormat, DEFAULT_ALBUM_ID, DEFAULT_ARTIST,
    DEFAULT_NEW_ALBUM_ARTIST, DEFAULT_NEW_ALBUM_PRICE, DEFAULT_NEW_ALBUM_TITLE,
};
use recordings::connection::{open_connection, seed_sample_albums};
use recordings::SqliteAlbumStore;

fn parse_path(s: &str) -> Result<PathBuf> {
    let original_path = PathBuf::from(s);
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to the SQLite recordings database file. Takes precedence over --db-path.
    #[clap(value_parser = parse_path)]
    pub db_path: Option<PathBuf>,

    /// Path to the SQLite recordings database file, as a flag.
    #[clap(long = "db-path", value_parser = parse_path, env = "RECORDINGS_DB")]
    pub db_path_flag: Option<PathBuf>,

    /// Path to a TOML config file. Its values override the CLI ones.
    #[clap(long, value_parser = parse_path, env = "RECORDINGS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Insert the sample albums if the album table is empty.
    #[clap(long)]
    pub seed: bool,

    /// Artist whose albums are listed.
    #[clap(long, default_value = DEFAULT_ARTIST)]
    pub artist: String,

    /// Id of the album to look up.
    #[clap(long, default_value_t = DEFAULT_ALBUM_ID)]
    pub album_id: i64,

    /// Title of the album to add.
    #[clap(long, default_value = DEFAULT_NEW_ALBUM_TITLE)]
    pub title: String,

    /// Artist of the album to add.
    #[clap(long, default_value = DEFAULT_NEW_ALBUM_ARTIST)]
    pub new_artist: String,

    /// Price of the album to add.
    #[clap(long, default_value_t = DEFAULT_NEW_ALBUM_PRICE)]
    pub price: f64,

    /// How results are printed.
    #[clap(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

impl CliArgs {
    fn to_cli_config(&self) -> CliConfig {
        CliConfig {
            db_path: self.db_path.clone().or_else(|| self.db_path_flag.clone()),
            seed: self.seed,
            artist: self.artist.clone(),
            album_id: self.album_id,
            new_album_title: self.title.clone(),
            new_album_artist: self.new_artist.clone(),
            new_album_price: self.price,
            output: self.output,
        }
    }
}

fn run(cli_args: CliArgs) -> Result<()> {
    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading config file {:?}", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };
    let config = AppConfig::resolve(&cli_args.to_cli_config(), file_config)?;

    let conn = open_connection(&config.db_path)?;
    if config.seed {
        let conn = conn.lock().unwrap_or_else(|e| e.into_inner());
        seed_sample_albums(&conn).context("Failed to seed sample albums")?;
    }
    println!("Connected!");

    let store = SqliteAlbumStore::new(conn);
    let stdout = std::io::stdout();
    app::run(&store, &config.plan, config.output, &mut stdout.lock())
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    run(cli_args)
}
