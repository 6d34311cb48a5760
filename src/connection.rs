//! Opens the recordings database and prepares it for the album store.

use crate::album_store::{NewAlbum, ALBUM_TABLE, ALBUM_VERSIONED_SCHEMAS};
use crate::sqlite_persistence::VersionedSchema;
use anyhow::{bail, Context, Result};
use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

/// Opens (or creates) the database at `db_path`, pings it and makes sure the
/// album schema is present.
pub fn open_connection<P: AsRef<Path>>(db_path: P) -> Result<Arc<Mutex<Connection>>> {
    let db_path = db_path.as_ref();
    info!("Opening SQLite recordings database at {:?}...", db_path);

    let conn = Connection::open_with_flags(
        db_path,
        rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE
            | rusqlite::OpenFlags::SQLITE_OPEN_CREATE
            | rusqlite::OpenFlags::SQLITE_OPEN_URI
            | rusqlite::OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .with_context(|| format!("Failed to open recordings database {:?}", db_path))?;

    prepare(conn)
}

/// Same as `open_connection`, on a private in-memory database.
pub fn open_in_memory() -> Result<Arc<Mutex<Connection>>> {
    let conn = Connection::open_in_memory().context("Failed to open in-memory database")?;
    prepare(conn)
}

fn prepare(conn: Connection) -> Result<Arc<Mutex<Connection>>> {
    ping(&conn)?;
    ensure_schema(&conn)?;
    Ok(Arc::new(Mutex::new(conn)))
}

fn ping(conn: &Connection) -> Result<()> {
    let one: i64 = conn
        .query_row("SELECT 1", [], |row| row.get(0))
        .context("Database ping failed")?;
    if one != 1 {
        bail!("Database ping returned {} instead of 1", one);
    }
    Ok(())
}

fn ensure_schema(conn: &Connection) -> Result<()> {
    let latest_version = ALBUM_VERSIONED_SCHEMAS.len() - 1;
    let latest_schema = &ALBUM_VERSIONED_SCHEMAS[latest_version];

    let table_count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'",
        [],
        |r| r.get(0),
    )?;

    if table_count == 0 {
        info!("Creating album db schema at version {}", latest_version);
        return latest_schema.create(conn);
    }

    match VersionedSchema::version_of(conn)? {
        Some(version) if version > latest_version => {
            bail!("Database version {} is too new", version)
        }
        Some(_) => {}
        None => warn!("Database has no schema version, validating album table as is"),
    }

    latest_schema
        .validate(conn)
        .context("Existing database does not match the album schema")
}

const SAMPLE_ALBUMS: &[(&str, &str, f64)] = &[
    ("Blue Train", "John Coltrane", 56.99),
    ("Giant Steps", "John Coltrane", 63.99),
    ("Jeru", "Gerry Mulligan", 17.99),
    ("Sarah Vaughan", "Sarah Vaughan", 34.98),
];

/// The sample catalog inserted by `seed_sample_albums`, in insertion order.
pub fn sample_albums() -> Vec<NewAlbum> {
    SAMPLE_ALBUMS
        .iter()
        .map(|(title, artist, price)| NewAlbum::new(*title, *artist, *price))
        .collect()
}

/// Inserts the sample catalog if the album table is empty.
///
/// Returns the number of inserted albums.
pub fn seed_sample_albums(conn: &Connection) -> Result<usize> {
    let existing: i64 = conn.query_row(
        &format!("SELECT COUNT(*) FROM {}", ALBUM_TABLE.name),
        [],
        |r| r.get(0),
    )?;
    if existing > 0 {
        info!("Album table already has {} rows, skipping seed", existing);
        return Ok(0);
    }

    let mut stmt = conn.prepare(&format!(
        "INSERT INTO {} (title, artist, price) VALUES (?1, ?2, ?3)",
        ALBUM_TABLE.name
    ))?;
    let albums = sample_albums();
    for album in &albums {
        stmt.execute(params![album.title, album.artist, album.price])
            .with_context(|| format!("Failed to seed album {:?}", album.title))?;
    }
    info!("Seeded {} sample albums", albums.len());
    Ok(albums.len())
}
