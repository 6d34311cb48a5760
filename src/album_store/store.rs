//! SQLite-backed album store.

use super::error::AlbumStoreError;
use super::models::{Album, NewAlbum};
use super::trait_def::AlbumStore;
use rusqlite::{params, Connection, Row};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

const SELECT_BY_ARTIST: &str = "SELECT id, title, artist, price FROM album WHERE artist = ?1";
const SELECT_BY_ID: &str = "SELECT id, title, artist, price FROM album WHERE id = ?1";
const INSERT_ALBUM: &str = "INSERT INTO album (title, artist, price) VALUES (?1, ?2, ?3)";

/// Album store over a shared SQLite connection.
///
/// The connection is owned by the caller; clones of the store share it.
#[derive(Clone)]
pub struct SqliteAlbumStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteAlbumStore {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn lock(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Parse an Album from a row (id, title, artist, price).
    fn parse_album_row(row: &Row) -> rusqlite::Result<Album> {
        Ok(Album {
            id: row.get(0)?,
            title: row.get(1)?,
            artist: row.get(2)?,
            price: row.get(3)?,
        })
    }

    fn query_albums_by_artist(conn: &Connection, artist: &str) -> rusqlite::Result<Vec<Album>> {
        let mut stmt = conn.prepare_cached(SELECT_BY_ARTIST)?;
        // Rows is dropped on every return path, resetting the statement.
        let mut rows = stmt.query(params![artist])?;
        let mut albums = Vec::new();
        while let Some(row) = rows.next()? {
            albums.push(Self::parse_album_row(row)?);
        }
        Ok(albums)
    }
}

impl AlbumStore for SqliteAlbumStore {
    fn albums_by_artist(&self, artist: &str) -> Result<Vec<Album>, AlbumStoreError> {
        let conn = self.lock();
        Self::query_albums_by_artist(&conn, artist).map_err(|source| {
            AlbumStoreError::ArtistQuery {
                artist: artist.to_string(),
                source,
            }
        })
    }

    fn album_by_id(&self, id: i64) -> Result<Album, AlbumStoreError> {
        let conn = self.lock();
        let result = conn
            .prepare_cached(SELECT_BY_ID)
            .and_then(|mut stmt| stmt.query_row(params![id], Self::parse_album_row));

        match result {
            Ok(album) => Ok(album),
            Err(rusqlite::Error::QueryReturnedNoRows) => Err(AlbumStoreError::NotFound { id }),
            Err(source) => Err(AlbumStoreError::IdQuery { id, source }),
        }
    }

    fn add_album(&self, album: &NewAlbum) -> Result<i64, AlbumStoreError> {
        let conn = self.lock();
        // Statement::insert fails unless exactly one row was inserted.
        let result = conn
            .prepare_cached(INSERT_ALBUM)
            .and_then(|mut stmt| stmt.insert(params![album.title, album.artist, album.price]));

        result.map_err(|source| AlbumStoreError::Write { source })
    }
}
