//! Common test infrastructure
//!
//! Every test gets its own database file inside a temporary directory that
//! is removed when the returned `TestDb` is dropped.

use recordings::connection::{open_connection, seed_sample_albums};
use recordings::SqliteAlbumStore;
use rusqlite::Connection;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

pub struct TestDb {
    pub conn: Arc<Mutex<Connection>>,
    pub path: PathBuf,
    _temp_dir: TempDir,
}

impl TestDb {
    pub fn empty() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("recordings.db");
        let conn = open_connection(&path).unwrap();
        Self {
            conn,
            path,
            _temp_dir: temp_dir,
        }
    }

    pub fn seeded() -> Self {
        let db = Self::empty();
        seed_sample_albums(&db.conn.lock().unwrap()).unwrap();
        db
    }

    pub fn store(&self) -> SqliteAlbumStore {
        SqliteAlbumStore::new(self.conn.clone())
    }

    pub fn album_count(&self) -> i64 {
        self.conn
            .lock()
            .unwrap()
            .query_row("SELECT COUNT(*) FROM album", [], |r| r.get(0))
            .unwrap()
    }
}
