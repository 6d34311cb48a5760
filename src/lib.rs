//! Recordings album catalog
//!
//! Data access for the `album` table plus the pieces the `recordings` binary
//! wires around it.

pub mod album_store;
pub mod app;
pub mod config;
pub mod connection;
pub mod sqlite_persistence;

pub use album_store::{
    Album, AlbumStore, AlbumStoreError, AlbumStoreErrorKind, NewAlbum, SqliteAlbumStore,
};
