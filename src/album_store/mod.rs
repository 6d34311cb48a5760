//! Album catalog data access.
//!
//! Maps `Album` values to parameterized statements against the `album` table
//! and back, classifying failures into `AlbumStoreError` kinds.

mod error;
mod models;
mod schema;
mod store;
mod trait_def;

pub use error::{AlbumStoreError, AlbumStoreErrorKind};
pub use models::{Album, NewAlbum};
pub use schema::{ALBUM_TABLE, ALBUM_VERSIONED_SCHEMAS};
pub use store::SqliteAlbumStore;
pub use trait_def::AlbumStore;
