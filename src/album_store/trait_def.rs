use super::error::AlbumStoreError;
use super::models::{Album, NewAlbum};

pub trait AlbumStore: Send + Sync {
    /// Returns all albums whose artist is exactly `artist`, in storage order.
    /// An artist with no albums yields an empty vector.
    fn albums_by_artist(&self, artist: &str) -> Result<Vec<Album>, AlbumStoreError>;

    /// Returns the album with the given id.
    /// Returns `AlbumStoreError::NotFound` if no such album exists.
    fn album_by_id(&self, id: i64) -> Result<Album, AlbumStoreError>;

    /// Persists a new album and returns the id assigned to it.
    fn add_album(&self, album: &NewAlbum) -> Result<i64, AlbumStoreError>;
}
