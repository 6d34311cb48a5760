//! Album models.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One catalog entry as stored in the `album` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: i64,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

/// An album that has not been persisted yet. The id is assigned on insert.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewAlbum {
    pub title: String,
    pub artist: String,
    pub price: f64,
}

impl NewAlbum {
    pub fn new(title: impl Into<String>, artist: impl Into<String>, price: f64) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            price,
        }
    }
}

impl From<Album> for NewAlbum {
    fn from(album: Album) -> Self {
        Self {
            title: album.title,
            artist: album.artist,
            price: album.price,
        }
    }
}

impl fmt::Display for Album {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{} {} {} {}}}",
            self.id, self.title, self.artist, self.price
        )
    }
}
