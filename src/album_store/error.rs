use thiserror::Error;

/// Broad classification of an `AlbumStoreError`, for callers that need to
/// treat an absent album differently from a broken query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlbumStoreErrorKind {
    Query,
    NotFound,
    Write,
}

/// Errors returned by `AlbumStore` operations.
#[derive(Debug, Error)]
pub enum AlbumStoreError {
    #[error("albums by artist {artist:?}: {source}")]
    ArtistQuery {
        artist: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("album by id {id}: {source}")]
    IdQuery {
        id: i64,
        #[source]
        source: rusqlite::Error,
    },

    #[error("album by id {id}: no such album")]
    NotFound { id: i64 },

    #[error("add album: {source}")]
    Write {
        #[source]
        source: rusqlite::Error,
    },
}

impl AlbumStoreError {
    pub fn kind(&self) -> AlbumStoreErrorKind {
        match self {
            AlbumStoreError::ArtistQuery { .. } | AlbumStoreError::IdQuery { .. } => {
                AlbumStoreErrorKind::Query
            }
            AlbumStoreError::NotFound { .. } => AlbumStoreErrorKind::NotFound,
            AlbumStoreError::Write { .. } => AlbumStoreErrorKind::Write,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == AlbumStoreErrorKind::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn messages_identify_operation_and_key() {
        let err = AlbumStoreError::ArtistQuery {
            artist: "Betty Carter".to_string(),
            source: rusqlite::Error::InvalidQuery,
        };
        assert!(err.to_string().starts_with("albums by artist \"Betty Carter\": "));
        assert_eq!(err.kind(), AlbumStoreErrorKind::Query);

        let err = AlbumStoreError::NotFound { id: 999999 };
        assert_eq!(err.to_string(), "album by id 999999: no such album");
        assert!(err.is_not_found());
        assert!(err.source().is_none());
    }

    #[test]
    fn source_is_kept() {
        let err = AlbumStoreError::Write {
            source: rusqlite::Error::StatementChangedRows(0),
        };
        assert_eq!(err.kind(), AlbumStoreErrorKind::Write);
        assert!(!err.is_not_found());
        assert!(matches!(
            err.source()
                .and_then(|s| s.downcast_ref::<rusqlite::Error>()),
            Some(rusqlite::Error::StatementChangedRows(0))
        ));
    }
}
