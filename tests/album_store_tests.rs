mod common;

use common::TestDb;
use recordings::connection::sample_albums;
use recordings::{Album, AlbumStore, AlbumStoreErrorKind, NewAlbum};

#[test]
fn test_blue_train_round_trip() {
    let db = TestDb::empty();
    let store = db.store();

    let id = store
        .add_album(&NewAlbum::new("Blue Train", "John Coltrane", 56.99))
        .unwrap();

    assert_eq!(
        store.album_by_id(id).unwrap(),
        Album {
            id,
            title: "Blue Train".to_string(),
            artist: "John Coltrane".to_string(),
            price: 56.99,
        }
    );
}

#[test]
fn test_nonexistent_artist_is_empty() {
    let db = TestDb::seeded();

    let albums = db.store().albums_by_artist("Nonexistent Artist").unwrap();
    assert!(albums.is_empty());
}

#[test]
fn test_absent_id_is_not_found() {
    let db = TestDb::seeded();

    let err = db.store().album_by_id(999999).unwrap_err();
    assert_eq!(err.kind(), AlbumStoreErrorKind::NotFound);
    assert!(err.to_string().contains("999999"));
}

#[test]
fn test_every_seeded_album_is_found_by_artist_and_id() {
    let db = TestDb::seeded();
    let store = db.store();

    for (index, expected) in sample_albums().into_iter().enumerate() {
        let id = index as i64 + 1;
        let album = store.album_by_id(id).unwrap();
        assert_eq!(NewAlbum::from(album.clone()), expected);

        let by_artist = store.albums_by_artist(&expected.artist).unwrap();
        assert!(by_artist.contains(&album));
        assert!(by_artist.iter().all(|a| a.artist == expected.artist));
    }

    assert_eq!(store.albums_by_artist("John Coltrane").unwrap().len(), 2);
    assert_eq!(store.albums_by_artist("Gerry Mulligan").unwrap().len(), 1);
}

#[test]
fn test_repeated_insert_creates_distinct_rows() {
    let db = TestDb::seeded();
    let store = db.store();
    let album = NewAlbum::new("The Modern Sound of Betty Carter", "Betty Carter", 49.99);

    let first = store.add_album(&album).unwrap();
    let second = store.add_album(&album).unwrap();

    assert_ne!(first, second);
    assert_eq!(db.album_count(), 6);

    let albums = store.albums_by_artist("Betty Carter").unwrap();
    assert_eq!(albums.len(), 2);
    assert!(albums.iter().any(|a| a.id == first));
    assert!(albums.iter().any(|a| a.id == second));
}

#[test]
fn test_fetched_album_can_be_reinserted_with_a_new_id() {
    let db = TestDb::seeded();
    let store = db.store();

    let jeru = store.album_by_id(3).unwrap();
    let copy_id = store.add_album(&NewAlbum::from(jeru.clone())).unwrap();

    assert_ne!(copy_id, jeru.id);
    let copy = store.album_by_id(copy_id).unwrap();
    assert_eq!(copy.title, jeru.title);
    assert_eq!(copy.artist, jeru.artist);
    assert_eq!(copy.price, jeru.price);
}

#[test]
fn test_injection_shaped_values_are_bound_literally() {
    let db = TestDb::seeded();
    let store = db.store();

    let sneaky_artist = "x' OR '1'='1";
    assert!(store.albums_by_artist(sneaky_artist).unwrap().is_empty());

    let dropper = "Bobby'); DROP TABLE album; --";
    let id = store
        .add_album(&NewAlbum::new(dropper, dropper, 1.0))
        .unwrap();

    assert_eq!(db.album_count(), 5);
    let album = store.album_by_id(id).unwrap();
    assert_eq!(album.title, dropper);
    assert_eq!(store.albums_by_artist(dropper).unwrap(), vec![album]);
}

#[test]
fn test_rows_survive_reopen() {
    let db = TestDb::empty();
    let id = db
        .store()
        .add_album(&NewAlbum::new("Giant Steps", "John Coltrane", 63.99))
        .unwrap();

    let reopened = recordings::connection::open_connection(&db.path).unwrap();
    let store = recordings::SqliteAlbumStore::new(reopened);
    assert_eq!(store.album_by_id(id).unwrap().title, "Giant Steps");
}
