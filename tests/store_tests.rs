use placebook::{
    error::PlacebookError,
    model::{Place, PlaceFields},
    storage::{BlobStore, DEFAULT_KEY, FileBlobStore, PlaceStore},
};
use tempfile::TempDir;

fn place(id: &str, name: &str, created_at: &str) -> Place {
    Place::from_record(PlaceFields {
        id: Some(id.to_string()),
        created_at: Some(created_at.to_string()),
        ..PlaceFields::named(name)
    })
    .unwrap()
}

fn file_store(temp_dir: &TempDir) -> PlaceStore<FileBlobStore> {
    PlaceStore::new(FileBlobStore::new(temp_dir.path().join("data")), DEFAULT_KEY)
}

#[test]
fn test_save_creates_blob_file() {
    let temp_dir = TempDir::new().unwrap();
    let store = file_store(&temp_dir);

    store
        .save(&[place("a1", "Hanoi", "2024-01-02T03:04:05.000Z")])
        .unwrap();

    let path = temp_dir.path().join("data").join("travelPlaces.json");
    let content = std::fs::read_to_string(path).unwrap();
    assert_eq!(
        content,
        r#"[{"id":"a1","name":"Hanoi","country":"","visit":"","landmarks":"","notes":"","createdAt":"2024-01-02T03:04:05.000Z"}]"#
    );
}

#[test]
fn test_round_trip_keeps_order_and_values() {
    let temp_dir = TempDir::new().unwrap();
    let store = file_store(&temp_dir);
    let places = vec![
        place("a1", "Hanoi", "2024-01-02T03:04:05.000Z"),
        place("b2", "Hue", "2023-05-06T07:08:09.123Z"),
    ];

    store.save(&places).unwrap();
    assert_eq!(store.try_load().unwrap(), places);
}

#[test]
fn test_missing_directory_loads_empty() {
    let temp_dir = TempDir::new().unwrap();
    let store = file_store(&temp_dir);
    assert!(store.try_load().unwrap().is_empty());
}

#[test]
fn test_invalid_json_file_is_read_error() {
    let temp_dir = TempDir::new().unwrap();
    let store = file_store(&temp_dir);
    store.blobs().set(DEFAULT_KEY, "[{\"id\": ").unwrap();

    assert!(matches!(
        store.try_load(),
        Err(PlacebookError::PersistenceRead(_))
    ));
    assert!(store.load().is_empty());
}

#[test]
fn test_record_without_name_rejects_whole_blob() {
    let temp_dir = TempDir::new().unwrap();
    let store = file_store(&temp_dir);
    store
        .blobs()
        .set(
            DEFAULT_KEY,
            r#"[{"id":"ok","name":"Hue"},{"id":"bad","name":"  "}]"#,
        )
        .unwrap();

    assert!(store.load().is_empty());
}

#[test]
fn test_sparse_records_are_normalized() {
    let temp_dir = TempDir::new().unwrap();
    let store = file_store(&temp_dir);
    store
        .blobs()
        .set(
            DEFAULT_KEY,
            r#"[{"id":" x9 ","name":" Hue ","createdAt":"2020-02-02T00:00:00Z","extra":true}]"#,
        )
        .unwrap();

    let places = store.try_load().unwrap();
    assert_eq!(places.len(), 1);
    assert_eq!(places[0].id(), "x9");
    assert_eq!(places[0].name(), "Hue");
    assert_eq!(places[0].country(), "");
    assert_eq!(places[0].created_at_iso(), "2020-02-02T00:00:00.000Z");
}

#[test]
fn test_clear_removes_file() {
    let temp_dir = TempDir::new().unwrap();
    let store = file_store(&temp_dir);
    store
        .save(&[place("a1", "Hanoi", "2024-01-02T03:04:05.000Z")])
        .unwrap();

    store.clear().unwrap();
    assert!(!temp_dir.path().join("data").join("travelPlaces.json").exists());
    assert!(store.try_load().unwrap().is_empty());

    // Clearing twice is fine
    store.clear().unwrap();
}

#[test]
fn test_custom_key_uses_own_file() {
    let temp_dir = TempDir::new().unwrap();
    let store = PlaceStore::new(FileBlobStore::new(temp_dir.path()), "trips");
    store
        .save(&[place("a1", "Hanoi", "2024-01-02T03:04:05.000Z")])
        .unwrap();

    assert!(temp_dir.path().join("trips.json").exists());
    assert!(!temp_dir.path().join("travelPlaces.json").exists());
}
