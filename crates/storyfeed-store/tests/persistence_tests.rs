use std::sync::Arc;
use storyfeed_store::{JsonFileStore, KeyValueStore, PersistedCell, StoreHandle};

#[test]
fn file_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    {
        let store = JsonFileStore::open(&path).unwrap();
        store.set("search", "Redux").unwrap();
        store.set("theme", "dark").unwrap();
    }

    let reopened = JsonFileStore::open(&path).unwrap();
    assert_eq!(reopened.get("search").as_deref(), Some("Redux"));
    assert_eq!(reopened.get("theme").as_deref(), Some("dark"));
}

#[test]
fn cell_over_file_store_seeds_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    {
        let store: StoreHandle = Arc::new(JsonFileStore::open(&path).unwrap());
        let mut cell = PersistedCell::new(store, "search", "");
        cell.set("Redux");
    }

    // A fresh cell over a fresh store handle sees the persisted value, not
    // the fallback.
    let store: StoreHandle = Arc::new(JsonFileStore::open(&path).unwrap());
    let cell = PersistedCell::new(store, "search", "React");
    assert_eq!(cell.get(), "Redux");
}
