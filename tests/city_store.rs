//! Integration tests for tracked-city persistence: default fallback,
//! write-after-mutation, and the no-op guarantees for duplicate adds and
//! absent removes.

use std::path::PathBuf;

use skycast::store::{CityStore, DEFAULT_CITIES, TrackedCities};

/// Per-test scratch file; removed on drop so runs do not interfere
struct ScratchFile {
    path: PathBuf,
}

impl ScratchFile {
    fn new(tag: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "skycast-store-{}-{tag}.json",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        Self { path }
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

#[test]
fn missing_file_falls_back_to_the_default_five_cities() {
    let scratch = ScratchFile::new("missing");
    let store = CityStore::new(&scratch.path);

    let cities = store.load();
    assert_eq!(cities.len(), DEFAULT_CITIES.len());
    for name in DEFAULT_CITIES {
        assert!(cities.contains(name), "missing default {name}");
    }
}

#[test]
fn save_and_load_round_trip_preserves_order() {
    let scratch = ScratchFile::new("roundtrip");
    let store = CityStore::new(&scratch.path);

    let mut cities = TrackedCities::empty();
    cities.add("Reykjavik");
    cities.add("Nairobi");
    cities.add("Wellington");
    store.save(&cities).unwrap();

    let loaded = store.load();
    assert_eq!(loaded, cities);
    assert_eq!(
        loaded.names(),
        [
            "Reykjavik".to_string(),
            "Nairobi".to_string(),
            "Wellington".to_string()
        ]
    );
}

#[test]
fn adding_a_present_city_changes_neither_list_nor_file() {
    let scratch = ScratchFile::new("add-noop");
    let store = CityStore::new(&scratch.path);

    let mut cities = TrackedCities::default_list();
    store.save(&cities).unwrap();
    let before = std::fs::read_to_string(&scratch.path).unwrap();

    // The no-op add reports no change, so no write happens.
    assert!(!cities.add("Tokyo"));
    assert_eq!(cities.len(), DEFAULT_CITIES.len());

    let after = std::fs::read_to_string(&scratch.path).unwrap();
    assert_eq!(before, after);
}

#[test]
fn removing_an_absent_city_is_a_noop() {
    let scratch = ScratchFile::new("remove-noop");
    let store = CityStore::new(&scratch.path);

    let mut cities = TrackedCities::default_list();
    store.save(&cities).unwrap();

    assert!(!cities.remove("Atlantis"));
    assert_eq!(cities.len(), DEFAULT_CITIES.len());

    let loaded = store.load();
    assert_eq!(loaded, cities);
}

#[test]
fn mutations_persist_after_save() {
    let scratch = ScratchFile::new("mutate");
    let store = CityStore::new(&scratch.path);

    let mut cities = store.load();
    assert!(cities.add("Lisbon"));
    assert!(cities.remove("Paris"));
    store.save(&cities).unwrap();

    let loaded = store.load();
    assert!(loaded.contains("Lisbon"));
    assert!(!loaded.contains("Paris"));
    assert_eq!(loaded.len(), 5);
}

#[test]
fn corrupt_file_degrades_to_the_default_list() {
    let scratch = ScratchFile::new("corrupt");
    std::fs::write(&scratch.path, "{not json").unwrap();

    let store = CityStore::new(&scratch.path);
    let cities = store.load();
    assert_eq!(cities, TrackedCities::default_list());
}
