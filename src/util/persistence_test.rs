use super::*;

#[test]
fn memory_store_starts_empty() {
    let store = MemoryStore::default();
    assert_eq!(store.load("theme"), None);
    assert_eq!(store.writes(), 0);
}

#[test]
fn memory_store_save_overwrites_and_counts() {
    let mut store = MemoryStore::default();
    store.save("theme", "light");
    store.save("theme", "dark");
    assert_eq!(store.load("theme").as_deref(), Some("dark"));
    assert_eq!(store.writes(), 2);
}

#[test]
fn memory_store_with_entry_is_seeded_without_counting() {
    let store = MemoryStore::with_entry("theme", "light");
    assert_eq!(store.load("theme").as_deref(), Some("light"));
    assert_eq!(store.writes(), 0);
}

#[cfg(not(feature = "csr"))]
#[test]
fn local_store_is_noop_off_browser() {
    let mut store = LocalStore;
    store.save("theme", "light");
    assert_eq!(store.load("theme"), None);
}
