use super::*;

// =============================================================
// Slot codec
// =============================================================

#[test]
fn decode_ids_absent_slot_is_empty() {
    assert!(decode_ids(None).is_empty());
}

#[test]
fn decode_ids_reads_json_array() {
    assert_eq!(decode_ids(Some("[3,1,2]")), vec![3, 1, 2]);
}

#[test]
fn decode_ids_corrupt_slot_is_empty() {
    for raw in ["", "not json", "{\"a\":1}", "[1,\"2\"]", "[-1]", "[1.5]", "null"] {
        assert!(decode_ids(Some(raw)).is_empty(), "expected empty for {raw:?}");
    }
}

#[test]
fn encode_ids_writes_plain_array() {
    assert_eq!(encode_ids(&[3]).unwrap(), "[3]");
    assert_eq!(encode_ids(&[]).unwrap(), "[]");
}

// =============================================================
// MemoryFavorites
// =============================================================

#[test]
fn memory_store_starts_empty() {
    let store = MemoryFavorites::new();
    assert!(store.read().is_empty());
    assert!(store.raw().is_none());
}

#[test]
fn memory_store_corrupted_slot_reads_empty() {
    let store = MemoryFavorites::with_raw("}{");
    assert!(store.read().is_empty());
}

#[test]
fn memory_store_write_replaces_slot() {
    let store = MemoryFavorites::with_raw("[1,2]");
    store.write(&[5]).unwrap();
    assert_eq!(store.raw().as_deref(), Some("[5]"));
    assert_eq!(store.read(), vec![5]);
}

#[test]
fn memory_store_can_reject_writes() {
    let store = MemoryFavorites::rejecting_writes();
    assert!(matches!(store.write(&[1]), Err(StorageError::Write(_))));
    assert!(store.read().is_empty());
}

// =============================================================
// LocalStorageFavorites (non-browser build)
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn local_storage_outside_browser_reads_empty_and_refuses_writes() {
    let store = LocalStorageFavorites;
    assert!(store.read().is_empty());
    assert_eq!(store.write(&[1]), Err(StorageError::Unavailable));
}

#[test]
fn stores_coerce_to_shared_handle() {
    let shared: SharedFavoriteStore = std::sync::Arc::new(MemoryFavorites::new());
    shared.write(&[8]).unwrap();
    assert_eq!(shared.read(), vec![8]);
}
