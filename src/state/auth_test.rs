use super::*;
use crate::util::storage::MemoryStorage;

fn config() -> AppConfig {
    AppConfig {
        server_addr: "http://localhost:5000".to_owned(),
        auth_prefix: "Bearer".to_owned(),
        display_name: "webway".to_owned(),
    }
}

fn fresh() -> (AuthStore, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    let store = AuthStore::load(&config(), storage.clone());
    (store, storage)
}

/// Backend whose writes and removals always fail, like a full quota.
struct RejectingStorage;

impl KeyValueStorage for RejectingStorage {
    fn get_item(&self, _key: &str) -> Option<String> {
        None
    }

    fn set_item(&self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write { key: key.to_owned(), reason: "QuotaExceededError".to_owned() })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        Err(StorageError::Remove { key: key.to_owned(), reason: "SecurityError".to_owned() })
    }
}

// =============================================================
// load
// =============================================================

#[test]
fn load_from_empty_storage_has_no_session() {
    let (store, _) = fresh();
    let state = store.snapshot();
    assert_eq!(state.token, None);
    assert_eq!(state.username, None);
    assert_eq!(state.server_addr, "http://localhost:5000");
    assert_eq!(state.display_name, "webway");
}

#[test]
fn load_reads_existing_keys() {
    let storage = Arc::new(MemoryStorage::new());
    storage.set_item(TOKEN_KEY, "persisted").unwrap();
    let store = AuthStore::load(&config(), storage);
    assert_eq!(store.snapshot().token.as_deref(), Some("persisted"));
    assert_eq!(store.snapshot().username, None);
}

#[test]
fn reload_over_same_storage_restores_username() {
    let (store, storage) = fresh();
    store.set_username("alice").unwrap();

    let reloaded = AuthStore::load(&config(), storage);
    assert_eq!(reloaded.snapshot().username.as_deref(), Some("alice"));
}

// =============================================================
// set_token / set_username
// =============================================================

#[test]
fn set_token_updates_snapshot_and_storage() {
    let (store, storage) = fresh();
    store.set_token("abc123").unwrap();
    assert_eq!(store.snapshot().token.as_deref(), Some("abc123"));
    assert_eq!(storage.get_item(TOKEN_KEY).as_deref(), Some("abc123"));
}

#[test]
fn set_token_accepts_any_string() {
    let (store, storage) = fresh();
    store.set_token("").unwrap();
    assert_eq!(store.snapshot().token.as_deref(), Some(""));
    assert_eq!(storage.get_item(TOKEN_KEY).as_deref(), Some(""));
    assert!(!store.is_authenticated());
}

#[test]
fn set_username_does_not_touch_token() {
    let (store, storage) = fresh();
    store.set_username("alice").unwrap();
    assert_eq!(store.snapshot().username.as_deref(), Some("alice"));
    assert_eq!(store.snapshot().token, None);
    assert_eq!(storage.get_item(USERNAME_KEY).as_deref(), Some("alice"));
    assert_eq!(storage.get_item(TOKEN_KEY), None);
}

#[test]
fn read_only_handle_observes_later_mutations() {
    let (store, _) = fresh();
    let handle = store.state();
    store.set_token("abc123").unwrap();
    assert_eq!(handle.get_untracked().token.as_deref(), Some("abc123"));

    let clone = store.clone();
    clone.set_username("bob").unwrap();
    assert_eq!(handle.get_untracked().username.as_deref(), Some("bob"));
}

#[test]
fn failed_write_still_updates_memory() {
    let store = AuthStore::load(&config(), Arc::new(RejectingStorage));
    let err = store.set_token("abc123").unwrap_err();
    assert!(matches!(err, StorageError::Write { ref key, .. } if key == TOKEN_KEY));
    assert_eq!(store.snapshot().token.as_deref(), Some("abc123"));
}

// =============================================================
// authorization_header
// =============================================================

#[test]
fn authorization_header_uses_prefix_and_token() {
    let (store, _) = fresh();
    store.set_token("abc123").unwrap();
    let header = store.authorization_header();
    assert_eq!(header.len(), 1);
    assert_eq!(header.get("Authorization").map(String::as_str), Some("Bearer abc123"));
}

#[test]
fn authorization_header_without_token_has_empty_segment() {
    let (store, _) = fresh();
    let header = store.authorization_header();
    assert_eq!(header.get(AUTHORIZATION_HEADER).map(String::as_str), Some("Bearer "));
}

// =============================================================
// reset_auth
// =============================================================

#[test]
fn reset_auth_clears_token_and_removes_key() {
    let (store, storage) = fresh();
    store.set_token("abc123").unwrap();
    store.reset_auth().unwrap();
    assert_eq!(store.snapshot().token, None);
    assert_eq!(storage.get_item(TOKEN_KEY), None);
}

#[test]
fn reset_auth_clears_username_too() {
    let (store, storage) = fresh();
    store.set_token("abc123").unwrap();
    store.set_username("alice").unwrap();
    store.reset_auth().unwrap();
    assert_eq!(store.snapshot().username, None);
    assert!(storage.is_empty());
}

#[test]
fn reset_auth_keeps_config_fields() {
    let (store, _) = fresh();
    store.set_token("abc123").unwrap();
    store.reset_auth().unwrap();
    let state = store.snapshot();
    assert_eq!(state.server_addr, "http://localhost:5000");
    assert_eq!(state.display_name, "webway");
}

#[test]
fn reset_auth_on_empty_session_is_ok() {
    let (store, _) = fresh();
    assert_eq!(store.reset_auth(), Ok(()));
}

#[test]
fn reset_auth_reports_removal_failure_after_clearing_memory() {
    let store = AuthStore::load(&config(), Arc::new(RejectingStorage));
    let _ = store.set_token("abc123");
    let err = store.reset_auth().unwrap_err();
    assert!(matches!(err, StorageError::Remove { ref key, .. } if key == TOKEN_KEY));
    assert_eq!(store.snapshot().token, None);
}

// =============================================================
// helpers
// =============================================================

#[test]
fn is_authenticated_follows_token() {
    let (store, _) = fresh();
    assert!(!store.is_authenticated());
    store.set_token("abc123").unwrap();
    assert!(store.is_authenticated());
    store.reset_auth().unwrap();
    assert!(!store.is_authenticated());
}

