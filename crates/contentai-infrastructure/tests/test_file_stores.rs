//! Integration tests for the file-backed token store and history ledger.

use std::sync::Arc;

use contentai_core::history::{HistoryKind, HistoryLedger, HistoryPayload, HistoryRepository};
use contentai_core::session::TokenStore;
use contentai_infrastructure::{FileHistoryRepository, FileTokenStore};
use tempfile::TempDir;

fn script(n: usize) -> HistoryPayload {
    HistoryPayload::Script {
        idea: format!("idea {}", n),
        script: format!("script {}", n),
    }
}

#[test]
fn test_token_survives_a_new_store_instance() {
    let temp_dir = TempDir::new().unwrap();

    let store = FileTokenStore::new(Some(temp_dir.path())).unwrap();
    store.save_token("T1").unwrap();

    let reopened = FileTokenStore::new(Some(temp_dir.path())).unwrap();
    assert_eq!(reopened.load_token().unwrap().as_deref(), Some("T1"));
}

#[test]
fn test_clear_token_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileTokenStore::new(Some(temp_dir.path())).unwrap();

    store.clear_token().unwrap();
    store.save_token("T1").unwrap();
    store.clear_token().unwrap();
    store.clear_token().unwrap();

    assert_eq!(store.load_token().unwrap(), None);
    assert!(!store.path().exists());
}

#[test]
fn test_save_replaces_previous_token() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileTokenStore::new(Some(temp_dir.path())).unwrap();

    store.save_token("T1").unwrap();
    store.save_token("T2").unwrap();
    assert_eq!(store.load_token().unwrap().as_deref(), Some("T2"));
}

#[cfg(unix)]
#[test]
fn test_token_file_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let store = FileTokenStore::new(Some(temp_dir.path())).unwrap();
    store.save_token("T1").unwrap();

    let mode = std::fs::metadata(store.path()).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn test_ledger_persists_across_instances() {
    let temp_dir = TempDir::new().unwrap();
    let repo = Arc::new(FileHistoryRepository::new(Some(temp_dir.path())).unwrap());
    let ledger = HistoryLedger::new(repo);
    ledger.append(script(1)).unwrap();
    ledger
        .append(HistoryPayload::Ideas {
            niche: "gatos".to_string(),
            audience: "jovens".to_string(),
            ideas: Vec::new(),
        })
        .unwrap();

    let reopened = HistoryLedger::new(Arc::new(
        FileHistoryRepository::new(Some(temp_dir.path())).unwrap(),
    ));
    let entries = reopened.read_all();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].kind(), HistoryKind::Ideas);
    assert_eq!(entries[1].payload, script(1));
}

#[test]
fn test_persisted_history_never_exceeds_capacity() {
    let temp_dir = TempDir::new().unwrap();
    let repo = Arc::new(FileHistoryRepository::new(Some(temp_dir.path())).unwrap());
    let ledger = HistoryLedger::new(repo.clone());

    for n in 1..=51 {
        ledger.append(script(n)).unwrap();
    }

    let raw = std::fs::read_to_string(repo.path()).unwrap();
    let persisted: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
    assert_eq!(persisted.len(), 50);
    assert_eq!(persisted[0]["payload"]["idea"], "idea 51");
    assert_eq!(persisted[49]["payload"]["idea"], "idea 2");
}

#[test]
fn test_corrupt_history_file_reads_empty_then_recovers() {
    let temp_dir = TempDir::new().unwrap();
    let repo = Arc::new(FileHistoryRepository::new(Some(temp_dir.path())).unwrap());
    std::fs::write(repo.path(), "[{\"id\": \"oops\"").unwrap();

    assert!(repo.load_all().unwrap_err().is_serialization());

    let ledger = HistoryLedger::new(repo);
    assert!(ledger.read_all().is_empty());

    ledger.append(script(1)).unwrap();
    assert_eq!(ledger.read_all().len(), 1);
}
