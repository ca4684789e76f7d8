use std::fs;

use jobsearch_core::{Session, User};
use jobsearch_engine::{SessionStore, SessionStoreError};
use serde_json::json;
use tempfile::TempDir;

fn session() -> Session {
    let mut user = User {
        id: 21,
        email: Some("deniz@example.com".into()),
        first_name: Some("Deniz".into()),
        is_company: true,
        ..User::default()
    };
    user.extra.insert("phone".into(), json!("+90 555 000 00 00"));
    Session {
        user,
        access_token: Some("token-21".into()),
    }
}

#[test]
fn missing_file_means_signed_out() {
    let temp = TempDir::new().unwrap();
    let store = SessionStore::new(temp.path().join("session.ron"));
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn saved_session_survives_reload_with_unknown_fields() {
    let temp = TempDir::new().unwrap();
    let store = SessionStore::new(temp.path().join("nested").join("session.ron"));

    store.save(&session()).unwrap();
    let loaded = store.load().unwrap().expect("session");
    assert_eq!(loaded, session());
    assert_eq!(loaded.user.extra["phone"], "+90 555 000 00 00");
}

#[test]
fn save_replaces_previous_session() {
    let temp = TempDir::new().unwrap();
    let store = SessionStore::new(temp.path().join("session.ron"));
    store.save(&session()).unwrap();

    let mut other = session();
    other.user.id = 22;
    other.access_token = None;
    store.save(&other).unwrap();

    assert_eq!(store.load().unwrap(), Some(other));
}

#[test]
fn clear_removes_file_and_tolerates_absence() {
    let temp = TempDir::new().unwrap();
    let store = SessionStore::new(temp.path().join("session.ron"));
    store.save(&session()).unwrap();

    store.clear().unwrap();
    assert!(!store.path().exists());
    store.clear().unwrap();
}

#[test]
fn corrupt_file_is_a_decode_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("session.ron");
    fs::write(&path, "not ron at all {").unwrap();

    let err = SessionStore::new(path).load().unwrap_err();
    assert!(matches!(err, SessionStoreError::Decode(_)));
}

#[test]
fn parent_that_is_a_file_is_rejected() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("not_a_dir");
    fs::write(&blocker, "x").unwrap();

    let store = SessionStore::new(blocker.join("session.ron"));
    assert!(store.save(&session()).is_err());
}
