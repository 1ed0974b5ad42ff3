use linkvault::model::{Bookmark, Group};
use linkvault::store::backend::StorageBackend;
use linkvault::store::fs_backend::FsBackend;
use linkvault::store::group_store::GroupStore;
use std::collections::{BTreeSet, HashMap};
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let root = TempDir::new().unwrap();
    let backend = FsBackend::new(root.path());
    (root, backend)
}

fn mark(title: &str, url: &str, group: &str) -> Bookmark {
    Bookmark::new(title, url, BTreeSet::new(), group).unwrap()
}

#[test]
fn test_fs_backend_roundtrip() {
    let (_root, backend) = setup();

    let mut group = Group::new("Reading");
    group.add(mark("Example", "https://example.com", "Reading"));
    let mut groups = HashMap::new();
    groups.insert("Reading".to_string(), group);

    backend.save_groups("alice", &groups).unwrap();

    let loaded = backend.load_groups("alice").unwrap();
    assert_eq!(loaded.len(), 1);
    assert!(loaded["Reading"].contains("Example"));
}

#[test]
fn test_fs_backend_unknown_user_is_empty() {
    let (_root, backend) = setup();
    let loaded = backend.load_groups("nobody").unwrap();
    assert!(loaded.is_empty());
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let (root, backend) = setup();

    backend.save_groups("alice", &HashMap::new()).unwrap();

    // Verify the document landed under the expected name
    let expected_path = root.path().join("vault-alice.json");
    assert!(expected_path.exists());

    // Verify NO .tmp files are left behind
    let entries = fs::read_dir(root.path()).unwrap();
    for entry in entries {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_backend_document_is_versioned_json() {
    let (root, backend) = setup();
    backend.save_groups("alice", &HashMap::new()).unwrap();

    let on_disk = fs::read_to_string(root.path().join("vault-alice.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&on_disk).unwrap();
    assert_eq!(parsed["version"], 1);
    assert!(parsed["groups"].is_object());
}

#[test]
fn test_fs_backend_rejects_newer_format_version() {
    let (root, backend) = setup();
    fs::write(
        root.path().join("vault-alice.json"),
        r#"{"version": 99, "groups": {}}"#,
    )
    .unwrap();

    assert!(backend.load_groups("alice").is_err());
}

#[test]
fn test_fs_backend_rejects_unstorable_usernames() {
    let (_root, backend) = setup();
    assert!(backend.load_groups("../alice").is_err());
    assert!(backend.save_groups("a/b", &HashMap::new()).is_err());
}

#[test]
fn test_group_store_reopens_from_disk() {
    let (_root, backend) = setup();

    {
        let mut store = GroupStore::open(backend.clone(), "alice").unwrap();
        store.create_group("Reading").unwrap();
        store
            .add_bookmark(mark("Example", "https://example.com", "Reading"), "Reading")
            .unwrap();
    }

    // A fresh store over the same directory sees the persisted state,
    // the way a process restart would.
    let store = GroupStore::open(backend, "alice").unwrap();
    let all = store.list_all();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].title, "Example");
    assert_eq!(all[0].group_name, "Reading");
}

#[test]
fn test_fs_backend_users_do_not_share_files() {
    let (_root, backend) = setup();

    let mut groups = HashMap::new();
    groups.insert("Reading".to_string(), Group::new("Reading"));
    backend.save_groups("alice", &groups).unwrap();

    assert!(backend.load_groups("bob").unwrap().is_empty());
}
