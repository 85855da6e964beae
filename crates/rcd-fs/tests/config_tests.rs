use pretty_assertions::assert_eq;
use rcd_fs::{ConfigStore, Error};
use serde::{Deserialize, Serialize};
use std::fs;
use tempfile::TempDir;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct TestRecord {
    remote: String,
    track_renames: bool,
}

#[test]
fn test_load_json() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("conf.json");
    fs::write(&path, r#"{"remote": "gdrive:docs", "trackRenames": true}"#).unwrap();

    let record: TestRecord = ConfigStore::new().load(&path).unwrap();

    assert_eq!(
        record,
        TestRecord {
            remote: "gdrive:docs".into(),
            track_renames: true,
        }
    );
}

#[test]
fn test_load_missing_file_is_io_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("conf.json");

    let result: rcd_fs::Result<TestRecord> = ConfigStore::new().load(&path);

    assert!(matches!(result, Err(Error::Io { .. })));
}

#[test]
fn test_load_malformed_file_is_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("conf.json");
    fs::write(&path, "{ not json").unwrap();

    let result: rcd_fs::Result<TestRecord> = ConfigStore::new().load(&path);

    match result {
        Err(Error::ConfigParse { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_save_json_is_pretty_and_terminated() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("conf.json");
    let record = TestRecord {
        remote: "s3:bucket".into(),
        track_renames: false,
    };

    ConfigStore::new().save(&path, &record).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("\n  \"remote\": \"s3:bucket\""));
    assert!(content.ends_with("}\n"));
}

#[test]
fn test_save_then_load() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".rcd").join("conf.json");
    let store = ConfigStore::new();
    let original = TestRecord {
        remote: "/mnt/backup".into(),
        track_renames: true,
    };

    store.save(&path, &original).unwrap();
    let loaded: TestRecord = store.load(&path).unwrap();

    assert_eq!(original, loaded);
}
