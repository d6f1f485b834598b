//! InMemoryStore loading tests

use dvcalc_store::{DataValueStore, InMemoryStore, Predicate, StoreError};
use pretty_assertions::assert_eq;
use std::io::Write;

const DATA_VALUES: &str = r#"
[
    {"dataElement": "DE1", "period": "202101", "categoryOptionCombo": "COC1", "value": "10", "created": "2021-02-01T00:00:00.000"},
    {"dataElement": "DE1", "period": "202102", "categoryOptionCombo": "COC1", "value": "20", "created": "2021-03-01"},
    {"dataElement": "DE2", "period": "202101", "organisationUnit": "OU1", "categoryOptionCombo": "COC1", "value": "x", "created": "2021-02-01T12:00:00"}
]
"#;

#[test]
fn test_from_json_array() {
    let store = InMemoryStore::from_json(DATA_VALUES).unwrap();
    assert_eq!(store.len(), 3);

    let de1: Vec<String> = store
        .select_matching(&Predicate::data_element("DE1"))
        .unwrap()
        .iter()
        .map(|p| p.period().to_string())
        .collect();
    assert_eq!(de1, vec!["202101".to_string(), "202102".to_string()]);
}

#[test]
fn test_from_json_wrapped_object() {
    let json = format!(r#"{{"dataValues": {}}}"#, DATA_VALUES);
    let store = InMemoryStore::from_json(&json).unwrap();
    assert_eq!(store.len(), 3);
}

#[test]
fn test_from_json_object_without_data_values() {
    let err = InMemoryStore::from_json(r#"{"rows": []}"#).err().unwrap();
    assert!(matches!(err, StoreError::Parse(_)));
}

#[test]
fn test_from_json_duplicate_keys_keep_last() {
    let json = r#"[
        {"dataElement": "DE1", "period": "P1", "categoryOptionCombo": "C", "value": "1", "created": "2021-01-01"},
        {"dataElement": "DE1", "period": "P1", "categoryOptionCombo": "C", "value": "2", "created": "2021-01-02"}
    ]"#;
    let store = InMemoryStore::from_json(json).unwrap();
    let all = store.select_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].value(), "2");
}

#[test]
fn test_from_json_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(DATA_VALUES.as_bytes()).unwrap();

    let store = InMemoryStore::from_json_file(file.path()).unwrap();
    assert_eq!(store.len(), 3);
}

#[test]
fn test_from_json_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let err = InMemoryStore::from_json_file(dir.path().join("missing.json"))
        .err()
        .unwrap();
    assert!(matches!(err, StoreError::Io(_)));
}
