#![cfg(test)]

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use super::*;
use crate::collections::list::List;

const FIXTURE: &str = "\
IP=127.0.0.1
PORT=8080
LOAD=0.5
PROCESS_NAME=commons
WITH_EQUALS=this=value
NUMBERS=[1, 2, 3, 4, 5]
NO_SPACES=[One,String,Next,to,another]
EMPTY_ARRAY=[]
";

fn write_fixture(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("failed to create a temporary directory");
    let path = dir.path().join("config.cfg");
    fs::write(&path, contents).expect("failed to write the fixture file");
    (dir, path)
}

fn owned(parts: &[&str]) -> List<String> {
    parts.iter().map(|part| String::from(*part)).collect()
}

#[test]
fn test_load_reads_every_property() {
    let (_dir, path) = write_fixture(FIXTURE);

    let config = Config::load(&path).unwrap();

    assert_eq!(config.len(), 8);
    assert!(config.contains_key("PORT"));
    assert!(!config.contains_key("MISSING"));
    assert_eq!(config.path(), path);
}

#[test]
fn test_missing_file() {
    let (_dir, path) = write_fixture(FIXTURE);

    let result = Config::load(path.with_extension("missing"));

    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_string_values() {
    let (_dir, path) = write_fixture(FIXTURE);
    let config = Config::load(&path).unwrap();

    assert_eq!(config.get("IP"), Some("127.0.0.1"));
    assert_eq!(config.get_string("PROCESS_NAME").unwrap(), "commons");
    assert_eq!(config.get("MISSING"), None);
}

#[test]
fn test_value_keeps_equals_signs_after_the_first() {
    let (_dir, path) = write_fixture(FIXTURE);
    let config = Config::load(&path).unwrap();

    assert_eq!(config.get("WITH_EQUALS"), Some("this=value"));
}

#[test]
fn test_numeric_values() {
    let (_dir, path) = write_fixture(FIXTURE);
    let config = Config::load(&path).unwrap();

    assert_eq!(config.get_i32("PORT").unwrap(), 8080);
    assert_eq!(config.get_i64("PORT").unwrap(), 8080);
    assert_eq!(config.get_f64("LOAD").unwrap(), 0.5);
}

#[test]
fn test_numeric_errors() {
    let (_dir, path) = write_fixture(FIXTURE);
    let config = Config::load(&path).unwrap();

    assert!(matches!(
        config.get_i32("IP"),
        Err(ConfigError::InvalidValue { .. })
    ));
    assert!(matches!(
        config.get_i32("MISSING"),
        Err(ConfigError::MissingKey { .. })
    ));
}

#[test]
fn test_array_values() {
    let (_dir, path) = write_fixture(FIXTURE);
    let config = Config::load(&path).unwrap();

    assert_eq!(
        config.get_array("NUMBERS").unwrap(),
        owned(&["1", "2", "3", "4", "5"])
    );
    assert_eq!(
        config.get_array("NO_SPACES").unwrap(),
        owned(&["One", "String", "Next", "to", "another"])
    );
    assert_eq!(config.get_array("EMPTY_ARRAY").unwrap(), List::new());
    assert!(matches!(
        config.get_array("IP"),
        Err(ConfigError::InvalidValue { .. })
    ));
}

#[test]
fn test_blank_lines_and_trailing_newlines_are_tolerated() {
    let (_dir, path) = write_fixture("IP=127.0.0.1\n\n\nPORT=8080\n\n");
    let config = Config::load(&path).unwrap();

    assert_eq!(config.len(), 2);
    assert_eq!(config.get_i32("PORT").unwrap(), 8080);
}

#[test]
fn test_set_overrides_and_creates() {
    let (_dir, path) = write_fixture(FIXTURE);
    let mut config = Config::load(&path).unwrap();

    assert_eq!(config.set("PORT", "9090"), Some(String::from("8080")));
    assert_eq!(config.set("NEW_KEY", "value"), None);

    assert_eq!(config.get_i32("PORT").unwrap(), 9090);
    assert_eq!(config.get("NEW_KEY"), Some("value"));
    assert_eq!(config.len(), 9);
}

#[test]
fn test_set_array() {
    let (_dir, path) = write_fixture(FIXTURE);
    let mut config = Config::load(&path).unwrap();

    config.set_array("NUMBERS", [6, 7]);

    assert_eq!(config.get("NUMBERS"), Some("[6, 7]"));
    assert_eq!(config.get_array("NUMBERS").unwrap(), owned(&["6", "7"]));
}

#[test]
fn test_remove_key() {
    let (_dir, path) = write_fixture(FIXTURE);
    let mut config = Config::load(&path).unwrap();

    assert_eq!(config.remove_key("PORT"), Some(String::from("8080")));
    assert_eq!(config.remove_key("PORT"), None);

    assert_eq!(config.len(), 7);
    assert!(matches!(
        config.get_i32("PORT"),
        Err(ConfigError::MissingKey { .. })
    ));
}

#[test]
fn test_save_round_trips_changes() {
    let (_dir, path) = write_fixture(FIXTURE);
    let mut config = Config::load(&path).unwrap();

    config.set("PORT", "9090");
    config.remove_key("EMPTY_ARRAY");
    config.save().unwrap();

    let reloaded = Config::load(&path).unwrap();
    assert_eq!(reloaded.len(), 7);
    assert_eq!(reloaded.get_i32("PORT").unwrap(), 9090);
    assert_eq!(reloaded.get("WITH_EQUALS"), Some("this=value"));
    assert!(!reloaded.contains_key("EMPTY_ARRAY"));
}

#[test]
fn test_save_as_writes_elsewhere() {
    let (dir, path) = write_fixture(FIXTURE);
    let config = Config::load(&path).unwrap();

    let copy = dir.path().join("copy.cfg");
    config.save_as(&copy).unwrap();

    let reloaded = Config::load(&copy).unwrap();
    assert_eq!(reloaded.len(), config.len());
    assert_eq!(reloaded.get("IP"), Some("127.0.0.1"));
}

#[test]
fn test_empty_starts_blank_and_saves() {
    let (dir, _path) = write_fixture(FIXTURE);
    let target = dir.path().join("fresh.cfg");

    let mut config = Config::empty(&target);
    assert!(config.is_empty());
    config.set("KEY", "value");
    config.save().unwrap();

    let reloaded = Config::load(&target).unwrap();
    assert_eq!(reloaded.get("KEY"), Some("value"));
}
