//! Integration tests for JSON reports

use std::fs;

use ossim::common::{Direction, PageId};
use ossim::disk::{compare_disk_strategies, DiskResult, DiskStrategy};
use ossim::page::PageStrategy;
use ossim::report::{to_json, write_json, PageReport};
use tempfile::NamedTempFile;

const REQUESTS: [u32; 8] = [98, 183, 37, 122, 14, 124, 65, 67];

#[test]
fn test_disk_result_field_names() {
    let result = DiskStrategy::Look(Direction::Left).run(&REQUESTS, 53).unwrap();
    let value: serde_json::Value = serde_json::from_str(&to_json(&result).unwrap()).unwrap();

    assert_eq!(value["name"], "LOOK");
    assert_eq!(value["seekTime"], 208);
    assert_eq!(value["averageSeekTime"], 26.0);
    assert_eq!(value["direction"], "left");
    assert_eq!(value["sequence"][0], 53);
}

#[test]
fn test_direction_omitted_when_absent() {
    let result = DiskStrategy::CLook.run(&REQUESTS, 53).unwrap();
    let value = serde_json::to_value(&result).unwrap();

    assert!(value.get("direction").is_none());
}

#[test]
fn test_write_and_read_back() {
    let temp_file = NamedTempFile::new().unwrap();
    let results = compare_disk_strategies(&REQUESTS, 53, Direction::Right).unwrap();

    write_json(temp_file.path(), &results).unwrap();

    let contents = fs::read_to_string(temp_file.path()).unwrap();
    let read_back: Vec<DiskResult> = serde_json::from_str(&contents).unwrap();
    assert_eq!(read_back, results);
}

#[test]
fn test_write_overwrites_existing_file() {
    let temp_file = NamedTempFile::new().unwrap();
    fs::write(temp_file.path(), "stale contents that are longer than the report").unwrap();

    let refs: Vec<_> = [1, 2, 1].into_iter().map(PageId::new).collect();
    let result = PageStrategy::Lru.run(&refs, 2).unwrap();
    write_json(temp_file.path(), &PageReport::new(PageStrategy::Lru, &result)).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(temp_file.path()).unwrap()).unwrap();
    assert_eq!(value["strategy"], "LRU");
    assert_eq!(value["faults"], 2);
}

#[test]
fn test_write_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("report.json");

    let result = PageStrategy::Fifo.run(&[PageId::new(1)], 1).unwrap();
    assert!(write_json(&path, &result).is_err());
}
