//! Integration tests for the ossim binary

use std::fs;
use std::process::{Command, Output};

use ossim::disk::DiskResult;
use tempfile::tempdir;

const REQUESTS: &str = "98,183,37,122,14,124,65,67";

fn ossim(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ossim"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .unwrap()
}

#[test]
fn test_invalid_head_exits_with_message() {
    let output = ossim(&["disk", "--requests", REQUESTS, "--head", "abc"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Initial head position must be a number"),
        "{}",
        stderr
    );
    assert!(output.stdout.is_empty());
}

#[test]
fn test_json_disk_result() {
    let output = ossim(&[
        "--json", "disk", "--requests", REQUESTS, "--head", "53", "--strategy", "look",
        "--direction", "left",
    ]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["name"], "LOOK");
    assert_eq!(value["seekTime"], 208);
    assert_eq!(value["averageSeekTime"], 26.0);
    assert_eq!(value["direction"], "left");
}

#[test]
fn test_direction_ignored_for_fcfs() {
    let output = ossim(&[
        "--json", "disk", "--requests", REQUESTS, "--head", "53", "--strategy", "fcfs",
        "--direction", "left",
    ]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["seekTime"], 640);
    assert!(value.get("direction").is_none());
}

#[test]
fn test_direction_rejected_for_clook() {
    let output = ossim(&[
        "disk", "--requests", REQUESTS, "--head", "53", "--strategy", "clook", "--direction",
        "left",
    ]);
    assert!(!output.status.success());
}

#[test]
fn test_output_writes_report() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cscan.json");
    let path_arg = path.to_str().unwrap();

    let output = ossim(&[
        "disk", "--requests", REQUESTS, "--head", "53", "--strategy", "cscan", "--output",
        path_arg,
    ]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("C-SCAN"));

    let contents = fs::read_to_string(&path).unwrap();
    let result: DiskResult = serde_json::from_str(&contents).unwrap();
    assert_eq!(result.name, "C-SCAN");
    assert_eq!(result.seek_time, 183);
}

#[test]
fn test_page_compare_json() {
    let output = ossim(&[
        "--json",
        "page-compare",
        "--references",
        "7 0 1 2 0 3 0 4 2 3 0 3 2",
        "--capacity",
        "3",
    ]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let faults: Vec<_> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|r| (r["strategy"].as_str().unwrap().to_string(), r["faults"].as_u64().unwrap()))
        .collect();
    assert_eq!(
        faults,
        vec![
            ("Optimal".to_string(), 7),
            ("LRU".to_string(), 9),
            ("FIFO".to_string(), 10),
        ]
    );
}
