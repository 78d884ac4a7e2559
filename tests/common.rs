#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn bt() -> Command {
    cargo_bin_cmd!("breaktracker")
}

/// Create a unique test store path inside the system temp dir and remove any existing file
pub fn setup_test_store(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_breaktracker.sqlite", name));
    let store_path = path.to_string_lossy().to_string();
    fs::remove_file(&store_path).ok();
    store_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Run `record NAME` with the clock pinned to `at` (local time, HH:MM:SS on 2026-10-17).
pub fn record_at(store: &str, name: &str, at: &str) -> assert_cmd::assert::Assert {
    bt().args([
        "--store",
        store,
        "--at",
        &format!("2026-10-17T{at}"),
        "record",
        name,
    ])
    .assert()
}

/// Initialize a store (test mode, no config file) and take two breaks.
pub fn init_store_with_data(store: &str) {
    bt().args(["--store", store, "--test", "init"])
        .assert()
        .success();

    record_at(store, "Alice", "10:00:00").success();
    record_at(store, "Alice", "10:29:00").success();
    record_at(store, "Bob", "10:15:00").success();
}

/// Full ids of the stored records, read through the JSON export.
pub fn record_ids(store: &str, name: &str) -> Vec<String> {
    let out = temp_out(name, "json");
    bt().args([
        "--store", store, "export", "--format", "json", "--file", &out, "--force",
    ])
    .assert()
    .success();

    let raw = fs::read_to_string(&out).expect("read exported json");
    let rows: Vec<serde_json::Value> = serde_json::from_str(&raw).expect("valid json");
    rows.iter()
        .map(|r| r["id"].as_str().expect("id").to_string())
        .collect()
}
