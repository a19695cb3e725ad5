#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ml() -> Command {
    cargo_bin_cmd!("medialedger")
}

/// Create a unique, empty data directory inside the system temp dir.
pub fn setup_data_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_medialedger", name));
    fs::remove_dir_all(&path).ok();
    path.to_string_lossy().to_string()
}

/// Create a temporary output file path and ensure it does not exist yet.
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Add a project with a fixed id so tests can address it later.
pub fn add_project(data_dir: &str, id: &str, client: &str, date: &str, price: &str, upfront: &str) {
    ml()
        .args([
            "--data-dir",
            data_dir,
            "--test",
            "project",
            "add",
            "--id",
            id,
            "--client",
            client,
            "--date",
            date,
            "--price",
            price,
            "--upfront",
            upfront,
            "--type",
            "photography",
        ])
        .assert()
        .success();
}

/// Seed a small dataset useful for most listing and export tests.
pub fn seed_projects(data_dir: &str) {
    add_project(data_dir, "1", "Aline Banda", "2026-08-05", "800", "300");
    add_project(data_dir, "2", "Chikondi Mwale", "2026-08-12", "1500", "1500");
}
