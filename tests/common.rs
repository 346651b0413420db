#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn vl() -> Command {
    cargo_bin_cmd!("visitlog")
}

/// Create a unique test DB path inside the system temp dir and remove any
/// existing file (plus its session file)
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_visitlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    fs::remove_file(format!("{}.session", &db_path)).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB (schema + seeded admin) and log in as the default
/// administrator
pub fn init_and_login(db_path: &str) {
    vl().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    vl().args([
        "--db",
        db_path,
        "login",
        "admin",
        "--password",
        "admin123",
    ])
    .assert()
    .success();
}

/// Check in one visitor with an explicit time-in
pub fn checkin_at(db_path: &str, name: &str, gender: &str, client_type: &str, time_in: &str) {
    vl().args([
        "--db",
        db_path,
        "checkin",
        name,
        "--gender",
        gender,
        "--client-type",
        client_type,
        "--office",
        "Records Office",
        "--purpose",
        "Document request",
        "--time-in",
        time_in,
    ])
    .assert()
    .success();
}

/// Count rows in an arbitrary table, bypassing the CLI
pub fn count_rows(db_path: &str, table: &str) -> i64 {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
        row.get(0)
    })
    .expect("count")
}
