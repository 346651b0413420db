use predicates::str::contains;
use std::fs;

mod common;
use common::{checkin_at, init_and_login, setup_test_db, temp_out, vl};

#[test]
fn test_export_visitors_csv_mirrors_grid_columns() {
    let db_path = setup_test_db("export_visitors_csv");
    init_and_login(&db_path);

    checkin_at(&db_path, "Jane Roe", "female", "guest", "2025-03-10 09:00");
    checkin_at(&db_path, "John Smith", "male", "student", "2025-04-02 10:30");

    let out = temp_out("export_visitors", "csv");

    vl().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &out, "--force",
    ])
    .assert()
    .success()
    .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content
        .starts_with("id,date,name,gender,client_type,office,purpose,time_in,time_out"));
    assert!(content.contains("Jane Roe,Female,Guest,Records Office,Document request"));
    assert!(content.contains("2025-03-10"));
    assert!(content.contains("09:00:00"));
}

#[test]
fn test_export_range_filters_rows() {
    let db_path = setup_test_db("export_range");
    init_and_login(&db_path);

    checkin_at(&db_path, "March Visitor", "female", "guest", "2025-03-10 09:00");
    checkin_at(&db_path, "April Visitor", "male", "guest", "2025-04-02 10:30");

    let out = temp_out("export_march", "csv");

    vl().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &out, "--range", "2025-03",
        "--force",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("March Visitor"));
    assert!(!content.contains("April Visitor"));
}

#[test]
fn test_export_empty_range_writes_nothing() {
    let db_path = setup_test_db("export_empty_range");
    init_and_login(&db_path);

    checkin_at(&db_path, "March Visitor", "female", "guest", "2025-03-10 09:00");

    let out = temp_out("export_nothing", "csv");

    vl().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &out, "--range", "2024",
        "--force",
    ])
    .assert()
    .success()
    .stdout(contains("No visitors found"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_rejects_relative_path() {
    let db_path = setup_test_db("export_relative");
    init_and_login(&db_path);

    checkin_at(&db_path, "Jane Roe", "female", "guest", "2025-03-10 09:00");

    vl().args([
        "--db",
        &db_path,
        "export",
        "--format",
        "csv",
        "--file",
        "relative.csv",
        "--force",
    ])
    .assert()
    .failure()
    .stderr(contains("must be absolute"));
}

#[test]
fn test_export_rejects_bad_range_expression() {
    let db_path = setup_test_db("export_bad_range");
    init_and_login(&db_path);

    checkin_at(&db_path, "Jane Roe", "female", "guest", "2025-03-10 09:00");

    let out = temp_out("export_bad_range", "csv");

    vl().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &out, "--range", "2025-3",
        "--force",
    ])
    .assert()
    .failure()
    .stderr(contains("range"));
}

#[test]
fn test_export_visitors_json() {
    let db_path = setup_test_db("export_visitors_json");
    init_and_login(&db_path);

    checkin_at(&db_path, "Jane Roe", "female", "guest", "2025-03-10 09:00");

    let out = temp_out("export_visitors", "json");

    vl().args([
        "--db", &db_path, "export", "--format", "json", "--file", &out, "--force",
    ])
    .assert()
    .success()
    .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read exported json");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = parsed.as_array().expect("array of rows");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Jane Roe");
    assert_eq!(rows[0]["client_type"], "Guest");
    assert_eq!(rows[0]["time_out"], "");
}

#[test]
fn test_export_visitors_xlsx() {
    let db_path = setup_test_db("export_visitors_xlsx");
    init_and_login(&db_path);

    checkin_at(&db_path, "Jane Roe", "female", "guest", "2025-03-10 09:00");

    let out = temp_out("export_visitors", "xlsx");

    vl().args([
        "--db", &db_path, "export", "--format", "xlsx", "--file", &out, "--force",
    ])
    .assert()
    .success()
    .stdout(contains("XLSX export completed"));

    let meta = fs::metadata(&out).expect("exported xlsx exists");
    assert!(meta.len() > 0);
}

#[test]
fn test_export_users_excludes_password_material() {
    let db_path = setup_test_db("export_users");
    init_and_login(&db_path);

    let out = temp_out("export_users", "csv");

    vl().args([
        "--db", &db_path, "export", "--users", "--format", "csv", "--file", &out, "--force",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("id,username,full_name,role,created_at,updated_at"));
    assert!(content.contains("admin,System Administrator,Admin"));
    assert!(!content.contains("$argon2"));
}

#[test]
fn test_backup_copies_database() {
    let db_path = setup_test_db("backup_copy");
    init_and_login(&db_path);

    checkin_at(&db_path, "Jane Roe", "female", "guest", "2025-03-10 09:00");

    let out = temp_out("backup_copy", "sqlite");

    vl().args(["--db", &db_path, "backup", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    // The copy is a working database with the same rows.
    let conn = rusqlite::Connection::open(&out).expect("open backup");
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM visitors", [], |row| row.get(0))
        .expect("count");
    assert_eq!(count, 1);
}

#[test]
fn test_qr_generation_writes_png() {
    let db_path = setup_test_db("qr_png");

    let out = temp_out("qr_badge", "png");

    vl().args([
        "--db",
        &db_path,
        "qr",
        "--name",
        "Jane Roe",
        "--gender",
        "female",
        "--client-type",
        "guest",
        "--office",
        "Records Office",
        "--purpose",
        "Document request",
        "--file",
        &out,
    ])
    .assert()
    .success()
    .stdout(contains("QR code saved"));

    let bytes = fs::read(&out).expect("read png");
    // PNG magic number
    assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
}

#[test]
fn test_qr_requires_non_empty_fields() {
    let db_path = setup_test_db("qr_empty_field");

    let out = temp_out("qr_bad", "png");

    vl().args([
        "--db", &db_path, "qr", "--name", "  ", "--gender", "female", "--client-type", "guest",
        "--office", "X", "--purpose", "Y", "--file", &out,
    ])
    .assert()
    .failure()
    .stderr(contains("Required field is empty"));

    assert!(!std::path::Path::new(&out).exists());
}
