use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{count_rows, init_and_login, setup_test_db, vl};

#[test]
fn test_login_with_wrong_password_fails() {
    let db_path = setup_test_db("login_wrong_password");

    vl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    vl().args(["--db", &db_path, "login", "admin", "--password", "nope"])
        .assert()
        .failure()
        .stderr(contains("Invalid username or password"));

    // Unknown usernames read the same as wrong passwords.
    vl().args(["--db", &db_path, "login", "ghost", "--password", "admin123"])
        .assert()
        .failure()
        .stderr(contains("Invalid username or password"));
}

#[test]
fn test_login_logout_whoami_cycle() {
    let db_path = setup_test_db("login_cycle");

    vl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    vl().args(["--db", &db_path, "login", "admin", "--password", "admin123"])
        .assert()
        .success()
        .stdout(contains("Logged in as admin (Admin)"));

    vl().args(["--db", &db_path, "whoami"])
        .assert()
        .success()
        .stdout(contains("admin (Admin)"))
        .stdout(contains("System Administrator"));

    vl().args(["--db", &db_path, "logout"])
        .assert()
        .success();

    vl().args(["--db", &db_path, "whoami"])
        .assert()
        .failure()
        .stderr(contains("Not logged in"));
}

#[test]
fn test_user_add_and_list() {
    let db_path = setup_test_db("user_add_list");
    init_and_login(&db_path);

    vl().args([
        "--db",
        &db_path,
        "user",
        "add",
        "clerk",
        "--full-name",
        "Front Desk Clerk",
        "--role",
        "user",
        "--password",
        "clerkpw1",
    ])
    .assert()
    .success()
    .stdout(contains("added successfully"));

    vl().args(["--db", &db_path, "user", "list"])
        .assert()
        .success()
        .stdout(contains("admin"))
        .stdout(contains("clerk"))
        .stdout(contains("Front Desk Clerk"))
        .stdout(contains("2 Total Users"));

    vl().args(["--db", &db_path, "user", "list", "--search", "front"])
        .assert()
        .success()
        .stdout(contains("clerk"))
        .stdout(contains("System Administrator").not())
        .stdout(contains("1 Total Users"));
}

#[test]
fn test_duplicate_username_performs_no_write() {
    let db_path = setup_test_db("user_duplicate");
    init_and_login(&db_path);

    vl().args([
        "--db",
        &db_path,
        "user",
        "add",
        "clerk",
        "--full-name",
        "Front Desk Clerk",
        "--password",
        "clerkpw1",
    ])
    .assert()
    .success();

    assert_eq!(count_rows(&db_path, "users"), 2);

    vl().args([
        "--db",
        &db_path,
        "user",
        "add",
        "clerk",
        "--full-name",
        "Second Clerk",
        "--password",
        "clerkpw2",
    ])
    .assert()
    .failure()
    .stderr(contains("Username already exists"));

    assert_eq!(count_rows(&db_path, "users"), 2);
}

#[test]
fn test_short_password_is_rejected() {
    let db_path = setup_test_db("user_short_password");
    init_and_login(&db_path);

    vl().args([
        "--db",
        &db_path,
        "user",
        "add",
        "clerk",
        "--full-name",
        "Front Desk Clerk",
        "--password",
        "abc",
    ])
    .assert()
    .failure()
    .stderr(contains("at least 6 characters"));

    assert_eq!(count_rows(&db_path, "users"), 1);
}

#[test]
fn test_password_change_takes_effect() {
    let db_path = setup_test_db("user_passwd");
    init_and_login(&db_path);

    vl().args([
        "--db",
        &db_path,
        "user",
        "add",
        "clerk",
        "--full-name",
        "Front Desk Clerk",
        "--password",
        "clerkpw1",
    ])
    .assert()
    .success();

    vl().args([
        "--db", &db_path, "user", "passwd", "2", "--password", "newpass9",
    ])
    .assert()
    .success()
    .stdout(contains("Password changed"));

    vl().args(["--db", &db_path, "login", "clerk", "--password", "clerkpw1"])
        .assert()
        .failure()
        .stderr(contains("Invalid username or password"));

    vl().args(["--db", &db_path, "login", "clerk", "--password", "newpass9"])
        .assert()
        .success()
        .stdout(contains("Logged in as clerk (User)"));
}

#[test]
fn test_non_admin_cannot_manage_users_or_records() {
    let db_path = setup_test_db("user_gating");
    init_and_login(&db_path);

    vl().args([
        "--db",
        &db_path,
        "user",
        "add",
        "clerk",
        "--full-name",
        "Front Desk Clerk",
        "--password",
        "clerkpw1",
    ])
    .assert()
    .success();

    vl().args(["--db", &db_path, "login", "clerk", "--password", "clerkpw1"])
        .assert()
        .success();

    vl().args([
        "--db",
        &db_path,
        "user",
        "add",
        "other",
        "--full-name",
        "Someone Else",
        "--password",
        "whatever1",
    ])
    .assert()
    .failure()
    .stderr(contains("requires the Admin role"));

    vl().args(["--db", &db_path, "visitor", "del", "1"])
        .assert()
        .failure()
        .stderr(contains("requires the Admin role"));

    // But a plain operator can still run the logbook.
    vl().args([
        "--db",
        &db_path,
        "checkin",
        "Jane Roe",
        "--gender",
        "female",
        "--client-type",
        "guest",
        "--office",
        "Records Office",
        "--purpose",
        "Document request",
    ])
    .assert()
    .success();
}

#[test]
fn test_user_delete_with_confirmation() {
    let db_path = setup_test_db("user_delete");
    init_and_login(&db_path);

    vl().args([
        "--db",
        &db_path,
        "user",
        "add",
        "clerk",
        "--full-name",
        "Front Desk Clerk",
        "--password",
        "clerkpw1",
    ])
    .assert()
    .success();

    vl().args(["--db", &db_path, "user", "del", "2"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("deleted successfully"));

    assert_eq!(count_rows(&db_path, "users"), 1);
}

#[test]
fn test_cannot_delete_own_account() {
    let db_path = setup_test_db("user_delete_self");
    init_and_login(&db_path);

    vl().args(["--db", &db_path, "user", "del", "1"])
        .assert()
        .failure()
        .stderr(contains("currently logged-in user"));

    assert_eq!(count_rows(&db_path, "users"), 1);
}

#[test]
fn test_passwords_are_stored_as_argon2_hashes() {
    let db_path = setup_test_db("user_hash_format");
    init_and_login(&db_path);

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let stored: String = conn
        .query_row(
            "SELECT password FROM users WHERE username = 'admin'",
            [],
            |row| row.get(0),
        )
        .expect("stored hash");

    assert!(stored.starts_with("$argon2"));
    assert!(!stored.contains("admin123"));
}
