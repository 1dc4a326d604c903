#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn gig() -> Command {
    cargo_bin_cmd!("gigboard")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_gigboard.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
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

/// Initialize the DB schema (uses --test so no config file is written)
pub fn init_board(db_path: &str) {
    gig()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn login(db_path: &str, name: &str, role: &str) {
    gig()
        .args(["--db", db_path, "login", "--name", name, "--role", role])
        .assert()
        .success();
}

/// Initialize DB, log in an employer and post the two seed gigs used
/// by many tests. Job ids are 1 and 2.
pub fn init_board_with_jobs(db_path: &str) {
    init_board(db_path);
    login(db_path, "Walter Black", "employer");

    gig()
        .args([
            "--db",
            db_path,
            "post",
            "Leaky Faucet Repair",
            "--category",
            "Plumbing",
            "--pay",
            "₱500",
            "--location",
            "Zone 1",
        ])
        .assert()
        .success();

    gig()
        .args([
            "--db",
            db_path,
            "post",
            "Tutor in Algebra",
            "--category",
            "Tutoring",
            "--pay",
            "₱350/hr",
            "--location",
            "Zone 3",
        ])
        .assert()
        .success();
}

/// Helper to populate many jobs directly via the library DB API for performance tests
pub fn populate_many_jobs(db_path: &str, n: usize) {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    // ensure initialized
    gigboard::db::initialize::init_db(&conn).expect("init db");
    for i in 0..n {
        let job = gigboard::models::job::Job::new(
            &format!("Gig {}", i),
            "Errands",
            "₱100",
            "Zone 2",
            "Walter Black",
        )
        .expect("valid job");
        gigboard::db::queries::insert_job(&conn, &job).expect("insert job");
    }
}
