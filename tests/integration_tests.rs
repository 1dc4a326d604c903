use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{gig, init_board, init_board_with_jobs, login, setup_test_db};

// ---------------------------------------------------------------
// Scenario A: post → listed + workers notified
// ---------------------------------------------------------------

#[test]
fn test_post_job_appears_in_listing() {
    let db_path = setup_test_db("post_listing");
    init_board_with_jobs(&db_path);

    gig()
        .args(["--db", &db_path, "jobs"])
        .assert()
        .success()
        .stdout(contains("Leaky Faucet Repair"))
        .stdout(contains("Tutor in Algebra"))
        .stdout(contains("Available Gigs (2)"));
}

#[test]
fn test_post_job_notifies_workers() {
    let db_path = setup_test_db("post_notify");
    init_board_with_jobs(&db_path);

    login(&db_path, "Bensoy Gon", "worker");

    gig()
        .args(["--db", &db_path, "notifications"])
        .assert()
        .success()
        .stdout(contains("New Gig Alert"))
        .stdout(contains("Leaky Faucet Repair"))
        .stdout(contains("Welcome!"));
}

#[test]
fn test_employer_does_not_see_worker_alerts() {
    let db_path = setup_test_db("post_notify_employer");
    init_board_with_jobs(&db_path);

    // Still logged in as the employer: the gig alert targets Workers.
    gig()
        .args(["--db", &db_path, "notifications"])
        .assert()
        .success()
        .stdout(contains("New Gig Alert").not())
        .stdout(contains("Welcome!"));
}

// ---------------------------------------------------------------
// Scenario B: apply → pending application + employer alert
// ---------------------------------------------------------------

#[test]
fn test_worker_applies_to_job() {
    let db_path = setup_test_db("apply_ok");
    init_board_with_jobs(&db_path);

    login(&db_path, "Bensoy Gon", "worker");

    gig()
        .args(["--db", &db_path, "apply", "1"])
        .assert()
        .success()
        .stdout(contains("Applied for \"Leaky Faucet Repair\""));

    gig()
        .args(["--db", &db_path, "applicants", "1"])
        .assert()
        .success()
        .stdout(contains("Bensoy Gon"))
        .stdout(contains("Pending"));

    // Applicant-facing receipt
    gig()
        .args(["--db", &db_path, "notifications"])
        .assert()
        .success()
        .stdout(contains("Application Sent"));

    // Employer-facing alert
    login(&db_path, "Walter Black", "employer");
    gig()
        .args(["--db", &db_path, "notifications"])
        .assert()
        .success()
        .stdout(contains("New Applicant"))
        .stdout(contains("Bensoy Gon"));
}

#[test]
fn test_my_applications_listing() {
    let db_path = setup_test_db("my_applications");
    init_board_with_jobs(&db_path);

    login(&db_path, "Bensoy Gon", "worker");
    gig().args(["--db", &db_path, "apply", "2"]).assert().success();

    gig()
        .args(["--db", &db_path, "applications"])
        .assert()
        .success()
        .stdout(contains("Tutor in Algebra"))
        .stdout(contains("Pending"))
        .stdout(contains("Waiting for response"));
}

// ---------------------------------------------------------------
// Scenario C: accept → hired + conflict on re-accept
// ---------------------------------------------------------------

#[test]
fn test_accept_applicant_and_double_accept_conflict() {
    let db_path = setup_test_db("accept_flow");
    init_board_with_jobs(&db_path);

    login(&db_path, "Bensoy Gon", "worker");
    gig().args(["--db", &db_path, "apply", "1"]).assert().success();

    login(&db_path, "Walter Black", "employer");
    gig()
        .args(["--db", &db_path, "accept", "1"])
        .assert()
        .success()
        .stdout(contains("Hired Bensoy Gon"));

    gig()
        .args(["--db", &db_path, "applicants", "1"])
        .assert()
        .success()
        .stdout(contains("Accepted"));

    // The applicant is told they were hired.
    login(&db_path, "Bensoy Gon", "worker");
    gig()
        .args(["--db", &db_path, "notifications"])
        .assert()
        .success()
        .stdout(contains("You got the Job!"))
        .stdout(contains("hired"));

    // Accepting the same application twice is a conflict.
    login(&db_path, "Walter Black", "employer");
    gig()
        .args(["--db", &db_path, "accept", "1"])
        .assert()
        .failure()
        .stderr(contains("Conflict"));
}

#[test]
fn test_accept_fills_job_and_rejects_competitors() {
    let db_path = setup_test_db("accept_autoclose");
    init_board_with_jobs(&db_path);

    login(&db_path, "Bensoy Gon", "worker");
    gig().args(["--db", &db_path, "apply", "1"]).assert().success();

    login(&db_path, "Maria Cruz", "worker");
    gig().args(["--db", &db_path, "apply", "1"]).assert().success();

    login(&db_path, "Walter Black", "employer");
    gig()
        .args(["--db", &db_path, "accept", "1"])
        .assert()
        .success()
        .stdout(contains("auto-rejected"));

    gig()
        .args(["--db", &db_path, "jobs"])
        .assert()
        .success()
        .stdout(contains("Filled"));

    gig()
        .args(["--db", &db_path, "applicants", "1"])
        .assert()
        .success()
        .stdout(contains("Accepted"))
        .stdout(contains("Hired"))
        .stdout(contains("Rejected"))
        .stdout(contains("Not selected"));

    // The losing applicant is told the gig was filled, and can no
    // longer apply to it.
    login(&db_path, "Maria Cruz", "worker");
    gig()
        .args(["--db", &db_path, "notifications"])
        .assert()
        .success()
        .stdout(contains("Application Update"));

    login(&db_path, "Juan Reyes", "worker");
    gig()
        .args(["--db", &db_path, "apply", "1"])
        .assert()
        .failure()
        .stderr(contains("Conflict"))
        .stderr(contains("no longer open"));
}

// ---------------------------------------------------------------
// Scenario D: unknown ids
// ---------------------------------------------------------------

#[test]
fn test_apply_to_unknown_job_fails_cleanly() {
    let db_path = setup_test_db("apply_unknown");
    init_board(&db_path);

    login(&db_path, "Bensoy Gon", "worker");

    gig()
        .args(["--db", &db_path, "apply", "999"])
        .assert()
        .failure()
        .stderr(contains("Not found"));

    // No application was created.
    gig()
        .args(["--db", &db_path, "applications"])
        .assert()
        .success()
        .stdout(contains("No applications yet."));
}

#[test]
fn test_accept_unknown_application_fails() {
    let db_path = setup_test_db("accept_unknown");
    init_board(&db_path);

    login(&db_path, "Walter Black", "employer");

    gig()
        .args(["--db", &db_path, "accept", "424242"])
        .assert()
        .failure()
        .stderr(contains("Not found"));
}

#[test]
fn test_non_numeric_id_is_rejected() {
    let db_path = setup_test_db("bad_id");
    init_board(&db_path);

    login(&db_path, "Bensoy Gon", "worker");

    gig()
        .args(["--db", &db_path, "apply", "first"])
        .assert()
        .failure()
        .stderr(contains("Invalid id"));
}

// ---------------------------------------------------------------
// Authorization (P2)
// ---------------------------------------------------------------

#[test]
fn test_worker_cannot_post() {
    let db_path = setup_test_db("worker_post");
    init_board(&db_path);

    login(&db_path, "Bensoy Gon", "worker");

    gig()
        .args([
            "--db",
            &db_path,
            "post",
            "Fix sink",
            "--category",
            "Plumbing",
            "--pay",
            "₱500",
            "--location",
            "Zone 1",
        ])
        .assert()
        .failure()
        .stderr(contains("Not allowed"));
}

#[test]
fn test_employer_cannot_apply() {
    let db_path = setup_test_db("employer_apply");
    init_board_with_jobs(&db_path);

    gig()
        .args(["--db", &db_path, "apply", "1"])
        .assert()
        .failure()
        .stderr(contains("Not allowed"));
}

#[test]
fn test_commands_require_a_session() {
    let db_path = setup_test_db("no_session");
    init_board(&db_path);

    gig()
        .args(["--db", &db_path, "notifications"])
        .assert()
        .failure()
        .stderr(contains("no active session"));
}

#[test]
fn test_foreign_employer_cannot_accept() {
    let db_path = setup_test_db("foreign_accept");
    init_board_with_jobs(&db_path);

    login(&db_path, "Bensoy Gon", "worker");
    gig().args(["--db", &db_path, "apply", "1"]).assert().success();

    login(&db_path, "Another Employer", "employer");
    gig()
        .args(["--db", &db_path, "accept", "1"])
        .assert()
        .failure()
        .stderr(contains("Not allowed"));
}

// ---------------------------------------------------------------
// Validation
// ---------------------------------------------------------------

#[test]
fn test_post_with_empty_title_is_rejected() {
    let db_path = setup_test_db("empty_title");
    init_board(&db_path);

    login(&db_path, "Walter Black", "employer");

    gig()
        .args([
            "--db",
            &db_path,
            "post",
            "  ",
            "--category",
            "Plumbing",
            "--pay",
            "₱500",
            "--location",
            "Zone 1",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid input"));

    gig()
        .args(["--db", &db_path, "jobs"])
        .assert()
        .success()
        .stdout(contains("No gigs found."));
}

#[test]
fn test_login_with_unknown_role_fails() {
    let db_path = setup_test_db("bad_role");
    init_board(&db_path);

    gig()
        .args(["--db", &db_path, "login", "--name", "X", "--role", "manager"])
        .assert()
        .failure()
        .stderr(contains("Invalid role"));
}

// ---------------------------------------------------------------
// Duplicate applications
// ---------------------------------------------------------------

#[test]
fn test_duplicate_application_is_a_conflict() {
    let db_path = setup_test_db("duplicate_apply");
    init_board_with_jobs(&db_path);

    login(&db_path, "Bensoy Gon", "worker");
    gig().args(["--db", &db_path, "apply", "1"]).assert().success();

    gig()
        .args(["--db", &db_path, "apply", "1"])
        .assert()
        .failure()
        .stderr(contains("already applied"));
}

// ---------------------------------------------------------------
// Queries: search, --mine, idempotence (P4)
// ---------------------------------------------------------------

#[test]
fn test_jobs_search_matches_title_and_category() {
    let db_path = setup_test_db("search");
    init_board_with_jobs(&db_path);

    gig()
        .args(["--db", &db_path, "jobs", "--search", "faucet"])
        .assert()
        .success()
        .stdout(contains("Leaky Faucet Repair"))
        .stdout(contains("Tutor in Algebra").not());

    gig()
        .args(["--db", &db_path, "jobs", "--search", "TUTOR"])
        .assert()
        .success()
        .stdout(contains("Tutor in Algebra"))
        .stdout(contains("Leaky Faucet Repair").not());

    gig()
        .args(["--db", &db_path, "jobs", "--search", "carpentry"])
        .assert()
        .success()
        .stdout(contains("No gigs found."));
}

#[test]
fn test_jobs_mine_filters_by_poster() {
    let db_path = setup_test_db("mine");
    init_board_with_jobs(&db_path);

    login(&db_path, "Another Employer", "employer");
    gig()
        .args([
            "--db",
            &db_path,
            "post",
            "Paint the Fence",
            "--category",
            "Household Chores",
            "--pay",
            "₱300",
            "--location",
            "Zone 2",
        ])
        .assert()
        .success();

    gig()
        .args(["--db", &db_path, "jobs", "--mine"])
        .assert()
        .success()
        .stdout(contains("Paint the Fence"))
        .stdout(contains("Leaky Faucet Repair").not());
}

#[test]
fn test_repeated_jobs_query_is_identical() {
    let db_path = setup_test_db("idempotent_query");
    init_board_with_jobs(&db_path);

    let first = gig()
        .args(["--db", &db_path, "jobs"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let second = gig()
        .args(["--db", &db_path, "jobs"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(first, second);
}

// ---------------------------------------------------------------
// Sessions
// ---------------------------------------------------------------

#[test]
fn test_login_logout_whoami_cycle() {
    let db_path = setup_test_db("session_cycle");
    init_board(&db_path);

    gig()
        .args(["--db", &db_path, "whoami"])
        .assert()
        .success()
        .stdout(contains("No active session."));

    login(&db_path, "Bensoy Gon", "worker");

    gig()
        .args(["--db", &db_path, "whoami"])
        .assert()
        .success()
        .stdout(contains("Bensoy Gon (Worker)"));

    gig()
        .args(["--db", &db_path, "logout"])
        .assert()
        .success()
        .stdout(contains("Logged out Bensoy Gon."));

    gig()
        .args(["--db", &db_path, "whoami"])
        .assert()
        .success()
        .stdout(contains("No active session."));
}

#[test]
fn test_jobseeker_alias_logs_in_as_worker() {
    let db_path = setup_test_db("jobseeker_alias");
    init_board(&db_path);

    gig()
        .args([
            "--db",
            &db_path,
            "login",
            "--name",
            "Bensoy Gon",
            "--role",
            "jobseeker",
        ])
        .assert()
        .success()
        .stdout(contains("(Worker)"));
}

// ---------------------------------------------------------------
// Internal log
// ---------------------------------------------------------------

#[test]
fn test_internal_log_records_operations() {
    let db_path = setup_test_db("oplog");
    init_board_with_jobs(&db_path);

    login(&db_path, "Bensoy Gon", "worker");
    gig().args(["--db", &db_path, "apply", "1"]).assert().success();

    gig()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("post"))
        .stdout(contains("apply"))
        .stdout(contains("login"));
}

// ---------------------------------------------------------------
// Db maintenance
// ---------------------------------------------------------------

#[test]
fn test_db_check_and_info() {
    let db_path = setup_test_db("db_maint");
    init_board_with_jobs(&db_path);

    gig()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed."));

    gig()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("jobs"))
        .stdout(contains("notifications"));
}

#[test]
fn test_db_migrate_is_idempotent() {
    let db_path = setup_test_db("db_migrate_twice");
    init_board(&db_path);

    for _ in 0..2 {
        gig()
            .args(["--db", &db_path, "db", "--migrate"])
            .assert()
            .success()
            .stdout(contains("Migration completed."));
    }
}
