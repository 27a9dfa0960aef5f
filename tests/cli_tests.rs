use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{dp, init_db_with_data, setup_test_db, temp_out};

fn record(db_path: &str, clip: &str, outcome: &str) -> assert_cmd::assert::Assert {
    dp().args([
        "--db",
        db_path,
        "attempt",
        "--session",
        "1",
        "--clip",
        clip,
        "--outcome",
        outcome,
        "--confidence",
        "0.9",
    ])
    .assert()
}

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("cli_init");

    dp().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    dp().args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("20260916_0002_add_lookup_indexes"));
}

#[test]
fn test_seed_and_list_clips() {
    let db_path = setup_test_db("cli_seed_clips");
    let clips = tempfile::tempdir().unwrap();
    init_db_with_data(&db_path, clips.path());

    dp().args(["--db", &db_path, "clips", "--posture", "assis"])
        .assert()
        .success()
        .stdout(contains("chien_assis_1.mp4"))
        .stdout(contains("chien_assis_2.mp4"))
        .stdout(contains("chien_debout_1.mp4").not());
}

#[test]
fn test_full_validation_flow() {
    let db_path = setup_test_db("cli_full_flow");
    let clips = tempfile::tempdir().unwrap();
    init_db_with_data(&db_path, clips.path());

    dp().args(["--db", &db_path, "session", "start", "--dog", "1", "--posture", "assis"])
        .assert()
        .success()
        .stdout(contains("Session 1 started"));

    record(&db_path, "1", "success").success().stdout(contains("1/4"));
    record(&db_path, "2", "fail").success();
    record(&db_path, "2", "success").success();
    record(&db_path, "1", "success").success();

    dp().args(["--db", &db_path, "status", "--session", "1"])
        .assert()
        .success()
        .stdout(contains("OPEN"))
        .stdout(contains("3/4"));

    record(&db_path, "2", "success")
        .success()
        .stdout(contains("Posture 'assis' validated for dog 1"));

    dp().args(["--db", &db_path, "status", "--session", "1", "--attempts"])
        .assert()
        .success()
        .stdout(contains("VALIDATED"))
        .stdout(contains("Attempts  : 5"));

    dp().args(["--db", &db_path, "validated", "--dog", "1"])
        .assert()
        .success()
        .stdout(contains("assis"));
}

#[test]
fn test_json_output() {
    let db_path = setup_test_db("cli_json");
    let clips = tempfile::tempdir().unwrap();
    init_db_with_data(&db_path, clips.path());

    dp().args(["--db", &db_path, "session", "start", "--dog", "1", "--posture", "assis"])
        .assert()
        .success();

    let out = dp()
        .args(["--db", &db_path, "--json", "next", "--session", "1", "--count", "4"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let clips: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let clips = clips.as_array().unwrap();
    assert_eq!(clips.len(), 2);
    assert!(clips.iter().all(|c| c["posture"] == "assis"));
}

#[test]
fn test_attempt_from_detector_report() {
    let db_path = setup_test_db("cli_report");
    let clips = tempfile::tempdir().unwrap();
    init_db_with_data(&db_path, clips.path());

    dp().args(["--db", &db_path, "session", "start", "--dog", "1", "--posture", "assis"])
        .assert()
        .success();

    let report = clips.path().join("report.json");
    fs::write(
        &report,
        r#"{"detections": [{"class_name": "assis", "confidence": 0.88}], "frames_processed": 60}"#,
    )
    .unwrap();

    dp().args(["--db", &db_path, "attempt", "--session", "1", "--clip", "1", "--report"])
        .arg(&report)
        .assert()
        .success()
        .stdout(contains("success"));

    dp().args(["--db", &db_path, "status", "--session", "1"])
        .assert()
        .success()
        .stdout(contains("Frames    : 60"));
}

#[test]
fn test_error_exit_codes() {
    let db_path = setup_test_db("cli_exit_codes");
    let clips = tempfile::tempdir().unwrap();
    init_db_with_data(&db_path, clips.path());

    // unknown session
    dp().args(["--db", &db_path, "status", "--session", "99"])
        .assert()
        .code(2)
        .stderr(contains("Session with id 99 not found"));

    // unknown dog
    dp().args(["--db", &db_path, "session", "start", "--dog", "7", "--posture", "debout"])
        .assert()
        .code(2);

    dp().args(["--db", &db_path, "session", "start", "--dog", "1", "--posture", "assis"])
        .assert()
        .success();

    // clip 3 is a debout clip
    record(&db_path, "3", "success")
        .code(3)
        .stderr(contains("does not match session posture"));

    // no a_pieds clips were seeded
    dp().args(["--db", &db_path, "session", "start", "--dog", "1", "--posture", "a_pieds"])
        .assert()
        .success();
    dp().args(["--db", &db_path, "next", "--session", "2"])
        .assert()
        .code(2)
        .stderr(contains("No reference clips found for posture a_pieds"));
}

#[test]
fn test_export_attempts_csv() {
    let db_path = setup_test_db("cli_export_csv");
    let out = temp_out("cli_export_csv", "csv");
    let clips = tempfile::tempdir().unwrap();
    init_db_with_data(&db_path, clips.path());

    dp().args(["--db", &db_path, "session", "start", "--dog", "1", "--posture", "assis"])
        .assert()
        .success();
    record(&db_path, "1", "success").success();
    record(&db_path, "2", "fail").success();

    dp().args(["--db", &db_path, "export", "--format", "csv", "--file", &out, "--force"])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).unwrap();
    let mut lines = content.lines();
    assert!(lines.next().unwrap().starts_with("id,session_id,dog_id,clip_id,posture"));
    assert_eq!(lines.count(), 2);
}

#[test]
fn test_export_rejects_relative_path() {
    let db_path = setup_test_db("cli_export_relative");

    dp().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    dp().args(["--db", &db_path, "export", "--file", "attempts.csv"])
        .assert()
        .code(3)
        .stderr(contains("must be absolute"));
}

#[test]
fn test_backup_copies_database() {
    let db_path = setup_test_db("cli_backup");
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("backup.sqlite");

    dp().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    dp().args(["--db", &db_path, "backup", "--force", "--file"])
        .arg(&dest)
        .assert()
        .success();

    assert!(dest.exists());

    dp().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("Backup created"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("cli_log");
    let clips = tempfile::tempdir().unwrap();
    init_db_with_data(&db_path, clips.path());

    dp().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("seed"))
        .stdout(contains("dog_add"));
}
