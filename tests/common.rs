#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use dogposture::config::Config;
use dogposture::core::dogs::DogRegistry;
use dogposture::core::ledger::SessionLedger;
use dogposture::db::pool::DbPool;
use dogposture::db::queries;
use dogposture::models::attempt::{NewAttempt, PerfMetrics};
use dogposture::models::dog::NewDog;
use dogposture::models::outcome::Outcome;
use dogposture::models::posture::Posture;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn dp() -> Command {
    cargo_bin_cmd!("dogposture")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_dogposture.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_dogposture_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Config pointing at a fresh test database file
pub fn test_config(name: &str) -> Config {
    Config::with_database(setup_test_db(name))
}

/// Fresh, migrated database opened through the library API
pub fn open_pool(name: &str) -> DbPool {
    DbPool::open(&test_config(name)).expect("open db")
}

pub fn add_dog(pool: &mut DbPool, name: &str) -> i64 {
    DogRegistry::create_dog(
        pool,
        &NewDog {
            name: name.to_string(),
            ..Default::default()
        },
    )
    .expect("create dog")
    .id
}

/// Register `n` clips for `posture`; returns their ids in insertion order
pub fn add_clips(pool: &mut DbPool, posture: Posture, n: usize) -> Vec<i64> {
    (1..=n)
        .map(|i| {
            let path = format!("/clips/chien_{}_{}.mp4", posture, i);
            assert!(queries::insert_clip(&pool.conn, posture, &path, None).expect("insert clip"));
            pool.conn.last_insert_rowid()
        })
        .collect()
}

pub fn start_session(pool: &mut DbPool, dog_id: i64, posture: Posture) -> i64 {
    SessionLedger::start_session(pool, dog_id, posture)
        .expect("start session")
        .id
}

pub fn attempt(session_id: i64, clip_id: i64, outcome: Outcome, confidence: f64) -> NewAttempt {
    NewAttempt {
        session_id,
        clip_id,
        confidence,
        outcome,
        metrics: PerfMetrics::default(),
    }
}

/// Initialize a DB through the CLI, then seed it with one dog and assis clips
pub fn init_db_with_data(db_path: &str, clips_dir: &std::path::Path) {
    dp().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    for name in ["chien_assis_1.mp4", "chien_assis_2.mp4", "chien_debout_1.mp4"] {
        fs::write(clips_dir.join(name), b"").expect("write clip");
    }

    dp().args(["--db", db_path, "seed", "--dir"])
        .arg(clips_dir)
        .assert()
        .success();

    dp().args(["--db", db_path, "dog", "add", "--name", "Rex"])
        .assert()
        .success();
}
