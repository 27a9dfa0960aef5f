use dogposture::core::seed::{ClipSeeder, is_video_file, normalize_posture_tokens, parse_clip_filename};
use dogposture::db::queries;
use dogposture::errors::AppError;
use dogposture::models::posture::Posture;
use std::fs;

mod common;
use common::open_pool;

#[test]
fn filenames_map_to_postures() {
    let cases = [
        ("chien_assis_1.mp4", Posture::Assis, 1),
        ("chiens_debout_12.MOV", Posture::Debout, 12),
        ("chien a pieds_3.avi", Posture::APieds, 3),
        ("a_pieds_7.webm", Posture::APieds, 7),
        ("Chien-Debout_2.mkv", Posture::Debout, 2),
    ];

    for (name, posture, index) in cases {
        let parsed = parse_clip_filename(name).unwrap();
        assert_eq!(parsed.posture, posture, "{name}");
        assert_eq!(parsed.index, index, "{name}");
    }
}

#[test]
fn filler_words_are_dropped() {
    assert_eq!(normalize_posture_tokens("chien_assis"), "assis");
    assert_eq!(normalize_posture_tokens("chiens  a   pieds"), "a_pieds");
    assert_eq!(normalize_posture_tokens("chien"), "");
}

#[test]
fn malformed_names_are_rejected() {
    for name in ["assis.mp4", "chien_assis_x.mp4", "chien_1.mp4", "chien_couche_1.mp4"] {
        assert!(parse_clip_filename(name).is_err(), "{name}");
    }
    assert!(matches!(
        parse_clip_filename("chien_couche_1.mp4"),
        Err(AppError::InvalidPosture(_))
    ));
}

#[test]
fn only_video_extensions_are_considered() {
    assert!(is_video_file("chien_assis_1.mp4"));
    assert!(is_video_file("chien_assis_1.WebM"));
    assert!(!is_video_file("notes.txt"));
    assert!(!is_video_file("chien_assis_1"));
}

#[test]
fn seeding_registers_clips_once() {
    let dir = tempfile::tempdir().unwrap();
    for name in [
        "chien_assis_1.mp4",
        "chien_assis_2.mp4",
        "chien_debout_1.mov",
        "chien_couche_1.mp4",
        "README.txt",
    ] {
        fs::write(dir.path().join(name), b"").unwrap();
    }
    let mut pool = open_pool("seed_registers_once");

    let report = ClipSeeder::seed_directory(&mut pool, dir.path()).unwrap();
    assert_eq!(report.inserted, 3);
    assert_eq!(report.already_present, 0);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].0, "chien_couche_1.mp4");

    let assis = queries::list_clips(&pool.conn, Some(Posture::Assis)).unwrap();
    assert_eq!(assis.len(), 2);
    assert!(assis[0].video_path.ends_with("chien_assis_1.mp4"));
    assert!(assis[1].video_path.ends_with("chien_assis_2.mp4"));

    let again = ClipSeeder::seed_directory(&mut pool, dir.path()).unwrap();
    assert_eq!(again.inserted, 0);
    assert_eq!(again.already_present, 3);
    assert_eq!(queries::list_clips(&pool.conn, None).unwrap().len(), 3);
}

#[test]
fn missing_directory_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let mut pool = open_pool("seed_missing_dir");

    let err = ClipSeeder::seed_directory(&mut pool, &dir.path().join("nope")).unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}
