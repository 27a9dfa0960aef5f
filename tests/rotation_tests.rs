use dogposture::core::ledger::SessionLedger;
use dogposture::core::rotation::{ClipRotation, select_clips};
use dogposture::errors::{AppError, ErrorCategory};
use dogposture::models::clip::ReferenceClip;
use dogposture::models::outcome::Outcome;
use dogposture::models::posture::Posture;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;

mod common;
use common::{add_clips, add_dog, attempt, open_pool, start_session};

fn clip(id: i64) -> ReferenceClip {
    ReferenceClip {
        id,
        posture: Posture::Assis,
        video_path: format!("/clips/chien_assis_{id}.mp4"),
        description: None,
    }
}

fn ids(clips: &[ReferenceClip]) -> Vec<i64> {
    clips.iter().map(|c| c.id).collect()
}

#[test]
fn fresh_session_gets_first_unused_clips() {
    let available: Vec<_> = (1..=6).map(clip).collect();
    let mut rng = StdRng::seed_from_u64(7);

    let picked = select_clips(&available, &HashSet::new(), 4, &mut rng);

    assert_eq!(ids(&picked), vec![1, 2, 3, 4]);
}

#[test]
fn used_clips_pad_the_unused_ones() {
    let available: Vec<_> = (1..=5).map(clip).collect();
    let used: HashSet<i64> = [1, 2, 3].into_iter().collect();
    let mut rng = StdRng::seed_from_u64(42);

    let picked = select_clips(&available, &used, 4, &mut rng);

    assert_eq!(picked.len(), 4);
    assert_eq!(&ids(&picked)[..2], &[4, 5]);
    for id in &ids(&picked)[2..] {
        assert!(used.contains(id));
    }
    let unique: HashSet<i64> = ids(&picked).into_iter().collect();
    assert_eq!(unique.len(), 4);
}

#[test]
fn result_is_capped_by_available_clips() {
    let available: Vec<_> = (1..=3).map(clip).collect();
    let used: HashSet<i64> = [1, 2, 3].into_iter().collect();
    let mut rng = StdRng::seed_from_u64(1);

    let picked = select_clips(&available, &used, 10, &mut rng);

    let mut got = ids(&picked);
    got.sort();
    assert_eq!(got, vec![1, 2, 3]);
}

#[test]
fn same_seed_gives_same_padding() {
    let available: Vec<_> = (1..=8).map(clip).collect();
    let used: HashSet<i64> = (1..=7).collect();

    let a = select_clips(&available, &used, 4, &mut StdRng::seed_from_u64(99));
    let b = select_clips(&available, &used, 4, &mut StdRng::seed_from_u64(99));

    assert_eq!(ids(&a), ids(&b));
    assert_eq!(a[0].id, 8);
}

#[test]
fn next_clips_prefers_clips_not_yet_shown() {
    let mut pool = open_pool("rotation_prefers_unused");
    let dog = add_dog(&mut pool, "Rex");
    let clips = add_clips(&mut pool, Posture::Assis, 5);
    add_clips(&mut pool, Posture::Debout, 3);
    let session = start_session(&mut pool, dog, Posture::Assis);

    for c in &clips[..3] {
        SessionLedger::record_attempt(&mut pool, &attempt(session, *c, Outcome::Fail, 0.2)).unwrap();
    }

    let mut rng = StdRng::seed_from_u64(3);
    let picked = ClipRotation::next_clips_with_rng(&mut pool, session, 4, &mut rng).unwrap();

    assert_eq!(picked.len(), 4);
    assert_eq!(&ids(&picked)[..2], &clips[3..]);
    assert!(picked.iter().all(|c| c.posture == Posture::Assis));
    assert!(ids(&picked)[2..].iter().all(|id| clips[..3].contains(id)));
}

#[test]
fn next_clips_with_few_clips_returns_them_all() {
    let mut pool = open_pool("rotation_few_clips");
    let dog = add_dog(&mut pool, "Rex");
    let clips = add_clips(&mut pool, Posture::Debout, 2);
    let session = start_session(&mut pool, dog, Posture::Debout);

    let picked = ClipRotation::next_clips(&mut pool, session, 4).unwrap();

    assert_eq!(ids(&picked), clips);
}

#[test]
fn next_clips_without_reference_clips_fails() {
    let mut pool = open_pool("rotation_no_clips");
    let dog = add_dog(&mut pool, "Rex");
    add_clips(&mut pool, Posture::Assis, 2);
    let session = start_session(&mut pool, dog, Posture::APieds);

    let err = ClipRotation::next_clips(&mut pool, session, 4).unwrap_err();

    assert!(matches!(err, AppError::NoClipsAvailable(Posture::APieds)));
    assert_eq!(err.category(), ErrorCategory::NotFound);
}

#[test]
fn next_clips_rejects_zero_and_unknown_sessions() {
    let mut pool = open_pool("rotation_bad_input");
    let dog = add_dog(&mut pool, "Rex");
    add_clips(&mut pool, Posture::Assis, 2);
    let session = start_session(&mut pool, dog, Posture::Assis);

    let err = ClipRotation::next_clips(&mut pool, session, 0).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::BadRequest);

    let err = ClipRotation::next_clips(&mut pool, 31, 4).unwrap_err();
    assert_eq!(err.to_string(), "Session with id 31 not found");
}
