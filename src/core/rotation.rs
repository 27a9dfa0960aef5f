//! Reference clip rotation: which clips to show next in a session.

use crate::core::ledger::require_session;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::clip::ReferenceClip;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

/// Pick up to `count` clips from `available`, unused ones first.
///
/// `available` is expected in id order. When at least `count` clips are
/// unused, the first `count` of them are returned as-is. Otherwise every
/// unused clip is returned, padded with a random sample (no duplicates) of
/// the already used ones, for a total of `min(count, available.len())`.
pub fn select_clips<R: Rng + ?Sized>(
    available: &[ReferenceClip],
    used: &HashSet<i64>,
    count: usize,
    rng: &mut R,
) -> Vec<ReferenceClip> {
    let (unused, seen): (Vec<&ReferenceClip>, Vec<&ReferenceClip>) =
        available.iter().partition(|c| !used.contains(&c.id));

    if unused.len() >= count {
        return unused.into_iter().take(count).cloned().collect();
    }

    let target = count.min(available.len());
    let padding = target - unused.len();

    let mut out: Vec<ReferenceClip> = unused.into_iter().cloned().collect();
    out.extend(seen.choose_multiple(rng, padding).map(|c| (*c).clone()));
    out
}

pub struct ClipRotation;

impl ClipRotation {
    pub fn next_clips(
        pool: &mut DbPool,
        session_id: i64,
        count: usize,
    ) -> AppResult<Vec<ReferenceClip>> {
        Self::next_clips_with_rng(pool, session_id, count, &mut rand::thread_rng())
    }

    pub fn next_clips_with_rng<R: Rng + ?Sized>(
        pool: &mut DbPool,
        session_id: i64,
        count: usize,
        rng: &mut R,
    ) -> AppResult<Vec<ReferenceClip>> {
        let session = require_session(&pool.conn, session_id)?;

        if count == 0 {
            return Err(AppError::InvalidArgument(
                "Clip count must be at least 1".into(),
            ));
        }

        let available = queries::list_clips(&pool.conn, Some(session.posture))?;
        if available.is_empty() {
            return Err(AppError::NoClipsAvailable(session.posture));
        }

        let used: HashSet<i64> = queries::used_clip_ids(&pool.conn, session.id)?
            .into_iter()
            .collect();

        let remaining = available.iter().filter(|c| !used.contains(&c.id)).count();
        if remaining < count {
            log::info!(
                "{remaining} unused clips left for session {session_id}; padding with previously used clips"
            );
        } else {
            log::debug!("{remaining} unused clips remaining for session {session_id}");
        }

        Ok(select_clips(&available, &used, count, rng))
    }
}
