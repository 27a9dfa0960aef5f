//! Session ledger: lifecycle of a validation session (one dog × one posture).
//!
//! A session is `OPEN` until the attempt that brings its success count to
//! [`VALIDATION_THRESHOLD`]; that attempt flips it to `VALIDATED`, stamps the
//! end time and records exactly one [`ValidatedPosture`]. Every success counts,
//! including repeats on the same clip.

use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::attempt::{Attempt, NewAttempt};
use crate::models::posture::Posture;
use crate::models::session::{Session, SessionStatus, VALIDATION_THRESHOLD};
use crate::models::validated::ValidatedPosture;
use chrono::Utc;
use rusqlite::{Connection, TransactionBehavior};

/// Outcome of RecordAttempt.
#[derive(Debug, Clone)]
pub struct RecordedAttempt {
    pub attempt: Attempt,
    pub success_count: i64,
    pub total_frames_processed: i64,
    /// Set only on the attempt that validated the session.
    pub newly_validated: Option<ValidatedPosture>,
}

pub struct SessionLedger;

pub(crate) fn session_not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Session with id {} not found", id))
}

pub(crate) fn dog_not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Dog with id {} not found", id))
}

pub(crate) fn require_session(conn: &Connection, id: i64) -> AppResult<Session> {
    queries::load_session(conn, id)?.ok_or_else(|| session_not_found(id))
}

fn check_attempt_arguments(attempt: &NewAttempt) -> AppResult<()> {
    if !attempt.confidence.is_finite() || !(0.0..=1.0).contains(&attempt.confidence) {
        return Err(AppError::InvalidArgument(format!(
            "Confidence {} is outside [0, 1]",
            attempt.confidence
        )));
    }
    if attempt.metrics.frames_processed.is_some_and(|f| f < 0) {
        return Err(AppError::InvalidArgument(
            "frames_processed cannot be negative".into(),
        ));
    }
    if attempt.metrics.processing_ms.is_some_and(|ms| ms < 0) {
        return Err(AppError::InvalidArgument(
            "processing_ms cannot be negative".into(),
        ));
    }
    Ok(())
}

impl SessionLedger {
    pub fn start_session(pool: &mut DbPool, dog_id: i64, posture: Posture) -> AppResult<Session> {
        let tx = pool.conn.transaction()?;

        if queries::load_dog(&tx, dog_id)?.is_none() {
            log::warn!("Attempted to create session for non-existent dog_id: {dog_id}");
            return Err(dog_not_found(dog_id));
        }

        let id = queries::insert_session(&tx, dog_id, posture)?;
        ttlog(
            &tx,
            "session_start",
            &format!("session {id}"),
            &format!("Started '{posture}' session for dog {dog_id}"),
        )?;
        let session = require_session(&tx, id)?;
        tx.commit()?;

        log::info!("Created session {id} for dog {dog_id}, posture '{posture}'");
        Ok(session)
    }

    /// Append an attempt and re-evaluate the session.
    ///
    /// Runs under `BEGIN IMMEDIATE`: the write lock is held from the session read
    /// to the commit, so two writers can never both observe the count below the
    /// threshold and both validate.
    pub fn record_attempt(pool: &mut DbPool, attempt: &NewAttempt) -> AppResult<RecordedAttempt> {
        check_attempt_arguments(attempt)?;

        let tx = pool
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let session = queries::load_session(&tx, attempt.session_id)?.ok_or_else(|| {
            log::warn!("Posture attempt failed: session {} not found", attempt.session_id);
            session_not_found(attempt.session_id)
        })?;

        let clip = queries::load_clip(&tx, attempt.clip_id)?.ok_or_else(|| {
            log::warn!("Posture attempt failed: reference clip {} not found", attempt.clip_id);
            AppError::NotFound(format!(
                "Reference clip with id {} not found",
                attempt.clip_id
            ))
        })?;

        // Compare against the session row, never the denormalized copy.
        if clip.posture != session.posture {
            log::warn!(
                "Posture mismatch in session {}: clip posture '{}' != session posture '{}'",
                session.id,
                clip.posture,
                session.posture
            );
            return Err(AppError::InvalidArgument(format!(
                "Reference clip {} (posture: {}) does not match session posture ({})",
                clip.id, clip.posture, session.posture
            )));
        }

        let attempt_id = queries::insert_attempt(&tx, attempt, session.posture)?;
        let total_frames = queries::refresh_session_frames(&tx, session.id)?;
        let success_count = queries::count_successes(&tx, session.id)?;

        ttlog(
            &tx,
            "attempt",
            &format!("session {}", session.id),
            &format!(
                "Clip {} → {} ({:.2})",
                clip.id, attempt.outcome, attempt.confidence
            ),
        )?;

        let mut newly_validated = None;
        if !session.validated && success_count >= VALIDATION_THRESHOLD {
            let now = Utc::now().to_rfc3339();
            if queries::mark_session_validated(&tx, session.id, &now)? {
                let vp_id = queries::insert_validated_posture(
                    &tx,
                    session.dog_id,
                    session.posture,
                    session.id,
                    &now,
                )?;
                ttlog(
                    &tx,
                    "validated",
                    &format!("dog {}", session.dog_id),
                    &format!(
                        "Posture '{}' validated in session {} after {} successes",
                        session.posture, session.id, success_count
                    ),
                )?;
                newly_validated = Some(ValidatedPosture {
                    id: vp_id,
                    dog_id: session.dog_id,
                    posture: session.posture,
                    session_id: session.id,
                    validated_at: now,
                });
            }
        }

        let stored = queries::load_attempt(&tx, attempt_id)?
            .ok_or_else(|| AppError::Other(format!("attempt {attempt_id} vanished after insert")))?;

        tx.commit()?;

        log::info!(
            "Recorded attempt {} for session {} with result '{}'",
            stored.id,
            stored.session_id,
            stored.outcome
        );
        if newly_validated.is_some() {
            log::info!(
                "Session {} validated: posture '{}' for dog {}",
                session.id,
                session.posture,
                session.dog_id
            );
        }

        Ok(RecordedAttempt {
            attempt: stored,
            success_count,
            total_frames_processed: total_frames,
            newly_validated,
        })
    }

    pub fn get_session(pool: &mut DbPool, session_id: i64) -> AppResult<Session> {
        require_session(&pool.conn, session_id)
    }

    /// Sessions, optionally restricted to one dog (which must exist).
    pub fn list_sessions(pool: &mut DbPool, dog_id: Option<i64>) -> AppResult<Vec<Session>> {
        if let Some(d) = dog_id
            && queries::load_dog(&pool.conn, d)?.is_none()
        {
            return Err(dog_not_found(d));
        }
        Ok(queries::list_sessions(&pool.conn, dog_id)?)
    }

    pub fn session_status(pool: &mut DbPool, session_id: i64) -> AppResult<SessionStatus> {
        let conn = &pool.conn;
        let session = require_session(conn, session_id)?;

        Ok(SessionStatus {
            session_id: session.id,
            dog_id: session.dog_id,
            posture: session.posture,
            validated: session.validated,
            success_count: queries::count_successes(conn, session.id)?,
            attempt_count: queries::count_attempts(conn, session.id)?,
            distinct_clips_used: queries::used_clip_ids(conn, session.id)?,
            total_frames_processed: session.total_frames_processed,
            ended_at: session.ended_at,
        })
    }

    pub fn list_attempts(pool: &mut DbPool, session_id: i64) -> AppResult<Vec<Attempt>> {
        require_session(&pool.conn, session_id)?;
        Ok(queries::list_attempts(&pool.conn, Some(session_id))?)
    }

    pub fn list_validated_postures(
        pool: &mut DbPool,
        dog_id: i64,
    ) -> AppResult<Vec<ValidatedPosture>> {
        if queries::load_dog(&pool.conn, dog_id)?.is_none() {
            return Err(dog_not_found(dog_id));
        }
        Ok(queries::list_validated_by_dog(&pool.conn, dog_id)?)
    }
}
