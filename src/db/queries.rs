use crate::errors::AppError;
use crate::models::attempt::{Attempt, NewAttempt};
use crate::models::clip::ReferenceClip;
use crate::models::dog::{Dog, NewDog};
use crate::models::outcome::Outcome;
use crate::models::posture::Posture;
use crate::models::session::Session;
use crate::models::validated::ValidatedPosture;
use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

// ---------------------------
// Column decoding
// ---------------------------

fn posture_col(row: &Row, name: &str) -> Result<Posture> {
    let raw: String = row.get(name)?;
    Posture::from_db_str(&raw).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidPosture(raw.clone())),
        )
    })
}

fn outcome_col(row: &Row, name: &str) -> Result<Outcome> {
    let raw: String = row.get(name)?;
    Outcome::from_db_str(&raw).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}

fn collect<T>(rows: impl Iterator<Item = Result<T>>) -> Result<Vec<T>> {
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn map_dog(row: &Row) -> Result<Dog> {
    Ok(Dog {
        id: row.get("id")?,
        name: row.get("name")?,
        breed: row.get("breed")?,
        owner_name: row.get("owner_name")?,
        created_at: row.get("created_at")?,
    })
}

pub fn map_clip(row: &Row) -> Result<ReferenceClip> {
    Ok(ReferenceClip {
        id: row.get("id")?,
        posture: posture_col(row, "posture")?,
        video_path: row.get("video_path")?,
        description: row.get("description")?,
    })
}

pub fn map_session(row: &Row) -> Result<Session> {
    Ok(Session {
        id: row.get("id")?,
        dog_id: row.get("dog_id")?,
        posture: posture_col(row, "posture")?,
        started_at: row.get("started_at")?,
        ended_at: row.get("ended_at")?,
        total_frames_processed: row.get("total_frames_processed")?,
        validated: row.get::<_, i32>("validated")? == 1,
    })
}

pub fn map_attempt(row: &Row) -> Result<Attempt> {
    Ok(Attempt {
        id: row.get("id")?,
        session_id: row.get("session_id")?,
        clip_id: row.get("clip_id")?,
        posture: posture_col(row, "posture")?,
        confidence: row.get("confidence")?,
        outcome: outcome_col(row, "outcome")?,
        recorded_at: row.get("recorded_at")?,
        processing_ms: row.get("processing_ms")?,
        frames_processed: row.get("frames_processed")?,
    })
}

pub fn map_validated(row: &Row) -> Result<ValidatedPosture> {
    Ok(ValidatedPosture {
        id: row.get("id")?,
        dog_id: row.get("dog_id")?,
        posture: posture_col(row, "posture")?,
        session_id: row.get("session_id")?,
        validated_at: row.get("validated_at")?,
    })
}

// ---------------------------
// Dogs
// ---------------------------

pub fn insert_dog(conn: &Connection, dog: &NewDog) -> Result<i64> {
    conn.execute(
        "INSERT INTO dogs (name, breed, owner_name, created_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![dog.name, dog.breed, dog.owner_name, Utc::now().to_rfc3339()],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_dog(conn: &Connection, id: i64) -> Result<Option<Dog>> {
    conn.query_row("SELECT * FROM dogs WHERE id = ?1", [id], map_dog)
        .optional()
}

pub fn list_dogs(conn: &Connection, skip: usize, limit: usize) -> Result<Vec<Dog>> {
    let mut stmt = conn.prepare("SELECT * FROM dogs ORDER BY id ASC LIMIT ?1 OFFSET ?2")?;
    let rows = stmt.query_map(params![limit as i64, skip as i64], map_dog)?;
    collect(rows)
}

// ---------------------------
// Reference clips
// ---------------------------

/// Insert a clip unless its path is already known. Returns true when a row was added.
pub fn insert_clip(
    conn: &Connection,
    posture: Posture,
    video_path: &str,
    description: Option<&str>,
) -> Result<bool> {
    let n = conn.execute(
        "INSERT OR IGNORE INTO reference_clips (posture, video_path, description)
         VALUES (?1, ?2, ?3)",
        params![posture.to_db_str(), video_path, description],
    )?;
    Ok(n > 0)
}

pub fn load_clip(conn: &Connection, id: i64) -> Result<Option<ReferenceClip>> {
    conn.query_row("SELECT * FROM reference_clips WHERE id = ?1", [id], map_clip)
        .optional()
}

/// Clips for one posture (or all), in id order.
pub fn list_clips(conn: &Connection, posture: Option<Posture>) -> Result<Vec<ReferenceClip>> {
    match posture {
        Some(p) => {
            let mut stmt = conn
                .prepare("SELECT * FROM reference_clips WHERE posture = ?1 ORDER BY id ASC")?;
            let rows = stmt.query_map([p.to_db_str()], map_clip)?;
            collect(rows)
        }
        None => {
            let mut stmt = conn.prepare("SELECT * FROM reference_clips ORDER BY id ASC")?;
            let rows = stmt.query_map([], map_clip)?;
            collect(rows)
        }
    }
}

// ---------------------------
// Sessions
// ---------------------------

pub fn insert_session(conn: &Connection, dog_id: i64, posture: Posture) -> Result<i64> {
    conn.execute(
        "INSERT INTO sessions (dog_id, posture, started_at, total_frames_processed, validated)
         VALUES (?1, ?2, ?3, 0, 0)",
        params![dog_id, posture.to_db_str(), Utc::now().to_rfc3339()],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_session(conn: &Connection, id: i64) -> Result<Option<Session>> {
    conn.query_row("SELECT * FROM sessions WHERE id = ?1", [id], map_session)
        .optional()
}

pub fn list_sessions(conn: &Connection, dog_id: Option<i64>) -> Result<Vec<Session>> {
    match dog_id {
        Some(d) => {
            let mut stmt =
                conn.prepare("SELECT * FROM sessions WHERE dog_id = ?1 ORDER BY id ASC")?;
            let rows = stmt.query_map([d], map_session)?;
            collect(rows)
        }
        None => {
            let mut stmt = conn.prepare("SELECT * FROM sessions ORDER BY id ASC")?;
            let rows = stmt.query_map([], map_session)?;
            collect(rows)
        }
    }
}

/// Recompute `total_frames_processed` from the attempt log and store it.
pub fn refresh_session_frames(conn: &Connection, session_id: i64) -> Result<i64> {
    let total: i64 = conn.query_row(
        "SELECT COALESCE(SUM(frames_processed), 0) FROM attempts WHERE session_id = ?1",
        [session_id],
        |row| row.get(0),
    )?;
    conn.execute(
        "UPDATE sessions SET total_frames_processed = ?1 WHERE id = ?2",
        params![total, session_id],
    )?;
    Ok(total)
}

/// Flip an open session to validated. Returns false if it was already validated.
pub fn mark_session_validated(conn: &Connection, session_id: i64, ended_at: &str) -> Result<bool> {
    let n = conn.execute(
        "UPDATE sessions SET validated = 1, ended_at = ?1
         WHERE id = ?2 AND validated = 0",
        params![ended_at, session_id],
    )?;
    Ok(n == 1)
}

// ---------------------------
// Attempts
// ---------------------------

pub fn insert_attempt(conn: &Connection, attempt: &NewAttempt, posture: Posture) -> Result<i64> {
    conn.execute(
        "INSERT INTO attempts (session_id, clip_id, posture, confidence, outcome, recorded_at, processing_ms, frames_processed)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            attempt.session_id,
            attempt.clip_id,
            posture.to_db_str(),
            attempt.confidence,
            attempt.outcome.to_db_str(),
            Utc::now().to_rfc3339(),
            attempt.metrics.processing_ms,
            attempt.metrics.frames_processed,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_attempt(conn: &Connection, id: i64) -> Result<Option<Attempt>> {
    conn.query_row("SELECT * FROM attempts WHERE id = ?1", [id], map_attempt)
        .optional()
}

pub fn list_attempts(conn: &Connection, session_id: Option<i64>) -> Result<Vec<Attempt>> {
    match session_id {
        Some(s) => {
            let mut stmt =
                conn.prepare("SELECT * FROM attempts WHERE session_id = ?1 ORDER BY id ASC")?;
            let rows = stmt.query_map([s], map_attempt)?;
            collect(rows)
        }
        None => {
            let mut stmt = conn.prepare("SELECT * FROM attempts ORDER BY id ASC")?;
            let rows = stmt.query_map([], map_attempt)?;
            collect(rows)
        }
    }
}

pub fn count_successes(conn: &Connection, session_id: i64) -> Result<i64> {
    conn.query_row(
        "SELECT COUNT(*) FROM attempts WHERE session_id = ?1 AND outcome = 'success'",
        [session_id],
        |row| row.get(0),
    )
}

pub fn count_attempts(conn: &Connection, session_id: i64) -> Result<i64> {
    conn.query_row(
        "SELECT COUNT(*) FROM attempts WHERE session_id = ?1",
        [session_id],
        |row| row.get(0),
    )
}

/// Distinct clip ids attempted in a session, ascending.
pub fn used_clip_ids(conn: &Connection, session_id: i64) -> Result<Vec<i64>> {
    let mut stmt = conn.prepare(
        "SELECT DISTINCT clip_id FROM attempts WHERE session_id = ?1 ORDER BY clip_id ASC",
    )?;
    let rows = stmt.query_map([session_id], |row| row.get::<_, i64>(0))?;
    collect(rows)
}

// ---------------------------
// Validated postures
// ---------------------------

pub fn insert_validated_posture(
    conn: &Connection,
    dog_id: i64,
    posture: Posture,
    session_id: i64,
    validated_at: &str,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO validated_postures (dog_id, posture, session_id, validated_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![dog_id, posture.to_db_str(), session_id, validated_at],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn list_validated_by_dog(conn: &Connection, dog_id: i64) -> Result<Vec<ValidatedPosture>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM validated_postures WHERE dog_id = ?1 ORDER BY validated_at ASC, id ASC",
    )?;
    let rows = stmt.query_map([dog_id], map_validated)?;
    collect(rows)
}

pub fn count_validated_for_session(conn: &Connection, session_id: i64) -> Result<i64> {
    conn.query_row(
        "SELECT COUNT(*) FROM validated_postures WHERE session_id = ?1",
        [session_id],
        |row| row.get(0),
    )
}
