use super::posture::Posture;
use serde::Serialize;

/// Number of successful attempts that validates a session.
pub const VALIDATION_THRESHOLD: i64 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SessionState {
    Open,
    Validated,
}

#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: i64,
    pub dog_id: i64,
    pub posture: Posture,
    pub started_at: String,       // ⇔ sessions.started_at (RFC 3339)
    pub ended_at: Option<String>, // set once, on validation
    pub total_frames_processed: i64,
    pub validated: bool,
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Open => "OPEN",
            SessionState::Validated => "VALIDATED",
        }
    }
}

impl Session {
    pub fn state(&self) -> SessionState {
        if self.validated {
            SessionState::Validated
        } else {
            SessionState::Open
        }
    }
}

/// Aggregated view returned by `status`.
#[derive(Debug, Clone, Serialize)]
pub struct SessionStatus {
    pub session_id: i64,
    pub dog_id: i64,
    pub posture: Posture,
    pub validated: bool,
    pub success_count: i64,
    pub attempt_count: i64,
    pub distinct_clips_used: Vec<i64>,
    pub total_frames_processed: i64,
    pub ended_at: Option<String>,
}

impl SessionStatus {
    /// Successes still needed before the session validates.
    pub fn remaining(&self) -> i64 {
        (VALIDATION_THRESHOLD - self.success_count).max(0)
    }
}
