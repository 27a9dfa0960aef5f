use super::{outcome::Outcome, posture::Posture};
use serde::Serialize;

/// Optional per-attempt performance figures reported by the detector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PerfMetrics {
    pub processing_ms: Option<i64>,
    pub frames_processed: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Attempt {
    pub id: i64,
    pub session_id: i64,
    pub clip_id: i64,
    pub posture: Posture, // copy of the session posture
    pub confidence: f64,
    pub outcome: Outcome,
    pub recorded_at: String,
    pub processing_ms: Option<i64>,
    pub frames_processed: Option<i64>,
}

/// Input for RecordAttempt.
#[derive(Debug, Clone, Copy)]
pub struct NewAttempt {
    pub session_id: i64,
    pub clip_id: i64,
    pub confidence: f64,
    pub outcome: Outcome,
    pub metrics: PerfMetrics,
}
