use serde::Serialize;

/// Flat attempt row, joined with its session's dog.
#[derive(Serialize, Clone, Debug)]
pub struct AttemptExport {
    pub id: i64,
    pub session_id: i64,
    pub dog_id: i64,
    pub clip_id: i64,
    pub posture: String,
    pub confidence: f64,
    pub outcome: String,
    pub recorded_at: String,
    pub processing_ms: Option<i64>,
    pub frames_processed: Option<i64>,
}
