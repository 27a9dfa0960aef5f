use super::posture::Posture;
use serde::Serialize;

/// Durable fact: a dog reliably held a posture during one session.
#[derive(Debug, Clone, Serialize)]
pub struct ValidatedPosture {
    pub id: i64,
    pub dog_id: i64,
    pub posture: Posture,
    pub session_id: i64,
    pub validated_at: String,
}
