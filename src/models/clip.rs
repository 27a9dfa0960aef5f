use super::posture::Posture;
use serde::Serialize;

/// A pre-recorded reference video tagged with the posture it shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceClip {
    pub id: i64,
    pub posture: Posture,
    pub video_path: String,
    pub description: Option<String>,
}
