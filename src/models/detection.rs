//! Detector output, as emitted by the external posture detector.
//!
//! The detector itself is a black box; this module only reads its JSON report
//! and lets the caller turn it into an attempt outcome.

use super::{outcome::Outcome, posture::Posture};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Detection {
    pub class_name: String,
    pub confidence: f64,
    #[serde(default)]
    pub bbox: Vec<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DetectionReport {
    pub detections: Vec<Detection>,
    #[serde(default)]
    pub total_detections: usize,
    /// Seconds spent by the model on the whole clip.
    #[serde(default)]
    pub prediction_time: f64,
    #[serde(default)]
    pub avg_confidence: f64,
    #[serde(default)]
    pub frames_processed: i64,
}

/// Caller-side classification of a report against a posture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub outcome: Outcome,
    pub confidence: f64,
}

impl DetectionReport {
    /// Best confidence among detections labelled with `posture` (0 when absent).
    pub fn best_confidence_for(&self, posture: Posture) -> f64 {
        self.detections
            .iter()
            .filter(|d| Posture::from_label(&d.class_name).ok() == Some(posture))
            .map(|d| d.confidence)
            .fold(0.0, f64::max)
    }

    pub fn classify(&self, posture: Posture, min_confidence: f64) -> Classification {
        let confidence = self.best_confidence_for(posture);
        let outcome = if confidence > 0.0 && confidence >= min_confidence {
            Outcome::Success
        } else {
            Outcome::Fail
        };
        Classification {
            outcome,
            confidence,
        }
    }

    pub fn processing_ms(&self) -> i64 {
        (self.prediction_time * 1000.0).round() as i64
    }
}
