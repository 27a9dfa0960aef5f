//! Turns a detector report into an attempt. The ledger never thresholds
//! confidence; that decision is made here, on the caller side.

use crate::errors::{AppError, AppResult};
use crate::models::attempt::{NewAttempt, PerfMetrics};
use crate::models::detection::DetectionReport;
use crate::models::posture::Posture;
use std::fs;
use std::path::Path;

pub struct DetectionIntake;

impl DetectionIntake {
    pub fn load_report(path: &Path) -> AppResult<DetectionReport> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::NotFound(format!(
                "Detection report {} could not be read: {e}",
                path.display()
            ))
        })?;
        Self::parse_report(&content)
    }

    pub fn parse_report(json: &str) -> AppResult<DetectionReport> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the attempt for `clip_id` from a report, judged against the session posture.
    pub fn to_attempt(
        report: &DetectionReport,
        session_id: i64,
        clip_id: i64,
        posture: Posture,
        min_confidence: f64,
    ) -> AppResult<NewAttempt> {
        if !(0.0..=1.0).contains(&min_confidence) {
            return Err(AppError::Config(format!(
                "min_confidence {min_confidence} is outside [0, 1]"
            )));
        }

        let class = report.classify(posture, min_confidence);
        log::debug!(
            "Report with {} detections ({} reported, avg confidence {:.2}) classified as {} ({:.2}) for '{posture}'",
            report.detections.len(),
            report.total_detections,
            report.avg_confidence,
            class.outcome,
            class.confidence
        );

        Ok(NewAttempt {
            session_id,
            clip_id,
            confidence: class.confidence,
            outcome: class.outcome,
            metrics: PerfMetrics {
                processing_ms: Some(report.processing_ms()),
                frames_processed: Some(report.frames_processed),
            },
        })
    }
}
