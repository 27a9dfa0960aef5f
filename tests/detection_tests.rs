use dogposture::core::detection::DetectionIntake;
use dogposture::errors::ErrorCategory;
use dogposture::models::outcome::Outcome;
use dogposture::models::posture::Posture;

const REPORT: &str = r#"{
    "detections": [
        {"class_name": "assis", "confidence": 0.42, "bbox": [1, 2, 3, 4]},
        {"class_name": "Assis", "confidence": 0.81, "bbox": [1, 2, 3, 4]},
        {"class_name": "debout", "confidence": 0.97, "bbox": [5, 6, 7, 8]}
    ],
    "total_detections": 3,
    "prediction_time": 0.25,
    "avg_confidence": 0.73,
    "frames_processed": 90
}"#;

#[test]
fn best_matching_detection_decides_the_outcome() {
    let report = DetectionIntake::parse_report(REPORT).unwrap();

    let assis = report.classify(Posture::Assis, 0.5);
    assert_eq!(assis.outcome, Outcome::Success);
    assert!((assis.confidence - 0.81).abs() < 1e-9);

    assert_eq!(report.classify(Posture::Assis, 0.9).outcome, Outcome::Fail);

    let pieds = report.classify(Posture::APieds, 0.0);
    assert_eq!(pieds.outcome, Outcome::Fail);
    assert_eq!(pieds.confidence, 0.0);
}

#[test]
fn report_becomes_an_attempt_with_metrics() {
    let report = DetectionIntake::parse_report(REPORT).unwrap();

    assert_eq!(report.total_detections, 3);
    assert!((report.avg_confidence - 0.73).abs() < 1e-9);

    let attempt = DetectionIntake::to_attempt(&report, 3, 9, Posture::Debout, 0.5).unwrap();

    assert_eq!(attempt.session_id, 3);
    assert_eq!(attempt.clip_id, 9);
    assert_eq!(attempt.outcome, Outcome::Success);
    assert_eq!(attempt.metrics.processing_ms, Some(250));
    assert_eq!(attempt.metrics.frames_processed, Some(90));
}

#[test]
fn minimal_report_uses_defaults() {
    let report = DetectionIntake::parse_report(r#"{"detections": []}"#).unwrap();

    assert_eq!(report.frames_processed, 0);
    assert_eq!(report.classify(Posture::Assis, 0.5).outcome, Outcome::Fail);
}

#[test]
fn garbage_report_is_a_bad_request() {
    let err = DetectionIntake::parse_report("{not json").unwrap_err();
    assert_eq!(err.category(), ErrorCategory::BadRequest);

    let report = DetectionIntake::parse_report(REPORT).unwrap();
    assert!(DetectionIntake::to_attempt(&report, 1, 1, Posture::Assis, 1.5).is_err());
}
