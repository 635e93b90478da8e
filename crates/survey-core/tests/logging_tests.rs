// Test suite for the logging facility
// Verifies the canonical start/end/end_error event shape.

use std::time::Instant;
use survey_core::errors::SurveyError;
use survey_core::logging_facility::test_capture::init_test_capture;
use survey_core::{log_op_end, log_op_error, log_op_start};

#[test]
fn test_start_and_end_events_are_captured() {
    let capture = init_test_capture();
    let started = Instant::now();

    log_op_start!("logging_test_ok", storage_key = "k");
    log_op_end!("logging_test_ok", started = started, record_count = 2u64);

    capture.assert_event_exists("logging_test_ok", "start");
    capture.assert_event_exists("logging_test_ok", "end");
    let end = capture
        .events_for("logging_test_ok")
        .into_iter()
        .find(|e| e.event.as_deref() == Some("end"))
        .unwrap();
    assert!(end.field("duration_ms").is_some());
    assert_eq!(end.field("record_count"), Some("2"));
}

#[test]
fn test_error_event_carries_code() {
    let capture = init_test_capture();
    let started = Instant::now();
    let err = SurveyError::EmptyStore;

    log_op_error!("logging_test_err", err, started = started);

    let events = capture.events_for("logging_test_err");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event.as_deref(), Some("end_error"));
    assert_eq!(events[0].field("err_code"), Some("ERR_EMPTY_STORE"));
    // The error is still usable after logging
    assert_eq!(err, SurveyError::EmptyStore);
}
