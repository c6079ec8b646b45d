//! Tests interpretation of `/predict_file` responses.

use ecg_classify_contract::{
    AnalysisContractError, GENERIC_FAILURE_MESSAGE, interpret_prediction_response,
    parse_health_response,
};

const NORMAL_BODY: &str = r#"{
    "success": true,
    "predicted_class": "NORM",
    "predicted_class_index": 0,
    "confidence": 0.97,
    "ecg_stats": {
        "num_leads": 12,
        "signal_length": 5000,
        "mean_amplitude": 0.002,
        "std_amplitude": 0.15,
        "min_amplitude": -1.2,
        "max_amplitude": 1.3
    },
    "message": "ECG classification completed successfully"
}"#;

#[test]
fn prediction_response_tests_accepts_successful_body() {
    let result = interpret_prediction_response(200, NORMAL_BODY).expect("body should parse");
    assert!(result.success);
    assert_eq!(result.predicted_class, "NORM");
    assert_eq!(result.predicted_class_index, 0);
    assert_eq!(result.confidence, Some(0.97));
    assert_eq!(result.ecg_stats.num_leads, 12);
    assert_eq!(result.ecg_stats.signal_length, 5000);
    assert!((result.ecg_stats.amplitude_range() - 2.5).abs() < 1e-9);
    assert_eq!(
        result.message.as_deref(),
        Some("ECG classification completed successfully")
    );
}

#[test]
fn prediction_response_tests_confidence_may_be_absent_or_null() {
    let without = NORMAL_BODY.replace("\"confidence\": 0.97,", "");
    let result = interpret_prediction_response(200, &without).expect("body should parse");
    assert_eq!(result.confidence, None);

    let null = NORMAL_BODY.replace("0.97", "null");
    let result = interpret_prediction_response(200, &null).expect("body should parse");
    assert_eq!(result.confidence, None);
}

#[test]
fn prediction_response_tests_non_success_status_carries_detail() {
    let error = interpret_prediction_response(400, r#"{"detail":"Invalid header"}"#)
        .expect_err("400 should fail");
    assert!(matches!(
        error,
        AnalysisContractError::Rejected { status: 400, .. }
    ));
    assert_eq!(error.user_message(), "Invalid header");
}

#[test]
fn prediction_response_tests_non_success_without_detail_uses_fallback() {
    for body in ["", "{}", "Bad Gateway"] {
        let error = interpret_prediction_response(502, body).expect_err("502 should fail");
        assert_eq!(error.user_message(), GENERIC_FAILURE_MESSAGE);
    }
}

#[test]
fn prediction_response_tests_success_flag_false_carries_error() {
    let error = interpret_prediction_response(200, r#"{"success":false,"error":"Model offline"}"#)
        .expect_err("unsuccessful body should fail");
    assert!(matches!(error, AnalysisContractError::Unsuccessful(_)));
    assert_eq!(error.user_message(), "Model offline");

    let error = interpret_prediction_response(200, r#"{"success":false}"#)
        .expect_err("unsuccessful body should fail");
    assert_eq!(error.user_message(), GENERIC_FAILURE_MESSAGE);
}

#[test]
fn prediction_response_tests_absent_or_malformed_flag_surfaces_error() {
    let error = interpret_prediction_response(200, r#"{"error":"Failed to read ECG files"}"#)
        .expect_err("flagless body should fail");
    assert!(matches!(error, AnalysisContractError::Unsuccessful(_)));
    assert_eq!(error.user_message(), "Failed to read ECG files");

    let error = interpret_prediction_response(200, r#"{"success":"yes","detail":"Invalid header"}"#)
        .expect_err("non-boolean flag should fail");
    assert_eq!(error.user_message(), "Invalid header");

    let error = interpret_prediction_response(200, "{}").expect_err("empty object should fail");
    assert_eq!(error.user_message(), GENERIC_FAILURE_MESSAGE);
}

#[test]
fn prediction_response_tests_missing_fields_violate_contract() {
    let error = interpret_prediction_response(200, r#"{"success":true,"predicted_class":"MI"}"#)
        .expect_err("incomplete body should fail");
    assert!(matches!(error, AnalysisContractError::InvalidContract(_)));
    assert!(error.user_message().starts_with(GENERIC_FAILURE_MESSAGE));
}

#[test]
fn prediction_response_tests_malformed_json_is_decode_error() {
    let error = interpret_prediction_response(200, "not json").expect_err("should fail");
    assert!(matches!(error, AnalysisContractError::Decode(_)));
}

#[test]
fn prediction_response_tests_parses_health_payload() {
    let health = parse_health_response(
        r#"{"message":"ECG Classification API is running","status":"healthy","version":"1.0.0"}"#,
    )
    .expect("health should parse");
    assert!(health.is_healthy());
    assert_eq!(health.version, "1.0.0");
}
