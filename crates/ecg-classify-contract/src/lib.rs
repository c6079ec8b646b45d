#![warn(missing_docs)]
//! # ecg-classify-contract
//!
//! ## Purpose
//! Defines the prediction service wire contract and client-side response
//! interpretation.
//!
//! ## Responsibilities
//! - Decode `/predict_file` success bodies into [`AnalysisResult`].
//! - Extract the most specific failure message from error bodies.
//! - Decode the service health payload.
//!
//! ## Data flow
//! HTTP status + raw body -> [`interpret_prediction_response`] ->
//! [`AnalysisResult`] for rendering, or [`AnalysisContractError`] carrying a
//! user-facing message.
//!
//! ## Ownership and lifetimes
//! Parsed values are owned structs so they outlive the transport buffer.
//!
//! ## Error model
//! Non-success statuses, `success: false` bodies, undecodable JSON, and
//! missing mandatory fields each map to one [`AnalysisContractError`]
//! variant. [`AnalysisContractError::user_message`] picks the text shown to
//! the user.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Fallback text when the service gives no usable failure detail.
pub const GENERIC_FAILURE_MESSAGE: &str = "Analysis failed";

/// Signal statistics computed by the service for the submitted record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalStats {
    /// Number of leads (channels).
    pub num_leads: u64,
    /// Samples per lead.
    pub signal_length: u64,
    /// Mean amplitude across all leads.
    pub mean_amplitude: f64,
    /// Standard deviation of amplitude.
    pub std_amplitude: f64,
    /// Minimum amplitude.
    pub min_amplitude: f64,
    /// Maximum amplitude.
    pub max_amplitude: f64,
}

impl SignalStats {
    /// Peak-to-peak amplitude (`max - min`).
    pub fn amplitude_range(&self) -> f64 {
        self.max_amplitude - self.min_amplitude
    }
}

/// Interpreted classification returned for one record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Always `true` once interpreted; kept for parity with the wire body.
    pub success: bool,
    /// Predicted class code (for example `NORM`).
    pub predicted_class: String,
    /// Model output index of the predicted class.
    pub predicted_class_index: i64,
    /// Probability in `[0.0, 1.0]`, when reported.
    pub confidence: Option<f64>,
    /// Signal statistics.
    pub ecg_stats: SignalStats,
    /// Optional service status message.
    pub message: Option<String>,
}

/// Health payload served at the service root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Free-form status message.
    #[serde(default)]
    pub message: String,
    /// Health keyword (`healthy` when serving).
    pub status: String,
    /// Service version.
    #[serde(default)]
    pub version: String,
}

impl HealthStatus {
    /// Returns `true` when the service reports itself healthy.
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

#[derive(Debug, Deserialize)]
struct PredictionWire {
    #[serde(default)]
    success: Value,
    predicted_class: Option<String>,
    predicted_class_index: Option<i64>,
    confidence: Option<f64>,
    ecg_stats: Option<SignalStats>,
    error: Option<String>,
    detail: Option<Value>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorWire {
    detail: Option<Value>,
    error: Option<String>,
}

/// Interprets one `/predict_file` exchange.
///
/// # Errors
/// - [`AnalysisContractError::Rejected`] for non-2xx statuses.
/// - [`AnalysisContractError::Unsuccessful`] when a 2xx body says
///   `success: false`, omits the flag, or carries a non-boolean flag.
/// - [`AnalysisContractError::Decode`] for undecodable 2xx bodies.
/// - [`AnalysisContractError::InvalidContract`] when mandatory fields are
///   missing from a successful body.
pub fn interpret_prediction_response(
    status: u16,
    body: &str,
) -> Result<AnalysisResult, AnalysisContractError> {
    if !(200..300).contains(&status) {
        let message =
            extract_error_detail(body).unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());
        return Err(AnalysisContractError::Rejected { status, message });
    }

    let wire: PredictionWire = serde_json::from_str(body).map_err(AnalysisContractError::Decode)?;

    // Anything but a literal `true` counts as a failed analysis.
    if wire.success != Value::Bool(true) {
        let message = wire
            .error
            .filter(|error| !error.trim().is_empty())
            .or_else(|| wire.detail.as_ref().and_then(detail_text))
            .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());
        return Err(AnalysisContractError::Unsuccessful(message));
    }

    let predicted_class = wire
        .predicted_class
        .filter(|code| !code.trim().is_empty())
        .ok_or_else(|| missing("predicted_class"))?;
    let predicted_class_index = wire
        .predicted_class_index
        .ok_or_else(|| missing("predicted_class_index"))?;
    let ecg_stats = wire.ecg_stats.ok_or_else(|| missing("ecg_stats"))?;

    Ok(AnalysisResult {
        success: true,
        predicted_class,
        predicted_class_index,
        confidence: wire.confidence,
        ecg_stats,
        message: wire.message,
    })
}

/// Extracts the most specific failure text from an error body.
///
/// `detail` wins over `error`. A string `detail` is used as-is; a list of
/// validation objects is reduced to their `msg` fields joined with `"; "`.
/// Returns `None` for non-JSON bodies or bodies without usable text.
pub fn extract_error_detail(body: &str) -> Option<String> {
    let wire: ErrorWire = serde_json::from_str(body).ok()?;
    wire.detail
        .as_ref()
        .and_then(detail_text)
        .or(wire.error)
        .filter(|text| !text.trim().is_empty())
}

/// Parses the service health payload.
///
/// # Errors
/// Returns [`AnalysisContractError::Decode`] for invalid JSON.
pub fn parse_health_response(body: &str) -> Result<HealthStatus, AnalysisContractError> {
    serde_json::from_str(body).map_err(AnalysisContractError::Decode)
}

fn detail_text(detail: &Value) -> Option<String> {
    match detail {
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        Value::Array(items) => {
            let messages: Vec<String> = items
                .iter()
                .filter_map(|item| match item {
                    Value::String(text) => Some(text.clone()),
                    Value::Object(fields) => fields
                        .get("msg")
                        .and_then(Value::as_str)
                        .map(str::to_string),
                    _ => None,
                })
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}

fn missing(field: &str) -> AnalysisContractError {
    AnalysisContractError::InvalidContract(format!("{field} is missing"))
}

/// Analysis contract errors.
#[derive(Debug, Error)]
pub enum AnalysisContractError {
    /// Service answered with a non-success status.
    #[error("analysis rejected with status {status}: {message}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Server-supplied detail or generic fallback.
        message: String,
    },
    /// Service answered 2xx but flagged the analysis as failed.
    #[error("analysis unsuccessful: {0}")]
    Unsuccessful(String),
    /// JSON decode failure.
    #[error("analysis decode failure: {0}")]
    Decode(#[from] serde_json::Error),
    /// Parsed payload violates contract invariants.
    #[error("analysis contract violation: {0}")]
    InvalidContract(String),
}

impl AnalysisContractError {
    /// Text suitable for a user-facing notification.
    pub fn user_message(&self) -> String {
        match self {
            AnalysisContractError::Rejected { message, .. } => message.clone(),
            AnalysisContractError::Unsuccessful(message) => message.clone(),
            AnalysisContractError::Decode(_) => {
                format!("{GENERIC_FAILURE_MESSAGE}: invalid response from server")
            }
            AnalysisContractError::InvalidContract(reason) => {
                format!("{GENERIC_FAILURE_MESSAGE}: invalid response ({reason})")
            }
        }
    }
}
