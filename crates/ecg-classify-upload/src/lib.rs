#![warn(missing_docs)]
//! # ecg-classify-upload
//!
//! ## Purpose
//! Submits a record selection to the prediction service and returns the
//! interpreted classification.
//!
//! ## Responsibilities
//! - Validate the configured service endpoint (`http`/`https`, no query).
//! - Pack every selected file into one multipart `POST /predict_file`.
//! - Execute requests through an injectable [`AnalysisTransport`].
//! - Query the service health root.
//!
//! ## Data flow
//! [`ecg_classify_core::SelectedFile`] slice -> [`AnalysisClient::submit`] ->
//! [`AnalysisTransport::post_files`] -> status + body ->
//! [`ecg_classify_contract::interpret_prediction_response`].
//!
//! ## Error model
//! Empty selections fail before any transport call. Transport, status, and
//! contract failures are wrapped in [`UploadError`]; there are no retries and
//! no timeout beyond the transport default.

use std::sync::Arc;

use ecg_classify_contract::{
    AnalysisContractError, AnalysisResult, GENERIC_FAILURE_MESSAGE, HealthStatus,
    interpret_prediction_response, parse_health_response,
};
use ecg_classify_core::{SelectedFile, ValidationError, submission_fingerprint};
use thiserror::Error;
use url::Url;

/// Path of the prediction route relative to the service base.
pub const PREDICT_PATH: &str = "/predict_file";

/// Multipart field name repeated once per file.
pub const FILES_FIELD: &str = "files";

/// Raw exchange result returned by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

/// Abstract transport used by [`AnalysisClient`].
pub trait AnalysisTransport: Send + Sync {
    /// Posts `files` as repeated multipart [`FILES_FIELD`] parts to `url`.
    fn post_files(&self, url: &str, files: &[SelectedFile])
    -> Result<TransportResponse, UploadError>;

    /// Issues a plain `GET` to `url`.
    fn get(&self, url: &str) -> Result<TransportResponse, UploadError>;
}

/// Blocking HTTP transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Builds a transport with default client settings.
    ///
    /// # Errors
    /// Returns [`UploadError::Transport`] when the TLS backend cannot be
    /// initialised.
    pub fn new() -> Result<Self, UploadError> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|error| UploadError::Transport(error.to_string()))?;
        Ok(Self { client })
    }
}

impl AnalysisTransport for HttpTransport {
    fn post_files(
        &self,
        url: &str,
        files: &[SelectedFile],
    ) -> Result<TransportResponse, UploadError> {
        let mut form = reqwest::blocking::multipart::Form::new();
        for file in files {
            let part = reqwest::blocking::multipart::Part::bytes(file.content().to_vec())
                .file_name(file.name().to_string())
                .mime_str("application/octet-stream")
                .map_err(|error| UploadError::Transport(error.to_string()))?;
            form = form.part(FILES_FIELD, part);
        }

        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .map_err(|error| UploadError::Transport(error.to_string()))?;
        read_response(response)
    }

    fn get(&self, url: &str) -> Result<TransportResponse, UploadError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|error| UploadError::Transport(error.to_string()))?;
        read_response(response)
    }
}

fn read_response(response: reqwest::blocking::Response) -> Result<TransportResponse, UploadError> {
    let status = response.status().as_u16();
    let body = response
        .text()
        .map_err(|error| UploadError::Transport(error.to_string()))?;
    Ok(TransportResponse { status, body })
}

/// Prediction service client bound to one validated endpoint.
#[derive(Clone)]
pub struct AnalysisClient {
    base: String,
    transport: Arc<dyn AnalysisTransport>,
}

impl AnalysisClient {
    /// Creates a client for `endpoint`.
    ///
    /// # Errors
    /// Returns [`UploadError::InvalidEndpoint`] when the endpoint fails
    /// [`validate_analysis_endpoint`].
    pub fn new(
        endpoint: impl AsRef<str>,
        transport: Arc<dyn AnalysisTransport>,
    ) -> Result<Self, UploadError> {
        let url = validate_analysis_endpoint(endpoint.as_ref())?;
        Ok(Self {
            base: url.as_str().trim_end_matches('/').to_string(),
            transport,
        })
    }

    /// Normalised service base without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// Full prediction route.
    pub fn predict_url(&self) -> String {
        format!("{}{PREDICT_PATH}", self.base)
    }

    /// Submits `files` as one record and interprets the response.
    ///
    /// # Errors
    /// - [`UploadError::Validation`] when `files` is empty; no request is sent.
    /// - [`UploadError::Transport`] when the exchange itself fails.
    /// - [`UploadError::Analysis`] for status, flag, or contract failures.
    pub fn submit(&self, files: &[SelectedFile]) -> Result<AnalysisResult, UploadError> {
        if files.is_empty() {
            return Err(UploadError::Validation(ValidationError::EmptySelection));
        }

        let url = self.predict_url();
        let fingerprint = submission_fingerprint(files);
        let total_bytes: u64 = files.iter().map(SelectedFile::size_bytes).sum();
        tracing::info!(
            stage = "upload",
            action = "submit",
            url = %url,
            file_count = files.len(),
            total_bytes,
            fingerprint = %fingerprint,
            "submitting record for analysis"
        );

        let response = self.transport.post_files(&url, files)?;
        tracing::info!(
            stage = "upload",
            action = "response",
            status = response.status,
            body_len = response.body.len(),
            fingerprint = %fingerprint,
            "prediction service responded"
        );

        let result = interpret_prediction_response(response.status, &response.body)?;
        Ok(result)
    }

    /// Reads the service health payload.
    ///
    /// # Errors
    /// Returns [`UploadError::Transport`] on exchange failure and
    /// [`UploadError::Analysis`] for non-2xx statuses or undecodable bodies.
    pub fn check_health(&self) -> Result<HealthStatus, UploadError> {
        let url = format!("{}/", self.base);
        let response = self.transport.get(&url)?;
        if !(200..300).contains(&response.status) {
            return Err(UploadError::Analysis(AnalysisContractError::Rejected {
                status: response.status,
                message: format!("health check returned status {}", response.status),
            }));
        }
        Ok(parse_health_response(&response.body)?)
    }
}

/// Validates the prediction service base URL.
///
/// # Errors
/// Returns [`UploadError::InvalidEndpoint`] when the URL does not parse, is
/// not `http`/`https`, has no host, or carries a query or fragment.
pub fn validate_analysis_endpoint(endpoint: &str) -> Result<Url, UploadError> {
    let parsed = Url::parse(endpoint.trim())
        .map_err(|error| UploadError::InvalidEndpoint(format!("invalid service url: {error}")))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(UploadError::InvalidEndpoint(format!(
            "unsupported scheme {}; expected http or https",
            parsed.scheme()
        )));
    }

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(UploadError::InvalidEndpoint(
            "service url has no host".to_string(),
        ));
    }

    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(UploadError::InvalidEndpoint(
            "service url must not carry a query or fragment".to_string(),
        ));
    }

    Ok(parsed)
}

/// Errors produced while submitting a record.
#[derive(Debug, Error)]
pub enum UploadError {
    /// Endpoint violates client policy.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
    /// Local validation failed before sending.
    #[error("validation failure: {0}")]
    Validation(#[from] ValidationError),
    /// Network/transport failure.
    #[error("transport failure: {0}")]
    Transport(String),
    /// Service response signalled failure or broke the contract.
    #[error(transparent)]
    Analysis(#[from] AnalysisContractError),
}

impl UploadError {
    /// Most specific text suitable for a user-facing notification.
    pub fn user_message(&self) -> String {
        match self {
            UploadError::InvalidEndpoint(reason) => {
                format!("{GENERIC_FAILURE_MESSAGE}: invalid service address ({reason})")
            }
            UploadError::Validation(error) => error.to_string(),
            UploadError::Transport(reason) => {
                format!("{GENERIC_FAILURE_MESSAGE}: could not reach server ({reason})")
            }
            UploadError::Analysis(error) => error.user_message(),
        }
    }
}
