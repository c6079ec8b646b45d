//! Shared fixtures for upload integration tests.

use std::sync::Mutex;

use ecg_classify_core::SelectedFile;
use ecg_classify_upload::{AnalysisTransport, TransportResponse, UploadError};

/// Successful body for a normal record.
#[allow(dead_code)]
pub const NORMAL_BODY: &str = r#"{
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
    }
}"#;

/// Creates the `record1` fixture pair.
#[allow(dead_code)]
pub fn record_files() -> Vec<SelectedFile> {
    vec![
        SelectedFile::new("record1.dat", vec![7; 500_000]),
        SelectedFile::new("record1.hea", vec![b'h'; 300]),
    ]
}

/// Transport returning one canned response and recording requests.
#[allow(dead_code)]
#[derive(Debug)]
pub struct CannedTransport {
    response: Result<TransportResponse, String>,
    /// `(url, file names)` per call.
    pub calls: Mutex<Vec<(String, Vec<String>)>>,
}

#[allow(dead_code)]
impl CannedTransport {
    /// Responds with `status` and `body` to every call.
    #[allow(dead_code)]
    pub fn replying(status: u16, body: &str) -> Self {
        Self {
            response: Ok(TransportResponse {
                status,
                body: body.to_string(),
            }),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Fails every call with a transport error.
    #[allow(dead_code)]
    pub fn failing(reason: &str) -> Self {
        Self {
            response: Err(reason.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Number of recorded calls.
    #[allow(dead_code)]
    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("calls lock should work").len()
    }

    fn record(&self, url: &str, files: &[SelectedFile]) -> Result<TransportResponse, UploadError> {
        self.calls.lock().expect("calls lock should work").push((
            url.to_string(),
            files.iter().map(|file| file.name().to_string()).collect(),
        ));
        self.response.clone().map_err(UploadError::Transport)
    }
}

impl AnalysisTransport for CannedTransport {
    fn post_files(
        &self,
        url: &str,
        files: &[SelectedFile],
    ) -> Result<TransportResponse, UploadError> {
        self.record(url, files)
    }

    fn get(&self, url: &str) -> Result<TransportResponse, UploadError> {
        self.record(url, &[])
    }
}
