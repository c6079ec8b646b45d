//! Shared fixtures for app integration tests.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use ecg_classify_app::{AppController, Clock};
use ecg_classify_core::SelectedFile;
use ecg_classify_ui::recording::RecordingTarget;
use ecg_classify_upload::{AnalysisClient, AnalysisTransport, TransportResponse, UploadError};

/// Successful prediction for the `record1` fixture.
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

/// Creates the `record1.dat` (500000 bytes) + `record1.hea` (300 bytes) pair.
#[allow(dead_code)]
pub fn record_files() -> Vec<SelectedFile> {
    vec![
        SelectedFile::new("record1.dat", vec![0; 500_000]),
        SelectedFile::new("record1.hea", vec![b'#'; 300]),
    ]
}

/// Transport replying with one fixed status/body and counting posts.
#[allow(dead_code)]
#[derive(Debug)]
pub struct FixedTransport {
    status: u16,
    body: String,
    /// Number of posts received.
    pub posts: Mutex<u32>,
}

impl FixedTransport {
    /// Creates a transport answering `status` with `body`.
    #[allow(dead_code)]
    pub fn new(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            status,
            body: body.to_string(),
            posts: Mutex::new(0),
        })
    }

    /// Posts received so far.
    #[allow(dead_code)]
    pub fn post_count(&self) -> u32 {
        *self.posts.lock().expect("post counter lock should work")
    }
}

impl AnalysisTransport for FixedTransport {
    fn post_files(
        &self,
        _url: &str,
        _files: &[SelectedFile],
    ) -> Result<TransportResponse, UploadError> {
        *self.posts.lock().expect("post counter lock should work") += 1;
        Ok(TransportResponse {
            status: self.status,
            body: self.body.clone(),
        })
    }

    fn get(&self, _url: &str) -> Result<TransportResponse, UploadError> {
        Ok(TransportResponse {
            status: self.status,
            body: self.body.clone(),
        })
    }
}

/// Transport that never reaches the server.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct UnreachableTransport;

impl AnalysisTransport for UnreachableTransport {
    fn post_files(
        &self,
        _url: &str,
        _files: &[SelectedFile],
    ) -> Result<TransportResponse, UploadError> {
        Err(UploadError::Transport("connection refused".to_string()))
    }

    fn get(&self, _url: &str) -> Result<TransportResponse, UploadError> {
        Err(UploadError::Transport("connection refused".to_string()))
    }
}

/// Hand-advanced clock shared between a controller and its transport.
#[allow(dead_code)]
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now_ms: Arc<AtomicU64>,
}

#[allow(dead_code)]
impl ManualClock {
    /// Moves the clock to `now_ms`.
    pub fn set(&self, now_ms: u64) {
        self.now_ms.store(now_ms, Ordering::SeqCst);
    }

    /// Current reading.
    pub fn now(&self) -> u64 {
        self.now_ms.load(Ordering::SeqCst)
    }

    /// Clock handle for [`AppController::with_clock`].
    pub fn as_clock(&self) -> Clock {
        let now_ms = Arc::clone(&self.now_ms);
        Arc::new(move || now_ms.load(Ordering::SeqCst))
    }
}

/// Transport whose exchange completes `elapsed_ms` after the clock reading
/// at send time.
#[allow(dead_code)]
#[derive(Debug)]
pub struct DelayedTransport {
    clock: ManualClock,
    elapsed_ms: u64,
    status: u16,
    body: String,
}

#[allow(dead_code)]
impl DelayedTransport {
    /// Creates a transport answering `status` with `body` after `elapsed_ms`.
    pub fn new(clock: &ManualClock, elapsed_ms: u64, status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            clock: clock.clone(),
            elapsed_ms,
            status,
            body: body.to_string(),
        })
    }
}

impl AnalysisTransport for DelayedTransport {
    fn post_files(
        &self,
        _url: &str,
        _files: &[SelectedFile],
    ) -> Result<TransportResponse, UploadError> {
        self.clock.set(self.clock.now() + self.elapsed_ms);
        Ok(TransportResponse {
            status: self.status,
            body: self.body.clone(),
        })
    }

    fn get(&self, _url: &str) -> Result<TransportResponse, UploadError> {
        Ok(TransportResponse {
            status: self.status,
            body: self.body.clone(),
        })
    }
}

/// Builds a controller over `transport` with a recording target and a clock
/// parked at zero.
#[allow(dead_code)]
pub fn controller(transport: Arc<dyn AnalysisTransport>) -> AppController<RecordingTarget> {
    controller_with_clock(transport, &ManualClock::default())
}

/// Builds a controller over `transport` reading time from `clock`.
#[allow(dead_code)]
pub fn controller_with_clock(
    transport: Arc<dyn AnalysisTransport>,
    clock: &ManualClock,
) -> AppController<RecordingTarget> {
    let client =
        AnalysisClient::new("http://localhost:8000", transport).expect("client should build");
    AppController::with_clock(client, RecordingTarget::new(), clock.as_clock())
}
