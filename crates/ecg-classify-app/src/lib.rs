#![warn(missing_docs)]
//! # ecg-classify-app
//!
//! ## Purpose
//! Orchestrates record intake, submission, and result presentation for
//! `ecg-classify`.
//!
//! ## Responsibilities
//! - Own the single [`SelectedFileSet`] and pass it explicitly to handlers.
//! - Bind [`UiEvent`]s to handlers in one dispatch point.
//! - Keep the preview in sync with every selection change.
//! - Drive the busy/restore cycle around the one network exchange.
//! - Turn every failure into an error notification.
//! - Resolve runtime configuration ([`AppConfig`]).
//!
//! ## Data flow
//! Picker/drop -> [`AppController::select_files`] -> preview projection ->
//! submit click -> [`AnalysisClient::submit`] -> result projection or error
//! notification.
//!
//! ## Ownership and lifetimes
//! The controller owns selection, surface, and client. Handlers run to
//! completion one at a time; nothing is shared across threads.
//!
//! ## Timing
//! Event handlers receive the time the event fired. Notifications raised
//! after the blocking exchange are stamped with the controller [`Clock`]
//! instead, so a slow request cannot expire them before they are shown.
//!
//! ## Error model
//! Handler failures are wrapped in [`AppError`]. [`AppController::handle_event`]
//! logs them and shows [`AppError::user_message`]; none are fatal.

pub mod terminal;

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use ecg_classify_contract::AnalysisResult;
use ecg_classify_core::{SelectedFile, SelectedFileSet, ValidationError};
use ecg_classify_ui::notify::NotificationSeverity;
use ecg_classify_ui::preview::project_preview;
use ecg_classify_ui::results::project_result;
use ecg_classify_ui::{RenderTarget, SubmitControl, UiState, UiSurface};
use ecg_classify_upload::{AnalysisClient, HttpTransport, UploadError, validate_analysis_endpoint};
use thiserror::Error;

/// Build-time application version loaded from root `VERSION` file.
pub const APP_VERSION: &str = env!("ECG_CLASSIFY_VERSION");

/// Service base used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000";

/// Environment variable overriding the service base.
pub const ENDPOINT_ENV_VAR: &str = "ECG_CLASSIFY_ENDPOINT";

/// Notification shown after a successful analysis.
pub const ANALYSIS_SUCCESS_MESSAGE: &str = "ECG analysis completed successfully!";

/// Returns the app version sourced from root `VERSION`.
pub fn app_version() -> &'static str {
    APP_VERSION
}

/// Epoch-millisecond time source consulted after blocking work.
pub type Clock = Arc<dyn Fn() -> u64 + Send + Sync>;

/// Current wall-clock time in epoch milliseconds, saturating at `u64::MAX`.
pub fn unix_timestamp_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or_default()
}

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Prediction service base URL.
    pub endpoint: String,
}

impl AppConfig {
    /// Resolves configuration from an explicit endpoint, falling back to
    /// [`DEFAULT_ENDPOINT`].
    ///
    /// # Errors
    /// Returns [`AppError::Config`] when the endpoint fails client policy.
    pub fn resolve(endpoint: Option<&str>) -> Result<Self, AppError> {
        let endpoint = endpoint
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_ENDPOINT);
        validate_analysis_endpoint(endpoint).map_err(|error| AppError::Config(error.to_string()))?;
        Ok(Self {
            endpoint: endpoint.to_string(),
        })
    }

    /// Builds an HTTP-backed client for the configured endpoint.
    ///
    /// # Errors
    /// Returns [`AppError::Upload`] when transport or client setup fails.
    pub fn build_client(&self) -> Result<AnalysisClient, AppError> {
        let transport = Arc::new(HttpTransport::new()?);
        Ok(AnalysisClient::new(&self.endpoint, transport)?)
    }
}

/// User and timer events understood by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Files chosen through the picker.
    FilesPicked(Vec<SelectedFile>),
    /// Files dropped on the drop zone.
    FilesDropped(Vec<SelectedFile>),
    /// Drag entered the drop zone.
    DragEnter,
    /// Drag left the drop zone without dropping.
    DragLeave,
    /// Remove control of the preview row at this position.
    RemoveClicked(usize),
    /// Clear-all control.
    ClearClicked,
    /// Submit control.
    SubmitClicked,
    /// Timer tick; only advances notification timers.
    Tick,
}

/// Workflow controller owning selection, surface, and client.
pub struct AppController<R: RenderTarget> {
    selection: SelectedFileSet,
    surface: UiSurface<R>,
    client: AnalysisClient,
    last_result: Option<AnalysisResult>,
    clock: Clock,
}

impl<R: RenderTarget> AppController<R> {
    /// Creates a controller on the wall clock and renders the empty state.
    pub fn new(client: AnalysisClient, target: R) -> Self {
        Self::with_clock(client, target, Arc::new(unix_timestamp_millis))
    }

    /// Creates a controller reading post-exchange time from `clock`.
    pub fn with_clock(client: AnalysisClient, target: R, clock: Clock) -> Self {
        Self {
            selection: SelectedFileSet::new(),
            surface: UiSurface::new(target),
            client,
            last_result: None,
            clock,
        }
    }

    /// Current selection.
    pub fn selection(&self) -> &SelectedFileSet {
        &self.selection
    }

    /// Visibility snapshot.
    pub fn ui_state(&self) -> &UiState {
        self.surface.state()
    }

    /// Surface wrapping the render target.
    pub fn surface(&self) -> &UiSurface<R> {
        &self.surface
    }

    /// Result of the most recent successful analysis still on screen.
    pub fn last_result(&self) -> Option<&AnalysisResult> {
        self.last_result.as_ref()
    }

    /// Single dispatch point for every [`UiEvent`].
    ///
    /// Failures become error notifications; notification timers advance to
    /// `now_ms` after the handler runs.
    pub fn handle_event(&mut self, event: UiEvent, now_ms: u64) {
        let outcome = match event {
            UiEvent::FilesPicked(files) => self.select_files(files),
            UiEvent::FilesDropped(files) => {
                self.surface.set_drop_highlight(false);
                self.select_files(files)
            }
            UiEvent::DragEnter => {
                self.surface.set_drop_highlight(true);
                Ok(())
            }
            UiEvent::DragLeave => {
                self.surface.set_drop_highlight(false);
                Ok(())
            }
            UiEvent::RemoveClicked(index) => {
                self.remove_at(index);
                Ok(())
            }
            UiEvent::ClearClicked => {
                self.clear_all();
                Ok(())
            }
            UiEvent::SubmitClicked => self.submit(now_ms).map(|_| ()),
            UiEvent::Tick => Ok(()),
        };

        let settled_ms = self.settled_ms(now_ms);
        if let Err(error) = outcome {
            tracing::error!(stage = "ui", action = "event", error = %error, "handler failed");
            self.surface
                .notify(error.user_message(), NotificationSeverity::Error, settled_ms);
        }

        self.surface.tick(settled_ms);
    }

    /// Later of `event_ms` and the clock; never moves time backwards.
    fn settled_ms(&self, event_ms: u64) -> u64 {
        event_ms.max((self.clock)())
    }

    /// Replaces the selection with `files` after validation.
    ///
    /// Empty input is ignored without validation. On success the preview is
    /// regenerated and submission enabled.
    ///
    /// # Errors
    /// Returns [`AppError::Validation`] and leaves the previous selection in
    /// place when `files` fails validation.
    pub fn select_files(&mut self, files: Vec<SelectedFile>) -> Result<(), AppError> {
        if files.is_empty() {
            return Ok(());
        }

        let count = files.len();
        self.selection.replace_validated(files)?;
        tracing::info!(
            stage = "intake",
            action = "select",
            file_count = count,
            total_bytes = self.selection.total_size_bytes(),
            "selection accepted"
        );

        self.surface.show_preview(&project_preview(&self.selection));
        self.surface.set_submit(SubmitControl::Enabled);
        Ok(())
    }

    /// Removes the preview entry at `index`.
    ///
    /// Removing the last entry hides the preview and disables submission.
    /// Out-of-range indices are ignored.
    pub fn remove_at(&mut self, index: usize) {
        let Some(removed) = self.selection.remove_at(index) else {
            tracing::warn!(stage = "intake", action = "remove", index, "index out of range");
            return;
        };
        tracing::info!(
            stage = "intake",
            action = "remove",
            index,
            name = removed.name(),
            remaining = self.selection.len(),
            "file removed"
        );

        if self.selection.is_empty() {
            self.surface.hide_preview();
            self.surface.set_submit(SubmitControl::Disabled);
        } else {
            self.surface.show_preview(&project_preview(&self.selection));
        }
    }

    /// Drops the selection and any shown results.
    pub fn clear_all(&mut self) {
        self.selection.clear();
        self.last_result = None;
        self.surface.reset_file_input();
        self.surface.hide_preview();
        self.surface.hide_results();
        self.surface.set_submit(SubmitControl::Disabled);
        tracing::info!(stage = "intake", action = "clear", "selection cleared");
    }

    /// Submits the selection and renders the outcome.
    ///
    /// The submit control shows the busy state for the duration of the
    /// exchange and is restored to enabled-iff-non-empty afterwards, whatever
    /// the outcome. The success notification is stamped with the time the
    /// exchange finished, not `now_ms`.
    ///
    /// # Errors
    /// - [`AppError::Validation`] when nothing is selected; no request is sent.
    /// - [`AppError::Upload`] for transport, status, or contract failures.
    pub fn submit(&mut self, now_ms: u64) -> Result<AnalysisResult, AppError> {
        if self.selection.is_empty() {
            return Err(AppError::Validation(ValidationError::EmptySelection));
        }

        self.surface.set_submit(SubmitControl::Busy);
        let outcome = self.client.submit(self.selection.files());
        self.surface
            .set_submit(SubmitControl::for_selection(!self.selection.is_empty()));

        let result = outcome?;
        let finished_ms = self.settled_ms(now_ms);
        tracing::info!(
            stage = "analysis",
            action = "complete",
            predicted_class = %result.predicted_class,
            confidence = ?result.confidence,
            "analysis completed"
        );

        self.surface.show_results(&project_result(&result));
        self.surface.notify(
            ANALYSIS_SUCCESS_MESSAGE,
            NotificationSeverity::Success,
            finished_ms,
        );
        self.last_result = Some(result.clone());
        Ok(result)
    }
}

/// App integration error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration rejected.
    #[error("configuration error: {0}")]
    Config(String),
    /// Local selection rule violated.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
    /// Submission failed.
    #[error("upload error: {0}")]
    Upload(#[from] UploadError),
}

impl AppError {
    /// Text shown in the error notification.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(reason) => reason.clone(),
            AppError::Validation(error) => error.to_string(),
            AppError::Upload(error) => error.user_message(),
        }
    }
}
