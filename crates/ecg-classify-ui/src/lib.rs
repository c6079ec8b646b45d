#![warn(missing_docs)]
//! # ecg-classify-ui
//!
//! ## Purpose
//! Presentation-agnostic view layer for the ECG upload workflow.
//!
//! ## Responsibilities
//! - Define the [`RenderTarget`] seam implemented by concrete shells.
//! - Project the file selection into preview rows ([`preview`]).
//! - Project an analysis result into a summary view ([`results`]).
//! - Time transient user notifications ([`notify`]).
//! - Mirror what is currently visible in [`UiState`].
//! - Offer an in-memory [`recording::RecordingTarget`] for tests.
//!
//! ## Data flow
//! Controller handlers call [`UiSurface`] methods, which update [`UiState`]
//! and forward the same change to the [`RenderTarget`].
//!
//! ## Ownership and lifetimes
//! Projections are owned values; render targets never borrow controller
//! state beyond a single call.
//!
//! ## Error model
//! Rendering is infallible from the controller's point of view. Shells that
//! can fail internally log and carry on.

pub mod notify;
pub mod preview;
pub mod recording;
pub mod results;

use crate::notify::{Notification, NotificationCenter, NotificationChange, NotificationSeverity};
use crate::preview::PreviewRow;
use crate::results::ResultView;

/// Label shown on the submit control while idle.
pub const SUBMIT_LABEL: &str = "Analyze ECG";

/// Label shown on the submit control while a request is in flight.
pub const BUSY_LABEL: &str = "Analyzing...";

/// Submit control presentation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitControl {
    /// Nothing to submit.
    Disabled,
    /// Ready to submit.
    Enabled,
    /// Request in flight; control disabled with busy indicator.
    Busy,
}

impl SubmitControl {
    /// Enabled iff `has_files`.
    pub fn for_selection(has_files: bool) -> Self {
        if has_files {
            SubmitControl::Enabled
        } else {
            SubmitControl::Disabled
        }
    }

    /// Returns `true` when the control accepts clicks.
    pub fn is_enabled(self) -> bool {
        self == SubmitControl::Enabled
    }

    /// Label for the control's content.
    pub fn label(self) -> &'static str {
        match self {
            SubmitControl::Busy => BUSY_LABEL,
            SubmitControl::Disabled | SubmitControl::Enabled => SUBMIT_LABEL,
        }
    }
}

/// Presentation layer driven by the controller.
///
/// Implementations replace their whole preview on every
/// [`RenderTarget::render_preview`] call; no diffing is expected.
pub trait RenderTarget {
    /// Shows the preview panel with exactly `rows`.
    fn render_preview(&mut self, rows: &[PreviewRow]);

    /// Hides the preview panel.
    fn hide_preview(&mut self);

    /// Applies submit control state.
    fn set_submit_control(&mut self, control: SubmitControl);

    /// Clears any native file-picker value.
    fn reset_file_input(&mut self);

    /// Toggles drag-over highlighting of the drop zone.
    fn set_drop_highlight(&mut self, active: bool);

    /// Shows the results area with `view` and scrolls it into view.
    fn render_results(&mut self, view: &ResultView);

    /// Hides the results area.
    fn hide_results(&mut self);

    /// Replaces notification icon, text, and severity style.
    fn update_notification(&mut self, notification: &Notification);

    /// Shows or hides the notification element.
    fn set_notification_visible(&mut self, visible: bool);
}

/// Snapshot of what the user currently sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    /// Preview panel visibility.
    pub preview_visible: bool,
    /// Rows currently in the preview.
    pub preview_len: usize,
    /// Results area visibility.
    pub results_visible: bool,
    /// Submit control state.
    pub submit: SubmitControl,
    /// Drop zone highlight.
    pub drop_highlight: bool,
    /// Notification element visibility.
    pub notification_visible: bool,
}

impl UiState {
    /// Empty-selection state.
    pub fn new() -> Self {
        Self {
            preview_visible: false,
            preview_len: 0,
            results_visible: false,
            submit: SubmitControl::Disabled,
            drop_highlight: false,
            notification_visible: false,
        }
    }

    /// Returns `true` when a click on submit would be handled.
    pub fn can_submit(&self) -> bool {
        self.submit.is_enabled()
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Render target paired with the state it is showing.
#[derive(Debug)]
pub struct UiSurface<R: RenderTarget> {
    target: R,
    state: UiState,
    notifications: NotificationCenter,
}

impl<R: RenderTarget> UiSurface<R> {
    /// Wraps `target` and pushes the empty-selection state to it.
    pub fn new(target: R) -> Self {
        let mut surface = Self {
            target,
            state: UiState::new(),
            notifications: NotificationCenter::new(),
        };
        surface.target.hide_preview();
        surface.target.hide_results();
        surface.target.set_submit_control(SubmitControl::Disabled);
        surface
    }

    /// Current visibility snapshot.
    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Notification timing state.
    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    /// Borrows the render target.
    pub fn target(&self) -> &R {
        &self.target
    }

    /// Mutably borrows the render target.
    pub fn target_mut(&mut self) -> &mut R {
        &mut self.target
    }

    /// Unwraps the render target.
    pub fn into_target(self) -> R {
        self.target
    }

    /// Shows the preview with `rows`.
    pub fn show_preview(&mut self, rows: &[PreviewRow]) {
        self.state.preview_visible = true;
        self.state.preview_len = rows.len();
        self.target.render_preview(rows);
    }

    /// Hides the preview.
    pub fn hide_preview(&mut self) {
        self.state.preview_visible = false;
        self.state.preview_len = 0;
        self.target.hide_preview();
    }

    /// Applies submit control state.
    pub fn set_submit(&mut self, control: SubmitControl) {
        self.state.submit = control;
        self.target.set_submit_control(control);
    }

    /// Clears the native picker value.
    pub fn reset_file_input(&mut self) {
        self.target.reset_file_input();
    }

    /// Toggles drop zone highlight; repeated values are not forwarded.
    pub fn set_drop_highlight(&mut self, active: bool) {
        if self.state.drop_highlight != active {
            self.state.drop_highlight = active;
            self.target.set_drop_highlight(active);
        }
    }

    /// Shows the results area.
    pub fn show_results(&mut self, view: &ResultView) {
        self.state.results_visible = true;
        self.target.render_results(view);
    }

    /// Hides the results area.
    pub fn hide_results(&mut self) {
        self.state.results_visible = false;
        self.target.hide_results();
    }

    /// Issues a notification; it becomes visible on a later [`Self::tick`].
    pub fn notify(&mut self, message: impl Into<String>, severity: NotificationSeverity, now_ms: u64) {
        let was_visible = self.notifications.is_visible();
        let notification = self.notifications.notify(message, severity, now_ms).clone();
        if was_visible {
            self.state.notification_visible = false;
            self.target.set_notification_visible(false);
        }
        self.target.update_notification(&notification);
    }

    /// Advances notification timers to `now_ms`.
    pub fn tick(&mut self, now_ms: u64) {
        match self.notifications.on_tick(now_ms) {
            Some(NotificationChange::Show) => {
                self.state.notification_visible = true;
                self.target.set_notification_visible(true);
            }
            Some(NotificationChange::Hide) => {
                self.state.notification_visible = false;
                self.target.set_notification_visible(false);
            }
            None => {}
        }
    }
}
