//! In-memory render target for CI and unit tests.
//!
//! Records every call in order so tests can assert both the final picture
//! and the sequence that produced it.

use crate::notify::Notification;
use crate::preview::PreviewRow;
use crate::results::ResultView;
use crate::{RenderTarget, SubmitControl};

/// One recorded render call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderCall {
    /// [`RenderTarget::render_preview`].
    RenderPreview(Vec<PreviewRow>),
    /// [`RenderTarget::hide_preview`].
    HidePreview,
    /// [`RenderTarget::set_submit_control`].
    SubmitControl(SubmitControl),
    /// [`RenderTarget::reset_file_input`].
    ResetFileInput,
    /// [`RenderTarget::set_drop_highlight`].
    DropHighlight(bool),
    /// [`RenderTarget::render_results`].
    RenderResults(ResultView),
    /// [`RenderTarget::hide_results`].
    HideResults,
    /// [`RenderTarget::update_notification`].
    UpdateNotification(Notification),
    /// [`RenderTarget::set_notification_visible`].
    NotificationVisible(bool),
}

/// Render target that stores calls instead of drawing.
#[derive(Debug, Clone, Default)]
pub struct RecordingTarget {
    calls: Vec<RenderCall>,
}

impl RecordingTarget {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call so far.
    pub fn calls(&self) -> &[RenderCall] {
        &self.calls
    }

    /// Forgets recorded calls.
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Rows passed to the most recent preview render.
    pub fn last_preview(&self) -> Option<&[PreviewRow]> {
        self.calls.iter().rev().find_map(|call| match call {
            RenderCall::RenderPreview(rows) => Some(rows.as_slice()),
            _ => None,
        })
    }

    /// Most recent results view.
    pub fn last_results(&self) -> Option<&ResultView> {
        self.calls.iter().rev().find_map(|call| match call {
            RenderCall::RenderResults(view) => Some(view),
            _ => None,
        })
    }

    /// Most recent notification content.
    pub fn last_notification(&self) -> Option<&Notification> {
        self.calls.iter().rev().find_map(|call| match call {
            RenderCall::UpdateNotification(notification) => Some(notification),
            _ => None,
        })
    }

    /// Submit control states in the order they were applied.
    pub fn submit_history(&self) -> Vec<SubmitControl> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                RenderCall::SubmitControl(control) => Some(*control),
                _ => None,
            })
            .collect()
    }
}

impl RenderTarget for RecordingTarget {
    fn render_preview(&mut self, rows: &[PreviewRow]) {
        self.calls.push(RenderCall::RenderPreview(rows.to_vec()));
    }

    fn hide_preview(&mut self) {
        self.calls.push(RenderCall::HidePreview);
    }

    fn set_submit_control(&mut self, control: SubmitControl) {
        self.calls.push(RenderCall::SubmitControl(control));
    }

    fn reset_file_input(&mut self) {
        self.calls.push(RenderCall::ResetFileInput);
    }

    fn set_drop_highlight(&mut self, active: bool) {
        self.calls.push(RenderCall::DropHighlight(active));
    }

    fn render_results(&mut self, view: &ResultView) {
        self.calls.push(RenderCall::RenderResults(view.clone()));
    }

    fn hide_results(&mut self) {
        self.calls.push(RenderCall::HideResults);
    }

    fn update_notification(&mut self, notification: &Notification) {
        self.calls
            .push(RenderCall::UpdateNotification(notification.clone()));
    }

    fn set_notification_visible(&mut self, visible: bool) {
        self.calls.push(RenderCall::NotificationVisible(visible));
    }
}
