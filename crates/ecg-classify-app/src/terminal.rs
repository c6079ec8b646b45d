//! Line-oriented render target for the terminal binary.
//!
//! There is no persistent screen, so hide calls and visibility toggles are
//! no-ops and notifications print as soon as their content is set.

use std::io::{self, Write};

use ecg_classify_ui::notify::Notification;
use ecg_classify_ui::preview::PreviewRow;
use ecg_classify_ui::results::ResultView;
use ecg_classify_ui::{RenderTarget, SubmitControl};

/// Render target writing plain text lines to `W`.
#[derive(Debug)]
pub struct TerminalTarget<W: Write> {
    out: W,
}

impl TerminalTarget<io::Stdout> {
    /// Target printing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalTarget<W> {
    /// Wraps `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        if let Err(error) = self.out.write_all(text.as_bytes()) {
            tracing::warn!(stage = "render", action = "write", error = %error, "terminal write failed");
        }
    }
}

impl<W: Write> RenderTarget for TerminalTarget<W> {
    fn render_preview(&mut self, rows: &[PreviewRow]) {
        let mut text = String::from("Selected files:\n");
        for row in rows {
            text.push_str(&format!(
                "  [{}] {} ({})\n",
                row.position, row.name, row.size_label
            ));
        }
        self.emit(&text);
    }

    fn hide_preview(&mut self) {}

    fn set_submit_control(&mut self, control: SubmitControl) {
        if control == SubmitControl::Busy {
            self.emit(&format!("{}\n", control.label()));
        }
    }

    fn reset_file_input(&mut self) {}

    fn set_drop_highlight(&mut self, _active: bool) {}

    fn render_results(&mut self, view: &ResultView) {
        let mut text = format!(
            "\n{} [{}] ({})\n  {}\n  Confidence: {}\n",
            view.name,
            view.tier.as_str(),
            view.code,
            view.description,
            view.confidence
        );
        for stat in &view.stats {
            text.push_str(&format!("  {:<16} {}\n", format!("{}:", stat.label), stat.value));
        }
        text.push('\n');
        self.emit(&text);
    }

    fn hide_results(&mut self) {}

    fn update_notification(&mut self, notification: &Notification) {
        self.emit(&format!(
            "[{}] {}\n",
            notification.severity.as_str(),
            notification.message
        ));
    }

    fn set_notification_visible(&mut self, _visible: bool) {}
}
