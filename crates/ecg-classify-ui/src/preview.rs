//! Projection of the file selection into preview rows.

use ecg_classify_core::{FileKind, SelectedFileSet, format_file_size};

/// One preview row with its remove affordance position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewRow {
    /// Position passed back by the row's remove control.
    pub position: usize,
    /// File name.
    pub name: String,
    /// Human-readable size (for example `488.28 KB`).
    pub size_label: String,
    /// Record role of the file.
    pub kind: FileKind,
    /// Icon token for the role.
    pub icon: &'static str,
}

/// Icon token for a file role.
pub fn file_icon(kind: FileKind) -> &'static str {
    match kind {
        FileKind::Signal => "fa-file-waveform",
        FileKind::Header => "fa-file-lines",
        FileKind::Other => "fa-file",
    }
}

/// Regenerates every row for `set`, in selection order.
pub fn project_preview(set: &SelectedFileSet) -> Vec<PreviewRow> {
    set.files()
        .iter()
        .enumerate()
        .map(|(position, file)| {
            let kind = file.kind();
            PreviewRow {
                position,
                name: file.name().to_string(),
                size_label: format_file_size(file.size_bytes()),
                kind,
                icon: file_icon(kind),
            }
        })
        .collect()
}
