#![warn(missing_docs)]
//! # ecg-classify-core
//!
//! ## Purpose
//! Defines the pure data model for ECG record intake.
//!
//! ## Responsibilities
//! - Represent selected upload candidates ([`SelectedFile`]) and the ordered
//!   selection they belong to ([`SelectedFileSet`]).
//! - Validate selection composition (`.dat` + `.hea` present) and per-file
//!   size ceiling.
//! - Provide display helpers shared by renderers (file kind, binary sizes).
//! - Derive a content fingerprint used to correlate submissions in logs.
//!
//! ## Data flow
//! Picker/drop input -> [`SelectedFile`] values -> [`validate_selection`] ->
//! committed into [`SelectedFileSet`] -> preview projection and multipart
//! upload.
//!
//! ## Ownership and lifetimes
//! Files own their bytes (`Vec<u8>`) so a selection can outlive the input
//! event that produced it and be borrowed by the upload transport.
//!
//! ## Error model
//! Composition and size violations return [`ValidationError`]; only the first
//! violated rule is reported.
//!
//! ## Example
//! ```rust
//! use ecg_classify_core::{SelectedFile, validate_selection};
//!
//! let files = vec![
//!     SelectedFile::new("record1.dat", vec![0; 16]),
//!     SelectedFile::new("record1.hea", b"record1 12 500 5000".to_vec()),
//! ];
//! assert!(validate_selection(&files).is_ok());
//! ```

use std::path::Path;

use sha2::{Digest, Sha256};
use thiserror::Error;

/// Signal data extension (lower-case, without dot).
pub const SIGNAL_EXTENSION: &str = "dat";

/// Header extension (lower-case, without dot).
pub const HEADER_EXTENSION: &str = "hea";

/// Per-file upload ceiling in bytes (10 MiB).
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// One upload candidate: original name plus raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    name: String,
    content: Vec<u8>,
}

impl SelectedFile {
    /// Creates a file handle from name and content.
    pub fn new(name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content,
        }
    }

    /// Reads a file from disk, keeping only its final path component as name.
    ///
    /// # Errors
    /// Returns [`std::io::Error`] when the path cannot be read.
    pub fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self { name, content })
    }

    /// Original file name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw file bytes.
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// File size in bytes.
    pub fn size_bytes(&self) -> u64 {
        self.content.len() as u64
    }

    /// Lower-cased extension without the dot, if the name has one.
    pub fn extension(&self) -> Option<String> {
        self.name
            .rsplit_once('.')
            .map(|(_, extension)| extension.to_ascii_lowercase())
            .filter(|extension| !extension.is_empty())
    }

    /// Record role derived from the extension.
    pub fn kind(&self) -> FileKind {
        match self.extension().as_deref() {
            Some(SIGNAL_EXTENSION) => FileKind::Signal,
            Some(HEADER_EXTENSION) => FileKind::Header,
            _ => FileKind::Other,
        }
    }
}

/// Role of a file within an ECG record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Binary signal samples (`.dat`).
    Signal,
    /// Record header (`.hea`).
    Header,
    /// Anything else.
    Other,
}

/// Ordered selection of upload candidates.
///
/// Selection is not additive: a new pick or drop replaces the whole set.
/// Entries have no stable identity; removal shifts later positions down.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedFileSet {
    files: Vec<SelectedFile>,
}

impl SelectedFileSet {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `files` and, on success, replaces the current selection.
    ///
    /// # Errors
    /// Returns the first [`ValidationError`]; the current selection is left
    /// untouched in that case.
    pub fn replace_validated(&mut self, files: Vec<SelectedFile>) -> Result<(), ValidationError> {
        validate_selection(&files)?;
        self.files = files;
        Ok(())
    }

    /// Removes the entry at `index`, returning it when the index was valid.
    pub fn remove_at(&mut self, index: usize) -> Option<SelectedFile> {
        if index < self.files.len() {
            Some(self.files.remove(index))
        } else {
            None
        }
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.files.clear();
    }

    /// Entries in selection order.
    pub fn files(&self) -> &[SelectedFile] {
        &self.files
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns `true` when nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Sum of entry sizes in bytes.
    pub fn total_size_bytes(&self) -> u64 {
        self.files.iter().map(SelectedFile::size_bytes).sum()
    }
}

/// Checks that a selection can be submitted.
///
/// # Rules
/// 1. At least one `.dat` and at least one `.hea` (case-insensitive) appear
///    somewhere in the set. Cardinality and pairing are not checked.
/// 2. No single file exceeds [`MAX_FILE_SIZE_BYTES`].
///
/// # Errors
/// Returns the first violated rule as [`ValidationError`].
pub fn validate_selection(files: &[SelectedFile]) -> Result<(), ValidationError> {
    let has_signal = files.iter().any(|file| file.kind() == FileKind::Signal);
    let has_header = files.iter().any(|file| file.kind() == FileKind::Header);
    if !has_signal || !has_header {
        return Err(ValidationError::MissingRequiredExtensions);
    }

    if let Some(file) = files
        .iter()
        .find(|file| file.size_bytes() > MAX_FILE_SIZE_BYTES)
    {
        return Err(ValidationError::FileTooLarge {
            name: file.name.clone(),
            size_bytes: file.size_bytes(),
        });
    }

    Ok(())
}

/// Formats a byte count with base-1024 units (`Bytes`, `KB`, `MB`, `GB`).
///
/// Values are rounded to two decimals with trailing zeros dropped, so
/// `1536` renders as `1.5 KB` and `0` as `0 Bytes`.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut scale = 1_u64;
    while unit + 1 < UNITS.len() && bytes >= scale * 1024 {
        scale *= 1024;
        unit += 1;
    }

    let value = (bytes as f64 / scale as f64 * 100.0).round() / 100.0;
    let rendered = format!("{value:.2}");
    let rendered = rendered.trim_end_matches('0').trim_end_matches('.');
    format!("{rendered} {}", UNITS[unit])
}

/// Derives a hex SHA-256 fingerprint over names and contents of a selection.
///
/// The fingerprint is order-sensitive and lets logs correlate one submission
/// without recording file bytes.
pub fn submission_fingerprint(files: &[SelectedFile]) -> String {
    let mut hasher = Sha256::new();
    for file in files {
        hasher.update(file.name.as_bytes());
        hasher.update([0_u8]);
        hasher.update(file.size_bytes().to_le_bytes());
        hasher.update(&file.content);
    }
    hex::encode(hasher.finalize())
}

/// Local validation failures raised before any network activity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Submission attempted with nothing selected.
    #[error("Please select .dat and .hea files first")]
    EmptySelection,
    /// Either `.dat` or `.hea` is absent from the set.
    #[error("Please upload both .dat and .hea files")]
    MissingRequiredExtensions,
    /// One file is above the size ceiling.
    #[error("File {name} is too large. Max size: 10MB")]
    FileTooLarge {
        /// Offending file name.
        name: String,
        /// Its size in bytes.
        size_bytes: u64,
    },
}
