#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! PDF text extraction
//!
//! Pulls the text layer out of an uploaded PDF and enforces the one
//! data-quality gate in the system: output shorter than the configured
//! minimum is a user-facing error, never a silently empty session.

use http::StatusCode;

/// Errors returned by text extraction
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The bytes could not be parsed as a PDF
    #[error("Could not read this PDF: {0}")]
    Unreadable(String),

    /// The text layer came back empty or below the minimum length
    ///
    /// Typical for scanned image-only PDFs, which have no text layer.
    #[error("Could not read enough text from this PDF. Try a different file.")]
    InsufficientText {
        /// Characters actually recovered
        got: usize,
        /// Configured minimum
        min: usize,
    },
}

impl ExtractError {
    /// Both variants are client input problems, not server faults
    pub const fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

/// Extract cleaned text from PDF bytes, rejecting low-quality output
///
/// # Errors
///
/// Returns `ExtractError::Unreadable` when the bytes are not a parseable
/// PDF and `ExtractError::InsufficientText` when fewer than
/// `min_text_chars` characters survive cleanup.
pub fn extract_text(pdf_bytes: &[u8], min_text_chars: usize) -> Result<String, ExtractError> {
    let raw = pdf_extract::extract_text_from_mem(pdf_bytes).map_err(|e| {
        tracing::warn!("PDF parsing failed: {e}");
        ExtractError::Unreadable(e.to_string())
    })?;

    let cleaned = clean_text(&raw);

    if cleaned.chars().count() < min_text_chars {
        tracing::debug!(got = cleaned.chars().count(), min = min_text_chars, "extraction below threshold");
        return Err(ExtractError::InsufficientText {
            got: cleaned.chars().count(),
            min: min_text_chars,
        });
    }

    Ok(cleaned)
}

/// Collapse extraction artifacts: trim every line, drop runs of blank lines
/// while keeping single paragraph breaks
fn clean_text(text: &str) -> String {
    let mut lines: Vec<&str> = Vec::new();

    for line in text.lines().map(str::trim) {
        if line.is_empty() {
            if lines.last().is_some_and(|last| !last.is_empty()) {
                lines.push("");
            }
        } else {
            lines.push(line);
        }
    }

    while lines.last() == Some(&"") {
        lines.pop();
    }

    lines.join("\n")
}
