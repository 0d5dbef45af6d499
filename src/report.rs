//! Analysis report assembly for transport callers.
//!
//! The core pipelines only compute; deciding that an empty reconstruction
//! means "extraction failed", and trimming the echoed document text down to
//! a preview, are boundary policies that every transport needs. This module
//! supplies them so callers marshal one serializable value per request.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::feedback::StructuredFeedback;
use crate::fragment::ReconstructedText;

/// Default preview length for the echoed document text, in characters.
pub const DEFAULT_PREVIEW_CHARS: usize = 500;

/// One request's combined analysis result, ready for marshaling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// The reconstructed document text (possibly preview-truncated)
    pub text: String,
    /// The parsed feedback record
    pub feedback: StructuredFeedback,
}

impl AnalysisReport {
    /// Assemble a report from the two pipeline outputs.
    pub fn new(reconstructed: &ReconstructedText, feedback: StructuredFeedback) -> Self {
        Self {
            text: reconstructed.text(),
            feedback,
        }
    }

    /// Truncate the echoed text to the default preview length of
    /// [`DEFAULT_PREVIEW_CHARS`] characters.
    pub fn with_default_preview(self) -> Self {
        self.with_preview(DEFAULT_PREVIEW_CHARS)
    }

    /// Truncate the echoed text to at most `max_chars` characters.
    ///
    /// Truncation counts characters, not bytes, so it never splits a
    /// multi-byte character.
    pub fn with_preview(mut self, max_chars: usize) -> Self {
        if let Some((byte_index, _)) = self.text.char_indices().nth(max_chars) {
            self.text.truncate(byte_index);
        }
        self
    }
}

/// Enforce the extraction-failure policy on a reconstruction.
///
/// Returns [`Error::EmptyExtraction`] when the reconstructed text trims to
/// nothing, letting callers distinguish "the decoder produced no usable
/// fragments" from a genuinely parsed result.
pub fn ensure_extracted(reconstructed: &ReconstructedText) -> Result<()> {
    if reconstructed.is_empty() {
        return Err(Error::EmptyExtraction);
    }
    Ok(())
}
