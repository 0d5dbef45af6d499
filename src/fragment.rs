//! Data model for positioned text fragments and reconstructed documents.
//!
//! Fragments arrive from an upstream document decoder in an arbitrary,
//! producer-defined order. The types here carry them through row grouping
//! into the final linearized text.

use serde::{Deserialize, Serialize};

/// One atomic piece of text at a document position.
///
/// `x` and `y` are page coordinates as reported by the decoder, with `y`
/// increasing downward. Multiple fragments may share the same `y`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextFragment {
    /// Horizontal position of the fragment
    pub x: f64,
    /// Vertical position of the fragment (increases down the page)
    pub y: f64,
    /// The fragment's text content (may be empty or whitespace-only)
    pub text: String,
}

impl TextFragment {
    /// Create a new fragment at the given position.
    pub fn new(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            text: text.into(),
        }
    }
}

/// Fragments believed to lie on the same visual line.
///
/// A row is keyed by the `y` of the first fragment that opened it. Fragments
/// are stored in arrival order; horizontal position is never consulted when
/// assembling the row's text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// The shared vertical coordinate for this row
    pub key: f64,
    /// Member fragments, in arrival order
    pub fragments: Vec<TextFragment>,
}

impl Row {
    /// Open a new row with its first fragment.
    pub fn new(fragment: TextFragment) -> Self {
        Self {
            key: fragment.y,
            fragments: vec![fragment],
        }
    }

    /// Append a fragment to this row, preserving arrival order.
    pub fn push(&mut self, fragment: TextFragment) {
        self.fragments.push(fragment);
    }

    /// Concatenate the member fragments' text with no separator.
    pub fn line(&self) -> String {
        let mut line = String::new();
        for fragment in &self.fragments {
            line.push_str(&fragment.text);
        }
        line
    }
}

/// The linearized document produced by the reconstructor.
///
/// Lines appear in ascending row-key order (top of page first).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconstructedText {
    /// Output lines, in reading order
    pub lines: Vec<String>,
}

impl ReconstructedText {
    /// Join the lines with a single newline to form the full text.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Whether the reconstruction contains no text at all after trimming.
    ///
    /// This is the signal callers use for their extraction-failure policy;
    /// the reconstructor itself never fails.
    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(|line| line.trim().is_empty())
    }
}
