//! Error types for the review toolkit.
//!
//! The two core pipelines (text reconstruction and feedback parsing) are
//! total functions and never construct these errors; the variants here cover
//! the crate boundary: the caller-facing extraction-failure policy and the
//! I/O done by the CLI utilities.

/// Result type alias for review toolkit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur at the toolkit boundary.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The upstream decoder produced no usable text.
    ///
    /// An empty `ReconstructedText` is indistinguishable from a genuinely
    /// empty document, so callers that need "extraction failed" semantics
    /// check through [`crate::report::ensure_extracted`].
    #[error("No text could be extracted from the document")]
    EmptyExtraction,

    /// The serialized fragment stream could not be decoded.
    #[error("Invalid fragment stream: {0}")]
    InvalidFragmentStream(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
