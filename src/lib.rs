#![warn(missing_docs)]

//! # Review Oxide
//!
//! Document review toolkit: turn an uploaded document and a free-form
//! narrative evaluation of it into machine-usable, ordered data.
//!
//! ## Core Pipelines
//!
//! Two independent, pure pipelines share no state:
//!
//! - **Positional Text Reconstruction**: an unordered stream of
//!   `{x, y, text}` fragments (as emitted by a position-addressed document
//!   decoder) becomes linearized reading-order text. Fragments group into
//!   rows by vertical coordinate (pluggable strategy, exact equality by
//!   default), rows sort top to bottom, and each row concatenates in
//!   arrival order.
//! - **Structured Feedback Parsing**: one narrative string becomes a
//!   [`feedback::StructuredFeedback`] record (score, strengths,
//!   improvements) via layered pattern matching: bold category labels
//!   first, enumerated-list fallback second.
//!
//! Both are total functions: malformed or absent input degrades to
//! empty/default output instead of an error, and identical input always
//! yields identical output. Byte-level document decoding, the text
//! generation that produces narratives, and the HTTP transport all live
//! outside this crate.
//!
//! ## Quick Start
//!
//! ```
//! use review_oxide::fragment::TextFragment;
//! use review_oxide::reconstruct::reconstruct_text;
//! use review_oxide::feedback::parse_feedback;
//!
//! // Linearize decoder output
//! let fragments = vec![
//!     TextFragment::new(0.0, 12.0, "Jane Doe"),
//!     TextFragment::new(0.0, 24.0, "Software Engineer"),
//! ];
//! let text = reconstruct_text(fragments);
//! assert_eq!(text.text(), "Jane Doe\nSoftware Engineer");
//!
//! // Structure a narrative evaluation
//! let record = parse_feedback("Overall Assessment: 87/100");
//! assert_eq!(record.score, 87);
//! ```

// Error handling
pub mod error;

// Data model
pub mod fragment;

// Core pipelines
pub mod feedback;
pub mod reconstruct;

// Configuration
pub mod config;

// Boundary policy for transport callers
pub mod report;

pub use config::{ParserConfig, ReconstructConfig, ReviewConfig};
pub use error::{Error, Result};
pub use feedback::{parse_feedback, parse_feedback_with_config, FeedbackItem, StructuredFeedback};
pub use fragment::{ReconstructedText, Row, TextFragment};
pub use reconstruct::{reconstruct_text, reconstruct_text_with_config};
pub use report::AnalysisReport;
