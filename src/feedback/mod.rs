//! Structured feedback parsing.
//!
//! Extracts a numeric score and categorized observation lists from a
//! loosely formatted narrative evaluation, using layered pattern matching
//! with graceful fallback. The parser is total: any input, including the
//! empty string, yields a well-formed record rather than an error, because
//! the system's purpose is best-effort extraction, not validation.
//!
//! The pipeline: bound the input length, extract the overall score, isolate
//! the two tracked sections, then run the extraction tiers over each span.

pub mod items;
pub mod score;
pub mod section;

use serde::{Deserialize, Serialize};

use crate::config::ParserConfig;
pub use items::FeedbackItem;
use section::SectionKind;

/// The structured result of parsing a narrative evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredFeedback {
    /// Overall score in `0..=100`; 0 when no score pattern matched
    pub score: u8,
    /// Items extracted from the "Key Strengths" section
    pub strengths: Vec<FeedbackItem>,
    /// Items extracted from the "Areas for Improvement" section
    pub improvements: Vec<FeedbackItem>,
}

/// Parse a narrative evaluation into a structured record using the default
/// configuration.
///
/// # Arguments
///
/// * `narrative` - The evaluation text, arbitrarily formatted and untrusted
///
/// # Returns
///
/// A [`StructuredFeedback`] record. Missing patterns degrade to zero/empty
/// fields; this function never fails. Callers displaying a score of 0 or
/// empty lists must not conflate that with "analysis failed".
///
/// # Examples
///
/// ```
/// use review_oxide::feedback::parse_feedback;
///
/// let record = parse_feedback("Overall Assessment: 87/100");
/// assert_eq!(record.score, 87);
/// assert!(record.strengths.is_empty());
/// ```
pub fn parse_feedback(narrative: &str) -> StructuredFeedback {
    parse_feedback_with_config(narrative, &ParserConfig::default())
}

/// Parse a narrative evaluation with an explicit configuration.
///
/// See [`parse_feedback`] for the default-configuration entry point.
pub fn parse_feedback_with_config(narrative: &str, config: &ParserConfig) -> StructuredFeedback {
    let text = bound_input(narrative, config.max_input_len);
    let tiers = items::default_tiers();

    StructuredFeedback {
        score: score::extract_score(text),
        strengths: extract_section(text, SectionKind::Strengths, &tiers),
        improvements: extract_section(text, SectionKind::Improvements, &tiers),
    }
}

/// Isolate one section and run the extraction tiers over it.
fn extract_section(
    text: &str,
    kind: SectionKind,
    tiers: &[Box<dyn items::ItemExtraction>],
) -> Vec<FeedbackItem> {
    match section::isolate_section(text, kind) {
        Some(span) => items::extract_items(span, tiers),
        None => Vec::new(),
    }
}

/// Truncate the narrative to the configured byte bound on a char boundary.
///
/// Model-generated text is attacker-adjacent input; bounding it before any
/// regex work caps worst-case matching cost.
fn bound_input(narrative: &str, max_len: usize) -> &str {
    if narrative.len() <= max_len {
        return narrative;
    }

    let mut end = max_len;
    while end > 0 && !narrative.is_char_boundary(end) {
        end -= 1;
    }

    log::debug!(
        "narrative truncated from {} to {} bytes before parsing",
        narrative.len(),
        end
    );
    &narrative[..end]
}
