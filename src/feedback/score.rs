//! Overall-assessment score extraction.
//!
//! Narrative evaluations usually carry a line like "Overall Assessment:
//! 87/100", but the exact phrasing varies between generator models and
//! versions. The matcher here looks for the label followed within a short
//! span by an integer; when nothing matches anywhere in the text, the score
//! silently falls back to 0 rather than raising an error.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for an "Overall Assessment" label followed within a short span
    /// by an integer, optionally written as "N/100". The gap is capped at 40
    /// non-digit, non-newline characters so a score mentioned much later in
    /// the text is never attributed to the label.
    static ref RE_OVERALL_SCORE: Regex =
        Regex::new(r"(?i)overall\s+assessment[^\d\n]{0,40}?(\d{1,3})(?:\s*/\s*100)?").unwrap();
}

/// Extract the overall score from narrative text.
///
/// Takes the first integer found after an "Overall Assessment" label,
/// clamped to 100 so the result always lies in `0..=100`. Returns 0 when no
/// recognizable pattern exists (a silent fallback, not an error).
///
/// # Examples
///
/// ```
/// use review_oxide::feedback::score::extract_score;
///
/// assert_eq!(extract_score("Overall Assessment: 87/100"), 87);
/// assert_eq!(extract_score("no score here"), 0);
/// ```
pub fn extract_score(text: &str) -> u8 {
    match RE_OVERALL_SCORE.captures(text) {
        Some(caps) => {
            // 1-3 digits always parse; cap at the documented upper bound
            let value: u32 = caps[1].parse().unwrap_or(0);
            value.min(100) as u8
        },
        None => {
            log::trace!("no overall-assessment score pattern found");
            0
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_with_denominator() {
        assert_eq!(extract_score("Overall Assessment: 87/100"), 87);
    }

    #[test]
    fn test_score_without_denominator() {
        assert_eq!(extract_score("Overall assessment: 72"), 72);
    }

    #[test]
    fn test_case_insensitive_label() {
        assert_eq!(extract_score("OVERALL ASSESSMENT - 65/100"), 65);
    }

    #[test]
    fn test_label_with_intervening_words() {
        assert_eq!(extract_score("Overall Assessment (score): 90/100"), 90);
    }

    #[test]
    fn test_first_match_wins() {
        let text = "Overall Assessment: 80/100\nOverall Assessment: 60/100";
        assert_eq!(extract_score(text), 80);
    }

    #[test]
    fn test_missing_label_yields_zero() {
        assert_eq!(extract_score(""), 0);
        assert_eq!(extract_score("The resume scores 95 points"), 0);
    }

    #[test]
    fn test_label_without_nearby_integer_yields_zero() {
        // Gap exceeds the short-span cap
        let text = format!("Overall Assessment {} 55", "x".repeat(60));
        assert_eq!(extract_score(&text), 0);
    }

    #[test]
    fn test_newline_breaks_the_span() {
        assert_eq!(extract_score("Overall Assessment:\nSome prose. 55"), 0);
    }

    #[test]
    fn test_out_of_range_value_is_clamped() {
        assert_eq!(extract_score("Overall Assessment: 120/100"), 100);
        assert_eq!(extract_score("Overall Assessment: 999"), 100);
    }
}
