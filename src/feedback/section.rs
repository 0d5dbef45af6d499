//! Section isolation for narrative feedback.
//!
//! A narrative evaluation is carved into sections by a small set of
//! recognized heading phrases. Each heading is a named, independently
//! testable matcher. The `regex` crate has no lookahead, so a section's end
//! is computed by scanning the remainder of the text for the earliest
//! occurrence of any *other* recognized heading rather than by embedding
//! terminators in one large pattern.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for the "Key Strengths" heading
    static ref RE_KEY_STRENGTHS: Regex = Regex::new(r"(?i)key\s+strengths:?").unwrap();

    /// Regex for the "Areas for Improvement" heading
    static ref RE_IMPROVEMENT: Regex = Regex::new(r"(?i)areas\s+for\s+improvement:?").unwrap();

    /// Regex for the "Specific Suggestions" heading (terminator only)
    static ref RE_SUGGESTIONS: Regex = Regex::new(r"(?i)specific\s+suggestions:?").unwrap();

    /// Regex for the "Section-by-Section" heading (terminator only)
    static ref RE_SECTION_BY_SECTION: Regex =
        Regex::new(r"(?i)section[\s-]by[\s-]section:?").unwrap();
}

/// The two tracked sections of a narrative evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// "Key Strengths"
    Strengths,
    /// "Areas for Improvement"
    Improvements,
}

impl SectionKind {
    /// The heading matcher that opens this section.
    fn heading(&self) -> &'static Regex {
        match self {
            SectionKind::Strengths => &RE_KEY_STRENGTHS,
            SectionKind::Improvements => &RE_IMPROVEMENT,
        }
    }

    /// The heading matchers that terminate this section.
    ///
    /// Every recognized heading other than the section's own acts as a
    /// terminator; end of text always terminates.
    fn terminators(&self) -> [&'static Regex; 3] {
        match self {
            SectionKind::Strengths => [&RE_IMPROVEMENT, &RE_SUGGESTIONS, &RE_SECTION_BY_SECTION],
            SectionKind::Improvements => {
                [&RE_KEY_STRENGTHS, &RE_SUGGESTIONS, &RE_SECTION_BY_SECTION]
            },
        }
    }
}

/// Isolate the text span belonging to a section.
///
/// Captures everything from just after the section's heading up to the
/// earliest following recognized heading, or end of text. Returns `None`
/// when the heading is absent, in which case the section's item list is
/// empty downstream.
pub fn isolate_section<'a>(text: &'a str, kind: SectionKind) -> Option<&'a str> {
    let heading = kind.heading().find(text)?;
    let rest = &text[heading.end()..];

    let end = kind
        .terminators()
        .iter()
        .filter_map(|terminator| terminator.find(rest).map(|m| m.start()))
        .min()
        .unwrap_or(rest.len());

    Some(&rest[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    const NARRATIVE: &str = "Overall Assessment: 80/100\n\
        Key Strengths:\nstrong things here\n\
        Areas for Improvement:\nweak things here\n\
        Specific Suggestions:\nsuggestions here\n\
        Section-by-Section Analysis:\nper-section notes";

    #[test]
    fn test_strengths_span_ends_at_improvements() {
        let span = isolate_section(NARRATIVE, SectionKind::Strengths).unwrap();
        assert!(span.contains("strong things here"));
        assert!(!span.contains("weak things"));
        assert!(!span.contains("Areas for Improvement"));
    }

    #[test]
    fn test_improvements_span_ends_at_suggestions() {
        let span = isolate_section(NARRATIVE, SectionKind::Improvements).unwrap();
        assert!(span.contains("weak things here"));
        assert!(!span.contains("suggestions here"));
    }

    #[test]
    fn test_missing_heading_yields_none() {
        assert!(isolate_section("no headings at all", SectionKind::Strengths).is_none());
        assert!(isolate_section("", SectionKind::Improvements).is_none());
    }

    #[test]
    fn test_section_runs_to_end_of_text_without_terminator() {
        let text = "Key Strengths: everything after the heading";
        let span = isolate_section(text, SectionKind::Strengths).unwrap();
        assert_eq!(span.trim(), "everything after the heading");
    }

    #[test]
    fn test_case_insensitive_headings() {
        let text = "KEY STRENGTHS\ngood\nareas for improvement\nbad";
        let strengths = isolate_section(text, SectionKind::Strengths).unwrap();
        assert_eq!(strengths.trim(), "good");

        let improvements = isolate_section(text, SectionKind::Improvements).unwrap();
        assert_eq!(improvements.trim(), "bad");
    }

    #[test]
    fn test_strengths_heading_terminates_improvements() {
        // Sections in unusual order: the other section's heading still acts
        // as a terminator.
        let text = "Areas for Improvement: tighten summary. Key Strengths: clear layout.";
        let span = isolate_section(text, SectionKind::Improvements).unwrap();
        assert_eq!(span.trim(), "tighten summary.");
    }

    #[test]
    fn test_hyphenated_and_spaced_section_by_section() {
        let hyphenated = "Areas for Improvement: a thing. Section-by-Section: notes";
        let spaced = "Areas for Improvement: a thing. Section by Section: notes";

        for text in [hyphenated, spaced] {
            let span = isolate_section(text, SectionKind::Improvements).unwrap();
            assert_eq!(span.trim(), "a thing.");
        }
    }
}
