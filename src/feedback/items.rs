//! Item extraction tiers for narrative sections.
//!
//! Generator models format their observations inconsistently: some emit
//! bold category labels (`**Technical Skills**: ...`), others numbered or
//! bulleted lists, others plain prose. Extraction is therefore an ordered
//! list of tiers, each returning `Some(items)` when its pattern applies;
//! the parser takes the first non-empty result. Adding another fallback
//! tier (say, newline-separated sentences) is a pure extension: implement
//! [`ItemExtraction`] and append it to [`default_tiers`].

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Regex for a bold category label followed by a colon
    static ref RE_BOLD_LABEL: Regex = Regex::new(r"\*\*([^*]+)\*\*:").unwrap();

    /// Regex for enumeration markers: "N." numeric markers and "•" bullets
    /// anywhere, "-"/"*" bullets only at line starts so hyphenated words and
    /// emphasis markers inside prose are not split points
    static ref RE_ENUM_MARKER: Regex = Regex::new(r"(?m)\d+\.|^\s*[-*]\s+|•").unwrap();
}

/// One extracted observation from a narrative section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackItem {
    /// Category label when the categorized tier matched, `None` otherwise
    pub category: Option<String>,
    /// The observation text, non-empty after trimming
    pub content: String,
}

impl FeedbackItem {
    /// Create a categorized item.
    pub fn categorized(category: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            content: content.into(),
        }
    }

    /// Create an uncategorized item.
    pub fn flat(content: impl Into<String>) -> Self {
        Self {
            category: None,
            content: content.into(),
        }
    }
}

/// Trait for one tier of the item extraction heuristic.
///
/// Implementations inspect a section span and either claim it (returning
/// the extracted items) or decline with `None`, passing the span to the
/// next tier.
pub trait ItemExtraction: Send + Sync {
    /// Extract items from a section span, or `None` when this tier's
    /// pattern does not apply.
    fn extract(&self, section: &str) -> Option<Vec<FeedbackItem>>;

    /// Return the name of this tier for debugging.
    fn name(&self) -> &'static str;
}

/// Categorized extraction: repeated `**Label**:` occurrences.
///
/// Each label yields one item with `category` = the label (trimmed) and
/// `content` = the text up to the next label or the end of the span
/// (trimmed). When at least one label matches, this tier is authoritative
/// and the fallback tier is skipped.
pub struct CategorizedItems;

impl ItemExtraction for CategorizedItems {
    fn extract(&self, section: &str) -> Option<Vec<FeedbackItem>> {
        let labels: Vec<_> = RE_BOLD_LABEL.captures_iter(section).collect();
        if labels.is_empty() {
            return None;
        }

        let mut items = Vec::with_capacity(labels.len());
        for (i, caps) in labels.iter().enumerate() {
            let whole = caps.get(0).unwrap();
            let content_start = whole.end();
            let content_end = match labels.get(i + 1) {
                Some(next) => next.get(0).unwrap().start(),
                None => section.len(),
            };

            let category = caps[1].trim();
            let content = section[content_start..content_end].trim();
            if content.is_empty() {
                continue;
            }

            items.push(FeedbackItem::categorized(category, content));
        }

        Some(items)
    }

    fn name(&self) -> &'static str {
        "CategorizedItems"
    }
}

/// Fallback flat-list extraction: split on enumeration markers.
///
/// Splits the span on numeric "N." markers and bullet markers, discards
/// segments that trim to empty, and emits the rest uncategorized. Always
/// applies, so it terminates the tier list; a span with no markers at all
/// becomes a single item.
pub struct EnumeratedItems;

impl ItemExtraction for EnumeratedItems {
    fn extract(&self, section: &str) -> Option<Vec<FeedbackItem>> {
        let items: Vec<FeedbackItem> = RE_ENUM_MARKER
            .split(section)
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(FeedbackItem::flat)
            .collect();

        Some(items)
    }

    fn name(&self) -> &'static str {
        "EnumeratedItems"
    }
}

/// The shipped tier order: categorized first, enumerated fallback.
pub fn default_tiers() -> Vec<Box<dyn ItemExtraction>> {
    vec![Box::new(CategorizedItems), Box::new(EnumeratedItems)]
}

/// Run the tiers in order and take the first non-empty result.
pub fn extract_items(section: &str, tiers: &[Box<dyn ItemExtraction>]) -> Vec<FeedbackItem> {
    for tier in tiers {
        if let Some(items) = tier.extract(section) {
            if !items.is_empty() {
                log::debug!("{} extracted {} items", tier.name(), items.len());
                return items;
            }
        }
    }
    Vec::new()
}
