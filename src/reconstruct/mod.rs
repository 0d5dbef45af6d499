//! Positional text reconstruction.
//!
//! Converts a stream of independently positioned text fragments, as emitted
//! by a document decoder in arbitrary order, into linearized human-readable
//! lines. The pipeline is a pure, total function: it never fails and does no
//! I/O, so concurrent invocations need no coordination.
//!
//! # Algorithm
//!
//! 1. Group fragments into rows by vertical coordinate (strategy-pluggable,
//!    exact equality by default)
//! 2. Within a row, keep fragments in arrival order
//! 3. Sort rows by key ascending (`y` increases down the page)
//! 4. Concatenate each row's text with no separator; join rows with `'\n'`
//!
//! Note that within-row ordering follows the order fragments were delivered,
//! not their `x` coordinates. Decoders emit content-stream order, which for
//! the supported producers already reads left to right; sorting by `x` here
//! would be a behavior change callers can observe.

pub mod grouping;

use crate::config::ReconstructConfig;
use crate::fragment::{ReconstructedText, Row, TextFragment};
use grouping::RowGrouping;

/// Reconstruct reading-order text from an unordered fragment stream using
/// the default exact row grouping.
///
/// # Arguments
///
/// * `fragments` - Positioned fragments in arbitrary arrival order
///
/// # Returns
///
/// The linearized document. An empty input yields an empty result; this
/// function never fails.
///
/// # Examples
///
/// ```
/// use review_oxide::fragment::TextFragment;
/// use review_oxide::reconstruct::reconstruct_text;
///
/// let fragments = vec![
///     TextFragment::new(0.0, 5.0, "A"),
///     TextFragment::new(10.0, 5.0, "B"),
///     TextFragment::new(0.0, 1.0, "C"),
/// ];
///
/// let text = reconstruct_text(fragments);
/// assert_eq!(text.lines, vec!["C", "AB"]);
/// ```
pub fn reconstruct_text(fragments: Vec<TextFragment>) -> ReconstructedText {
    reconstruct_text_with_config(fragments, &ReconstructConfig::default())
}

/// Reconstruct reading-order text with an explicit configuration.
///
/// See [`reconstruct_text`] for the default-configuration entry point.
pub fn reconstruct_text_with_config(
    fragments: Vec<TextFragment>,
    config: &ReconstructConfig,
) -> ReconstructedText {
    let strategy = grouping::strategy_for(config.grouping);

    let mut rows = group_into_rows(fragments, strategy.as_ref());

    // Sort by key ascending: smaller y is earlier on the page. NaN keys
    // compare Equal and keep their relative grouping order.
    rows.sort_by(|a, b| {
        a.key
            .partial_cmp(&b.key)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    log::debug!(
        "reconstructed {} rows with {}",
        rows.len(),
        strategy.name()
    );

    ReconstructedText {
        lines: rows.iter().map(Row::line).collect(),
    }
}

/// Group fragments into rows, preserving arrival order within each row.
///
/// Rows are kept in first-introduction order here; the caller sorts them by
/// key before emitting lines, so introduction order never affects output.
fn group_into_rows(fragments: Vec<TextFragment>, strategy: &dyn RowGrouping) -> Vec<Row> {
    let mut rows: Vec<Row> = Vec::new();

    for fragment in fragments {
        match rows
            .iter_mut()
            .find(|row| strategy.same_row(row.key, fragment.y))
        {
            Some(row) => row.push(fragment),
            None => rows.push(Row::new(fragment)),
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GroupingStrategyType;

    fn frag(x: f64, y: f64, text: &str) -> TextFragment {
        TextFragment::new(x, y, text)
    }

    #[test]
    fn test_empty_input() {
        let text = reconstruct_text(vec![]);
        assert!(text.lines.is_empty());
        assert_eq!(text.text(), "");
    }

    #[test]
    fn test_rows_sort_by_key_ascending() {
        let text = reconstruct_text(vec![
            frag(0.0, 30.0, "bottom"),
            frag(0.0, 10.0, "top"),
            frag(0.0, 20.0, "middle"),
        ]);

        assert_eq!(text.lines, vec!["top", "middle", "bottom"]);
    }

    #[test]
    fn test_same_row_concatenates_in_arrival_order() {
        let forward = reconstruct_text(vec![frag(0.0, 5.0, "A"), frag(10.0, 5.0, "B")]);
        let reversed = reconstruct_text(vec![frag(10.0, 5.0, "B"), frag(0.0, 5.0, "A")]);

        // Arrival order is the contract: the two deliveries produce
        // different concatenations even though the fragments are identical.
        assert_eq!(forward.lines, vec!["AB"]);
        assert_eq!(reversed.lines, vec!["BA"]);
    }

    #[test]
    fn test_whitespace_fragments_are_kept() {
        let text = reconstruct_text(vec![
            frag(0.0, 1.0, "a"),
            frag(5.0, 1.0, " "),
            frag(10.0, 1.0, ""),
            frag(15.0, 1.0, "b"),
        ]);

        assert_eq!(text.lines, vec!["a b"]);
    }

    #[test]
    fn test_near_equal_keys_stay_separate_rows() {
        let text = reconstruct_text(vec![frag(0.0, 1.0, "a"), frag(0.0, 1.0000001, "b")]);

        assert_eq!(text.lines.len(), 2);
    }

    #[test]
    fn test_banded_grouping_merges_jittery_rows() {
        let fragments = vec![frag(0.0, 1.0, "a"), frag(10.0, 1.3, "b")];

        let exact = reconstruct_text(fragments.clone());
        assert_eq!(exact.lines, vec!["a", "b"]);

        let config =
            ReconstructConfig::new().with_grouping(GroupingStrategyType::Banded(0.5));
        let banded = reconstruct_text_with_config(fragments, &config);
        assert_eq!(banded.lines, vec!["ab"]);
    }

    #[test]
    fn test_mixed_rows_end_to_end() {
        let text = reconstruct_text(vec![
            frag(0.0, 5.0, "A"),
            frag(10.0, 5.0, "B"),
            frag(0.0, 1.0, "C"),
        ]);

        assert_eq!(text.lines, vec!["C", "AB"]);
        assert_eq!(text.text(), "C\nAB");
    }
}
