//! Row grouping strategies for text reconstruction.
//!
//! This module provides pluggable strategies for deciding whether a fragment
//! belongs to an existing row, keyed by the row's vertical coordinate.
//!
//! # Available Strategies
//!
//! - [`ExactGrouping`]: Bitwise-exact `y` equality (the documented contract)
//! - [`BandedGrouping`]: Tolerance-banded comparison for jittery coordinates

use crate::config::GroupingStrategyType;

/// Trait for comparing a fragment's `y` against a row key.
///
/// Implementations decide when two vertical coordinates mean "same visual
/// line". This is a key abstraction point: exact equality is the shipped
/// contract, but real-world decoders emit jittery coordinates, so tests can
/// pin current behavior while a tolerance-banded strategy remains available.
pub trait RowGrouping: Send + Sync {
    /// Whether a fragment at `y` belongs to the row keyed by `key`.
    fn same_row(&self, key: f64, y: f64) -> bool;

    /// Return the name of this strategy for debugging.
    fn name(&self) -> &'static str;
}

/// Bitwise-exact row grouping.
///
/// A fragment joins a row iff its `y` equals the row key exactly. No two
/// rows are ever merged, even when their keys differ by a negligible amount,
/// so aligned text at slightly different coordinates becomes separate lines.
///
/// Comparison is by `f64::to_bits`, which keeps the reconstructor total:
/// NaN keys group with identical NaN bit patterns instead of opening a new
/// row per fragment.
pub struct ExactGrouping;

impl RowGrouping for ExactGrouping {
    fn same_row(&self, key: f64, y: f64) -> bool {
        key.to_bits() == y.to_bits()
    }

    fn name(&self) -> &'static str {
        "ExactGrouping"
    }
}

/// Tolerance-banded row grouping.
///
/// A fragment joins a row when its `y` lies within `tolerance` of the row
/// key. The key stays the `y` of the first fragment that opened the row;
/// the band does not drift as members are added.
pub struct BandedGrouping {
    /// Maximum |y - key| for membership
    pub tolerance: f64,
}

impl BandedGrouping {
    /// Create a banded strategy with the given tolerance.
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }
}

impl RowGrouping for BandedGrouping {
    fn same_row(&self, key: f64, y: f64) -> bool {
        (y - key).abs() <= self.tolerance
    }

    fn name(&self) -> &'static str {
        "BandedGrouping"
    }
}

/// Instantiate the strategy selected by configuration.
pub fn strategy_for(strategy_type: GroupingStrategyType) -> Box<dyn RowGrouping> {
    match strategy_type {
        GroupingStrategyType::Exact => Box::new(ExactGrouping),
        GroupingStrategyType::Banded(tolerance) => Box::new(BandedGrouping::new(tolerance)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_requires_bit_equality() {
        let exact = ExactGrouping;

        assert!(exact.same_row(5.0, 5.0));
        assert!(!exact.same_row(5.0, 5.0000001));
        // -0.0 and 0.0 are distinct keys under bitwise comparison
        assert!(!exact.same_row(0.0, -0.0));
    }

    #[test]
    fn test_exact_groups_nan_with_nan() {
        let exact = ExactGrouping;
        assert!(exact.same_row(f64::NAN, f64::NAN));
    }

    #[test]
    fn test_banded_accepts_within_tolerance() {
        let banded = BandedGrouping::new(0.5);

        assert!(banded.same_row(5.0, 5.3));
        assert!(banded.same_row(5.0, 4.7));
        assert!(banded.same_row(5.0, 5.5)); // inclusive bound
        assert!(!banded.same_row(5.0, 5.6));
    }

    #[test]
    fn test_strategy_selection() {
        assert_eq!(strategy_for(GroupingStrategyType::Exact).name(), "ExactGrouping");
        assert_eq!(
            strategy_for(GroupingStrategyType::Banded(1.0)).name(),
            "BandedGrouping"
        );
    }
}
