//! Unified configuration for the review pipelines.
//!
//! This module consolidates the tuning knobs for both pipelines:
//! - Row grouping strategy for the text reconstructor
//! - Input length bound for the feedback parser

/// Row grouping strategy selection for the text reconstructor.
///
/// Exact grouping is the documented contract: a fragment joins a row only
/// when its `y` equals the row key bit-for-bit, so visually aligned text at
/// slightly different coordinates lands on separate lines. Banded grouping
/// trades that guarantee for jitter tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GroupingStrategyType {
    /// Bitwise-exact `y` equality (default)
    #[default]
    Exact,
    /// Fragments within the tolerance of a row's key join that row
    Banded(f64),
}

/// Configuration for the positional text reconstructor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReconstructConfig {
    /// How fragment `y` values are compared against row keys
    pub grouping: GroupingStrategyType,
}

impl ReconstructConfig {
    /// Create a configuration with the default exact grouping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a grouping strategy.
    pub fn with_grouping(mut self, grouping: GroupingStrategyType) -> Self {
        self.grouping = grouping;
        self
    }
}

/// Default maximum narrative length fed to the parser, in bytes.
///
/// Narrative text is model-generated and caller-supplied; bounding it before
/// any regex work caps worst-case backtracking cost.
pub const DEFAULT_MAX_INPUT_LEN: usize = 64 * 1024;

/// Configuration for the structured feedback parser.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParserConfig {
    /// Maximum input length in bytes; longer narratives are truncated at a
    /// character boundary before parsing
    pub max_input_len: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_input_len: DEFAULT_MAX_INPUT_LEN,
        }
    }
}

impl ParserConfig {
    /// Create a configuration with the default input bound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum input length in bytes.
    pub fn with_max_input_len(mut self, max_input_len: usize) -> Self {
        self.max_input_len = max_input_len;
        self
    }
}

/// Bundled configuration for callers that run both pipelines per request.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReviewConfig {
    /// Reconstructor settings
    pub reconstruct: ReconstructConfig,
    /// Parser settings
    pub parser: ParserConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReviewConfig::default();
        assert_eq!(config.reconstruct.grouping, GroupingStrategyType::Exact);
        assert_eq!(config.parser.max_input_len, DEFAULT_MAX_INPUT_LEN);
    }

    #[test]
    fn test_builders() {
        let config = ReconstructConfig::new().with_grouping(GroupingStrategyType::Banded(0.5));
        assert_eq!(config.grouping, GroupingStrategyType::Banded(0.5));

        let parser = ParserConfig::new().with_max_input_len(1024);
        assert_eq!(parser.max_input_len, 1024);
    }
}
