//! Position tracking for emitted tokens
//!
//! Both tokenizers stamp every token with the line and column at which it begins.
//! Positions are 1-based: the first character of a source is line 1, column 1.
//! Columns count characters rather than bytes, so multi-byte UTF-8 text stays
//! addressable by editors and tooling.

use std::fmt;

/// A line:column position in source text (both 1-based).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct SourcePosition {
    pub line: usize,
    pub column: usize,
}

impl SourcePosition {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// The position of the first character of any source.
    pub fn start() -> Self {
        Self::new(1, 1)
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl Default for SourcePosition {
    fn default() -> Self {
        Self::start()
    }
}
