//! Primitive spacing predicates over token positions.
//!
//! All arithmetic is exact and integer-only. For two tokens on one line,
//! the *gap* is `after.column - before.last_column()`: a gap of 1 means
//! the tokens touch, a gap of `n + 1` means `n` literal spaces between
//! them. This relies on the producer invariant that adjacent tokens with
//! no whitespace between them satisfy `b.column == a.last_column() + 1`.

use hemline_syntax::Token;

pub fn same_line(a: &Token, b: &Token) -> bool {
    a.line == b.line
}

/// Used to flag constructs that are required to stay on one line.
pub fn different_lines(a: &Token, b: &Token) -> bool {
    a.line != b.line
}

/// Character-column distance from the end of `before` to the start of
/// `after`. Only meaningful when both tokens are on the same line.
pub fn column_gap(before: &Token, after: &Token) -> i64 {
    i64::from(after.column) - i64::from(before.last_column())
}

/// The violation signal: true iff both tokens are on the same line and the
/// observed spacing is not exactly `spaces` literal spaces.
///
/// Returns false whenever the tokens are on different lines. Callers that
/// also want to reject line breaks must check that separately via line
/// comparison; this predicate never polices cross-line spacing.
pub fn gap_mismatch(before: &Token, after: &Token, spaces: u32) -> bool {
    same_line(before, after) && column_gap(before, after) != i64::from(spaces) + 1
}
