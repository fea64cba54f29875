//! # Hemline whitespace verification
//!
//! The core of the Hemline style checker: given a syntax tree whose tokens
//! carry line/column positions, verify that the literal spacing around
//! punctuation, operators, and parenthesized groups matches the style
//! policy, and report every mismatch with a precise location.
//!
//! ## Layering
//!
//! - [`gap`] holds the primitive predicates over two tokens' positions.
//!   They are deliberately line-restricted: every predicate is a no-op
//!   across a line break, and multi-line defects are flagged only where a
//!   rule states so explicitly.
//! - [`WhitespaceVerifier`] composes the gap checkers into the four rule
//!   checks. An instance is bound to one [`Rule`](hemline_common::Rule)
//!   and one sink; beyond those it is stateless, so independent traversal
//!   threads can each hold their own instance (or share one sink that
//!   synchronizes internally).
//! - [`StyleWalker`] is the driver: one pass over a
//!   [`SyntaxTree`](hemline_syntax::SyntaxTree), dispatching rules on
//!   token and node kinds and establishing every precondition the
//!   verifiers require.
//!
//! Data flows one way: tokens → gap checkers → verifiers → sink. Nothing
//! reads reported violations back, and nothing deduplicates them.

pub mod gap;
pub mod verifier;
pub mod walk;


pub use verifier::WhitespaceVerifier;
pub use walk::StyleWalker;
