//! Token and syntax-tree model for the Hemline style checker.
//!
//! The style rules reason purely over token character positions and tree
//! adjacency, so this crate owns the two things they need: the positioned
//! [`Token`] and a read-only [`SyntaxTree`] with the narrow [`TreeNav`]
//! adapter the verifiers navigate through. Trees are produced once, by an
//! upstream front end or by [`TreeBuilder`] in tests, and never mutated.

pub mod token;
pub mod tree;

#[cfg(test)]
mod tests;

pub use token::{Token, TokenKind};
pub use tree::{Element, NodeId, NodeKind, SyntaxTree, TokenId, TreeBuilder, TreeError, TreeNav};
