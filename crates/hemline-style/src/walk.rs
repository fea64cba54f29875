use hemline_common::{Reporter, Rule};
use hemline_syntax::{Element, NodeKind, SyntaxTree, TokenKind, TreeNav};
use log::trace;

use crate::verifier::WhitespaceVerifier;

/// Single-pass driver that applies every whitespace rule to a tree.
///
/// The walker owns the rule dispatch and establishes the preconditions the
/// verifiers require: punctuation checks only run when both stream
/// neighbors exist, group checks only run for groups with at least the
/// opening and closing tokens, and the preceding-whitespace check only
/// runs for groups sitting in call-like position.
pub struct StyleWalker<'a> {
    tree: &'a SyntaxTree,
    reporter: &'a dyn Reporter,
}

impl<'a> StyleWalker<'a> {
    pub fn new(tree: &'a SyntaxTree, reporter: &'a dyn Reporter) -> Self {
        Self { tree, reporter }
    }

    /// Runs all rules over the tree. Violations stream to the sink as they
    /// are detected; running twice reports the same sequence twice.
    pub fn run(&self) {
        self.check_punctuation();
        self.check_groups();
    }

    fn check_punctuation(&self) {
        for id in self.tree.token_ids() {
            let token = self.tree.token(id);
            let rule = match token.kind {
                TokenKind::Comma => Rule::CommaWhitespace,
                TokenKind::Colon => Rule::ColonWhitespace,
                TokenKind::Operator => Rule::OperatorWhitespace,
                _ => continue,
            };
            // A punctuation token at either end of the stream has no
            // spacing to verify on the missing side.
            let (Some(left), Some(right)) = (self.tree.token_before(id), self.tree.token_after(id))
            else {
                continue;
            };
            trace!("checking {rule} for {:?} at {}", token.text, token.location());

            let label = format!("'{}'", token.text);
            let verifier = WhitespaceVerifier::new(self.reporter, rule);
            match token.kind {
                TokenKind::Comma | TokenKind::Colon => {
                    verifier.verify_left_associated(left, right, token, &label);
                }
                _ => verifier.verify_space_delimited(left, right, token, &label),
            }
        }
    }

    fn check_groups(&self) {
        let verifier = WhitespaceVerifier::new(self.reporter, Rule::ParenthesisWhitespace);
        for id in self.tree.node_ids() {
            if self.tree.node_kind(id) != NodeKind::Group || self.tree.child_count(id) < 2 {
                continue;
            }
            trace!("checking group at {}", self.tree.span_start(Element::Node(id)));
            verifier.verify_group_content(self.tree, id);

            if let Some(sibling) = self.tree.left_sibling(Element::Node(id)) {
                let left = self.tree.last_token(sibling);
                // Call-like position: `name(...)` or a chained `(...)(...)`.
                if matches!(left.kind, TokenKind::Word | TokenKind::CloseParen) {
                    verifier.verify_no_space_before_group(self.tree, id);
                }
            }
        }
    }
}
