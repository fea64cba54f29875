use hemline_common::{Location, Reporter, Rule, Severity, Violation, messages};
use hemline_syntax::{Element, NodeId, Token, TreeNav};
use log::debug;

use crate::gap::{different_lines, gap_mismatch};

/// Verifies whitespace around punctuation and parenthesized groups.
///
/// An instance is bound to one rule and one sink, injected at construction;
/// every check is a bounded, synchronous comparison over immutable tokens,
/// so instances are freely usable from concurrent traversals as long as
/// each thread holds its own (or the sink synchronizes internally).
///
/// Malformed inputs (a group with fewer than two children, a missing left
/// sibling) are caller contract violations, not runtime errors: the
/// affected methods document their panics and callers establish the
/// preconditions first.
pub struct WhitespaceVerifier<'a> {
    reporter: &'a dyn Reporter,
    rule: Rule,
    severity: Severity,
}

impl<'a> WhitespaceVerifier<'a> {
    /// Creates a verifier reporting under `rule` at the default
    /// [`Severity::Warning`].
    pub fn new(reporter: &'a dyn Reporter, rule: Rule) -> Self {
        Self {
            reporter,
            rule,
            severity: Severity::Warning,
        }
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    fn emit(&self, message: String, location: Location) {
        debug!("{} at {location}: {message}", self.rule);
        self.reporter.report(Violation {
            rule: self.rule,
            severity: self.severity,
            message,
            location,
        });
    }

    /// Checks punctuation that binds tightly to its preceding element: no
    /// space before (and no line break before), exactly one space after.
    ///
    /// Both checks are independent and may both fire for the same token.
    /// Reports land at the punctuation's location.
    pub fn verify_left_associated(&self, left: &Token, right: &Token, punct: &Token, label: &str) {
        let location = punct.location();

        if different_lines(left, punct) || gap_mismatch(left, punct, 0) {
            self.emit(
                format!(
                    "{label}{}{} {}",
                    messages::AT_COLUMN,
                    location.column,
                    messages::NO_SPACE_BEFORE
                ),
                location,
            );
        }

        if gap_mismatch(punct, right, 1) {
            self.emit(
                format!(
                    "{label}{}{} {}",
                    messages::AT_COLUMN,
                    location.column,
                    messages::SPACE_AFTER
                ),
                location,
            );
        }
    }

    /// Checks punctuation that requires exactly one space on both sides.
    ///
    /// No same-line requirement is enforced here: the gap checkers no-op
    /// across lines, so a punctuation token on a different line from a
    /// neighbor is not flagged by this rule.
    pub fn verify_space_delimited(&self, left: &Token, right: &Token, punct: &Token, label: &str) {
        let location = punct.location();

        if gap_mismatch(left, punct, 1) {
            self.emit(
                format!(
                    "{label}{}{} {}",
                    messages::AT_COLUMN,
                    location.column,
                    messages::SPACE_BEFORE
                ),
                location,
            );
        }

        if gap_mismatch(punct, right, 1) {
            self.emit(
                format!(
                    "{label}{}{} {}",
                    messages::AT_COLUMN,
                    location.column,
                    messages::SPACE_AFTER
                ),
                location,
            );
        }
    }

    /// Checks that a parenthesized group carries no whitespace immediately
    /// inside its parentheses.
    ///
    /// A group with exactly two children holds only its parentheses; any
    /// same-line spacing between them is flagged, while a pair split
    /// across lines is exempt. Non-empty groups are checked for leading
    /// whitespace after the opening token and trailing whitespace before
    /// the closing token.
    ///
    /// Panics if `group` has fewer than two children.
    pub fn verify_group_content<T: TreeNav + ?Sized>(&self, tree: &T, group: NodeId) {
        let open = tree.span_start(Element::Node(group));
        let close = tree.span_end(Element::Node(group));

        // Example: `if ( ) {}`
        if tree.child_count(group) == 2 {
            if open.line == close.line && close.column != open.column + 1 {
                self.emit(
                    format!(
                        "{}{}",
                        messages::EMPTY_PARENTHESES,
                        messages::ILLEGAL_WHITESPACE
                    ),
                    Location::new(open.line, open.column + 1),
                );
            }
            return;
        }

        let open_token = tree.last_token(tree.child(group, 0));
        let content = tree.child(group, 1);
        let content_start = tree.first_token(content);
        let content_end = tree.last_token(content);
        let close_token = tree.last_token(tree.child(group, 2));

        if gap_mismatch(open_token, content_start, 0) {
            self.emit(
                format!(
                    "{}{}",
                    messages::PARENTHESES_CONTENT,
                    messages::LEADING_WHITESPACE
                ),
                Location::new(open.line, open.column + 1),
            );
        }

        // The gap is measured from the content's last token up to the
        // closing parenthesis; the report lands immediately after the
        // content. Keep this comparison direction as is.
        if gap_mismatch(content_end, close_token, 0) {
            self.emit(
                format!(
                    "{}{}",
                    messages::PARENTHESES_CONTENT,
                    messages::TRAILING_WHITESPACE
                ),
                content_end.end_location(),
            );
        }
    }

    /// Checks that nothing separates a group's opening parenthesis from
    /// the element to its left.
    ///
    /// Panics if `group` has no left sibling; callers only invoke this for
    /// groups that do not start their containing construct.
    pub fn verify_no_space_before_group<T: TreeNav + ?Sized>(&self, tree: &T, group: NodeId) {
        let sibling = tree
            .left_sibling(Element::Node(group))
            .expect("caller must ensure the group has a left sibling");
        let left = tree.last_token(sibling);
        let open_token = tree.first_token(Element::Node(group));

        if gap_mismatch(left, open_token, 0) {
            self.emit(
                messages::NO_WHITESPACE_BEFORE_PARENTHESES.to_string(),
                left.end_location(),
            );
        }
    }
}
