//! Shared value types for the Hemline style checker.
//!
//! This crate carries everything the rule verifiers and their callers agree
//! on: reportable [`Location`]s, the [`Rule`] identifiers, violation
//! [`Severity`], the message fragment catalog, and the [`Reporter`] sink
//! through which verifiers hand off each [`Violation`] they detect.
//!
//! Formatting and emission of reports (terminal output, JSON export, exit
//! codes) belong to the consumer of the sink, not to this crate.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Message fragments composed into violation messages.
pub mod messages;
/// The violation sink trait and an in-memory implementation.
pub mod report;

pub use report::{CollectingReporter, Reporter};

/// A reportable source position.
///
/// `line` is 1-indexed. `column` is 1-indexed in user-facing positions;
/// the `+1` conversion from a token's raw 0-indexed column happens at the
/// point where a violation is built, never inside gap arithmetic.
///
/// One producer deviates: the tree adapter's span-boundary accessors hand
/// back the raw 0-indexed column, since their results feed comparisons
/// rather than reports. A `Location` carried by a `Violation` is always
/// 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

impl Location {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Severity attached to a reported violation.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Severity {
    #[default]
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Identifier of a whitespace style rule.
///
/// Each verifier instance is bound to exactly one rule; the identifier is
/// carried unchanged onto every violation the instance reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    CommaWhitespace,
    ColonWhitespace,
    OperatorWhitespace,
    ParenthesisWhitespace,
}

impl Rule {
    /// Stable kebab-case identifier used in reports and configuration.
    pub fn id(&self) -> &'static str {
        match self {
            Rule::CommaWhitespace => "comma-whitespace",
            Rule::ColonWhitespace => "colon-whitespace",
            Rule::OperatorWhitespace => "operator-whitespace",
            Rule::ParenthesisWhitespace => "parenthesis-whitespace",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A single spacing mismatch detected by a verifier.
///
/// Violations are independent observations: the core neither aggregates nor
/// deduplicates them, and two violations may share a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub rule: Rule,
    pub severity: Severity,
    pub message: String,
    pub location: Location,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{}] {}",
            self.location, self.severity, self.rule, self.message
        )
    }
}
