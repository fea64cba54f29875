//! Message fragments shared by the whitespace verifiers.
//!
//! Verifiers compose full messages as `{label}{AT_COLUMN}{column} {fragment}`
//! for punctuation rules, or `{subject}{fragment}` for the parenthesis
//! rules, so the wording stays uniform across rules.

pub const AT_COLUMN: &str = " at column ";

pub const NO_SPACE_BEFORE: &str = "should not be preceded by whitespace";
pub const SPACE_BEFORE: &str = "should be preceded by a single space";
pub const SPACE_AFTER: &str = "should be followed by a single space";

pub const EMPTY_PARENTHESES: &str = "Empty parentheses";
pub const PARENTHESES_CONTENT: &str = "Parentheses content";
pub const ILLEGAL_WHITESPACE: &str = " should not contain any whitespace";
pub const LEADING_WHITESPACE: &str = " should not start with whitespace";
pub const TRAILING_WHITESPACE: &str = " should not end with whitespace";

pub const NO_WHITESPACE_BEFORE_PARENTHESES: &str =
    "Parentheses should not be preceded by whitespace";
