use hemline_common::Location;
use serde::{Deserialize, Serialize};

/// Lexical category of a token.
///
/// The walker dispatches rules on these kinds; the gap checkers themselves
/// only look at positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    Word,
    Number,
    Comma,
    Colon,
    Operator,
    OpenParen,
    CloseParen,
}

/// An atomic lexical unit with its source position.
///
/// `line` is 1-indexed; `column` is the 0-indexed offset of the token's
/// first character within that line. Tokens are immutable once produced:
/// the style checker reads positions, it never creates or moves tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: u32,
    pub column: u32,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            column,
        }
    }

    /// Width of the token in character columns.
    pub fn len(&self) -> u32 {
        self.text.chars().count() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// 0-indexed column of the token's last character.
    pub fn last_column(&self) -> u32 {
        self.column + self.len().saturating_sub(1)
    }

    /// User-facing location of the token (1-indexed column).
    pub fn location(&self) -> Location {
        Location::new(self.line, self.column + 1)
    }

    /// User-facing location immediately following the token.
    pub fn end_location(&self) -> Location {
        Location::new(self.line, self.last_column() + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_column_spans_token_width() {
        let token = Token::new(TokenKind::Word, "foo", 1, 4);
        assert_eq!(token.len(), 3);
        assert_eq!(token.last_column(), 6);
    }

    #[test]
    fn test_single_character_token() {
        let token = Token::new(TokenKind::Comma, ",", 2, 0);
        assert_eq!(token.last_column(), 0);
        assert_eq!(token.location(), Location::new(2, 1));
        assert_eq!(token.end_location(), Location::new(2, 1));
    }

    #[test]
    fn test_end_location_follows_last_character() {
        // "foo" occupying columns 0..2: the column after it reports as 3.
        let token = Token::new(TokenKind::Word, "foo", 1, 0);
        assert_eq!(token.end_location(), Location::new(1, 3));
    }

    #[test]
    fn test_len_counts_characters_not_bytes() {
        let token = Token::new(TokenKind::Word, "fünf", 1, 0);
        assert_eq!(token.len(), 4);
        assert_eq!(token.last_column(), 3);
    }
}
