use phf::phf_set;
use std::fmt;

use super::utils::Position;

#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    pub kind: Kind,
    pub pos: Position,
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
    lexeme: &'a str,
}

impl<'a> Token<'a> {
    /// Create a token covering `range` of `src`.
    pub fn new(kind: Kind, pos: Position, src: &'a str, range: std::ops::Range<usize>) -> Self {
        Self {
            kind,
            pos,
            start: range.start,
            end: range.end,
            lexeme: &src[range],
        }
    }

    pub fn text(&self) -> &'a str {
        self.lexeme
    }

    /// Grow the token by one character of `src` ending at `end`.
    pub(crate) fn extend(&mut self, src: &'a str, end: usize) {
        self.end = end;
        self.lexeme = &src[self.start..self.end];
    }

    /// Retag a word as keyword if its text is a reserved word.
    pub(crate) fn promote(&mut self) {
        if self.kind == Kind::Word && Token::is_keyword(self.lexeme) {
            self.kind = Kind::Keyword;
        }
    }

    pub fn is_keyword(word: &str) -> bool {
        KEYWORDS.contains(word)
    }

    pub fn is_sign(c: char) -> bool {
        SIGNS.contains(&c)
    }
}

impl<'a> fmt::Display for Token<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{:?}: {:?} @ {}>", self.kind, self.lexeme, self.pos)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Whitespace,
    Word,
    Keyword,
    Sign,
}

impl Kind {
    /// Only whitespace and words grow by absorbing adjacent characters.
    pub fn coalesces(self) -> bool {
        matches!(self, Kind::Whitespace | Kind::Word)
    }
}

static KEYWORDS: phf::Set<&'static str> = phf_set! {
    "alias",
    "if",
    "else",
    "end",
    "branch",
    "goto",
};

static SIGNS: phf::Set<char> = phf_set! {
    '(', ')', '{', '}', '$', '`', '"', ':', '#', '/',
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables() {
        assert!(Token::is_keyword("alias"));
        assert!(Token::is_keyword("goto"));
        assert!(!Token::is_keyword("Alias"));
        assert!(!Token::is_keyword("aliases"));
        assert!(Token::is_sign('#'));
        assert!(Token::is_sign('"'));
        assert!(!Token::is_sign(' '));
        assert!(!Token::is_sign('['));
    }

    #[test]
    fn test_promote() {
        let src = "end";
        let mut token = Token::new(Kind::Word, Position::new(1, 1), src, 0..3);
        token.promote();
        assert_eq!(token.kind, Kind::Keyword);

        let mut token = Token::new(Kind::Word, Position::new(1, 1), src, 0..2);
        token.promote();
        assert_eq!(token.kind, Kind::Word);
        assert_eq!(token.text(), "en");
    }
}
