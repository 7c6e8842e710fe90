//! The lexer is responsible for splitting the source code into a flat stream of tokens for the parser.
//!
//! Every character falls into exactly one of three classes: a space is whitespace, a member of the
//! sign set is a sign and anything else is part of a word. Runs of whitespace and runs of word
//! characters are merged into one token each, signs always stand alone. Line breaks (`\n`, `\r` or
//! `\r\n`) never produce a token, they only move the position to the next line.
//!
//! A word is retagged as keyword when it is closed by a following token and its text is a reserved
//! word. Tokens closed by a line break or by the end of the input keep their word kind.
//!
//! Example:
//! ```rust
//! use aliasdsl::frontend::lexer::Lexer;
//! let tokens = Lexer::new("alias foo #1 bar(\"baz\")").tokenize();
//! ```

use std::{iter::Peekable, str::CharIndices};

use super::{
    token::{Kind, Token},
    utils::Position,
};

/// The lexer struct is responsible for the tokenization of the source code.
pub struct Lexer<'a> {
    /// Contains the source code. Used for 'cutting' out lexemes for the tokens.
    source: &'a str,
    /// Peekable iterator over all characters of the source string and their byte offsets.
    chars: Peekable<CharIndices<'a>>,
    /// Tokens which are closed and can no longer grow.
    tokens: Vec<Token<'a>>,
    /// The token that is currently being extended, if any.
    open: Option<Token<'a>>,
    /// Line and token column of the next token.
    token_pos: Position,
}

impl<'a> Lexer<'a> {
    /// Create a new instance of `Lexer`
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            tokens: Vec::new(),
            open: None,
            token_pos: Position::default(),
        }
    }

    /// Tokenize the whole source string in a single pass.
    pub fn tokenize(mut self) -> Vec<Token<'a>> {
        while let Some((idx, c)) = self.chars.next() {
            match c {
                '\n' => self.line_break(),
                '\r' => {
                    // CRLF is a single line break
                    self.chars.next_if(|&(_, next)| next == '\n');
                    self.line_break();
                }
                ' ' => self.accept(Kind::Whitespace, idx, c),
                c if Token::is_sign(c) => self.accept(Kind::Sign, idx, c),
                _ => self.accept(Kind::Word, idx, c),
            }
        }
        // The last token is never promoted.
        if let Some(last) = self.open.take() {
            self.emit(last);
        }
        log::debug!("tokenized {} bytes into {} tokens", self.source.len(), self.tokens.len());
        self.tokens
    }

    //-------
    // HELPER
    //-------

    /// Either grow the open token by the character at `idx` or close it and start a new one.
    fn accept(&mut self, kind: Kind, idx: usize, c: char) {
        let end = idx + c.len_utf8();
        if let Some(open) = self.open.as_mut() {
            if open.kind == kind && kind.coalesces() {
                open.extend(self.source, end);
                return;
            }
        }
        if let Some(mut closed) = self.open.take() {
            closed.promote();
            self.emit(closed);
        }
        self.token_pos.next_column();
        self.open = Some(Token::new(kind, self.token_pos, self.source, idx..end));
    }

    /// Close the open token without promotion and move to the next line.
    fn line_break(&mut self) {
        if let Some(closed) = self.open.take() {
            self.emit(closed);
        }
        self.token_pos.next_line();
    }

    fn emit(&mut self, token: Token<'a>) {
        log::trace!("token {}", token);
        self.tokens.push(token);
    }
}
