//! Stack based parser implementation.
//!
//! The parser does not descend recursively. It keeps an explicit stack of active collectors with
//! the innermost grammar on top and feeds every token to the top of the stack. When a collector
//! asks for a sub-grammar the new collector is pushed and the same token is replayed into it. When
//! the top collector completes it is composed and popped, and its node is either merged into the
//! collector below or, at the bottom of the stack, appended to the program.

use super::{
    ast::{Node, Program, Statement},
    collector::{Collector, Grammar, Input},
    token::Token,
    utils::Position,
};
use crate::error::DslError::{self, ParseError};

/// The `Parser` struct is responsible for turning the token stream into a `Program`.
pub struct Parser<'a> {
    tokens: Vec<Token<'a>>,
    /// Index of the next token to read.
    cursor: usize,
    /// Active collectors, innermost grammar last.
    stack: Vec<Collector<'a>>,
    program: Program,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: Vec<Token<'a>>) -> Self {
        Self {
            tokens,
            cursor: 0,
            stack: Vec::new(),
            program: Program::new(),
        }
    }

    /// Parse all tokens into a `Program`.
    pub fn parse(mut self) -> Result<Program, DslError> {
        while let Some(token) = self.next() {
            match self.stack.last_mut() {
                None => self.dispatch(token),
                Some(top) => {
                    if let Some(nested) = top.feed(Input::Token(token))? {
                        self.stack.push(nested);
                        self.rewind();
                    }
                    self.unwind()?;
                }
            }
        }
        if let Some(open) = self.stack.last() {
            return Err(ParseError {
                pos: self.current_pos(),
                msg: format!("Unterminated {} at end of input.", open.grammar()),
            });
        }
        log::debug!("parsed {} statements", self.program.body.len());
        Ok(self.program)
    }

    //-------
    // HELPER
    //-------

    fn next(&mut self) -> Option<Token<'a>> {
        let token = self.tokens.get(self.cursor).cloned();
        if token.is_some() {
            self.cursor += 1;
        }
        token
    }

    /// Position of the token read last.
    fn current_pos(&self) -> Position {
        self.cursor
            .checked_sub(1)
            .and_then(|idx| self.tokens.get(idx))
            .map(|token| token.pos)
            .unwrap_or_default()
    }

    /// Step back one token so the last one is read again.
    fn rewind(&mut self) {
        self.cursor -= 1;
    }

    /// Top level: only `alias` opens a statement, every other token is dropped.
    fn dispatch(&mut self, token: Token<'a>) {
        if token.text() == "alias" {
            self.stack.push(Collector::new(Grammar::AliasStatement));
            self.rewind();
        } else {
            log::debug!("skipping top level token {}", token);
        }
    }

    /// Pop completed collectors and hand their nodes to their parents.
    fn unwind(&mut self) -> Result<(), DslError> {
        while self.stack.last().map_or(false, Collector::is_complete) {
            let node = match self.stack.pop() {
                Some(finished) => finished.compose()?,
                None => break,
            };
            match self.stack.last_mut() {
                // Nested input never spawns a collector.
                Some(parent) => {
                    parent.feed(Input::Nested(node))?;
                }
                None => self.finish(node)?,
            }
        }
        Ok(())
    }

    fn finish(&mut self, node: Node) -> Result<(), DslError> {
        match node {
            Node::AliasStatement(alias) => {
                self.program.body.push(Statement::Alias(alias));
                Ok(())
            }
            Node::StringLiteral(literal) => Err(ParseError {
                pos: self.current_pos(),
                msg: format!("Unexpected top level string literal \"{}\".", literal.value),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::{
        ast::{AliasLiteral, AliasStatement, PackedStatement, StringLiteral},
        lexer::Lexer,
    };

    fn parse(input: &str) -> Result<Program, DslError> {
        Parser::new(Lexer::new(input).tokenize()).parse()
    }

    fn alias(name: &str, packed: &str, string: &str) -> Statement {
        Statement::Alias(AliasStatement::new(
            AliasLiteral {
                value: name.to_string(),
            },
            PackedStatement {
                value: packed.to_string(),
                body: StringLiteral {
                    value: string.to_string(),
                },
            },
        ))
    }

    #[test]
    fn test_parse_alias() {
        let program = parse("alias foo #1 bar(\"baz\")").unwrap();
        assert_eq!(program.body, vec![alias("foo", "bar", "baz")]);
    }

    #[test]
    fn test_parse_multiple() {
        let program = parse("alias a #1 b(\"c\")\r\n  alias   d #22 e( \"f\" )\nalias g #3 h(\"i\") ").unwrap();
        assert_eq!(
            program.body,
            vec![alias("a", "b", "c"), alias("d", "e", "f"), alias("g", "h", "i")]
        );
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse("").unwrap(), Program::new());
        assert_eq!(parse("   \n\n").unwrap(), Program::new());
    }

    #[test]
    fn test_skip_top_level_tokens() {
        let program = parse("xyz alias foo #1 bar(\"baz\")").unwrap();
        assert_eq!(program.body, vec![alias("foo", "bar", "baz")]);

        let program = parse("( } $ if alias foo #1 bar(\"baz\") goto end").unwrap();
        assert_eq!(program.body, vec![alias("foo", "bar", "baz")]);
    }

    #[test]
    fn test_missing_parenthesis() {
        let err = parse("alias foo #1 bar(\"baz\"").unwrap_err();
        assert_eq!(
            err,
            ParseError {
                pos: Position::new(1, 12),
                msg: "Unterminated alias statement at end of input.".to_string()
            }
        );
    }

    #[test]
    fn test_unterminated_string() {
        let err = parse("alias foo #1 bar(\"baz").unwrap_err();
        assert_eq!(
            err,
            ParseError {
                pos: Position::new(1, 11),
                msg: "Unterminated string literal at end of input.".to_string()
            }
        );
    }

    #[test]
    fn test_multiple_words_in_string() {
        let err = parse("alias foo #1 bar(\"two words\")").unwrap_err();
        match err {
            ParseError { pos, .. } => assert_eq!(pos, Position::new(1, 13)),
            _ => panic!("unexpected error {}", err),
        }
    }

    #[test]
    fn test_mismatch() {
        assert!(parse("alias foo 1 bar(\"baz\")").is_err());
        assert!(parse("alias foo #1 bar \"baz\")").is_err());
        assert!(parse("alias foo #1 bar(baz)").is_err());
        assert!(parse("alias if #1 bar(\"baz\")").is_err());
    }

    #[test]
    fn test_alias_before_line_break() {
        // a line break does not promote the word, so the statement does not start with a keyword
        let err = parse("alias\nfoo #1 bar(\"baz\")").unwrap_err();
        match err {
            ParseError { pos, .. } => assert_eq!(pos, Position::new(1, 1)),
            _ => panic!("unexpected error {}", err),
        }
    }

    #[test]
    fn test_no_partial_program() {
        assert!(parse("alias a #1 b(\"c\") alias d #1 e(\"f f\")").is_err());
    }
}
