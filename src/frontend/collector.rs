//! Grammar collectors.
//!
//! A `Collector` recognizes one grammar production. It walks an ordered table of rules, one rule
//! per token, and buffers every matched token. A rule may also descend into a sub-grammar: the
//! collector then hands a fresh collector for that sub-grammar back to the parser, which runs it on
//! the same token and feeds the finished node back in. Once the last rule is satisfied the
//! collector is complete and can be composed into its AST node.
//!
//! There is no backtracking. A token that does not satisfy the current rule aborts the parse.

use std::fmt;

use super::{
    ast::{AliasLiteral, AliasStatement, Node, PackedStatement, StringLiteral},
    token::{Kind, Token},
    utils::Position,
};
use crate::error::DslError::{self, ParseError};

/// The closed set of grammars known to the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grammar {
    AliasStatement,
    StringLiteral,
}

const ALIAS_STATEMENT_RULES: &[Rule] = &[
    Rule::Keyword("alias"),
    Rule::Word,
    Rule::Sign('#'),
    Rule::Word,
    Rule::Word,
    Rule::Sign('('),
    Rule::Descend(Grammar::StringLiteral),
    Rule::Sign(')'),
];

const STRING_LITERAL_RULES: &[Rule] = &[Rule::Sign('"'), Rule::Word, Rule::Sign('"')];

// Indices into the buffered tokens of an alias statement.
const ALIAS_NAME: usize = 1;
const PACKED_NAME: usize = 4;

impl Grammar {
    pub fn rules(self) -> &'static [Rule] {
        match self {
            Grammar::AliasStatement => ALIAS_STATEMENT_RULES,
            Grammar::StringLiteral => STRING_LITERAL_RULES,
        }
    }

    /// Whether whitespace tokens are dropped before the rules see them.
    pub fn skips_whitespace(self) -> bool {
        match self {
            Grammar::AliasStatement | Grammar::StringLiteral => true,
        }
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Grammar::AliasStatement => write!(f, "alias statement"),
            Grammar::StringLiteral => write!(f, "string literal"),
        }
    }
}

/// A single step of a grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Keyword(&'static str),
    Word,
    Sign(char),
    Descend(Grammar),
}

/// Outcome of testing a token against a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Matched,
    Failed,
    Descend(Grammar),
}

impl Rule {
    pub fn evaluate(&self, token: &Token) -> Verdict {
        let matched = match *self {
            Rule::Keyword(word) => token.kind == Kind::Keyword && token.text() == word,
            Rule::Word => token.kind == Kind::Word,
            Rule::Sign(c) => {
                let mut buf = [0; 4];
                token.kind == Kind::Sign && token.text() == c.encode_utf8(&mut buf)
            }
            Rule::Descend(grammar) => return Verdict::Descend(grammar),
        };
        if matched {
            Verdict::Matched
        } else {
            Verdict::Failed
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Rule::Keyword(word) => write!(f, "keyword '{}'", word),
            Rule::Word => write!(f, "word"),
            Rule::Sign(c) => write!(f, "'{}'", c),
            Rule::Descend(grammar) => write!(f, "{}", grammar),
        }
    }
}

/// What the parser hands to a collector: either the next token or the node of a finished
/// sub-grammar.
#[derive(Debug, Clone)]
pub enum Input<'a> {
    Token(Token<'a>),
    Nested(Node),
}

#[derive(Debug)]
pub struct Collector<'a> {
    grammar: Grammar,
    /// Index of the next rule to satisfy.
    cursor: usize,
    /// Tokens matched so far, in rule order. Descend rules leave no entry.
    matched: Vec<Token<'a>>,
    /// Nodes merged from finished sub-grammars.
    nested: Vec<Node>,
    complete: bool,
    skip_whitespace: bool,
}

type FeedResult<'a> = Result<Option<Collector<'a>>, DslError>;

impl<'a> Collector<'a> {
    pub fn new(grammar: Grammar) -> Self {
        Self {
            grammar,
            cursor: 0,
            matched: Vec::new(),
            nested: Vec::new(),
            complete: false,
            skip_whitespace: grammar.skips_whitespace(),
        }
    }

    pub fn grammar(&self) -> Grammar {
        self.grammar
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Feed the next input. Returns a new collector if the current rule descends into a
    /// sub-grammar; the input was not consumed in that case and has to be fed to the new collector.
    pub fn feed(&mut self, input: Input<'a>) -> FeedResult<'a> {
        let rule = match self.grammar.rules().get(self.cursor) {
            Some(rule) if !self.complete => *rule,
            _ => return Err(self.error(format!("The {} is already complete.", self.grammar))),
        };
        match input {
            Input::Nested(node) => match rule {
                Rule::Descend(grammar) => {
                    self.merge(grammar, node)?;
                    self.advance();
                    Ok(None)
                }
                _ => Err(self.error(format!(
                    "Expected {} in {}. Found a nested node instead.",
                    rule, self.grammar
                ))),
            },
            Input::Token(token) => {
                if token.kind == Kind::Whitespace && self.skip_whitespace {
                    return Ok(None);
                }
                match rule.evaluate(&token) {
                    Verdict::Descend(grammar) => {
                        log::debug!("{} descends into {} at {}", self.grammar, grammar, token.pos);
                        Ok(Some(Collector::new(grammar)))
                    }
                    Verdict::Matched => {
                        log::trace!("{} matched {}", self.grammar, token);
                        self.matched.push(token);
                        self.advance();
                        Ok(None)
                    }
                    Verdict::Failed => Err(ParseError {
                        pos: token.pos,
                        msg: format!(
                            "Expected {} in {}. Found {:?}:{:?} instead.",
                            rule,
                            self.grammar,
                            token.kind,
                            token.text()
                        ),
                    }),
                }
            }
        }
    }

    /// Build the AST node from the buffered tokens and merged sub-results.
    pub fn compose(self) -> Result<Node, DslError> {
        if !self.complete {
            return Err(self.error(format!("Unterminated {}.", self.grammar)));
        }
        match self.grammar {
            Grammar::AliasStatement => {
                let alias = AliasLiteral {
                    value: self.text_at(ALIAS_NAME)?,
                };
                let value = self.text_at(PACKED_NAME)?;
                let pos = self.last_pos();
                let body = match self.nested.into_iter().next() {
                    Some(Node::StringLiteral(literal)) => literal,
                    _ => {
                        return Err(ParseError {
                            pos,
                            msg: "Expected a string literal as packed statement body.".to_string(),
                        })
                    }
                };
                Ok(Node::AliasStatement(AliasStatement::new(
                    alias,
                    PackedStatement { value, body },
                )))
            }
            Grammar::StringLiteral => Ok(Node::StringLiteral(StringLiteral {
                value: self.text_at(1)?,
            })),
        }
    }

    //-------
    // HELPER
    //-------

    fn advance(&mut self) {
        self.cursor += 1;
        if self.cursor == self.grammar.rules().len() {
            self.complete = true;
        }
    }

    /// Attach the node of a finished sub-grammar.
    fn merge(&mut self, expected: Grammar, node: Node) -> Result<(), DslError> {
        let fits = match (expected, &node) {
            (Grammar::StringLiteral, Node::StringLiteral(_)) => true,
            (Grammar::AliasStatement, Node::AliasStatement(_)) => true,
            _ => false,
        };
        if !fits {
            return Err(self.error(format!("Expected {} in {}.", expected, self.grammar)));
        }
        self.nested.push(node);
        Ok(())
    }

    fn text_at(&self, idx: usize) -> Result<String, DslError> {
        self.matched
            .get(idx)
            .map(|token| token.text().to_string())
            .ok_or_else(|| self.error(format!("Missing token in {}.", self.grammar)))
    }

    fn last_pos(&self) -> Position {
        self.matched
            .last()
            .map(|token| token.pos)
            .unwrap_or_default()
    }

    fn error(&self, msg: String) -> DslError {
        ParseError {
            pos: self.last_pos(),
            msg,
        }
    }
}
