//! The frontend module contains everything that is concerned with tokenizing and parsing the input string.
//!
//! # Lexer
//! Firstly the lexer is responsible for converting the input string into a vector of tokens which
//! are defined in the token module. Tokenizing never fails.
//! ### Example
//! ```rust
//! use aliasdsl::frontend::tokenize;
//! let tokens = tokenize("alias foo #1 bar(\"baz\")");
//! ```
//!
//! # Parser
//! The parser consumes the token stream and turns it into an AST. Each grammar production is
//! recognized by a collector (see the collector module); the parser drives a stack of them.
//! ### Example
//! ```rust
//! use aliasdsl::frontend::{parse, tokenize};
//! let program = parse(tokenize("alias foo #1 bar(\"baz\")")).unwrap();
//! assert_eq!(program.body.len(), 1);
//! ```
//! The parser returns either the `frontend::ast::Program` or the first parse error. There is no
//! error recovery and no partial result.

pub mod ast;
pub mod collector;
pub mod lexer;
pub mod parser;
pub mod token;
pub mod utils;

use crate::error::DslError;

/// Split `source` into tokens.
pub fn tokenize(source: &str) -> Vec<token::Token<'_>> {
    lexer::Lexer::new(source).tokenize()
}

/// Build the program from a token stream.
pub fn parse(tokens: Vec<token::Token<'_>>) -> Result<ast::Program, DslError> {
    parser::Parser::new(tokens).parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::ast::{AliasLiteral, AliasStatement, PackedStatement, Statement, StringLiteral};

    #[test]
    fn test_pipeline() {
        let program = parse(tokenize("alias foo #1 bar(\"baz\")")).unwrap();
        assert_eq!(
            program.body,
            vec![Statement::Alias(AliasStatement {
                body: (
                    AliasLiteral {
                        value: "foo".to_string()
                    },
                    PackedStatement {
                        value: "bar".to_string(),
                        body: StringLiteral {
                            value: "baz".to_string()
                        }
                    }
                )
            })]
        );
        assert_eq!(program.to_string(), "Alias(Id:foo => Packed:bar(String:baz))");
    }

    #[test]
    fn test_pipeline_errors() {
        assert!(parse(tokenize("alias foo #1 bar(\"baz\"")).is_err());
        assert!(parse(tokenize("alias foo #1 bar(\"two words\")")).is_err());
    }
}
