//! Abstract syntax tree datastructures.
//! In here are all datastructures the parser builds while consuming the token stream.

use std::fmt;

/// Root of the tree. The statements are kept in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub body: Vec<Statement>,
}

impl Program {
    pub fn new() -> Self {
        Self { body: Vec::new() }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, statement) in self.body.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", statement)?;
        }
        Ok(())
    }
}

/// Top level statements. Alias declarations are the only statement recognized.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Alias(AliasStatement),
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Statement::Alias(alias) => write!(f, "{}", alias),
        }
    }
}

/// `alias <name> #<n> <packed>("<string>")`
#[derive(Debug, Clone, PartialEq)]
pub struct AliasStatement {
    pub body: (AliasLiteral, PackedStatement),
}

impl AliasStatement {
    pub fn new(alias: AliasLiteral, packed: PackedStatement) -> Self {
        Self {
            body: (alias, packed),
        }
    }
}

impl fmt::Display for AliasStatement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Alias({} => {})", self.body.0, self.body.1)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AliasLiteral {
    pub value: String,
}

impl fmt::Display for AliasLiteral {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Id:{}", self.value)
    }
}

/// The packed format name together with its string argument.
#[derive(Debug, Clone, PartialEq)]
pub struct PackedStatement {
    pub value: String,
    pub body: StringLiteral,
}

impl fmt::Display for PackedStatement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Packed:{}({})", self.value, self.body)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StringLiteral {
    pub value: String,
}

impl fmt::Display for StringLiteral {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "String:{}", self.value)
    }
}

/// A finished node as handed out by a collector.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    AliasStatement(AliasStatement),
    StringLiteral(StringLiteral),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let program = Program {
            body: vec![
                Statement::Alias(AliasStatement::new(
                    AliasLiteral {
                        value: "foo".to_string(),
                    },
                    PackedStatement {
                        value: "bar".to_string(),
                        body: StringLiteral {
                            value: "baz".to_string(),
                        },
                    },
                )),
                Statement::Alias(AliasStatement::new(
                    AliasLiteral {
                        value: "a".to_string(),
                    },
                    PackedStatement {
                        value: "b".to_string(),
                        body: StringLiteral {
                            value: "c".to_string(),
                        },
                    },
                )),
            ],
        };
        assert_eq!(
            program.to_string(),
            "Alias(Id:foo => Packed:bar(String:baz))\nAlias(Id:a => Packed:b(String:c))"
        );
        assert_eq!(Program::new().to_string(), "");
    }
}
