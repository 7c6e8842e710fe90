use std::{error::Error, fmt, fmt::Display};

use crate::frontend::utils::Position;

#[derive(Debug, PartialEq)]
pub enum DslError {
    ParseError { pos: Position, msg: String },
    IoError { msg: String },
}

impl Display for DslError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DslError::ParseError { pos, msg } => write!(f, "Parse error at {}: {}", pos, msg),
            DslError::IoError { msg } => write!(f, "IO error: {}", msg),
        }
    }
}

impl Error for DslError {}

impl From<std::io::Error> for DslError {
    fn from(err: std::io::Error) -> Self {
        DslError::IoError {
            msg: err.to_string(),
        }
    }
}
