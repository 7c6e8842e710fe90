//! Various different utility structs used throughout the frontend.

use std::fmt::{Display, Formatter, Result};

/// Relative position of a `Token` in the source code.
///
/// The column counts tokens rather than characters: it is only advanced when a
/// new token starts on the current line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "({:?}, {:?})", self.line, self.column)
    }
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    pub fn next_column(&mut self) {
        self.column += 1;
    }

    pub fn next_line(&mut self) {
        self.line += 1;
        self.column = 0;
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 0)
    }
}
