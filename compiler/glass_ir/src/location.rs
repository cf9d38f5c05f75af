//! Source locations for diagnostics.

use std::fmt;

use crate::Name;

/// Where a command, method or class was written.
///
/// Lines and columns are 1-based; builtin definitions use line 0.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SourceLoc {
    pub file: Name,
    pub line: u32,
    pub col: u32,
}

impl SourceLoc {
    pub fn new(file: Name, line: u32, col: u32) -> Self {
        SourceLoc { file, line, col }
    }
}

impl fmt::Display for SourceLoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.col)
    }
}
