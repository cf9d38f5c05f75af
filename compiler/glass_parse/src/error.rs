//! Parse and load errors.

use std::path::PathBuf;

use glass_ir::{Name, SourceLoc};

/// A syntax error in one source file.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("{loc}: unexpected '{found}' while expecting {expected}")]
    UnexpectedChar {
        found: char,
        expected: &'static str,
        loc: SourceLoc,
    },
    #[error("{loc}: input ended inside {context}")]
    UnexpectedEof {
        context: &'static str,
        loc: SourceLoc,
    },
    #[error("{loc}: invalid character '{found}' in the middle of a name")]
    InvalidNameChar { found: char, loc: SourceLoc },
    #[error("{loc}: '{text}' is not a number")]
    InvalidNumber { text: String, loc: SourceLoc },
    #[error("{loc}: '\\' without a matching '/'")]
    UnmatchedLoopEnd { loc: SourceLoc },
    #[error("{loc}: loop over '{name}' is not closed before the method ends")]
    UnclosedLoop { name: Name, loc: SourceLoc },
}

/// A failure turning source files into a class table.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("unable to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{loc}: class '{name}' defined multiple times (first defined at {first})")]
    DuplicateClass {
        name: Name,
        first: SourceLoc,
        loc: SourceLoc,
    },
    #[error("{loc}: method '{method}' defined multiple times in class '{class}'")]
    DuplicateMethod {
        class: Name,
        method: Name,
        loc: SourceLoc,
    },
    #[error("{loc}: class '{class}' inherits from '{parent}' multiple times")]
    DuplicateParent {
        class: Name,
        parent: Name,
        loc: SourceLoc,
    },
    #[error("{loc}: class '{class}' inherits from unknown class '{parent}'")]
    UnknownParent {
        class: Name,
        parent: Name,
        loc: SourceLoc,
    },
    #[error("{loc}: inheritance cycle: {chain}")]
    InheritanceCycle { chain: String, loc: SourceLoc },
}
