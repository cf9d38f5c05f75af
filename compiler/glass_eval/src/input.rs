//! Source for the standard-input builtins.

use std::io::{self, BufRead, Cursor};

/// Where `I.c`, `I.l` and `I.e` read from.
#[derive(Default)]
pub enum InputSource {
    /// The process's standard input.
    #[default]
    Stdin,
    /// In-memory bytes, for tests and embedding.
    Buffer(Cursor<Vec<u8>>),
}

impl InputSource {
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        InputSource::Buffer(Cursor::new(bytes.into()))
    }

    /// Run `f` against the underlying reader.
    pub fn with_reader<R>(&mut self, f: impl FnOnce(&mut dyn BufRead) -> io::Result<R>) -> io::Result<R> {
        match self {
            InputSource::Stdin => f(&mut io::stdin().lock()),
            InputSource::Buffer(cursor) => f(cursor),
        }
    }
}
