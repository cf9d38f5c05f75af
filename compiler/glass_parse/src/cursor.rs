//! Byte cursor over Glass source text.
//!
//! Glass is byte-oriented: every command is one ASCII character and string
//! literals are raw bytes. The cursor tracks the 1-based line and column of
//! the next byte so each command can record where it was written.

use glass_ir::{Name, SourceLoc};

pub(crate) struct Cursor<'a> {
    bytes: &'a [u8],
    file: Name,
    pos: usize,
    line: u32,
    col: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(file: Name, source: &'a str) -> Self {
        Cursor {
            bytes: source.as_bytes(),
            file,
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    /// Location of the next byte.
    pub(crate) fn loc(&self) -> SourceLoc {
        SourceLoc::new(self.file.clone(), self.line, self.col)
    }

    #[inline]
    pub(crate) fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    /// Consume one byte.
    pub(crate) fn bump(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.pos += 1;
        if byte == b'\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(byte)
    }

    /// Skip whitespace and `'...'` comments.
    ///
    /// An unterminated comment runs to the end of the input.
    pub(crate) fn skip_trivia(&mut self) {
        while let Some(byte) = self.peek() {
            if byte == b'\'' {
                self.bump();
                while let Some(inner) = self.bump() {
                    if inner == b'\'' {
                        break;
                    }
                }
            } else if byte.is_ascii_whitespace() {
                self.bump();
            } else {
                break;
            }
        }
    }
}
