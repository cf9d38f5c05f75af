//! Destination for program output.
//!
//! The standard-output builtins write through a handler so a run can go to
//! the process's stdout, be captured for tests, or be discarded:
//! - `Stdout`: the default for `glass run`
//! - `Buffer`: captures bytes for assertions
//! - `Silent`: drops everything
//!
//! Enum dispatch keeps the write path free of vtable calls.

use std::io::{self, Write};

use parking_lot::Mutex;

/// Writes to the process's standard output.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    pub fn write(&self, bytes: &[u8]) -> io::Result<()> {
        io::stdout().lock().write_all(bytes)
    }

    pub fn flush(&self) -> io::Result<()> {
        io::stdout().lock().flush()
    }
}

/// Captures output in memory.
pub struct BufferPrintHandler {
    buffer: Mutex<Vec<u8>>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        BufferPrintHandler {
            buffer: Mutex::new(Vec::new()),
        }
    }

    pub fn write(&self, bytes: &[u8]) {
        self.buffer.lock().extend_from_slice(bytes);
    }

    /// Everything written so far.
    pub fn get_bytes(&self) -> Vec<u8> {
        self.buffer.lock().clone()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Default for BufferPrintHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Print handler implementation using enum dispatch.
pub enum PrintHandlerImpl {
    Stdout(StdoutPrintHandler),
    Buffer(BufferPrintHandler),
    Silent,
}

impl PrintHandlerImpl {
    pub fn write(&self, bytes: &[u8]) -> io::Result<()> {
        match self {
            Self::Stdout(h) => h.write(bytes),
            Self::Buffer(h) => {
                h.write(bytes);
                Ok(())
            }
            Self::Silent => Ok(()),
        }
    }

    pub fn flush(&self) -> io::Result<()> {
        match self {
            Self::Stdout(h) => h.flush(),
            Self::Buffer(_) | Self::Silent => Ok(()),
        }
    }

    /// Captured output, lossily decoded; empty for handlers that don't
    /// capture.
    pub fn get_output(&self) -> String {
        String::from_utf8_lossy(&self.get_bytes()).into_owned()
    }

    /// Captured output bytes; empty for handlers that don't capture.
    pub fn get_bytes(&self) -> Vec<u8> {
        match self {
            Self::Buffer(h) => h.get_bytes(),
            Self::Stdout(_) | Self::Silent => Vec::new(),
        }
    }

    pub fn clear(&self) {
        if let Self::Buffer(h) = self {
            h.clear();
        }
    }
}

/// Shared print handler that can be passed around.
pub type SharedPrintHandler = std::sync::Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    std::sync::Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

pub fn buffer_handler() -> SharedPrintHandler {
    std::sync::Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

/// A handler that discards all output.
pub fn silent_handler() -> SharedPrintHandler {
    std::sync::Arc::new(PrintHandlerImpl::Silent)
}
