//! File handles opened by the I/O builtins.
//!
//! A handle is shared by every copy of the value that holds it; closing one
//! copy closes them all. A path that cannot be opened still yields a handle,
//! one that is already closed.

use std::cell::RefCell;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::rc::Rc;

use crate::{io_error, EvalResult};

fn path_from_bytes(path: &[u8]) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(path).into_owned())
}

/// A file opened for reading.
#[derive(Clone, Debug)]
pub struct InputFile(Rc<RefCell<Option<BufReader<File>>>>);

impl InputFile {
    pub fn open(path: &[u8]) -> Self {
        let path = path_from_bytes(path);
        let reader = match File::open(&path) {
            Ok(file) => Some(BufReader::new(file)),
            Err(err) => {
                tracing::debug!(path = %path.display(), %err, "input file not opened");
                None
            }
        };
        InputFile(Rc::new(RefCell::new(reader)))
    }

    pub fn is_open(&self) -> bool {
        self.0.borrow().is_some()
    }

    pub fn close(&self) {
        self.0.borrow_mut().take();
    }

    /// Run `f` against the open reader.
    pub fn with_reader<R>(&self, f: impl FnOnce(&mut dyn BufRead) -> io::Result<R>) -> EvalResult<R> {
        let mut slot = self.0.borrow_mut();
        let reader = slot
            .as_mut()
            .ok_or_else(|| io_error("read from a closed input file"))?;
        Ok(f(reader)?)
    }

    pub(crate) fn same_handle(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// A file opened (truncated) for writing.
#[derive(Clone, Debug)]
pub struct OutputFile(Rc<RefCell<Option<BufWriter<File>>>>);

impl OutputFile {
    pub fn create(path: &[u8]) -> Self {
        let path = path_from_bytes(path);
        let writer = match File::create(&path) {
            Ok(file) => Some(BufWriter::new(file)),
            Err(err) => {
                tracing::debug!(path = %path.display(), %err, "output file not opened");
                None
            }
        };
        OutputFile(Rc::new(RefCell::new(writer)))
    }

    pub fn is_open(&self) -> bool {
        self.0.borrow().is_some()
    }

    /// Flush and close. Closing a closed handle does nothing.
    pub fn close(&self) -> EvalResult {
        if let Some(mut writer) = self.0.borrow_mut().take() {
            writer.flush()?;
        }
        Ok(())
    }

    pub fn write(&self, bytes: &[u8]) -> EvalResult {
        let mut slot = self.0.borrow_mut();
        let writer = slot
            .as_mut()
            .ok_or_else(|| io_error("write to a closed output file"))?;
        writer.write_all(bytes)?;
        Ok(())
    }

    pub(crate) fn same_handle(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Read one byte, or `None` at end of input.
pub(crate) fn read_byte(reader: &mut dyn BufRead) -> io::Result<Option<u8>> {
    let byte = reader.fill_buf()?.first().copied();
    if byte.is_some() {
        reader.consume(1);
    }
    Ok(byte)
}

/// Read through the next `\n` (kept), or to end of input.
pub(crate) fn read_line(reader: &mut dyn BufRead) -> io::Result<Vec<u8>> {
    let mut line = Vec::new();
    reader.read_until(b'\n', &mut line)?;
    Ok(line)
}

pub(crate) fn at_eof(reader: &mut dyn BufRead) -> io::Result<bool> {
    Ok(reader.fill_buf()?.is_empty())
}
