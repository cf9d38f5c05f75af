//! Glass Parse - source parser and class loader.
//!
//! Turns Glass source text into the immutable [`ClassTable`] the interpreter
//! runs. Two passes:
//!
//! 1. [`parse_source`]: text to [`ClassDecl`]s. Loop begin/end pairs are
//!    matched and their jump targets patched while each method is built.
//! 2. [`Loader::build`]: rejects duplicate classes, methods and parents,
//!    then flattens inheritance into every class's method table.
//!
//! ```text
//! let mut loader = Loader::new();
//! loader.add_source("hello.glass", "{M[m(_o)O!\"Hi\"(_o)o.?]}")?;
//! let classes = loader.build()?;
//! ```

mod cursor;
mod error;
mod loader;
mod parser;

pub use error::{LoadError, ParseError};
pub use loader::Loader;
pub use parser::{parse_source, ClassDecl};

use glass_ir::ClassTable;

/// Parse and load a single source, builtin classes included.
pub fn load_source(file: &str, source: &str) -> Result<ClassTable, LoadError> {
    let mut loader = Loader::new();
    loader.add_source(file, source)?;
    loader.build()
}
