//! Command handlers for the `glass` CLI.
//!
//! Each submodule implements one command. Loading and the shared error type
//! live here in the module root.

use std::path::Path;

use glass_eval::EvalError;
use glass_ir::ClassTable;
use glass_parse::{LoadError, Loader};

mod builtins;
mod check;
mod run;

pub use builtins::{builtin_table, list_builtins};
pub use check::{check_files, CheckSummary};
pub use run::{parse_run_args, run_files, run_program, RunOptions};

/// Anything that ends a driver command with exit code 1.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("{0}")]
    Load(#[from] LoadError),
    #[error("{}", .0.message)]
    Eval(#[from] EvalError),
    #[error("{0}")]
    Usage(String),
}

impl DriverError {
    /// Text written to stderr: the message plus, for runtime errors, the
    /// unwound frames.
    pub fn report(&self) -> String {
        match self {
            DriverError::Eval(err) => err.report(),
            other => format!("error: {other}\n"),
        }
    }
}

/// Load every file into one class table, builtins included.
#[tracing::instrument(level = "debug", skip_all, fields(files = paths.len()))]
pub fn load_files<P: AsRef<Path>>(paths: &[P]) -> Result<ClassTable, LoadError> {
    let mut loader = Loader::new();
    for path in paths {
        loader.add_file(path.as_ref())?;
    }
    loader.build()
}
