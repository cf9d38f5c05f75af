//! Glass driver.
//!
//! Loads source files into a class table and runs them on the interpreter.
//! The `glass` binary is a thin argument parser over [`commands`]; the same
//! entry points are used by the integration tests with buffered I/O.

pub mod commands;
mod tracing_setup;

pub use commands::{
    builtin_table, check_files, list_builtins, load_files, parse_run_args, run_files, run_program,
    CheckSummary, DriverError, RunOptions,
};
pub use tracing_setup::init_tracing;
