//! The `run` command: load Glass sources and execute `M.m`.

use std::ffi::OsString;
use std::path::PathBuf;

use glass_eval::{
    stdout_handler, EvalError, HeapStats, InputSource, InterpreterBuilder, SharedPrintHandler,
};
use glass_ir::ClassTable;

use super::{load_files, DriverError};

/// Settings for one run, filled from the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    /// Initial heap slot count.
    pub heap_capacity: usize,
    pub max_call_depth: Option<usize>,
    /// Print heap statistics to stderr after the run.
    pub gc_stats: bool,
    /// Arguments handed to the program through `I.a`, as raw bytes.
    pub args: Vec<Vec<u8>>,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            heap_capacity: glass_eval::Heap::DEFAULT_CAPACITY,
            max_call_depth: None,
            gc_stats: false,
            args: Vec::new(),
        }
    }
}

/// Split `run` arguments into source files and options.
///
/// Everything after `--` is passed to the program untouched, including
/// bytes that are not valid UTF-8.
pub fn parse_run_args(args: &[OsString]) -> Result<(Vec<PathBuf>, RunOptions), DriverError> {
    let mut files = Vec::new();
    let mut options = RunOptions::default();
    let mut iter = args.iter();
    while let Some(os_arg) = iter.next() {
        let Some(arg) = os_arg.to_str() else {
            files.push(PathBuf::from(os_arg));
            continue;
        };
        if arg == "--" {
            options.args = iter
                .by_ref()
                .map(|a| a.as_encoded_bytes().to_vec())
                .collect();
        } else if let Some(value) = arg.strip_prefix("--heap=") {
            options.heap_capacity = parse_count("--heap", value)?;
        } else if let Some(value) = arg.strip_prefix("--max-depth=") {
            options.max_call_depth = Some(parse_count("--max-depth", value)?);
        } else if arg == "--gc-stats" {
            options.gc_stats = true;
        } else if arg.starts_with('-') {
            return Err(DriverError::Usage(format!("unknown option '{arg}'")));
        } else {
            files.push(PathBuf::from(arg));
        }
    }
    if files.is_empty() {
        return Err(DriverError::Usage("missing source file".to_string()));
    }
    Ok((files, options))
}

fn parse_count(flag: &str, value: &str) -> Result<usize, DriverError> {
    value
        .parse()
        .map_err(|_| DriverError::Usage(format!("{flag} expects a number, got '{value}'")))
}

/// Run a loaded program with the given I/O, returning the final heap
/// occupancy.
pub fn run_program(
    classes: &ClassTable,
    options: &RunOptions,
    output: SharedPrintHandler,
    input: InputSource,
) -> Result<HeapStats, EvalError> {
    let mut interp = InterpreterBuilder::new(classes)
        .heap_capacity(options.heap_capacity)
        .max_call_depth(options.max_call_depth)
        .print_handler(output)
        .input(input)
        .args(options.args.iter().cloned())
        .build();
    interp.run()?;
    Ok(interp.heap_stats())
}

/// `glass run`: load `files`, run on the process streams, and return the
/// exit code.
pub fn run_files(files: &[PathBuf], options: &RunOptions) -> i32 {
    let result = load_files(files)
        .map_err(DriverError::from)
        .and_then(|classes| {
            run_program(&classes, options, stdout_handler(), InputSource::Stdin)
                .map_err(DriverError::from)
        });
    match result {
        Ok(stats) => {
            if options.gc_stats {
                eprintln!(
                    "heap: {} live / {} slots, {} collection(s)",
                    stats.live, stats.capacity, stats.collections
                );
            }
            0
        }
        Err(err) => {
            eprint!("{}", err.report());
            1
        }
    }
}
