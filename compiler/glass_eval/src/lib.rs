//! Glass Eval - the Glass runtime.
//!
//! Executes a loaded [`ClassTable`](glass_ir::ClassTable):
//!
//! - [`Value`]: numbers, byte strings, names, instances, bound methods and
//!   file handles
//! - [`Heap`]: instance slots reclaimed by a mark-and-sweep collector
//! - [`Environment`]: globals, call frames and first-character scoping
//! - [`Interpreter`]: the command loop and the builtin library
//!
//! ```text
//! let classes = glass_parse::load_source("hello.glass", source)?;
//! let mut interp = InterpreterBuilder::new(&classes)
//!     .print_handler(buffer_handler())
//!     .build();
//! interp.run()?;
//! ```

mod builtins;
mod environment;
mod errors;
mod files;
mod heap;
mod input;
mod interpreter;
mod print_handler;
mod stack;
mod value;
mod value_stack;

pub use environment::{Environment, Frame};
pub use errors::{
    arguments_exhausted, index_out_of_range, io_error, missing_entry_point, no_such_method,
    not_an_instance, recursion_limit_exceeded, stack_underflow, type_mismatch, undefined_name,
    unknown_class, EvalError, EvalErrorKind, EvalResult, TraceFrame,
};
pub use files::{InputFile, OutputFile};
pub use heap::{Handle, Heap, HeapStats, Instance, Trace, Tracer};
pub use input::InputSource;
pub use interpreter::{FramedInterpreter, Interpreter, InterpreterBuilder};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use stack::ensure_sufficient_stack;
pub use value::{format_number, Value};
pub use value_stack::ValueStack;
