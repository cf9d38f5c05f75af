//! `InterpreterBuilder` for configuring a run.

use glass_ir::{ClassTable, Name, CONSTRUCTOR};

use super::Interpreter;
use crate::environment::Environment;
use crate::heap::Heap;
use crate::{stdout_handler, InputSource, SharedPrintHandler, ValueStack};

/// Builder for [`Interpreter`].
///
/// Defaults: 1024 heap slots, no call-depth limit beyond the host stack,
/// stdout output, stdin input, no program arguments.
pub struct InterpreterBuilder<'p> {
    classes: &'p ClassTable,
    heap_capacity: usize,
    max_call_depth: Option<usize>,
    print_handler: Option<SharedPrintHandler>,
    input: Option<InputSource>,
    args: Vec<Vec<u8>>,
}

impl<'p> InterpreterBuilder<'p> {
    pub fn new(classes: &'p ClassTable) -> Self {
        InterpreterBuilder {
            classes,
            heap_capacity: Heap::DEFAULT_CAPACITY,
            max_call_depth: None,
            print_handler: None,
            input: None,
            args: Vec::new(),
        }
    }

    /// Initial number of heap slots; values below 1 are raised to 1.
    #[must_use]
    pub fn heap_capacity(mut self, capacity: usize) -> Self {
        self.heap_capacity = capacity;
        self
    }

    /// Fail with a recursion error once this many calls are active.
    #[must_use]
    pub fn max_call_depth(mut self, depth: Option<usize>) -> Self {
        self.max_call_depth = depth;
        self
    }

    /// Where the standard-output builtins write.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Where the standard-input builtins read.
    #[must_use]
    pub fn input(mut self, input: InputSource) -> Self {
        self.input = Some(input);
        self
    }

    /// Program arguments handed out by `I.a`.
    #[must_use]
    pub fn args<I, A>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Vec<u8>>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> Interpreter<'p> {
        Interpreter {
            classes: self.classes,
            heap: Heap::new(self.heap_capacity),
            env: Environment::new(self.max_call_depth),
            stack: ValueStack::new(),
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            input: self.input.unwrap_or_default(),
            args: self.args,
            next_arg: 0,
            fresh_names: 0,
            constructor: Name::new(CONSTRUCTOR),
        }
    }
}
