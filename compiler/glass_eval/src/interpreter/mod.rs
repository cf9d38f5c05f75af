//! The Glass interpreter.
//!
//! One [`Interpreter`] owns all mutable state of a run: heap, globals, frame
//! stack, value stack and I/O handles. Method calls recurse through
//! [`Interpreter::call_method`]; each call holds a [`FramedInterpreter`]
//! guard so its frame is popped on every exit path, errors included.

mod builder;
mod frame_guard;
mod opcodes;

pub use builder::InterpreterBuilder;
pub use frame_guard::FramedInterpreter;

use glass_ir::{
    ClassTable, Command, GlassClass, GlassFunction, Instruction, Name, MAIN_CLASS, MAIN_METHOD,
};

use crate::builtins;
use crate::environment::{Environment, Frame};
use crate::heap::{Handle, Heap, HeapStats, Trace, Tracer};
use crate::stack::ensure_sufficient_stack;
use crate::{
    missing_entry_point, no_such_method, not_an_instance, EvalResult, InputSource,
    SharedPrintHandler, TraceFrame, Value, ValueStack,
};

/// Control transfer requested by one command.
enum Flow {
    Next,
    Jump(usize),
    Return,
}

/// Interpreter state for one program run.
pub struct Interpreter<'p> {
    pub(crate) classes: &'p ClassTable,
    pub(crate) heap: Heap<'p>,
    pub(crate) env: Environment,
    pub(crate) stack: ValueStack,
    pub(crate) print_handler: SharedPrintHandler,
    pub(crate) input: InputSource,
    pub(crate) args: Vec<Vec<u8>>,
    /// Index of the next argument handed out by `I.a`.
    pub(crate) next_arg: usize,
    /// Counter behind `V.n`.
    pub(crate) fresh_names: usize,
    constructor: Name,
}

/// Everything the collector must treat as live.
struct Roots<'r> {
    env: &'r Environment,
    stack: &'r ValueStack,
}

impl Trace for Roots<'_> {
    fn trace(&self, tracer: &mut dyn Tracer) {
        self.env.trace(tracer);
        self.stack.trace(tracer);
    }
}

impl<'p> Interpreter<'p> {
    /// An interpreter with default settings: stdout, stdin, no arguments.
    pub fn new(classes: &'p ClassTable) -> Self {
        InterpreterBuilder::new(classes).build()
    }

    /// Instantiate `M` (running its constructor) and call `m` on it.
    ///
    /// Output is flushed whether or not the program fails.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run(&mut self) -> EvalResult {
        let classes = self.classes;
        let main = classes
            .get(MAIN_CLASS)
            .ok_or_else(|| missing_entry_point(format!("no class '{MAIN_CLASS}'")))?;
        if !main.has_method(MAIN_METHOD) {
            return Err(missing_entry_point(format!(
                "class '{MAIN_CLASS}' has no method '{MAIN_METHOD}'"
            )));
        }

        let result = self
            .instantiate(main)
            .and_then(|this| self.call_method(this, &Name::new(MAIN_METHOD)));
        let flushed = self.print_handler.flush();
        result?;
        flushed?;
        Ok(())
    }

    /// Allocate an instance and run its `c__` constructor, if it has one.
    pub(crate) fn instantiate(&mut self, class: &'p GlassClass) -> EvalResult<Handle> {
        let this = self.allocate(class);
        if class.has_method(self.constructor.as_str()) {
            let constructor = self.constructor.clone();
            self.call_method(this, &constructor)?;
        }
        Ok(this)
    }

    fn allocate(&mut self, class: &'p GlassClass) -> Handle {
        let roots = Roots {
            env: &self.env,
            stack: &self.stack,
        };
        self.heap.allocate(class, &roots)
    }

    /// Run `method` on the instance behind `this` in a fresh frame.
    ///
    /// Builtin methods run without a frame of their own, so `V.d` and the
    /// error trace see the calling method.
    pub(crate) fn call_method(&mut self, this: Handle, method: &Name) -> EvalResult {
        let class = self
            .heap
            .get(this)
            .map(crate::heap::Instance::class)
            .ok_or_else(|| not_an_instance(method.as_str(), "a collected instance".to_string()))?;
        let func = class
            .method(method.as_str())
            .ok_or_else(|| no_such_method(class.name().as_str(), method.as_str()))?;

        if let [Instruction {
            command: Command::Builtin(builtin),
            ..
        }] = func.instructions()
        {
            return builtins::call(self, *builtin);
        }

        ensure_sufficient_stack(|| {
            let mut framed = self.framed(Frame::new(this, class.name().clone(), method.clone()))?;
            framed.execute(func)
        })
    }

    /// Dispatch `func`'s commands in the current frame until it returns or
    /// falls off the end.
    #[tracing::instrument(level = "debug", skip_all, fields(method = %func.name()))]
    fn execute(&mut self, func: &'p GlassFunction) -> EvalResult {
        let mut ip = 0;
        while let Some(instruction) = func.get(ip) {
            tracing::trace!(ip, command = %instruction.command, "dispatch");
            match self.step(&instruction.command) {
                Ok(Flow::Next) => ip += 1,
                Ok(Flow::Jump(target)) => ip = target,
                Ok(Flow::Return) => return Ok(()),
                Err(err) => {
                    tracing::debug!(at = %instruction.loc, error = %err, "unwinding");
                    let frame = self.env.current().map(|frame| TraceFrame {
                        class: frame.class().clone(),
                        method: frame.method().clone(),
                        loc: instruction.loc.clone(),
                    });
                    return Err(match frame {
                        Some(frame) => err.with_frame(frame),
                        None => err,
                    });
                }
            }
        }
        Ok(())
    }

    /// Run a collection now, with the current roots.
    pub fn collect_garbage(&mut self) {
        let roots = Roots {
            env: &self.env,
            stack: &self.stack,
        };
        self.heap.collect(&roots);
    }

    pub fn heap_stats(&self) -> HeapStats {
        self.heap.stats()
    }

    pub fn heap(&self) -> &Heap<'p> {
        &self.heap
    }

    pub fn stack(&self) -> &ValueStack {
        &self.stack
    }

    pub fn global(&self, name: &str) -> Option<&Value> {
        self.env.global(name)
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }
}
