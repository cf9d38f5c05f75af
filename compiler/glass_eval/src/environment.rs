//! Variable storage and scope resolution.
//!
//! A name's first character picks its table ([`ScopeKind::of`]):
//! `_name` lives in the current frame's locals, `lowercase` in the fields of
//! the current frame's instance, anything else in the global table.
//!
//! The frame stack doubles as the collector's view of pending calls: every
//! frame's locals and instance are roots.

use glass_ir::{Name, ScopeKind};
use rustc_hash::FxHashMap;

use crate::heap::{Handle, Heap, Trace, Tracer};
use crate::{recursion_limit_exceeded, undefined_name, EvalResult, Value};

/// One active method call.
#[derive(Debug)]
pub struct Frame {
    locals: FxHashMap<Name, Value>,
    this: Handle,
    class: Name,
    method: Name,
}

impl Frame {
    pub fn new(this: Handle, class: Name, method: Name) -> Self {
        Frame {
            locals: FxHashMap::default(),
            this,
            class,
            method,
        }
    }

    /// The instance the method runs on.
    pub fn this(&self) -> Handle {
        self.this
    }

    pub fn class(&self) -> &Name {
        &self.class
    }

    pub fn method(&self) -> &Name {
        &self.method
    }
}

/// Globals plus the stack of active frames.
#[derive(Debug, Default)]
pub struct Environment {
    globals: FxHashMap<Name, Value>,
    frames: Vec<Frame>,
    max_depth: Option<usize>,
}

impl Environment {
    pub fn new(max_depth: Option<usize>) -> Self {
        Environment {
            globals: FxHashMap::default(),
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Enter a call, checking the depth limit. The frame is not pushed on
    /// overflow.
    pub fn push_frame(&mut self, frame: Frame) -> EvalResult {
        if let Some(max) = self.max_depth {
            if self.frames.len() >= max {
                return Err(recursion_limit_exceeded(max));
            }
        }
        self.frames.push(frame);
        Ok(())
    }

    pub fn pop_frame(&mut self) {
        debug_assert!(!self.frames.is_empty(), "pop_frame on empty frame stack");
        self.frames.pop();
    }

    #[inline]
    pub fn current(&self) -> Option<&Frame> {
        self.frames.last()
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn global(&self, name: &str) -> Option<&Value> {
        self.globals.get(name)
    }

    /// Read a variable. Undefined names are an error.
    pub fn lookup(&self, name: &Name, heap: &Heap<'_>) -> EvalResult<Value> {
        let found = match name.scope() {
            ScopeKind::Local => self.frames.last().and_then(|f| f.locals.get(name)),
            ScopeKind::Classwide => self
                .frames
                .last()
                .and_then(|f| heap.get(f.this))
                .and_then(|inst| inst.field(name.as_str())),
            ScopeKind::Global => self.globals.get(name),
        };
        found.cloned().ok_or_else(|| undefined_name(name.as_str()))
    }

    /// Bind a variable, creating or replacing it.
    pub fn bind(&mut self, name: Name, value: Value, heap: &mut Heap<'_>) -> EvalResult {
        match name.scope() {
            ScopeKind::Local => {
                let frame = self
                    .frames
                    .last_mut()
                    .ok_or_else(|| undefined_name(name.as_str()))?;
                frame.locals.insert(name, value);
            }
            ScopeKind::Classwide => {
                let instance = self
                    .frames
                    .last()
                    .and_then(|f| heap.get_mut(f.this))
                    .ok_or_else(|| undefined_name(name.as_str()))?;
                instance.set_field(name, value);
            }
            ScopeKind::Global => {
                self.globals.insert(name, value);
            }
        }
        Ok(())
    }

    /// Remove a binding if present.
    pub fn unbind(&mut self, name: &Name, heap: &mut Heap<'_>) {
        match name.scope() {
            ScopeKind::Local => {
                if let Some(frame) = self.frames.last_mut() {
                    frame.locals.remove(name);
                }
            }
            ScopeKind::Classwide => {
                if let Some(instance) = self.frames.last().and_then(|f| heap.get_mut(f.this)) {
                    instance.remove_field(name.as_str());
                }
            }
            ScopeKind::Global => {
                self.globals.remove(name);
            }
        }
    }
}

impl Trace for Frame {
    fn trace(&self, tracer: &mut dyn Tracer) {
        tracer.mark(self.this);
        self.locals.trace(tracer);
    }
}

impl Trace for Environment {
    fn trace(&self, tracer: &mut dyn Tracer) {
        self.globals.trace(tracer);
        self.frames.trace(tracer);
    }
}

#[cfg(test)]
mod tests;
