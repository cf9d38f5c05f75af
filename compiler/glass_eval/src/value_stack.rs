//! The value stack shared by every active call.
//!
//! Opcodes and builtins check depth and operand types through [`peek`]
//! before removing anything, so a failed check leaves the stack untouched.
//!
//! [`peek`]: ValueStack::peek

use crate::heap::{Trace, Tracer};
use crate::{stack_underflow, EvalResult, Value};

#[derive(Debug, Default)]
pub struct ValueStack {
    values: Vec<Value>,
}

impl ValueStack {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, value: Value) {
        self.values.push(value);
    }

    pub fn pop(&mut self) -> EvalResult<Value> {
        self.values.pop().ok_or_else(|| stack_underflow(1, 0))
    }

    /// Fail unless at least `needed` values are present.
    #[inline]
    pub fn require(&self, needed: usize) -> EvalResult {
        if self.values.len() < needed {
            return Err(stack_underflow(needed, self.values.len()));
        }
        Ok(())
    }

    /// The value `depth` positions below the top (0 = top).
    #[inline]
    pub fn peek(&self, depth: usize) -> EvalResult<&Value> {
        self.require(depth.saturating_add(1))?;
        Ok(&self.values[self.values.len() - 1 - depth])
    }

    /// Remove the top `count` values; callers have already checked depth.
    pub fn discard(&mut self, count: usize) {
        let len = self.values.len().saturating_sub(count);
        self.values.truncate(len);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Bottom to top.
    pub fn as_slice(&self) -> &[Value] {
        &self.values
    }
}

impl Trace for ValueStack {
    fn trace(&self, tracer: &mut dyn Tracer) {
        self.values.trace(tracer);
    }
}
