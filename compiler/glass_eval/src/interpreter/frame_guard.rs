//! RAII guard for call frames.
//!
//! The guard holds `&mut Interpreter` and derefs to it, so a method body
//! runs through the guard like through the interpreter itself. Dropping the
//! guard pops the frame, whether the body returned, failed, or panicked.
//! A frame left behind would keep its instances alive as collector roots.

use std::ops::{Deref, DerefMut};

use super::Interpreter;
use crate::environment::Frame;
use crate::EvalResult;

pub struct FramedInterpreter<'guard, 'p> {
    interpreter: &'guard mut Interpreter<'p>,
}

impl Drop for FramedInterpreter<'_, '_> {
    fn drop(&mut self) {
        self.interpreter.env.pop_frame();
    }
}

impl<'p> Deref for FramedInterpreter<'_, 'p> {
    type Target = Interpreter<'p>;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for FramedInterpreter<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl<'p> Interpreter<'p> {
    /// Push `frame` and return a guard that pops it on drop.
    ///
    /// Fails without pushing when the configured call depth is reached.
    pub fn framed(&mut self, frame: Frame) -> EvalResult<FramedInterpreter<'_, 'p>> {
        self.env.push_frame(frame)?;
        Ok(FramedInterpreter { interpreter: self })
    }
}
