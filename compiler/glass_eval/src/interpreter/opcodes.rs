//! Per-command semantics.
//!
//! Operands are read with `peek` and only discarded once every check has
//! passed. Stack pictures list the top of the stack rightmost.

use glass_ir::{Command, Name};

use super::{Flow, Interpreter};
use crate::heap::Handle;
use crate::{builtins, no_such_method, not_an_instance, unknown_class, EvalResult, Value};

impl<'p> Interpreter<'p> {
    pub(super) fn step(&mut self, command: &Command) -> EvalResult<Flow> {
        match command {
            Command::PushName(name) => self.stack.push(Value::Name(name.clone())),
            Command::PushNum(n) => self.stack.push(Value::Number(*n)),
            Command::PushStr(s) => self.stack.push(Value::Str(s.clone())),
            Command::Duplicate(depth) => {
                let value = self.stack.peek(*depth)?.clone();
                self.stack.push(value);
            }
            Command::GetVal => self.get_val()?,
            Command::AssignVal => self.assign_val()?,
            Command::AssignSelf => self.assign_self()?,
            Command::NewInst => self.new_inst()?,
            Command::GetFunc => self.get_func()?,
            Command::ExecuteFunc => self.execute_func()?,
            Command::LoopBegin { name, end } => {
                if !self.truthy(name)? {
                    return Ok(Flow::Jump(*end));
                }
            }
            Command::LoopEnd { name, begin } => {
                if self.truthy(name)? {
                    return Ok(Flow::Jump(*begin));
                }
            }
            Command::PopStack => {
                self.stack.pop()?;
            }
            Command::Return => return Ok(Flow::Return),
            Command::Builtin(builtin) => builtins::call(self, *builtin)?,
        }
        Ok(Flow::Next)
    }

    fn truthy(&self, name: &Name) -> EvalResult<bool> {
        Ok(self.env.lookup(name, &self.heap)?.truthy())
    }

    /// `… n` → `… value-of-n`
    fn get_val(&mut self) -> EvalResult {
        let name = self.stack.peek(0)?.as_name()?;
        let value = self.env.lookup(name, &self.heap)?;
        self.stack.discard(1);
        self.stack.push(value);
        Ok(())
    }

    /// `… v n` → `…`, binding `n := v`
    fn assign_val(&mut self) -> EvalResult {
        self.stack.require(2)?;
        let name = self.stack.peek(0)?.as_name()?.clone();
        let value = self.stack.peek(1)?.clone();
        self.env.bind(name, value, &mut self.heap)?;
        self.stack.discard(2);
        Ok(())
    }

    /// `… n` → `…`, binding `n` to the running instance
    fn assign_self(&mut self) -> EvalResult {
        let name = self.stack.peek(0)?.as_name()?.clone();
        let this = self.current_instance(&name)?;
        self.env.bind(name, Value::Instance(this), &mut self.heap)?;
        self.stack.discard(1);
        Ok(())
    }

    /// `… var class` → `…`, binding `var` to a new instance of `class`
    /// once its constructor has run
    fn new_inst(&mut self) -> EvalResult {
        self.stack.require(2)?;
        let class_name = self.stack.peek(0)?.as_name()?;
        let var = self.stack.peek(1)?.as_name()?.clone();
        let classes = self.classes;
        let class = classes
            .get(class_name.as_str())
            .ok_or_else(|| unknown_class(class_name.as_str()))?;
        self.stack.discard(2);

        let instance = self.instantiate(class)?;
        self.env.bind(var, Value::Instance(instance), &mut self.heap)
    }

    /// `… var method` → `… function`
    fn get_func(&mut self) -> EvalResult {
        self.stack.require(2)?;
        let method = self.stack.peek(0)?.as_name()?;
        let var = self.stack.peek(1)?.as_name()?;
        let handle = match self.env.lookup(var, &self.heap)? {
            Value::Instance(handle) => handle,
            other => return Err(not_an_instance(var.as_str(), other.render(&self.heap))),
        };
        let class = self
            .heap
            .get(handle)
            .map(crate::heap::Instance::class)
            .ok_or_else(|| not_an_instance(var.as_str(), "a collected instance".to_string()))?;
        if !class.has_method(method.as_str()) {
            return Err(no_such_method(class.name().as_str(), method.as_str()));
        }
        let function = Value::Function {
            instance: handle,
            method: method.clone(),
        };
        self.stack.discard(2);
        self.stack.push(function);
        Ok(())
    }

    /// `… function` → whatever the called method leaves
    fn execute_func(&mut self) -> EvalResult {
        let (instance, method) = self.stack.peek(0)?.as_function()?;
        let method = method.clone();
        self.stack.discard(1);
        self.call_method(instance, &method)
    }

    fn current_instance(&self, name: &Name) -> EvalResult<Handle> {
        self.env
            .current()
            .map(crate::environment::Frame::this)
            .ok_or_else(|| crate::undefined_name(name.as_str()))
    }
}
