//! Runtime values.

use std::fmt::Write;

use glass_ir::Name;

use crate::files::{InputFile, OutputFile};
use crate::heap::{Handle, Heap, Trace, Tracer};
use crate::{type_mismatch, EvalResult};

/// A value on the stack or in a variable.
///
/// `Instance` and `Function` hold heap handles; copying them copies the
/// handle. Liveness is decided by the collector alone.
#[derive(Clone, Debug)]
pub enum Value {
    Number(f64),
    Str(Vec<u8>),
    /// An atom naming a variable, method or class.
    Name(Name),
    Instance(Handle),
    /// A method bound to an instance.
    Function { instance: Handle, method: Name },
    InputFile(InputFile),
    OutputFile(OutputFile),
}

impl Value {
    /// Short variant name used in type errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Name(_) => "name",
            Value::Instance(_) => "instance",
            Value::Function { .. } => "function",
            Value::InputFile(_) => "input file",
            Value::OutputFile(_) => "output file",
        }
    }

    /// Loop condition test: nonzero numbers and non-empty strings are true,
    /// everything else is false.
    pub fn truthy(&self) -> bool {
        match self {
            Value::Number(n) => *n != 0.0,
            Value::Str(s) => !s.is_empty(),
            _ => false,
        }
    }

    pub fn as_number(&self) -> EvalResult<f64> {
        match self {
            Value::Number(n) => Ok(*n),
            other => Err(type_mismatch("number", other.type_name())),
        }
    }

    pub fn as_str(&self) -> EvalResult<&[u8]> {
        match self {
            Value::Str(s) => Ok(s),
            other => Err(type_mismatch("string", other.type_name())),
        }
    }

    pub fn as_name(&self) -> EvalResult<&Name> {
        match self {
            Value::Name(n) => Ok(n),
            other => Err(type_mismatch("name", other.type_name())),
        }
    }

    pub fn as_function(&self) -> EvalResult<(Handle, &Name)> {
        match self {
            Value::Function { instance, method } => Ok((*instance, method)),
            other => Err(type_mismatch("function", other.type_name())),
        }
    }

    pub fn as_input_file(&self) -> EvalResult<&InputFile> {
        match self {
            Value::InputFile(file) => Ok(file),
            other => Err(type_mismatch("input file", other.type_name())),
        }
    }

    pub fn as_output_file(&self) -> EvalResult<&OutputFile> {
        match self {
            Value::OutputFile(file) => Ok(file),
            other => Err(type_mismatch("output file", other.type_name())),
        }
    }

    /// Human-readable form for diagnostics.
    ///
    /// ```text
    /// <3>   "a\n"   (name)   {(Class)}   {(Class)[(method)]}   <input file>
    /// ```
    pub fn render(&self, heap: &Heap<'_>) -> String {
        let class_of = |handle: Handle| {
            heap.get(handle)
                .map_or_else(|| "?".to_string(), |inst| inst.class().name().to_string())
        };
        match self {
            Value::Number(n) => format!("<{}>", format_number(*n)),
            Value::Str(s) => escape_bytes(s),
            Value::Name(name) => format!("({name})"),
            Value::Instance(handle) => format!("{{({})}}", class_of(*handle)),
            Value::Function { instance, method } => {
                format!("{{({})[({method})]}}", class_of(*instance))
            }
            Value::InputFile(_) => "<input file>".to_string(),
            Value::OutputFile(_) => "<output file>".to_string(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Name(a), Value::Name(b)) => a == b,
            (Value::Instance(a), Value::Instance(b)) => a == b,
            (
                Value::Function {
                    instance: a,
                    method: ma,
                },
                Value::Function {
                    instance: b,
                    method: mb,
                },
            ) => a == b && ma == mb,
            (Value::InputFile(a), Value::InputFile(b)) => a.same_handle(b),
            (Value::OutputFile(a), Value::OutputFile(b)) => a.same_handle(b),
            _ => false,
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Number(if b { 1.0 } else { 0.0 })
    }
}

impl From<Vec<u8>> for Value {
    fn from(s: Vec<u8>) -> Self {
        Value::Str(s)
    }
}

impl From<Name> for Value {
    fn from(name: Name) -> Self {
        Value::Name(name)
    }
}

impl Trace for Value {
    fn trace(&self, tracer: &mut dyn Tracer) {
        match self {
            Value::Instance(handle) | Value::Function { instance: handle, .. } => {
                tracer.mark(*handle);
            }
            _ => {}
        }
    }
}

/// Text written by the number output builtins.
///
/// Integral values print without a fractional part; negative zero prints
/// as `0`.
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        "0".to_string()
    } else {
        n.to_string()
    }
}

fn escape_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() + 2);
    out.push('"');
    for &b in bytes {
        match b {
            b'"' => out.push_str("\\\""),
            b'\\' => out.push_str("\\\\"),
            b'\n' => out.push_str("\\n"),
            b'\t' => out.push_str("\\t"),
            b'\r' => out.push_str("\\r"),
            0x20..=0x7e => out.push(char::from(b)),
            _ => {
                let _ = write!(out, "\\x{b:02x}");
            }
        }
    }
    out.push('"');
    out
}
