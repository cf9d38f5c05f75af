//! Runtime errors and the frame trace collected while they unwind.
//!
//! Every runtime error is fatal to the running program. As an error leaves
//! each active method, that method's current command location is appended
//! to [`EvalError::trace`], so the trace reads innermost call first.

use std::fmt;

use glass_ir::{Name, SourceLoc};

/// Result of evaluation.
pub type EvalResult<T = ()> = Result<T, EvalError>;

/// Structured error category.
#[derive(Clone, Debug, PartialEq)]
pub enum EvalErrorKind {
    /// An opcode or builtin needs more operands than the stack holds.
    StackUnderflow { needed: usize, available: usize },
    /// An operand is present but of the wrong variant.
    TypeMismatch {
        expected: &'static str,
        got: &'static str,
    },
    /// Scope lookup found nothing.
    UndefinedName { name: String },
    /// Method lookup on a variable that does not hold an instance.
    NotAnInstance { name: String, got: String },
    NoSuchMethod { class: String, method: String },
    /// String index, split point or replacement position out of bounds.
    IndexOutOfRange { index: f64, len: usize },
    UnknownClass { name: String },
    /// No class `M`, or `M` has no method `m`.
    MissingEntryPoint { what: String },
    /// The next-argument builtin ran past the last argument.
    ArgumentsExhausted { count: usize },
    /// Configured call-depth limit exceeded.
    RecursionLimit { depth: usize },
    /// Host stream or file failure, or use of a closed file handle.
    Io { message: String },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StackUnderflow { needed, available } => write!(
                f,
                "stack underflow: needed {needed} value(s), found {available}"
            ),
            Self::TypeMismatch { expected, got } => {
                write!(f, "type mismatch: expected {expected}, got {got}")
            }
            Self::UndefinedName { name } => write!(f, "undefined name '{name}'"),
            Self::NotAnInstance { name, got } => {
                write!(f, "'{name}' is not an instance (holds {got})")
            }
            Self::NoSuchMethod { class, method } => {
                write!(f, "class '{class}' has no method '{method}'")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(
                    f,
                    "index {} out of range for string of length {len}",
                    crate::format_number(*index)
                )
            }
            Self::UnknownClass { name } => write!(f, "unknown class '{name}'"),
            Self::MissingEntryPoint { what } => write!(f, "missing entry point: {what}"),
            Self::ArgumentsExhausted { count } => {
                write!(f, "no program argument left (all {count} consumed)")
            }
            Self::RecursionLimit { depth } => {
                write!(f, "maximum call depth of {depth} exceeded")
            }
            Self::Io { message } => write!(f, "i/o error: {message}"),
        }
    }
}

/// One unwound call: the method and the command it was executing.
#[derive(Clone, Debug, PartialEq)]
pub struct TraceFrame {
    pub class: Name,
    pub method: Name,
    pub loc: SourceLoc,
}

impl fmt::Display for TraceFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at {} in {}.{}", self.loc, self.class, self.method)
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Human-readable message; equals `kind.to_string()`.
    pub message: String,
    /// Unwound frames, innermost first.
    pub trace: Vec<TraceFrame>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError {
            kind,
            message,
            trace: Vec::new(),
        }
    }

    /// Record that the error left `frame`.
    #[must_use]
    pub fn with_frame(mut self, frame: TraceFrame) -> Self {
        self.trace.push(frame);
        self
    }

    /// The diagnostic printed by the driver: the message, then one line per
    /// unwound frame.
    pub fn report(&self) -> String {
        use std::fmt::Write;

        let mut out = format!("error: {}\n", self.message);
        for frame in &self.trace {
            let _ = writeln!(out, "  {frame}");
        }
        out
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}

// Stack errors

#[cold]
pub fn stack_underflow(needed: usize, available: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StackUnderflow { needed, available })
}

#[cold]
pub fn type_mismatch(expected: &'static str, got: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch { expected, got })
}

// Name and dispatch errors

#[cold]
pub fn undefined_name(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedName {
        name: name.to_string(),
    })
}

#[cold]
pub fn not_an_instance(name: &str, got: String) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotAnInstance {
        name: name.to_string(),
        got,
    })
}

#[cold]
pub fn no_such_method(class: &str, method: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NoSuchMethod {
        class: class.to_string(),
        method: method.to_string(),
    })
}

#[cold]
pub fn unknown_class(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownClass {
        name: name.to_string(),
    })
}

#[cold]
pub fn missing_entry_point(what: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MissingEntryPoint { what: what.into() })
}

#[cold]
pub fn recursion_limit_exceeded(depth: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::RecursionLimit { depth })
}

// Builtin errors

#[cold]
pub fn index_out_of_range(index: f64, len: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IndexOutOfRange { index, len })
}

#[cold]
pub fn arguments_exhausted(count: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArgumentsExhausted { count })
}

#[cold]
pub fn io_error(message: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Io {
        message: message.into(),
    })
}

impl From<std::io::Error> for EvalError {
    #[cold]
    fn from(err: std::io::Error) -> Self {
        io_error(err.to_string())
    }
}

#[cfg(test)]
mod tests;
