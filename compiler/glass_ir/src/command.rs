//! The Glass bytecode.

use std::fmt;

use crate::{Builtin, Name, SourceLoc};

/// One opcode of a method body.
///
/// Loop targets are absolute indices into the owning function's command list,
/// patched by the loader when the matching `\` is seen. The interpreter trusts
/// them.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// `=`: bind the name on top to the value beneath it.
    AssignVal,
    /// `$`: bind the name on top to the running instance.
    AssignSelf,
    /// `(n)` or a digit: copy the value `n` positions below the top.
    Duplicate(usize),
    /// `?`: call the function value on top.
    ExecuteFunc,
    /// `.`: look up a method on the instance held by a variable.
    GetFunc,
    /// `*`: replace the name on top with the variable's value.
    GetVal,
    /// `/name`: skip past the loop end when `name` is falsy.
    LoopBegin { name: Name, end: usize },
    /// `\`: jump back to the loop begin while `name` is truthy.
    LoopEnd { name: Name, begin: usize },
    /// `!`: instantiate a class into a variable.
    NewInst,
    /// `,`: discard the top value.
    PopStack,
    PushName(Name),
    PushNum(f64),
    PushStr(Vec<u8>),
    /// `^`: leave the current method.
    Return,
    /// Native primitive; only appears in the builtin classes.
    Builtin(Builtin),
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::AssignVal => f.write_str("="),
            Command::AssignSelf => f.write_str("$"),
            Command::Duplicate(n) => write!(f, "({n})"),
            Command::ExecuteFunc => f.write_str("?"),
            Command::GetFunc => f.write_str("."),
            Command::GetVal => f.write_str("*"),
            Command::LoopBegin { name, .. } => write!(f, "/({name})"),
            Command::LoopEnd { .. } => f.write_str("\\"),
            Command::NewInst => f.write_str("!"),
            Command::PopStack => f.write_str(","),
            Command::PushName(name) => write!(f, "({name})"),
            Command::PushNum(n) => write!(f, "<{n}>"),
            Command::PushStr(s) => write!(f, "{:?}", String::from_utf8_lossy(s)),
            Command::Return => f.write_str("^"),
            Command::Builtin(b) => write!(f, "<builtin {}>", b.info().qualified_name()),
        }
    }
}

/// A command together with where it was written.
#[derive(Clone, Debug, PartialEq)]
pub struct Instruction {
    pub command: Command,
    pub loc: SourceLoc,
}

impl Instruction {
    pub fn new(command: Command, loc: SourceLoc) -> Self {
        Instruction { command, loc }
    }
}
