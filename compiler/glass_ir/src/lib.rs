//! Glass IR - program representation shared by the loader and the interpreter.
//!
//! A Glass program reaches the interpreter as a [`ClassTable`]: an immutable
//! map from class name to [`GlassClass`], with inheritance already flattened
//! into each class's method table. Methods are [`GlassFunction`]s, flat
//! sequences of [`Command`]s, each tagged with the [`SourceLoc`] it was
//! parsed from.
//!
//! # Contents
//!
//! - [`Name`]: cheap-to-clone identifier, plus [`ScopeKind`] derived from it
//! - [`SourceLoc`]: file/line/column for diagnostics
//! - [`Command`], [`Instruction`]: the bytecode
//! - [`Builtin`]: native primitive ids and the builtin class table
//! - [`GlassFunction`], [`GlassClass`], [`ClassTable`]

mod builtin;
mod class;
mod command;
mod location;
mod name;

pub use builtin::{builtin_classes, Builtin, BuiltinInfo, BUILTIN_FILE};
pub use class::{ClassTable, GlassClass, GlassFunction};
pub use command::{Command, Instruction};
pub use location::SourceLoc;
pub use name::{Name, ScopeKind};

/// Name of the class the interpreter instantiates at startup.
pub const MAIN_CLASS: &str = "M";

/// Name of the method invoked on the startup instance.
pub const MAIN_METHOD: &str = "m";

/// Zero-argument method invoked right after an instance is allocated.
pub const CONSTRUCTOR: &str = "c__";
