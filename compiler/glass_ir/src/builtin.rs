//! Native primitives and the builtin classes that expose them.
//!
//! Every builtin is reachable as a one-command method of one of the classes
//! `A` (arithmetic), `I` (input), `O` (output), `S` (strings) and
//! `V` (variable helpers). A program instantiates the class like any other
//! (`(_a)A!`) and calls the method through `.` and `?`.

use crate::{Command, GlassClass, GlassFunction, Instruction, Name, SourceLoc};

/// File name reported for locations inside builtin classes.
pub const BUILTIN_FILE: &str = "<builtin>";

/// Builtin dispatch id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Builtin {
    InputArgument,
    InputArgCount,
    InputChar,
    InputCharFromFile,
    InputEof,
    InputEofFile,
    InputOpenFile,
    InputCloseFile,
    InputFileIsOpen,
    InputLine,
    InputLineFromFile,
    MathAdd,
    MathDivide,
    MathEqual,
    MathFloor,
    MathGreaterOrEqual,
    MathGreaterThan,
    MathLessOrEqual,
    MathLessThan,
    MathMultiply,
    MathModulo,
    MathNotEqual,
    MathSubtract,
    OutputOpenFile,
    OutputCloseFile,
    OutputFileIsOpen,
    OutputStr,
    OutputStrFile,
    OutputNum,
    OutputNumFile,
    StrAppend,
    StrEqual,
    StrSplit,
    StrIndex,
    StrLength,
    StrNumToStr,
    StrReplace,
    StrStrToNum,
    VarDelete,
    VarNew,
}

/// Static description of a builtin: where it lives and its stack effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuiltinInfo {
    /// Builtin class exposing it.
    pub class: &'static str,
    /// Method name inside that class.
    pub method: &'static str,
    /// Operands popped.
    pub arity: usize,
    /// Values pushed on success.
    pub results: usize,
    /// Stack effect, top of stack rightmost.
    pub summary: &'static str,
}

impl BuiltinInfo {
    /// `Class.method` as written in a program.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.class, self.method)
    }
}

const fn info(
    class: &'static str,
    method: &'static str,
    arity: usize,
    results: usize,
    summary: &'static str,
) -> BuiltinInfo {
    BuiltinInfo {
        class,
        method,
        arity,
        results,
        summary,
    }
}

impl Builtin {
    /// Every builtin, grouped by class.
    pub const ALL: [Builtin; 40] = [
        Builtin::MathAdd,
        Builtin::MathDivide,
        Builtin::MathEqual,
        Builtin::MathFloor,
        Builtin::MathGreaterOrEqual,
        Builtin::MathGreaterThan,
        Builtin::MathLessOrEqual,
        Builtin::MathLessThan,
        Builtin::MathMultiply,
        Builtin::MathModulo,
        Builtin::MathNotEqual,
        Builtin::MathSubtract,
        Builtin::InputArgument,
        Builtin::InputArgCount,
        Builtin::InputChar,
        Builtin::InputCharFromFile,
        Builtin::InputEof,
        Builtin::InputEofFile,
        Builtin::InputOpenFile,
        Builtin::InputCloseFile,
        Builtin::InputFileIsOpen,
        Builtin::InputLine,
        Builtin::InputLineFromFile,
        Builtin::OutputOpenFile,
        Builtin::OutputCloseFile,
        Builtin::OutputFileIsOpen,
        Builtin::OutputStr,
        Builtin::OutputStrFile,
        Builtin::OutputNum,
        Builtin::OutputNumFile,
        Builtin::StrAppend,
        Builtin::StrEqual,
        Builtin::StrSplit,
        Builtin::StrIndex,
        Builtin::StrLength,
        Builtin::StrNumToStr,
        Builtin::StrReplace,
        Builtin::StrStrToNum,
        Builtin::VarDelete,
        Builtin::VarNew,
    ];

    /// Names of the builtin classes, in table order.
    pub const CLASSES: [&'static str; 5] = ["A", "I", "O", "S", "V"];

    /// Class, method name and stack effect of this builtin.
    pub const fn info(self) -> BuiltinInfo {
        match self {
            Builtin::MathAdd => info("A", "a", 2, 1, "x y -> x+y"),
            Builtin::MathDivide => info("A", "d", 2, 1, "x y -> x/y"),
            Builtin::MathEqual => info("A", "e", 2, 1, "x y -> x==y"),
            Builtin::MathFloor => info("A", "f", 1, 1, "x -> floor(x)"),
            Builtin::MathGreaterOrEqual => info("A", "ge", 2, 1, "x y -> x>=y"),
            Builtin::MathGreaterThan => info("A", "gt", 2, 1, "x y -> x>y"),
            Builtin::MathLessOrEqual => info("A", "le", 2, 1, "x y -> x<=y"),
            Builtin::MathLessThan => info("A", "lt", 2, 1, "x y -> x<y"),
            Builtin::MathMultiply => info("A", "m", 2, 1, "x y -> x*y"),
            Builtin::MathModulo => info("A", "mod", 2, 1, "x y -> x mod y"),
            Builtin::MathNotEqual => info("A", "ne", 2, 1, "x y -> x!=y"),
            Builtin::MathSubtract => info("A", "s", 2, 1, "x y -> x-y"),
            Builtin::InputArgument => info("I", "a", 0, 1, "-> next program argument"),
            Builtin::InputArgCount => info("I", "ac", 0, 1, "-> argument count"),
            Builtin::InputChar => info("I", "c", 0, 1, "-> char from stdin"),
            Builtin::InputCharFromFile => info("I", "cf", 1, 1, "file -> char"),
            Builtin::InputEof => info("I", "e", 0, 1, "-> stdin at eof"),
            Builtin::InputEofFile => info("I", "ef", 1, 1, "file -> file at eof"),
            Builtin::InputOpenFile => info("I", "f", 1, 1, "path -> input file"),
            Builtin::InputCloseFile => info("I", "fc", 1, 0, "file ->"),
            Builtin::InputFileIsOpen => info("I", "fo", 1, 1, "file -> is open"),
            Builtin::InputLine => info("I", "l", 0, 1, "-> line from stdin"),
            Builtin::InputLineFromFile => info("I", "lf", 1, 1, "file -> line"),
            Builtin::OutputOpenFile => info("O", "f", 1, 1, "path -> output file"),
            Builtin::OutputCloseFile => info("O", "fc", 1, 0, "file ->"),
            Builtin::OutputFileIsOpen => info("O", "fo", 1, 1, "file -> is open"),
            Builtin::OutputStr => info("O", "o", 1, 0, "s ->"),
            Builtin::OutputStrFile => info("O", "of", 2, 0, "s file ->"),
            Builtin::OutputNum => info("O", "on", 1, 0, "n ->"),
            Builtin::OutputNumFile => info("O", "onf", 2, 0, "n file ->"),
            Builtin::StrAppend => info("S", "a", 2, 1, "a b -> ab"),
            Builtin::StrEqual => info("S", "e", 2, 1, "a b -> a==b"),
            Builtin::StrSplit => info("S", "d", 2, 2, "s n -> s[..n] s[n..]"),
            Builtin::StrIndex => info("S", "i", 2, 1, "s n -> s[n]"),
            Builtin::StrLength => info("S", "l", 1, 1, "s -> len(s)"),
            Builtin::StrNumToStr => info("S", "ns", 1, 1, "n -> char with code n"),
            Builtin::StrReplace => info("S", "si", 3, 1, "s n c -> s with s[n]=c"),
            Builtin::StrStrToNum => info("S", "sn", 1, 1, "s -> code of s[0]"),
            Builtin::VarDelete => info("V", "d", 1, 0, "name ->"),
            Builtin::VarNew => info("V", "n", 0, 1, "-> fresh local name"),
        }
    }
}

/// The builtin classes, one single-command method per builtin.
pub fn builtin_classes() -> Vec<GlassClass> {
    let file = Name::new(BUILTIN_FILE);
    let loc = SourceLoc::new(file, 0, 0);

    Builtin::CLASSES
        .iter()
        .map(|&class_name| {
            let methods = Builtin::ALL
                .iter()
                .filter(|b| b.info().class == class_name)
                .map(|&b| {
                    GlassFunction::new(
                        Name::new(b.info().method),
                        vec![Instruction::new(Command::Builtin(b), loc.clone())],
                        loc.clone(),
                    )
                });
            GlassClass::new(Name::new(class_name), methods, loc.clone())
        })
        .collect()
}
