//! The builtin library behind classes `A`, `I`, `O`, `S` and `V`.
//!
//! Each builtin pops a fixed number of operands and pushes its results.
//! Operands are inspected in place first; the stack is only changed once
//! every check and the operation itself have succeeded.

#![allow(
    clippy::unnecessary_wraps,
    reason = "every builtin shares one fallible signature"
)]

mod io;
mod math;
mod string;
mod vars;

use glass_ir::Builtin;

use crate::{EvalResult, Interpreter};

/// Run one builtin against the interpreter's shared stack.
#[allow(clippy::float_cmp, reason = "number equality is IEEE equality")]
pub(crate) fn call(interp: &mut Interpreter<'_>, builtin: Builtin) -> EvalResult {
    tracing::trace!(builtin = %builtin.info().qualified_name(), "builtin");
    let stack = &mut interp.stack;
    match builtin {
        Builtin::MathAdd => math::binary(stack, |x, y| x + y),
        Builtin::MathSubtract => math::binary(stack, |x, y| x - y),
        Builtin::MathMultiply => math::binary(stack, |x, y| x * y),
        Builtin::MathDivide => math::binary(stack, |x, y| x / y),
        Builtin::MathModulo => math::binary(stack, |x, y| x % y),
        Builtin::MathFloor => math::floor(stack),
        Builtin::MathEqual => math::compare(stack, |x, y| x == y),
        Builtin::MathNotEqual => math::compare(stack, |x, y| x != y),
        Builtin::MathLessThan => math::compare(stack, |x, y| x < y),
        Builtin::MathLessOrEqual => math::compare(stack, |x, y| x <= y),
        Builtin::MathGreaterThan => math::compare(stack, |x, y| x > y),
        Builtin::MathGreaterOrEqual => math::compare(stack, |x, y| x >= y),

        Builtin::StrAppend => string::append(stack),
        Builtin::StrEqual => string::equal(stack),
        Builtin::StrIndex => string::index(stack),
        Builtin::StrLength => string::length(stack),
        Builtin::StrNumToStr => string::num_to_str(stack),
        Builtin::StrStrToNum => string::str_to_num(stack),
        Builtin::StrReplace => string::replace(stack),
        Builtin::StrSplit => string::split(stack),

        Builtin::InputChar => io::input_char(interp),
        Builtin::InputLine => io::input_line(interp),
        Builtin::InputEof => io::input_eof(interp),
        Builtin::InputArgument => io::next_argument(interp),
        Builtin::InputArgCount => io::argument_count(interp),
        Builtin::InputOpenFile => io::open_input(stack),
        Builtin::InputCloseFile => io::close_input(stack),
        Builtin::InputFileIsOpen => io::input_is_open(stack),
        Builtin::InputCharFromFile => io::file_char(stack),
        Builtin::InputLineFromFile => io::file_line(stack),
        Builtin::InputEofFile => io::file_eof(stack),
        Builtin::OutputStr => io::output_str(interp),
        Builtin::OutputNum => io::output_num(interp),
        Builtin::OutputOpenFile => io::open_output(stack),
        Builtin::OutputCloseFile => io::close_output(stack),
        Builtin::OutputFileIsOpen => io::output_is_open(stack),
        Builtin::OutputStrFile => io::file_write_str(stack),
        Builtin::OutputNumFile => io::file_write_num(stack),

        Builtin::VarNew => vars::fresh_name(interp),
        Builtin::VarDelete => vars::delete(interp),
    }
}
