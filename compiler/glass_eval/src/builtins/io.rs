//! Classes `I` and `O`: standard streams, files and program arguments.
//!
//! At end of input the character and line readers push an empty string.
//! File operations on a closed handle fail with an `Io` error.

use crate::files::{at_eof, read_byte, read_line, InputFile, OutputFile};
use crate::value::format_number;
use crate::{arguments_exhausted, EvalResult, Interpreter, Value, ValueStack};

// Standard input

/// `→ c`
pub(super) fn input_char(interp: &mut Interpreter<'_>) -> EvalResult {
    let byte = interp.input.with_reader(read_byte)?;
    interp.stack.push(Value::Str(byte.into_iter().collect()));
    Ok(())
}

/// `→ line` including its `\n`
pub(super) fn input_line(interp: &mut Interpreter<'_>) -> EvalResult {
    let line = interp.input.with_reader(read_line)?;
    interp.stack.push(Value::Str(line));
    Ok(())
}

/// `→ 1` at end of input, else `0`
pub(super) fn input_eof(interp: &mut Interpreter<'_>) -> EvalResult {
    let eof = interp.input.with_reader(at_eof)?;
    interp.stack.push(Value::from(eof));
    Ok(())
}

// Program arguments

/// `→ arg`, consuming arguments in order
pub(super) fn next_argument(interp: &mut Interpreter<'_>) -> EvalResult {
    let arg = interp
        .args
        .get(interp.next_arg)
        .cloned()
        .ok_or_else(|| arguments_exhausted(interp.args.len()))?;
    interp.next_arg += 1;
    interp.stack.push(Value::Str(arg));
    Ok(())
}

/// `→ count`
#[expect(
    clippy::cast_precision_loss,
    reason = "argument counts stay far below 2^52"
)]
pub(super) fn argument_count(interp: &mut Interpreter<'_>) -> EvalResult {
    let count = interp.args.len() as f64;
    interp.stack.push(Value::Number(count));
    Ok(())
}

// Input files

/// `path` → `file`, closed if the path cannot be opened
pub(super) fn open_input(stack: &mut ValueStack) -> EvalResult {
    let file = InputFile::open(stack.peek(0)?.as_str()?);
    stack.discard(1);
    stack.push(Value::InputFile(file));
    Ok(())
}

/// `file` → ``
pub(super) fn close_input(stack: &mut ValueStack) -> EvalResult {
    stack.peek(0)?.as_input_file()?.close();
    stack.discard(1);
    Ok(())
}

/// `file` → `1` if open, else `0`
pub(super) fn input_is_open(stack: &mut ValueStack) -> EvalResult {
    let open = stack.peek(0)?.as_input_file()?.is_open();
    stack.discard(1);
    stack.push(Value::from(open));
    Ok(())
}

/// `file` → `c`
pub(super) fn file_char(stack: &mut ValueStack) -> EvalResult {
    let byte = stack.peek(0)?.as_input_file()?.with_reader(read_byte)?;
    stack.discard(1);
    stack.push(Value::Str(byte.into_iter().collect()));
    Ok(())
}

/// `file` → `line`
pub(super) fn file_line(stack: &mut ValueStack) -> EvalResult {
    let line = stack.peek(0)?.as_input_file()?.with_reader(read_line)?;
    stack.discard(1);
    stack.push(Value::Str(line));
    Ok(())
}

/// `file` → `1` at end of file, else `0`
pub(super) fn file_eof(stack: &mut ValueStack) -> EvalResult {
    let eof = stack.peek(0)?.as_input_file()?.with_reader(at_eof)?;
    stack.discard(1);
    stack.push(Value::from(eof));
    Ok(())
}

// Standard output

/// `s` → ``
pub(super) fn output_str(interp: &mut Interpreter<'_>) -> EvalResult {
    interp.print_handler.write(interp.stack.peek(0)?.as_str()?)?;
    interp.stack.discard(1);
    Ok(())
}

/// `n` → ``
pub(super) fn output_num(interp: &mut Interpreter<'_>) -> EvalResult {
    let text = format_number(interp.stack.peek(0)?.as_number()?);
    interp.print_handler.write(text.as_bytes())?;
    interp.stack.discard(1);
    Ok(())
}

// Output files

/// `path` → `file`, closed if the path cannot be created
pub(super) fn open_output(stack: &mut ValueStack) -> EvalResult {
    let file = OutputFile::create(stack.peek(0)?.as_str()?);
    stack.discard(1);
    stack.push(Value::OutputFile(file));
    Ok(())
}

/// `file` → ``
pub(super) fn close_output(stack: &mut ValueStack) -> EvalResult {
    stack.peek(0)?.as_output_file()?.close()?;
    stack.discard(1);
    Ok(())
}

/// `file` → `1` if open, else `0`
pub(super) fn output_is_open(stack: &mut ValueStack) -> EvalResult {
    let open = stack.peek(0)?.as_output_file()?.is_open();
    stack.discard(1);
    stack.push(Value::from(open));
    Ok(())
}

/// `s file` → ``
pub(super) fn file_write_str(stack: &mut ValueStack) -> EvalResult {
    stack.require(2)?;
    let file = stack.peek(0)?.as_output_file()?;
    file.write(stack.peek(1)?.as_str()?)?;
    stack.discard(2);
    Ok(())
}

/// `n file` → ``
pub(super) fn file_write_num(stack: &mut ValueStack) -> EvalResult {
    stack.require(2)?;
    let file = stack.peek(0)?.as_output_file()?;
    let text = format_number(stack.peek(1)?.as_number()?);
    file.write(text.as_bytes())?;
    stack.discard(2);
    Ok(())
}
