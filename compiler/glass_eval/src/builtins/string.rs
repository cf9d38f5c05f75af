//! Class `S`: byte strings.
//!
//! Positions are numbers truncated toward zero. Negative, non-finite or
//! past-the-end positions are `IndexOutOfRange` errors; a split may also happen exactly
//! at the end.

use crate::{index_out_of_range, EvalResult, Value, ValueStack};

#[expect(
    clippy::cast_possible_truncation,
    reason = "positions are truncated toward zero; out-of-range values saturate and fail the bounds check"
)]
fn position(n: f64, len: usize, allow_end: bool) -> EvalResult<usize> {
    let index = n.trunc();
    if !index.is_finite() {
        return Err(index_out_of_range(index, len));
    }
    usize::try_from(index as i64)
        .ok()
        .filter(|&i| i < len || (allow_end && i == len))
        .ok_or_else(|| index_out_of_range(index, len))
}

#[expect(
    clippy::cast_precision_loss,
    reason = "string lengths stay far below 2^52"
)]
fn length_value(len: usize) -> Value {
    Value::Number(len as f64)
}

/// `a b` → `a ++ b`
pub(super) fn append(stack: &mut ValueStack) -> EvalResult {
    stack.require(2)?;
    let b = stack.peek(0)?.as_str()?;
    let a = stack.peek(1)?.as_str()?;
    let joined = [a, b].concat();
    stack.discard(2);
    stack.push(Value::Str(joined));
    Ok(())
}

/// `a b` → `1` if byte-equal, else `0`
pub(super) fn equal(stack: &mut ValueStack) -> EvalResult {
    stack.require(2)?;
    let b = stack.peek(0)?.as_str()?;
    let a = stack.peek(1)?.as_str()?;
    let same = a == b;
    stack.discard(2);
    stack.push(Value::from(same));
    Ok(())
}

/// `s n` → `s[n]` as a one-byte string
pub(super) fn index(stack: &mut ValueStack) -> EvalResult {
    stack.require(2)?;
    let n = stack.peek(0)?.as_number()?;
    let s = stack.peek(1)?.as_str()?;
    let byte = s[position(n, s.len(), false)?];
    stack.discard(2);
    stack.push(Value::Str(vec![byte]));
    Ok(())
}

/// `s` → `len(s)`
pub(super) fn length(stack: &mut ValueStack) -> EvalResult {
    let len = stack.peek(0)?.as_str()?.len();
    stack.discard(1);
    stack.push(length_value(len));
    Ok(())
}

/// `n` → one-byte string with code `n` (taken modulo 256)
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "character codes wrap to a byte"
)]
pub(super) fn num_to_str(stack: &mut ValueStack) -> EvalResult {
    let n = stack.peek(0)?.as_number()?;
    let byte = (n.trunc() as i64).rem_euclid(256) as u8;
    stack.discard(1);
    stack.push(Value::Str(vec![byte]));
    Ok(())
}

/// `s` → code of `s[0]`
pub(super) fn str_to_num(stack: &mut ValueStack) -> EvalResult {
    let s = stack.peek(0)?.as_str()?;
    let byte = *s.first().ok_or_else(|| index_out_of_range(0.0, 0))?;
    stack.discard(1);
    stack.push(Value::Number(f64::from(byte)));
    Ok(())
}

/// `s n c` → `s` with `s[n] := c[0]`
pub(super) fn replace(stack: &mut ValueStack) -> EvalResult {
    stack.require(3)?;
    let c = stack.peek(0)?.as_str()?;
    let n = stack.peek(1)?.as_number()?;
    let s = stack.peek(2)?.as_str()?;
    let byte = *c.first().ok_or_else(|| index_out_of_range(0.0, 0))?;
    let at = position(n, s.len(), false)?;
    let mut replaced = s.to_vec();
    replaced[at] = byte;
    stack.discard(3);
    stack.push(Value::Str(replaced));
    Ok(())
}

/// `s n` → `s[..n] s[n..]`
pub(super) fn split(stack: &mut ValueStack) -> EvalResult {
    stack.require(2)?;
    let n = stack.peek(0)?.as_number()?;
    let s = stack.peek(1)?.as_str()?;
    let at = position(n, s.len(), true)?;
    let (head, tail) = s.split_at(at);
    let (head, tail) = (head.to_vec(), tail.to_vec());
    stack.discard(2);
    stack.push(Value::Str(head));
    stack.push(Value::Str(tail));
    Ok(())
}
