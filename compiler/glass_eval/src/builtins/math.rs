//! Class `A`: IEEE arithmetic and comparison.

use crate::{EvalResult, Value, ValueStack};

/// `x y` → `x ∘ y`
pub(super) fn binary(stack: &mut ValueStack, op: impl FnOnce(f64, f64) -> f64) -> EvalResult {
    stack.require(2)?;
    let y = stack.peek(0)?.as_number()?;
    let x = stack.peek(1)?.as_number()?;
    stack.discard(2);
    stack.push(Value::Number(op(x, y)));
    Ok(())
}

/// `x y` → `1` or `0`
pub(super) fn compare(stack: &mut ValueStack, op: impl FnOnce(f64, f64) -> bool) -> EvalResult {
    binary(stack, |x, y| if op(x, y) { 1.0 } else { 0.0 })
}

/// `x` → `floor(x)`
pub(super) fn floor(stack: &mut ValueStack) -> EvalResult {
    let x = stack.peek(0)?.as_number()?;
    stack.discard(1);
    stack.push(Value::Number(x.floor()));
    Ok(())
}
