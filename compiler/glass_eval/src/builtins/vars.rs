//! Class `V`: fresh local names and unbinding.

use glass_ir::Name;

use crate::{EvalResult, Interpreter, Value};

/// `→ name`, a local name not produced before in this run
pub(super) fn fresh_name(interp: &mut Interpreter<'_>) -> EvalResult {
    let name = Name::from(format!("__v{}", interp.fresh_names));
    interp.fresh_names += 1;
    interp.stack.push(Value::Name(name));
    Ok(())
}

/// `name` → ``, removing the binding if there is one
pub(super) fn delete(interp: &mut Interpreter<'_>) -> EvalResult {
    let name = interp.stack.peek(0)?.as_name()?.clone();
    interp.env.unbind(&name, &mut interp.heap);
    interp.stack.discard(1);
    Ok(())
}
