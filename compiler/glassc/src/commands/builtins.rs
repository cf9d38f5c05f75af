//! The `builtins` command: print the builtin dispatch table.

use glass_ir::Builtin;

/// One line per builtin: qualified name, operand count and stack effect.
pub fn builtin_table() -> Vec<String> {
    Builtin::ALL
        .iter()
        .map(|builtin| {
            let info = builtin.info();
            format!(
                "{:<6} {}->{}  {}",
                info.qualified_name(),
                info.arity,
                info.results,
                info.summary
            )
        })
        .collect()
}

pub fn list_builtins() {
    for line in builtin_table() {
        println!("{line}");
    }
}
