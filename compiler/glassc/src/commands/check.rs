//! The `check` command: load Glass sources without running them.

use std::path::PathBuf;

use glass_ir::{ClassTable, BUILTIN_FILE, MAIN_CLASS, MAIN_METHOD};

use super::{load_files, DriverError};

/// Counts printed by a successful check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CheckSummary {
    pub classes: usize,
    pub methods: usize,
    /// Whether `M.m` exists.
    pub runnable: bool,
}

impl CheckSummary {
    /// Summarize the user-written classes of `classes`.
    pub fn of(classes: &ClassTable) -> Self {
        let user = classes
            .iter()
            .filter(|class| class.loc().file.as_str() != BUILTIN_FILE);
        let mut summary = CheckSummary::default();
        for class in user {
            summary.classes += 1;
            summary.methods += class.method_count();
        }
        summary.runnable = classes
            .get(MAIN_CLASS)
            .is_some_and(|main| main.has_method(MAIN_METHOD));
        summary
    }
}

/// `glass check`: parse and resolve `files`, reporting the first load error.
pub fn check_files(files: &[PathBuf]) -> i32 {
    match load_files(files) {
        Ok(classes) => {
            let summary = CheckSummary::of(&classes);
            let entry = if summary.runnable {
                "entry point M.m"
            } else {
                "no entry point"
            };
            println!(
                "OK: {} class(es), {} method(s), {entry}",
                summary.classes, summary.methods
            );
            0
        }
        Err(err) => {
            eprint!("{}", DriverError::from(err).report());
            1
        }
    }
}
