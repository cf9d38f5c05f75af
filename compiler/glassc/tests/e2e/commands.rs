//! `check` and `builtins`.

use glassc::{builtin_table, check_files, load_files, CheckSummary};
use pretty_assertions::assert_eq;

use crate::common::Project;

#[test]
fn check_counts_user_classes() {
    let project = Project::new()
        .file("lib.glass", "{P[a][b]}{C P[c]}")
        .file("main.glass", "{M[m]}");
    let classes = load_files(project.files()).unwrap();
    assert_eq!(
        CheckSummary::of(&classes),
        CheckSummary {
            classes: 3,
            methods: 6,
            runnable: true,
        }
    );
    assert_eq!(check_files(project.files()), 0);
}

#[test]
fn check_without_entry_point_still_loads() {
    let project = Project::new().file("lib.glass", "{P[a]}");
    let classes = load_files(project.files()).unwrap();
    assert!(!CheckSummary::of(&classes).runnable);
    assert_eq!(check_files(project.files()), 0);
}

#[test]
fn check_fails_on_load_errors() {
    let project = Project::new().file("bad.glass", "{M[m\\]}");
    assert_eq!(check_files(project.files()), 1);
}

#[test]
fn builtin_table_lists_every_method() {
    let table = builtin_table();
    assert_eq!(table.len(), 40);
    assert!(table.iter().any(|line| line.starts_with("A.a ")));
    assert!(table.iter().any(|line| line.starts_with("S.si ") && line.contains("3->1")));
}
