//! Load and runtime failures as the driver reports them.

use glass_eval::EvalErrorKind;
use glass_parse::{LoadError, ParseError};
use glassc::{DriverError, RunOptions};
use pretty_assertions::assert_eq;

use crate::common::{run, Project};

fn eval_kind(err: DriverError) -> EvalErrorKind {
    match err {
        DriverError::Eval(err) => err.kind,
        other => panic!("expected a runtime error, got {other:?}"),
    }
}

fn load_error(err: DriverError) -> LoadError {
    match err {
        DriverError::Load(err) => err,
        other => panic!("expected a load error, got {other:?}"),
    }
}

#[test]
fn runtime_error_report_names_the_frame() {
    let project = Project::new().file("main.glass", "{M[m<5>(_x)=(_x)(o).?]}");
    let path = project.path("main.glass");
    let report = project.run().err().report();
    assert_eq!(
        report,
        format!(
            "error: '_x' is not an instance (holds <5>)\n  at {}:1:20 in M.m\n",
            path.display()
        )
    );
}

#[test]
fn output_before_a_failure_is_kept() {
    let outcome = run(r#"{M[m(_o)O!"partial"(_o)o.?,]}"#);
    assert_eq!(outcome.stdout, "partial");
    assert!(matches!(
        eval_kind(outcome.err()),
        EvalErrorKind::StackUnderflow { .. }
    ));
}

#[test]
fn trace_lists_every_active_call() {
    let source = "{Q[(boom)(_z)*]}\n{P[(mid)(_q)Q!(_q)(boom).?]}\n{M[m(_p)P!(_p)(mid).?]}";
    let report = run(source).err().report();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines[0], "error: undefined name '_z'");
    assert!(lines[1].ends_with(":1:14 in Q.boom"), "{report}");
    assert!(lines[2].ends_with(":2:26 in P.mid"), "{report}");
    assert!(lines[3].ends_with(":3:21 in M.m"), "{report}");
    assert_eq!(lines.len(), 4);
}

#[test]
fn missing_entry_point() {
    assert!(matches!(
        eval_kind(run("{P[m]}").err()),
        EvalErrorKind::MissingEntryPoint { .. }
    ));
}

#[test]
fn call_depth_limit() {
    let options = RunOptions {
        max_call_depth: Some(10),
        ..RunOptions::default()
    };
    let err = Project::new()
        .file("loop.glass", "{M[m(_s)$(_s)m.?]}")
        .run_with(&options, "")
        .err();
    assert_eq!(eval_kind(err), EvalErrorKind::RecursionLimit { depth: 10 });
}

#[test]
fn parse_errors_carry_their_location() {
    let err = load_error(run("{M[m/(_x)]}").err());
    assert!(matches!(
        err,
        LoadError::Parse(ParseError::UnclosedLoop { .. })
    ));
    let report = DriverError::Load(err).report();
    assert!(report.starts_with("error: "), "{report}");
    assert!(report.contains(":1:5: loop over '_x'"), "{report}");
}

#[test]
fn unknown_parent() {
    let err = load_error(run("{C (Nope)}{M[m]}").err());
    assert!(matches!(err, LoadError::UnknownParent { .. }));
}

#[test]
fn inheritance_cycle() {
    let err = load_error(run("{(X)(Y)}{(Y)(Z)}{(Z)(X)}{M[m]}").err());
    let LoadError::InheritanceCycle { chain, .. } = err else {
        panic!("expected a cycle, got {err}");
    };
    assert_eq!(chain, "X -> Y -> Z -> X");
}

#[test]
fn class_defined_in_two_files() {
    let err = load_error(
        Project::new()
            .file("a.glass", "{P}")
            .file("b.glass", "{P}{M[m]}")
            .run()
            .err(),
    );
    assert!(matches!(err, LoadError::DuplicateClass { .. }));
}

#[test]
fn redefining_a_builtin_class() {
    let err = load_error(run("{A[(x)]}{M[m]}").err());
    assert!(matches!(err, LoadError::DuplicateClass { .. }));
}

#[test]
fn missing_source_file() {
    let project = Project::new();
    let missing = project.path("nope.glass");
    let err = load_error(
        glassc::load_files(&[missing])
            .map_err(DriverError::from)
            .unwrap_err(),
    );
    assert!(matches!(err, LoadError::Io { .. }));
}
