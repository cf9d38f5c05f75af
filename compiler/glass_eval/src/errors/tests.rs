use super::*;
use pretty_assertions::assert_eq;

fn frame(class: &str, method: &str, line: u32) -> TraceFrame {
    TraceFrame {
        class: Name::new(class),
        method: Name::new(method),
        loc: SourceLoc::new(Name::new("prog.glass"), line, 4),
    }
}

#[test]
fn message_matches_kind() {
    let err = stack_underflow(2, 1);
    assert_eq!(err.message, err.kind.to_string());
    assert_eq!(
        err.to_string(),
        "stack underflow: needed 2 value(s), found 1"
    );
}

#[test]
fn report_lists_frames_innermost_first() {
    let err = not_an_instance("_x", "<3>".to_string())
        .with_frame(frame("P", "go", 7))
        .with_frame(frame("M", "m", 2));
    assert_eq!(
        err.report(),
        "error: '_x' is not an instance (holds <3>)\n\
         \x20 at prog.glass:7:4 in P.go\n\
         \x20 at prog.glass:2:4 in M.m\n"
    );
}

#[test]
fn report_without_frames_is_one_line() {
    assert_eq!(
        missing_entry_point("class 'M'").report(),
        "error: missing entry point: class 'M'\n"
    );
}

#[test]
fn io_errors_convert() {
    let err: EvalError = std::io::Error::new(std::io::ErrorKind::Other, "disk full").into();
    assert_eq!(
        err.kind,
        EvalErrorKind::Io {
            message: "disk full".to_string()
        }
    );
}
