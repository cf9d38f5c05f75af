//! The file I/O builtins against a temporary directory.

use glass_eval::EvalErrorKind;
use glassc::{DriverError, RunOptions};
use pretty_assertions::assert_eq;

use crate::common::Project;

fn with_args(args: &[&std::path::Path]) -> RunOptions {
    RunOptions {
        args: args
            .iter()
            .map(|p| p.as_os_str().as_encoded_bytes().to_vec())
            .collect(),
        ..RunOptions::default()
    }
}

#[test]
fn write_then_read_back() {
    let source = r#"
        {M[m
            (_i)I!(_o)O!
            (_i)a.?(_path)=

            (_path)*(_o)f.?(_out)=
            "first line\n"(_out)*(_o)(of).?
            <42>(_out)*(_o)(onf).?
            (_out)*(_o)(fc).?

            (_path)*(_i)f.?(_in)=
            (_in)*(_i)(lf).?(_o)o.?
            (_in)*(_i)(cf).?(_o)o.?
            (_in)*(_i)(ef).?(_o)(on).?
            (_in)*(_i)(cf).?(_o)o.?
            (_in)*(_i)(ef).?(_o)(on).?
            (_in)*(_i)(fc).?
            (_in)*(_i)(fo).?(_o)(on).?
        ]}"#;
    let project = Project::new().file("io.glass", source);
    let data = project.path("data.txt");
    let out = project.run_with(&with_args(&[data.as_path()]), "").ok();
    assert_eq!(out, "first line\n40210");
    assert_eq!(std::fs::read_to_string(&data).unwrap(), "first line\n42");
}

#[test]
fn unopened_input_file_fails_on_read() {
    let source = r#"
        {M[m
            (_i)I!(_o)O!
            (_i)a.?(_i)f.?(_f)=
            (_f)*(_i)(fo).?(_o)(on).?
            (_f)*(_i)(lf).?
        ]}"#;
    let project = Project::new().file("missing.glass", source);
    let outcome = project.run_with(&with_args(&[project.path("absent.txt").as_path()]), "");
    assert_eq!(outcome.stdout, "0");
    let DriverError::Eval(err) = outcome.err() else {
        panic!("expected a runtime error");
    };
    assert!(matches!(err.kind, EvalErrorKind::Io { .. }), "{err}");
}

#[test]
fn output_file_on_a_directory_is_closed() {
    let source = r#"
        {M[m
            (_i)I!(_o)O!
            (_i)a.?(_o)f.?(_f)=
            (_f)*(_o)(fo).?(_o)(on).?
            (_f)*(_o)(fc).?
        ]}"#;
    let project = Project::new().file("dir.glass", source);
    let dir = project.path("");
    let out = project.run_with(&with_args(&[dir.as_path()]), "").ok();
    assert_eq!(out, "0");
}
