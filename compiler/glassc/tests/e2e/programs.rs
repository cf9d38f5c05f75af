//! Complete programs and their output.

use glassc::RunOptions;
use pretty_assertions::assert_eq;

use crate::common::{run, Project};

#[test]
fn hello_world() {
    let source = r#"
        'Prints a greeting.'
        {M[m(_o)O!"Hello, World!\n"(_o)o.?]}
    "#;
    assert_eq!(run(source).ok(), "Hello, World!\n");
}

#[test]
fn factorial_by_loop() {
    let source = "
        {M[m
            (_a)A!(_o)O!
            <1>(_r)=<5>(_n)=
            /(_n)
                (_r)*(_n)*(_a)m.?(_r)=
                (_n)*<1>(_a)s.?(_n)=
            \\
            (_r)*(_o)(on).?
        ]}";
    assert_eq!(run(source).ok(), "120");
}

#[test]
fn factorial_by_recursion() {
    // (N) counts down; each level multiplies the value the deeper call left.
    let source = "
        {(Fact)
            [(f)
                (_a)A!
                (N)*(_n)=
                <1>(_r)=
                (N)*<1>(_a)(gt).?(_more)=
                /(_more)
                    (N)*<1>(_a)s.?(N)=
                    (_s)$(_s)f.?
                    (_r)=
                    (_r)*(_n)*(_a)m.?(_r)=
                    <0>(_more)=
                \\
                (_r)*
            ]
        }
        {M[m(_f)(Fact)!<6>(N)=(_f)f.?(_o)O!(_o)(on).?]}";
    assert_eq!(run(source).ok(), "720");
}

#[test]
fn reverse_a_string() {
    let source = r#"
        {M[m
            (_a)A!(_s)S!(_o)O!
            "abc"(_t)=
            (_t)*(_s)l.?(_i)=
            /(_i)
                (_i)*<1>(_a)s.?(_i)=
                (_t)*(_i)*(_s)i.?(_o)o.?
            \
        ]}"#;
    assert_eq!(run(source).ok(), "cba");
}

#[test]
fn split_and_rejoin() {
    let source = r#"
        {M[m
            (_s)S!(_o)O!
            "hello world"<5>(_s)d.?
            (_tail)=(_head)=
            (_tail)*(_head)*(_s)a.?(_o)o.?
        ]}"#;
    assert_eq!(run(source).ok(), " worldhello");
}

#[test]
fn character_codes_round_trip() {
    let source = r#"
        {M[m
            (_a)A!(_s)S!(_o)O!
            "a"(_s)(sn).?<1>(_a)a.?(_s)(ns).?(_o)o.?
        ]}"#;
    assert_eq!(run(source).ok(), "b");
}

#[test]
fn echo_standard_input() {
    let source = r#"
        {M[m
            (_i)I!(_o)O!
            (_i)e.?(_a)A!<0>(_a)e.?(_go)=
            /(_go)
                (_i)l.?(_o)o.?
                (_i)e.?<0>(_a)e.?(_go)=
            \
        ]}"#;
    let out = Project::new()
        .file("echo.glass", source)
        .run_with(&RunOptions::default(), "one\ntwo\n")
        .ok();
    assert_eq!(out, "one\ntwo\n");
}

#[test]
fn program_arguments() {
    let source = r#"
        {M[m
            (_i)I!(_o)O!
            (_i)(ac).?(_o)(on).?
            (_i)a.?(_o)o.?
            (_i)a.?(_o)o.?
        ]}"#;
    let options = RunOptions {
        args: vec![b"x".to_vec(), b"y".to_vec()],
        ..RunOptions::default()
    };
    let out = Project::new()
        .file("args.glass", source)
        .run_with(&options, "")
        .ok();
    assert_eq!(out, "2xy");
}

#[test]
fn classes_span_files() {
    let project = Project::new()
        .file(
            "greeter.glass",
            r#"{(Greeter)[(c__)"Hi, "(prefix)=][(greet)(_o)O!(prefix)*(_o)o.?(_o)o.?]}"#,
        )
        .file(
            "main.glass",
            r#"{M[m(_g)(Greeter)!"Glass"(_g)(greet).?]}"#,
        );
    assert_eq!(project.run().ok(), "Hi, Glass");
}

#[test]
fn inheritance_and_overriding() {
    let source = r#"
        {(Animal)
            [(speak)(_o)O!"..."(_o)o.?]
            [(intro)(_o)O!"I say "(_o)o.?(_s)$(_s)(speak).?]
        }
        {(Dog)(Animal)[(speak)(_o)O!"woof"(_o)o.?]}
        {M[m(_d)(Dog)!(_d)(intro).?(_a)(Animal)!(_a)(speak).?]}
    "#;
    assert_eq!(run(source).ok(), "I say woof...");
}

#[test]
fn earlier_parents_win() {
    let source = r#"
        {L[(who)(_o)O!"L"(_o)o.?]}
        {R[(who)(_o)O!"R"(_o)o.?][(only)(_o)O!"r"(_o)o.?]}
        {C L R}
        {M[m(_c)C!(_c)(who).?(_c)(only).?]}
    "#;
    assert_eq!(run(source).ok(), "Lr");
}

#[test]
fn counters_keep_separate_fields() {
    let source = r#"
        {(Counter)
            [(c__)<0>(count)=]
            [(tick)(_a)A!(count)*<1>(_a)a.?(count)=]
            [(show)(_o)O!(count)*(_o)(on).?]
        }
        {M[m
            (_x)(Counter)!(_y)(Counter)!
            (_x)(tick).?(_x)(tick).?(_x)(tick).?(_y)(tick).?
            (_x)(show).?(_y)(show).?
        ]}"#;
    assert_eq!(run(source).ok(), "31");
}

#[test]
fn fresh_variables_hold_values() {
    let source = r#"
        {M[m
            (_v)V!(_o)O!
            (_v)n.?(_name)=
            "kept"(_name)*=
            (_name)**(_o)o.?
            (_name)*(_v)d.?
        ]}"#;
    assert_eq!(run(source).ok(), "kept");
}

#[test]
fn garbage_is_reclaimed_during_a_long_run() {
    let source = "
        {(Node)[(link)(next)=]}
        {M[m
            (_a)A!<200>(_i)=
            /(_i)
                (_p)(Node)!(_q)(Node)!
                (_q)*(_p)(link).?
                (_p)*(_q)(link).?
                (_i)*<1>(_a)s.?(_i)=
            \\
        ]}";
    let options = RunOptions {
        heap_capacity: 8,
        ..RunOptions::default()
    };
    let stats = Project::new()
        .file("gc.glass", source)
        .run_with(&options, "")
        .result
        .unwrap();
    assert!(stats.collections > 10, "{stats:?}");
    assert!(stats.capacity <= 16, "{stats:?}");
}
