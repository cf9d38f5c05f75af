#![allow(clippy::unwrap_used)]

use super::*;
use crate::EvalErrorKind;
use glass_ir::{GlassClass, SourceLoc};
use pretty_assertions::assert_eq;

fn class() -> GlassClass {
    GlassClass::new(Name::new("P"), Vec::new(), SourceLoc::new(Name::new("t"), 1, 1))
}

fn frame(this: Handle) -> Frame {
    Frame::new(this, Name::new("P"), Name::new("m"))
}

#[test]
fn names_route_by_first_character() {
    let p = class();
    let mut heap = Heap::new(4);
    let this = heap.allocate(&p, &Vec::<Value>::new());
    let mut env = Environment::new(None);
    env.push_frame(frame(this)).unwrap();

    env.bind(Name::new("_l"), Value::Number(1.0), &mut heap).unwrap();
    env.bind(Name::new("f"), Value::Number(2.0), &mut heap).unwrap();
    env.bind(Name::new("G"), Value::Number(3.0), &mut heap).unwrap();

    assert_eq!(
        heap.get(this).unwrap().field("f"),
        Some(&Value::Number(2.0))
    );
    assert_eq!(env.global("G"), Some(&Value::Number(3.0)));
    assert_eq!(env.global("_l"), None);
    assert_eq!(
        env.lookup(&Name::new("_l"), &heap).unwrap(),
        Value::Number(1.0)
    );
}

#[test]
fn locals_are_per_frame_fields_per_instance() {
    let p = class();
    let mut heap = Heap::new(4);
    let a = heap.allocate(&p, &Vec::<Value>::new());
    let b = heap.allocate(&p, &Vec::<Value>::new());
    let mut env = Environment::new(None);

    env.push_frame(frame(a)).unwrap();
    env.bind(Name::new("_x"), Value::Number(1.0), &mut heap).unwrap();
    env.bind(Name::new("x"), Value::Number(1.0), &mut heap).unwrap();

    env.push_frame(frame(b)).unwrap();
    assert!(env.lookup(&Name::new("_x"), &heap).is_err());
    assert!(env.lookup(&Name::new("x"), &heap).is_err());

    env.pop_frame();
    assert!(env.lookup(&Name::new("_x"), &heap).is_ok());
}

#[test]
fn reading_an_undefined_name_is_an_error() {
    let env = Environment::new(None);
    let heap = Heap::new(1);
    let err = env.lookup(&Name::new("Nope"), &heap).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::UndefinedName {
            name: "Nope".to_string()
        }
    );
}

#[test]
fn unbind_removes_silently() {
    let mut heap = Heap::new(1);
    let mut env = Environment::new(None);
    env.bind(Name::new("G"), Value::Number(1.0), &mut heap).unwrap();
    env.unbind(&Name::new("G"), &mut heap);
    env.unbind(&Name::new("G"), &mut heap);
    assert_eq!(env.global("G"), None);
}

#[test]
fn unbinding_a_field_removes_it_from_the_instance() {
    let p = class();
    let mut heap = Heap::new(4);
    let this = heap.allocate(&p, &Vec::<Value>::new());
    let mut env = Environment::new(None);
    env.push_frame(frame(this)).unwrap();

    env.bind(Name::new("f"), Value::Number(1.0), &mut heap).unwrap();
    assert_eq!(
        env.lookup(&Name::new("f"), &heap).unwrap(),
        Value::Number(1.0)
    );
    env.unbind(&Name::new("f"), &mut heap);
    assert_eq!(heap.get(this).unwrap().field("f"), None);
    assert!(env.lookup(&Name::new("f"), &heap).is_err());
}

#[test]
fn depth_limit_refuses_the_extra_frame() {
    let p = class();
    let mut heap = Heap::new(4);
    let this = heap.allocate(&p, &Vec::<Value>::new());
    let mut env = Environment::new(Some(1));
    env.push_frame(frame(this)).unwrap();
    let err = env.push_frame(frame(this)).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::RecursionLimit { depth: 1 });
    assert_eq!(env.depth(), 1);
}

#[test]
fn frames_and_globals_are_roots() {
    let p = class();
    let mut heap = Heap::new(8);
    let this = heap.allocate(&p, &Vec::<Value>::new());
    let local = heap.allocate(&p, &Vec::<Value>::new());
    let global = heap.allocate(&p, &Vec::<Value>::new());
    let garbage = heap.allocate(&p, &Vec::<Value>::new());

    let mut env = Environment::new(None);
    env.push_frame(frame(this)).unwrap();
    env.bind(Name::new("_l"), Value::Instance(local), &mut heap).unwrap();
    env.bind(Name::new("G"), Value::Instance(global), &mut heap).unwrap();

    heap.collect(&env);
    assert!(heap.is_live(this) && heap.is_live(local) && heap.is_live(global));
    assert!(!heap.is_live(garbage));

    env.pop_frame();
    heap.collect(&env);
    assert!(!heap.is_live(this) && !heap.is_live(local));
    assert!(heap.is_live(global));
}
