#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use glass_ir::SourceLoc;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn class(name: &str) -> GlassClass {
    GlassClass::new(
        Name::new(name),
        Vec::new(),
        SourceLoc::new(Name::new("t"), 1, 1),
    )
}

fn no_roots() -> Vec<Value> {
    Vec::new()
}

fn link(heap: &mut Heap<'_>, from: Handle, field: &str, to: Handle) {
    heap.get_mut(from)
        .unwrap()
        .set_field(Name::new(field), Value::Instance(to));
}

#[test]
fn allocation_advances_linearly() {
    let p = class("P");
    let mut heap = Heap::new(4);
    let a = heap.allocate(&p, &no_roots());
    let b = heap.allocate(&p, &no_roots());
    assert_eq!((a.index(), b.index()), (0, 1));
    assert_eq!(heap.stats().live, 2);
    assert_eq!(heap.get(a).unwrap().class().name().as_str(), "P");
}

#[test]
fn zero_capacity_is_clamped_to_one() {
    assert_eq!(Heap::new(0).stats().capacity, 1);
}

#[test]
fn full_heap_collects_unreachable_instances() {
    let p = class("P");
    let mut heap = Heap::new(2);
    let keep = heap.allocate(&p, &no_roots());
    let _garbage = heap.allocate(&p, &no_roots());

    let roots = vec![Value::Instance(keep)];
    let fresh = heap.allocate(&p, &roots);

    let stats = heap.stats();
    assert_eq!(stats.collections, 1);
    assert!(heap.is_live(keep));
    assert_eq!(fresh.index(), 1);
    assert_eq!(stats.live, 2);
}

#[test]
fn heap_grows_when_mostly_live() {
    let p = class("P");
    let mut heap = Heap::new(2);
    let a = heap.allocate(&p, &no_roots());
    let b = heap.allocate(&p, &no_roots());
    let roots = vec![Value::Instance(a), Value::Instance(b)];
    let c = heap.allocate(&p, &roots);

    assert_eq!(heap.stats().capacity, 4);
    assert!(heap.is_live(a) && heap.is_live(b) && heap.is_live(c));
    assert_eq!(c.index(), 2);
}

#[test]
fn reachable_through_fields_survives() {
    let p = class("P");
    let mut heap = Heap::new(8);
    let root = heap.allocate(&p, &no_roots());
    let child = heap.allocate(&p, &no_roots());
    let grandchild = heap.allocate(&p, &no_roots());
    link(&mut heap, root, "c", child);
    link(&mut heap, child, "g", grandchild);

    heap.collect(&vec![Value::Instance(root)]);
    assert_eq!(heap.stats().live, 3);
}

#[test]
fn bound_functions_keep_their_instance() {
    let p = class("P");
    let mut heap = Heap::new(8);
    let target = heap.allocate(&p, &no_roots());
    let roots = vec![Value::Function {
        instance: target,
        method: Name::new("go"),
    }];
    heap.collect(&roots);
    assert!(heap.is_live(target));
}

#[test]
fn unreachable_cycle_is_collected() {
    let p = class("P");
    let mut heap = Heap::new(8);
    let a = heap.allocate(&p, &no_roots());
    let b = heap.allocate(&p, &no_roots());
    link(&mut heap, a, "other", b);
    link(&mut heap, b, "other", a);
    assert_eq!(heap.stats().live, 2);

    heap.collect(&no_roots());
    assert_eq!(heap.stats().live, 0);
    assert!(!heap.is_live(a) && !heap.is_live(b));
}

#[test]
fn rooted_cycle_survives() {
    let p = class("P");
    let mut heap = Heap::new(8);
    let a = heap.allocate(&p, &no_roots());
    let b = heap.allocate(&p, &no_roots());
    link(&mut heap, a, "other", b);
    link(&mut heap, b, "other", a);

    heap.collect(&vec![Value::Instance(b)]);
    assert_eq!(heap.stats().live, 2);
}

#[test]
fn collection_resets_the_cursor() {
    let p = class("P");
    let mut heap = Heap::new(8);
    for _ in 0..3 {
        heap.allocate(&p, &no_roots());
    }
    heap.collect(&no_roots());
    assert_eq!(heap.allocate(&p, &no_roots()).index(), 0);
}

proptest! {
    /// Whatever the allocation pattern, every instance reachable from the
    /// roots survives and every other one is freed.
    #[test]
    fn reachable_instances_are_never_collected(
        edges in prop::collection::vec((0usize..16, 0usize..16), 0..32),
        rooted in prop::collection::vec(0usize..16, 0..4),
        capacity in 1usize..8,
    ) {
        let p = class("P");
        let mut heap = Heap::new(capacity);
        // Keep every instance rooted while building the graph.
        let mut all = Vec::new();
        for _ in 0..16 {
            let h = heap.allocate(&p, &all);
            all.push(Value::Instance(h));
        }
        let handles: Vec<Handle> = all
            .iter()
            .map(|v| match v {
                Value::Instance(h) => *h,
                _ => unreachable!(),
            })
            .collect();
        for (i, (from, to)) in edges.iter().enumerate() {
            link(&mut heap, handles[*from], &format!("f{i}"), handles[*to]);
        }

        let roots: Vec<Value> = rooted.iter().map(|&i| Value::Instance(handles[i])).collect();
        heap.collect(&roots);

        // Reference reachability over the same edges.
        let mut reachable = vec![false; 16];
        let mut work: Vec<usize> = rooted.clone();
        while let Some(i) = work.pop() {
            if !std::mem::replace(&mut reachable[i], true) {
                work.extend(edges.iter().filter(|(f, _)| *f == i).map(|(_, t)| *t));
            }
        }
        for (i, handle) in handles.iter().enumerate() {
            prop_assert_eq!(heap.is_live(*handle), reachable[i]);
        }
    }
}
