//! Instance heap with a mark-and-sweep collector.
//!
//! Instances live in a flat slot array and are addressed by [`Handle`].
//! Fields may reference other instances, cycles included, so reclamation is
//! done by tracing from a root set rather than by counting references.
//!
//! Allocation scans forward from a free-slot cursor. When the scan reaches
//! the end of the array, a collection runs:
//!
//! 1. mark everything reachable from the roots (already marked slots are
//!    skipped, which terminates on cycles),
//! 2. free every unmarked slot,
//! 3. double the capacity if more than half the slots are still live,
//! 4. reset the cursor to the start.

use glass_ir::{GlassClass, Name};
use rustc_hash::FxHashMap;

use crate::Value;

/// Index of a heap slot. Stable while the instance is reachable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle(usize);

impl Handle {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Receives the handles a root or value refers to.
pub trait Tracer {
    fn mark(&mut self, handle: Handle);
}

/// Anything that can hold heap references.
pub trait Trace {
    fn trace(&self, tracer: &mut dyn Tracer);
}

impl<T: Trace> Trace for Vec<T> {
    fn trace(&self, tracer: &mut dyn Tracer) {
        for item in self {
            item.trace(tracer);
        }
    }
}

impl<K, V: Trace, S> Trace for std::collections::HashMap<K, V, S> {
    fn trace(&self, tracer: &mut dyn Tracer) {
        for value in self.values() {
            value.trace(tracer);
        }
    }
}

/// An object: its class and its classwide variables.
#[derive(Debug)]
pub struct Instance<'p> {
    class: &'p GlassClass,
    fields: FxHashMap<Name, Value>,
}

impl<'p> Instance<'p> {
    fn new(class: &'p GlassClass) -> Self {
        Instance {
            class,
            fields: FxHashMap::default(),
        }
    }

    pub fn class(&self) -> &'p GlassClass {
        self.class
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn set_field(&mut self, name: Name, value: Value) {
        self.fields.insert(name, value);
    }

    pub fn remove_field(&mut self, name: &str) -> Option<Value> {
        self.fields.remove(name)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&Name, &Value)> {
        self.fields.iter()
    }
}

/// Occupancy snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeapStats {
    /// Slots in the array.
    pub capacity: usize,
    /// Occupied slots.
    pub live: usize,
    /// Collection cycles run so far.
    pub collections: usize,
}

/// Slot array plus allocation cursor.
pub struct Heap<'p> {
    slots: Vec<Option<Instance<'p>>>,
    cursor: usize,
    live: usize,
    collections: usize,
}

impl<'p> Heap<'p> {
    /// Default number of slots.
    pub const DEFAULT_CAPACITY: usize = 1024;

    /// A heap with `capacity` empty slots (at least one).
    pub fn new(capacity: usize) -> Self {
        let mut slots = Vec::new();
        slots.resize_with(capacity.max(1), || None);
        Heap {
            slots,
            cursor: 0,
            live: 0,
            collections: 0,
        }
    }

    pub fn stats(&self) -> HeapStats {
        HeapStats {
            capacity: self.slots.len(),
            live: self.live,
            collections: self.collections,
        }
    }

    #[inline]
    pub fn get(&self, handle: Handle) -> Option<&Instance<'p>> {
        self.slots.get(handle.0).and_then(Option::as_ref)
    }

    #[inline]
    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut Instance<'p>> {
        self.slots.get_mut(handle.0).and_then(Option::as_mut)
    }

    pub fn is_live(&self, handle: Handle) -> bool {
        self.get(handle).is_some()
    }

    /// Place a fresh instance of `class`, collecting first if no free slot
    /// remains past the cursor.
    pub fn allocate(&mut self, class: &'p GlassClass, roots: &dyn Trace) -> Handle {
        let index = match self.find_free() {
            Some(index) => index,
            None => {
                self.collect(roots);
                match self.find_free() {
                    Some(index) => index,
                    None => {
                        self.slots.push(None);
                        self.slots.len() - 1
                    }
                }
            }
        };
        self.slots[index] = Some(Instance::new(class));
        self.live += 1;
        self.cursor = index + 1;
        tracing::trace!(slot = index, class = %class.name(), "allocated instance");
        Handle(index)
    }

    fn find_free(&self) -> Option<usize> {
        self.slots
            .iter()
            .skip(self.cursor)
            .position(Option::is_none)
            .map(|offset| self.cursor + offset)
    }

    /// Run a full collection cycle against `roots`.
    pub fn collect(&mut self, roots: &dyn Trace) {
        let before = self.live;
        let mut marker = Marker {
            marked: vec![false; self.slots.len()],
            worklist: Vec::new(),
        };

        roots.trace(&mut marker);
        while let Some(handle) = marker.worklist.pop() {
            if let Some(instance) = self.get(handle) {
                instance.fields.trace(&mut marker);
            }
        }

        let mut live = 0;
        for (slot, marked) in self.slots.iter_mut().zip(&marker.marked) {
            if slot.is_some() {
                if *marked {
                    live += 1;
                } else {
                    *slot = None;
                }
            }
        }
        self.live = live;
        self.collections += 1;

        let capacity = self.slots.len();
        if live > capacity / 2 {
            self.slots.resize_with(capacity * 2, || None);
        }
        self.cursor = 0;

        tracing::debug!(
            before,
            after = live,
            capacity = self.slots.len(),
            grew = self.slots.len() != capacity,
            "heap collection"
        );
    }
}

struct Marker {
    marked: Vec<bool>,
    worklist: Vec<Handle>,
}

impl Tracer for Marker {
    fn mark(&mut self, handle: Handle) {
        if let Some(flag) = self.marked.get_mut(handle.0) {
            if !*flag {
                *flag = true;
                self.worklist.push(handle);
            }
        }
    }
}

#[cfg(test)]
mod tests;
