//! Classes, methods and the class table.

use rustc_hash::FxHashMap;

use crate::{builtin_classes, Instruction, Name, SourceLoc};

/// A method body: an ordered command list with per-command locations.
#[derive(Clone, Debug, PartialEq)]
pub struct GlassFunction {
    name: Name,
    instructions: Vec<Instruction>,
    loc: SourceLoc,
}

impl GlassFunction {
    pub fn new(name: Name, instructions: Vec<Instruction>, loc: SourceLoc) -> Self {
        GlassFunction {
            name,
            instructions,
            loc,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Where the method was declared.
    pub fn loc(&self) -> &SourceLoc {
        &self.loc
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Instruction> {
        self.instructions.get(index)
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

/// A class with its inheritance already flattened into one method table.
#[derive(Clone, Debug, PartialEq)]
pub struct GlassClass {
    name: Name,
    methods: FxHashMap<Name, GlassFunction>,
    loc: SourceLoc,
}

impl GlassClass {
    /// Build a class from its methods.
    ///
    /// Later methods with the same name replace earlier ones; the loader has
    /// already rejected duplicates by the time a class is built.
    pub fn new(name: Name, methods: impl IntoIterator<Item = GlassFunction>, loc: SourceLoc) -> Self {
        let methods = methods
            .into_iter()
            .map(|func| (func.name().clone(), func))
            .collect();
        GlassClass { name, methods, loc }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn loc(&self) -> &SourceLoc {
        &self.loc
    }

    /// Look up a method by name.
    #[inline]
    pub fn method(&self, name: &str) -> Option<&GlassFunction> {
        self.methods.get(name)
    }

    #[inline]
    pub fn has_method(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    pub fn methods(&self) -> impl Iterator<Item = (&Name, &GlassFunction)> {
        self.methods.iter()
    }

    pub fn method_count(&self) -> usize {
        self.methods.len()
    }
}

/// Immutable name -> class map handed from the loader to the interpreter.
#[derive(Clone, Debug, Default)]
pub struct ClassTable {
    classes: FxHashMap<Name, GlassClass>,
}

impl ClassTable {
    /// An empty table, without builtin classes.
    pub fn new() -> Self {
        ClassTable::default()
    }

    /// A table holding only the builtin classes.
    pub fn with_builtins() -> Self {
        let mut table = ClassTable::new();
        for class in builtin_classes() {
            table.insert(class);
        }
        table
    }

    /// Add a class, returning the class it replaced, if any.
    pub fn insert(&mut self, class: GlassClass) -> Option<GlassClass> {
        self.classes.insert(class.name().clone(), class)
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&GlassClass> {
        self.classes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GlassClass> {
        self.classes.values()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl FromIterator<GlassClass> for ClassTable {
    fn from_iter<I: IntoIterator<Item = GlassClass>>(iter: I) -> Self {
        let mut table = ClassTable::new();
        for class in iter {
            table.insert(class);
        }
        table
    }
}
