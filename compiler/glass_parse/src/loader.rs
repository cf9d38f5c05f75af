//! Class loading: duplicate checks and inheritance flattening.
//!
//! Each class ends up with one method table. Own methods win; inherited
//! methods are added parent by parent in declaration order, so an earlier
//! parent shadows a later one. Parents are resolved depth-first before
//! their children, which also detects cycles.

use std::path::Path;

use glass_ir::{builtin_classes, ClassTable, GlassClass, GlassFunction, Name, SourceLoc};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::{parse_source, ClassDecl, LoadError};

/// Accumulates parsed classes from any number of sources.
pub struct Loader {
    decls: Vec<ClassDecl>,
    builtins: bool,
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

impl Loader {
    /// A loader that starts with the builtin classes.
    pub fn new() -> Self {
        Loader {
            decls: Vec::new(),
            builtins: true,
        }
    }

    /// A loader with no builtin classes.
    pub fn without_builtins() -> Self {
        Loader {
            decls: Vec::new(),
            builtins: false,
        }
    }

    /// Parse `source` and queue its classes.
    pub fn add_source(&mut self, file: &str, source: &str) -> Result<(), LoadError> {
        self.decls.extend(parse_source(file, source)?);
        Ok(())
    }

    /// Read and parse a file.
    pub fn add_file(&mut self, path: &Path) -> Result<(), LoadError> {
        let source = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.add_source(&path.display().to_string(), &source)
    }

    /// Queue an already parsed class.
    pub fn add_class(&mut self, decl: ClassDecl) {
        self.decls.push(decl);
    }

    /// Validate every queued class and flatten inheritance.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn build(self) -> Result<ClassTable, LoadError> {
        let mut entries: Vec<Entry> = Vec::new();
        let mut index: FxHashMap<Name, usize> = FxHashMap::default();

        if self.builtins {
            for class in builtin_classes() {
                index.insert(class.name().clone(), entries.len());
                entries.push(Entry::builtin(&class));
            }
        }

        for decl in self.decls {
            if let Some(&first) = index.get(&decl.name) {
                return Err(LoadError::DuplicateClass {
                    name: decl.name,
                    first: entries[first].loc.clone(),
                    loc: decl.loc,
                });
            }
            check_unique_members(&decl)?;
            index.insert(decl.name.clone(), entries.len());
            entries.push(Entry::declared(decl));
        }

        let mut resolver = Resolver {
            entries,
            index,
            chain: Vec::new(),
        };
        for idx in 0..resolver.entries.len() {
            resolver.resolve(idx)?;
        }

        let table: ClassTable = resolver
            .entries
            .into_iter()
            .map(|entry| GlassClass::new(entry.name, entry.methods, entry.loc))
            .collect();
        tracing::debug!(classes = table.len(), "class table built");
        Ok(table)
    }
}

fn check_unique_members(decl: &ClassDecl) -> Result<(), LoadError> {
    let mut methods = FxHashSet::default();
    for method in &decl.methods {
        if !methods.insert(method.name()) {
            return Err(LoadError::DuplicateMethod {
                class: decl.name.clone(),
                method: method.name().clone(),
                loc: method.loc().clone(),
            });
        }
    }
    let mut parents = FxHashSet::default();
    for (parent, loc) in &decl.parents {
        if !parents.insert(parent) {
            return Err(LoadError::DuplicateParent {
                class: decl.name.clone(),
                parent: parent.clone(),
                loc: loc.clone(),
            });
        }
    }
    Ok(())
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    Pending,
    InProgress,
    Done,
}

struct Entry {
    name: Name,
    parents: Vec<(Name, SourceLoc)>,
    methods: Vec<GlassFunction>,
    loc: SourceLoc,
    state: State,
}

impl Entry {
    fn builtin(class: &GlassClass) -> Self {
        Entry {
            name: class.name().clone(),
            parents: Vec::new(),
            methods: class.methods().map(|(_, func)| func.clone()).collect(),
            loc: class.loc().clone(),
            state: State::Done,
        }
    }

    fn declared(decl: ClassDecl) -> Self {
        Entry {
            name: decl.name,
            parents: decl.parents,
            methods: decl.methods,
            loc: decl.loc,
            state: State::Pending,
        }
    }

    fn has_method(&self, name: &Name) -> bool {
        self.methods.iter().any(|m| m.name() == name)
    }
}

struct Resolver {
    entries: Vec<Entry>,
    index: FxHashMap<Name, usize>,
    /// Classes currently being resolved, outermost first.
    chain: Vec<usize>,
}

impl Resolver {
    fn resolve(&mut self, idx: usize) -> Result<(), LoadError> {
        match self.entries[idx].state {
            State::Done => return Ok(()),
            State::InProgress => return Err(self.cycle(idx)),
            State::Pending => {}
        }
        self.entries[idx].state = State::InProgress;
        self.chain.push(idx);

        let parents = self.entries[idx].parents.clone();
        for (parent, loc) in parents {
            let Some(&parent_idx) = self.index.get(&parent) else {
                return Err(LoadError::UnknownParent {
                    class: self.entries[idx].name.clone(),
                    parent,
                    loc,
                });
            };
            self.resolve(parent_idx)?;

            let inherited: Vec<GlassFunction> = self.entries[parent_idx]
                .methods
                .iter()
                .filter(|m| !self.entries[idx].has_method(m.name()))
                .cloned()
                .collect();
            self.entries[idx].methods.extend(inherited);
        }

        self.chain.pop();
        self.entries[idx].state = State::Done;
        Ok(())
    }

    fn cycle(&self, idx: usize) -> LoadError {
        let start = self.chain.iter().position(|&i| i == idx).unwrap_or(0);
        let mut names: Vec<&str> = self.chain[start..]
            .iter()
            .map(|&i| self.entries[i].name.as_str())
            .collect();
        names.push(self.entries[idx].name.as_str());
        LoadError::InheritanceCycle {
            chain: names.join(" -> "),
            loc: self.entries[idx].loc.clone(),
        }
    }
}
