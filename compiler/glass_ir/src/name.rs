//! Identifiers and the scope they resolve to.
//!
//! Glass names are atoms: one letter (`a`, `M`) or a parenthesized identifier
//! (`(_tmp)`, `(Counter)`). The first character alone decides where a name
//! lives at runtime, see [`ScopeKind::of`].

use std::borrow::Borrow;
use std::fmt;
use std::rc::Rc;

/// An identifier used for variables, methods and classes.
///
/// Cloning is a reference-count bump; equality and hashing are by content.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(Rc<str>);

impl Name {
    /// Create a name from its text.
    pub fn new(text: &str) -> Self {
        Name(Rc::from(text))
    }

    /// The name's text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First character, if any.
    #[inline]
    pub fn first_char(&self) -> Option<char> {
        self.0.chars().next()
    }

    /// Scope this name resolves to.
    #[inline]
    pub fn scope(&self) -> ScopeKind {
        ScopeKind::of(self.as_str())
    }
}

impl From<&str> for Name {
    fn from(text: &str) -> Self {
        Name::new(text)
    }
}

impl From<String> for Name {
    fn from(text: String) -> Self {
        Name(Rc::from(text))
    }
}

impl Borrow<str> for Name {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({:?})", &*self.0)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where a variable name is bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScopeKind {
    /// `_`-prefixed: private to one call of a method.
    Local,
    /// Lowercase: a field of the instance the method runs on.
    Classwide,
    /// Anything else: one process-wide table.
    Global,
}

impl ScopeKind {
    /// Resolve a name's scope from its first character.
    ///
    /// Only the first character is inspected, so every name sharing it lands
    /// in the same scope regardless of where it is used. The empty name is
    /// global.
    pub fn of(name: &str) -> ScopeKind {
        match name.chars().next() {
            Some('_') => ScopeKind::Local,
            Some(c) if c.is_ascii_lowercase() => ScopeKind::Classwide,
            _ => ScopeKind::Global,
        }
    }
}
