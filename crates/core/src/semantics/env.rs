use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use crate::syntax::{Expr, Name};

/// The statement that the variable `name` has type `typ`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDeclaration {
    name: Name,
    typ: Expr,
}

impl TypeDeclaration {
    pub fn new(name: impl Into<Name>, typ: Expr) -> Self {
        Self {
            name: name.into(),
            typ,
        }
    }

    pub fn name(&self) -> Name {
        self.name
    }

    pub fn typ(&self) -> &Expr {
        &self.typ
    }
}

/// One declaration and everything declared before it, newest first.
struct Node {
    init: Option<Arc<Node>>,
    decl: TypeDeclaration,
    len: usize,
}

impl Drop for Node {
    fn drop(&mut self) {
        // Unlink uniquely owned predecessors one at a time, stopping at the
        // first one another environment still holds.
        let mut next = self.init.take();
        while let Some(node) = next {
            next = Arc::into_inner(node).and_then(|mut n| n.init.take());
        }
    }
}

struct NewestFirst<'a>(Option<&'a Node>);

impl<'a> Iterator for NewestFirst<'a> {
    type Item = &'a TypeDeclaration;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.0?;
        self.0 = node.init.as_deref();
        Some(&node.decl)
    }
}

/// An ordered list of type declarations.
///
/// Environments are persistent: [`Environment::add`] returns a new environment
/// and leaves the receiver untouched, sharing its declarations. Lookup scans
/// in insertion order and stops at the first match, so a later declaration
/// of an already declared name is never seen.
#[derive(Clone, Default)]
pub struct Environment {
    last: Option<Arc<Node>>,
}

impl Environment {
    /// The environment with no declarations.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Appends `decl`, without checking whether its name is already taken.
    pub fn add(&self, decl: TypeDeclaration) -> Self {
        Self {
            last: Some(Arc::new(Node {
                init: self.last.clone(),
                decl,
                len: self.len() + 1,
            })),
        }
    }

    pub fn len(&self) -> usize {
        self.last.as_ref().map_or(0, |n| n.len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn newest_first(&self) -> NewestFirst<'_> {
        NewestFirst(self.last.as_deref())
    }

    /// Declarations in insertion order.
    ///
    /// The list is linked newest-first, so this collects one reference per
    /// declaration before yielding. Lookups walk the links without allocating.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &TypeDeclaration> {
        let mut decls = self.newest_first().collect::<Vec<_>>();
        decls.reverse();
        decls.into_iter()
    }

    /// Whether no declaration uses `name`.
    pub fn name_free(&self, name: impl Into<Name>) -> bool {
        self.get_declaration(name).is_none()
    }

    /// The earliest declaration of `name`, if any.
    pub fn get_declaration(&self, name: impl Into<Name>) -> Option<&TypeDeclaration> {
        let name = name.into();
        self.newest_first().filter(|d| d.name == name).last()
    }
}

impl PartialEq for Environment {
    fn eq(&self, other: &Self) -> bool {
        match (&self.last, &other.last) {
            (Some(a), Some(b)) if Arc::ptr_eq(a, b) => true,
            _ => self.len() == other.len() && self.newest_first().eq(other.newest_first()),
        }
    }
}

impl Eq for Environment {}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_list().entries(self.iter()).finish()
    }
}
