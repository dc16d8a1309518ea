//! Names declared in a declaration batch.
//!
//! Collected in a first pass over the whole batch so that a reference to a
//! type declared further down the file still resolves.

use indexmap::IndexSet;
use serde::Serialize;

use crate::TypeDecl;

/// Set of type names declared in the current batch, exported or not.
///
/// Serializes as a plain list of names.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct SymbolTable {
    names: IndexSet<String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect every declared name from a batch, in declaration order.
    pub fn collect<'a>(decls: impl IntoIterator<Item = &'a TypeDecl>) -> Self {
        let mut table = Self::new();
        for decl in decls {
            table.insert(&decl.name);
        }
        table
    }

    /// Record a name. Returns `false` if it was already declared.
    pub fn insert(&mut self, name: &str) -> bool {
        if self.names.contains(name) {
            return false;
        }
        self.names.insert(name.to_owned())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over names in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
