//! Go → Flow primitive mapping.
//!
//! The table reflects how `encoding/json` writes each Go type: integers and
//! floats become JSON numbers, `time.Time` marshals to an RFC 3339 string.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Placeholder emitted for a name found in neither table.
pub const MISSING_TYPE_DEF: &str = "MISSING_TYPE_DEF_IN_MAP";

/// Placeholder emitted for a type expression with no Flow counterpart.
pub const UNKNOWN_EXPR_TYPE: &str = "UNKNOWN_EXPR_TYPE";

/// Flow primitive types a Go primitive can map to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowPrimitive {
    Boolean,
    Number,
    String,
}

impl FlowPrimitive {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
        }
    }
}

const NUMERIC: &[&str] = &[
    "int", "int8", "int16", "int32", "int64", "uint", "uint8", "uint16", "uint32", "uint64",
    "uintptr", "byte", "rune", "float32", "float64",
];

static BUILTIN: LazyLock<PrimitiveTable> = LazyLock::new(PrimitiveTable::builtin);

/// Immutable mapping from Go primitive (or qualified) type names to Flow primitives.
#[derive(Debug, Clone)]
pub struct PrimitiveTable {
    map: HashMap<&'static str, FlowPrimitive>,
}

impl PrimitiveTable {
    /// The process-wide table. Built on first access, never mutated.
    pub fn global() -> &'static Self {
        &BUILTIN
    }

    fn builtin() -> Self {
        let mut map = HashMap::with_capacity(NUMERIC.len() + 3);
        map.insert("bool", FlowPrimitive::Boolean);
        for name in NUMERIC {
            map.insert(*name, FlowPrimitive::Number);
        }
        map.insert("string", FlowPrimitive::String);
        map.insert("time.Time", FlowPrimitive::String);
        Self { map }
    }

    /// Look up a bare (`int64`) or qualified (`time.Time`) Go type name.
    pub fn lookup(&self, name: &str) -> Option<FlowPrimitive> {
        self.map.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, FlowPrimitive)> + '_ {
        self.map.iter().map(|(name, prim)| (*name, *prim))
    }
}
