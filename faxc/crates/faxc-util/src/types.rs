//! Explicit type-handle interner.
//!
//! The original compiler this front end is modeled on resolves built-in
//! type names (`bool`, `i32`, `address`, ...) through a process-wide type
//! registry singleton. Process-wide mutable state makes two independent
//! parses interfere with each other, so this crate lifts the registry to
//! an explicit value: a [`TypeInterner`] constructed once by the driver and
//! borrowed by the parser for the duration of one parse.
//!
//! The parser treats a [`TypeHandle`] purely as an opaque identity; it
//! never inspects what a handle "means" (that is semantic analysis's job).

use rustc_hash::FxHashMap;

/// An opaque, interned identity for a type name.
///
/// Two handles compare equal if and only if they were produced by interning
/// the same name through the same [`TypeInterner`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeHandle(u32);

impl TypeHandle {
    /// Raw index, exposed for debugging/serialization only.
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

/// Every built-in type name this language recognizes as a reserved token,
/// plus `Self`, the synthetic type given to a method's leading `self`
/// parameter (which carries no explicit type annotation in source).
pub const BUILTIN_TYPE_NAMES: &[&str] = &[
    "address", "bool", "num", "str", "i8", "i16", "i32", "i64", "u8", "u16", "u32", "u64", "Self",
];

/// Interns type names into [`TypeHandle`]s.
///
/// Unlike [`crate::symbol::Symbol`], this is not a global singleton: the
/// driver owns one instance per compilation and threads a `&TypeInterner`
/// into the parser, so two independent parses never share mutable state.
pub struct TypeInterner {
    names: Vec<String>,
    by_name: FxHashMap<String, TypeHandle>,
}

impl TypeInterner {
    /// Create an interner pre-populated with every built-in type name, so
    /// built-in type handles are available without a prior `intern` call.
    pub fn new() -> Self {
        let mut interner = Self {
            names: Vec::new(),
            by_name: FxHashMap::default(),
        };
        for name in BUILTIN_TYPE_NAMES {
            interner.intern(name);
        }
        interner
    }

    /// Intern a type name, returning its handle. Interning the same name
    /// twice returns the same handle.
    pub fn intern(&mut self, name: &str) -> TypeHandle {
        if let Some(handle) = self.by_name.get(name) {
            return *handle;
        }
        let handle = TypeHandle(self.names.len() as u32);
        self.names.push(name.to_string());
        self.by_name.insert(name.to_string(), handle);
        handle
    }

    /// Look up a handle for an already-interned name without inserting.
    pub fn get(&self, name: &str) -> Option<TypeHandle> {
        self.by_name.get(name).copied()
    }

    /// Recover the name behind a handle.
    pub fn resolve(&self, handle: TypeHandle) -> &str {
        &self.names[handle.0 as usize]
    }
}

impl Default for TypeInterner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_same_name_returns_same_handle() {
        let mut interner = TypeInterner::new();
        let a = interner.intern("i32");
        let b = interner.intern("i32");
        assert_eq!(a, b);
    }

    #[test]
    fn builtins_are_preinterned() {
        let interner = TypeInterner::new();
        for name in BUILTIN_TYPE_NAMES {
            assert!(interner.get(name).is_some(), "missing builtin {name}");
        }
    }

    #[test]
    fn resolve_round_trips() {
        let mut interner = TypeInterner::new();
        let handle = interner.intern("address");
        assert_eq!(interner.resolve(handle), "address");
    }

    #[test]
    fn distinct_names_get_distinct_handles() {
        let mut interner = TypeInterner::new();
        let a = interner.intern("bool");
        let b = interner.intern("str");
        assert_ne!(a, b);
    }
}
