//! faxc-util - Core Utilities and Foundation Types
//!
//! This crate provides the foundation types shared by every phase of the
//! front end: typed indices, source positions (`Span`), string interning
//! (`Symbol`), an opaque type-handle interner (`types::TypeInterner`), and
//! the diagnostic/error reporting infrastructure (`diagnostic`, `error`).
//!
//! Nothing in this crate depends on a specific source language; it exists
//! so that `faxc-lex` and `faxc-par` can share one definition of "where in
//! the file is this" and "how do we report that something went wrong".

pub mod diagnostic;
pub mod error;
pub mod index_vec;
pub mod span;
pub mod symbol;
pub mod types;

pub use diagnostic::{Diagnostic, DiagnosticCode, Handler, Level};
pub use index_vec::{Idx, IndexVec};
pub use span::{FileId, Span};
pub use symbol::Symbol;
pub use types::{TypeHandle, TypeInterner};

/// Macro to define a newtype index easily.
#[macro_export]
macro_rules! define_idx {
    ($name:ident) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub u32);

        impl $crate::Idx for $name {
            fn from_usize(idx: usize) -> Self {
                assert!(idx <= u32::MAX as usize);
                $name(idx as u32)
            }

            fn index(self) -> usize {
                self.0 as usize
            }
        }
    };
}

pub use rustc_hash::FxHashMap;
pub use rustc_hash::FxHashSet;
