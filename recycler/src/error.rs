use alloc::string::String;

use crate::ViewKind;

/// Errors surfaced by list, registry and holder operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A positional operation was given an index outside the list bounds.
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Two descriptors in one batch (or a new descriptor and a live one) share a diffing id.
    #[error("duplicate diffing id: {0}")]
    DuplicateIdentity(String),

    /// A view kind was never registered, or was pruned while still referenced.
    #[error("unknown view kind: {0}")]
    UnknownViewKind(ViewKind),

    /// A holder or binder was paired with an item of a different concrete type.
    #[error("view kind {kind} mismatch: expected {expected}, found {found}")]
    KindMismatch {
        kind: ViewKind,
        expected: &'static str,
        found: &'static str,
    },
}

/// Result type for list operations.
pub type Result<T> = core::result::Result<T, Error>;
