#![no_std]

//! Spcol Core - Sparse Column Dtype Definitions
//!
//! This crate provides the type identity layer for sparse column data:
//! dtype descriptors pairing a storage subtype with a fill value, the
//! scalar model those fill values live in, missing-value rules, scalar
//! casting, and the explicit registry that resolves dtype strings.
//!
//! No I/O and no physical storage live here; the sparse array and the
//! index builder are collaborators that consume these definitions.

extern crate alloc;

use alloc::string::String;

pub mod cast;
pub mod dtype;
pub mod element;
pub mod error;
pub mod missing;
pub mod parsing;
pub mod registry;
pub mod scalar;
pub mod subtype;

pub use cast::*;
pub use dtype::*;
pub use element::*;
pub use error::*;
pub use missing::*;
pub use parsing::*;
pub use registry::*;
pub use scalar::*;
pub use subtype::*;

/// Core dtype trait for registry-facing descriptors
///
/// This trait provides the minimal interface generic dtype registries
/// program against, regardless of the concrete descriptor type.
pub trait ColumnDtype {
    /// Canonical display name for the dtype
    fn name(&self) -> String;

    /// Single-letter category tag of the storage subtype
    fn kind(&self) -> TypeKind;

    /// Whether the subtype is numeric rather than object
    fn is_numeric(&self) -> bool;

    /// Whether the subtype is boolean
    fn is_boolean(&self) -> bool;
}
