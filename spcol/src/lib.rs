//! Spcol - Sparse Column Dtypes and Frozen Index Metadata
//!
//! This library provides the type identity layer for sparse column data
//! together with the immutable containers index builders hand out as
//! read-only metadata.
//!
//! ## Architecture
//!
//! Spcol follows a clean definition/implementation separation:
//!
//! - **spcol-core**: Pure dtype, scalar, and registry definitions (no_std, no I/O)
//! - **spcol**: Frozen containers and level-code coercion built on them
//!
//! ## Quick Start
//!
//! ```rust
//! use spcol::{FrozenBuffer, FrozenVec, Scalar, SearchSide, SparseDtype, Subtype};
//!
//! fn example() -> spcol::Result<()> {
//!     // Describe a sparse integer column filled with zeros
//!     let dtype = SparseDtype::new(Subtype::Int64, Some(Scalar::Int(0)))?;
//!     assert_eq!(dtype.name(), "Sparse[int64, 0]");
//!
//!     // Re-express it as floats; the fill value converts along
//!     let as_float = dtype.update_dtype(Subtype::Float64)?;
//!     assert_eq!(as_float.fill_value(), &Scalar::Float(0.0));
//!
//!     // Frozen metadata: structural operations return new instances
//!     let names = FrozenVec::new(vec!["year", "region"]);
//!     assert_eq!(names.union(&["city"]), ["year", "region", "city"]);
//!
//!     let levels = FrozenBuffer::from_vec(vec![1i64, 3, 5]);
//!     assert_eq!(levels.search_sorted(3, SearchSide::Left, None), 1);
//!     Ok(())
//! }
//! example().unwrap();
//! ```
//!
//! ## Features
//!
//! - **Dtype identity**: Hashable descriptors with missing-aware equality
//! - **String round trips**: `Sparse[int64, 0]` parses back for default fills
//! - **Frozen containers**: Immutability enforced by construction, not checks
//! - **Zero-copy sharing**: Buffer handles alias one storage allocation

// Re-export core definitions
pub use spcol_core::{
    // Dtype descriptors
    ArrayTypeId, ColumnDtype, DtypeSpec, SparseDtype, Subtype, TypeKind,
    // Scalar model
    NaKind, Scalar, NAT,
    // Missing-value rules
    is_na, na_value_for, na_values_match,
    // Scalar casting
    cast_scalar,
    // String resolution
    parse_sparse_spec, SparseSpecParts, TypeRegistry,
    // Buffer elements
    BufferElement,
    // Error handling
    ErrorCategory, Result, SpcolError,
};

// Implementation modules
pub mod codes;
pub mod frozen_buffer;
pub mod frozen_vec;

// Public exports
pub use codes::{index_subtype_for, CodesBuffer};
pub use frozen_buffer::{FrozenBuffer, SearchSide};
pub use frozen_vec::FrozenVec;
