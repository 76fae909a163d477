//! Parsing of sparse dtype strings
//!
//! This module provides the pure grammar layer for dtype strings with
//! no knowledge of subtype names; resolution of the extracted parts is
//! the registry's job.
//!
//! Recognized forms:
//!
//! ```text
//! Sparse                      -> float64 subtype, default fill
//! Sparse[<subtype>]           -> named subtype, default fill
//! Sparse[<subtype>, <fill>]   -> named subtype, spelled-out fill
//! ```

use crate::error::{Result, SpcolError};

/// Raw parts extracted from a sparse dtype string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SparseSpecParts<'a> {
    /// Subtype name text, unresolved
    pub subtype: &'a str,
    /// Fill value text, if the string spelled one out
    pub fill_value: Option<&'a str>,
}

/// Split a sparse dtype string into subtype and fill value texts
///
/// The bare form `"Sparse"` implies the float64 subtype. The separator
/// between subtype and fill value is exactly `", "`. Anything that does
/// not match the grammar fails with [`SpcolError::InvalidDtypeString`].
pub fn parse_sparse_spec(spec: &str) -> Result<SparseSpecParts<'_>> {
    if spec == "Sparse" {
        return Ok(SparseSpecParts {
            subtype: "float64",
            fill_value: None,
        });
    }

    let inner = spec
        .strip_prefix("Sparse[")
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or(SpcolError::InvalidDtypeString)?;

    match inner.find(',') {
        None => {
            if inner.is_empty() {
                return Err(SpcolError::InvalidDtypeString);
            }
            Ok(SparseSpecParts {
                subtype: inner,
                fill_value: None,
            })
        }
        Some(comma) => {
            let subtype = &inner[..comma];
            let fill_value = inner[comma + 1..]
                .strip_prefix(' ')
                .ok_or(SpcolError::InvalidDtypeString)?;
            if subtype.is_empty() || fill_value.is_empty() {
                return Err(SpcolError::InvalidDtypeString);
            }
            Ok(SparseSpecParts {
                subtype,
                fill_value: Some(fill_value),
            })
        }
    }
}
