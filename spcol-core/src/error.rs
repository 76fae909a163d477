//! Error types for dtype and frozen container operations

/// Errors that can occur during dtype construction, parsing, casting,
/// and frozen container access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpcolError {
    /// Fill value is not a scalar usable with the subtype
    InvalidFillValue,
    /// Dtype string does not match the recognized grammar
    InvalidDtypeString,
    /// Dtype string encodes a non-default fill value
    UnsupportedFillValue,
    /// Fill value cannot be represented in the target subtype
    IncompatibleFillValue,
    /// Attempted to reclaim or mutate a frozen container with live aliases
    ImmutableContainer,
}

impl SpcolError {
    /// Get the broad category for this error
    pub const fn category(self) -> ErrorCategory {
        match self {
            SpcolError::InvalidDtypeString | SpcolError::UnsupportedFillValue => {
                ErrorCategory::Parse
            }
            SpcolError::InvalidFillValue | SpcolError::IncompatibleFillValue => {
                ErrorCategory::Value
            }
            SpcolError::ImmutableContainer => ErrorCategory::Container,
        }
    }
}

impl core::fmt::Display for SpcolError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            SpcolError::InvalidFillValue => "fill value is not usable with the subtype",
            SpcolError::InvalidDtypeString => "dtype string does not match the grammar",
            SpcolError::UnsupportedFillValue => {
                "dtype string encodes a non-default fill value"
            }
            SpcolError::IncompatibleFillValue => {
                "fill value cannot be represented in the target subtype"
            }
            SpcolError::ImmutableContainer => "container is frozen",
        };
        write!(f, "{msg}")
    }
}

/// Broad error categories for coarse-grained handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// String form could not be interpreted
    Parse,
    /// A scalar value violated a type rule
    Value,
    /// A frozen container rejected an operation
    Container,
}

/// Result type for dtype and container operations
pub type Result<T> = core::result::Result<T, SpcolError>;
