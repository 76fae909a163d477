//! Primitive element type descriptors for sparse column storage
//!
//! A [`Subtype`] names the type of the values actually stored in a
//! sparse column (the non-fill entries). String-like types have no
//! dedicated subtype; the registry collapses them to [`Subtype::Object`].

use crate::scalar::Scalar;

/// Primitive element types supported as sparse column subtypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Subtype {
    /// Boolean
    Bool,
    /// 8-bit signed integer
    Int8,
    /// 16-bit signed integer
    Int16,
    /// 32-bit signed integer
    Int32,
    /// 64-bit signed integer
    Int64,
    /// 8-bit unsigned integer
    UInt8,
    /// 16-bit unsigned integer
    UInt16,
    /// 32-bit unsigned integer
    UInt32,
    /// 64-bit unsigned integer
    UInt64,
    /// 32-bit floating point
    Float32,
    /// 64-bit floating point
    Float64,
    /// Nanosecond-precision timestamp
    Datetime64,
    /// Nanosecond-precision duration
    Timedelta64,
    /// Opaque boxed values, including strings
    Object,
}

impl Subtype {
    /// Get the canonical display name for this subtype
    pub const fn name(self) -> &'static str {
        match self {
            Subtype::Bool => "bool",
            Subtype::Int8 => "int8",
            Subtype::Int16 => "int16",
            Subtype::Int32 => "int32",
            Subtype::Int64 => "int64",
            Subtype::UInt8 => "uint8",
            Subtype::UInt16 => "uint16",
            Subtype::UInt32 => "uint32",
            Subtype::UInt64 => "uint64",
            Subtype::Float32 => "float32",
            Subtype::Float64 => "float64",
            Subtype::Datetime64 => "datetime64[ns]",
            Subtype::Timedelta64 => "timedelta64[ns]",
            Subtype::Object => "object",
        }
    }

    /// Get the single-letter category tag for this subtype
    pub const fn kind(self) -> TypeKind {
        match self {
            Subtype::Bool => TypeKind::Bool,
            Subtype::Int8 | Subtype::Int16 | Subtype::Int32 | Subtype::Int64 => {
                TypeKind::SignedInteger
            }
            Subtype::UInt8 | Subtype::UInt16 | Subtype::UInt32 | Subtype::UInt64 => {
                TypeKind::UnsignedInteger
            }
            Subtype::Float32 | Subtype::Float64 => TypeKind::Float,
            Subtype::Datetime64 => TypeKind::Datetime,
            Subtype::Timedelta64 => TypeKind::Timedelta,
            Subtype::Object => TypeKind::Object,
        }
    }

    /// Get the fixed element width in bytes, if the subtype has one
    pub const fn size_bytes(self) -> Option<usize> {
        match self {
            Subtype::Bool | Subtype::Int8 | Subtype::UInt8 => Some(1),
            Subtype::Int16 | Subtype::UInt16 => Some(2),
            Subtype::Int32 | Subtype::UInt32 | Subtype::Float32 => Some(4),
            Subtype::Int64
            | Subtype::UInt64
            | Subtype::Float64
            | Subtype::Datetime64
            | Subtype::Timedelta64 => Some(8),
            Subtype::Object => None,
        }
    }

    /// Check whether a scalar can serve as a fill value for this subtype
    ///
    /// Object accepts every scalar, every subtype accepts every missing
    /// sentinel, and otherwise the scalar kind must match the subtype
    /// family. This is deliberately loose: an integer column may carry a
    /// NaN fill, which is how missing-heavy integer data is represented.
    pub fn accepts(self, value: &Scalar) -> bool {
        if self == Subtype::Object || value.na_kind().is_some() {
            return true;
        }
        match self.kind() {
            TypeKind::Bool
            | TypeKind::SignedInteger
            | TypeKind::UnsignedInteger
            | TypeKind::Float => matches!(
                value,
                Scalar::Int(_) | Scalar::Float(_) | Scalar::Bool(_)
            ),
            TypeKind::Datetime => matches!(value, Scalar::Datetime(_)),
            TypeKind::Timedelta => matches!(value, Scalar::Timedelta(_)),
            TypeKind::Object => true,
        }
    }
}

impl core::fmt::Display for Subtype {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Single-letter category tags mirrored from the subtype
///
/// The sparse array collaborator keys off this tag when choosing a
/// physical encoding; this crate only reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeKind {
    /// Boolean (`b`)
    Bool,
    /// Signed integer (`i`)
    SignedInteger,
    /// Unsigned integer (`u`)
    UnsignedInteger,
    /// Floating point (`f`)
    Float,
    /// Timestamp (`M`)
    Datetime,
    /// Duration (`m`)
    Timedelta,
    /// Opaque values (`O`)
    Object,
}

impl TypeKind {
    /// Convert to the single-letter tag
    pub const fn as_char(self) -> char {
        match self {
            TypeKind::Bool => 'b',
            TypeKind::SignedInteger => 'i',
            TypeKind::UnsignedInteger => 'u',
            TypeKind::Float => 'f',
            TypeKind::Datetime => 'M',
            TypeKind::Timedelta => 'm',
            TypeKind::Object => 'O',
        }
    }
}

impl core::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
