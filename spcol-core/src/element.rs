//! Buffer element type constraints
//!
//! This module defines the trait that constrains what types can be
//! stored in typed frozen buffers. All element types must be:
//! - Copy: movable without allocation
//! - PartialEq + PartialOrd: comparable for search
//! - Pod: reinterpretable as plain bytes

use crate::scalar::Scalar;
use crate::subtype::Subtype;

/// Trait for types that can be stored as typed buffer elements
pub trait BufferElement: Copy + PartialEq + PartialOrd + bytemuck::Pod {
    /// Get the subtype descriptor for this element type
    fn subtype() -> Subtype;

    /// Convert from f64 for generic construction
    fn from_f64(value: f64) -> Self;

    /// Convert to f64 for generic comparison
    fn to_f64(self) -> f64;

    /// Coerce a scalar into this element type
    ///
    /// Conversions follow storage semantics: floats truncate toward
    /// zero into integer elements, booleans widen to 0/1. Returns
    /// `None` when the scalar kind or range cannot be represented,
    /// letting callers fall back to comparing scalars directly.
    fn from_scalar(value: &Scalar) -> Option<Self>;

    /// Lift this element into the scalar model
    fn to_scalar(self) -> Scalar;
}

/// Truncate a finite float toward zero if it lands in [lo, hi]
fn clip_float(value: f64, lo: f64, hi: f64) -> Option<f64> {
    if !value.is_finite() {
        return None;
    }
    let truncated = value - value % 1.0;
    if truncated >= lo && truncated <= hi {
        Some(truncated)
    } else {
        None
    }
}

impl BufferElement for i8 {
    fn subtype() -> Subtype {
        Subtype::Int8
    }

    fn from_f64(value: f64) -> Self {
        value as i8
    }

    fn to_f64(self) -> f64 {
        self as f64
    }

    fn from_scalar(value: &Scalar) -> Option<Self> {
        match value {
            Scalar::Int(v) => i8::try_from(*v).ok(),
            Scalar::Float(v) => {
                clip_float(*v, i8::MIN as f64, i8::MAX as f64).map(|t| t as i8)
            }
            Scalar::Bool(b) => Some(*b as i8),
            _ => None,
        }
    }

    fn to_scalar(self) -> Scalar {
        Scalar::Int(self as i64)
    }
}

impl BufferElement for i16 {
    fn subtype() -> Subtype {
        Subtype::Int16
    }

    fn from_f64(value: f64) -> Self {
        value as i16
    }

    fn to_f64(self) -> f64 {
        self as f64
    }

    fn from_scalar(value: &Scalar) -> Option<Self> {
        match value {
            Scalar::Int(v) => i16::try_from(*v).ok(),
            Scalar::Float(v) => {
                clip_float(*v, i16::MIN as f64, i16::MAX as f64).map(|t| t as i16)
            }
            Scalar::Bool(b) => Some(*b as i16),
            _ => None,
        }
    }

    fn to_scalar(self) -> Scalar {
        Scalar::Int(self as i64)
    }
}

impl BufferElement for i32 {
    fn subtype() -> Subtype {
        Subtype::Int32
    }

    fn from_f64(value: f64) -> Self {
        value as i32
    }

    fn to_f64(self) -> f64 {
        self as f64
    }

    fn from_scalar(value: &Scalar) -> Option<Self> {
        match value {
            Scalar::Int(v) => i32::try_from(*v).ok(),
            Scalar::Float(v) => {
                clip_float(*v, i32::MIN as f64, i32::MAX as f64).map(|t| t as i32)
            }
            Scalar::Bool(b) => Some(*b as i32),
            _ => None,
        }
    }

    fn to_scalar(self) -> Scalar {
        Scalar::Int(self as i64)
    }
}

impl BufferElement for i64 {
    fn subtype() -> Subtype {
        Subtype::Int64
    }

    fn from_f64(value: f64) -> Self {
        value as i64
    }

    fn to_f64(self) -> f64 {
        self as f64
    }

    fn from_scalar(value: &Scalar) -> Option<Self> {
        match value {
            Scalar::Int(v) => Some(*v),
            Scalar::Float(v) => {
                // Stay within the exactly-representable integer range
                clip_float(*v, -9_007_199_254_740_992.0, 9_007_199_254_740_992.0)
                    .map(|t| t as i64)
            }
            Scalar::Bool(b) => Some(*b as i64),
            _ => None,
        }
    }

    fn to_scalar(self) -> Scalar {
        Scalar::Int(self)
    }
}

impl BufferElement for u32 {
    fn subtype() -> Subtype {
        Subtype::UInt32
    }

    fn from_f64(value: f64) -> Self {
        value as u32
    }

    fn to_f64(self) -> f64 {
        self as f64
    }

    fn from_scalar(value: &Scalar) -> Option<Self> {
        match value {
            Scalar::Int(v) => u32::try_from(*v).ok(),
            Scalar::Float(v) => {
                clip_float(*v, 0.0, u32::MAX as f64).map(|t| t as u32)
            }
            Scalar::Bool(b) => Some(*b as u32),
            _ => None,
        }
    }

    fn to_scalar(self) -> Scalar {
        Scalar::Int(self as i64)
    }
}

impl BufferElement for u64 {
    fn subtype() -> Subtype {
        Subtype::UInt64
    }

    fn from_f64(value: f64) -> Self {
        value as u64
    }

    fn to_f64(self) -> f64 {
        self as f64
    }

    fn from_scalar(value: &Scalar) -> Option<Self> {
        match value {
            Scalar::Int(v) => u64::try_from(*v).ok(),
            Scalar::Float(v) => {
                clip_float(*v, 0.0, 9_007_199_254_740_992.0).map(|t| t as u64)
            }
            Scalar::Bool(b) => Some(*b as u64),
            _ => None,
        }
    }

    fn to_scalar(self) -> Scalar {
        match i64::try_from(self) {
            Ok(v) => Scalar::Int(v),
            Err(_) => Scalar::Float(self as f64),
        }
    }
}

impl BufferElement for f32 {
    fn subtype() -> Subtype {
        Subtype::Float32
    }

    fn from_f64(value: f64) -> Self {
        value as f32
    }

    fn to_f64(self) -> f64 {
        self as f64
    }

    fn from_scalar(value: &Scalar) -> Option<Self> {
        match value {
            Scalar::Int(v) => Some(*v as f32),
            Scalar::Float(v) => Some(*v as f32),
            Scalar::Bool(b) => Some(*b as u8 as f32),
            _ => None,
        }
    }

    fn to_scalar(self) -> Scalar {
        Scalar::Float(self as f64)
    }
}

impl BufferElement for f64 {
    fn subtype() -> Subtype {
        Subtype::Float64
    }

    fn from_f64(value: f64) -> Self {
        value
    }

    fn to_f64(self) -> f64 {
        self
    }

    fn from_scalar(value: &Scalar) -> Option<Self> {
        match value {
            Scalar::Int(v) => Some(*v as f64),
            Scalar::Float(v) => Some(*v),
            Scalar::Bool(b) => Some(*b as u8 as f64),
            _ => None,
        }
    }

    fn to_scalar(self) -> Scalar {
        Scalar::Float(self)
    }
}
