//! Scalar casting between subtypes
//!
//! [`cast_scalar`] converts a fill value into the representation of a
//! target subtype. Representable values convert without surprises;
//! values the target cannot hold (a NaN into an integer, a string into
//! a float) fail with [`SpcolError::IncompatibleFillValue`].

use crate::error::{Result, SpcolError};
use crate::scalar::{Scalar, NAT};
use crate::subtype::{Subtype, TypeKind};

/// Convert a scalar into the representation of a target subtype
///
/// Used by dtype updates to re-express the current fill value when the
/// storage subtype changes. Integer conversions are range-checked;
/// floats truncate toward zero when an integer target permits it.
pub fn cast_scalar(value: &Scalar, target: Subtype) -> Result<Scalar> {
    match target.kind() {
        TypeKind::Float => cast_to_float(value),
        TypeKind::SignedInteger | TypeKind::UnsignedInteger => cast_to_int(value, target),
        TypeKind::Bool => cast_to_bool(value),
        TypeKind::Datetime => cast_to_nanos(value, TypeKind::Datetime),
        TypeKind::Timedelta => cast_to_nanos(value, TypeKind::Timedelta),
        // Object holds any scalar unchanged
        TypeKind::Object => Ok(value.clone()),
    }
}

fn cast_to_float(value: &Scalar) -> Result<Scalar> {
    if value.na_kind().is_some() {
        return Ok(Scalar::Float(f64::NAN));
    }
    match value {
        Scalar::Int(v) => Ok(Scalar::Float(*v as f64)),
        Scalar::Float(v) => Ok(Scalar::Float(*v)),
        Scalar::Bool(b) => Ok(Scalar::Float(if *b { 1.0 } else { 0.0 })),
        _ => Err(SpcolError::IncompatibleFillValue),
    }
}

fn cast_to_int(value: &Scalar, target: Subtype) -> Result<Scalar> {
    if value.na_kind().is_some() {
        // Integers have no missing sentinel to express this
        return Err(SpcolError::IncompatibleFillValue);
    }
    let candidate = match value {
        Scalar::Int(v) => *v,
        Scalar::Float(v) => float_to_i64(*v)?,
        Scalar::Bool(b) => *b as i64,
        Scalar::Datetime(v) | Scalar::Timedelta(v) => *v,
        _ => return Err(SpcolError::IncompatibleFillValue),
    };
    if int_fits(candidate, target) {
        Ok(Scalar::Int(candidate))
    } else {
        Err(SpcolError::IncompatibleFillValue)
    }
}

fn cast_to_bool(value: &Scalar) -> Result<Scalar> {
    if value.na_kind().is_some() {
        return Err(SpcolError::IncompatibleFillValue);
    }
    match value {
        Scalar::Bool(b) => Ok(Scalar::Bool(*b)),
        Scalar::Int(v) => Ok(Scalar::Bool(*v != 0)),
        Scalar::Float(v) if v.is_finite() => Ok(Scalar::Bool(*v != 0.0)),
        _ => Err(SpcolError::IncompatibleFillValue),
    }
}

fn cast_to_nanos(value: &Scalar, target_kind: TypeKind) -> Result<Scalar> {
    let wrap = |nanos| match target_kind {
        TypeKind::Datetime => Scalar::Datetime(nanos),
        _ => Scalar::Timedelta(nanos),
    };
    if value.na_kind().is_some() {
        return Ok(wrap(NAT));
    }
    let nanos = match (value, target_kind) {
        (Scalar::Datetime(v), TypeKind::Datetime) => *v,
        (Scalar::Timedelta(v), TypeKind::Timedelta) => *v,
        // Integers reinterpret as nanosecond counts
        (Scalar::Int(v), _) => *v,
        _ => return Err(SpcolError::IncompatibleFillValue),
    };
    Ok(wrap(nanos))
}

/// Truncate a finite float toward zero, rejecting values outside i64
fn float_to_i64(value: f64) -> Result<i64> {
    if !value.is_finite() {
        return Err(SpcolError::IncompatibleFillValue);
    }
    let truncated = value - value % 1.0;
    if truncated >= i64::MIN as f64 && truncated < i64::MAX as f64 {
        Ok(truncated as i64)
    } else {
        Err(SpcolError::IncompatibleFillValue)
    }
}

fn int_fits(value: i64, target: Subtype) -> bool {
    match target {
        Subtype::Int8 => value >= i8::MIN as i64 && value <= i8::MAX as i64,
        Subtype::Int16 => value >= i16::MIN as i64 && value <= i16::MAX as i64,
        Subtype::Int32 => value >= i32::MIN as i64 && value <= i32::MAX as i64,
        Subtype::Int64 => true,
        Subtype::UInt8 => value >= 0 && value <= u8::MAX as i64,
        Subtype::UInt16 => value >= 0 && value <= u16::MAX as i64,
        Subtype::UInt32 => value >= 0 && value <= u32::MAX as i64,
        Subtype::UInt64 => value >= 0,
        _ => false,
    }
}
