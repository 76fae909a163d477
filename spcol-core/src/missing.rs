//! Missing-value detection and subtype default fills
//!
//! Each subtype has one designated missing sentinel; this module owns
//! the default-fill table and the comparison rule that treats two
//! missing fills as interchangeable only within the same family.

use crate::scalar::{Scalar, NAT};
use crate::subtype::{Subtype, TypeKind};

/// Check whether a scalar is a missing sentinel for its type family
pub fn is_na(value: &Scalar) -> bool {
    value.na_kind().is_some()
}

/// Get the default fill value for a subtype
///
/// Floats default to NaN, integers to 0, booleans to false,
/// timestamps and durations to NaT, and object data to null.
pub fn na_value_for(subtype: Subtype) -> Scalar {
    match subtype.kind() {
        TypeKind::Float => Scalar::Float(f64::NAN),
        TypeKind::SignedInteger | TypeKind::UnsignedInteger => Scalar::Int(0),
        TypeKind::Bool => Scalar::Bool(false),
        TypeKind::Datetime => Scalar::Datetime(NAT),
        TypeKind::Timedelta => Scalar::Timedelta(NAT),
        TypeKind::Object => Scalar::Null,
    }
}

/// Check whether two fill values are missing sentinels of the same family
///
/// This is the branch that makes dtype equality work: missing scalars do
/// not compare equal to themselves, so equality of NA fills is decided
/// here by family instead. A float NaN matches another float NaN but
/// never a datetime NaT.
pub fn na_values_match(a: &Scalar, b: &Scalar) -> bool {
    match (a.na_kind(), b.na_kind()) {
        (Some(left), Some(right)) => left == right,
        _ => false,
    }
}
