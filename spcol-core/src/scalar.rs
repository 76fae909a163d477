//! Scalar fill values and missing-value classification
//!
//! A [`Scalar`] is a single fill value carried by a sparse dtype.
//! Equality follows scalar semantics, not structural semantics: missing
//! sentinels (NaN, NaT, null) never compare equal, to themselves or to
//! anything else. Dtype-level equality layers its own missing-value
//! rule on top, see [`crate::dtype::SparseDtype`].

use alloc::string::String;
use core::cmp::Ordering;
use core::hash::Hasher;

/// Sentinel nanosecond count representing not-a-time
///
/// Matches the conventional missing marker for 64-bit timestamp and
/// duration storage: the most negative representable value.
pub const NAT: i64 = i64::MIN;

/// A single scalar value usable as a sparse fill value
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Scalar {
    /// Signed integer
    Int(i64),
    /// Floating point; NaN is the float missing sentinel
    Float(f64),
    /// Boolean
    Bool(bool),
    /// String, stored under the object subtype
    Str(String),
    /// Timestamp in nanoseconds since the epoch; [`NAT`] marks missing
    Datetime(i64),
    /// Duration in nanoseconds; [`NAT`] marks missing
    Timedelta(i64),
    /// The untyped missing sentinel for object data
    Null,
}

/// Families of missing-value sentinels
///
/// Two missing fills are interchangeable only within the same family:
/// a float NaN is never the same fill as a datetime NaT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NaKind {
    /// Floating-point NaN
    Nan,
    /// Timestamp or duration NaT
    NotATime,
    /// Untyped null
    Null,
}

impl Scalar {
    /// Classify this scalar as a missing sentinel, if it is one
    pub fn na_kind(&self) -> Option<NaKind> {
        match self {
            Scalar::Float(v) if v.is_nan() => Some(NaKind::Nan),
            Scalar::Datetime(v) | Scalar::Timedelta(v) if *v == NAT => Some(NaKind::NotATime),
            Scalar::Null => Some(NaKind::Null),
            _ => None,
        }
    }

    /// Total cross-kind ordering used for search fallback comparisons
    ///
    /// Numeric scalars order together by value, then strings, timestamps,
    /// and durations each within their own kind; missing sentinels sort
    /// after everything. Unlike `PartialEq`, this is a total order and
    /// considers NaN equal to itself, in the spirit of `f64::total_cmp`.
    pub fn total_cmp(&self, other: &Scalar) -> Ordering {
        fn group(value: &Scalar) -> u8 {
            if value.na_kind().is_some() {
                return 4;
            }
            match value {
                Scalar::Int(_) | Scalar::Float(_) | Scalar::Bool(_) => 0,
                Scalar::Str(_) => 1,
                Scalar::Datetime(_) => 2,
                Scalar::Timedelta(_) => 3,
                Scalar::Null => 4,
            }
        }

        fn numeric(value: &Scalar) -> f64 {
            match value {
                Scalar::Int(v) => *v as f64,
                Scalar::Float(v) => *v,
                Scalar::Bool(b) => {
                    if *b {
                        1.0
                    } else {
                        0.0
                    }
                }
                _ => f64::NAN,
            }
        }

        match group(self).cmp(&group(other)) {
            Ordering::Equal => {}
            unequal => return unequal,
        }
        match (self, other) {
            (Scalar::Str(a), Scalar::Str(b)) => a.cmp(b),
            (Scalar::Datetime(a), Scalar::Datetime(b)) => a.cmp(b),
            (Scalar::Timedelta(a), Scalar::Timedelta(b)) => a.cmp(b),
            _ if group(self) == 4 => {
                // Both missing: order by family so the sort is stable
                (self.na_kind().unwrap() as u8).cmp(&(other.na_kind().unwrap() as u8))
            }
            _ => numeric(self).total_cmp(&numeric(other)),
        }
    }

    /// Feed a hash of this scalar that is consistent with dtype equality
    ///
    /// Missing sentinels hash by family, so any NaN hashes like any
    /// other NaN. Integers that are exactly representable as floats hash
    /// by their float bits, so `Int(0)` and `Float(0.0)` collide the way
    /// their equality demands; negative zero normalizes to zero.
    pub fn write_hash<H: Hasher>(&self, state: &mut H) {
        if let Some(kind) = self.na_kind() {
            state.write_u8(0xff);
            state.write_u8(kind as u8);
            return;
        }
        match self {
            Scalar::Int(v) => {
                let widened = *v as f64;
                if widened as i64 == *v {
                    state.write_u8(1);
                    state.write_u64(normalize_bits(widened));
                } else {
                    state.write_u8(2);
                    state.write_i64(*v);
                }
            }
            Scalar::Float(v) => {
                state.write_u8(1);
                state.write_u64(normalize_bits(*v));
            }
            Scalar::Bool(b) => {
                state.write_u8(3);
                state.write_u8(*b as u8);
            }
            Scalar::Str(s) => {
                state.write_u8(4);
                state.write(s.as_bytes());
            }
            Scalar::Datetime(v) => {
                state.write_u8(5);
                state.write_i64(*v);
            }
            Scalar::Timedelta(v) => {
                state.write_u8(6);
                state.write_i64(*v);
            }
            Scalar::Null => unreachable!("null is a missing sentinel"),
        }
    }
}

/// Canonical bit pattern for hashing a non-NaN float
fn normalize_bits(value: f64) -> u64 {
    if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        // Missing sentinels never compare equal, themselves included
        if self.na_kind().is_some() || other.na_kind().is_some() {
            return false;
        }
        match (self, other) {
            (Scalar::Int(a), Scalar::Int(b)) => a == b,
            (Scalar::Float(a), Scalar::Float(b)) => a == b,
            (Scalar::Int(a), Scalar::Float(b)) | (Scalar::Float(b), Scalar::Int(a)) => {
                (*a as f64) == *b
            }
            (Scalar::Bool(a), Scalar::Bool(b)) => a == b,
            (Scalar::Str(a), Scalar::Str(b)) => a == b,
            (Scalar::Datetime(a), Scalar::Datetime(b)) => a == b,
            (Scalar::Timedelta(a), Scalar::Timedelta(b)) => a == b,
            _ => false,
        }
    }
}

impl core::fmt::Display for Scalar {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Scalar::Int(v) => write!(f, "{v}"),
            Scalar::Float(v) => {
                if v.is_nan() {
                    write!(f, "nan")
                } else if v.is_infinite() {
                    write!(f, "{}", if *v > 0.0 { "inf" } else { "-inf" })
                } else if *v % 1.0 == 0.0 {
                    // Keep the trailing .0 so a float fill never reads as an int
                    write!(f, "{v:.1}")
                } else {
                    write!(f, "{v}")
                }
            }
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Str(s) => write!(f, "{s}"),
            Scalar::Datetime(v) if *v == NAT => write!(f, "NaT"),
            Scalar::Datetime(v) => write!(f, "{v}"),
            Scalar::Timedelta(v) if *v == NAT => write!(f, "NaT"),
            Scalar::Timedelta(v) => write!(f, "{v}"),
            Scalar::Null => write!(f, "null"),
        }
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Str(String::from(value))
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Str(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimal FNV-1a hasher so hash tests stay no_std
    struct Fnv(u64);

    impl Hasher for Fnv {
        fn finish(&self) -> u64 {
            self.0
        }

        fn write(&mut self, bytes: &[u8]) {
            for &byte in bytes {
                self.0 ^= byte as u64;
                self.0 = self.0.wrapping_mul(16777619);
            }
        }
    }

    fn hash_of(value: &Scalar) -> u64 {
        let mut hasher = Fnv(2166136261);
        value.write_hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_na_kind() {
        assert_eq!(Scalar::Float(f64::NAN).na_kind(), Some(NaKind::Nan));
        assert_eq!(Scalar::Datetime(NAT).na_kind(), Some(NaKind::NotATime));
        assert_eq!(Scalar::Timedelta(NAT).na_kind(), Some(NaKind::NotATime));
        assert_eq!(Scalar::Null.na_kind(), Some(NaKind::Null));

        assert_eq!(Scalar::Float(0.0).na_kind(), None);
        assert_eq!(Scalar::Datetime(0).na_kind(), None);
        assert_eq!(Scalar::Int(0).na_kind(), None);
    }

    #[test]
    fn test_missing_never_equal() {
        assert_ne!(Scalar::Float(f64::NAN), Scalar::Float(f64::NAN));
        assert_ne!(Scalar::Datetime(NAT), Scalar::Datetime(NAT));
        assert_ne!(Scalar::Null, Scalar::Null);
    }

    #[test]
    fn test_value_equality() {
        assert_eq!(Scalar::Int(5), Scalar::Int(5));
        assert_eq!(Scalar::Int(0), Scalar::Float(0.0));
        assert_eq!(Scalar::Float(0.0), Scalar::Int(0));
        assert_eq!(Scalar::Float(0.0), Scalar::Float(-0.0));
        assert_eq!(Scalar::Str("a".into()), Scalar::Str("a".into()));

        assert_ne!(Scalar::Int(1), Scalar::Bool(true));
        assert_ne!(Scalar::Datetime(0), Scalar::Timedelta(0));
        assert_ne!(Scalar::Int(1), Scalar::Int(2));
    }

    #[test]
    fn test_hash_consistency() {
        // Equal scalars must hash equal
        assert_eq!(hash_of(&Scalar::Int(0)), hash_of(&Scalar::Float(0.0)));
        assert_eq!(
            hash_of(&Scalar::Float(0.0)),
            hash_of(&Scalar::Float(-0.0))
        );
        // Missing sentinels hash by family
        assert_eq!(
            hash_of(&Scalar::Float(f64::NAN)),
            hash_of(&Scalar::Float(-f64::NAN))
        );
        assert_eq!(
            hash_of(&Scalar::Datetime(NAT)),
            hash_of(&Scalar::Timedelta(NAT))
        );
        assert_ne!(
            hash_of(&Scalar::Float(f64::NAN)),
            hash_of(&Scalar::Datetime(NAT))
        );
    }

    #[test]
    fn test_total_cmp() {
        assert_eq!(
            Scalar::Int(1).total_cmp(&Scalar::Float(1.5)),
            Ordering::Less
        );
        assert_eq!(
            Scalar::Float(2.0).total_cmp(&Scalar::Int(2)),
            Ordering::Equal
        );
        assert_eq!(
            Scalar::Str("b".into()).total_cmp(&Scalar::Str("a".into())),
            Ordering::Greater
        );
        // Missing sorts after everything
        assert_eq!(
            Scalar::Float(f64::NAN).total_cmp(&Scalar::Int(i64::MAX)),
            Ordering::Greater
        );
        // Kinds are segregated
        assert_eq!(
            Scalar::Int(100).total_cmp(&Scalar::Str("0".into())),
            Ordering::Less
        );
    }

    #[test]
    fn test_display() {
        use alloc::format;

        assert_eq!(format!("{}", Scalar::Int(0)), "0");
        assert_eq!(format!("{}", Scalar::Float(0.0)), "0.0");
        assert_eq!(format!("{}", Scalar::Float(2.5)), "2.5");
        assert_eq!(format!("{}", Scalar::Float(f64::NAN)), "nan");
        assert_eq!(format!("{}", Scalar::Bool(false)), "false");
        assert_eq!(format!("{}", Scalar::Datetime(NAT)), "NaT");
        assert_eq!(format!("{}", Scalar::Null), "null");
        assert_eq!(format!("{}", Scalar::Str("level".into())), "level");
    }
}
