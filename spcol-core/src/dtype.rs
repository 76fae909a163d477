//! The sparse column dtype descriptor
//!
//! A [`SparseDtype`] pairs a storage [`Subtype`] with the fill value
//! that every unstored position implicitly carries. Instances are
//! immutable, hashable, and usable as registry keys; equality treats
//! missing fill values by family instead of by IEEE comparison.

use crate::cast::cast_scalar;
use crate::error::{Result, SpcolError};
use crate::missing::{is_na, na_value_for, na_values_match};
use crate::parsing::parse_sparse_spec;
use crate::registry::TypeRegistry;
use crate::scalar::Scalar;
use crate::subtype::{Subtype, TypeKind};
use crate::ColumnDtype;
use alloc::format;
use alloc::string::String;
use core::fmt;
use core::hash::{Hash, Hasher};

/// Identity of the array implementation a dtype is paired with
///
/// The physical array lives outside this crate; a dtype only names it
/// so registries can route construction to the right implementation.
/// The association is fixed, not configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArrayTypeId(&'static str);

impl ArrayTypeId {
    /// The sparse column array paired with [`SparseDtype`]
    pub const SPARSE_COLUMN: ArrayTypeId = ArrayTypeId("spcol.SparseColumn");

    /// Get the qualified type name
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

/// A dtype argument: either a bare subtype or a full sparse dtype
///
/// Constructors and [`SparseDtype::update_dtype`] accept both forms,
/// mirroring how callers hand descriptors around.
#[derive(Debug, Clone, PartialEq)]
pub enum DtypeSpec {
    /// A bare storage subtype
    Subtype(Subtype),
    /// An existing sparse dtype
    Sparse(SparseDtype),
}

impl From<Subtype> for DtypeSpec {
    fn from(subtype: Subtype) -> Self {
        DtypeSpec::Subtype(subtype)
    }
}

impl From<SparseDtype> for DtypeSpec {
    fn from(dtype: SparseDtype) -> Self {
        DtypeSpec::Sparse(dtype)
    }
}

impl From<&SparseDtype> for DtypeSpec {
    fn from(dtype: &SparseDtype) -> Self {
        DtypeSpec::Sparse(dtype.clone())
    }
}

/// Descriptor of a sparse column: storage subtype plus fill value
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SparseDtype {
    subtype: Subtype,
    fill_value: Scalar,
}

impl SparseDtype {
    /// Create a dtype from a subtype or existing dtype, with an optional
    /// explicit fill value
    ///
    /// Passing an existing sparse dtype reuses its subtype, and its fill
    /// value too when none is given; a sparse dtype is never nested as a
    /// subtype. Without an explicit fill value the subtype's default is
    /// derived per [`na_value_for`]. A fill value the subtype cannot
    /// carry fails with [`SpcolError::InvalidFillValue`].
    pub fn new(dtype: impl Into<DtypeSpec>, fill_value: Option<Scalar>) -> Result<Self> {
        let (subtype, fill_value) = match dtype.into() {
            DtypeSpec::Sparse(existing) => {
                let fill = fill_value.or(Some(existing.fill_value));
                (existing.subtype, fill)
            }
            DtypeSpec::Subtype(subtype) => (subtype, fill_value),
        };
        let fill_value = fill_value.unwrap_or_else(|| na_value_for(subtype));
        if !subtype.accepts(&fill_value) {
            return Err(SpcolError::InvalidFillValue);
        }
        Ok(Self {
            subtype,
            fill_value,
        })
    }

    /// Create a dtype carrying the subtype's default fill value
    pub fn from_subtype(subtype: Subtype) -> Self {
        Self {
            subtype,
            fill_value: na_value_for(subtype),
        }
    }

    /// The storage subtype of the non-fill values
    pub fn subtype(&self) -> Subtype {
        self.subtype
    }

    /// The scalar implicitly carried by every unstored position
    pub fn fill_value(&self) -> &Scalar {
        &self.fill_value
    }

    /// Whether the fill value is a missing sentinel for its family
    pub fn is_na_fill_value(&self) -> bool {
        is_na(&self.fill_value)
    }

    /// Single-letter category tag of the storage subtype
    pub fn kind(&self) -> TypeKind {
        self.subtype.kind()
    }

    /// Whether the subtype is numeric rather than object
    pub fn is_numeric(&self) -> bool {
        self.subtype != Subtype::Object
    }

    /// Whether the subtype is boolean
    pub fn is_boolean(&self) -> bool {
        self.subtype.kind() == TypeKind::Bool
    }

    /// Canonical display string, `Sparse[<subtype>, <fill_value>]`
    ///
    /// Only names of dtypes with default fill values can be parsed back
    /// by [`SparseDtype::from_string`]; non-default fills have no string
    /// form.
    pub fn name(&self) -> String {
        format!("Sparse[{}, {}]", self.subtype, self.fill_value)
    }

    /// Identity of the paired array implementation
    pub fn construct_array_type(&self) -> ArrayTypeId {
        ArrayTypeId::SPARSE_COLUMN
    }

    /// Parse a dtype string against a specific type registry
    ///
    /// The grammar is described at [`crate::parsing::parse_sparse_spec`].
    /// A spelled-out fill value must textually equal the formatted
    /// default fill for the parsed subtype; anything else fails with
    /// [`SpcolError::UnsupportedFillValue`]. This makes parsing the
    /// inverse of [`SparseDtype::name`] exactly for default-fill dtypes.
    pub fn from_string_with(registry: &TypeRegistry, string: &str) -> Result<Self> {
        let parts = parse_sparse_spec(string)?;
        let subtype = registry.resolve_subtype(parts.subtype)?;
        let result = Self::from_subtype(subtype);
        if let Some(fill_text) = parts.fill_value {
            if format!("{}", result.fill_value) != fill_text {
                return Err(SpcolError::UnsupportedFillValue);
            }
        }
        Ok(result)
    }

    /// Parse a dtype string using the built-in type registry
    pub fn from_string(string: &str) -> Result<Self> {
        Self::from_string_with(&TypeRegistry::with_builtins(), string)
    }

    /// Re-express this dtype with a new subtype
    ///
    /// A full sparse dtype argument is returned unchanged. A bare
    /// subtype converts the current fill value into the new subtype's
    /// representation via [`cast_scalar`]; an unrepresentable fill
    /// fails with [`SpcolError::IncompatibleFillValue`].
    pub fn update_dtype(&self, dtype: impl Into<DtypeSpec>) -> Result<SparseDtype> {
        match dtype.into() {
            DtypeSpec::Sparse(full) => Ok(full),
            DtypeSpec::Subtype(subtype) => {
                let fill_value = cast_scalar(&self.fill_value, subtype)?;
                Ok(SparseDtype {
                    subtype,
                    fill_value,
                })
            }
        }
    }
}

impl Default for SparseDtype {
    fn default() -> Self {
        Self::from_subtype(Subtype::Float64)
    }
}

impl PartialEq for SparseDtype {
    fn eq(&self, other: &Self) -> bool {
        if self.subtype != other.subtype {
            return false;
        }
        // Missing fills are interchangeable within a family even though
        // the scalars themselves never compare equal
        na_values_match(&self.fill_value, &other.fill_value)
            || self.fill_value == other.fill_value
    }
}

impl Eq for SparseDtype {}

impl Hash for SparseDtype {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.subtype.hash(state);
        self.fill_value.write_hash(state);
        self.is_na_fill_value().hash(state);
    }
}

impl PartialEq<&str> for SparseDtype {
    fn eq(&self, other: &&str) -> bool {
        SparseDtype::from_string(other).map_or(false, |parsed| parsed == *self)
    }
}

impl fmt::Display for SparseDtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sparse[{}, {}]", self.subtype, self.fill_value)
    }
}

impl ColumnDtype for SparseDtype {
    fn name(&self) -> String {
        SparseDtype::name(self)
    }

    fn kind(&self) -> TypeKind {
        SparseDtype::kind(self)
    }

    fn is_numeric(&self) -> bool {
        SparseDtype::is_numeric(self)
    }

    fn is_boolean(&self) -> bool {
        SparseDtype::is_boolean(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::NAT;

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

    fn hash_of(dtype: &SparseDtype) -> u64 {
        let mut hasher = Fnv(2166136261);
        dtype.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_default_fill_values() {
        let dtype = SparseDtype::from_subtype(Subtype::Float64);
        assert!(dtype.is_na_fill_value());

        let dtype = SparseDtype::from_subtype(Subtype::Int64);
        assert_eq!(dtype.fill_value(), &Scalar::Int(0));

        let dtype = SparseDtype::from_subtype(Subtype::Bool);
        assert_eq!(dtype.fill_value(), &Scalar::Bool(false));

        assert_eq!(SparseDtype::default(), SparseDtype::from_subtype(Subtype::Float64));
    }

    #[test]
    fn test_existing_dtype_is_unwrapped() {
        let base = SparseDtype::new(Subtype::Int64, Some(Scalar::Int(3))).unwrap();

        // Subtype and fill value are reused
        let rewrapped = SparseDtype::new(base.clone(), None).unwrap();
        assert_eq!(rewrapped, base);

        // An explicit fill value wins
        let refilled = SparseDtype::new(base, Some(Scalar::Int(7))).unwrap();
        assert_eq!(refilled.fill_value(), &Scalar::Int(7));
        assert_eq!(refilled.subtype(), Subtype::Int64);
    }

    #[test]
    fn test_rejects_mismatched_fill() {
        assert_eq!(
            SparseDtype::new(Subtype::Int64, Some(Scalar::Str("a".into()))),
            Err(SpcolError::InvalidFillValue)
        );
        assert_eq!(
            SparseDtype::new(Subtype::Datetime64, Some(Scalar::Int(5))),
            Err(SpcolError::InvalidFillValue)
        );
    }

    #[test]
    fn test_equality() {
        let a = SparseDtype::new(Subtype::Float64, Some(Scalar::Float(f64::NAN))).unwrap();
        let b = SparseDtype::new(Subtype::Float64, Some(Scalar::Float(f64::NAN))).unwrap();
        assert_eq!(a, b);

        // Missing fills of different families differ even when both "missing"
        let nat = SparseDtype::new(Subtype::Datetime64, Some(Scalar::Datetime(NAT))).unwrap();
        assert_ne!(a, nat);

        // Value fills compare by value across numeric kinds
        let int_fill = SparseDtype::new(Subtype::Float64, Some(Scalar::Int(0))).unwrap();
        let float_fill = SparseDtype::new(Subtype::Float64, Some(Scalar::Float(0.0))).unwrap();
        assert_eq!(int_fill, float_fill);

        // NaN fill and zero fill are distinct
        let zero = SparseDtype::new(Subtype::Float64, Some(Scalar::Float(0.0))).unwrap();
        assert_ne!(a, zero);

        // Different subtypes differ regardless of fill
        assert_ne!(
            SparseDtype::from_subtype(Subtype::Int32),
            SparseDtype::from_subtype(Subtype::Int64)
        );
    }

    #[test]
    fn test_hash_follows_equality() {
        let a = SparseDtype::new(Subtype::Float64, Some(Scalar::Float(f64::NAN))).unwrap();
        let b = SparseDtype::new(Subtype::Float64, Some(Scalar::Float(f64::NAN))).unwrap();
        assert_eq!(hash_of(&a), hash_of(&b));

        let int_fill = SparseDtype::new(Subtype::Float64, Some(Scalar::Int(0))).unwrap();
        let float_fill = SparseDtype::new(Subtype::Float64, Some(Scalar::Float(0.0))).unwrap();
        assert_eq!(hash_of(&int_fill), hash_of(&float_fill));

        // NaN fill and zero fill must not collide
        assert_ne!(hash_of(&a), hash_of(&float_fill));
    }

    #[test]
    fn test_name_round_trip() {
        let dtype = SparseDtype::from_subtype(Subtype::Int64);
        assert_eq!(dtype.name(), "Sparse[int64, 0]");
        assert_eq!(SparseDtype::from_string(&dtype.name()), Ok(dtype));

        let dtype = SparseDtype::from_subtype(Subtype::Float64);
        assert_eq!(dtype.name(), "Sparse[float64, nan]");
        assert_eq!(SparseDtype::from_string(&dtype.name()), Ok(dtype));

        let dtype = SparseDtype::from_subtype(Subtype::Datetime64);
        assert_eq!(dtype.name(), "Sparse[datetime64[ns], NaT]");
        assert_eq!(SparseDtype::from_string(&dtype.name()), Ok(dtype));
    }

    #[test]
    fn test_from_string_forms() {
        // Bare form implies float64 with its default fill
        let dtype = SparseDtype::from_string("Sparse").unwrap();
        assert_eq!(dtype.subtype(), Subtype::Float64);
        assert!(dtype.is_na_fill_value());

        // Subtype-only form takes the subtype default
        let dtype = SparseDtype::from_string("Sparse[bool]").unwrap();
        assert_eq!(dtype.fill_value(), &Scalar::Bool(false));

        // Aliases resolve through the registry
        let dtype = SparseDtype::from_string("Sparse[int]").unwrap();
        assert_eq!(dtype.subtype(), Subtype::Int64);
    }

    #[test]
    fn test_from_string_rejects_non_default_fill() {
        // Default fill for int64 is 0, so 1 has no string form
        assert_eq!(
            SparseDtype::from_string("Sparse[int64, 1]"),
            Err(SpcolError::UnsupportedFillValue)
        );
        assert_eq!(
            SparseDtype::from_string("Sparse[float64, 0.0]"),
            Err(SpcolError::UnsupportedFillValue)
        );

        // Garbage stays a parse failure, not a fill value failure
        assert_eq!(
            SparseDtype::from_string("Sparse[notatype]"),
            Err(SpcolError::InvalidDtypeString)
        );
        assert_eq!(
            SparseDtype::from_string("int64"),
            Err(SpcolError::InvalidDtypeString)
        );
    }

    #[test]
    fn test_update_dtype() {
        let dtype = SparseDtype::new(Subtype::Int64, Some(Scalar::Int(0))).unwrap();
        let updated = dtype.update_dtype(Subtype::Float64).unwrap();
        assert_eq!(updated.subtype(), Subtype::Float64);
        assert_eq!(updated.fill_value(), &Scalar::Float(0.0));
        assert_eq!(updated.name(), "Sparse[float64, 0.0]");

        // A full dtype argument passes through untouched
        let replacement = SparseDtype::new(Subtype::Float64, Some(Scalar::Float(f64::NAN))).unwrap();
        let updated = dtype.update_dtype(replacement.clone()).unwrap();
        assert_eq!(updated, replacement);

        // NaN cannot be re-expressed in an integer subtype
        let nan_fill = SparseDtype::from_subtype(Subtype::Float64);
        assert_eq!(
            nan_fill.update_dtype(Subtype::Int64),
            Err(SpcolError::IncompatibleFillValue)
        );
    }

    #[test]
    fn test_predicates() {
        assert!(SparseDtype::from_subtype(Subtype::Int64).is_numeric());
        assert!(SparseDtype::from_subtype(Subtype::Datetime64).is_numeric());
        assert!(!SparseDtype::from_subtype(Subtype::Object).is_numeric());

        assert!(SparseDtype::from_subtype(Subtype::Bool).is_boolean());
        assert!(!SparseDtype::from_subtype(Subtype::Int64).is_boolean());

        assert_eq!(SparseDtype::from_subtype(Subtype::Int64).kind(), TypeKind::SignedInteger);
    }

    #[test]
    fn test_string_equality() {
        let dtype = SparseDtype::from_subtype(Subtype::Int64);
        assert_eq!(dtype, "Sparse[int64]");
        assert_eq!(dtype, "Sparse[int64, 0]");
        assert_ne!(dtype, "Sparse[int32]");
        assert_ne!(dtype, "not a dtype");
    }

    #[test]
    fn test_array_type_identity() {
        let dtype = SparseDtype::default();
        assert_eq!(dtype.construct_array_type(), ArrayTypeId::SPARSE_COLUMN);
    }
}
