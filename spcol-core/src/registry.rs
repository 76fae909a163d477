//! Explicit type-descriptor registry
//!
//! Resolution of dtype strings goes through a [`TypeRegistry`] value
//! rather than process-wide state: callers construct one, optionally
//! extend it with their own aliases, and pass it wherever strings are
//! resolved. [`TypeRegistry::with_builtins`] is the defined starting
//! point covering the canonical names and common shorthands.

use crate::dtype::{DtypeSpec, SparseDtype};
use crate::error::{Result, SpcolError};
use crate::subtype::Subtype;
use alloc::string::String;
use hashbrown::HashMap;

/// Built-in alias table: canonical names plus shorthands
///
/// String-like names all collapse to the object subtype; there is no
/// dedicated string storage type.
const BUILTIN_ALIASES: &[(&str, Subtype)] = &[
    ("bool", Subtype::Bool),
    ("boolean", Subtype::Bool),
    ("int8", Subtype::Int8),
    ("i8", Subtype::Int8),
    ("int16", Subtype::Int16),
    ("i16", Subtype::Int16),
    ("int32", Subtype::Int32),
    ("i32", Subtype::Int32),
    ("int64", Subtype::Int64),
    ("i64", Subtype::Int64),
    ("int", Subtype::Int64),
    ("uint8", Subtype::UInt8),
    ("u8", Subtype::UInt8),
    ("uint16", Subtype::UInt16),
    ("u16", Subtype::UInt16),
    ("uint32", Subtype::UInt32),
    ("u32", Subtype::UInt32),
    ("uint64", Subtype::UInt64),
    ("u64", Subtype::UInt64),
    ("uint", Subtype::UInt64),
    ("float32", Subtype::Float32),
    ("f32", Subtype::Float32),
    ("float64", Subtype::Float64),
    ("f64", Subtype::Float64),
    ("float", Subtype::Float64),
    ("double", Subtype::Float64),
    ("object", Subtype::Object),
    ("O", Subtype::Object),
    ("str", Subtype::Object),
    ("string", Subtype::Object),
    ("utf8", Subtype::Object),
    ("datetime64[ns]", Subtype::Datetime64),
    ("datetime64", Subtype::Datetime64),
    ("datetime", Subtype::Datetime64),
    ("M8[ns]", Subtype::Datetime64),
    ("timedelta64[ns]", Subtype::Timedelta64),
    ("timedelta64", Subtype::Timedelta64),
    ("timedelta", Subtype::Timedelta64),
    ("m8[ns]", Subtype::Timedelta64),
];

/// Registry mapping type names to canonical subtype descriptors
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    aliases: HashMap<String, Subtype>,
}

impl TypeRegistry {
    /// Create an empty registry with no names registered
    pub fn new() -> Self {
        Self {
            aliases: HashMap::new(),
        }
    }

    /// Create a registry preloaded with the built-in aliases
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for &(name, subtype) in BUILTIN_ALIASES {
            registry.register_alias(name, subtype);
        }
        registry
    }

    /// Register a name for a subtype, replacing any previous binding
    pub fn register_alias(&mut self, name: &str, subtype: Subtype) {
        self.aliases.insert(String::from(name), subtype);
    }

    /// Number of registered names
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    /// Whether no names are registered
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Resolve a name to its canonical subtype descriptor
    pub fn resolve_subtype(&self, spec: &str) -> Result<Subtype> {
        self.aliases
            .get(spec)
            .copied()
            .ok_or(SpcolError::InvalidDtypeString)
    }

    /// Resolve a dtype string to either a subtype or a full sparse dtype
    ///
    /// Strings led by `Sparse` parse through the sparse dtype grammar;
    /// anything else is looked up as a subtype name.
    pub fn resolve(&self, spec: &str) -> Result<DtypeSpec> {
        if spec.starts_with("Sparse") {
            SparseDtype::from_string_with(self, spec).map(DtypeSpec::Sparse)
        } else {
            self.resolve_subtype(spec).map(DtypeSpec::Subtype)
        }
    }
}
