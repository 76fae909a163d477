//! Storage-width coercion for level codes
//!
//! Index builders store level codes, positions into a table of distinct
//! values, at the narrowest signed width that can address the table.
//! This module picks that width and freezes the coerced codes. Code -1
//! is the conventional missing marker and fits every signed width.

use spcol_core::Subtype;

use crate::frozen_buffer::FrozenBuffer;

/// Pick the narrowest signed subtype able to address `categories`
/// distinct values
pub fn index_subtype_for(categories: usize) -> Subtype {
    if categories < i8::MAX as usize {
        Subtype::Int8
    } else if categories < i16::MAX as usize {
        Subtype::Int16
    } else if categories < i32::MAX as usize {
        Subtype::Int32
    } else {
        Subtype::Int64
    }
}

/// Frozen level codes at their coerced storage width
///
/// Codes must lie in `-1..categories`; the chosen width is wide enough
/// for exactly that range.
#[derive(Debug, Clone, PartialEq)]
pub enum CodesBuffer {
    /// Codes stored as 8-bit integers
    I8(FrozenBuffer<i8>),
    /// Codes stored as 16-bit integers
    I16(FrozenBuffer<i16>),
    /// Codes stored as 32-bit integers
    I32(FrozenBuffer<i32>),
    /// Codes stored as 64-bit integers
    I64(FrozenBuffer<i64>),
}

impl CodesBuffer {
    /// Coerce codes to the narrowest width for `categories` and freeze
    pub fn from_codes(codes: &[i64], categories: usize) -> Self {
        match index_subtype_for(categories) {
            Subtype::Int8 => {
                CodesBuffer::I8(FrozenBuffer::from_vec(
                    codes.iter().map(|&code| code as i8).collect(),
                ))
            }
            Subtype::Int16 => {
                CodesBuffer::I16(FrozenBuffer::from_vec(
                    codes.iter().map(|&code| code as i16).collect(),
                ))
            }
            Subtype::Int32 => {
                CodesBuffer::I32(FrozenBuffer::from_vec(
                    codes.iter().map(|&code| code as i32).collect(),
                ))
            }
            _ => CodesBuffer::I64(FrozenBuffer::copy_of(codes)),
        }
    }

    /// Number of codes
    pub fn len(&self) -> usize {
        match self {
            CodesBuffer::I8(buffer) => buffer.len(),
            CodesBuffer::I16(buffer) => buffer.len(),
            CodesBuffer::I32(buffer) => buffer.len(),
            CodesBuffer::I64(buffer) => buffer.len(),
        }
    }

    /// Whether there are no codes
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read a code back at full width
    pub fn get(&self, index: usize) -> Option<i64> {
        match self {
            CodesBuffer::I8(buffer) => buffer.get(index).map(i64::from),
            CodesBuffer::I16(buffer) => buffer.get(index).map(i64::from),
            CodesBuffer::I32(buffer) => buffer.get(index).map(i64::from),
            CodesBuffer::I64(buffer) => buffer.get(index),
        }
    }

    /// The storage subtype the codes were coerced to
    pub fn subtype(&self) -> Subtype {
        match self {
            CodesBuffer::I8(_) => Subtype::Int8,
            CodesBuffer::I16(_) => Subtype::Int16,
            CodesBuffer::I32(_) => Subtype::Int32,
            CodesBuffer::I64(_) => Subtype::Int64,
        }
    }
}
