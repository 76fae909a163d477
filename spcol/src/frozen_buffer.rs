//! Immutable typed buffer for index metadata
//!
//! A [`FrozenBuffer`] holds fixed-type numeric data, level values or
//! integer codes, behind shared immutable storage. Construction decides
//! between copying the source and adopting it directly; once built, the
//! only route back to mutable data is an explicit copy. Handles are
//! cheap to clone and safe to share across threads.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Index;
use std::sync::Arc;

use spcol_core::{BufferElement, Result, Scalar, SpcolError, Subtype};

/// Tie-break convention for binary search insertion points
///
/// `Left` inserts before equal elements, `Right` after them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchSide {
    /// Insert before any run of equal elements
    Left,
    /// Insert after any run of equal elements
    Right,
}

/// Immutable fixed-type numeric buffer over shared storage
#[derive(Clone)]
pub struct FrozenBuffer<T> {
    data: Arc<[T]>,
}

impl<T: BufferElement> FrozenBuffer<T> {
    /// Create a buffer by copying a slice into a fresh allocation
    pub fn copy_of(data: &[T]) -> Self {
        Self {
            data: Arc::from(data),
        }
    }

    /// Create a buffer by adopting a vector without copying
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data: data.into() }
    }

    /// Create a buffer over already-shared storage without copying
    ///
    /// Safe regardless of other handles to the same allocation: shared
    /// storage contents cannot be mutated through any of them.
    pub fn from_shared(data: Arc<[T]>) -> Self {
        Self { data }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer has no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get an element by position
    pub fn get(&self, index: usize) -> Option<T> {
        self.data.get(index).copied()
    }

    /// Iterate over the elements in order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// View the elements as a read-only slice
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// View the raw element bytes
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    /// The subtype descriptor of the element type
    pub fn subtype(&self) -> Subtype {
        T::subtype()
    }

    /// Create another handle sharing this buffer's storage
    ///
    /// No element data is copied; both handles stay frozen.
    pub fn shallow_copy(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
        }
    }

    /// Copy the elements into an independent, ordinary vector
    ///
    /// This is the sanctioned route to mutable data; the buffer itself
    /// is unaffected.
    pub fn materialize(&self) -> Vec<T> {
        self.data.to_vec()
    }

    /// Reclaim the elements, consuming the buffer
    ///
    /// Succeeds only when this handle is the sole owner of the storage.
    /// A live shallow copy keeps the data frozen and the call fails
    /// with [`SpcolError::ImmutableContainer`].
    pub fn into_inner(self) -> Result<Vec<T>> {
        if Arc::strong_count(&self.data) == 1 {
            Ok(self.data.to_vec())
        } else {
            Err(SpcolError::ImmutableContainer)
        }
    }

    /// Find the insertion index for `value`, assuming ascending order
    ///
    /// Returns the index where inserting `value` keeps the buffer
    /// sorted, with ties broken per `side`. An optional `sorter` is a
    /// permutation of indices that puts the buffer in ascending order,
    /// in which case the returned index refers to that sorted view.
    /// Ordering is total: NaN elements sort after all numbers.
    pub fn search_sorted(&self, value: T, side: SearchSide, sorter: Option<&[usize]>) -> usize {
        self.insertion_point(side, sorter, |element| compare_elements(element, &value))
    }

    /// Find the insertion index for a scalar probe
    ///
    /// The probe is coerced to the element type first, matching how a
    /// typed probe searches. When coercion is not possible the probe is
    /// compared in its original representation via the scalar ordering,
    /// under which non-numeric kinds and missing values sort after all
    /// stored numbers.
    pub fn search_sorted_scalar(
        &self,
        value: &Scalar,
        side: SearchSide,
        sorter: Option<&[usize]>,
    ) -> usize {
        match T::from_scalar(value) {
            Some(typed) => self.search_sorted(typed, side, sorter),
            None => {
                self.insertion_point(side, sorter, |element| element.to_scalar().total_cmp(value))
            }
        }
    }

    /// Binary search skeleton shared by the typed and scalar probes
    ///
    /// `compare` reports the ordering of an element relative to the
    /// probe. With a `sorter`, positions index through the permutation;
    /// the permutation must cover the whole buffer.
    fn insertion_point<F>(&self, side: SearchSide, sorter: Option<&[usize]>, compare: F) -> usize
    where
        F: Fn(&T) -> Ordering,
    {
        if let Some(permutation) = sorter {
            debug_assert_eq!(permutation.len(), self.data.len());
        }
        let mut lo = 0;
        let mut hi = self.data.len();
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let position = sorter.map_or(mid, |permutation| permutation[mid]);
            let ordering = compare(&self.data[position]);
            let descend_right = match side {
                SearchSide::Left => ordering == Ordering::Less,
                SearchSide::Right => ordering != Ordering::Greater,
            };
            if descend_right {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        lo
    }
}

/// Total ordering over elements: partial order first, float semantics
/// as the fallback so NaN lands after all numbers
fn compare_elements<T: BufferElement>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b)
        .unwrap_or_else(|| a.to_f64().total_cmp(&b.to_f64()))
}

impl<T: BufferElement> Index<usize> for FrozenBuffer<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<'a, T> IntoIterator for &'a FrozenBuffer<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: BufferElement> PartialEq for FrozenBuffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data[..] == other.data[..]
    }
}

impl<T: BufferElement> PartialEq<[T]> for FrozenBuffer<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.data[..] == *other
    }
}

impl<T: BufferElement, const N: usize> PartialEq<[T; N]> for FrozenBuffer<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.data[..] == other[..]
    }
}

impl<T: BufferElement + fmt::Debug> fmt::Debug for FrozenBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FrozenBuffer({:?}, dtype='{}')", &self.data[..], T::subtype())
    }
}
