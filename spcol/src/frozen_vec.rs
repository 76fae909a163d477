//! Immutable ordered sequence for index metadata
//!
//! A [`FrozenVec`] holds structural metadata, level names and the like,
//! that must never change behind an index's back. The wrapped storage
//! is never exposed mutably: every structural operation returns a new
//! sequence and leaves the receiver untouched, which also makes the
//! type safe to hash and to share across threads.

use std::hash::{Hash, Hasher};
use std::ops::{Bound, Index, Mul, RangeBounds};

/// Immutable ordered sequence of opaque elements
#[derive(Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FrozenVec<T> {
    items: Vec<T>,
}

impl<T> FrozenVec<T> {
    /// Create a frozen sequence, taking ownership of the elements
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the sequence has no elements
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get an element by position
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// First element, if any
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Last element, if any
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Iterate over the elements in order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// View the elements as a read-only slice
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: PartialEq> FrozenVec<T> {
    /// Whether any element equals the given one
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }
}

impl<T: Clone> FrozenVec<T> {
    /// Create a frozen sequence by copying a slice
    pub fn from_slice(items: &[T]) -> Self {
        Self {
            items: items.to_vec(),
        }
    }

    /// Copy the elements into an ordinary vector
    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }

    /// Concatenate, returning a new sequence with `other` appended
    pub fn union(&self, other: &[T]) -> Self {
        let mut items = Vec::with_capacity(self.items.len() + other.len());
        items.extend_from_slice(&self.items);
        items.extend_from_slice(other);
        Self { items }
    }

    /// Extract a subsequence of the same kind
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> Self {
        let start = match range.start_bound() {
            Bound::Included(&n) => n,
            Bound::Excluded(&n) => n + 1,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&n) => n + 1,
            Bound::Excluded(&n) => n,
            Bound::Unbounded => self.items.len(),
        };
        Self {
            items: self.items[start..end].to_vec(),
        }
    }

    /// Return a new sequence with the elements repeated `n` times
    pub fn repeat(&self, n: usize) -> Self {
        let mut items = Vec::with_capacity(self.items.len() * n);
        for _ in 0..n {
            items.extend_from_slice(&self.items);
        }
        Self { items }
    }
}

impl<T: Clone + PartialEq> FrozenVec<T> {
    /// Remove every element that appears anywhere in `other`
    ///
    /// Order of the surviving elements is preserved. Membership is
    /// set-like: one occurrence in `other` removes all matching
    /// occurrences here.
    pub fn difference(&self, other: &[T]) -> Self {
        let items = self
            .items
            .iter()
            .filter(|item| !other.contains(*item))
            .cloned()
            .collect();
        Self { items }
    }
}

impl<T> From<Vec<T>> for FrozenVec<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> FromIterator<T> for FrozenVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Index<usize> for FrozenVec<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<'a, T> IntoIterator for &'a FrozenVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Clone> Mul<usize> for &FrozenVec<T> {
    type Output = FrozenVec<T>;

    fn mul(self, rhs: usize) -> FrozenVec<T> {
        self.repeat(rhs)
    }
}

impl<T: Clone> Mul<usize> for FrozenVec<T> {
    type Output = FrozenVec<T>;

    fn mul(self, rhs: usize) -> FrozenVec<T> {
        self.repeat(rhs)
    }
}

impl<T: PartialEq> PartialEq for FrozenVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for FrozenVec<T> {}

impl<T: PartialEq> PartialEq<[T]> for FrozenVec<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.items == other
    }
}

impl<T: PartialEq> PartialEq<&[T]> for FrozenVec<T> {
    fn eq(&self, other: &&[T]) -> bool {
        self.items == *other
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for FrozenVec<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        &self.items == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for FrozenVec<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.items == other
    }
}

impl<T: Hash> Hash for FrozenVec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.items.hash(state);
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for FrozenVec<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FrozenVec({:?})", self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_union() {
        let names = FrozenVec::new(vec![1, 2]);
        let combined = names.union(&[3, 4]);

        assert_eq!(combined, [1, 2, 3, 4]);
        // The receiver is untouched
        assert_eq!(names, [1, 2]);
    }

    #[test]
    fn test_difference() {
        let names = FrozenVec::new(vec![1, 2, 3]);
        assert_eq!(names.difference(&[2]), [1, 3]);
        assert_eq!(names, [1, 2, 3]);

        // Every matching occurrence goes, duplicates in other are moot
        let repeated = FrozenVec::new(vec![1, 2, 1, 3]);
        assert_eq!(repeated.difference(&[1, 1]), [2, 3]);

        // Removing nothing returns an identical sequence
        assert_eq!(names.difference(&[]), [1, 2, 3]);
    }

    #[test]
    fn test_indexing_and_slicing() {
        let names = FrozenVec::new(vec!["a", "b", "c"]);

        assert_eq!(names[1], "b");
        assert_eq!(names.get(2), Some(&"c"));
        assert_eq!(names.get(3), None);

        // Slicing yields the same kind, not a plain slice
        let sliced = names.slice(1..);
        assert_eq!(sliced, ["b", "c"]);
        assert_eq!(names.slice(..2), ["a", "b"]);
        assert_eq!(names.slice(..), ["a", "b", "c"]);
    }

    #[test]
    fn test_equality_against_plain_sequences() {
        let names = FrozenVec::new(vec![1, 2, 3]);

        assert_eq!(names, FrozenVec::new(vec![1, 2, 3]));
        assert_eq!(names, vec![1, 2, 3]);
        assert_eq!(names, [1, 2, 3]);
        assert_ne!(names, [3, 2, 1]);
        assert_ne!(names, [1, 2]);
    }

    #[test]
    fn test_repetition() {
        let pair = FrozenVec::new(vec![1, 2]);

        assert_eq!(&pair * 2, [1, 2, 1, 2]);
        assert_eq!(pair.repeat(0), []);
        assert_eq!(pair.repeat(1), [1, 2]);
        // The receiver is untouched
        assert_eq!(pair, [1, 2]);
    }

    #[test]
    fn test_usable_as_map_key() {
        let mut seen = HashSet::new();
        seen.insert(FrozenVec::new(vec![1, 2]));

        assert!(seen.contains(&FrozenVec::new(vec![1, 2])));
        assert!(!seen.contains(&FrozenVec::new(vec![2, 1])));
    }

    #[test]
    fn test_hash_follows_equality() {
        let a = FrozenVec::new(vec![1, 2, 3]);
        let b = FrozenVec::from_slice(&[1, 2, 3]);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_iteration_and_collect() {
        let names: FrozenVec<i32> = (1..=3).collect();
        assert_eq!(names, [1, 2, 3]);

        let doubled: Vec<i32> = names.iter().map(|v| v * 2).collect();
        assert_eq!(doubled, vec![2, 4, 6]);
    }
}
