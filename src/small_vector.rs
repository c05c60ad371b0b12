//! Growable sequence with inline storage
//!
//! [`SmallVector<T, N, G>`] keeps up to `N` elements inline and moves them to
//! the heap once it outgrows that. The buffer is a [`SmallVec`]; next to it, in
//! a [`CompressedPair`], sits a [`GrowthPolicy`] deciding how far capacity
//! grows when the buffer is full. The default [`Doubling`] policy is zero-sized,
//! so a `SmallVector<T, N>` is exactly as large as a `SmallVec<[T; N]>`.
//!
//! Lookups that can miss return [`Optional`]; positional operations with an
//! index precondition return [`OutOfRange`] instead of panicking.
//!
//! # Example
//!
//! ```rust
//! use vessel::SmallVector;
//!
//! let mut v: SmallVector<i32, 4> = SmallVector::from_list([1, 2, 3]);
//! v.push(4);
//! assert!(!v.spilled());
//!
//! v.push(5);
//! assert!(v.spilled());
//! assert_eq!(v.capacity(), 8);
//!
//! assert_eq!(v.pop().value(), Ok(&5));
//! assert_eq!(v[0], 1);
//! assert!(v.at(10).is_err());
//! ```

use core::fmt;
use core::ops::{Deref, DerefMut};

use smallvec::SmallVec;

use crate::compressed_pair::CompressedPair;
use crate::optional::Optional;
use crate::traits::{IntoOptional, OutOfRange};

// =============================================================================
// Growth Policies
// =============================================================================

/// Decides the capacity to grow to when a [`SmallVector`] is full
pub trait GrowthPolicy {
    /// Returns the new capacity for a buffer of capacity `current` that must
    /// hold at least `required` elements.
    ///
    /// Values below `required` are raised to `required`.
    fn next_capacity(&self, current: usize, required: usize) -> usize;
}

/// Amortized growth: at least double the current capacity
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Doubling;

impl GrowthPolicy for Doubling {
    #[inline]
    fn next_capacity(&self, current: usize, required: usize) -> usize {
        current.saturating_mul(2).max(required)
    }
}

/// Grow only to what is required
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Exact;

impl GrowthPolicy for Exact {
    #[inline]
    fn next_capacity(&self, _current: usize, required: usize) -> usize {
        required
    }
}

// =============================================================================
// SmallVector
// =============================================================================

/// Ordered sequence of `T` with `N` elements of inline storage
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SmallVector<T, const N: usize, G = Doubling> {
    inner: CompressedPair<SmallVec<[T; N]>, G>,
}

impl<T, const N: usize, G: Default> SmallVector<T, N, G> {
    /// Creates an empty vector using the default policy.
    #[inline]
    pub fn new() -> Self {
        Self::with_policy(G::default())
    }

    /// Creates a vector holding the listed elements, in order.
    ///
    /// ```rust
    /// use vessel::SmallVector;
    ///
    /// let v: SmallVector<_, 4> = SmallVector::from_list([1, 2, 3]);
    /// assert_eq!(v.as_slice(), &[1, 2, 3]);
    /// ```
    pub fn from_list<const M: usize>(items: [T; M]) -> Self {
        Self::from_buffer(items.into_iter().collect(), G::default())
    }

    /// Creates a vector whose elements are each built from one argument.
    ///
    /// ```rust
    /// use vessel::SmallVector;
    ///
    /// struct Cell { row: u8, col: u8 }
    ///
    /// impl From<(u8, u8)> for Cell {
    ///     fn from((row, col): (u8, u8)) -> Self {
    ///         Cell { row, col }
    ///     }
    /// }
    ///
    /// let v: SmallVector<Cell, 2> = SmallVector::from_piecewise([(1, 2), (3, 4)]);
    /// assert_eq!((v[1].row, v[1].col), (3, 4));
    /// ```
    pub fn from_piecewise<A, I>(args: I) -> Self
    where
        T: From<A>,
        I: IntoIterator<Item = A>,
    {
        Self::from_buffer(args.into_iter().map(T::from).collect(), G::default())
    }
}

impl<T, const N: usize, G> SmallVector<T, N, G> {
    /// Creates an empty vector that grows according to `policy`.
    #[inline]
    pub fn with_policy(policy: G) -> Self {
        Self::from_buffer(SmallVec::new(), policy)
    }

    #[inline]
    fn from_buffer(buffer: SmallVec<[T; N]>, policy: G) -> Self {
        Self {
            inner: CompressedPair::new(buffer, policy),
        }
    }

    #[inline]
    fn buffer(&self) -> &SmallVec<[T; N]> {
        self.inner.first()
    }

    #[inline]
    fn buffer_mut(&mut self) -> &mut SmallVec<[T; N]> {
        self.inner.first_mut()
    }

    /// The growth policy in use.
    #[inline]
    pub fn policy(&self) -> &G {
        self.inner.second()
    }

    /// Number of elements that fit without a heap allocation.
    #[inline]
    pub const fn inline_capacity() -> usize {
        N
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buffer().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer().is_empty()
    }

    /// Number of elements the vector can hold without reallocating.
    ///
    /// Never less than [`inline_capacity`](Self::inline_capacity).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer().capacity()
    }

    /// Returns `true` once the elements live on the heap.
    #[inline]
    pub fn spilled(&self) -> bool {
        self.buffer().spilled()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.buffer().as_slice()
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.buffer_mut().as_mut_slice()
    }

    /// Removes and returns the last element.
    #[inline]
    pub fn pop(&mut self) -> Optional<T> {
        self.buffer_mut().pop().into()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Optional<&T> {
        self.as_slice().get(index).into()
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Optional<&mut T> {
        self.as_mut_slice().get_mut(index).into()
    }

    #[inline]
    pub fn first(&self) -> Optional<&T> {
        self.as_slice().first().into()
    }

    #[inline]
    pub fn last(&self) -> Optional<&T> {
        self.as_slice().last().into()
    }

    /// Bounds-checked access.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T, OutOfRange> {
        let len = self.len();
        self.as_slice().get(index).ok_or(OutOfRange { index, len })
    }

    /// Bounds-checked mutable access.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, OutOfRange> {
        let len = self.len();
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(OutOfRange { index, len })
    }

    /// Removes the element at `index`, shifting later elements left.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `index >= len()`; the vector is unchanged.
    pub fn remove(&mut self, index: usize) -> Result<T, OutOfRange> {
        let len = self.len();
        if index >= len {
            return Err(OutOfRange { index, len });
        }
        Ok(self.buffer_mut().remove(index))
    }

    /// Shortens the vector to `len` elements. No effect if already shorter.
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        self.buffer_mut().truncate(len);
    }

    #[inline]
    pub fn clear(&mut self) {
        self.buffer_mut().clear();
    }

    /// Moves the elements back inline if they fit, otherwise shrinks the heap
    /// buffer to `len()`.
    #[inline]
    pub fn shrink_to_fit(&mut self) {
        self.buffer_mut().shrink_to_fit();
    }

    /// Converts into a `Vec`, reusing the heap buffer when spilled.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        let (buffer, _) = self.inner.into_parts();
        buffer.into_vec()
    }
}

impl<T, const N: usize, G: GrowthPolicy> SmallVector<T, N, G> {
    /// Makes room for `additional` more elements, asking the policy for the
    /// new capacity.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows `usize` or the allocation fails.
    pub fn reserve(&mut self, additional: usize) {
        let (buffer, policy) = self.inner.parts_mut();
        let len = buffer.len();
        let required = len
            .checked_add(additional)
            .unwrap_or_else(|| panic!("capacity overflow: {len} + {additional}"));
        if required <= buffer.capacity() {
            return;
        }
        let target = policy.next_capacity(buffer.capacity(), required).max(required);
        buffer.reserve_exact(target - len);
    }

    /// Appends `value` at the end.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.reserve(1);
        self.buffer_mut().push(value);
    }

    /// Inserts `value` at `index`, shifting later elements right.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `index > len()`; `value` is dropped and the
    /// vector is unchanged.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), OutOfRange> {
        let len = self.len();
        if index > len {
            return Err(OutOfRange { index, len });
        }
        self.reserve(1);
        self.buffer_mut().insert(index, value);
        Ok(())
    }
}

// =============================================================================
// Trait Impls
// =============================================================================

impl<T, const N: usize, G> Deref for SmallVector<T, N, G> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const N: usize, G> DerefMut for SmallVector<T, N, G> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, const N: usize, G: Default> Default for SmallVector<T, N, G> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, const N: usize, G> fmt::Debug for SmallVector<T, N, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T, const N: usize, G: GrowthPolicy> Extend<T> for SmallVector<T, N, G> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve(lower);
        for value in iter {
            self.push(value);
        }
    }
}

impl<T, const N: usize, G: GrowthPolicy + Default> FromIterator<T> for SmallVector<T, N, G> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::new();
        v.extend(iter);
        v
    }
}

impl<T, const N: usize, G: Default> From<Vec<T>> for SmallVector<T, N, G> {
    #[inline]
    fn from(vec: Vec<T>) -> Self {
        Self::from_buffer(SmallVec::from_vec(vec), G::default())
    }
}

impl<T, const N: usize, G> IntoIterator for SmallVector<T, N, G> {
    type Item = T;
    type IntoIter = smallvec::IntoIter<[T; N]>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        let (buffer, _) = self.inner.into_parts();
        buffer.into_iter()
    }
}

impl<'a, T, const N: usize, G> IntoIterator for &'a SmallVector<T, N, G> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T, const N: usize, G> IntoIterator for &'a mut SmallVector<T, N, G> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T, const N: usize, G> IntoOptional for SmallVector<T, N, G> {
    type Value = Self;

    #[inline]
    fn into_optional(self) -> Optional<Self> {
        Optional::new(self)
    }
}

// =============================================================================
// Tests
// =============================================================================
