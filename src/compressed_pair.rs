//! Pair with free storage for zero-sized members
//!
//! A [`CompressedPair<A, B>`] owns one `A` and one `B`. A zero-sized member
//! (a stateless policy, marker or allocator) adds nothing to the size of the
//! pair, so a pair of an `i32` and an empty type is exactly as large as the
//! `i32`.
//!
//! ```rust
//! use std::mem::size_of;
//! use vessel::CompressedPair;
//!
//! struct Stateless;
//!
//! let pair = CompressedPair::new(42_u32, Stateless);
//! assert_eq!(*pair.first(), 42);
//! assert_eq!(size_of::<CompressedPair<u32, Stateless>>(), size_of::<u32>());
//! ```

use crate::optional::Optional;
use crate::traits::IntoOptional;

/// Two values stored together, where either may be zero-sized
///
/// Both members are constructed together and dropped together, `first` before
/// `second`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CompressedPair<A, B> {
    first: A,
    second: B,
}

impl<A, B> CompressedPair<A, B> {
    /// Creates a pair from its two members.
    #[inline]
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    #[inline]
    pub const fn first(&self) -> &A {
        &self.first
    }

    #[inline]
    pub fn first_mut(&mut self) -> &mut A {
        &mut self.first
    }

    #[inline]
    pub const fn second(&self) -> &B {
        &self.second
    }

    #[inline]
    pub fn second_mut(&mut self) -> &mut B {
        &mut self.second
    }

    /// Borrows both members mutably at once.
    #[inline]
    pub fn parts_mut(&mut self) -> (&mut A, &mut B) {
        (&mut self.first, &mut self.second)
    }

    /// Splits the pair into its members.
    #[inline]
    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A, B> From<(A, B)> for CompressedPair<A, B> {
    #[inline]
    fn from((first, second): (A, B)) -> Self {
        Self::new(first, second)
    }
}

impl<A, B> From<CompressedPair<A, B>> for (A, B) {
    #[inline]
    fn from(pair: CompressedPair<A, B>) -> Self {
        pair.into_parts()
    }
}

impl<A, B> IntoOptional for CompressedPair<A, B> {
    type Value = Self;

    #[inline]
    fn into_optional(self) -> Optional<Self> {
        Optional::new(self)
    }
}
