//! Optional value wrapper
//!
//! [`Optional<T>`] stores zero or one `T`. What it can do follows from what `T`
//! can do:
//!
//! | `T` is                   | `Optional<T>` is           |
//! |--------------------------|----------------------------|
//! | free of drop glue        | free of drop glue          |
//! | `Clone`                  | `Clone` (incl. `clone_from`) |
//! | `Copy`                   | `Copy`                     |
//! | `PartialEq`/`Eq`         | `PartialEq`/`Eq`           |
//! | `PartialOrd`/`Ord`       | ordered, empty first       |
//! | `Hash` / `Debug`         | `Hash` / `Debug`           |
//!
//! Every accessor except [`Optional::value`], [`Optional::value_mut`] and
//! [`Optional::into_value`] treats an empty optional as ordinary data. Those
//! three return [`BadOptionalAccess`] instead of a value.
//!
//! Operations that take `self` move the value; operations that take `&self`
//! borrow or clone it. The monadic combinators (`then`, `catch_error` and
//! their borrowing variants) live in the `monad` submodule.
//!
//! # Example
//!
//! ```rust
//! use vessel::{Optional, NULLOPT};
//!
//! let mut opt = Optional::new(1);
//! assert_eq!(opt.value(), Ok(&1));
//!
//! opt.emplace(10);
//! assert_eq!(opt.value_or(0), 10);
//!
//! opt = NULLOPT.into();
//! assert!(opt.value().is_err());
//! assert_eq!(opt.value_or(0), 0);
//! ```

mod monad;
pub(crate) mod storage;

use core::fmt;

use crate::tags::Nullopt;
use crate::traits::{BadOptionalAccess, ConvertFrom};
use storage::Slot;

/// Zero or one value of type `T`
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Optional<T> {
    slot: Slot<T>,
}

// =============================================================================
// Construction
// =============================================================================

impl<T> Optional<T> {
    /// Creates an empty optional.
    #[inline]
    pub const fn none() -> Self {
        Self {
            slot: Slot::vacant(),
        }
    }

    /// Creates an optional holding `value`.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self {
            slot: Slot::occupied(value),
        }
    }

    /// Creates an optional holding the value produced by `f`.
    ///
    /// A panic in `f` propagates; no optional is created.
    ///
    /// ```rust
    /// use vessel::Optional;
    ///
    /// struct Point { x: i32, y: f64 }
    ///
    /// let p = Optional::in_place(|| Point { x: 1, y: 2.0 });
    /// assert_eq!(p.value().map(|p| (p.x, p.y)), Ok((1, 2.0)));
    /// ```
    #[inline]
    pub fn in_place<F>(f: F) -> Self
    where
        F: FnOnce() -> T,
    {
        let mut slot = Slot::vacant();
        slot.construct_with(f);
        Self { slot }
    }

    /// Creates an optional holding `value` converted into `T`.
    ///
    /// ```rust
    /// use vessel::Optional;
    ///
    /// let opt = Optional::<f64>::from_value(3_i32);
    /// assert_eq!(opt.value(), Ok(&3.0));
    /// ```
    #[inline]
    pub fn from_value<U>(value: U) -> Self
    where
        U: Into<T>,
    {
        Self::new(value.into())
    }

    /// Converts into an optional of another type, using `V: From<T>`.
    #[inline]
    pub fn convert<V>(self) -> Optional<V>
    where
        V: From<T>,
    {
        Optional::<V>::convert_from(self)
    }
}

// =============================================================================
// Observers
// =============================================================================

impl<T> Optional<T> {
    /// Returns `true` if a value is present.
    #[inline]
    pub const fn has_value(&self) -> bool {
        self.slot.has_value()
    }

    /// Returns a reference to the value.
    ///
    /// # Errors
    ///
    /// Returns [`BadOptionalAccess`] if the optional is empty.
    #[inline]
    pub fn value(&self) -> Result<&T, BadOptionalAccess> {
        self.slot.get().ok_or(BadOptionalAccess)
    }

    /// Returns a mutable reference to the value.
    ///
    /// # Errors
    ///
    /// Returns [`BadOptionalAccess`] if the optional is empty.
    #[inline]
    pub fn value_mut(&mut self) -> Result<&mut T, BadOptionalAccess> {
        self.slot.get_mut().ok_or(BadOptionalAccess)
    }

    /// Moves the value out.
    ///
    /// # Errors
    ///
    /// Returns [`BadOptionalAccess`] if the optional is empty.
    #[inline]
    pub fn into_value(self) -> Result<T, BadOptionalAccess> {
        self.slot.into_inner().ok_or(BadOptionalAccess)
    }

    /// Returns a reference to the value without checking for presence.
    ///
    /// # Safety
    ///
    /// The optional must hold a value.
    #[inline]
    pub unsafe fn get_unchecked(&self) -> &T {
        match self.slot.get() {
            Some(value) => value,
            None => core::hint::unreachable_unchecked(),
        }
    }

    /// Returns a mutable reference to the value without checking for presence.
    ///
    /// # Safety
    ///
    /// The optional must hold a value.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self) -> &mut T {
        match self.slot.get_mut() {
            Some(value) => value,
            None => core::hint::unreachable_unchecked(),
        }
    }

    /// Returns a clone of the value, or `default` converted into `T`.
    #[inline]
    pub fn value_or<U>(&self, default: U) -> T
    where
        T: Clone,
        U: Into<T>,
    {
        match self.slot.get() {
            Some(value) => value.clone(),
            None => default.into(),
        }
    }

    /// Moves the value out, or returns `default` converted into `T`.
    #[inline]
    pub fn into_value_or<U>(self, default: U) -> T
    where
        U: Into<T>,
    {
        match self.slot.into_inner() {
            Some(value) => value,
            None => default.into(),
        }
    }

    /// Borrows the value as `Optional<&T>`.
    #[inline]
    pub fn as_ref(&self) -> Optional<&T> {
        self.slot.get().into()
    }

    /// Borrows the value as `Optional<&mut T>`.
    #[inline]
    pub fn as_mut(&mut self) -> Optional<&mut T> {
        self.slot.get_mut().into()
    }

    /// Borrows the value as a standard `Option<&T>`.
    #[inline]
    pub const fn as_option(&self) -> Option<&T> {
        self.slot.get()
    }

    /// Converts into a standard `Option<T>`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.slot.into_inner()
    }

    /// Iterates over the value, if any.
    #[inline]
    pub fn iter(&self) -> core::option::IntoIter<&T> {
        self.slot.get().into_iter()
    }

    /// Iterates mutably over the value, if any.
    #[inline]
    pub fn iter_mut(&mut self) -> core::option::IntoIter<&mut T> {
        self.slot.get_mut().into_iter()
    }
}

// =============================================================================
// Modifiers
// =============================================================================

impl<T> Optional<T> {
    /// Drops the value, if any. Does nothing on an empty optional.
    #[inline]
    pub fn reset(&mut self) {
        self.slot.destroy();
    }

    /// Replaces the contents with `value` and returns a reference to it.
    #[inline]
    pub fn emplace(&mut self, value: T) -> &mut T {
        self.slot.destroy();
        self.slot.construct(value)
    }

    /// Drops the current value, then stores the value produced by `f`.
    ///
    /// The old value is gone before `f` runs. If `f` panics the optional is
    /// left empty.
    #[inline]
    pub fn emplace_with<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        self.slot.destroy();
        self.slot.construct_with(f)
    }

    /// Stores `value` converted into `T`.
    ///
    /// If a value is present it is assigned over, otherwise one is constructed.
    ///
    /// ```rust
    /// use vessel::Optional;
    ///
    /// let mut opt = Optional::new(3.33);
    /// opt.assign(3_i32);
    /// assert_eq!(opt.value(), Ok(&3.0));
    /// ```
    #[inline]
    pub fn assign<U>(&mut self, value: U)
    where
        U: Into<T>,
    {
        self.slot.assign(value.into());
    }

    /// Converting move assignment from another optional.
    ///
    /// An empty `other` empties `self`.
    #[inline]
    pub fn assign_from<U>(&mut self, other: Optional<U>)
    where
        T: From<U>,
    {
        let converted = Optional::<T>::convert_from(other);
        self.slot.assign_from(converted.slot);
    }

    /// Exchanges the contents of two optionals.
    ///
    /// If only one side holds a value it is moved across and the other side
    /// ends up empty.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        self.slot.swap(&mut other.slot);
    }

    /// Moves the value out into a new optional, leaving `self` empty.
    #[inline]
    pub fn take(&mut self) -> Self {
        self.slot.take().into()
    }

    /// Stores `value` and returns the previous contents.
    #[inline]
    pub fn replace(&mut self, value: T) -> Self {
        let previous = self.take();
        self.slot.construct(value);
        previous
    }
}

/// Exchanges the contents of two optionals. See [`Optional::swap`].
#[inline]
pub fn swap<T>(a: &mut Optional<T>, b: &mut Optional<T>) {
    a.swap(b);
}

// =============================================================================
// Capability-Conditional Trait Impls
// =============================================================================

impl<T: Clone> Clone for Optional<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }

    #[inline]
    fn clone_from(&mut self, source: &Self) {
        self.slot.clone_from(&source.slot);
    }
}

impl<T: Copy> Copy for Optional<T> {}

impl<T> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Self::none()
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.slot.get() {
            Some(value) => f.debug_tuple("Optional").field(value).finish(),
            None => f.write_str("Nullopt"),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<T> From<Nullopt> for Optional<T> {
    #[inline]
    fn from(_: Nullopt) -> Self {
        Self::none()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::new(value),
            None => Self::none(),
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}

impl<T, U> ConvertFrom<Optional<U>> for Optional<T>
where
    T: From<U>,
{
    #[inline]
    fn convert_from(source: Optional<U>) -> Self {
        source.slot.into_inner().map(T::from).into()
    }
}

impl<'a, T, U> ConvertFrom<&'a Optional<U>> for Optional<T>
where
    T: From<U>,
    U: Clone,
{
    #[inline]
    fn convert_from(source: &'a Optional<U>) -> Self {
        source.slot.get().cloned().map(T::from).into()
    }
}

impl<T> PartialEq<Nullopt> for Optional<T> {
    #[inline]
    fn eq(&self, _: &Nullopt) -> bool {
        !self.has_value()
    }
}

impl<T> PartialEq<Optional<T>> for Nullopt {
    #[inline]
    fn eq(&self, other: &Optional<T>) -> bool {
        !other.has_value()
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = core::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = core::option::IntoIter<&'a T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Optional<T> {
    type Item = &'a mut T;
    type IntoIter = core::option::IntoIter<&'a mut T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

// =============================================================================
// Tests
// =============================================================================
