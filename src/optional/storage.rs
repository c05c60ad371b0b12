//! Tagged storage slot behind [`Optional`](super::Optional)
//!
//! A [`Slot`] holds zero or one `T`. Presence and payload live in one
//! `Option<T>`, so "present without a live value" cannot be represented.
//!
//! The slot wraps a plain `Option<T>` rather than a `MaybeUninit<T>` with a
//! hand-written `Drop`: the compiler then derives drop glue only when `T` has
//! some, and the slot is `Copy` exactly when `T` is. Both properties carry over
//! to `Optional<T>`.
//!
//! Every mutating operation runs at most one construction and one destruction
//! of `T`.

use core::mem;

/// Zero-or-one storage for a `T`
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct Slot<T> {
    value: Option<T>,
}

impl<T> Slot<T> {
    #[inline]
    pub(crate) const fn vacant() -> Self {
        Self { value: None }
    }

    #[inline]
    pub(crate) const fn occupied(value: T) -> Self {
        Self { value: Some(value) }
    }

    #[inline]
    pub(crate) const fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Places `value` into a vacant slot.
    ///
    /// Constructing into an occupied slot is a caller bug; the old value would
    /// be dropped without going through [`Slot::destroy`].
    #[inline]
    pub(crate) fn construct(&mut self, value: T) -> &mut T {
        debug_assert!(!self.has_value(), "construct into an occupied slot");
        self.value.insert(value)
    }

    /// Runs `f` and places its result into a vacant slot.
    ///
    /// `f` runs before the slot is touched. If it panics the slot stays vacant.
    #[inline]
    pub(crate) fn construct_with<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        let value = f();
        self.construct(value)
    }

    /// Drops the value if there is one. Idempotent.
    #[inline]
    pub(crate) fn destroy(&mut self) {
        if self.has_value() {
            self.value = None;
        }
    }

    /// Moves the value out, leaving the slot vacant.
    #[inline]
    pub(crate) fn take(&mut self) -> Option<T> {
        self.value.take()
    }

    #[inline]
    pub(crate) fn into_inner(self) -> Option<T> {
        self.value
    }

    #[inline]
    pub(crate) const fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    #[inline]
    pub(crate) fn get_mut(&mut self) -> Option<&mut T> {
        self.value.as_mut()
    }

    /// Stores `value`, assigning through `T` if a value is already present.
    #[inline]
    pub(crate) fn assign(&mut self, value: T) {
        match &mut self.value {
            Some(current) => *current = value,
            None => {
                self.construct(value);
            }
        }
    }

    /// Move-assigns from another slot.
    ///
    /// | self     | source   | effect                  |
    /// |----------|----------|-------------------------|
    /// | occupied | occupied | assign through `T`      |
    /// | occupied | vacant   | destroy                 |
    /// | vacant   | occupied | construct               |
    /// | vacant   | vacant   | nothing                 |
    #[inline]
    pub(crate) fn assign_from(&mut self, source: Slot<T>) {
        match source.value {
            Some(value) => self.assign(value),
            None => self.destroy(),
        }
    }

    /// Exchanges the contents of two slots.
    ///
    /// When only one side is occupied its value is moved into the vacant side
    /// and the source is left vacant.
    #[inline]
    pub(crate) fn swap(&mut self, other: &mut Slot<T>) {
        mem::swap(&mut self.value, &mut other.value);
    }
}

impl<T: Clone> Clone for Slot<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
        }
    }

    /// Copy-assigns from another slot, reusing `T::clone_from` when both sides
    /// hold a value.
    #[inline]
    fn clone_from(&mut self, source: &Self) {
        match &source.value {
            Some(value) => match &mut self.value {
                Some(current) => current.clone_from(value),
                None => {
                    self.construct(value.clone());
                }
            },
            None => self.destroy(),
        }
    }
}

impl<T: Copy> Copy for Slot<T> {}
