//! Monadic combinators for [`Optional`]
//!
//! `then` transforms a present value and short-circuits on an empty one.
//! `catch_error` runs only on an empty optional and can supply a replacement.
//! Both come in a consuming form and in borrowing forms:
//!
//! | consuming          | `&self`              | `&mut self`   |
//! |--------------------|----------------------|---------------|
//! | `then`             | `then_ref`           | `then_mut`    |
//! | `catch_error`      | `catch_error_ref`    |               |
//!
//! The closure's return type decides between wrapping and flattening, see
//! [`IntoOptional`] and [`Recover`].
//!
//! ```rust
//! use vessel::Optional;
//!
//! fn add_ten(v: i32) -> Optional<i32> {
//!     Optional::new(v + 10)
//! }
//!
//! let result = Optional::new(1)
//!     .then(|v| Optional::new(v + 5))
//!     .then(|v| v + 1)
//!     .then(add_ten)
//!     .then(|v| v + 3);
//! assert_eq!(result.value(), Ok(&20));
//!
//! let recovered = Optional::<i32>::none()
//!     .then(add_ten)
//!     .catch_error(|| 99);
//! assert_eq!(recovered.value(), Ok(&99));
//! ```

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use super::Optional;
use crate::traits::{IntoOptional, Recover};

// =============================================================================
// Combinators
// =============================================================================

impl<T> Optional<T> {
    /// Applies `f` to the value, consuming the optional.
    ///
    /// An empty optional yields an empty result and `f` is never called.
    ///
    /// `f` may return any type implementing [`IntoOptional`]. Optionals are
    /// flattened; other values are wrapped. A closure returning one of your
    /// own types needs that type registered with
    /// [`impl_into_optional!`](crate::impl_into_optional), or it can return
    /// `Optional::new(..)` itself. The same applies to an unconstrained
    /// generic `T`.
    ///
    /// ```rust
    /// use vessel::{impl_into_optional, Optional};
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Celsius(f64);
    ///
    /// impl_into_optional!(Celsius);
    ///
    /// let reading = Optional::new(21.5).then(Celsius);
    /// assert_eq!(reading, Optional::new(Celsius(21.5)));
    ///
    /// fn keep<T>(opt: Optional<T>) -> Optional<T> {
    ///     opt.then(Optional::new)
    /// }
    /// assert_eq!(keep(Optional::new(3)), Optional::new(3));
    /// ```
    #[inline]
    pub fn then<R, F>(self, f: F) -> Optional<R::Value>
    where
        F: FnOnce(T) -> R,
        R: IntoOptional,
    {
        match self.into_option() {
            Some(value) => f(value).into_optional(),
            None => Optional::none(),
        }
    }

    /// Applies `f` to a shared reference to the value.
    ///
    /// ```rust
    /// use vessel::Optional;
    ///
    /// let name = Optional::new(String::from("ferris"));
    /// assert_eq!(name.then_ref(|s| s.len()), Optional::new(6));
    /// assert_eq!(name.then_ref(|s| s.as_str()), Optional::new("ferris"));
    /// ```
    #[inline]
    pub fn then_ref<'a, R, F>(&'a self, f: F) -> Optional<R::Value>
    where
        F: FnOnce(&'a T) -> R,
        R: IntoOptional,
    {
        match self.as_option() {
            Some(value) => f(value).into_optional(),
            None => Optional::none(),
        }
    }

    /// Applies `f` to a mutable reference to the value.
    #[inline]
    pub fn then_mut<'a, R, F>(&'a mut self, f: F) -> Optional<R::Value>
    where
        F: FnOnce(&'a mut T) -> R,
        R: IntoOptional,
    {
        match self.value_mut() {
            Ok(value) => f(value).into_optional(),
            Err(_) => Optional::none(),
        }
    }

    /// Returns `self` if it holds a value, otherwise the result of `f`.
    ///
    /// `f` runs at most once. A handler returning `()` leaves the result
    /// empty; one returning `T`, `Optional<T>` or `Option<T>` replaces it.
    ///
    /// Numeric literals in the handler are not inferred from `T`: write
    /// `|| 0_u32` for an `Optional<u32>`. See [`Recover`].
    ///
    /// ```rust
    /// use vessel::Optional;
    ///
    /// let mut logged = false;
    /// let out = Optional::<i32>::none().catch_error(|| logged = true);
    /// assert!(logged);
    /// assert!(!out.has_value());
    /// ```
    #[inline]
    pub fn catch_error<R, F>(self, f: F) -> Optional<T>
    where
        F: FnOnce() -> R,
        R: Recover<T>,
    {
        if self.has_value() {
            self
        } else {
            f().recover()
        }
    }

    /// Like [`catch_error`](Self::catch_error) but leaves `self` untouched,
    /// cloning the value when present.
    #[inline]
    pub fn catch_error_ref<R, F>(&self, f: F) -> Optional<T>
    where
        T: Clone,
        F: FnOnce() -> R,
        R: Recover<T>,
    {
        if self.has_value() {
            self.clone()
        } else {
            f().recover()
        }
    }
}

// =============================================================================
// Flattening
// =============================================================================

impl<T> IntoOptional for Optional<T> {
    type Value = T;

    #[inline]
    fn into_optional(self) -> Optional<T> {
        self
    }
}

impl<T> IntoOptional for Option<T> {
    type Value = T;

    #[inline]
    fn into_optional(self) -> Optional<T> {
        self.into()
    }
}

// =============================================================================
// Wrapping
// =============================================================================

crate::impl_into_optional!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
    String, Ordering, Duration,
);

macro_rules! impl_into_optional_generic {
    ($($ty:ident<$($param:ident),+>),+ $(,)?) => {
        $(
            impl<$($param),+> IntoOptional for $ty<$($param),+> {
                type Value = Self;

                #[inline]
                fn into_optional(self) -> Optional<Self> {
                    Optional::new(self)
                }
            }
        )+
    };
}

impl_into_optional_generic!(
    Vec<T>,
    VecDeque<T>,
    BTreeSet<T>,
    BTreeMap<K, V>,
    HashSet<T, S>,
    HashMap<K, V, S>,
    Result<T, E>,
);

macro_rules! impl_into_optional_pointer {
    ($($ptr:ident),+) => {
        $(
            impl<T: ?Sized> IntoOptional for $ptr<T> {
                type Value = Self;

                #[inline]
                fn into_optional(self) -> Optional<Self> {
                    Optional::new(self)
                }
            }
        )+
    };
}

impl_into_optional_pointer!(Box, Rc, Arc);

impl<'a, T: ?Sized> IntoOptional for &'a T {
    type Value = &'a T;

    #[inline]
    fn into_optional(self) -> Optional<&'a T> {
        Optional::new(self)
    }
}

impl<'a, T: ?Sized> IntoOptional for &'a mut T {
    type Value = &'a mut T;

    #[inline]
    fn into_optional(self) -> Optional<&'a mut T> {
        Optional::new(self)
    }
}

impl<T, const N: usize> IntoOptional for [T; N] {
    type Value = Self;

    #[inline]
    fn into_optional(self) -> Optional<Self> {
        Optional::new(self)
    }
}

macro_rules! impl_into_optional_tuple {
    ($(($($name:ident),+)),+ $(,)?) => {
        $(
            impl<$($name),+> IntoOptional for ($($name,)+) {
                type Value = Self;

                #[inline]
                fn into_optional(self) -> Optional<Self> {
                    Optional::new(self)
                }
            }
        )+
    };
}

impl_into_optional_tuple!(
    (A),
    (A, B),
    (A, B, C),
    (A, B, C, D),
    (A, B, C, D, E),
    (A, B, C, D, E, F),
);

// =============================================================================
// Tests
// =============================================================================
