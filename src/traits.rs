//! Common traits and error types for the containers
//!
//! This module provides the seams the containers are generic over:
//!
//! - [`IntoOptional`]: how a combinator result becomes an [`Optional`]
//!   (flattened if it already is one, wrapped otherwise)
//! - [`Recover`]: how a `catch_error` handler result becomes an [`Optional`]
//! - [`ConvertFrom`]: converting construction of one optional from another
//!
//! and the two structural errors: [`BadOptionalAccess`] and [`OutOfRange`].

use thiserror::Error;

use crate::optional::Optional;

/// Error returned by the checked accessors of [`Optional`] when it is empty
///
/// This is the only place where absence is a failure rather than data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("bad optional access: optional has no value")]
pub struct BadOptionalAccess;

/// Error returned by the checked positional operations of
/// [`SmallVector`](crate::small_vector::SmallVector)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("index {index} is out of range for length {len}")]
pub struct OutOfRange {
    /// The offending index
    pub index: usize,
    /// The length of the sequence at the time of the call
    pub len: usize,
}

/// Conversion of a combinator result into an [`Optional`]
///
/// [`Optional::then`] hands whatever its closure returns to this trait, so the
/// choice between flat-map and map is made by the result type at compile time:
///
/// - `Optional<U>` and `Option<U>` are returned as they are (flattening)
/// - any other supported type is wrapped into a present `Optional`
///
/// Plain-value wrapping is implemented for the scalar, string, pointer,
/// collection, tuple and array types of the standard library and for the
/// containers of this crate. Other types opt in with
/// [`impl_into_optional!`](crate::impl_into_optional).
///
/// # Example
///
/// ```rust
/// use vessel::{IntoOptional, Optional};
///
/// assert_eq!(5_i32.into_optional(), Optional::new(5));
/// assert_eq!(Optional::new(5).into_optional(), Optional::new(5));
/// assert!(!None::<i32>.into_optional().has_value());
/// ```
pub trait IntoOptional {
    /// The value type of the resulting optional
    type Value;

    /// Converts `self` into an optional
    fn into_optional(self) -> Optional<Self::Value>;
}

/// Conversion of a `catch_error` handler result into an `Optional<T>`
///
/// - `()` means the handler only ran for its side effects: the result stays empty
/// - `T` is wrapped into a present optional
/// - `Optional<T>` and `Option<T>` are returned as they are
///
/// When `T` is `()` itself, a handler returning `()` matches two rules and the
/// call needs a type annotation on the handler's return.
///
/// The handler's return type is not inferred from `T`. An unsuffixed integer
/// or float literal falls back to `i32` / `f64`, so recovering an
/// `Optional<u64>` needs `|| 0_u64` rather than `|| 0`.
pub trait Recover<T> {
    /// Produces the recovered optional
    fn recover(self) -> Optional<T>;
}

impl<T> Recover<T> for () {
    #[inline]
    fn recover(self) -> Optional<T> {
        Optional::none()
    }
}

impl<T, R> Recover<T> for R
where
    R: IntoOptional<Value = T>,
{
    #[inline]
    fn recover(self) -> Optional<T> {
        self.into_optional()
    }
}

/// Converting construction from another optional
///
/// Implemented for `Optional<T>` from `Optional<U>` (moving) and from
/// `&Optional<U>` (cloning) whenever `T: From<U>`. Only lossless `From`
/// conversions qualify, so `Optional<f64>` converts from `Optional<i32>` but
/// `Optional<String>` does not.
///
/// A separate trait is needed because a blanket `From<Optional<U>>` would
/// collide with the reflexive `From<T> for T`.
///
/// # Example
///
/// ```rust
/// use vessel::{ConvertFrom, Optional};
///
/// let narrow = Optional::new(7_i32);
/// let wide = Optional::<f64>::convert_from(&narrow);
/// assert_eq!(wide, Optional::new(7.0));
/// ```
pub trait ConvertFrom<Source>: Sized {
    /// Performs the conversion
    fn convert_from(source: Source) -> Self;
}

/// Implements [`IntoOptional`] as plain-value wrapping for the listed types
///
/// Use this for your own types so that closures returning them can be chained
/// with [`Optional::then`].
///
/// ```rust
/// use vessel::{impl_into_optional, Optional};
///
/// #[derive(Debug, PartialEq)]
/// struct Meters(f64);
///
/// impl_into_optional!(Meters);
///
/// let distance = Optional::new(3.5).then(Meters);
/// assert_eq!(distance, Optional::new(Meters(3.5)));
/// ```
#[macro_export]
macro_rules! impl_into_optional {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::IntoOptional for $ty {
                type Value = $ty;

                #[inline]
                fn into_optional(self) -> $crate::Optional<$ty> {
                    $crate::Optional::new(self)
                }
            }
        )+
    };
}
