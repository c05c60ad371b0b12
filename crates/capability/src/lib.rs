//! # vessel-capability - compile-time capability predicates
//!
//! Container types decide which special members they expose by asking what the
//! wrapped type can do. This crate answers those questions without running any
//! code:
//!
//! - **Trivial destruction**: does dropping `T` run any glue?
//! - **Copy / clone**: can `T` be duplicated bitwise (`Copy`) or through
//!   `Clone` (construction via `clone`, assignment via `clone_from`)?
//! - **Move**: every sized Rust type moves, and moves never unwind. These
//!   answers are constant but are still reported so that a capability record
//!   reads the same for every type.
//! - **Compressibility**: is `T` zero-sized, so that a pair holding it pays
//!   nothing for it?
//!
//! Questions that only depend on layout ([`is_trivially_destructible`],
//! [`is_compressible`]) are `const fn`s and also available to generic code via
//! the [`Introspect`] blanket trait. Questions about trait implementations need
//! a concrete type and are answered by the [`implements!`] and
//! [`capabilities!`] macros, which resolve at compile time without
//! specialization.
//!
//! ## Example
//!
//! ```rust
//! use vessel_capability::{capabilities, implements, is_compressible};
//!
//! struct Token;
//!
//! assert!(is_compressible::<Token>());
//! assert!(!is_compressible::<u32>());
//!
//! assert!(implements!(String: Clone));
//! assert!(!implements!(String: Copy));
//!
//! let caps = capabilities!(String);
//! assert!(caps.copy_constructible);
//! assert!(!caps.trivially_destructible);
//! ```

#![no_std]
#![warn(missing_docs)]

use core::mem::{needs_drop, size_of};

// =============================================================================
// Layout Predicates
// =============================================================================

/// Returns `true` if dropping a `T` runs no code.
///
/// This is the analogue of a trivially destructible type: no `Drop` impl on
/// `T` or on anything it owns.
#[inline]
pub const fn is_trivially_destructible<T>() -> bool {
    !needs_drop::<T>()
}

/// Returns `true` if `T` occupies no storage.
///
/// Zero-sized fields never add to the size of the struct that holds them, so
/// a compressible element costs nothing inside a pair.
#[inline]
pub const fn is_compressible<T>() -> bool {
    size_of::<T>() == 0
}

/// Layout capabilities of a type, usable from generic code.
///
/// Implemented for every sized type. The constants are evaluated per
/// monomorphization, so branches on them fold away.
pub trait Introspect: Sized {
    /// See [`is_trivially_destructible`].
    const TRIVIALLY_DESTRUCTIBLE: bool;

    /// See [`is_compressible`].
    const COMPRESSIBLE: bool;
}

impl<T> Introspect for T {
    const TRIVIALLY_DESTRUCTIBLE: bool = is_trivially_destructible::<T>();
    const COMPRESSIBLE: bool = is_compressible::<T>();
}

// =============================================================================
// Capability Record
// =============================================================================

/// Everything a container needs to know about the type it stores.
///
/// Build one for a concrete type with [`capabilities!`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Capabilities {
    /// Dropping the type runs no code.
    pub trivially_destructible: bool,
    /// The type is `Copy`.
    pub trivially_copyable: bool,
    /// The type can be duplicated with `Clone::clone`.
    pub copy_constructible: bool,
    /// The type can be overwritten with `Clone::clone_from`.
    pub copy_assignable: bool,
    /// The type can be moved. Always `true` for sized types.
    pub move_constructible: bool,
    /// Moving the type cannot unwind. Always `true` in Rust.
    pub nothrow_move_constructible: bool,
    /// The type can be move-assigned. Always `true` for sized types.
    pub move_assignable: bool,
    /// The type is zero-sized.
    pub compressible: bool,
}

impl Capabilities {
    /// Keeps only the facts about special members, clearing layout facts.
    ///
    /// A wrapper never has the same layout as what it wraps, but it should
    /// expose the same special members.
    #[inline]
    pub const fn special_members(self) -> Self {
        Self {
            compressible: false,
            ..self
        }
    }

    /// Returns `true` if `wrapper` exposes exactly the special members of `self`.
    pub const fn propagates_to(self, wrapper: Self) -> bool {
        let a = self.special_members();
        let b = wrapper.special_members();
        a.trivially_destructible == b.trivially_destructible
            && a.trivially_copyable == b.trivially_copyable
            && a.copy_constructible == b.copy_constructible
            && a.copy_assignable == b.copy_assignable
            && a.move_constructible == b.move_constructible
            && a.nothrow_move_constructible == b.nothrow_move_constructible
            && a.move_assignable == b.move_assignable
    }
}

// =============================================================================
// Trait Detection Macros
// =============================================================================

/// Evaluates to `true` if the concrete type implements the given bound.
///
/// The expansion has an inherent constant that only exists when the bound holds;
/// otherwise name resolution falls back to a blanket trait constant that is
/// `false`. The result is a constant expression.
///
/// ```rust
/// use vessel_capability::implements;
///
/// struct Opaque;
///
/// const CLONEABLE: bool = implements!(Vec<u8>: Clone);
/// assert!(CLONEABLE);
/// assert!(!implements!(Opaque: Clone));
/// assert!(implements!(f64: From<i32>));
/// assert!(!implements!(String: From<i32>));
/// ```
#[macro_export]
macro_rules! implements {
    ($ty:ty : $($bound:tt)+) => {{
        #[allow(dead_code)]
        trait Fallback {
            const IMPLEMENTED: bool = false;
        }
        impl<T: ?Sized> Fallback for T {}

        #[allow(dead_code)]
        struct Probe<T: ?Sized>(::core::marker::PhantomData<T>);

        #[allow(dead_code)]
        impl<T: ?Sized + $($bound)+> Probe<T> {
            const IMPLEMENTED: bool = true;
        }

        <Probe<$ty>>::IMPLEMENTED
    }};
}

/// Builds the [`Capabilities`] record of a concrete type.
///
/// ```rust
/// use vessel_capability::capabilities;
///
/// let caps = capabilities!(u64);
/// assert!(caps.trivially_destructible);
/// assert!(caps.trivially_copyable);
/// assert!(!caps.compressible);
/// ```
#[macro_export]
macro_rules! capabilities {
    ($ty:ty) => {
        $crate::Capabilities {
            trivially_destructible: $crate::is_trivially_destructible::<$ty>(),
            trivially_copyable: $crate::implements!($ty: ::core::marker::Copy),
            copy_constructible: $crate::implements!($ty: ::core::clone::Clone),
            copy_assignable: $crate::implements!($ty: ::core::clone::Clone),
            move_constructible: true,
            nothrow_move_constructible: true,
            move_assignable: true,
            compressible: $crate::is_compressible::<$ty>(),
        }
    };
}

// =============================================================================
// Tests
// =============================================================================
