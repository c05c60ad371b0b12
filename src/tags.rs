//! Disambiguation tags

use core::fmt;

/// Marker for an explicitly empty [`Optional`](crate::Optional)
///
/// `Nullopt` has no `Default` impl and a private field, so the only way to
/// get one is the [`NULLOPT`] constant. It can therefore never be mistaken for
/// the default state of an ordinary value.
///
/// ```rust
/// use vessel::{Optional, NULLOPT};
///
/// let mut opt = Optional::new(3);
/// assert!(opt != NULLOPT);
///
/// opt = NULLOPT.into();
/// assert!(opt == NULLOPT);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Nullopt {
    _private: (),
}

/// The [`Nullopt`] marker.
pub const NULLOPT: Nullopt = Nullopt { _private: () };

impl fmt::Debug for Nullopt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Nullopt")
    }
}
