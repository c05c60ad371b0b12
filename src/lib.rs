//! Generic Value Containers for Rust
//!
//! This crate provides a small set of container primitives whose capabilities
//! follow from the types they hold.
//!
//! # Features
//!
//! - **Optional**: zero or one value; `Clone`, `Copy`, drop glue, equality,
//!   ordering and hashing exactly when the held type has them. Monadic
//!   `then` / `catch_error` chains that flatten nested optionals.
//! - **CompressedPair**: two co-owned values where a zero-sized member takes
//!   no space
//! - **SmallVector**: inline-first growable sequence with a pluggable growth
//!   policy; fallible lookups return `Optional`
//! - **Capability predicates** (re-exported from `vessel-capability`):
//!   compile-time answers to "is this type trivially destructible, `Copy`,
//!   `Clone`, zero-sized?"
//!
//! # Example
//!
//! ```rust
//! use vessel::{Optional, SmallVector};
//!
//! let mut stack: SmallVector<u32, 4> = SmallVector::from_list([3, 4]);
//!
//! let doubled = stack
//!     .pop()
//!     .then(|top| top.checked_mul(2))
//!     .catch_error(|| 0_u32);
//! assert_eq!(doubled, Optional::new(8_u32));
//!
//! stack.clear();
//! assert!(!stack.pop().has_value());
//! ```

pub mod compressed_pair;
pub mod optional;
pub mod small_vector;
pub mod tags;
pub mod traits;

pub use vessel_capability as capability;

// Re-export the main types for convenience
pub use compressed_pair::CompressedPair;
pub use optional::{swap, Optional};
pub use small_vector::{Doubling, Exact, GrowthPolicy, SmallVector};
pub use tags::{Nullopt, NULLOPT};
pub use traits::{BadOptionalAccess, ConvertFrom, IntoOptional, OutOfRange, Recover};
