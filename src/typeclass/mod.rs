//! Type class traits.
//!
//! - [`Semigroup`]: Associative binary operations, used by `Validation` to
//!   accumulate failures.
//!
//! # Examples
//!
//! ```rust
//! use functional_extras::typeclass::Semigroup;
//!
//! let first = vec!["missing name"];
//! let second = vec!["age out of range"];
//! assert_eq!(first.combine(second), vec!["missing name", "age out of range"]);
//! ```

mod semigroup;

pub use semigroup::Semigroup;
