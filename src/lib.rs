//! # functional-extras
//!
//! Closed sum types and point-free combinators for Rust.
//!
//! ## Overview
//!
//! - **Sum types**: [`Maybe`](data::Maybe), [`Either`](data::Either),
//!   [`Try`](data::Try) and [`Validation`](data::Validation), each with smart
//!   constructors, predicates, extractors, a catamorphism and bulk operations
//!   over sequences
//! - **Function composition**: identity, constant, compose, pipe, flip, bind,
//!   ap and `lift_a2`, plus the `curry2!`/`curry3!` macros
//! - **Guards**: explicit null handling at the API boundary
//!
//! Every sum type is usable in two ways. Inherent methods form the null-free
//! Rust API. The module functions (`maybe::from_maybe`, `either::either_map`
//! ...) form the boundary API, where a possibly-null argument is an `Option`
//! and a null morphism or instance is reported as [`Error::InvalidArgument`].
//!
//! ## Feature Flags
//!
//! - `compose`: Function composition utilities and curry macros
//! - `typeclass`: The `Semigroup` trait
//! - `maybe`, `either`, `fallible`, `validation`: The individual sum types
//! - `full`: Enable all features (also the default)
//!
//! ## Example
//!
//! ```rust
//! use functional_extras::prelude::*;
//!
//! let port = maybe::of(Some(8080)).filter(|port| *port > 1024);
//! assert_eq!(port, Maybe::Just(8080));
//!
//! let checked = validation::validate(Some(|port: &u16| *port != 0), "port is zero", 0);
//! assert_eq!(checked, Ok(Validation::Invalid(vec!["port is zero"])));
//!
//! let describe = compose(|n: usize| format!("{n} items"), |items: Vec<u8>| items.len());
//! assert_eq!(describe(vec![1, 2, 3]), "3 items");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

pub mod error;
pub mod guard;

pub use error::Error;

/// Prelude module for convenient imports.
///
/// Re-exports the sum types, their boundary modules, the combinators and the
/// type classes.
///
/// # Usage
///
/// ```rust
/// use functional_extras::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Error;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "either")]
    pub use crate::data::{Either, either};

    #[cfg(feature = "fallible")]
    pub use crate::data::{Fault, Try, fallible};

    #[cfg(feature = "maybe")]
    pub use crate::data::{Maybe, maybe};

    #[cfg(feature = "validation")]
    pub use crate::data::{Validation, validation};
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(any(
    feature = "maybe",
    feature = "either",
    feature = "fallible",
    feature = "validation"
))]
pub mod data;
