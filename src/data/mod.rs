//! Closed two-variant sum types.
//!
//! | type               | absence / failure  | presence / success |
//! |--------------------|--------------------|--------------------|
//! | [`Maybe<A>`]       | `Nothing`          | `Just(A)`          |
//! | [`Either<L, R>`]   | `Left(L)`          | `Right(R)`         |
//! | [`Try<A>`]         | `Failure(Fault)`   | `Success(A)`       |
//! | [`Validation<F, S>`] | `Invalid(Vec<F>)` | `Valid(S)`        |
//!
//! Every type follows the same pattern:
//!
//! - smart constructors (`maybe::just`, `either::left`, `validation::invalid` ...)
//! - total predicates (`is_just`, `is_left`, `is_failure`, `is_valid` ...)
//! - extractors with a default (`from_maybe`, `from_right`, `from_success` ...)
//! - a catamorphism (`maybe_map`, `either_map`, `try_map`, `validation_map`)
//! - bulk operations over sequences (`cat_maybes`, `lefts`, `partition_tries` ...)
//!
//! Values are immutable; every combinator builds a new value.
//!
//! # Examples
//!
//! ```rust
//! use functional_extras::data::{Either, Maybe, either, maybe};
//!
//! let parsed: Either<String, i32> = either::right(42);
//! let doubled = either::either_map(Some(|_: String| 0), Some(|n: i32| n * 2), parsed);
//! assert_eq!(doubled, Ok(84));
//!
//! assert_eq!(maybe::from_maybe(0, Maybe::Just(5)), 5);
//! ```

#[cfg(feature = "either")]
pub mod either;
#[cfg(feature = "fallible")]
pub mod fallible;
#[cfg(feature = "maybe")]
pub mod maybe;
#[cfg(feature = "validation")]
pub mod validation;

#[cfg(feature = "either")]
pub use either::Either;
#[cfg(feature = "fallible")]
pub use fallible::{Fault, Try};
#[cfg(feature = "maybe")]
pub use maybe::Maybe;
#[cfg(feature = "validation")]
pub use validation::Validation;

/// Renders the name of `T` without module paths, e.g. `Vec<String>` rather
/// than `alloc::vec::Vec<alloc::string::String>`.
pub(crate) fn type_tag<T: ?Sized>() -> String {
    let full_name = std::any::type_name::<T>();
    let mut tag = String::with_capacity(full_name.len());
    let mut segment = String::new();
    let mut characters = full_name.chars().peekable();

    while let Some(character) = characters.next() {
        if character == ':' && characters.peek() == Some(&':') {
            characters.next();
            segment.clear();
        } else if character.is_alphanumeric() || character == '_' {
            segment.push(character);
        } else {
            tag.push_str(&segment);
            segment.clear();
            tag.push(character);
        }
    }
    tag.push_str(&segment);
    tag
}
