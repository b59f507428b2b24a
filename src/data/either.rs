//! Either type - a value that is one of two alternatives.
//!
//! `Either<L, R>` is either a `Left(L)` or a `Right(R)`. By convention
//! `Left` carries the failure or first alternative and `Right` the success.
//! Both payloads are unconstrained: any value may be wrapped.
//!
//! # Examples
//!
//! ```rust
//! use functional_extras::data::either::{self, Either};
//!
//! let inputs = vec![either::right(1), either::left("bad"), either::right(2)];
//!
//! assert_eq!(either::rights(Some(inputs.clone())), vec![1, 2]);
//! assert_eq!(either::lefts(Some(inputs.clone())), vec!["bad"]);
//! assert_eq!(
//!     either::partition_eithers(Some(inputs)),
//!     (vec!["bad"], vec![1, 2])
//! );
//!
//! let describe = either::either_map_partial(
//!     Some(|message: &str| format!("error: {message}")),
//!     Some(|value: i32| format!("value: {value}")),
//! );
//! assert_eq!(describe(Either::Right(3)), Ok(String::from("value: 3")));
//! assert_eq!(describe(Either::Left("eof")), Ok(String::from("error: eof")));
//! ```

use std::fmt;

use crate::Error;
use crate::compose::Curried;
use crate::data::type_tag;
use crate::guard::{Nullable, impl_nullable, non_null_items, require_non_null};

/// A value that is either `Left(L)` or `Right(R)`.
///
/// # Examples
///
/// ```rust
/// use functional_extras::data::Either;
///
/// let parsed: Either<String, i32> = "42".parse::<i32>().map_err(|e| e.to_string()).into();
/// assert_eq!(parsed.map_right(|n| n + 1), Either::Right(43));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Either<L, R> {
    /// The left alternative, conventionally the failure.
    Left(L),
    /// The right alternative, conventionally the success.
    Right(R),
}

impl_nullable!(Either<L, R>);

static_assertions::assert_impl_all!(Either<String, Vec<u8>>: Send, Sync, Clone);

impl<L, R> Either<L, R> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` for `Left`.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` for `Right`.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the `Left` payload, or `default` for a `Right`.
    #[inline]
    pub fn from_left(self, default: L) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => default,
        }
    }

    /// Returns the `Right` payload, or `default` for a `Left`.
    #[inline]
    pub fn from_right(self, default: R) -> R {
        match self {
            Self::Left(_) => default,
            Self::Right(value) => value,
        }
    }

    /// Converts into `Some(l)` for `Left(l)`, otherwise `None`.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts into `Some(r)` for `Right(r)`, otherwise `None`.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Borrows both payloads.
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// The catamorphism: applies `left_morphism` to a `Left` payload or
    /// `right_morphism` to a `Right` payload. Only one of them runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_extras::data::Either;
    ///
    /// let value: Either<&str, i32> = Either::Right(21);
    /// assert_eq!(value.either_map(str::len, |n| (n * 2) as usize), 42);
    /// ```
    #[inline]
    pub fn either_map<C, F, G>(self, left_morphism: F, right_morphism: G) -> C
    where
        F: FnOnce(L) -> C,
        G: FnOnce(R) -> C,
    {
        match self {
            Self::Left(value) => left_morphism(value),
            Self::Right(value) => right_morphism(value),
        }
    }

    /// Maps the `Left` payload, leaving a `Right` untouched.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Maps the `Right` payload, leaving a `Left` untouched.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Exchanges the two alternatives.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left<{}> {value}", type_tag::<L>()),
            Self::Right(value) => write!(formatter, "Right<{}> {value}", type_tag::<R>()),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok(r)` becomes `Right(r)` and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// `Right(r)` becomes `Ok(r)` and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

// =============================================================================
// Boundary API
// =============================================================================

/// Wraps any value as a `Left`.
#[inline]
pub const fn left<L, R>(value: L) -> Either<L, R> {
    Either::Left(value)
}

/// Wraps any value as a `Right`.
#[inline]
pub const fn right<L, R>(value: R) -> Either<L, R> {
    Either::Right(value)
}

/// Returns `true` if the either is a `Left`.
#[inline]
pub const fn is_left<L, R>(either: &Either<L, R>) -> bool {
    either.is_left()
}

/// Returns `true` if the either is a `Right`.
#[inline]
pub const fn is_right<L, R>(either: &Either<L, R>) -> bool {
    either.is_right()
}

/// The `Left` payload; `default` for a `Right` or null.
pub fn from_left<L, R, E>(default: L, either: E) -> L
where
    E: Nullable<Either<L, R>>,
{
    match either.into_nullable() {
        Some(Either::Left(value)) => value,
        Some(Either::Right(_)) | None => default,
    }
}

/// Curried form of [`from_left`].
pub fn from_left_curried<L: Clone, R>(default: L) -> impl Fn(Either<L, R>) -> L {
    let curried = crate::curry2!(from_left::<L, R, Either<L, R>>);
    curried(default)
}

/// The `Right` payload; `default` for a `Left` or null.
pub fn from_right<L, R, E>(default: R, either: E) -> R
where
    E: Nullable<Either<L, R>>,
{
    match either.into_nullable() {
        Some(Either::Right(value)) => value,
        Some(Either::Left(_)) | None => default,
    }
}

/// Curried form of [`from_right`].
pub fn from_right_curried<L, R: Clone>(default: R) -> impl Fn(Either<L, R>) -> R {
    let curried = crate::curry2!(from_right::<L, R, Either<L, R>>);
    curried(default)
}

/// The catamorphism over a nullable either.
///
/// Only the morphism for the active variant is checked and invoked; the other
/// one may be null.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `either` is null, or if the morphism
/// for its variant is null.
///
/// # Examples
///
/// ```rust
/// use functional_extras::data::either::{self, Either};
///
/// let length = either::either_map(
///     None::<fn(i32) -> usize>,
///     Some(|text: &str| text.len()),
///     Either::Right("four"),
/// );
/// assert_eq!(length, Ok(4));
///
/// let missing = either::either_map(
///     None::<fn(i32) -> usize>,
///     Some(|text: &str| text.len()),
///     Either::Left(1),
/// );
/// assert!(missing.is_err());
/// ```
pub fn either_map<L, R, C, F, G, E>(
    left_morphism: Option<F>,
    right_morphism: Option<G>,
    either: E,
) -> Result<C, Error>
where
    F: FnOnce(L) -> C,
    G: FnOnce(R) -> C,
    E: Nullable<Either<L, R>>,
{
    match require_non_null(either.into_nullable(), "either must not be null")? {
        Either::Left(value) => {
            require_non_null(left_morphism, "left morphism must not be null").map(|f| f(value))
        }
        Either::Right(value) => {
            require_non_null(right_morphism, "right morphism must not be null").map(|g| g(value))
        }
    }
}

/// Partially applied form of [`either_map`].
pub fn either_map_partial<L, R, C, F, G>(
    left_morphism: Option<F>,
    right_morphism: Option<G>,
) -> impl Fn(Either<L, R>) -> Result<C, Error>
where
    F: FnOnce(L) -> C + Clone,
    G: FnOnce(R) -> C + Clone,
{
    let curried = crate::curry3!(either_map::<L, R, C, F, G, Either<L, R>>);
    curried(left_morphism)(right_morphism)
}

/// Curried form of [`either_map`].
pub fn either_map_curried<'a, L, R, C, F, G>(
    left_morphism: Option<F>,
) -> impl Fn(Option<G>) -> Curried<'a, Either<L, R>, Result<C, Error>>
where
    L: 'a,
    R: 'a,
    C: 'a,
    F: FnOnce(L) -> C + Clone + 'a,
    G: FnOnce(R) -> C + Clone + 'a,
{
    let curried = crate::curry3!(either_map::<L, R, C, F, G, Either<L, R>>);
    let awaiting_right = curried(left_morphism);
    move |right_morphism: Option<G>| -> Curried<'a, Either<L, R>, Result<C, Error>> {
        Box::new(awaiting_right(right_morphism))
    }
}

/// The `Left` payloads in order. Null lists and null elements are skipped.
pub fn lefts<L, R, N, I>(list: Option<I>) -> Vec<L>
where
    I: IntoIterator<Item = N>,
    N: Nullable<Either<L, R>>,
{
    non_null_items::<Either<L, R>, N, I>(list)
        .filter_map(Either::left)
        .collect()
}

/// The `Right` payloads in order. Null lists and null elements are skipped.
pub fn rights<L, R, N, I>(list: Option<I>) -> Vec<R>
where
    I: IntoIterator<Item = N>,
    N: Nullable<Either<L, R>>,
{
    non_null_items::<Either<L, R>, N, I>(list)
        .filter_map(Either::right)
        .collect()
}

/// Splits the list into its `Left` and `Right` payloads, keeping the order
/// within each side.
pub fn partition_eithers<L, R, N, I>(list: Option<I>) -> (Vec<L>, Vec<R>)
where
    I: IntoIterator<Item = N>,
    N: Nullable<Either<L, R>>,
{
    let mut partition = (Vec::new(), Vec::new());
    for either in non_null_items::<Either<L, R>, N, I>(list) {
        match either {
            Either::Left(value) => partition.0.push(value),
            Either::Right(value) => partition.1.push(value),
        }
    }
    partition
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_either_left_construction() {
        let value: Either<i32, String> = left(42);
        assert!(value.is_left());
        assert!(!value.is_right());
    }

    #[rstest]
    fn test_either_right_construction() {
        let value: Either<i32, String> = right("hello".to_string());
        assert!(value.is_right());
        assert!(!value.is_left());
    }

    #[rstest]
    fn test_either_map_rejects_null_either() {
        let result = either_map(
            Some(|x: i32| x),
            Some(|x: i32| x),
            None::<Either<i32, i32>>,
        );
        assert_eq!(result, Err(Error::invalid_argument("either must not be null")));
    }

    #[rstest]
    fn test_either_map_ignores_inactive_morphism() {
        let result = either_map(Some(|x: i32| x + 1), None::<fn(i32) -> i32>, Either::Left(1));
        assert_eq!(result, Ok(2));

        let result = either_map(Some(|x: i32| x + 1), None::<fn(i32) -> i32>, Either::Right(1));
        assert!(result.unwrap_err().is_invalid_argument());
    }

    #[rstest]
    fn test_from_left_and_right_with_null() {
        assert_eq!(from_left(0, None::<Either<i32, &str>>), 0);
        assert_eq!(from_right("none", None::<Either<i32, &str>>), "none");
        assert_eq!(from_left(0, Either::<i32, &str>::Left(7)), 7);
    }

    #[rstest]
    fn test_result_conversion_roundtrip() {
        let ok: Result<i32, String> = Ok(42);
        let either: Either<String, i32> = ok.into();
        let result: Result<i32, String> = either.into();
        assert_eq!(result, Ok(42));

        let err: Result<i32, String> = Err("error".to_string());
        let either: Either<String, i32> = err.into();
        assert_eq!(either.clone().swap(), Either::Right("error".to_string()));
        let result: Result<i32, String> = either.into();
        assert_eq!(result, Err("error".to_string()));
    }

    #[rstest]
    #[case(Either::Left(5), "Left<i32> 5")]
    #[case(Either::Right(String::from("hi")), "Right<String> hi")]
    fn test_display(#[case] either: Either<i32, String>, #[case] expected: &str) {
        assert_eq!(either.to_string(), expected);
    }
}
