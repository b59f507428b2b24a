//! Maybe type - an optional value that is never "present but empty".
//!
//! A `Maybe<A>` either holds a value (`Just(a)`) or holds nothing
//! (`Nothing`). Unlike a nullable reference, a `Just` can never wrap an
//! absent value: the boundary constructor [`just`] rejects `None` with
//! [`Error::InvalidArgument`], so absence is always spelled `Nothing`.
//!
//! The module functions form the boundary API: sum-type instances may be
//! passed bare or as `Option` (where `None` stands for null and is read as
//! `Nothing`), and morphisms are passed as `Option<F>`.
//!
//! # Examples
//!
//! ```rust
//! use functional_extras::data::maybe::{self, Maybe};
//!
//! let port = maybe::of(std::env::var("FUNCTIONAL_EXTRAS_UNSET_PORT").ok());
//! assert_eq!(maybe::from_maybe(String::from("8080"), port), "8080");
//!
//! let parsed = maybe::map_maybe(
//!     Some(|text: &str| Maybe::from(text.parse::<u16>().ok())),
//!     Some(vec!["80", "http", "443"]),
//! );
//! assert_eq!(parsed, Ok(vec![80, 443]));
//!
//! assert!(maybe::just(None::<i32>).is_err());
//! assert_eq!(maybe::just(Some(1)), Ok(Maybe::Just(1)));
//! ```

use std::fmt;

use crate::Error;
use crate::compose::Curried;
use crate::data::type_tag;
use crate::guard::{Nullable, impl_nullable, non_null_items, require_non_null};

/// An optional value: `Just(value)` or `Nothing`.
///
/// # Examples
///
/// ```rust
/// use functional_extras::data::Maybe;
///
/// let present = Maybe::Just(3);
/// let absent: Maybe<i32> = Maybe::Nothing;
///
/// assert_eq!(present.maybe_map(0, |x| x * 10), 30);
/// assert_eq!(absent.maybe_map(0, |x| x * 10), 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Maybe<A> {
    /// A present value.
    Just(A),
    /// No value.
    Nothing,
}

impl_nullable!(Maybe<A>);

static_assertions::assert_impl_all!(Maybe<String>: Send, Sync, Clone);

impl<A> Maybe<A> {
    /// Returns `true` for `Just`.
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` for `Nothing`.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Returns the payload of a `Just`, or `default` for `Nothing`.
    #[inline]
    pub fn from_maybe(self, default: A) -> A {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default,
        }
    }

    /// Returns the payload of a `Just`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalState`] for `Nothing`.
    pub fn from_just(self) -> Result<A, Error> {
        match self {
            Self::Just(value) => Ok(value),
            Self::Nothing => Err(Error::illegal_state("maybe must not be null or Nothing")),
        }
    }

    /// The catamorphism: applies `morphism` to the payload of a `Just`, or
    /// returns `default` for `Nothing`.
    #[inline]
    pub fn maybe_map<R, F>(self, default: R, morphism: F) -> R
    where
        F: FnOnce(A) -> R,
    {
        match self {
            Self::Just(value) => morphism(value),
            Self::Nothing => default,
        }
    }

    /// Maps the payload of a `Just`, leaving `Nothing` untouched.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Keeps a `Just` only if its payload satisfies `predicate`.
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        match self {
            Self::Just(value) if predicate(&value) => Self::Just(value),
            _ => Self::Nothing,
        }
    }

    /// Chains a computation that may itself produce `Nothing`.
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Borrows the payload.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&A> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Converts into `Some(value)` for `Just` and `None` for `Nothing`.
    #[inline]
    pub fn into_option(self) -> Option<A> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }

    /// A one-element list for `Just`, an empty list for `Nothing`.
    pub fn to_list(self) -> Vec<A> {
        self.into_option().into_iter().collect()
    }
}

impl<A> Default for Maybe<A> {
    fn default() -> Self {
        Self::Nothing
    }
}

impl<A: fmt::Display> fmt::Display for Maybe<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => write!(formatter, "Just<{}> {value}", type_tag::<A>()),
            Self::Nothing => write!(formatter, "Nothing<{}>", type_tag::<A>()),
        }
    }
}

impl<A> From<Option<A>> for Maybe<A> {
    #[inline]
    fn from(option: Option<A>) -> Self {
        option.map_or(Self::Nothing, Self::Just)
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    #[inline]
    fn from(maybe: Maybe<A>) -> Self {
        maybe.into_option()
    }
}

/// Creates a `Just` of the value.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `value` is null.
pub fn just<A>(value: Option<A>) -> Result<Maybe<A>, Error> {
    require_non_null(value, "value must not be null").map(Maybe::Just)
}

/// Creates a `Nothing` to represent a missing value.
#[inline]
pub const fn nothing<A>() -> Maybe<A> {
    Maybe::Nothing
}

/// Lenient conversion: `Just` for a present value, `Nothing` for null.
#[inline]
pub fn of<A>(value: Option<A>) -> Maybe<A> {
    value.into()
}

/// Returns `true` if the maybe is a `Just`.
#[inline]
pub const fn is_just<A>(maybe: &Maybe<A>) -> bool {
    maybe.is_just()
}

/// Returns `true` if the maybe is a `Nothing`.
#[inline]
pub const fn is_nothing<A>(maybe: &Maybe<A>) -> bool {
    maybe.is_nothing()
}

/// Returns the payload of a `Just`; `default` for `Nothing` or null.
pub fn from_maybe<A, M>(default: A, maybe: M) -> A
where
    M: Nullable<Maybe<A>>,
{
    match maybe.into_nullable() {
        Some(Maybe::Just(value)) => value,
        Some(Maybe::Nothing) | None => default,
    }
}

/// Curried form of [`from_maybe`].
pub fn from_maybe_curried<A: Clone>(default: A) -> impl Fn(Maybe<A>) -> A {
    let curried = crate::curry2!(from_maybe::<A, Maybe<A>>);
    curried(default)
}

/// Returns the payload of a `Just`.
///
/// # Errors
///
/// Returns [`Error::IllegalState`] if the maybe is null or `Nothing`.
pub fn from_just<A, M>(maybe: M) -> Result<A, Error>
where
    M: Nullable<Maybe<A>>,
{
    maybe.into_nullable().unwrap_or_default().from_just()
}

/// The catamorphism over a nullable maybe: `morphism(value)` for a `Just`,
/// `default` for `Nothing` or null.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `morphism` is null, whatever the
/// variant of `maybe`.
pub fn maybe_map<A, R, F, M>(default: R, morphism: Option<F>, maybe: M) -> Result<R, Error>
where
    F: FnOnce(A) -> R,
    M: Nullable<Maybe<A>>,
{
    let morphism = require_non_null(morphism, "morphism must not be null")?;
    Ok(maybe.into_nullable().unwrap_or_default().maybe_map(default, morphism))
}

/// Partially applied form of [`maybe_map`].
pub fn maybe_map_partial<A, R, F>(
    default: R,
    morphism: Option<F>,
) -> impl Fn(Maybe<A>) -> Result<R, Error>
where
    R: Clone,
    F: FnOnce(A) -> R + Clone,
{
    let curried = crate::curry3!(maybe_map::<A, R, F, Maybe<A>>);
    curried(default)(morphism)
}

/// Curried form of [`maybe_map`].
pub fn maybe_map_curried<'a, A, R, F>(
    default: R,
) -> impl Fn(Option<F>) -> Curried<'a, Maybe<A>, Result<R, Error>>
where
    A: 'a,
    R: Clone + 'a,
    F: FnOnce(A) -> R + Clone + 'a,
{
    let curried = crate::curry3!(maybe_map::<A, R, F, Maybe<A>>);
    let awaiting_morphism = curried(default);
    move |morphism: Option<F>| -> Curried<'a, Maybe<A>, Result<R, Error>> {
        Box::new(awaiting_morphism(morphism))
    }
}

/// `Just` of the first non-null element of the list; `Nothing` for a null or
/// empty list, or one holding only nulls.
///
/// # Examples
///
/// ```rust
/// use functional_extras::data::maybe::{self, Maybe};
///
/// assert_eq!(maybe::list_to_maybe(Some(vec![Some(7), Some(8)])), Maybe::Just(7));
/// assert_eq!(maybe::list_to_maybe(Some(vec![None, Some(8)])), Maybe::Just(8));
/// assert_eq!(maybe::list_to_maybe(None::<Vec<Option<i32>>>), Maybe::Nothing);
/// ```
pub fn list_to_maybe<A, I>(list: Option<I>) -> Maybe<A>
where
    I: IntoIterator<Item = Option<A>>,
{
    Maybe::from(list.into_iter().flatten().flatten().next())
}

/// The payloads of the `Just` elements, in order. Null lists and null
/// elements contribute nothing.
pub fn cat_maybes<A, N, I>(list: Option<I>) -> Vec<A>
where
    I: IntoIterator<Item = N>,
    N: Nullable<Maybe<A>>,
{
    non_null_items::<Maybe<A>, N, I>(list)
        .filter_map(Maybe::into_option)
        .collect()
}

/// Maps every element through `morphism` and keeps the `Just` payloads, in
/// order. A null list is empty.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `morphism` is null.
pub fn map_maybe<A, B, F, I>(morphism: Option<F>, list: Option<I>) -> Result<Vec<B>, Error>
where
    F: FnMut(A) -> Maybe<B>,
    I: IntoIterator<Item = A>,
{
    let morphism = require_non_null(morphism, "morphism must not be null")?;
    Ok(list
        .into_iter()
        .flatten()
        .map(morphism)
        .filter_map(Maybe::into_option)
        .collect())
}

/// Curried form of [`map_maybe`].
pub fn map_maybe_curried<A, B, F>(morphism: Option<F>) -> impl Fn(Vec<A>) -> Result<Vec<B>, Error>
where
    F: FnMut(A) -> Maybe<B> + Clone,
{
    let curried = crate::curry2!(|morphism: Option<F>, list: Vec<A>| {
        map_maybe::<A, B, F, Vec<A>>(morphism, Some(list))
    });
    curried(morphism)
}

/// An empty list for `Nothing` or null, a one-element list for `Just`.
pub fn maybe_to_list<A, M>(maybe: M) -> Vec<A>
where
    M: Nullable<Maybe<A>>,
{
    maybe.into_nullable().map(Maybe::to_list).unwrap_or_default()
}
