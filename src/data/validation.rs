//! Validation type - a result that accumulates every failure.
//!
//! A `Validation<F, S>` is either `Valid(S)` or `Invalid(Vec<F>)`. Unlike
//! `Either`, combining two invalid values keeps the failures of both, so a
//! batch of independent checks reports everything that went wrong at once.
//!
//! Combination goes through [`concat`] (or the [`Semigroup`] instance):
//!
//! | first        | second       | result                  |
//! |--------------|--------------|-------------------------|
//! | `Valid(a)`   | `Valid(b)`   | `Valid(a)`              |
//! | `Invalid(x)` | `Valid(b)`   | `Invalid(x)`            |
//! | `Valid(a)`   | `Invalid(y)` | `Invalid(y)`            |
//! | `Invalid(x)` | `Invalid(y)` | `Invalid(x ++ y)`       |
//!
//! # Examples
//!
//! ```rust
//! use functional_extras::data::validation::{self, Validation};
//!
//! let name = validation::validate(Some(|n: &&str| !n.is_empty()), "name is empty", "");
//! let city = validation::validate(Some(|c: &&str| c.len() < 20), "city too long", "Oslo");
//! let code = validation::validate(Some(|c: &&str| c.len() == 4), "bad postcode", "12");
//!
//! let checked = validation::concat_all(vec![name.unwrap(), city.unwrap(), code.unwrap()]);
//! assert_eq!(checked, Some(Validation::Invalid(vec!["name is empty", "bad postcode"])));
//! ```

use std::fmt;

use crate::Error;
use crate::compose::Curried;
use crate::data::type_tag;
use crate::guard::{Nullable, impl_nullable, non_null_items, require_non_null};
use crate::typeclass::Semigroup;

/// A checked value: `Valid(value)` or `Invalid(failures)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Validation<F, S> {
    /// The check failed; holds every failure in order.
    Invalid(Vec<F>),
    /// The check passed.
    Valid(S),
}

impl_nullable!(Validation<F, S>);

static_assertions::assert_impl_all!(Validation<String, u64>: Send, Sync, Clone);

impl<F, S> Validation<F, S> {
    /// Returns `true` for `Invalid`.
    #[inline]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// Returns `true` for `Valid`.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// The failures of an `Invalid`, or `default` for a `Valid`.
    pub fn from_invalid(self, default: Vec<F>) -> Vec<F> {
        match self {
            Self::Invalid(failures) => failures,
            Self::Valid(_) => default,
        }
    }

    /// The value of a `Valid`, or `default` for an `Invalid`.
    pub fn from_valid(self, default: S) -> S {
        match self {
            Self::Invalid(_) => default,
            Self::Valid(value) => value,
        }
    }

    /// The catamorphism: exactly one of the two morphisms runs.
    pub fn validation_map<C, G, H>(self, invalid_morphism: G, valid_morphism: H) -> C
    where
        G: FnOnce(Vec<F>) -> C,
        H: FnOnce(S) -> C,
    {
        match self {
            Self::Invalid(failures) => invalid_morphism(failures),
            Self::Valid(value) => valid_morphism(value),
        }
    }

    /// Combines `self` (the first validation) with `second`.
    ///
    /// The first `Valid` wins over a `Valid`, any `Invalid` wins over a
    /// `Valid`, and two `Invalid`s concatenate their failures, first then
    /// second.
    ///
    /// ```rust
    /// use functional_extras::data::Validation;
    ///
    /// let first: Validation<&str, i32> = Validation::Invalid(vec!["a"]);
    /// let second = Validation::Invalid(vec!["b", "c"]);
    /// assert_eq!(first.concat(second), Validation::Invalid(vec!["a", "b", "c"]));
    /// ```
    #[must_use]
    pub fn concat(self, second: Self) -> Self {
        match (self, second) {
            (Self::Invalid(failures), Self::Invalid(more)) => Self::Invalid(failures.combine(more)),
            (Self::Valid(_), invalid @ Self::Invalid(_)) => invalid,
            (first, Self::Valid(_)) => first,
        }
    }

    /// Maps the value of a `Valid`.
    pub fn map<T, H>(self, function: H) -> Validation<F, T>
    where
        H: FnOnce(S) -> T,
    {
        match self {
            Self::Invalid(failures) => Validation::Invalid(failures),
            Self::Valid(value) => Validation::Valid(function(value)),
        }
    }

    /// Converts `Valid` into `Some` and `Invalid` into `None`.
    pub fn valid(self) -> Option<S> {
        match self {
            Self::Invalid(_) => None,
            Self::Valid(value) => Some(value),
        }
    }

    /// Converts `Invalid` into `Some(failures)` and `Valid` into `None`.
    pub fn invalid(self) -> Option<Vec<F>> {
        match self {
            Self::Invalid(failures) => Some(failures),
            Self::Valid(_) => None,
        }
    }
}

impl<F, S> Semigroup for Validation<F, S> {
    fn combine(self, other: Self) -> Self {
        self.concat(other)
    }
}

impl<F: fmt::Display, S: fmt::Display> fmt::Display for Validation<F, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(failures) => {
                write!(formatter, "Invalid<{}> [", type_tag::<Vec<F>>())?;
                for (index, failure) in failures.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(",")?;
                    }
                    write!(formatter, "{failure}")?;
                }
                formatter.write_str("]")
            }
            Self::Valid(value) => write!(formatter, "Valid<{}> {value}", type_tag::<S>()),
        }
    }
}

impl<F, S> From<Result<S, Vec<F>>> for Validation<F, S> {
    fn from(result: Result<S, Vec<F>>) -> Self {
        match result {
            Ok(value) => Self::Valid(value),
            Err(failures) => Self::Invalid(failures),
        }
    }
}

impl<F, S> From<Validation<F, S>> for Result<S, Vec<F>> {
    fn from(validation: Validation<F, S>) -> Self {
        match validation {
            Validation::Invalid(failures) => Err(failures),
            Validation::Valid(value) => Ok(value),
        }
    }
}

/// An `Invalid` holding the single failure `value`.
#[inline]
pub fn invalid<F, S>(value: F) -> Validation<F, S> {
    Validation::Invalid(vec![value])
}

/// An `Invalid` holding all `values`; a null sequence yields no failures.
#[inline]
pub fn invalid_all<F, S>(values: Option<Vec<F>>) -> Validation<F, S> {
    Validation::Invalid(values.unwrap_or_default())
}

/// A `Valid` of `value`.
#[inline]
pub const fn valid<F, S>(value: S) -> Validation<F, S> {
    Validation::Valid(value)
}

/// Returns `true` if the validation is `Invalid`.
#[inline]
pub const fn is_invalid<F, S>(validation: &Validation<F, S>) -> bool {
    validation.is_invalid()
}

/// Returns `true` if the validation is `Valid`.
#[inline]
pub const fn is_valid<F, S>(validation: &Validation<F, S>) -> bool {
    validation.is_valid()
}

/// The failures of an `Invalid`; `default` for a `Valid` or null.
pub fn from_invalid<F, S, V>(default: Vec<F>, validation: V) -> Vec<F>
where
    V: Nullable<Validation<F, S>>,
{
    match validation.into_nullable() {
        Some(Validation::Invalid(failures)) => failures,
        Some(Validation::Valid(_)) | None => default,
    }
}

/// Curried form of [`from_invalid`].
pub fn from_invalid_curried<F: Clone, S>(default: Vec<F>) -> impl Fn(Validation<F, S>) -> Vec<F> {
    let curried = crate::curry2!(from_invalid::<F, S, Validation<F, S>>);
    curried(default)
}

/// The value of a `Valid`; `default` for an `Invalid` or null.
pub fn from_valid<F, S, V>(default: S, validation: V) -> S
where
    V: Nullable<Validation<F, S>>,
{
    match validation.into_nullable() {
        Some(Validation::Valid(value)) => value,
        Some(Validation::Invalid(_)) | None => default,
    }
}

/// Curried form of [`from_valid`].
pub fn from_valid_curried<F, S: Clone>(default: S) -> impl Fn(Validation<F, S>) -> S {
    let curried = crate::curry2!(from_valid::<F, S, Validation<F, S>>);
    curried(default)
}

/// The catamorphism over a nullable validation.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `validation` is null, or if the
/// morphism for its variant is null. The other morphism is never checked.
pub fn validation_map<F, S, C, G, H, V>(
    invalid_morphism: Option<G>,
    valid_morphism: Option<H>,
    validation: V,
) -> Result<C, Error>
where
    G: FnOnce(Vec<F>) -> C,
    H: FnOnce(S) -> C,
    V: Nullable<Validation<F, S>>,
{
    match require_non_null(validation.into_nullable(), "validation must not be null")? {
        Validation::Invalid(failures) => {
            require_non_null(invalid_morphism, "invalid morphism must not be null")
                .map(|morphism| morphism(failures))
        }
        Validation::Valid(value) => require_non_null(valid_morphism, "valid morphism must not be null")
            .map(|morphism| morphism(value)),
    }
}

/// Partially applied form of [`validation_map`].
pub fn validation_map_partial<F, S, C, G, H>(
    invalid_morphism: Option<G>,
    valid_morphism: Option<H>,
) -> impl Fn(Validation<F, S>) -> Result<C, Error>
where
    G: FnOnce(Vec<F>) -> C + Clone,
    H: FnOnce(S) -> C + Clone,
{
    let curried = crate::curry3!(validation_map::<F, S, C, G, H, Validation<F, S>>);
    curried(invalid_morphism)(valid_morphism)
}

/// Curried form of [`validation_map`].
pub fn validation_map_curried<'a, F, S, C, G, H>(
    invalid_morphism: Option<G>,
) -> impl Fn(Option<H>) -> Curried<'a, Validation<F, S>, Result<C, Error>>
where
    F: 'a,
    S: 'a,
    C: 'a,
    G: FnOnce(Vec<F>) -> C + Clone + 'a,
    H: FnOnce(S) -> C + Clone + 'a,
{
    let curried = crate::curry3!(validation_map::<F, S, C, G, H, Validation<F, S>>);
    let awaiting_valid = curried(invalid_morphism);
    move |valid_morphism: Option<H>| -> Curried<'a, Validation<F, S>, Result<C, Error>> {
        Box::new(awaiting_valid(valid_morphism))
    }
}

/// The failures of every `Invalid` element, flattened in order. Null lists
/// and null elements are skipped.
pub fn invalids<F, S, N, I>(list: Option<I>) -> Vec<F>
where
    I: IntoIterator<Item = N>,
    N: Nullable<Validation<F, S>>,
{
    non_null_items::<Validation<F, S>, N, I>(list)
        .filter_map(Validation::invalid)
        .flatten()
        .collect()
}

/// The values of the `Valid` elements in order. Null lists and null elements
/// are skipped.
pub fn valids<F, S, N, I>(list: Option<I>) -> Vec<S>
where
    I: IntoIterator<Item = N>,
    N: Nullable<Validation<F, S>>,
{
    non_null_items::<Validation<F, S>, N, I>(list)
        .filter_map(Validation::valid)
        .collect()
}

/// Splits the list into its flattened failures and its values, keeping the
/// order within each side.
pub fn partition_validations<F, S, N, I>(list: Option<I>) -> (Vec<F>, Vec<S>)
where
    I: IntoIterator<Item = N>,
    N: Nullable<Validation<F, S>>,
{
    let mut partition = (Vec::new(), Vec::new());
    for validation in non_null_items::<Validation<F, S>, N, I>(list) {
        match validation {
            Validation::Invalid(mut failures) => partition.0.append(&mut failures),
            Validation::Valid(value) => partition.1.push(value),
        }
    }
    partition
}

/// `Valid(value)` if `predicate` holds for `value`, otherwise
/// `Invalid([invalid_value])`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `predicate` is null.
pub fn validate<F, S, P>(
    predicate: Option<P>,
    invalid_value: F,
    value: S,
) -> Result<Validation<F, S>, Error>
where
    P: FnOnce(&S) -> bool,
{
    let predicate = require_non_null(predicate, "predicate must not be null")?;
    Ok(if predicate(&value) {
        Validation::Valid(value)
    } else {
        invalid(invalid_value)
    })
}

/// Partially applied form of [`validate`].
///
/// ```rust
/// use functional_extras::data::validation::{self, Validation};
///
/// let adult = validation::validate_partial(Some(|age: &u8| *age >= 18), "minor");
/// assert_eq!(adult(30), Ok(Validation::Valid(30)));
/// assert_eq!(adult(12), Ok(Validation::Invalid(vec!["minor"])));
/// ```
pub fn validate_partial<F, S, P>(
    predicate: Option<P>,
    invalid_value: F,
) -> impl Fn(S) -> Result<Validation<F, S>, Error>
where
    F: Clone,
    P: FnOnce(&S) -> bool + Clone,
{
    let curried = crate::curry3!(validate::<F, S, P>);
    curried(predicate)(invalid_value)
}

/// Curried form of [`validate`].
pub fn validate_curried<'a, F, S, P>(
    predicate: Option<P>,
) -> impl Fn(F) -> Curried<'a, S, Result<Validation<F, S>, Error>>
where
    F: Clone + 'a,
    S: 'a,
    P: FnOnce(&S) -> bool + Clone + 'a,
{
    let curried = crate::curry3!(validate::<F, S, P>);
    let awaiting_invalid_value = curried(predicate);
    move |invalid_value: F| -> Curried<'a, S, Result<Validation<F, S>, Error>> {
        Box::new(awaiting_invalid_value(invalid_value))
    }
}

/// Combines `first` with `second`; see the module table for the four cases.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if either validation is null.
pub fn concat<F, S, V, W>(second: V, first: W) -> Result<Validation<F, S>, Error>
where
    V: Nullable<Validation<F, S>>,
    W: Nullable<Validation<F, S>>,
{
    let second = require_non_null(second.into_nullable(), "second validation must not be null")?;
    let first = require_non_null(first.into_nullable(), "first validation must not be null")?;
    Ok(first.concat(second))
}

/// Curried form of [`concat`]: `concat_curried(second)(first)`.
pub fn concat_curried<F: Clone, S: Clone>(
    second: Validation<F, S>,
) -> impl Fn(Validation<F, S>) -> Result<Validation<F, S>, Error> {
    let curried = crate::curry2!(concat::<F, S, Validation<F, S>, Validation<F, S>>);
    curried(second)
}

/// Folds the validations left to right with [`concat`]; `None` when there
/// are none. No failure is ever dropped.
pub fn concat_all<F, S, I>(validations: I) -> Option<Validation<F, S>>
where
    I: IntoIterator<Item = Validation<F, S>>,
{
    Validation::reduce_all(validations)
}
