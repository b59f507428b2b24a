//! Try type - the outcome of a computation that may fault.
//!
//! A `Try<A>` is either a `Success(A)` or a `Failure(Fault)`. [`attempt`]
//! runs caller code and turns both returned errors and panics into a
//! `Failure`, so the caller deals with a single value instead of two
//! failure channels.
//!
//! Every captured fault is reported as a `tracing` debug event with target
//! `functional_extras::fallible`.
//!
//! # Examples
//!
//! ```rust
//! use functional_extras::data::fallible::{self, Fault, Try};
//!
//! let parsed = fallible::attempt(|| "17".parse::<u8>());
//! assert_eq!(parsed, Try::Success(17));
//!
//! let overflow = fallible::attempt(|| "1700".parse::<u8>());
//! assert!(overflow.is_failure());
//!
//! let (faults, values) = fallible::partition_tries(Some(vec![parsed, overflow]));
//! assert_eq!(values, vec![17]);
//! assert_eq!(faults, vec![Fault::new("number too large to fit in target type")]);
//! ```

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use thiserror::Error;

use crate::Error as ArgumentError;
use crate::compose::Curried;
use crate::data::type_tag;
use crate::guard::{Nullable, impl_nullable, non_null_items, require_non_null};

/// The fault captured by a `Failure`: the rendered message of the error or
/// panic that ended the computation.
///
/// A fault captured from an error keeps that error as its
/// [`source`](std::error::Error::source), so the cause chain survives.
/// Equality and hashing look at the message only.
#[derive(Clone, Debug, Error)]
#[error("{message}")]
pub struct Fault {
    message: String,
    #[source]
    source: Option<Arc<dyn StdError + Send + Sync>>,
}

impl Fault {
    /// Creates a fault with the given message and no source.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Captures an error, keeping it as the source of the fault.
    ///
    /// A `Fault` passes through unchanged. Plain strings become a fault with
    /// their text as the message.
    ///
    /// ```rust
    /// use std::error::Error;
    /// use functional_extras::data::Fault;
    ///
    /// let parse_error = "x".parse::<i32>().unwrap_err();
    /// let fault = Fault::from_error(parse_error);
    /// assert_eq!(fault.message(), "invalid digit found in string");
    /// assert!(fault.source().is_some());
    ///
    /// assert_eq!(Fault::from_error(Fault::new("kept")), Fault::new("kept"));
    /// ```
    pub fn from_error<E>(error: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync>>,
    {
        match error.into().downcast::<Self>() {
            Ok(fault) => *fault,
            Err(error) => Self {
                message: error.to_string(),
                source: Some(Arc::from(error)),
            },
        }
    }

    /// Captures a panic payload. `&str` and `String` payloads keep their text.
    pub fn from_panic(payload: &(dyn Any + Send)) -> Self {
        payload
            .downcast_ref::<&str>()
            .map(|message| Self::new(*message))
            .or_else(|| payload.downcast_ref::<String>().map(Self::new))
            .unwrap_or_else(|| Self::new("panicked with a non-string payload"))
    }

    /// The fault message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl PartialEq for Fault {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
    }
}

impl Eq for Fault {}

impl Hash for Fault {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.message.hash(state);
    }
}

/// The outcome of a computation: `Success(value)` or `Failure(fault)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Try<A> {
    /// The computation faulted.
    Failure(Fault),
    /// The computation produced a value.
    Success(A),
}

impl_nullable!(Try<A>);

static_assertions::assert_impl_all!(Fault: Send, Sync, std::error::Error);
static_assertions::assert_impl_all!(Try<String>: Send, Sync, Clone);

impl<A> Try<A> {
    /// Returns `true` for `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns `true` for `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The fault of a `Failure`, or `default` for a `Success`.
    pub fn from_failure(self, default: Fault) -> Fault {
        match self {
            Self::Failure(fault) => fault,
            Self::Success(_) => default,
        }
    }

    /// The value of a `Success`, or `default` for a `Failure`.
    pub fn from_success(self, default: A) -> A {
        match self {
            Self::Failure(_) => default,
            Self::Success(value) => value,
        }
    }

    /// The catamorphism: exactly one of the two morphisms runs.
    pub fn try_map<C, F, G>(self, failure_morphism: F, success_morphism: G) -> C
    where
        F: FnOnce(Fault) -> C,
        G: FnOnce(A) -> C,
    {
        match self {
            Self::Failure(fault) => failure_morphism(fault),
            Self::Success(value) => success_morphism(value),
        }
    }

    /// Maps the value of a `Success`.
    pub fn map<B, F>(self, function: F) -> Try<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Failure(fault) => Try::Failure(fault),
            Self::Success(value) => Try::Success(function(value)),
        }
    }

    /// Chains a computation that may itself fail.
    ///
    /// ```rust
    /// use functional_extras::data::fallible::{self, Try};
    ///
    /// let reciprocal = |x: f64| {
    ///     fallible::attempt(|| if x == 0.0 { Err("division by zero") } else { Ok(1.0 / x) })
    /// };
    /// assert_eq!(Try::Success(4.0).flat_map(reciprocal), Try::Success(0.25));
    /// assert!(Try::Success(0.0).flat_map(reciprocal).is_failure());
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> Try<B>
    where
        F: FnOnce(A) -> Try<B>,
    {
        match self {
            Self::Failure(fault) => Try::Failure(fault),
            Self::Success(value) => function(value),
        }
    }

    /// Converts `Success` into `Some` and `Failure` into `None`.
    pub fn success(self) -> Option<A> {
        match self {
            Self::Failure(_) => None,
            Self::Success(value) => Some(value),
        }
    }

    /// Converts `Failure` into `Some` and `Success` into `None`.
    pub fn failure(self) -> Option<Fault> {
        match self {
            Self::Failure(fault) => Some(fault),
            Self::Success(_) => None,
        }
    }
}

impl<A: fmt::Display> fmt::Display for Try<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failure(fault) => write!(formatter, "Failure<{}> {fault}", type_tag::<Fault>()),
            Self::Success(value) => write!(formatter, "Success<{}> {value}", type_tag::<A>()),
        }
    }
}

impl<A> From<Result<A, Fault>> for Try<A> {
    fn from(result: Result<A, Fault>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(fault) => Self::Failure(fault),
        }
    }
}

impl<A> From<Try<A>> for Result<A, Fault> {
    fn from(attempt: Try<A>) -> Self {
        match attempt {
            Try::Failure(fault) => Err(fault),
            Try::Success(value) => Ok(value),
        }
    }
}

fn captured<A>(fault: Fault) -> Try<A> {
    tracing::debug!(target: "functional_extras::fallible", fault = %fault, "computation faulted");
    Try::Failure(fault)
}

/// Runs `supplier` and captures its outcome.
///
/// `Ok(value)` becomes `Success(value)`. A returned error becomes a
/// `Failure` whose fault keeps the error as its source. A panic raised while
/// the supplier runs becomes a `Failure` carrying the panic message.
///
/// The panic hook still runs for a captured panic.
pub fn attempt<A, E, S>(supplier: S) -> Try<A>
where
    S: FnOnce() -> Result<A, E>,
    E: Into<Box<dyn StdError + Send + Sync>>,
{
    match panic::catch_unwind(AssertUnwindSafe(supplier)) {
        Ok(Ok(value)) => Try::Success(value),
        Ok(Err(error)) => captured(Fault::from_error(error)),
        Err(payload) => captured(Fault::from_panic(payload.as_ref())),
    }
}

/// Runs an infallible `supplier`, capturing only a panic as a `Failure`.
///
/// ```rust
/// use functional_extras::data::fallible::{self, Fault, Try};
///
/// let indexed = fallible::attempt_unwind(|| [1, 2, 3][1]);
/// assert_eq!(indexed, Try::Success(2));
///
/// let exploded: Try<i32> = fallible::attempt_unwind(|| panic!("boom"));
/// assert_eq!(exploded, Try::Failure(Fault::new("boom")));
/// ```
pub fn attempt_unwind<A, S>(supplier: S) -> Try<A>
where
    S: FnOnce() -> A,
{
    match panic::catch_unwind(AssertUnwindSafe(supplier)) {
        Ok(value) => Try::Success(value),
        Err(payload) => captured(Fault::from_panic(payload.as_ref())),
    }
}

/// Wraps a fault as a `Failure`.
#[inline]
pub const fn failure<A>(fault: Fault) -> Try<A> {
    Try::Failure(fault)
}

/// Wraps a value as a `Success`.
#[inline]
pub const fn success<A>(value: A) -> Try<A> {
    Try::Success(value)
}

/// Returns `true` if the try is a `Failure`.
#[inline]
pub const fn is_failure<A>(attempt: &Try<A>) -> bool {
    attempt.is_failure()
}

/// Returns `true` if the try is a `Success`.
#[inline]
pub const fn is_success<A>(attempt: &Try<A>) -> bool {
    attempt.is_success()
}

/// The fault of a `Failure`; `default` for a `Success` or null.
pub fn from_failure<A, T>(default: Fault, attempt: T) -> Fault
where
    T: Nullable<Try<A>>,
{
    match attempt.into_nullable() {
        Some(Try::Failure(fault)) => fault,
        Some(Try::Success(_)) | None => default,
    }
}

/// Curried form of [`from_failure`].
pub fn from_failure_curried<A>(default: Fault) -> impl Fn(Try<A>) -> Fault {
    let curried = crate::curry2!(from_failure::<A, Try<A>>);
    curried(default)
}

/// The value of a `Success`; `default` for a `Failure` or null.
pub fn from_success<A, T>(default: A, attempt: T) -> A
where
    T: Nullable<Try<A>>,
{
    match attempt.into_nullable() {
        Some(Try::Success(value)) => value,
        Some(Try::Failure(_)) | None => default,
    }
}

/// Curried form of [`from_success`].
pub fn from_success_curried<A: Clone>(default: A) -> impl Fn(Try<A>) -> A {
    let curried = crate::curry2!(from_success::<A, Try<A>>);
    curried(default)
}

/// The catamorphism over a nullable try.
///
/// # Errors
///
/// Returns [`ArgumentError::InvalidArgument`] if `attempt` is null, or if the
/// morphism for its variant is null. The other morphism is never checked.
pub fn try_map<A, C, F, G, T>(
    failure_morphism: Option<F>,
    success_morphism: Option<G>,
    attempt: T,
) -> Result<C, ArgumentError>
where
    F: FnOnce(Fault) -> C,
    G: FnOnce(A) -> C,
    T: Nullable<Try<A>>,
{
    match require_non_null(attempt.into_nullable(), "tryable must not be null")? {
        Try::Failure(fault) => require_non_null(failure_morphism, "failure morphism must not be null")
            .map(|morphism| morphism(fault)),
        Try::Success(value) => require_non_null(success_morphism, "success morphism must not be null")
            .map(|morphism| morphism(value)),
    }
}

/// Partially applied form of [`try_map`].
pub fn try_map_partial<A, C, F, G>(
    failure_morphism: Option<F>,
    success_morphism: Option<G>,
) -> impl Fn(Try<A>) -> Result<C, ArgumentError>
where
    F: FnOnce(Fault) -> C + Clone,
    G: FnOnce(A) -> C + Clone,
{
    let curried = crate::curry3!(try_map::<A, C, F, G, Try<A>>);
    curried(failure_morphism)(success_morphism)
}

/// Curried form of [`try_map`].
pub fn try_map_curried<'a, A, C, F, G>(
    failure_morphism: Option<F>,
) -> impl Fn(Option<G>) -> Curried<'a, Try<A>, Result<C, ArgumentError>>
where
    A: 'a,
    C: 'a,
    F: FnOnce(Fault) -> C + Clone + 'a,
    G: FnOnce(A) -> C + Clone + 'a,
{
    let curried = crate::curry3!(try_map::<A, C, F, G, Try<A>>);
    let awaiting_success = curried(failure_morphism);
    move |success_morphism: Option<G>| -> Curried<'a, Try<A>, Result<C, ArgumentError>> {
        Box::new(awaiting_success(success_morphism))
    }
}

/// The faults of the `Failure` elements in order. Null lists and null
/// elements are skipped.
pub fn failures<A, N, I>(list: Option<I>) -> Vec<Fault>
where
    I: IntoIterator<Item = N>,
    N: Nullable<Try<A>>,
{
    non_null_items::<Try<A>, N, I>(list)
        .filter_map(Try::failure)
        .collect()
}

/// The values of the `Success` elements in order. Null lists and null
/// elements are skipped.
pub fn successes<A, N, I>(list: Option<I>) -> Vec<A>
where
    I: IntoIterator<Item = N>,
    N: Nullable<Try<A>>,
{
    non_null_items::<Try<A>, N, I>(list)
        .filter_map(Try::success)
        .collect()
}

/// Splits the list into faults and values, keeping the order within each
/// side.
pub fn partition_tries<A, N, I>(list: Option<I>) -> (Vec<Fault>, Vec<A>)
where
    I: IntoIterator<Item = N>,
    N: Nullable<Try<A>>,
{
    let mut partition = (Vec::new(), Vec::new());
    for attempt in non_null_items::<Try<A>, N, I>(list) {
        match attempt {
            Try::Failure(fault) => partition.0.push(fault),
            Try::Success(value) => partition.1.push(value),
        }
    }
    partition
}
