//! Null guards for the boundary API.
//!
//! Rust values are never null, so absence is modelled with [`Option`] at the
//! few places where the library accepts "maybe-null" input: morphisms and
//! predicates are passed as `Option<F>`, sum-type instances as anything that
//! implements [`Nullable`] (the bare value or an `Option` of it).
//!
//! # Examples
//!
//! ```rust
//! use functional_extras::guard::{is_not_null, is_null, require_non_null};
//!
//! assert_eq!(require_non_null(Some(3), "value must not be null"), Ok(3));
//! assert!(require_non_null(None::<i32>, "value must not be null").is_err());
//!
//! assert!(is_null(&None::<i32>));
//! assert!(is_not_null(&Some(1)));
//! ```

use crate::Error;

/// Returns the value unchanged if present, otherwise fails with
/// [`Error::InvalidArgument`] carrying `message`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `value` is `None`.
#[inline]
pub fn require_non_null<T>(value: Option<T>, message: &str) -> Result<T, Error> {
    value.ok_or_else(|| {
        tracing::debug!(target: "functional_extras::guard", reason = message, "required argument was null");
        Error::invalid_argument(message)
    })
}

/// Returns `true` if the value is absent.
#[inline]
pub const fn is_null<T>(value: &Option<T>) -> bool {
    value.is_none()
}

/// Returns `true` if the value is present.
#[inline]
pub const fn is_not_null<T>(value: &Option<T>) -> bool {
    value.is_some()
}

/// An argument that may stand for "null" at the API boundary.
///
/// Implemented for every sum type `X` of the crate and for `Option<X>`, so the
/// boundary functions accept both `Maybe::Just(1)` and `None::<Maybe<i32>>`.
pub trait Nullable<T> {
    /// Converts the argument into `Some(value)` or `None` for null.
    fn into_nullable(self) -> Option<T>;
}

/// Implements [`Nullable`] for a sum type and for `Option` of it.
macro_rules! impl_nullable {
    ($type:ident < $($parameter:ident),+ >) => {
        impl<$($parameter),+> $crate::guard::Nullable<$type<$($parameter),+>> for $type<$($parameter),+> {
            #[inline]
            fn into_nullable(self) -> Option<Self> {
                Some(self)
            }
        }

        impl<$($parameter),+> $crate::guard::Nullable<$type<$($parameter),+>>
            for Option<$type<$($parameter),+>>
        {
            #[inline]
            fn into_nullable(self) -> Self {
                self
            }
        }
    };
}

pub(crate) use impl_nullable;

/// Collects the non-null items of a nullable list; a null list is empty.
pub(crate) fn non_null_items<T, N, I>(list: Option<I>) -> impl Iterator<Item = T>
where
    I: IntoIterator<Item = N>,
    N: Nullable<T>,
{
    list.into_iter()
        .flatten()
        .filter_map(|item| item.into_nullable())
}
