//! The curry macros behind the crate's `_partial` and `_curried` forms.
//!
//! Every boundary function of the data modules has a direct form. The other
//! forms are generated from it here rather than written by hand:
//!
//! - [`curry2!`] builds the one-step forms: every `from_*_curried`,
//!   `map_maybe_curried` and `concat_curried`.
//! - [`curry3!`] builds `maybe_map_partial`, `either_map_partial`,
//!   `try_map_partial`, `validation_map_partial` and `validate_partial` by
//!   stopping after the second argument.
//! - The two-step forms (`maybe_map_curried`, `validate_curried` and the
//!   other `*_map_curried`) take the same `curry3!` chain and box its middle
//!   step into a [`Curried`](crate::compose::Curried).
//!
//! Captured arguments are shared through `std::rc::Rc`, so every step stays
//! `Fn` and can be called repeatedly. Every argument except the last must be
//! [`Clone`].

/// Converts a 2-argument function into a chain of two 1-argument closures.
///
/// `curry2!(f)(a)(b) == f(a, b)`.
///
/// # Examples
///
/// ```
/// use functional_extras::curry2;
///
/// fn power(base: i64, exponent: u32) -> i64 { base.pow(exponent) }
///
/// let curried = curry2!(power);
/// let powers_of_two = curried(2);
///
/// assert_eq!(powers_of_two(10), 1024);
/// assert_eq!(powers_of_two(3), 8);
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            let first = ::std::rc::Rc::new(first);
            move |second| {
                function(
                    ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&first)),
                    second,
                )
            }
        }
    }};
}

/// Converts a 3-argument function into a chain of three 1-argument closures.
///
/// `curry3!(f)(a)(b)(c) == f(a, b, c)`. Stopping after the second argument
/// yields the partially applied form.
///
/// # Examples
///
/// ```
/// use functional_extras::curry3;
///
/// fn clamp(low: i32, high: i32, value: i32) -> i32 { value.max(low).min(high) }
///
/// let curried = curry3!(clamp);
/// let percentage = curried(0)(100);
///
/// assert_eq!(percentage(120), 100);
/// assert_eq!(percentage(-4), 0);
/// assert_eq!(percentage(42), 42);
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            let first = ::std::rc::Rc::new(first);
            move |second| {
                let function = ::std::rc::Rc::clone(&function);
                let first = ::std::rc::Rc::clone(&first);
                let second = ::std::rc::Rc::new(second);
                move |third| {
                    function(
                        ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&first)),
                        ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&second)),
                        third,
                    )
                }
            }
        }
    }};
}
