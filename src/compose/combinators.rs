//! Function combinators.
//!
//! Pure, total composition primitives. Every multi-argument combinator has a
//! direct form and a curried form, and both return the same result for the
//! same arguments:
//!
//! ```text
//! compose_curried(g)(f)(x) == compose(g, f)(x) == g(f(x))
//! ```
//!
//! | combinator | definition                       |
//! |------------|----------------------------------|
//! | `identity` | `identity(a) = a`                |
//! | `constant` | `constant(a)(b) = a`             |
//! | `compose`  | `compose(g, f)(x) = g(f(x))`     |
//! | `pipe`     | `pipe(f, g) = compose(g, f)`     |
//! | `flip`     | `flip(f)(b, a) = f(a, b)`        |
//! | `bind`     | `bind(g, f)(x) = g(f(x), x)`     |
//! | `ap`       | `ap(g, f)(x) = g(x, f(x))`       |
//! | `lift_a2`  | `lift_a2(h, g, f)(x) = h(f(x), g(x))` |

use std::rc::Rc;

/// A boxed single-argument step of a curried function.
///
/// Returned by the curried forms whose result is itself a function, since a
/// closure returned from a closure cannot be named with `impl Fn`.
pub type Curried<'a, A, R> = Box<dyn Fn(A) -> R + 'a>;

/// The identity morphism (I combinator).
///
/// # Examples
///
/// ```
/// use functional_extras::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("id"), "id");
/// ```
#[inline]
pub fn identity<A>(value: A) -> A {
    value
}

/// The K combinator: a unary function that ignores its input.
///
/// # Examples
///
/// ```
/// use functional_extras::compose::constant;
///
/// let always_seven = constant::<_, &str>(7);
/// assert_eq!(always_seven("ignored"), 7);
/// ```
#[inline]
pub fn constant<A: Clone, B>(value: A) -> impl Fn(B) -> A {
    move |_| value.clone()
}

/// Alias of [`constant`].
#[inline]
pub fn pure<A: Clone, B>(value: A) -> impl Fn(B) -> A {
    constant(value)
}

/// Composes `second` after `first`.
///
/// # Examples
///
/// ```
/// use functional_extras::compose::compose;
///
/// let increment_then_double = compose(|x: i32| x * 2, |x: i32| x + 1);
/// assert_eq!(increment_then_double(4), 10);
/// ```
#[inline]
pub fn compose<A, B, C, G, F>(second: G, first: F) -> impl Fn(A) -> C
where
    G: Fn(B) -> C,
    F: Fn(A) -> B,
{
    move |value| second(first(value))
}

/// Curried form of [`compose`]: takes `second`, then `first`.
pub fn compose_curried<'a, A, B, C, G, F>(second: G) -> impl Fn(F) -> Curried<'a, A, C>
where
    A: 'a,
    B: 'a,
    C: 'a,
    G: Fn(B) -> C + Clone + 'a,
    F: Fn(A) -> B + 'a,
{
    let curried = crate::curry2!(compose::<A, B, C, G, F>);
    let awaiting_first = curried(second);
    move |first: F| -> Curried<'a, A, C> { Box::new(awaiting_first(first)) }
}

/// Alias of [`compose`].
#[inline]
pub fn fmap<A, B, C, G, F>(second: G, first: F) -> impl Fn(A) -> C
where
    G: Fn(B) -> C,
    F: Fn(A) -> B,
{
    compose(second, first)
}

/// Alias of [`compose_curried`].
pub fn fmap_curried<'a, A, B, C, G, F>(second: G) -> impl Fn(F) -> Curried<'a, A, C>
where
    A: 'a,
    B: 'a,
    C: 'a,
    G: Fn(B) -> C + Clone + 'a,
    F: Fn(A) -> B + 'a,
{
    compose_curried(second)
}

/// Composes `first` before `second`; `pipe(f, g) == compose(g, f)`.
///
/// # Examples
///
/// ```
/// use functional_extras::compose::pipe;
///
/// let shout = pipe(|s: &str| s.to_uppercase(), |s: String| s + "!");
/// assert_eq!(shout("hey"), "HEY!");
/// ```
#[inline]
pub fn pipe<A, B, C, F, G>(first: F, second: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    compose(second, first)
}

/// Curried form of [`pipe`]: takes `first`, then `second`.
pub fn pipe_curried<'a, A, B, C, F, G>(first: F) -> impl Fn(G) -> Curried<'a, A, C>
where
    A: 'a,
    B: 'a,
    C: 'a,
    F: Fn(A) -> B + Clone + 'a,
    G: Fn(B) -> C + 'a,
{
    let curried = crate::curry2!(pipe::<A, B, C, F, G>);
    let awaiting_second = curried(first);
    move |second: G| -> Curried<'a, A, C> { Box::new(awaiting_second(second)) }
}

/// Swaps the arguments of a binary function.
///
/// # Examples
///
/// ```
/// use functional_extras::compose::flip;
///
/// let subtract = |minuend: i32, subtrahend: i32| minuend - subtrahend;
/// let subtract_from = flip(subtract);
///
/// assert_eq!(subtract_from(3, 10), 7);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}

/// Swaps the arguments of a curried binary function:
/// `flip_curried(f)(b)(a) == f(a)(b)`.
///
/// # Examples
///
/// ```
/// use functional_extras::compose::flip_curried;
///
/// let divide = |numerator: i32| move |denominator: i32| numerator / denominator;
/// let divide_by = flip_curried(divide);
///
/// assert_eq!(divide_by(4)(20), 5);
/// ```
pub fn flip_curried<'a, A, B, C, F, G>(function: F) -> impl Fn(B) -> Curried<'a, A, C>
where
    A: 'a,
    B: Clone + 'a,
    C: 'a,
    F: Fn(A) -> G + 'a,
    G: Fn(B) -> C + 'a,
{
    let function = Rc::new(function);
    move |second: B| -> Curried<'a, A, C> {
        let function = Rc::clone(&function);
        Box::new(move |first: A| function(first)(second.clone()))
    }
}

/// Applies `first` to the input and hands the intermediate together with the
/// original input to `second`: `bind(g, f)(x) == g(f(x), x)`.
///
/// # Examples
///
/// ```
/// use functional_extras::compose::bind;
///
/// let describe = bind(|length: usize, word: &str| format!("{word}:{length}"), |word: &str| word.len());
/// assert_eq!(describe("rust"), "rust:4");
/// ```
#[inline]
pub fn bind<A, B, C, G, F>(second: G, first: F) -> impl Fn(A) -> C
where
    A: Clone,
    G: Fn(B, A) -> C,
    F: Fn(A) -> B,
{
    move |value: A| second(first(value.clone()), value)
}

/// Curried form of [`bind`]: takes `second`, then `first`.
pub fn bind_curried<'a, A, B, C, G, F>(second: G) -> impl Fn(F) -> Curried<'a, A, C>
where
    A: Clone + 'a,
    B: 'a,
    C: 'a,
    G: Fn(B, A) -> C + Clone + 'a,
    F: Fn(A) -> B + 'a,
{
    let curried = crate::curry2!(bind::<A, B, C, G, F>);
    let awaiting_first = curried(second);
    move |first: F| -> Curried<'a, A, C> { Box::new(awaiting_first(first)) }
}

/// `ap(g, f)(x) == lift_a2(g, f, identity)(x) == g(x, f(x))`.
///
/// # Examples
///
/// ```
/// use functional_extras::compose::ap;
///
/// let with_square = ap(|x: i32, square: i32| (x, square), |x: i32| x * x);
/// assert_eq!(with_square(3), (3, 9));
/// ```
#[inline]
pub fn ap<A, B, C, G, F>(second: G, first: F) -> impl Fn(A) -> C
where
    A: Clone,
    G: Fn(A, B) -> C,
    F: Fn(A) -> B,
{
    lift_a2(second, first, identity)
}

/// Curried form of [`ap`]: takes `second`, then `first`.
pub fn ap_curried<'a, A, B, C, G, F>(second: G) -> impl Fn(F) -> Curried<'a, A, C>
where
    A: Clone + 'a,
    B: 'a,
    C: 'a,
    G: Fn(A, B) -> C + Clone + 'a,
    F: Fn(A) -> B + 'a,
{
    let curried = crate::curry2!(ap::<A, B, C, G, F>);
    let awaiting_first = curried(second);
    move |first: F| -> Curried<'a, A, C> { Box::new(awaiting_first(first)) }
}

/// Applies two functions to the same input and combines the results:
/// `lift_a2(h, g, f)(x) == h(f(x), g(x))`. `first` runs before `second`.
///
/// # Examples
///
/// ```
/// use functional_extras::compose::lift_a2;
///
/// let mean = lift_a2(
///     |sum: i32, count: i32| sum / count,
///     |values: Vec<i32>| values.len() as i32,
///     |values: Vec<i32>| values.iter().sum::<i32>(),
/// );
/// assert_eq!(mean(vec![2, 4, 6]), 4);
/// ```
#[inline]
pub fn lift_a2<A, B, C, D, H, G, F>(combine: H, second: G, first: F) -> impl Fn(A) -> D
where
    A: Clone,
    H: Fn(B, C) -> D,
    G: Fn(A) -> C,
    F: Fn(A) -> B,
{
    move |value: A| {
        let first_result = first(value.clone());
        combine(first_result, second(value))
    }
}

/// Partially applied form of [`lift_a2`]: takes `combine` and `second`,
/// then `first`.
pub fn lift_a2_partial<'a, A, B, C, D, H, G, F>(
    combine: H,
    second: G,
) -> impl Fn(F) -> Curried<'a, A, D>
where
    A: Clone + 'a,
    B: 'a,
    C: 'a,
    D: 'a,
    H: Fn(B, C) -> D + Clone + 'a,
    G: Fn(A) -> C + Clone + 'a,
    F: Fn(A) -> B + 'a,
{
    let curried = crate::curry3!(lift_a2::<A, B, C, D, H, G, F>);
    let awaiting_first = curried(combine)(second);
    move |first: F| -> Curried<'a, A, D> { Box::new(awaiting_first(first)) }
}

/// Curried form of [`lift_a2`]: takes `combine`, then `second`, then `first`.
pub fn lift_a2_curried<'a, A, B, C, D, H, G, F>(
    combine: H,
) -> impl Fn(G) -> Curried<'a, F, Curried<'a, A, D>>
where
    A: Clone + 'a,
    B: 'a,
    C: 'a,
    D: 'a,
    H: Fn(B, C) -> D + Clone + 'a,
    G: Fn(A) -> C + Clone + 'a,
    F: Fn(A) -> B + 'a,
{
    let curried = crate::curry3!(lift_a2::<A, B, C, D, H, G, F>);
    let awaiting_second = curried(combine);
    move |second: G| -> Curried<'a, F, Curried<'a, A, D>> {
        let awaiting_first = awaiting_second(second);
        Box::new(move |first: F| -> Curried<'a, A, D> { Box::new(awaiting_first(first)) })
    }
}
