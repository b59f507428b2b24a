//! Function composition utilities.
//!
//! Point-free building blocks that the sum-type modules reuse to build their
//! curried APIs.
//!
//! # Overview
//!
//! - [`identity`], [`constant`] / [`pure`]: the I and K combinators
//! - [`compose`] / [`fmap`], [`pipe`]: right-to-left and left-to-right composition
//! - [`flip`], [`flip_curried`]: argument swapping for binary and curried functions
//! - [`bind`], [`ap`], [`lift_a2`]: feeding one input to several functions
//! - [`curry2!`], [`curry3!`]: mechanical currying of 2- and 3-argument functions
//! - [`Curried`]: the boxed step returned where a curried form yields another function
//!
//! # Laws
//!
//! - **Left identity**: `compose(identity, f) == f`
//! - **Right identity**: `compose(f, identity) == f`
//! - **Associativity**: `compose(f, compose(g, h)) == compose(compose(f, g), h)`
//! - **Double flip**: `flip(flip(f)) == f`
//! - **Curry equivalence**: `f_curried(a)(b) == f(a, b)`
//!
//! # Examples
//!
//! ```
//! use functional_extras::compose::{compose, flip, identity, pipe};
//!
//! let add_one = |x: i32| x + 1;
//! let double = |x: i32| x * 2;
//!
//! assert_eq!(compose(add_one, double)(5), 11);
//! assert_eq!(pipe(add_one, double)(5), 12);
//! assert_eq!(compose(identity, double)(5), double(5));
//!
//! let minus = |a: i32, b: i32| a - b;
//! assert_eq!(flip(minus)(1, 10), 9);
//! ```

mod combinators;
mod curry_macro;

pub use combinators::{
    Curried, ap, ap_curried, bind, bind_curried, compose, compose_curried, constant, flip,
    flip_curried, fmap, fmap_curried, identity, lift_a2, lift_a2_curried, lift_a2_partial, pipe,
    pipe_curried, pure,
};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::curry2;
pub use crate::curry3;
