//! Function composition utilities.
//!
//! - [`compose!`](crate::compose!): compose functions right-to-left
//! - [`curry2!`](crate::curry2!): convert a binary function to curried form
//! - [`identity`], [`constant`], [`flip`], [`flip_curried`], [`compose()`]
//!
//! # Examples
//!
//! ```
//! use funcore::compose::{flip_curried, Curried};
//! use funcore::compose;
//!
//! fn exponential(base: u64) -> Curried<u64, u64> {
//!     Box::new(move |index| base.pow(index as u32))
//! }
//!
//! let square = flip_curried(exponential)(2);
//! let cube = flip_curried(exponential)(3);
//! assert_eq!(compose!(cube, square)(2), 64);
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`
//! - **Double Flip**: `flip(flip(f)) == f`

mod compose_macro;
mod utils;

pub use utils::{Curried, compose, constant, flip, flip_curried, identity};

pub use crate::compose;
pub use crate::curry2;
