//! # funcore
//!
//! A small functional algebra for Rust: variants with exhaustive pattern
//! matching, persistent lists, lazy streams, continuation-passing search
//! and the Identity, Maybe and IO monads.
//!
//! ## Overview
//!
//! - **Variants**: tagged values matched through named case handlers, with
//!   a reported [`AlgebraError::IncompleteMatch`] when a case is unhandled
//! - **Function Composition**: `compose!`, `curry2!`, `flip`, `identity`
//! - **Persistent Data Structures**: the immutable singly-linked [`List`](persistent::List)
//! - **Control Structures**: `Thunk`, `Stream`, `Trampoline`, `Maybe` and
//!   continuation-passing `find`
//! - **Type Classes**: the `Monad` trait and its Identity and Maybe instances
//! - **Effect System**: the world-threading `IO` monad and `eff!` do-notation
//!
//! ## Feature Flags
//!
//! - `variant`: the variant engine and `Pair`
//! - `compose`: function composition utilities
//! - `persistent`: the persistent `List`
//! - `control`: thunks, streams, trampolines, `Maybe` and search
//! - `typeclass`: the `Monad` trait and its pure instances
//! - `effect`: the `IO` monad
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use funcore::prelude::*;
//!
//! let naturals = Stream::enum_from(1_i64);
//! let first_large = find(naturals, |n: &i64| *n > 99, continue_search, identity);
//! assert_eq!(first_large, Some(100));
//!
//! let list = List::from_array(&[1, 2, 3]);
//! assert_eq!(list.sum(), 6);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod error;

pub use error::AlgebraError;

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use funcore::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::AlgebraError;

    #[cfg(feature = "variant")]
    pub use crate::variant::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "variant")]
pub mod variant;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "persistent")]
pub mod persistent;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "effect")]
pub mod effect;
