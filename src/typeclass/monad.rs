//! Monad type class - sequencing computations within a context.
//!
//! A monad here is a *module of operations*, not a method on a value: an
//! implementing type is a zero-sized marker (`IdentityMonad`,
//! `MaybeMonad`, `IoMonad`) that names the shape of its monadic values
//! through the generic associated type [`Monad::Value`]. This lets the
//! identity monad use the plain value itself as its monadic value, which
//! a method-style trait could not express.
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy these laws:
//!
//! ## Left Identity Law
//!
//! ```text
//! flat_map(unit(a), f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! flat_map(m, unit) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! flat_map(flat_map(m, f), g) == flat_map(m, |x| flat_map(f(x), g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use funcore::typeclass::{IdentityMonad, Monad};
//!
//! let succ = |n: i32| n + 1;
//! let result = IdentityMonad::flat_map(IdentityMonad::unit(1), move |one| IdentityMonad::unit(succ(one)));
//! assert_eq!(result, 2);
//! ```

/// A type class for sequencing dependent computations.
///
/// Implementors are markers; the monadic values are
/// [`Self::Value<A>`](Monad::Value).
pub trait Monad: 'static {
    /// The monadic value holding an `A`.
    type Value<A: 'static>;

    /// Lifts a plain value into the monad.
    fn unit<A: 'static>(value: A) -> Self::Value<A>;

    /// Sequences `transform` after `instance`.
    ///
    /// In Haskell, this is `>>=` (bind).
    fn flat_map<A, B, F>(instance: Self::Value<A>, transform: F) -> Self::Value<B>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> Self::Value<B> + 'static;

    /// Applies a plain function inside the monad.
    ///
    /// Derived from [`Monad::flat_map`] and [`Monad::unit`].
    fn map<A, B, F>(instance: Self::Value<A>, function: F) -> Self::Value<B>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> B + 'static,
    {
        Self::flat_map(instance, move |value| Self::unit(function(value)))
    }

    /// Kleisli composition: runs `first`, then `second` on its result.
    fn compose_kleisli<A, B, C, F, G>(first: F, second: G) -> impl FnOnce(A) -> Self::Value<C>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        F: FnOnce(A) -> Self::Value<B> + 'static,
        G: FnOnce(B) -> Self::Value<C> + 'static,
    {
        move |value| Self::flat_map(first(value), second)
    }
}
