//! The Maybe monad.
//!
//! `unit` wraps a value in `Just`; `flat_map` applies the transform to a
//! `Just` payload and short-circuits on `Nothing` without calling it.

use super::Monad;
use crate::control::Maybe;

/// Marker for the Maybe monad over [`Maybe`] values.
///
/// # Examples
///
/// ```rust
/// use funcore::control::Maybe;
/// use funcore::typeclass::{MaybeMonad, Monad};
///
/// fn add(first: Maybe<i32>, second: Maybe<i32>) -> Maybe<i32> {
///     MaybeMonad::flat_map(first, move |a| MaybeMonad::flat_map(second, move |b| MaybeMonad::unit(a + b)))
/// }
///
/// assert_eq!(MaybeMonad::get_or_else(add(Maybe::just(1), Maybe::just(2)), 0), 3);
/// assert_eq!(MaybeMonad::get_or_else(add(Maybe::nothing(), Maybe::just(1)), 0), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MaybeMonad;

impl MaybeMonad {
    /// Escapes the monad: the `Just` payload, or `fallback`.
    #[inline]
    pub fn get_or_else<A>(instance: Maybe<A>, fallback: A) -> A {
        instance.get_or_else(fallback)
    }
}

impl Monad for MaybeMonad {
    type Value<A: 'static> = Maybe<A>;

    #[inline]
    fn unit<A: 'static>(value: A) -> Maybe<A> {
        Maybe::just(value)
    }

    #[inline]
    fn flat_map<A, B, F>(instance: Maybe<A>, transform: F) -> Maybe<B>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> Maybe<B> + 'static,
    {
        instance.flat_map(transform)
    }
}
