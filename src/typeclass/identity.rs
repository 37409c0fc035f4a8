//! The identity monad.
//!
//! The identity monad adds no context at all: its monadic value *is* the
//! plain value, `unit` is the identity function and `flat_map` is
//! function application. It is the simplest model against which the
//! monad laws can be checked.

use super::Monad;

/// Marker for the identity monad.
///
/// # Examples
///
/// ```rust
/// use funcore::typeclass::{IdentityMonad, Monad};
///
/// let succ = |n: i32| n + 1;
/// let double = |n: i32| n * 2;
///
/// // flat_map chains behave like function composition.
/// let result = IdentityMonad::flat_map(IdentityMonad::unit(1), move |one| {
///     IdentityMonad::flat_map(IdentityMonad::unit(succ(one)), move |two| IdentityMonad::unit(double(two)))
/// });
/// assert_eq!(result, double(succ(1)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IdentityMonad;

impl Monad for IdentityMonad {
    type Value<A: 'static> = A;

    #[inline]
    fn unit<A: 'static>(value: A) -> A {
        value
    }

    #[inline]
    fn flat_map<A, B, F>(instance: A, transform: F) -> B
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> B + 'static,
    {
        transform(instance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_unit_is_identity() {
        assert_eq!(IdentityMonad::unit(1), 1);
        assert_eq!(IdentityMonad::unit("hello"), "hello");
    }

    #[rstest]
    fn test_flat_map_is_application() {
        let succ = |n: i32| n + 1;
        assert_eq!(IdentityMonad::flat_map(IdentityMonad::unit(1), succ), succ(1));
    }

    #[rstest]
    fn test_laws_on_concrete_values() {
        let instance = IdentityMonad::unit(1);
        let f = |n: i32| IdentityMonad::unit(n + 1);
        let g = |n: i32| IdentityMonad::unit(-n);

        assert_eq!(IdentityMonad::flat_map(instance, IdentityMonad::unit), instance);
        assert_eq!(IdentityMonad::flat_map(IdentityMonad::unit(1), f), f(1));
        assert_eq!(
            IdentityMonad::flat_map(IdentityMonad::flat_map(instance, f), g),
            IdentityMonad::flat_map(instance, move |x| IdentityMonad::flat_map(f(x), g))
        );
    }
}
