//! Optional values as a sum type.
//!
//! [`Maybe`] is `Just(value) | Nothing()`. It represents absence as data:
//! callers inspect it by matching or escape it with
//! [`Maybe::get_or_else`]. It is the value type of the
//! [`MaybeMonad`](crate::typeclass::MaybeMonad).
//!
//! # Examples
//!
//! ```rust
//! use funcore::control::Maybe;
//!
//! fn add(first: Maybe<i32>, second: Maybe<i32>) -> Maybe<i32> {
//!     first.flat_map(|a| second.flat_map(|b| Maybe::just(a + b)))
//! }
//!
//! assert_eq!(add(Maybe::just(1), Maybe::just(2)).get_or_else(0), 3);
//! assert_eq!(add(Maybe::nothing(), Maybe::just(1)).into_option(), None);
//! ```

use std::fmt;

use crate::error::AlgebraError;
use crate::variant::{Handler, Variant};

/// A value that may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<T> {
    /// A present value.
    Just(T),
    /// No value.
    Nothing,
}

impl<T> Maybe<T> {
    /// Wraps a present value.
    #[inline]
    pub const fn just(value: T) -> Self {
        Self::Just(value)
    }

    /// The absent value.
    #[inline]
    #[must_use]
    pub const fn nothing() -> Self {
        Self::Nothing
    }

    /// Returns `true` for `Just`.
    #[inline]
    #[must_use]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` for `Nothing`.
    #[inline]
    #[must_use]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Exhaustive match over the two cases.
    pub fn match_case<R, J, N>(self, on_just: J, on_nothing: N) -> R
    where
        J: FnOnce(T) -> R,
        N: FnOnce() -> R,
    {
        match self {
            Self::Just(value) => on_just(value),
            Self::Nothing => on_nothing(),
        }
    }

    /// Sequences a computation that may itself be absent.
    ///
    /// `Nothing` short-circuits: `transform` is not called.
    pub fn flat_map<U, F>(self, transform: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Just(value) => transform(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Transforms a present value.
    pub fn map<U, F>(self, transform: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        self.flat_map(|value| Maybe::Just(transform(value)))
    }

    /// Returns the payload of `Just`, or `fallback` for `Nothing`.
    pub fn get_or_else(self, fallback: T) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => fallback,
        }
    }

    /// Converts to the standard library's `Option`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::Nothing
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Nothing, Self::Just)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => write!(formatter, "Just({value})"),
            Self::Nothing => write!(formatter, "Nothing"),
        }
    }
}

/// Case table for [`Maybe`].
pub struct MaybeCases<'a, T, R> {
    just: Handler<'a, (T,), R>,
    nothing: Handler<'a, (), R>,
}

impl<'a, T, R> MaybeCases<'a, T, R> {
    /// A table with no handlers.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            just: Handler::missing(),
            nothing: Handler::missing(),
        }
    }

    /// Registers the handler for `Just(value)`.
    #[must_use]
    pub fn on_just<F>(mut self, handler: F) -> Self
    where
        F: FnOnce(T) -> R + 'a,
    {
        self.just = Handler::new(move |(value,)| handler(value));
        self
    }

    /// Registers the handler for `Nothing()`.
    #[must_use]
    pub fn on_nothing<F>(mut self, handler: F) -> Self
    where
        F: FnOnce() -> R + 'a,
    {
        self.nothing = Handler::new(move |()| handler());
        self
    }
}

impl<T, R> Default for MaybeCases<'_, T, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Variant for Maybe<T> {
    const TYPE_NAME: &'static str = "Maybe";
    const CASES: &'static [&'static str] = &["Just", "Nothing"];

    type Cases<'a, R> = MaybeCases<'a, T, R>;

    fn case_name(&self) -> &'static str {
        match self {
            Self::Just(_) => "Just",
            Self::Nothing => "Nothing",
        }
    }

    fn match_with<'a, R>(self, cases: Self::Cases<'a, R>) -> Result<R, AlgebraError> {
        match self {
            Self::Just(value) => cases.just.dispatch(Self::TYPE_NAME, "Just", (value,)),
            Self::Nothing => cases.nothing.dispatch(Self::TYPE_NAME, "Nothing", ()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Maybe::just(5), 5)]
    #[case(Maybe::nothing(), -1)]
    fn test_get_or_else(#[case] maybe: Maybe<i32>, #[case] expected: i32) {
        assert_eq!(maybe.get_or_else(-1), expected);
    }

    #[rstest]
    fn test_flat_map_short_circuits_on_nothing() {
        let mut called = false;
        let result: Maybe<i32> = Maybe::<i32>::nothing().flat_map(|value| {
            called = true;
            Maybe::just(value + 1)
        });
        assert_eq!(result, Maybe::Nothing);
        assert!(!called);
    }

    #[rstest]
    fn test_map_transforms_just() {
        assert_eq!(Maybe::just(2).map(|n| n * 3), Maybe::just(6));
    }

    #[rstest]
    fn test_option_conversions() {
        assert_eq!(Maybe::from(Some(1)), Maybe::just(1));
        assert_eq!(Maybe::<i32>::from(None), Maybe::nothing());
        assert_eq!(Option::from(Maybe::just(1)), Some(1));
    }

    #[rstest]
    fn test_match_with_dispatches_to_case() {
        let cases = || MaybeCases::new().on_just(|value: i32| value * 2).on_nothing(|| 0);
        assert_eq!(Maybe::just(21).match_with(cases()), Ok(42));
        assert_eq!(Maybe::nothing().match_with(cases()), Ok(0));
    }

    #[rstest]
    fn test_match_with_missing_nothing_handler() {
        let result = Maybe::<i32>::nothing().match_with(MaybeCases::new().on_just(|value| value));
        assert_eq!(
            result,
            Err(AlgebraError::IncompleteMatch {
                type_name: "Maybe",
                case: "Nothing",
            })
        );
    }

    #[rstest]
    fn test_display() {
        assert_eq!(Maybe::just(3).to_string(), "Just(3)");
        assert_eq!(Maybe::<i32>::nothing().to_string(), "Nothing");
    }
}
