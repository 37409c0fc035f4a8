//! Immutable two-slot product.
//!
//! `Pair` has a single case, `Cons(left, right)`. The IO monad uses it to
//! return a value together with the world it was produced in.

use std::fmt;

use super::{Handler, Variant};
use crate::error::AlgebraError;

/// An immutable pair of values.
///
/// # Examples
///
/// ```rust
/// use funcore::variant::Pair;
///
/// let pair = Pair::cons("value", 7);
/// assert_eq!(pair.left(), &"value");
/// assert_eq!(pair.right(), &7);
/// assert_eq!(pair.into_parts(), ("value", 7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Pair<A, B> {
    left: A,
    right: B,
}

impl<A, B> Pair<A, B> {
    /// Builds a pair.
    #[inline]
    pub const fn cons(left: A, right: B) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left slot.
    #[inline]
    pub const fn left(&self) -> &A {
        &self.left
    }

    /// Returns a reference to the right slot.
    #[inline]
    pub const fn right(&self) -> &B {
        &self.right
    }

    /// Consumes the pair, keeping only the left slot.
    #[inline]
    pub fn into_left(self) -> A {
        self.left
    }

    /// Consumes the pair, keeping only the right slot.
    #[inline]
    pub fn into_right(self) -> B {
        self.right
    }

    /// Consumes the pair, returning both slots.
    #[inline]
    pub fn into_parts(self) -> (A, B) {
        (self.left, self.right)
    }

    /// Exhaustive match: applies `on_cons` to both slots.
    #[inline]
    pub fn match_case<R, F>(self, on_cons: F) -> R
    where
        F: FnOnce(A, B) -> R,
    {
        on_cons(self.left, self.right)
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from((left, right): (A, B)) -> Self {
        Self::cons(left, right)
    }
}

impl<A: fmt::Display, B: fmt::Display> fmt::Display for Pair<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.left, self.right)
    }
}

/// Case table for [`Pair`].
pub struct PairCases<'a, A, B, R> {
    cons: Handler<'a, (A, B), R>,
}

impl<'a, A, B, R> PairCases<'a, A, B, R> {
    /// A table with no handlers.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cons: Handler::missing(),
        }
    }

    /// Registers the handler for `Cons(left, right)`.
    #[must_use]
    pub fn on_cons<F>(mut self, handler: F) -> Self
    where
        F: FnOnce(A, B) -> R + 'a,
    {
        self.cons = Handler::new(move |(left, right)| handler(left, right));
        self
    }
}

impl<A, B, R> Default for PairCases<'_, A, B, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, B> Variant for Pair<A, B> {
    const TYPE_NAME: &'static str = "Pair";
    const CASES: &'static [&'static str] = &["Cons"];

    type Cases<'a, R> = PairCases<'a, A, B, R>;

    fn case_name(&self) -> &'static str {
        "Cons"
    }

    fn match_with<'a, R>(self, cases: Self::Cases<'a, R>) -> Result<R, AlgebraError> {
        cases
            .cons
            .dispatch(Self::TYPE_NAME, "Cons", (self.left, self.right))
    }
}
