//! The variant engine: uniform dispatch over sum types.
//!
//! Every sum type in this crate (`Pair`, `List`, `Stream`, `Maybe`) is a
//! plain Rust type whose alternatives can be matched exhaustively at
//! compile time. On top of that, each one implements [`Variant`], which
//! adds *dynamic* matching against a case table: a set of optional
//! handlers, one per case name. Applying a value to a case table invokes
//! exactly the handler for the value's case, passing the stored fields as
//! arguments. If that handler is absent the match fails with
//! [`AlgebraError::IncompleteMatch`] and no handler runs.
//!
//! # Examples
//!
//! ```rust
//! use funcore::variant::{Pair, PairCases, Variant};
//!
//! let pair = Pair::cons(1, "one");
//! let described = pair
//!     .match_with(PairCases::new().on_cons(|number, name| format!("{number} is {name}")))
//!     .unwrap();
//! assert_eq!(described, "1 is one");
//! ```

mod pair;

pub use pair::{Pair, PairCases};

use crate::error::AlgebraError;

/// A sum type that can be matched against a case table.
///
/// # Contract
///
/// - `case_name` returns one of `CASES`.
/// - `match_with` invokes at most one handler, the one registered for
///   `case_name()`, and returns its result.
/// - A missing handler for the actual case is an
///   [`AlgebraError::IncompleteMatch`]; handlers for other cases may be
///   omitted freely.
pub trait Variant: Sized {
    /// Name of the sum type, used in error reports.
    const TYPE_NAME: &'static str;

    /// Names of every case this type can be built with.
    const CASES: &'static [&'static str];

    /// The case table accepted by [`Variant::match_with`].
    type Cases<'a, R>;

    /// Returns the name of the case this value was built with.
    fn case_name(&self) -> &'static str;

    /// Applies this value to a case table.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::IncompleteMatch`] when `cases` has no
    /// handler for this value's case.
    fn match_with<'a, R>(self, cases: Self::Cases<'a, R>) -> Result<R, AlgebraError>;
}

/// A boxed handler receiving a case's fields as a tuple.
type HandlerFunction<'a, A, R> = Box<dyn FnOnce(A) -> R + 'a>;

/// One slot of a case table: the handler for a single case, if supplied.
///
/// `A` is the tuple of the case's fields (`()` for nullary cases).
pub struct Handler<'a, A, R> {
    function: Option<HandlerFunction<'a, A, R>>,
}

impl<'a, A, R> Handler<'a, A, R> {
    /// A slot with no handler.
    #[inline]
    #[must_use]
    pub const fn missing() -> Self {
        Self { function: None }
    }

    /// A slot holding `function`.
    #[inline]
    pub fn new<F>(function: F) -> Self
    where
        F: FnOnce(A) -> R + 'a,
    {
        Self {
            function: Some(Box::new(function)),
        }
    }

    /// Returns `true` if a handler was supplied for this slot.
    #[inline]
    #[must_use]
    pub const fn is_present(&self) -> bool {
        self.function.is_some()
    }

    /// Invokes the handler with `fields`, or reports the missing case.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::IncompleteMatch`] naming `type_name` and
    /// `case` when the slot is empty.
    pub fn dispatch(
        self,
        type_name: &'static str,
        case: &'static str,
        fields: A,
    ) -> Result<R, AlgebraError> {
        match self.function {
            Some(function) => Ok(function(fields)),
            None => {
                tracing::debug!(type_name, case, "incomplete match");
                Err(AlgebraError::IncompleteMatch { type_name, case })
            }
        }
    }
}

impl<A, R> Default for Handler<'_, A, R> {
    fn default() -> Self {
        Self::missing()
    }
}
