//! Do-notation for monadic values with a `flat_map` method.
//!
//! The [`eff!`](crate::eff) macro rewrites a block of bind statements into
//! nested `flat_map` calls. It works with any value exposing
//! `flat_map(self, FnOnce(A) -> Self<B>)`, which in this crate means
//! [`Maybe`](crate::control::Maybe) and [`IO`](crate::effect::IO).
//!
//! # Syntax
//!
//! - `pattern <= monad;` binds the value inside `monad`
//! - `_ <= monad;` runs `monad` and discards its value
//! - `let pattern = expression;` is an ordinary binding
//! - the final expression is the result of the block
//!
//! # Examples
//!
//! ```rust
//! use funcore::control::Maybe;
//! use funcore::eff;
//!
//! let sum = eff! {
//!     a <= Maybe::just(1);
//!     b <= Maybe::just(2);
//!     let total = a + b;
//!     Maybe::just(total)
//! };
//! assert_eq!(sum, Maybe::just(3));
//! ```

/// Chains `flat_map` calls in do-notation style.
///
/// See the [module documentation](crate::effect) for the accepted syntax.
#[macro_export]
macro_rules! eff {
    // Terminal: the final expression.
    ($result:expr) => {
        $result
    };

    // Bind with wildcard pattern.
    (_ <= $monad:expr ; $($rest:tt)+) => {
        $monad.flat_map(move |_| {
            $crate::eff!($($rest)+)
        })
    };

    // Bind with identifier pattern.
    ($pattern:ident <= $monad:expr ; $($rest:tt)+) => {
        $monad.flat_map(move |$pattern| {
            $crate::eff!($($rest)+)
        })
    };

    // Pure let binding.
    (let $pattern:ident = $expr:expr ; $($rest:tt)+) => {
        {
            let $pattern = $expr;
            $crate::eff!($($rest)+)
        }
    };
}
