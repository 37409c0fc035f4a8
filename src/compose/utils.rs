//! Helper functions (combinators) for function composition.
//!
//! - [`identity`]: the I combinator
//! - [`constant`]: the K combinator
//! - [`flip`]: swaps the arguments of a binary function
//! - [`flip_curried`]: swaps the arguments of a curried function
//! - [`compose`]: right-to-left composition of two functions

use std::rc::Rc;

/// A curried function stage: takes one argument, returns the rest.
pub type Curried<A, B> = Box<dyn Fn(A) -> B>;

/// Returns the value unchanged.
///
/// The identity function is the unit of composition and the canonical
/// success continuation of [`find`](crate::control::find).
///
/// # Examples
///
/// ```
/// use funcore::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns `value`, ignoring its input.
///
/// # Examples
///
/// ```
/// use funcore::compose::constant;
///
/// let always_five = constant::<_, &str>(5);
/// assert_eq!(always_five("ignored"), 5);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// # Examples
///
/// ```
/// use funcore::compose::flip;
///
/// let subtract = |a: i32, b: i32| a - b;
/// assert_eq!(flip(subtract)(1, 10), 9);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}

/// Swaps the arguments of a curried function: `flip_curried(f)(x)(y) == f(y)(x)`.
///
/// # Examples
///
/// ```
/// use funcore::compose::{flip_curried, Curried};
///
/// fn power(base: u32) -> Curried<u32, u32> {
///     Box::new(move |exponent| base.pow(exponent))
/// }
///
/// let square = flip_curried(power)(2);
/// let cube = flip_curried(power)(3);
/// assert_eq!(square(3), 9);
/// assert_eq!(cube(2), 8);
/// ```
pub fn flip_curried<A, B, C, F>(function: F) -> impl Fn(B) -> Curried<A, C>
where
    A: 'static,
    B: Clone + 'static,
    C: 'static,
    F: Fn(A) -> Curried<B, C> + 'static,
{
    let function = Rc::new(function);
    move |second_argument: B| {
        let function = Rc::clone(&function);
        let flipped: Curried<A, C> =
            Box::new(move |first_argument: A| function(first_argument)(second_argument.clone()));
        flipped
    }
}

/// Composes two functions right-to-left: `compose(f, g)(x) == f(g(x))`.
///
/// # Examples
///
/// ```
/// use funcore::compose::compose;
///
/// let f = |x: i32| x * x + 1;
/// let g = |x: i32| x - 2;
/// let h = compose(f, g);
/// assert_eq!(h(2), f(g(2)));
/// ```
#[inline]
pub fn compose<A, B, C, F, G>(outer: F, inner: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |input| outer(inner(input))
}
