//! The `compose!` and `curry2!` macros.

/// Composes functions from right to left.
///
/// `compose!(f, g, h)(x)` is equivalent to `f(g(h(x)))`, and the
/// single-function form returns the function unchanged.
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
/// - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`
///
/// # Examples
///
/// ```
/// use funcore::compose;
///
/// let f = |x: i64| x * x + 1;
/// let g = |x: i64| x - 2;
///
/// let h = compose!(f, g);
/// assert_eq!(h(2), 1);
/// assert_eq!(compose!(f, g, |x: i64| x * 10)(1), 65);
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr) => {
        $function
    };

    ($outer_function:expr, $inner_function:expr $(,)?) => {{
        let outer = $outer_function;
        let inner = $inner_function;
        move |input| outer(inner(input))
    }};

    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner_composed = $crate::compose!($($remaining_functions),+);
        move |input| outer(inner_composed(input))
    }};
}

/// Converts a two-argument function into curried form.
///
/// `curry2!(f)(a)(b) == f(a, b)`. The first argument must be [`Clone`] so
/// a partial application can be called more than once.
///
/// # Examples
///
/// ```
/// use funcore::curry2;
///
/// let add = |y: i32, x: i32| y + x;
/// let add_two = curry2!(add)(2);
/// assert_eq!(add_two(3), 5);
/// assert_eq!(add_two(40), 42);
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first_argument| {
            let function = ::std::rc::Rc::clone(&function);
            move |second_argument| function(::std::clone::Clone::clone(&first_argument), second_argument)
        }
    }};
}

#[cfg(test)]
mod tests {
    use crate::compose::identity;
    use rstest::rstest;

    #[rstest]
    fn test_compose_single_is_the_function() {
        let double = |x: i32| x * 2;
        assert_eq!(compose!(double)(5), 10);
    }

    #[rstest]
    #[case(0)]
    #[case(2)]
    #[case(-7)]
    fn test_compose_with_identity(#[case] input: i32) {
        let square_plus_one = |x: i32| x * x + 1;
        assert_eq!(compose!(identity, square_plus_one)(input), square_plus_one(input));
        assert_eq!(compose!(square_plus_one, identity)(input), square_plus_one(input));
    }

    #[rstest]
    fn test_compose_three_is_associative() {
        let f = |x: i32| x + 1;
        let g = |x: i32| x * 2;
        let h = |x: i32| x - 3;
        let left = compose!(f, compose!(g, h));
        let right = compose!(compose!(f, g), h);
        assert_eq!(left(10), right(10));
        assert_eq!(compose!(f, g, h)(10), 15);
    }

    #[rstest]
    fn test_curry2_partial_application_is_reusable() {
        let append = |prefix: String, suffix: &str| format!("{prefix}{suffix}");
        let greet = curry2!(append)(String::from("hello, "));
        assert_eq!(greet("cat"), "hello, cat");
        assert_eq!(greet("dog"), "hello, dog");
    }

    #[rstest]
    fn test_curry2_composes_with_compose() {
        let add = |y: i32, x: i32| y + x;
        let add_two = curry2!(add)(2);
        let minus_two = |x: i32| x - 2;
        assert_eq!(compose!(add_two, minus_two)(3), 3);
    }
}
