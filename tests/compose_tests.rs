#![cfg(feature = "compose")]
//! Integration tests for the composition utilities.

use funcore::compose::{Curried, constant, flip, flip_curried, identity};
use funcore::{compose, curry2};
use proptest::prelude::*;
use rstest::rstest;

fn exponential(base: i64) -> Curried<i64, i64> {
    Box::new(move |index| if index <= 0 { 1 } else { base * exponential(base)(index - 1) })
}

#[rstest]
fn test_square_and_cube_from_flipped_exponential() {
    let square = flip_curried(exponential)(2);
    let cube = flip_curried(exponential)(3);
    assert_eq!(square(3), 9);
    assert_eq!(cube(2), 8);
    assert_eq!(compose!(square, cube)(2), 64);
}

#[rstest]
fn test_curried_addition_undoes_subtraction() {
    let add_two = curry2!(|y: i64, x: i64| y + x)(2);
    let minus_two = |x: i64| x - 2;
    assert_eq!(compose!(add_two, minus_two)(3), 3);
}

#[rstest]
fn test_constant_and_flip() {
    let zero = constant::<i32, &str>(0);
    assert_eq!(zero("anything"), 0);
    let concat = |a: &str, b: &str| format!("{a}{b}");
    assert_eq!(flip(concat)("world", "hello "), "hello world");
}

proptest! {
    #[test]
    fn prop_compose_matches_nested_application(x in -1000_i64..1000) {
        let f = |x: i64| x * x + 1;
        let g = |x: i64| x - 2;
        prop_assert_eq!(compose!(f, g)(x), f(g(x)));
    }

    #[test]
    fn prop_identity_is_unit_of_composition(x in -1000_i64..1000) {
        let f = |x: i64| 3 * x - 7;
        prop_assert_eq!(compose!(identity, f)(x), f(x));
        prop_assert_eq!(compose!(f, identity)(x), f(x));
    }

    #[test]
    fn prop_double_flip_is_identity(a in -1000_i64..1000, b in -1000_i64..1000) {
        let subtract = |a: i64, b: i64| a - b;
        prop_assert_eq!(flip(flip(subtract))(a, b), subtract(a, b));
    }
}
