//! Continuation-passing search over streams.
//!
//! [`find`] walks a stream without ever returning through ordinary
//! control flow: a match is handed to the *success* continuation, a miss
//! is handed to the *failure* continuation together with the rest of the
//! stream and the continuations themselves. The canonical pairing is
//! [`continue_search`] (re-enter the search one element further on) with
//! [`identity`] (hand the outcome straight back).
//!
//! The failure continuation returns a [`Trampoline`] step instead of
//! calling back into the search directly, so skipping any number of
//! elements runs in constant stack space.
//!
//! Continuations may perform side effects. The success continuation is
//! invoked exactly once per completed search; the failure continuation
//! once per rejected element.
//!
//! # Examples
//!
//! ```rust
//! use funcore::compose::identity;
//! use funcore::control::{continue_search, find, Stream};
//!
//! let integers = Stream::enum_from(0_i64);
//! let found = find(integers, |item| *item == 100, continue_search, identity);
//! assert_eq!(found, Some(100));
//! ```

use std::rc::Rc;

use super::stream::Stream;
use super::trampoline::Trampoline;

pub use crate::compose::identity;

type Predicate<T> = Rc<dyn Fn(&T) -> bool>;
type FailureContinuation<T, R> = Rc<dyn Fn(Stream<T>, Continuations<T, R>) -> Trampoline<R>>;
type SuccessContinuation<T, R> = Rc<dyn Fn(Option<T>) -> R>;

/// The predicate and both continuations of a running search.
///
/// A failure continuation receives this bundle so that it can resume the
/// search with the same predicate and continuations.
pub struct Continuations<T, R> {
    predicate: Predicate<T>,
    on_failure: FailureContinuation<T, R>,
    on_success: SuccessContinuation<T, R>,
}

impl<T, R> Continuations<T, R> {
    /// Bundles a predicate with its failure and success continuations.
    pub fn new<P, F, S>(predicate: P, on_failure: F, on_success: S) -> Self
    where
        P: Fn(&T) -> bool + 'static,
        F: Fn(Stream<T>, Self) -> Trampoline<R> + 'static,
        S: Fn(Option<T>) -> R + 'static,
    {
        Self {
            predicate: Rc::new(predicate),
            on_failure: Rc::new(on_failure),
            on_success: Rc::new(on_success),
        }
    }

    /// Tests an element against the search predicate.
    pub fn accepts(&self, element: &T) -> bool {
        (self.predicate)(element)
    }

    /// Invokes the success continuation with the search outcome.
    ///
    /// `None` means the stream ran out without a match.
    pub fn succeed(&self, found: Option<T>) -> R {
        (self.on_success)(found)
    }

    /// Invokes the failure continuation on the remaining stream.
    pub fn fail(self, remaining: Stream<T>) -> Trampoline<R> {
        let on_failure = Rc::clone(&self.on_failure);
        on_failure(remaining, self)
    }
}

impl<T, R> Clone for Continuations<T, R> {
    fn clone(&self) -> Self {
        Self {
            predicate: Rc::clone(&self.predicate),
            on_failure: Rc::clone(&self.on_failure),
            on_success: Rc::clone(&self.on_success),
        }
    }
}

/// Searches `stream` for the first element satisfying `predicate`.
///
/// - `Empty`: returns `on_success(None)`.
/// - a head satisfying `predicate`: returns `on_success(Some(head))`.
/// - otherwise: forces the tail and hands it to `on_failure`.
///
/// Diverges on an infinite stream when no element satisfies `predicate`.
///
/// # Examples
///
/// ```rust
/// use funcore::control::{continue_search, find, Stream};
///
/// let integers = Stream::enum_from(1_i64);
/// let message = find(
///     integers,
///     |n| n % 7 == 0,
///     continue_search,
///     |found: Option<i64>| found.map_or_else(|| String::from("none"), |n| format!("found {n}")),
/// );
/// assert_eq!(message, "found 7");
/// ```
pub fn find<T, R, P, F, S>(stream: Stream<T>, predicate: P, on_failure: F, on_success: S) -> R
where
    T: Clone + 'static,
    R: 'static,
    P: Fn(&T) -> bool + 'static,
    F: Fn(Stream<T>, Continuations<T, R>) -> Trampoline<R> + 'static,
    S: Fn(Option<T>) -> R + 'static,
{
    search(stream, Continuations::new(predicate, on_failure, on_success)).run()
}

/// One step of the search: inspects the head of `stream` and either
/// finishes through the success continuation or suspends into the
/// failure continuation.
pub fn search<T, R>(stream: Stream<T>, continuations: Continuations<T, R>) -> Trampoline<R>
where
    T: Clone + 'static,
    R: 'static,
{
    match stream {
        Stream::Empty => Trampoline::done(continuations.succeed(None)),
        Stream::Cons(head, tail) => {
            if continuations.accepts(&head) {
                Trampoline::done(continuations.succeed(Some(head)))
            } else {
                tracing::trace!("element rejected, continuing search");
                Trampoline::suspend(move || continuations.fail(tail.force()))
            }
        }
    }
}

/// The canonical failure continuation: resumes the search on the
/// remaining stream with the same predicate and continuations.
pub fn continue_search<T, R>(remaining: Stream<T>, continuations: Continuations<T, R>) -> Trampoline<R>
where
    T: Clone + 'static,
    R: 'static,
{
    search(remaining, continuations)
}

/// Continuation-passing successor: hands `n + 1` to `continuation`.
///
/// # Examples
///
/// ```rust
/// use funcore::compose::identity;
/// use funcore::control::{add_cps, succ_cps};
///
/// // add(2, succ(3)) in continuation-passing style
/// let result = succ_cps(3, |successor| add_cps(2, successor, identity));
/// assert_eq!(result, 6);
/// ```
pub fn succ_cps<R, K>(n: i64, continuation: K) -> R
where
    K: FnOnce(i64) -> R,
{
    continuation(n + 1)
}

/// Continuation-passing addition: hands `n + m` to `continuation`.
pub fn add_cps<R, K>(n: i64, m: i64, continuation: K) -> R
where
    K: FnOnce(i64) -> R,
{
    continuation(n + m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistent::List;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_find_in_infinite_stream() {
        let integers = Stream::enum_from(0_i64);
        let found = find(integers, |item| *item == 100, continue_search, identity);
        assert_eq!(found, Some(100));
    }

    #[rstest]
    fn test_find_on_empty_stream_yields_absence() {
        let stream: Stream<i64> = Stream::empty();
        let found = find(stream, |_| true, continue_search, identity);
        assert_eq!(found, None);
    }

    #[rstest]
    fn test_find_exhausts_finite_stream() {
        let stream = Stream::from_list(&List::from_array(&[1, 3, 5]));
        let found = find(stream, |n| n % 2 == 0, continue_search, identity);
        assert_eq!(found, None);
    }

    #[rstest]
    fn test_find_matches_head_without_failure_continuation() {
        let failures = Rc::new(Cell::new(0));
        let counter = Rc::clone(&failures);
        let found = find(
            Stream::enum_from(10_i64),
            |_| true,
            move |remaining, continuations| {
                counter.set(counter.get() + 1);
                continue_search(remaining, continuations)
            },
            identity,
        );
        assert_eq!(found, Some(10));
        assert_eq!(failures.get(), 0);
    }

    #[rstest]
    fn test_failure_continuation_runs_once_per_rejected_element() {
        let failures = Rc::new(Cell::new(0));
        let counter = Rc::clone(&failures);
        let found = find(
            Stream::enum_from(0_i64),
            |n| *n == 25,
            move |remaining, continuations| {
                counter.set(counter.get() + 1);
                continue_search(remaining, continuations)
            },
            identity,
        );
        assert_eq!(found, Some(25));
        assert_eq!(failures.get(), 25);
    }

    #[rstest]
    fn test_failure_continuation_may_abandon_search() {
        let found = find(
            Stream::enum_from(0_i64),
            |n| *n == 1_000,
            |_remaining, continuations: Continuations<i64, Option<i64>>| {
                Trampoline::done(continuations.succeed(Some(-1)))
            },
            identity,
        );
        assert_eq!(found, Some(-1));
    }

    #[rstest]
    fn test_success_continuation_may_transform_result() {
        let found = find(
            Stream::enum_from(0_i64),
            |n| *n > 3,
            continue_search,
            |found: Option<i64>| found.map_or(0, |n| n * 10),
        );
        assert_eq!(found, 40);
    }

    #[rstest]
    fn test_long_search_is_stack_safe() {
        let found = find(Stream::enum_from(0_u64), |n| *n == 1_000_000, continue_search, identity);
        assert_eq!(found, Some(1_000_000));
    }

    #[rstest]
    fn test_cps_arithmetic() {
        let result = succ_cps(3, |successor| add_cps(2, successor, identity));
        assert_eq!(result, 6);
    }
}
