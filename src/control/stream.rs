//! Lazy, possibly infinite streams.
//!
//! A [`Stream`] has the same shape as a [`List`](crate::persistent::List)
//! except that the second field of `Cons` is a [`Thunk`] producing the
//! rest of the stream. The thunk is not run at construction; it runs
//! every time the tail is requested (streams built with
//! [`Stream::cons_memoized`] cache it instead).
//!
//! # Examples
//!
//! ```rust
//! use funcore::control::Stream;
//!
//! let naturals = Stream::enum_from(0_i64);
//! let first_five = naturals.take(5).unwrap();
//! assert_eq!(first_five.to_array(), vec![0, 1, 2, 3, 4]);
//! ```

use std::fmt;
use std::ops::Add;
use std::rc::Rc;

use super::thunk::Thunk;
use crate::error::AlgebraError;
use crate::persistent::List;
use crate::variant::{Handler, Variant};

/// A lazily evaluated sequence.
///
/// Match on it directly for an exhaustive, statically checked match, or
/// go through [`Variant::match_with`] for table-driven dispatch.
pub enum Stream<T> {
    /// The stream with no elements.
    Empty,
    /// An element followed by a deferred tail.
    Cons(T, Thunk<Stream<T>>),
}

static_assertions::assert_not_impl_any!(Stream<i32>: Send, Sync);

impl<T> Stream<T> {
    /// Creates the empty stream.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self::Empty
    }

    /// Builds `Cons(head, tail)` without running `tail`.
    pub fn cons<F>(head: T, tail: F) -> Self
    where
        F: Fn() -> Self + 'static,
    {
        Self::Cons(head, Thunk::new(tail))
    }

    /// Builds `Cons(head, tail)` whose tail is computed at most once.
    ///
    /// A forced chain of memoized tails is released iteratively, so
    /// dropping it takes constant stack whatever its length.
    pub fn cons_memoized<F>(head: T, tail: F) -> Self
    where
        F: Fn() -> Self + 'static,
    {
        Self::Cons(head, Thunk::memoized_chain(tail, Self::into_tail))
    }

    fn into_tail(self) -> Option<Thunk<Self>> {
        match self {
            Self::Empty => None,
            Self::Cons(_, tail) => Some(tail),
        }
    }

    /// Returns the first element, or `None` for `Empty`.
    #[inline]
    #[must_use]
    pub const fn head(&self) -> Option<&T> {
        match self {
            Self::Empty => None,
            Self::Cons(head, _) => Some(head),
        }
    }

    /// Returns `true` for `Empty`.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Exhaustive match over the two cases. The tail is handed over
    /// unforced.
    pub fn match_case<R, E, C>(&self, on_empty: E, on_cons: C) -> R
    where
        E: FnOnce() -> R,
        C: FnOnce(&T, &Thunk<Self>) -> R,
    {
        match self {
            Self::Empty => on_empty(),
            Self::Cons(head, tail) => on_cons(head, tail),
        }
    }
}

impl<T: Clone + 'static> Stream<T> {
    /// Forces the tail thunk and returns the rest of the stream, or `None`
    /// for `Empty`.
    #[must_use]
    pub fn tail(&self) -> Option<Self> {
        match self {
            Self::Empty => None,
            Self::Cons(_, tail) => Some(tail.force()),
        }
    }

    /// Returns a lazy stream of at most `count` elements.
    ///
    /// Nothing is forced up front. Each tail of the result forces exactly
    /// one tail of `self`, and a count of zero yields `Empty` without
    /// forcing anything.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::InvalidArgument`] for a negative `count`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::control::Stream;
    ///
    /// let naturals = Stream::enum_from(1_u32);
    /// assert_eq!(naturals.take(3).unwrap().to_array(), vec![1, 2, 3]);
    /// assert!(naturals.take(-1).is_err());
    /// ```
    pub fn take(&self, count: i64) -> Result<Self, AlgebraError> {
        let count = usize::try_from(count).map_err(|_| {
            AlgebraError::invalid_argument(
                "Stream::take",
                format!("count must be non-negative, got {count}"),
            )
        })?;
        Ok(self.take_exact(count))
    }

    fn take_exact(&self, count: usize) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Cons(_, _) if count == 0 => Self::Empty,
            Self::Cons(head, tail) => {
                let tail = tail.clone();
                Self::cons(head.clone(), move || {
                    tracing::trace!(remaining = count - 1, "forcing stream tail in take");
                    tail.force().take_exact(count - 1)
                })
            }
        }
    }

    /// Returns `true` when every element satisfies `predicate`.
    ///
    /// The empty stream yields `false`: "no elements" is kept distinct
    /// from "all elements satisfy". Evaluation stops at the first element
    /// failing the predicate, so on an infinite stream this terminates
    /// only if such an element exists.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::control::Stream;
    ///
    /// let evens = Stream::enum_from(0_i64).map(|n| n * 2);
    /// assert!(evens.take(10).unwrap().for_all(|n| n % 2 == 0));
    /// assert!(!evens.for_all(|n| *n < 100));
    /// assert!(!Stream::<i64>::empty().for_all(|_| true));
    /// ```
    pub fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        let Self::Cons(head, tail) = self else {
            return false;
        };
        if !predicate(head) {
            return false;
        }
        let mut current = tail.force();
        loop {
            match current {
                Self::Empty => return true,
                Self::Cons(head, tail) => {
                    if !predicate(&head) {
                        return false;
                    }
                    current = tail.force();
                }
            }
        }
    }

    /// Returns an iterator that forces one tail per element, and only
    /// when the next element is requested.
    #[must_use]
    pub fn iter(&self) -> StreamIterator<T> {
        StreamIterator {
            state: IteratorState::Start(self.clone()),
        }
    }

    /// Collects every element of a finite stream.
    ///
    /// Does not terminate on an infinite stream.
    #[must_use]
    pub fn to_array(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// Lazily applies `function` to every element.
    #[must_use]
    pub fn map<U, F>(&self, function: F) -> Stream<U>
    where
        U: Clone + 'static,
        F: Fn(&T) -> U + 'static,
    {
        map_with(self, Rc::new(function))
    }

    /// Converts a finite list into a stream that walks it on demand.
    #[must_use]
    pub fn from_list(list: &List<T>) -> Self {
        match list.uncons() {
            None => Self::Empty,
            Some((head, tail)) => Self::cons(head.clone(), move || Self::from_list(&tail)),
        }
    }
}

impl<T> Stream<T>
where
    T: Copy + Add<Output = T> + From<u8> + 'static,
{
    /// The infinite ascending stream `start, start + 1, start + 2, ...`.
    ///
    /// Each forced tail produces exactly one new value.
    pub fn enum_from(start: T) -> Self {
        Self::cons(start, move || Self::enum_from(start + T::from(1)))
    }
}

fn map_with<T, U>(stream: &Stream<T>, function: Rc<dyn Fn(&T) -> U>) -> Stream<U>
where
    T: Clone + 'static,
    U: Clone + 'static,
{
    match stream {
        Stream::Empty => Stream::Empty,
        Stream::Cons(head, tail) => {
            let tail = tail.clone();
            let mapped = function(head);
            Stream::cons(mapped, move || map_with(&tail.force(), Rc::clone(&function)))
        }
    }
}

impl<T: Clone> Clone for Stream<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Cons(head, tail) => Self::Cons(head.clone(), tail.clone()),
        }
    }
}

impl<T> Default for Stream<T> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<T: fmt::Debug> fmt::Debug for Stream<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => formatter.write_str("Empty"),
            Self::Cons(head, tail) => formatter
                .debug_tuple("Cons")
                .field(head)
                .field(tail)
                .finish(),
        }
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

enum IteratorState<T> {
    Start(Stream<T>),
    Pending(Thunk<Stream<T>>),
    Finished,
}

/// An iterator over the elements of a [`Stream`].
pub struct StreamIterator<T> {
    state: IteratorState<T>,
}

impl<T: Clone + 'static> Iterator for StreamIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let current = match std::mem::replace(&mut self.state, IteratorState::Finished) {
            IteratorState::Start(stream) => stream,
            IteratorState::Pending(tail) => tail.force(),
            IteratorState::Finished => return None,
        };
        match current {
            Stream::Empty => None,
            Stream::Cons(head, tail) => {
                self.state = IteratorState::Pending(tail);
                Some(head)
            }
        }
    }
}

// =============================================================================
// Variant Implementation
// =============================================================================

/// Case table for [`Stream`].
pub struct StreamCases<'a, T, R> {
    empty: Handler<'a, (), R>,
    cons: Handler<'a, (T, Thunk<Stream<T>>), R>,
}

impl<'a, T, R> StreamCases<'a, T, R> {
    /// A table with no handlers.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            empty: Handler::missing(),
            cons: Handler::missing(),
        }
    }

    /// Registers the handler for `Empty()`.
    #[must_use]
    pub fn on_empty<F>(mut self, handler: F) -> Self
    where
        F: FnOnce() -> R + 'a,
    {
        self.empty = Handler::new(move |()| handler());
        self
    }

    /// Registers the handler for `Cons(head, tail_thunk)`.
    #[must_use]
    pub fn on_cons<F>(mut self, handler: F) -> Self
    where
        F: FnOnce(T, Thunk<Stream<T>>) -> R + 'a,
    {
        self.cons = Handler::new(move |(head, tail)| handler(head, tail));
        self
    }
}

impl<T, R> Default for StreamCases<'_, T, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Variant for Stream<T> {
    const TYPE_NAME: &'static str = "Stream";
    const CASES: &'static [&'static str] = &["Empty", "Cons"];

    type Cases<'a, R> = StreamCases<'a, T, R>;

    fn case_name(&self) -> &'static str {
        match self {
            Self::Empty => "Empty",
            Self::Cons(_, _) => "Cons",
        }
    }

    fn match_with<'a, R>(self, cases: Self::Cases<'a, R>) -> Result<R, AlgebraError> {
        match self {
            Self::Empty => cases.empty.dispatch(Self::TYPE_NAME, "Empty", ()),
            Self::Cons(head, tail) => cases.cons.dispatch(Self::TYPE_NAME, "Cons", (head, tail)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    /// `enum_from` that counts how many tails have been forced.
    fn counted_from(start: i64, forced: Rc<Cell<usize>>) -> Stream<i64> {
        Stream::cons(start, move || {
            forced.set(forced.get() + 1);
            counted_from(start + 1, Rc::clone(&forced))
        })
    }

    #[rstest]
    fn test_cons_does_not_force_tail() {
        let forced = Rc::new(Cell::new(0));
        let stream = counted_from(0, Rc::clone(&forced));
        assert_eq!(stream.head(), Some(&0));
        assert!(!stream.is_empty());
        assert_eq!(forced.get(), 0);
    }

    #[rstest]
    fn test_tail_forces_every_time() {
        let forced = Rc::new(Cell::new(0));
        let stream = counted_from(0, Rc::clone(&forced));
        assert_eq!(stream.tail().and_then(|tail| tail.head().copied()), Some(1));
        assert_eq!(stream.tail().and_then(|tail| tail.head().copied()), Some(1));
        assert_eq!(forced.get(), 2);
    }

    #[rstest]
    fn test_memoized_tail_forces_once() {
        let forced = Rc::new(Cell::new(0));
        let counter = Rc::clone(&forced);
        let stream = Stream::cons_memoized(0, move || {
            counter.set(counter.get() + 1);
            Stream::cons(1, Stream::empty)
        });
        let _ = stream.tail();
        let _ = stream.tail();
        assert_eq!(forced.get(), 1);
    }

    #[rstest]
    fn test_empty_has_no_head_or_tail() {
        let stream: Stream<i32> = Stream::empty();
        assert_eq!(stream.head(), None);
        assert!(stream.tail().is_none());
        assert!(stream.is_empty());
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(7)]
    fn test_take_forces_at_most_count_tails(#[case] count: usize) {
        let forced = Rc::new(Cell::new(0));
        let stream = counted_from(0, Rc::clone(&forced));
        let taken = stream.take(i64::try_from(count).unwrap()).unwrap();
        assert_eq!(forced.get(), 0);
        let expected: Vec<i64> = (0..i64::try_from(count).unwrap()).collect();
        assert_eq!(taken.to_array(), expected);
        assert!(forced.get() <= count);
    }

    #[rstest]
    fn test_take_rejects_negative_count_without_forcing() {
        let forced = Rc::new(Cell::new(0));
        let stream = counted_from(0, Rc::clone(&forced));
        let error = stream.take(-3).unwrap_err();
        assert_eq!(
            error,
            AlgebraError::invalid_argument("Stream::take", "count must be non-negative, got -3")
        );
        assert_eq!(forced.get(), 0);
    }

    #[rstest]
    fn test_take_beyond_finite_stream() {
        let stream = Stream::from_list(&List::from_array(&[1, 2]));
        assert_eq!(stream.take(5).unwrap().to_array(), vec![1, 2]);
    }

    #[rstest]
    fn test_for_all_on_empty_is_false() {
        let stream: Stream<i32> = Stream::empty();
        assert!(!stream.for_all(|_| true));
    }

    #[rstest]
    fn test_for_all_short_circuits_on_infinite_stream() {
        let naturals = Stream::enum_from(0_i64);
        assert!(!naturals.for_all(|n| *n < 1_000));
    }

    #[rstest]
    fn test_for_all_on_finite_stream() {
        let stream = Stream::from_list(&List::from_array(&[2, 4, 6]));
        assert!(stream.for_all(|n| n % 2 == 0));
        assert!(!stream.for_all(|n| *n < 5));
    }

    #[rstest]
    fn test_map_is_lazy() {
        let forced = Rc::new(Cell::new(0));
        let squares = counted_from(1, Rc::clone(&forced)).map(|n| n * n);
        assert_eq!(forced.get(), 0);
        assert_eq!(squares.take(4).unwrap().to_array(), vec![1, 4, 9, 16]);
    }

    #[rstest]
    fn test_iterator_is_lazy() {
        let forced = Rc::new(Cell::new(0));
        let stream = counted_from(0, Rc::clone(&forced));
        let first_three: Vec<i64> = stream.iter().take(3).collect();
        assert_eq!(first_three, vec![0, 1, 2]);
        assert_eq!(forced.get(), 2);
    }

    #[rstest]
    fn test_match_with_cons_receives_unforced_tail() {
        let forced = Rc::new(Cell::new(0));
        let stream = counted_from(5, Rc::clone(&forced));
        let head = stream
            .match_with(StreamCases::new().on_cons(|head, _tail| head))
            .unwrap();
        assert_eq!(head, 5);
        assert_eq!(forced.get(), 0);
    }

    #[rstest]
    fn test_match_with_missing_cons_handler() {
        let stream = Stream::enum_from(0_i32);
        let result = stream.match_with(StreamCases::new().on_empty(|| 0));
        assert_eq!(
            result,
            Err(AlgebraError::IncompleteMatch {
                type_name: "Stream",
                case: "Cons",
            })
        );
    }

    #[rstest]
    fn test_debug_shows_unforced_tail() {
        let stream = Stream::enum_from(3_i32);
        assert_eq!(format!("{stream:?}"), "Cons(3, Thunk(<deferred>))");
    }

    #[rstest]
    fn test_deep_traversal_does_not_overflow_stack() {
        let naturals = Stream::enum_from(0_u64);
        assert!(!naturals.for_all(|n| *n < 500_000));
        assert_eq!(naturals.take(300_000).unwrap().to_array().len(), 300_000);
    }

    fn memoized_from(start: u64) -> Stream<u64> {
        Stream::cons_memoized(start, move || memoized_from(start + 1))
    }

    #[rstest]
    fn test_forced_memoized_chain_drops_without_overflow() {
        let stream = memoized_from(0);
        assert_eq!(stream.iter().take(200_000).count(), 200_000);
        assert_eq!(stream.iter().nth(199_999), Some(199_999));
        drop(stream);
    }

    #[rstest]
    fn test_shared_memoized_tail_survives_drop_of_prefix() {
        let stream = memoized_from(0);
        let suffix = stream.iter().skip(10).take(1).count();
        assert_eq!(suffix, 1);
        let tail = stream.tail();
        drop(stream);
        assert_eq!(tail.map(|rest| rest.take(3).unwrap().to_array()), Some(vec![1, 2, 3]));
    }
}
