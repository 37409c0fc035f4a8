//! Persistent (immutable) singly-linked list.
//!
//! This module provides [`List`], the eager sum type
//! `Empty() | Cons(head, tail)`. A list is fully materialized when it is
//! built and never changes afterwards; new lists share their tails with
//! the lists they were built from.
//!
//! # Overview
//!
//! - O(1) `cons`, `head`, `tail`, `len`
//! - O(n) `append`, `map`, `reverse`, conversions
//!
//! Every traversal is a loop, so the stack depth of any operation is
//! independent of the list's length. Dropping a list is iterative too.
//!
//! # Examples
//!
//! ```rust
//! use funcore::persistent::List;
//!
//! let numbers = List::cons(1, List::cons(2, List::cons(3, List::empty())));
//! assert_eq!(numbers.head(), Some(&1));
//! assert_eq!(numbers.sum(), 6);
//!
//! let doubled = numbers.map(|n| n * 2);
//! assert_eq!(doubled.to_array(), vec![2, 4, 6]);
//! ```
//!
//! # Structural Sharing
//!
//! ```text
//! xs:               1 -> 2 -> nil
//! List::cons(0, xs): 0 -> [1 -> 2 -> nil]  // shares [1, 2] with xs
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::ops::Add;
use std::rc::Rc;

use crate::error::AlgebraError;
use crate::variant::{Handler, Variant};

struct Node<T> {
    element: T,
    next: Option<Rc<Self>>,
}

/// A persistent (immutable) singly-linked list.
///
/// | Operation | Complexity |
/// |-----------|------------|
/// | `empty`   | O(1)       |
/// | `cons`    | O(1)       |
/// | `head`    | O(1)       |
/// | `tail`    | O(1)       |
/// | `len`     | O(1)       |
/// | `append`  | O(len(xs)) |
/// | `map`     | O(n)       |
/// | `reverse` | O(n)       |
#[derive(Clone)]
pub struct List<T> {
    head: Option<Rc<Node<T>>>,
    /// Cached length for O(1) access.
    length: usize,
}

static_assertions::assert_not_impl_any!(List<i32>: Send, Sync);

impl<T> List<T> {
    /// Creates the empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::persistent::List;
    ///
    /// let list: List<i32> = List::empty();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            head: None,
            length: 0,
        }
    }

    /// Builds `Cons(head, tail)`.
    ///
    /// `tail` is shared, not copied.
    #[must_use]
    pub fn cons(head: T, mut tail: Self) -> Self {
        let length = tail.length + 1;
        Self {
            head: Some(Rc::new(Node {
                element: head,
                next: tail.head.take(),
            })),
            length,
        }
    }

    /// Creates a list containing a single element.
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::cons(element, Self::empty())
    }

    /// Prepends an element, leaving `self` untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::persistent::List;
    ///
    /// let tail = List::singleton(2);
    /// let list = tail.prepend(1);
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(tail.len(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub fn prepend(&self, element: T) -> Self {
        Self {
            head: Some(Rc::new(Node {
                element,
                next: self.head.clone(),
            })),
            length: self.length + 1,
        }
    }

    fn build_from_vec(mut elements: Vec<T>) -> Self {
        let length = elements.len();
        let mut head: Option<Rc<Node<T>>> = None;
        while let Some(element) = elements.pop() {
            head = Some(Rc::new(Node {
                element,
                next: head,
            }));
        }
        Self { head, length }
    }

    /// Returns the first element, or `None` for `Empty`.
    #[inline]
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.element)
    }

    /// Returns the remainder after the first element, or `None` for `Empty`.
    ///
    /// The returned list shares its nodes with `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::persistent::List;
    ///
    /// let list = List::from_array(&[1, 2, 3]);
    /// assert_eq!(list.tail().map(|tail| tail.to_array()), Some(vec![2, 3]));
    /// assert!(List::<i32>::empty().tail().is_none());
    /// ```
    #[inline]
    #[must_use]
    pub fn tail(&self) -> Option<Self> {
        self.head.as_ref().map(|node| Self {
            head: node.next.clone(),
            length: self.length - 1,
        })
    }

    /// Decomposes the list into a borrowed head and a shared tail.
    #[inline]
    #[must_use]
    pub fn uncons(&self) -> Option<(&T, Self)> {
        self.head.as_ref().map(|node| {
            let tail = Self {
                head: node.next.clone(),
                length: self.length - 1,
            };
            (&node.element, tail)
        })
    }

    /// Returns `true` for `Empty`.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns an iterator over references to the elements.
    #[inline]
    pub fn iter(&self) -> ListIterator<'_, T> {
        ListIterator {
            current: self.head.as_ref(),
            remaining: self.length,
        }
    }

    /// Exhaustive match over the two cases.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::persistent::List;
    ///
    /// let list = List::from_array(&[4, 5]);
    /// let described = list.match_case(
    ///     || String::from("empty"),
    ///     |head, tail| format!("{head} then {} more", tail.len()),
    /// );
    /// assert_eq!(described, "4 then 1 more");
    /// ```
    pub fn match_case<R, E, C>(&self, on_empty: E, on_cons: C) -> R
    where
        E: FnOnce() -> R,
        C: FnOnce(&T, Self) -> R,
    {
        match self.uncons() {
            None => on_empty(),
            Some((head, tail)) => on_cons(head, tail),
        }
    }

    /// Applies `function` to every element, preserving order and length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::persistent::List;
    ///
    /// let list = List::from_array(&[1, 2, 3]);
    /// assert_eq!(list.map(|n| n.to_string()).to_array(), vec!["1", "2", "3"]);
    /// ```
    #[must_use]
    pub fn map<U, F>(&self, function: F) -> List<U>
    where
        F: FnMut(&T) -> U,
    {
        List::build_from_vec(self.iter().map(function).collect())
    }

    /// Applies a fallible `function` to every element.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `function`. No partial list is
    /// returned; elements after the failing one are not visited.
    pub fn try_map<U, E, F>(&self, function: F) -> Result<List<U>, E>
    where
        F: FnMut(&T) -> Result<U, E>,
    {
        self.iter()
            .map(function)
            .collect::<Result<Vec<U>, E>>()
            .map(List::build_from_vec)
    }

    /// Left fold with an accumulator.
    pub fn fold_left<B, F>(&self, initial: B, function: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        self.iter().fold(initial, function)
    }

    /// Right fold: `f(x0, f(x1, ... f(xn, initial)))`.
    ///
    /// Runs as a loop over the reversed elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::persistent::List;
    ///
    /// let list = List::from_array(&["a", "b", "c"]);
    /// let joined = list.fold_right(String::new(), |item, accumulator| format!("{item}{accumulator}"));
    /// assert_eq!(joined, "abc");
    /// ```
    pub fn fold_right<B, F>(&self, initial: B, mut function: F) -> B
    where
        F: FnMut(&T, B) -> B,
    {
        let elements: Vec<&T> = self.iter().collect();
        elements
            .into_iter()
            .rev()
            .fold(initial, |accumulator, element| function(element, accumulator))
    }
}

impl<T: Clone> List<T> {
    /// Builds a list holding clones of `elements`, in order.
    #[must_use]
    pub fn from_array(elements: &[T]) -> Self {
        Self::build_from_vec(elements.to_vec())
    }

    /// Collects the elements into a `Vec`, in order.
    #[must_use]
    pub fn to_array(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Concatenates `self` and `other`.
    ///
    /// When `self` is empty the result is `other` itself (shared). The
    /// nodes of `other` are always shared; only `self` is copied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::persistent::List;
    ///
    /// let xs = List::from_array(&[1, 2]);
    /// let ys = List::from_array(&[3, 4]);
    /// assert_eq!(xs.append(&ys).to_array(), vec![1, 2, 3, 4]);
    /// ```
    #[must_use]
    pub fn append(&self, other: &Self) -> Self {
        if self.is_empty() {
            return other.clone();
        }

        let mut elements: Vec<T> = self.to_array();
        let mut result = other.clone();
        while let Some(element) = elements.pop() {
            result = Self::cons(element, result);
        }
        result
    }

    /// Returns the elements in reverse order.
    #[must_use]
    pub fn reverse(&self) -> Self {
        self.fold_left(Self::empty(), |accumulator, element| {
            Self::cons(element.clone(), accumulator)
        })
    }

    /// Adds up every element.
    ///
    /// The empty list sums to `T::default()`.
    #[must_use]
    pub fn sum(&self) -> T
    where
        T: Add<Output = T> + Default,
    {
        self.fold_left(T::default(), |accumulator, element| {
            accumulator + element.clone()
        })
    }

    /// Consumes the list, yielding an owned head and the shared tail.
    ///
    /// The head is moved out when this list holds the only reference to
    /// its first node and cloned otherwise.
    #[must_use]
    pub fn into_uncons(mut self) -> Option<(T, Self)> {
        let node = self.head.take()?;
        let length = self.length - 1;
        let (element, next) = match Rc::try_unwrap(node) {
            Ok(mut owned) => {
                let next = owned.next.take();
                (owned.element, next)
            }
            Err(shared) => (shared.element.clone(), shared.next.clone()),
        };
        Some((element, Self { head: next, length }))
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(node) = next {
            match Rc::try_unwrap(node) {
                Ok(mut owned) => next = owned.next.take(),
                Err(_) => break,
            }
        }
    }
}

/// Case table for [`List`].
pub struct ListCases<'a, T, R> {
    empty: Handler<'a, (), R>,
    cons: Handler<'a, (T, List<T>), R>,
}

impl<'a, T, R> ListCases<'a, T, R> {
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

    /// Registers the handler for `Cons(head, tail)`.
    #[must_use]
    pub fn on_cons<F>(mut self, handler: F) -> Self
    where
        F: FnOnce(T, List<T>) -> R + 'a,
    {
        self.cons = Handler::new(move |(head, tail)| handler(head, tail));
        self
    }
}

impl<T, R> Default for ListCases<'_, T, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Variant for List<T> {
    const TYPE_NAME: &'static str = "List";
    const CASES: &'static [&'static str] = &["Empty", "Cons"];

    type Cases<'a, R> = ListCases<'a, T, R>;

    fn case_name(&self) -> &'static str {
        if self.is_empty() { "Empty" } else { "Cons" }
    }

    fn match_with<'a, R>(self, cases: Self::Cases<'a, R>) -> Result<R, AlgebraError> {
        match self.into_uncons() {
            None => cases.empty.dispatch(Self::TYPE_NAME, "Empty", ()),
            Some(fields) => cases.cons.dispatch(Self::TYPE_NAME, "Cons", fields),
        }
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to the elements of a [`List`].
pub struct ListIterator<'a, T> {
    current: Option<&'a Rc<Node<T>>>,
    remaining: usize,
}

impl<'a, T> Iterator for ListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_ref();
            self.remaining -= 1;
            &node.element
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for ListIterator<'_, T> {}

/// An owning iterator over the elements of a [`List`].
pub struct ListIntoIterator<T> {
    list: List<T>,
}

impl<T: Clone> Iterator for ListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let list = std::mem::take(&mut self.list);
        let (head, tail) = list.into_uncons()?;
        self.list = tail;
        Some(head)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.length, Some(self.list.length))
    }
}

impl<T: Clone> ExactSizeIterator for ListIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for List<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build_from_vec(iter.into_iter().collect())
    }
}

impl<T: Clone> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = ListIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        ListIntoIterator { list: self }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = ListIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}
