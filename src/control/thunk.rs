//! Deferred computations.
//!
//! A [`Thunk`] wraps a zero-argument computation that runs only when
//! forced. By default every call to [`Thunk::force`] runs the
//! computation again. A thunk built with [`Thunk::memoized`] runs it at
//! most once and hands out clones of the cached result afterwards.
//!
//! # Examples
//!
//! ```rust
//! use funcore::control::Thunk;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let calls = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&calls);
//! let thunk = Thunk::new(move || {
//!     counter.set(counter.get() + 1);
//!     42
//! });
//!
//! assert_eq!(calls.get(), 0); // nothing runs at construction
//! assert_eq!(thunk.force(), 42);
//! assert_eq!(thunk.force(), 42);
//! assert_eq!(calls.get(), 2); // recomputed on every force
//! ```

use std::cell::OnceCell;
use std::fmt;
use std::rc::Rc;

type Computation<A> = Rc<dyn Fn() -> A>;

enum ThunkState<A> {
    /// Re-run on every force.
    Deferred(Computation<A>),
    /// Run once, then served from the cache.
    Memoized(Rc<Memo<A>>),
}

/// Splits a cached value into the next memoized thunk it owns, if any.
pub(crate) type Unlink<A> = fn(A) -> Option<Thunk<A>>;

struct Memo<A> {
    cache: OnceCell<A>,
    computation: Computation<A>,
    unlink: Option<Unlink<A>>,
}

impl<A> Drop for Memo<A> {
    fn drop(&mut self) {
        let Some(unlink) = self.unlink else {
            return;
        };
        let mut next = self.cache.take().and_then(unlink);
        while let Some(thunk) = next {
            next = match thunk.state {
                ThunkState::Memoized(memo) => match Rc::try_unwrap(memo) {
                    Ok(mut owned) => owned.cache.take().and_then(unlink),
                    Err(_) => None,
                },
                ThunkState::Deferred(_) => None,
            };
        }
    }
}

/// A deferred computation producing an `A`.
///
/// Cloning a thunk is cheap and shares the computation (and, for
/// memoized thunks, the cache).
pub struct Thunk<A> {
    state: ThunkState<A>,
}

impl<A> Thunk<A> {
    /// Wraps `computation` without running it.
    pub fn new<F>(computation: F) -> Self
    where
        F: Fn() -> A + 'static,
    {
        Self {
            state: ThunkState::Deferred(Rc::new(computation)),
        }
    }

    /// Wraps `computation` so that it runs at most once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::control::Thunk;
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// let calls = Rc::new(Cell::new(0));
    /// let counter = Rc::clone(&calls);
    /// let thunk = Thunk::memoized(move || {
    ///     counter.set(counter.get() + 1);
    ///     "done"
    /// });
    ///
    /// assert_eq!(thunk.force(), "done");
    /// assert_eq!(thunk.clone().force(), "done");
    /// assert_eq!(calls.get(), 1);
    /// ```
    pub fn memoized<F>(computation: F) -> Self
    where
        F: Fn() -> A + 'static,
    {
        Self::memoize(Rc::new(computation), None)
    }

    /// Like [`Thunk::memoized`], for values that own further memoized
    /// thunks. Dropping the thunk releases that chain in a loop, calling
    /// `unlink` once per cached link.
    pub(crate) fn memoized_chain<F>(computation: F, unlink: Unlink<A>) -> Self
    where
        F: Fn() -> A + 'static,
    {
        Self::memoize(Rc::new(computation), Some(unlink))
    }

    fn memoize(computation: Computation<A>, unlink: Option<Unlink<A>>) -> Self {
        Self {
            state: ThunkState::Memoized(Rc::new(Memo {
                cache: OnceCell::new(),
                computation,
                unlink,
            })),
        }
    }

    /// Returns `true` if this thunk caches its result.
    #[must_use]
    pub const fn is_memoized(&self) -> bool {
        matches!(self.state, ThunkState::Memoized(_))
    }

    /// Returns `true` if a memoized thunk has already been forced.
    ///
    /// Always `false` for non-memoized thunks.
    #[must_use]
    pub fn is_evaluated(&self) -> bool {
        match &self.state {
            ThunkState::Deferred(_) => false,
            ThunkState::Memoized(memo) => memo.cache.get().is_some(),
        }
    }
}

impl<A: Clone> Thunk<A> {
    /// Runs the computation (or reads the cache) and returns its result.
    pub fn force(&self) -> A {
        match &self.state {
            ThunkState::Deferred(computation) => computation(),
            ThunkState::Memoized(memo) => memo.cache.get_or_init(|| (memo.computation)()).clone(),
        }
    }
}

impl<A> Clone for Thunk<A> {
    fn clone(&self) -> Self {
        let state = match &self.state {
            ThunkState::Deferred(computation) => ThunkState::Deferred(Rc::clone(computation)),
            ThunkState::Memoized(memo) => ThunkState::Memoized(Rc::clone(memo)),
        };
        Self { state }
    }
}

impl<A> fmt::Debug for Thunk<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match &self.state {
            ThunkState::Deferred(_) => "<deferred>",
            ThunkState::Memoized(memo) if memo.cache.get().is_some() => "<memoized, evaluated>",
            ThunkState::Memoized(_) => "<memoized>",
        };
        write!(formatter, "Thunk({label})")
    }
}
