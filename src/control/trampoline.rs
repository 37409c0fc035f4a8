//! Stack-safe recursion via trampolining.
//!
//! Rust does not guarantee tail call optimization, so a recursion that
//! steps once per stream element would overflow the stack on long
//! streams. A [`Trampoline`] turns each recursive step into data: either
//! a finished value or a suspended step, which [`Trampoline::run`]
//! unwinds in a loop.
//!
//! # Examples
//!
//! ```rust
//! use funcore::control::Trampoline;
//!
//! fn is_even(n: u64) -> Trampoline<bool> {
//!     if n == 0 {
//!         Trampoline::done(true)
//!     } else {
//!         Trampoline::suspend(move || is_odd(n - 1))
//!     }
//! }
//!
//! fn is_odd(n: u64) -> Trampoline<bool> {
//!     if n == 0 {
//!         Trampoline::done(false)
//!     } else {
//!         Trampoline::suspend(move || is_even(n - 1))
//!     }
//! }
//!
//! assert!(is_even(1_000_000).run());
//! ```

/// A computation that is either finished or needs another step.
pub enum Trampoline<A> {
    /// The computation has completed with value `A`.
    Done(A),
    /// The computation is suspended; the boxed step yields the next state.
    Suspend(Box<dyn FnOnce() -> Trampoline<A>>),
}

impl<A> Trampoline<A> {
    /// A finished computation.
    #[inline]
    pub const fn done(value: A) -> Self {
        Self::Done(value)
    }

    /// A computation that continues with `step` when run.
    #[inline]
    pub fn suspend<F>(step: F) -> Self
    where
        F: FnOnce() -> Self + 'static,
    {
        Self::Suspend(Box::new(step))
    }

    /// Returns `true` if no further step is needed.
    #[inline]
    #[must_use]
    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }

    /// Runs suspended steps until a value is produced.
    ///
    /// Uses constant stack space regardless of the number of steps.
    pub fn run(self) -> A {
        let mut current = self;
        loop {
            match current {
                Self::Done(value) => return value,
                Self::Suspend(step) => current = step(),
            }
        }
    }
}

impl<A: 'static> Trampoline<A> {
    /// Transforms the final value.
    #[must_use]
    pub fn map<B, F>(self, function: F) -> Trampoline<B>
    where
        F: FnOnce(A) -> B + 'static,
    {
        match self {
            Self::Done(value) => Trampoline::Done(function(value)),
            Self::Suspend(step) => Trampoline::suspend(move || step().map(function)),
        }
    }

    /// Sequences a further trampolined computation after this one.
    #[must_use]
    pub fn flat_map<B, F>(self, function: F) -> Trampoline<B>
    where
        F: FnOnce(A) -> Trampoline<B> + 'static,
    {
        match self {
            Self::Done(value) => function(value),
            Self::Suspend(step) => Trampoline::suspend(move || step().flat_map(function)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn count_down(n: u64, accumulator: u64) -> Trampoline<u64> {
        if n == 0 {
            Trampoline::done(accumulator)
        } else {
            Trampoline::suspend(move || count_down(n - 1, accumulator + 1))
        }
    }

    #[rstest]
    fn test_done_runs_immediately() {
        let trampoline = Trampoline::done(42);
        assert!(trampoline.is_done());
        assert_eq!(trampoline.run(), 42);
    }

    #[rstest]
    fn test_deep_suspension_is_stack_safe() {
        assert_eq!(count_down(1_000_000, 0).run(), 1_000_000);
    }

    #[rstest]
    fn test_map_applies_after_steps() {
        let trampoline = count_down(10, 0).map(|n| n * 2);
        assert!(!trampoline.is_done());
        assert_eq!(trampoline.run(), 20);
    }

    #[rstest]
    fn test_flat_map_sequences_computations() {
        let trampoline = count_down(5, 0).flat_map(|n| count_down(n, 100));
        assert_eq!(trampoline.run(), 105);
    }
}
