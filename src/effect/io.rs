//! IO Monad - deferred side effects threaded through a world token.
//!
//! An `IO<A>` is a function from a [`World`] to a [`Pair`] of a value and
//! the next world. Building an IO action performs nothing; effects run
//! only when the action is applied to a world with [`IO::run`] (or
//! [`IO::apply`]).
//!
//! # Design Philosophy
//!
//! IO "describes" side effects but doesn't "execute" them. Sequencing is
//! expressed by handing each step the world produced by the previous one,
//! so the order of effects is fixed by data flow alone.
//!
//! # Examples
//!
//! ```rust
//! use funcore::effect::{World, IO};
//!
//! let io = IO::unit(10)
//!     .map(|x| x * 2)
//!     .flat_map(|x| IO::unit(x + 1));
//! assert_eq!(io.run(World::initial()), 21);
//! ```
//!
//! # Side Effect Deferral
//!
//! ```rust
//! use funcore::effect::{RecordingConsole, World, IO};
//! use std::rc::Rc;
//!
//! let console = Rc::new(RecordingConsole::new());
//! let io = IO::println_to(console.clone(), "hello");
//!
//! // Not executed yet
//! assert_eq!(console.write_count(), 0);
//!
//! io.run(World::initial());
//! assert_eq!(console.lines(), vec!["hello"]);
//! ```

use std::rc::Rc;

use super::console::{Console, StdoutConsole};
use super::world::World;
use crate::typeclass::Monad;
use crate::variant::Pair;

/// A deferred, not-yet-performed effect producing an `A`.
///
/// # Monad Laws
///
/// Two IO actions are equal when running them against a world yields
/// equal values and performs the same effects in the same order.
///
/// 1. **Left Identity**: `IO::unit(a).flat_map(f) == f(a)`
/// 2. **Right Identity**: `m.flat_map(IO::unit) == m`
/// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
pub struct IO<A> {
    run_io: Box<dyn FnOnce(World) -> Pair<A, World>>,
}

static_assertions::assert_not_impl_any!(IO<i32>: Send, Sync);

impl<A: 'static> IO<A> {
    /// Creates an IO action from a world-transforming function.
    ///
    /// The function is not called until the action is run.
    pub fn new<F>(action: F) -> Self
    where
        F: FnOnce(World) -> Pair<A, World> + 'static,
    {
        Self {
            run_io: Box::new(action),
        }
    }

    /// An action that performs nothing and yields `value`, handing the
    /// world through unchanged.
    pub fn unit(value: A) -> Self {
        Self::new(move |world| Pair::cons(value, world))
    }

    /// Alias for [`IO::unit`], read as "finish with this value".
    pub fn done(value: A) -> Self {
        Self::unit(value)
    }

    /// Performs the action against `world`, returning the value and the
    /// resulting world.
    pub fn apply(self, world: World) -> Pair<A, World> {
        (self.run_io)(world)
    }

    /// Performs the action against `world` and returns only its value.
    ///
    /// This is the only place effects happen.
    pub fn run(self, world: World) -> A {
        tracing::debug!("running IO action");
        self.apply(world).into_left()
    }

    /// Chains IO actions: runs `self` on the current world, then runs the
    /// action produced by `transform` on the resulting world.
    pub fn flat_map<B, F>(self, transform: F) -> IO<B>
    where
        B: 'static,
        F: FnOnce(A) -> IO<B> + 'static,
    {
        IO::new(move |world| {
            let (value, next_world) = self.apply(world).into_parts();
            transform(value).apply(next_world)
        })
    }

    /// Transforms the result of an IO action.
    pub fn map<B, F>(self, function: F) -> IO<B>
    where
        B: 'static,
        F: FnOnce(A) -> B + 'static,
    {
        self.flat_map(move |value| IO::unit(function(value)))
    }

    /// Sequences two IO actions, discarding the value of the first.
    ///
    /// The first action still runs for its effects.
    pub fn then<B: 'static>(self, next: IO<B>) -> IO<B> {
        self.flat_map(move |_| next)
    }
}

// =============================================================================
// Console Effects
// =============================================================================

impl IO<()> {
    /// An action that writes `message` to standard output when run.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use funcore::effect::{World, IO};
    ///
    /// let io = IO::println("Hello, World!");
    /// io.run(World::initial()); // Prints "Hello, World!"
    /// ```
    pub fn println(message: impl Into<String>) -> Self {
        Self::println_to(Rc::new(StdoutConsole), message)
    }

    /// An action that writes `message` to `console` when run, exactly once
    /// per run, and yields `()`.
    pub fn println_to(console: Rc<dyn Console>, message: impl Into<String>) -> Self {
        let message = message.into();
        Self::new(move |world| {
            tracing::debug!(%message, "performing println effect");
            console.write_line(&message);
            Self::unit(()).apply(world)
        })
    }
}

/// Marker for the IO monad over [`IO`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IoMonad;

impl IoMonad {
    /// Runs `instance` against `world`, discarding the final world.
    pub fn run<A: 'static>(instance: IO<A>, world: World) -> A {
        instance.run(world)
    }
}

impl Monad for IoMonad {
    type Value<A: 'static> = IO<A>;

    #[inline]
    fn unit<A: 'static>(value: A) -> IO<A> {
        IO::unit(value)
    }

    #[inline]
    fn flat_map<A, B, F>(instance: IO<A>, transform: F) -> IO<B>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> IO<B> + 'static,
    {
        instance.flat_map(transform)
    }
}
