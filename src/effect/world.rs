//! The world token threaded through IO actions.

/// An opaque token standing for "the state of everything outside the
/// program" at one point in time.
///
/// The token carries no data and is never inspected. It is deliberately
/// neither `Clone` nor `Copy`: each IO step consumes the world it is given
/// and returns the next one, which fixes the order in which effects run.
///
/// # Examples
///
/// ```rust
/// use funcore::effect::{World, IO};
///
/// let answer = IO::unit(42).run(World::initial());
/// assert_eq!(answer, 42);
/// ```
#[derive(Debug, PartialEq, Eq, Default)]
pub struct World {
    _private: (),
}

impl World {
    /// The world as it is when the program starts running effects.
    #[inline]
    #[must_use]
    pub const fn initial() -> Self {
        Self { _private: () }
    }
}
