//! Deferred side effects.
//!
//! - [`IO`]: an action from a [`World`] to a value and the next world
//! - [`IoMonad`]: the [`Monad`](crate::typeclass::Monad) instance for `IO`
//! - [`Console`]: the sink the `println` effect writes through
//! - [`eff!`](crate::eff): do-notation over `flat_map`
//!
//! # IO Monad
//!
//! Effects are described when an `IO` is built and performed only when it
//! is run against a world:
//!
//! ```rust
//! use funcore::effect::{RecordingConsole, World, IO};
//! use std::rc::Rc;
//!
//! let console = Rc::new(RecordingConsole::new());
//! let greeting = IO::println_to(console.clone(), "hello");
//! assert!(console.lines().is_empty());
//!
//! greeting.run(World::initial());
//! assert_eq!(console.lines(), vec!["hello"]);
//! ```

mod console;
mod eff_macro;
mod io;
mod world;

pub use console::{Console, RecordingConsole, StdoutConsole};
pub use io::{IO, IoMonad};
pub use world::World;
