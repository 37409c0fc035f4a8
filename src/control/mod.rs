//! Control structures: deferred computation, lazy streams and
//! continuation-passing search.
//!
//! - [`Thunk`]: a deferred computation, optionally memoized
//! - [`Stream`]: a lazy, possibly infinite sequence built from thunks
//! - [`Trampoline`]: stack-safe recursion
//! - [`find`]: continuation-passing search over a stream
//! - [`Maybe`]: `Just(value) | Nothing()`
//!
//! # Examples
//!
//! ## Lazy Streams
//!
//! ```rust
//! use funcore::control::Stream;
//!
//! let naturals = Stream::enum_from(0_i64);
//! // Only the elements actually consumed are ever computed.
//! assert_eq!(naturals.take(3).unwrap().to_array(), vec![0, 1, 2]);
//! ```
//!
//! ## Searching With Continuations
//!
//! ```rust
//! use funcore::control::{continue_search, find, identity, Stream};
//!
//! let found = find(Stream::enum_from(0_i64), |n| n * n > 50, continue_search, identity);
//! assert_eq!(found, Some(8));
//! ```

mod maybe;
mod search;
mod stream;
mod thunk;
mod trampoline;

pub use maybe::{Maybe, MaybeCases};
pub use search::{Continuations, add_cps, continue_search, find, identity, search, succ_cps};
pub use stream::{Stream, StreamCases, StreamIterator};
pub use thunk::Thunk;
pub use trampoline::Trampoline;
