//! Persistent (immutable) data structures.
//!
//! - [`List`]: persistent singly-linked list
//! - [`ClosureMap`]: persistent key-value store built from closures
//!
//! # Structural Sharing
//!
//! Prepending to a list creates a new version that shares every existing
//! node with the original, so old versions stay valid and unchanged.
//!
//! ```rust
//! use funcore::persistent::List;
//!
//! let list = List::from_array(&[2, 3]);
//! let extended = list.prepend(1);
//! assert_eq!(list.len(), 2);
//! assert_eq!(extended.to_array(), vec![1, 2, 3]);
//! ```

mod closure_map;
mod list;

pub use closure_map::ClosureMap;
pub use list::{List, ListCases, ListIntoIterator, ListIterator};
