//! An immutable key-value store made of closures.
//!
//! A [`ClosureMap`] holds no table. Each [`ClosureMap::set`] wraps a
//! closure that answers for exactly one key and links it in front of the
//! map it was built from; [`ClosureMap::get`] asks the closures from the
//! newest to the oldest and returns the first answer.
//!
//! # Examples
//!
//! ```rust
//! use funcore::persistent::ClosureMap;
//!
//! let robot = ClosureMap::empty().set("C3PO", "star wars");
//! let robots = robot.set("HAL9000", "2001: a space odyssey");
//!
//! assert_eq!(robots.get(&"C3PO"), Some("star wars"));
//! assert_eq!(robots.get(&"R2D2"), None);
//! assert_eq!(robot.get(&"HAL9000"), None);
//! ```

use std::fmt;
use std::rc::Rc;

type Lookup<K, V> = Box<dyn Fn(&K) -> Option<V>>;

struct Binding<K, V> {
    lookup: Lookup<K, V>,
    previous: Option<Rc<Self>>,
}

/// A persistent map whose bindings are closures.
///
/// | Operation | Complexity |
/// |-----------|------------|
/// | `empty`   | O(1)       |
/// | `set`     | O(1)       |
/// | `get`     | O(bindings)|
pub struct ClosureMap<K, V> {
    latest: Option<Rc<Binding<K, V>>>,
    bindings: usize,
}

static_assertions::assert_not_impl_any!(ClosureMap<i32, i32>: Send, Sync);

impl<K, V> ClosureMap<K, V> {
    /// The map that answers `None` for every key.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            latest: None,
            bindings: 0,
        }
    }

    /// Number of `set` calls this map was built from, shadowed ones
    /// included.
    #[inline]
    #[must_use]
    pub const fn bindings(&self) -> usize {
        self.bindings
    }

    /// Returns the value bound to `key` most recently, or `None`.
    pub fn get(&self, key: &K) -> Option<V> {
        let mut current = self.latest.as_deref();
        while let Some(binding) = current {
            if let Some(value) = (binding.lookup)(key) {
                return Some(value);
            }
            current = binding.previous.as_deref();
        }
        None
    }
}

impl<K, V> ClosureMap<K, V>
where
    K: PartialEq + 'static,
    V: Clone + 'static,
{
    /// Returns a new map that binds `key` to `value` and otherwise
    /// answers like `self`. `self` is left unchanged.
    #[must_use]
    pub fn set(&self, key: K, value: V) -> Self {
        let lookup: Lookup<K, V> = Box::new(move |query| (*query == key).then(|| value.clone()));
        Self {
            latest: Some(Rc::new(Binding {
                lookup,
                previous: self.latest.clone(),
            })),
            bindings: self.bindings + 1,
        }
    }
}

impl<K, V> Clone for ClosureMap<K, V> {
    fn clone(&self) -> Self {
        Self {
            latest: self.latest.clone(),
            bindings: self.bindings,
        }
    }
}

impl<K, V> Default for ClosureMap<K, V> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<K, V> Drop for ClosureMap<K, V> {
    fn drop(&mut self) {
        let mut next = self.latest.take();
        while let Some(binding) = next {
            match Rc::try_unwrap(binding) {
                Ok(mut owned) => next = owned.previous.take(),
                Err(_) => break,
            }
        }
    }
}

impl<K, V> fmt::Debug for ClosureMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ClosureMap")
            .field("bindings", &self.bindings)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn robots() -> ClosureMap<&'static str, &'static str> {
        ClosureMap::empty()
            .set("C3PO", "star wars")
            .set("HAL9000", "2001: a space odyssey")
    }

    #[rstest]
    #[case("C3PO", Some("star wars"))]
    #[case("HAL9000", Some("2001: a space odyssey"))]
    #[case("R2D2", None)]
    fn test_get(#[case] key: &'static str, #[case] expected: Option<&'static str>) {
        assert_eq!(robots().get(&key), expected);
    }

    #[rstest]
    fn test_empty_answers_none() {
        let map: ClosureMap<String, i32> = ClosureMap::empty();
        assert_eq!(map.get(&String::from("anything")), None);
        assert_eq!(map.bindings(), 0);
    }

    #[rstest]
    fn test_set_leaves_earlier_map_unchanged() {
        let robot = ClosureMap::empty().set("C3PO", "star wars");
        let robots = robot.set("HAL9000", "2001: a space odyssey");
        assert_eq!(robot.get(&"HAL9000"), None);
        assert_eq!(robot.get(&"C3PO"), Some("star wars"));
        assert_eq!(robots.get(&"HAL9000"), Some("2001: a space odyssey"));
        assert_eq!((robot.bindings(), robots.bindings()), (1, 2));
    }

    #[rstest]
    fn test_later_binding_shadows_earlier() {
        let original = robots();
        let renamed = original.set("C3PO", "the empire strikes back");
        assert_eq!(renamed.get(&"C3PO"), Some("the empire strikes back"));
        assert_eq!(original.get(&"C3PO"), Some("star wars"));
    }

    #[rstest]
    fn test_long_chain_lookup_and_drop() {
        let map = (0..200_000_u32).fold(ClosureMap::empty(), |map, key| map.set(key, key * 2));
        assert_eq!(map.get(&0), Some(0));
        assert_eq!(map.get(&199_999), Some(399_998));
        assert_eq!(map.get(&200_000), None);
        drop(map);
    }
}
