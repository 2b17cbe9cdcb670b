//! Shared key and map types.

use ahash::RandomState;
use hashbrown::HashMap;
use indexmap::IndexMap;
use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

pub type FastHashMap<K, V> = HashMap<K, V, RandomState>;

/// Insertion-ordered map; method dictionaries and behaviours are built on it.
pub type OrderedMap<K, V> = IndexMap<K, V, RandomState>;

pub fn fast_hasher() -> RandomState {
    RandomState::with_seeds(0, 0, 0, 0)
}

pub fn fast_map_new<K: Eq + Hash, V>() -> FastHashMap<K, V> {
    HashMap::with_hasher(fast_hasher())
}

pub fn ordered_map_new<K, V>() -> OrderedMap<K, V> {
    IndexMap::with_hasher(fast_hasher())
}

/// Message name used as a method dictionary key.
///
/// Message names are case-insensitive: the name is stored uppercased, so two
/// `MethodName`s compare equal whenever the source names differ only in case.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MethodName(Arc<str>);

impl MethodName {
    pub fn new(name: &str) -> Self {
        if name.bytes().any(|b| b.is_ascii_lowercase()) {
            Self(Arc::from(name.to_ascii_uppercase()))
        } else {
            Self(Arc::from(name))
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for MethodName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for MethodName {
    fn from(name: String) -> Self {
        Self::new(&name)
    }
}

impl Borrow<str> for MethodName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for MethodName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", &*self.0)
    }
}

impl fmt::Display for MethodName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
