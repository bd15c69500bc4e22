//! Storage backends for the DP cache.

use std::collections::HashMap;
use std::hash::Hash;

/// Storage for computed values.
pub trait Backend<I, K> {
    /// The cached value for `index`, if it has been computed.
    fn get(&self, index: &I) -> Option<&K>;

    /// Store `value` for `index`, keeping an existing value if there is one.
    fn insert(&mut self, index: I, value: K) -> &K;
}

/// Dense storage for `usize` indices starting at 0; grows on demand.
#[derive(Debug)]
pub struct VecBackend<K> {
    data: Vec<Option<K>>,
}

impl<K> VecBackend<K> {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }
}

impl<K> Default for VecBackend<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Backend<usize, K> for VecBackend<K> {
    fn get(&self, index: &usize) -> Option<&K> {
        self.data.get(*index)?.as_ref()
    }

    fn insert(&mut self, index: usize, value: K) -> &K {
        if index >= self.data.len() {
            self.data.resize_with(index + 1, || None);
        }
        self.data[index].get_or_insert(value)
    }
}

/// Sparse storage for any hashable index.
#[derive(Debug)]
pub struct HashMapBackend<I, K> {
    data: HashMap<I, K>,
}

impl<I, K> HashMapBackend<I, K> {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }
}

impl<I, K> Default for HashMapBackend<I, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Hash + Eq, K> Backend<I, K> for HashMapBackend<I, K> {
    fn get(&self, index: &I) -> Option<&K> {
        self.data.get(index)
    }

    fn insert(&mut self, index: I, value: K) -> &K {
        self.data.entry(index).or_insert(value)
    }
}
