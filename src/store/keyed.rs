//! Chained hash table with automatic growth

use rustc_hash::FxBuildHasher;
use std::hash::{BuildHasher, Hash};
use thiserror::Error;

/// Errors that can occur during store operations
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("key is already present in the table")]
    DuplicateKey,

    #[error("key is not contained in the table")]
    KeyNotFound,
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Number of buckets a store starts with unless configured otherwise.
pub const DEFAULT_CAPACITY: usize = 64;

/// Entries-to-buckets ratio at which the table grows.
pub const LOAD_FACTOR: f64 = 0.8;

/// One key-value pair inside a bucket.
#[derive(Debug, Clone)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// Hash map with chained buckets and automatic growth.
///
/// Collisions are resolved by an unordered per-bucket list that is scanned
/// linearly on lookup and removal. Before an insert that would reach the
/// load-factor threshold, the bucket array doubles and every entry is
/// rehashed, so a completed insert never leaves the table over threshold.
///
/// The hasher is pluggable and defaults to [`FxBuildHasher`].
#[derive(Clone)]
pub struct KeyedStore<K, V, S = FxBuildHasher> {
    buckets: Vec<Vec<Entry<K, V>>>,
    len: usize,
    hasher: S,
}

impl<K, V, S> std::fmt::Debug for KeyedStore<K, V, S>
where
    K: std::fmt::Debug,
    V: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyedStore")
            .field("buckets", &self.buckets)
            .field("len", &self.len)
            .finish()
    }
}

impl<K, V> KeyedStore<K, V>
where
    K: Eq + Hash,
{
    /// Create an empty store with [`DEFAULT_CAPACITY`] buckets.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty store with the given number of buckets.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, FxBuildHasher::default())
    }
}

impl<K, V, S> KeyedStore<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Create an empty store with the given bucket count and hasher.
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        let capacity = capacity.max(1);
        KeyedStore {
            buckets: std::iter::repeat_with(Vec::new).take(capacity).collect(),
            len: 0,
            hasher,
        }
    }

    /// Insert a new key-value pair.
    ///
    /// Fails with [`StoreError::DuplicateKey`] when the key is already
    /// present. The growth check runs before the duplicate check, so a
    /// rejected insert may still have grown the table.
    pub fn put(&mut self, key: K, value: V) -> StoreResult<()> {
        // Grow first so the threshold is never crossed by the insert below.
        if (self.len + 1) as f64 >= LOAD_FACTOR * self.buckets.len() as f64 {
            self.grow();
        }

        let index = self.bucket_index(&key);
        if self.buckets[index].iter().any(|entry| entry.key == key) {
            return Err(StoreError::DuplicateKey);
        }

        self.buckets[index].push(Entry { key, value });
        self.len += 1;
        Ok(())
    }

    /// Look up the value stored for `key`.
    pub fn get(&self, key: &K) -> StoreResult<&V> {
        let index = self.bucket_index(key);
        self.buckets[index]
            .iter()
            .find(|entry| entry.key == *key)
            .map(|entry| &entry.value)
            .ok_or(StoreError::KeyNotFound)
    }

    /// Mutable counterpart of [`get`](Self::get).
    pub fn get_mut(&mut self, key: &K) -> StoreResult<&mut V> {
        let index = self.bucket_index(key);
        self.buckets[index]
            .iter_mut()
            .find(|entry| entry.key == *key)
            .map(|entry| &mut entry.value)
            .ok_or(StoreError::KeyNotFound)
    }

    /// Whether `key` is present. No side effects.
    pub fn contains_key(&self, key: &K) -> bool {
        let index = self.bucket_index(key);
        self.buckets[index].iter().any(|entry| entry.key == *key)
    }

    /// Remove the pair stored for `key` and return its value.
    pub fn remove(&mut self, key: &K) -> StoreResult<V> {
        let index = self.bucket_index(key);
        let position = self.buckets[index]
            .iter()
            .position(|entry| entry.key == *key)
            .ok_or(StoreError::KeyNotFound)?;

        self.len -= 1;
        Ok(self.buckets[index].swap_remove(position).value)
    }

    /// Remove every pair, keeping the current bucket count.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.len = 0;
    }

    /// Number of stored pairs.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// All stored keys, in bucket order. The order carries no meaning but is
    /// stable while the table is not mutated.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.buckets.iter().flatten().map(|entry| &entry.key)
    }

    /// All stored values, in bucket order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.buckets.iter().flatten().map(|entry| &entry.value)
    }

    /// Mutable iterator over all stored values.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> {
        self.buckets.iter_mut().flatten().map(|entry| &mut entry.value)
    }

    fn bucket_index(&self, key: &K) -> usize {
        self.hasher.hash_one(key) as usize % self.buckets.len()
    }

    /// Double the bucket count and rehash every entry into the new table.
    fn grow(&mut self) {
        let doubled = self.buckets.len() * 2;
        let old = std::mem::replace(
            &mut self.buckets,
            std::iter::repeat_with(Vec::new).take(doubled).collect(),
        );

        for entry in old.into_iter().flatten() {
            let index = self.bucket_index(&entry.key);
            self.buckets[index].push(entry);
        }
    }
}

impl<K, V> Default for KeyedStore<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}
