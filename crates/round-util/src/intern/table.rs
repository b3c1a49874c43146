//! Concurrent intern table backed by DashMap.
//!
//! - Sharded locking via DashMap, so distinct keys rarely contend
//! - Fast hashing with AHash
//! - Hit/miss counters for profiling
//!
//! # Thread Safety
//!
//! `InternTable<V>` is `Sync + Send` whenever `V` is. Two threads racing to
//! insert the same key both build a value, but only one of them is stored;
//! the loser receives the stored value, so every caller of the same key sees
//! the same entry.

use ahash::RandomState;
use dashmap::DashMap;
use std::convert::Infallible;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::InternerStats;

/// A string-keyed cache handing out one shared value per key.
///
/// Values are cloned out of the table, so `V` is normally a cheap handle
/// such as `Arc<T>`; cloning an `Arc` preserves pointer identity, which is
/// what makes interned values comparable with `Arc::ptr_eq`.
pub struct InternTable<V> {
    /// Key to cached value
    map: DashMap<Box<str>, V, RandomState>,

    /// Number of lookups that found an existing entry
    hits: AtomicUsize,

    /// Number of lookups that created a new entry
    misses: AtomicUsize,
}

impl<V: Clone> InternTable<V> {
    /// Create a new empty table
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    /// Create a table with room for `capacity` entries before resizing
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: DashMap::with_capacity_and_hasher(capacity, RandomState::new()),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    /// Return the value cached for `key`, creating it with `make` on first
    /// sight.
    ///
    /// `make` runs at most once per call and only when the key is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use round_util::intern::InternTable;
    ///
    /// let table = InternTable::new();
    /// assert_eq!(table.get_or_insert_with("x", || 1), 1);
    /// assert_eq!(table.get_or_insert_with("x", || 2), 1);
    /// ```
    pub fn get_or_insert_with(&self, key: &str, make: impl FnOnce() -> V) -> V {
        match self.try_get_or_insert_with(key, || Ok::<V, Infallible>(make())) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }

    /// Like [`get_or_insert_with`](Self::get_or_insert_with), but `make` may
    /// fail, in which case nothing is cached and the error is returned.
    ///
    /// `make` runs without holding any shard lock.
    ///
    /// # Examples
    ///
    /// ```
    /// use round_util::intern::InternTable;
    ///
    /// let table = InternTable::new();
    /// let parsed = table.try_get_or_insert_with("12", || "12".parse::<i32>());
    /// assert_eq!(parsed, Ok(12));
    /// assert!(table.try_get_or_insert_with("x", || "x".parse::<i32>()).is_err());
    /// assert!(!table.contains("x"));
    /// ```
    pub fn try_get_or_insert_with<E>(
        &self,
        key: &str,
        make: impl FnOnce() -> Result<V, E>,
    ) -> Result<V, E> {
        if let Some(entry) = self.map.get(key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(entry.value().clone());
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let value = make()?;
        Ok(self
            .map
            .entry(Box::from(key))
            .or_insert(value)
            .value()
            .clone())
    }

    /// Look up `key` without inserting
    pub fn get(&self, key: &str) -> Option<V> {
        self.map.get(key).map(|entry| entry.value().clone())
    }

    /// Returns true if `key` is cached
    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }
}

impl<V> InternTable<V> {
    /// Number of cached entries
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if nothing is cached
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Drop every cached entry and reset the counters
    pub fn clear(&self) {
        self.map.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    /// Get statistics about the table for profiling
    pub fn stats(&self) -> InternerStats {
        InternerStats {
            count: self.map.len(),
            capacity: self.map.capacity(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

impl<V: Clone> Default for InternTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for InternTable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InternTable")
            .field("len", &self.map.len())
            .field("hits", &self.hits.load(Ordering::Relaxed))
            .field("misses", &self.misses.load(Ordering::Relaxed))
            .finish()
    }
}
