//! Intern module - keyed caches that hand out one shared value per key.
//!
//! The lexer keeps one [`InternTable`] per cache (identifiers, numeric
//! literals). Tables are owned by whoever creates them; there is no global
//! table, so two lexers never share entries.
//!
//! # Performance Characteristics
//!
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `get_or_insert_with` (hit) | O(1) | Shard read lock only |
//! | `get_or_insert_with` (miss) | O(1) | Shard write lock + allocation |
//! | `clear` | O(n) | Drops every cached value |
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use round_util::intern::InternTable;
//!
//! let table: InternTable<Arc<str>> = InternTable::new();
//! let a = table.get_or_insert_with("foo", || Arc::from("foo"));
//! let b = table.get_or_insert_with("foo", || Arc::from("other"));
//! assert!(Arc::ptr_eq(&a, &b));
//! ```

mod table;

pub use table::InternTable;

/// Statistics about an intern table for profiling
///
/// # Examples
///
/// ```
/// use round_util::intern::InternerStats;
///
/// let identifiers = InternerStats::new(10, 32, 80, 20);
/// let numbers = InternerStats::new(2, 8, 5, 2);
/// assert_eq!(identifiers.merge(numbers).hits, 85);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InternerStats {
    /// Number of cached entries
    pub count: usize,
    /// Hash map capacity
    pub capacity: usize,
    /// Number of lookups that found an existing entry
    pub hits: usize,
    /// Number of lookups that created a new entry
    pub misses: usize,
}

impl InternerStats {
    /// Create new stats with the given values
    pub const fn new(count: usize, capacity: usize, hits: usize, misses: usize) -> Self {
        Self {
            count,
            capacity,
            hits,
            misses,
        }
    }

    /// Combined stats of two tables
    pub fn merge(self, other: InternerStats) -> Self {
        Self {
            count: self.count + other.count,
            capacity: self.capacity + other.capacity,
            hits: self.hits + other.hits,
            misses: self.misses + other.misses,
        }
    }
}
