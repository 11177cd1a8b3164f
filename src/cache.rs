//! Caching layer for repeated search queries
//!
//! Filtering the embedded datasets is cheap, but one CLI invocation can
//! filter the same query several times (render, footer counts, export).
//! The cache stores matching row indices rather than rows, so a single
//! cache serves every record type.

use lru::LruCache;
use parking_lot::RwLock;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Cache key: dataset identity plus the query, lowered on construction so
/// "REP" and "rep" share an entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilterKey {
    dataset: &'static str,
    query: String,
}

impl FilterKey {
    pub fn new(dataset: &'static str, query: &str) -> Self {
        Self {
            dataset,
            query: query.to_lowercase(),
        }
    }
}

/// Thread-safe LRU memo of filter results, stored as row indices.
pub struct FilterCache {
    inner: RwLock<LruCache<FilterKey, Arc<Vec<usize>>>>,
}

impl FilterCache {
    pub const DEFAULT_CAPACITY: usize = 64;

    /// Create a cache holding up to `capacity` distinct queries.
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner: RwLock::new(LruCache::new(capacity)),
        }
    }

    /// Look up a query's row indices. Uses the non-mutating peek so reads
    /// only need the read lock.
    pub fn get(&self, key: &FilterKey) -> Option<Arc<Vec<usize>>> {
        self.inner.read().peek(key).cloned()
    }

    pub fn put(&self, key: FilterKey, indices: Arc<Vec<usize>>) {
        self.inner.write().put(key, indices);
    }

    pub fn remove(&self, key: &FilterKey) -> Option<Arc<Vec<usize>>> {
        self.inner.write().pop(key)
    }

    pub fn clear(&self) {
        self.inner.write().clear();
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.inner.read().cap().get()
    }

    /// (entries, capacity) pair for status output.
    pub fn stats(&self) -> (usize, usize) {
        let cache = self.inner.read();
        (cache.len(), cache.cap().get())
    }
}

impl Default for FilterCache {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}
