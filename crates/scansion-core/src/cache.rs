//! Bounded memoization for tagging, word extraction, and stemming.
//!
//! Each cache is keyed by the exact input string (no normalization) and
//! evicts the least recently used entry once full. Caches are owned by the
//! engine and guarded by a mutex, so a shared engine stays consistent when
//! sentences are analyzed from several threads.

use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

/// Default capacity of the tag cache.
pub const DEFAULT_TAG_CAPACITY: usize = 2056;
/// Default capacity of the significant-word cache.
pub const DEFAULT_WORD_CAPACITY: usize = 2056;
/// Default capacity of the stem cache.
pub const DEFAULT_STEM_CAPACITY: usize = 256;

/// Capacities for the three lexical caches.
///
/// A capacity of zero disables memoization for that cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CacheCapacity {
    /// Tagged-token sequences per sentence.
    pub tags: usize,
    /// Significant-word sequences per sentence.
    pub words: usize,
    /// Stems per word.
    pub stems: usize,
}

impl Default for CacheCapacity {
    fn default() -> Self {
        Self {
            tags: DEFAULT_TAG_CAPACITY,
            words: DEFAULT_WORD_CAPACITY,
            stems: DEFAULT_STEM_CAPACITY,
        }
    }
}

/// Hit/miss counters for one cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheCounters {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that had to compute the value.
    pub misses: u64,
    /// Entries currently held.
    pub len: usize,
    /// Maximum entries held.
    pub capacity: usize,
}

/// Counters for all lexical caches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Tag cache counters.
    pub tags: CacheCounters,
    /// Significant-word cache counters.
    pub words: CacheCounters,
    /// Stem cache counters.
    pub stems: CacheCounters,
}

#[derive(Debug)]
struct Slot<V> {
    value: V,
    tick: u64,
}

/// String-keyed least-recently-used cache with a fixed capacity.
#[derive(Debug)]
pub struct BoundedCache<V> {
    capacity: usize,
    entries: HashMap<String, Slot<V>>,
    // tick -> key, oldest first
    recency: BTreeMap<u64, String>,
    clock: u64,
    hits: u64,
    misses: u64,
}

impl<V: Clone> BoundedCache<V> {
    /// Create an empty cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::with_capacity(capacity.min(1024)),
            recency: BTreeMap::new(),
            clock: 0,
            hits: 0,
            misses: 0,
        }
    }

    /// Look up `key`, marking it most recently used.
    pub fn get(&mut self, key: &str) -> Option<V> {
        self.clock += 1;
        let tick = self.clock;
        let Some(slot) = self.entries.get_mut(key) else {
            self.misses += 1;
            return None;
        };
        self.hits += 1;
        if let Some(owner) = self.recency.remove(&slot.tick) {
            self.recency.insert(tick, owner);
        }
        slot.tick = tick;
        Some(slot.value.clone())
    }

    /// Insert `value` under `key`, evicting the least recently used entry if full.
    pub fn insert(&mut self, key: &str, value: V) {
        if self.capacity == 0 {
            return;
        }
        self.clock += 1;
        let tick = self.clock;
        if let Some(slot) = self.entries.get_mut(key) {
            self.recency.remove(&slot.tick);
            slot.value = value;
            slot.tick = tick;
            self.recency.insert(tick, key.to_string());
            return;
        }
        while self.entries.len() >= self.capacity {
            let Some((_, oldest)) = self.recency.pop_first() else {
                break;
            };
            self.entries.remove(&oldest);
        }
        self.entries.insert(key.to_string(), Slot { value, tick });
        self.recency.insert(tick, key.to_string());
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot of the hit/miss counters.
    pub fn counters(&self) -> CacheCounters {
        CacheCounters {
            hits: self.hits,
            misses: self.misses,
            len: self.entries.len(),
            capacity: self.capacity,
        }
    }
}

/// A [`BoundedCache`] shared behind a mutex.
#[derive(Debug)]
pub struct SharedCache<V> {
    inner: Mutex<BoundedCache<V>>,
}

impl<V: Clone> SharedCache<V> {
    /// Create a shared cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(BoundedCache::new(capacity)),
        }
    }

    /// Return the cached value for `key`, computing and storing it on a miss.
    ///
    /// The lock is released while `compute` runs, so a slow collaborator
    /// never blocks other readers. Two threads missing on the same key may
    /// both compute; the results are equal because `compute` is pure.
    pub fn get_or_insert_with(&self, key: &str, compute: impl FnOnce() -> V) -> V {
        if let Some(hit) = self.lock().get(key) {
            return hit;
        }
        let value = compute();
        self.lock().insert(key, value.clone());
        value
    }

    /// Snapshot of the hit/miss counters.
    pub fn counters(&self) -> CacheCounters {
        self.lock().counters()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BoundedCache<V>> {
        // A poisoned cache only means a collaborator panicked mid-insert;
        // the map itself is still structurally valid.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}
