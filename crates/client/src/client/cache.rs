//! Bounded, time-expiring memoization map.
//!
//! Purpose: Memoize token exchange results per credential triple.
//! Responsibilities: Store values with their insertion instant, expire them after a fixed TTL,
//! and evict the oldest entry once the fixed capacity is exceeded.
//! Non-scope: Persistent storage, cross-process sharing, or locking (callers wrap it in a mutex).
//!
//! # Invariants
//! - `len() <= capacity` after every insert
//! - An entry older than `ttl` is never returned
//! - Re-inserting an existing key refreshes its timestamp and moves it to the newest position
//! - Every method that depends on time has an `_at` variant taking an explicit `Instant`

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;
use std::time::{Duration, Instant};

use tracing::trace;

/// A memoized value with the instant it was stored.
#[derive(Clone, Debug)]
struct CacheEntry<V> {
    value: V,
    cached_at: Instant,
}

impl<V> CacheEntry<V> {
    fn is_expired_at(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.cached_at) > ttl
    }
}

/// Fixed-capacity map whose entries expire after a fixed duration.
#[derive(Debug)]
pub struct TtlCache<K, V> {
    entries: HashMap<K, CacheEntry<V>>,
    /// Keys from oldest to newest insertion.
    order: VecDeque<K>,
    ttl: Duration,
    capacity: usize,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Create an empty cache.
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
            ttl,
            capacity,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of stored entries, including ones that have expired but not yet been purged.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a live entry.
    pub fn get(&mut self, key: &K) -> Option<V> {
        self.get_at(key, Instant::now())
    }

    /// Look up a live entry as of `now`. An expired entry is removed.
    pub fn get_at(&mut self, key: &K, now: Instant) -> Option<V> {
        let expired = self.entries.get(key)?.is_expired_at(now, self.ttl);
        if expired {
            trace!("Cache entry expired");
            self.remove(key);
            return None;
        }
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    /// Store a value.
    pub fn insert(&mut self, key: K, value: V) {
        self.insert_at(key, value, Instant::now());
    }

    /// Store a value as of `now`, then purge expired entries and evict the
    /// oldest ones beyond capacity.
    pub fn insert_at(&mut self, key: K, value: V, now: Instant) {
        if self.capacity == 0 {
            return;
        }

        if self.entries.contains_key(&key) {
            self.order.retain(|k| k != &key);
        }
        self.order.push_back(key.clone());
        self.entries.insert(
            key,
            CacheEntry {
                value,
                cached_at: now,
            },
        );

        self.purge_expired_at(now);

        while self.entries.len() > self.capacity {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            trace!("Evicting oldest cache entry");
            self.entries.remove(&oldest);
        }
    }

    /// Remove an entry, returning its value if it was present (expired or not).
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let entry = self.entries.remove(key)?;
        self.order.retain(|k| k != key);
        Some(entry.value)
    }

    /// Drop every entry older than the TTL as of `now`.
    pub fn purge_expired_at(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.entries.retain(|_, entry| !entry.is_expired_at(now, ttl));
        let entries = &self.entries;
        self.order.retain(|k| entries.contains_key(k));
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}
