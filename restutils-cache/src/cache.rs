//! In-memory expiring cache with lazy eviction.

use std::borrow::Borrow;
use std::hash::Hash;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use parking_lot::RwLock;
use tracing::{debug, trace};

use restutils_core::constants::DEFAULT_CACHE_CAPACITY;

use crate::clock::{Clock, SystemClock};
use crate::config::CacheConfig;

/// Stored value with the time of its last write.
#[derive(Clone, Debug)]
struct CacheEntry<V> {
    value: V,
    last_updated: Instant,
}

impl<V> CacheEntry<V> {
    /// True once `now` is strictly past `last_updated + expiry`.
    fn is_expired(&self, expiry: Duration, now: Instant) -> bool {
        self.last_updated
            .checked_add(expiry)
            .map_or(false, |deadline| deadline < now)
    }
}

/// Generic key-value cache whose entries expire after a configurable age.
///
/// Expiry is only enforced by [`cleanup`](Self::cleanup). Until it runs,
/// [`get`](Self::get) returns stale values as well.
///
/// # Thread Safety
///
/// All operations take `&self` and can be called concurrently. Writes to the
/// same key are last-writer-wins. Cleanup removes each stale key with an
/// atomic compare-and-remove, so an entry refreshed while cleanup is running
/// is kept.
pub struct ExpiringCache<K, V, C = SystemClock>
where
    K: Eq + Hash,
{
    entries: DashMap<K, CacheEntry<V>>,
    expiry: RwLock<Option<Duration>>,
    clock: C,
}

impl<K, V> ExpiringCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Creates a cache whose entries never expire.
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    /// Creates a cache whose entries expire once older than `expiry`.
    pub fn with_expiry(expiry: Duration) -> Self {
        Self::build(Some(expiry), DEFAULT_CACHE_CAPACITY, SystemClock)
    }

    /// Creates a cache from a config.
    pub fn with_config(config: CacheConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<K, V, C> ExpiringCache<K, V, C>
where
    K: Eq + Hash + Clone,
    V: Clone,
    C: Clock,
{
    /// Creates a cache from a config that reads time from `clock`.
    pub fn with_clock(config: CacheConfig, clock: C) -> Self {
        Self::build(config.expiry(), config.initial_capacity, clock)
    }

    fn build(expiry: Option<Duration>, capacity: usize, clock: C) -> Self {
        Self {
            entries: DashMap::with_capacity(capacity),
            expiry: RwLock::new(expiry),
            clock,
        }
    }

    /// Returns the expiry duration, or `None` if entries never expire.
    pub fn expiry_duration(&self) -> Option<Duration> {
        *self.expiry.read()
    }

    /// Changes the expiry duration.
    ///
    /// Takes effect on the next [`cleanup`](Self::cleanup); nothing is
    /// evicted by this call.
    pub fn set_expiry_duration(&self, expiry: Option<Duration>) {
        *self.expiry.write() = expiry;
        debug!(?expiry, "Cache expiry duration changed");
    }

    /// Stores `value` under `key` and stamps it with the current time.
    ///
    /// An existing entry is replaced, value and timestamp together.
    pub fn set(&self, key: K, value: V) {
        let entry = CacheEntry {
            value,
            last_updated: self.clock.now(),
        };
        self.entries.insert(key, entry);
    }

    /// Alias for [`set`](Self::set).
    pub fn put(&self, key: K, value: V) {
        self.set(key, value);
    }

    /// Returns the value stored under `key`.
    ///
    /// Expiry is not checked: a stale entry is returned until cleanup
    /// removes it.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    /// Returns the value stored under `key` unless cleanup would evict it.
    ///
    /// The stale entry itself is left in place.
    pub fn get_fresh<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let expiry = self.expiry_duration();
        let now = self.clock.now();
        let entry = self.entries.get(key)?;

        match expiry {
            Some(expiry) if entry.is_expired(expiry, now) => None,
            _ => Some(entry.value.clone()),
        }
    }

    /// Returns true if an entry exists for `key`, stale or not.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Removes the entry for `key`. No-op if absent.
    pub fn remove<Q>(&self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.remove(key);
    }

    /// Removes all entries.
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Removes every entry older than the expiry duration.
    ///
    /// Does nothing when no expiry is configured.
    pub fn cleanup(&self) {
        let Some(expiry) = self.expiry_duration() else {
            trace!("Cache has no expiry, skipping cleanup");
            return;
        };
        let now = self.clock.now();

        // Collect first: removing while iterating would deadlock on the shard.
        let stale: Vec<K> = self
            .entries
            .iter()
            .filter(|entry| entry.value().is_expired(expiry, now))
            .map(|entry| entry.key().clone())
            .collect();

        let evicted = stale
            .iter()
            .filter(|key| self.evict_if_stale(key, expiry, now))
            .count();

        if evicted > 0 {
            debug!(evicted, remaining = self.entries.len(), "Evicted expired cache entries");
        }
    }

    /// Removes `key` only if the entry present right now is stale at `now`.
    ///
    /// The check runs under the shard lock, so an entry refreshed after the
    /// scan survives.
    fn evict_if_stale(&self, key: &K, expiry: Duration, now: Instant) -> bool {
        self.entries
            .remove_if(key, |_, entry| entry.is_expired(expiry, now))
            .is_some()
    }

    /// Returns the number of entries, including stale ones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns cache statistics.
    pub fn stats(&self) -> CacheStats {
        let total = self.entries.len();
        let expired = match self.expiry_duration() {
            Some(expiry) => {
                let now = self.clock.now();
                self.entries
                    .iter()
                    .filter(|entry| entry.value().is_expired(expiry, now))
                    .count()
            }
            None => 0,
        };

        CacheStats {
            total_entries: total,
            expired_entries: expired,
            valid_entries: total.saturating_sub(expired),
        }
    }
}

impl<K, V> Default for ExpiringCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Cache statistics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheStats {
    /// Total entries (including expired)
    pub total_entries: usize,
    /// Entries the next cleanup would evict
    pub expired_entries: usize,
    /// Entries that are not yet expired
    pub valid_entries: usize,
}
