//! Cache Store Module
//!
//! Time-boxed cache keyed by string, with lazy expiry and at most one
//! in-flight resolution per key.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};
use tokio::time::Instant;
use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, Freshness};

// == Cache State ==
#[derive(Debug)]
struct CacheState<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Time of the most recent successful write to any key
    last_write: Option<Instant>,
    /// Performance statistics
    stats: CacheStats,
}

impl<V: Clone> CacheState<V> {
    fn fresh_value(&self, key: &str, now: Instant, ttl: Duration, freshness: Freshness) -> Option<V> {
        let entry = self.entries.get(key)?;
        let fresh = match freshness {
            Freshness::PerKey => entry.is_fresh(now, ttl),
            Freshness::Shared => self
                .last_write
                .is_some_and(|written| now.saturating_duration_since(written) < ttl),
        };
        fresh.then(|| entry.value.clone())
    }
}

// == TTL Cache ==
/// Shared cache with a fixed expiry duration.
///
/// Stale entries are never swept; they stay in place until overwritten by the
/// next successful resolution for the same key.
#[derive(Debug)]
pub struct TtlCache<V> {
    state: RwLock<CacheState<V>>,
    /// Per-key locks held while a resolution is running
    in_flight: Mutex<HashMap<String, Arc<Mutex<()>>>>,
    ttl: Duration,
    freshness: Freshness,
}

impl<V: Clone> TtlCache<V> {
    // == Constructor ==
    /// Creates an empty cache whose entries expire after `ttl`.
    pub fn new(ttl: Duration, freshness: Freshness) -> Self {
        Self {
            state: RwLock::new(CacheState {
                entries: HashMap::new(),
                last_write: None,
                stats: CacheStats::new(),
            }),
            in_flight: Mutex::new(HashMap::new()),
            ttl,
            freshness,
        }
    }

    /// Expiry duration of this cache.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn freshness(&self) -> Freshness {
        self.freshness
    }

    // == Is Valid ==
    /// Checks whether `key` holds a fresh value at `now`.
    pub async fn is_valid(&self, key: &str, now: Instant) -> bool {
        let state = self.state.read().await;
        state.fresh_value(key, now, self.ttl, self.freshness).is_some()
    }

    // == Get ==
    /// Returns the value for `key` if present and fresh.
    ///
    /// Records a hit or a miss.
    pub async fn get(&self, key: &str) -> Option<V> {
        // Write lock needed for the stats update
        let mut state = self.state.write().await;
        let value = state.fresh_value(key, Instant::now(), self.ttl, self.freshness);
        match value {
            Some(_) => state.stats.record_hit(),
            None => state.stats.record_miss(),
        }
        value
    }

    // == Put ==
    /// Stores `value` under `key`, replacing any previous entry.
    pub async fn put(&self, key: impl Into<String>, value: V) {
        self.insert_at(key.into(), value, Instant::now()).await;
    }

    // == Get Or Resolve ==
    /// Returns the fresh value for `key`, or runs `resolve` and stores its result.
    ///
    /// A resolved value is stamped with the time of the miss, not the time the
    /// resolution finished. Concurrent misses for the same key wait for the first resolution instead
    /// of starting their own. A failed resolution stores nothing.
    pub async fn get_or_resolve<F, Fut, E>(&self, key: &str, resolve: F) -> Result<V, E>
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(value) = self.lookup_fresh(key).await {
            return Ok(value);
        }

        let lock = self.key_lock(key).await;
        let result = {
            let _guard = lock.lock().await;
            // Another caller may have resolved while we waited
            match self.lookup_fresh(key).await {
                Some(value) => Ok(value),
                None => self.resolve_and_store(key, resolve).await,
            }
        };
        self.release_key_lock(key, &lock).await;
        result
    }

    // == Invalidate ==
    /// Removes the entry for `key`. Returns true if one existed.
    pub async fn invalidate(&self, key: &str) -> bool {
        let mut state = self.state.write().await;
        let removed = state.entries.remove(key).is_some();
        let count = state.entries.len();
        state.stats.set_total_entries(count);
        removed
    }

    /// Removes every entry and forgets the last write.
    pub async fn clear(&self) {
        let mut state = self.state.write().await;
        state.entries.clear();
        state.last_write = None;
        state.stats.set_total_entries(0);
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub async fn stats(&self) -> CacheStats {
        let state = self.state.read().await;
        let mut stats = state.stats.clone();
        stats.set_total_entries(state.entries.len());
        stats
    }

    /// Number of stored entries, fresh or stale.
    pub async fn len(&self) -> usize {
        self.state.read().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.entries.is_empty()
    }

    /// Hit path of `get_or_resolve`: only a hit is recorded here.
    async fn lookup_fresh(&self, key: &str) -> Option<V> {
        let mut state = self.state.write().await;
        let value = state.fresh_value(key, Instant::now(), self.ttl, self.freshness);
        if value.is_some() {
            debug!("Using cached data for key: {}", key);
            state.stats.record_hit();
        }
        value
    }

    async fn resolve_and_store<F, Fut, E>(&self, key: &str, resolve: F) -> Result<V, E>
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        let looked_up_at = Instant::now();
        self.state.write().await.stats.record_miss();

        match resolve(key.to_string()).await {
            Ok(value) => {
                self.insert_at(key.to_string(), value.clone(), looked_up_at).await;
                Ok(value)
            }
            Err(err) => {
                self.state.write().await.stats.record_failure();
                Err(err)
            }
        }
    }

    async fn insert_at(&self, key: String, value: V, at: Instant) {
        let mut state = self.state.write().await;
        state.entries.insert(key, CacheEntry::new(value, at));
        // A slow resolution must not move the shared clock backwards
        state.last_write = Some(state.last_write.map_or(at, |written| written.max(at)));
        let count = state.entries.len();
        state.stats.set_total_entries(count);
    }

    async fn key_lock(&self, key: &str) -> Arc<Mutex<()>> {
        let mut locks = self.in_flight.lock().await;
        locks.entry(key.to_string()).or_default().clone()
    }

    async fn release_key_lock(&self, key: &str, lock: &Arc<Mutex<()>>) {
        let mut locks = self.in_flight.lock().await;
        // Only the map and this caller hold it: nobody else is waiting
        if Arc::strong_count(lock) == 2 {
            locks.remove(key);
        }
    }
}
