//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with creation time.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// Represents a single cache entry with value and creation time.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// When the value was looked up, or written for a direct `put`
    pub created_at: Instant,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry written at `created_at`.
    pub fn new(value: V, created_at: Instant) -> Self {
        Self { value, created_at }
    }

    // == Age ==
    /// Time elapsed since `created_at`, zero if `now` is earlier.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Fresh ==
    /// Checks whether the entry is still valid for the given expiry.
    ///
    /// Boundary condition: an entry whose age equals `ttl` is stale.
    pub fn is_fresh(&self, now: Instant, ttl: Duration) -> bool {
        self.age(now) < ttl
    }

    // == Time To Live ==
    /// Remaining lifetime, `Duration::ZERO` once stale.
    pub fn remaining(&self, now: Instant, ttl: Duration) -> Duration {
        ttl.saturating_sub(self.age(now))
    }
}
