//! Cache Module
//!
//! Provides an in-memory, time-boxed cache with lazy expiry and
//! single in-flight resolution per key.

mod entry;
mod stats;
mod store;


use std::fmt;
use std::str::FromStr;

// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::TtlCache;

// == Freshness ==
/// How an entry's age is measured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Freshness {
    /// Each entry expires `ttl` after it was written.
    #[default]
    PerKey,
    /// Every entry expires `ttl` after the most recent write to any key.
    Shared,
}

impl FromStr for Freshness {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "per-key" | "per_key" | "perkey" => Ok(Freshness::PerKey),
            "shared" => Ok(Freshness::Shared),
            other => Err(format!("unknown cache freshness mode: {other}")),
        }
    }
}

impl fmt::Display for Freshness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Freshness::PerKey => f.write_str("per-key"),
            Freshness::Shared => f.write_str("shared"),
        }
    }
}
