//! Test doubles shared by the integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use gospel_daily::cache::Freshness;
use gospel_daily::source::ContentSource;
use gospel_daily::translate::Translator;
use gospel_daily::{FetchError, GospelContent, GospelResolver, GospelService};

pub const TTL: Duration = Duration::from_secs(3 * 60 * 60);

pub fn sample_content() -> GospelContent {
    GospelContent::new(
        "Gospel of the Day",
        "2024-05-01",
        "John 14:27",
        "Jesus said...",
    )
}

/// Content source returning a fixed reading, or failing on demand.
///
/// With a delay set, each fetch sleeps before answering so callers overlap.
#[derive(Default)]
pub struct StubSource {
    pub fetches: AtomicUsize,
    pub fail: AtomicBool,
    pub delay_ms: AtomicU64,
}

impl StubSource {
    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn set_delay(&self, delay: Duration) {
        self.delay_ms.store(delay.as_millis() as u64, Ordering::SeqCst);
    }
}

#[async_trait]
impl ContentSource for StubSource {
    async fn fetch_today(&self) -> Result<GospelContent, FetchError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let delay_ms = self.delay_ms.load(Ordering::SeqCst);
        if delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }
        if self.fail.load(Ordering::SeqCst) {
            Err(FetchError::MissingField("title"))
        } else {
            Ok(sample_content())
        }
    }
}

/// Translator that upper-cases its input.
#[derive(Default)]
pub struct UppercaseTranslator {
    pub calls: AtomicUsize,
}

impl UppercaseTranslator {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Translator for UppercaseTranslator {
    async fn translate(&self, text: &str, _target_language: &str) -> String {
        self.calls.fetch_add(1, Ordering::SeqCst);
        text.to_uppercase()
    }
}

pub struct Harness {
    pub source: Arc<StubSource>,
    pub translator: Arc<UppercaseTranslator>,
    pub service: GospelService,
}

pub fn harness(ttl: Duration, freshness: Freshness) -> Harness {
    let source = Arc::new(StubSource::default());
    let translator = Arc::new(UppercaseTranslator::default());
    let resolver = GospelResolver::new(source.clone(), translator.clone(), "en");
    Harness {
        source,
        translator,
        service: GospelService::new(resolver, ttl, freshness),
    }
}
