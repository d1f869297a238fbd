//! Service Tests
//!
//! Cache and resolution behaviour seen through `GospelService::resolve`.

mod common;

use std::time::Duration;

use common::{harness, sample_content, TTL};
use gospel_daily::cache::Freshness;
use gospel_daily::GospelError;

#[tokio::test]
async fn test_default_language_end_to_end() {
    let h = harness(TTL, Freshness::PerKey);

    let record = h.service.resolve("en").await.unwrap();

    assert_eq!(record.original, sample_content());
    assert_eq!(record.translated, record.original);
    assert_eq!(h.translator.calls(), 0);
}

#[tokio::test]
async fn test_translated_language_end_to_end() {
    let h = harness(TTL, Freshness::PerKey);

    let record = h.service.resolve("es").await.unwrap();

    assert_eq!(record.language, "es");
    assert_eq!(record.translated.text, "JESUS SAID...");
    assert_eq!(record.translated.title, "GOSPEL OF THE DAY");
    assert_eq!(record.translated.date, "2024-05-01");
    assert_eq!(record.original.date, record.translated.date);
}

#[tokio::test]
async fn test_second_request_within_ttl_is_cached() {
    let h = harness(TTL, Freshness::PerKey);

    let first = h.service.resolve("es").await.unwrap();
    let second = h.service.resolve("es").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(h.source.fetches(), 1);
    assert_eq!(h.translator.calls(), 3);

    let stats = h.service.stats().await;
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.total_entries, 1);
}

#[tokio::test]
async fn test_languages_are_cached_separately() {
    let h = harness(TTL, Freshness::PerKey);

    h.service.resolve("en").await.unwrap();
    h.service.resolve("es").await.unwrap();
    h.service.resolve("fr").await.unwrap();
    h.service.resolve("es").await.unwrap();

    assert_eq!(h.source.fetches(), 3);
    assert_eq!(h.service.stats().await.total_entries, 3);
}

#[tokio::test]
async fn test_fetch_failure_is_not_cached() {
    let h = harness(TTL, Freshness::PerKey);
    h.source.set_failing(true);

    let err = h.service.resolve("es").await.unwrap_err();
    assert!(matches!(err, GospelError::Resolution { .. }));
    assert_eq!(h.service.stats().await.total_entries, 0);
    assert_eq!(h.translator.calls(), 0);

    // Recovers on the next request
    h.source.set_failing(false);
    h.service.resolve("es").await.unwrap();
    assert_eq!(h.source.fetches(), 2);
    assert_eq!(h.service.stats().await.failures, 1);
}

#[tokio::test]
async fn test_invalid_language_is_rejected_without_fetch() {
    let h = harness(TTL, Freshness::PerKey);

    let err = h.service.resolve("not a language").await.unwrap_err();

    assert!(matches!(err, GospelError::InvalidLanguage(_)));
    assert_eq!(h.source.fetches(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_stale_entry_triggers_exactly_one_refresh() {
    let h = harness(TTL, Freshness::PerKey);
    h.service.resolve("es").await.unwrap();

    tokio::time::advance(TTL).await;

    h.service.resolve("es").await.unwrap();
    h.service.resolve("es").await.unwrap();
    assert_eq!(h.source.fetches(), 2);
    assert_eq!(h.translator.calls(), 6);
}

#[tokio::test(start_paused = true)]
async fn test_per_key_freshness_ignores_other_writes() {
    let h = harness(TTL, Freshness::PerKey);
    h.service.resolve("en").await.unwrap();

    tokio::time::advance(TTL - Duration::from_secs(60)).await;
    h.service.resolve("es").await.unwrap();
    tokio::time::advance(Duration::from_secs(120)).await;

    h.service.resolve("en").await.unwrap();
    assert_eq!(h.source.fetches(), 3, "en expired on its own clock");
}

#[tokio::test(start_paused = true)]
async fn test_shared_freshness_extends_other_languages() {
    let h = harness(TTL, Freshness::Shared);
    h.service.resolve("en").await.unwrap();

    tokio::time::advance(TTL - Duration::from_secs(60)).await;
    h.service.resolve("es").await.unwrap();
    tokio::time::advance(Duration::from_secs(120)).await;

    h.service.resolve("en").await.unwrap();
    assert_eq!(h.source.fetches(), 2, "write to es kept en fresh");
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_requests_share_one_resolution() {
    let h = harness(TTL, Freshness::PerKey);
    h.source.set_delay(Duration::from_secs(2));

    let (a, b) = tokio::join!(h.service.resolve("es"), h.service.resolve("es"));

    assert_eq!(a.unwrap(), b.unwrap());
    assert_eq!(h.source.fetches(), 1);
    assert_eq!(h.translator.calls(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_requests_for_different_languages_overlap() {
    let h = harness(TTL, Freshness::PerKey);
    h.source.set_delay(Duration::from_secs(2));
    let started = tokio::time::Instant::now();

    let (a, b) = tokio::join!(h.service.resolve("es"), h.service.resolve("fr"));

    assert!(a.is_ok() && b.is_ok());
    assert_eq!(h.source.fetches(), 2);
    assert_eq!(started.elapsed(), Duration::from_secs(2));
}
