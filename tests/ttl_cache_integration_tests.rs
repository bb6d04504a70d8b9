//! Integration Tests for the TTL cache
//!
//! Drives the public API end to end over both in-memory stores.

use std::thread::sleep;
use std::time::Duration;

use chrono::Utc;
use ttl_overlay::cache::codec::{self, Decoded};
use ttl_overlay::{BoundedStore, Config, MemoryStore, Store, StoredValue, TtlCache};

// == Scenario ==

#[test]
fn test_plain_and_expiring_scenario() {
    let mut cache: TtlCache<MemoryStore> = TtlCache::from_config(&Config::new());

    cache.put("a", "hello").unwrap();
    assert_eq!(cache.get("a").unwrap(), Some("hello".to_string()));

    cache.put_with_ttl("b", "world", 1).unwrap();
    assert_eq!(cache.get("b").unwrap(), Some("world".to_string()));

    sleep(Duration::from_millis(1100));

    assert_eq!(cache.get("b").unwrap(), None);
    assert!(!cache.store().contains_key("b"));

    // Plain entries never expire
    assert_eq!(cache.get("a").unwrap(), Some("hello".to_string()));

    let stats = cache.stats();
    assert_eq!(stats.hits, 3);
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.expirations, 1);
}

#[test]
fn test_default_ttl_expires_implicit_writes() {
    let config = Config::new().with_default_ttl(1);
    let mut cache: TtlCache<MemoryStore> = TtlCache::from_config(&config);

    cache.put("k", "v").unwrap();
    assert_eq!(cache.get("k").unwrap(), Some("v".to_string()));

    sleep(Duration::from_millis(1100));

    assert_eq!(cache.get("k").unwrap(), None);
    assert!(cache.store().is_empty());
}

#[test]
fn test_stale_entries_linger_until_read() {
    let mut cache: TtlCache<MemoryStore> = TtlCache::new(None, None);

    cache.put_with_ttl("stale", "x", 0).unwrap();
    sleep(Duration::from_millis(5));

    // Nothing sweeps: the record is still physically there
    assert!(cache.store().contains_key("stale"));
    assert_eq!(cache.get("stale").unwrap(), None);
    assert!(!cache.store().contains_key("stale"));
}

#[test]
fn test_overwrite_expiring_with_plain() {
    let mut cache: TtlCache<MemoryStore> = TtlCache::new(None, None);

    cache.put_with_ttl("k", "v1", 1).unwrap();
    cache.put("k", "v2").unwrap();

    sleep(Duration::from_millis(1100));

    assert_eq!(cache.get("k").unwrap(), Some("v2".to_string()));
}

#[test]
fn test_bounded_store_through_cache() {
    let mut cache: TtlCache<BoundedStore> = TtlCache::new(None, Some(2));

    cache.put("k1", "v1").unwrap();
    cache.put("k2", "v2").unwrap();
    cache.get("k1").unwrap();
    cache.put("k3", "v3").unwrap();

    assert_eq!(cache.get("k2").unwrap(), None);
    assert_eq!(cache.get("k1").unwrap(), Some("v1".to_string()));
    assert_eq!(cache.get("k3").unwrap(), Some("v3".to_string()));
    assert_eq!(cache.store().evictions(), 1);
}

// == Store contract ==

#[test]
fn test_codec_over_raw_store() {
    let mut store = MemoryStore::with_capacity(Some(8));

    store
        .raw_put("k".to_string(), codec::encode("v".to_string(), Some(60)))
        .unwrap();
    let raw = store.raw_get("k").unwrap();

    assert!(matches!(raw, Some(StoredValue::Expiring(_))));
    assert_eq!(codec::decode(raw), Decoded::Live("v".to_string()));
    assert_eq!(codec::decode(store.raw_get("missing").unwrap()), Decoded::Absent);
}

#[test]
fn test_stored_value_survives_serialization() {
    // Out-of-process stores keep the representation as JSON
    let stored = codec::encode_at("v".to_string(), Some(0), Utc::now());
    let json = serde_json::to_vec(&stored).unwrap();
    let back: StoredValue = serde_json::from_slice(&json).unwrap();

    assert_eq!(codec::decode(Some(back)), Decoded::Expired);
}
