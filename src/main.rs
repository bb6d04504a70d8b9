//! TTL Overlay demo
//!
//! Walks a cache through plain, expiring and default-lifetime writes against
//! a bounded in-memory store configured from the environment.

use std::thread::sleep;
use std::time::Duration;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ttl_overlay::{BoundedStore, Config, TtlCache};

fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ttl_overlay=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("loading configuration")?;
    info!(
        "Configuration loaded: default_ttl={:?}, max_capacity={:?}",
        config.default_ttl, config.max_capacity
    );

    let mut cache: TtlCache<BoundedStore> = TtlCache::from_config(&config);

    cache.put("a", "hello")?;
    info!("get(a) = {:?}", cache.get("a")?);

    cache.put_with_ttl("b", "world", 1)?;
    info!("get(b) = {:?}", cache.get("b")?);

    sleep(Duration::from_millis(1100));
    info!("get(b) after 1.1s = {:?}", cache.get("b")?);
    info!("store still holds b: {}", cache.store().contains_key("b"));

    println!("{}", serde_json::to_string_pretty(&cache.stats())?);
    Ok(())
}
