// server/src/cache/mod.rs

//! Cache store selection: Redis when configured and reachable, otherwise an
//! in-process map.

pub mod redis_store;

pub use redis_store::RedisCacheStore;

use estore::{store::InMemoryCacheStore, CacheStore};
use std::sync::Arc;

use crate::config::AppConfig;

/// The cache is advisory, so an unreachable Redis degrades to a local cache
/// instead of failing start-up.
pub async fn create_cache_store(config: &AppConfig) -> Arc<dyn CacheStore> {
  let Some(url) = config.redis_url.as_deref() else {
    tracing::info!("REDIS_URL not set, caching carts in-process.");
    return Arc::new(InMemoryCacheStore::new());
  };

  let store = match RedisCacheStore::connect(url) {
    Ok(store) => store,
    Err(e) => {
      tracing::warn!(error = %e, "Failed to create Redis pool. Falling back to in-process cache.");
      return Arc::new(InMemoryCacheStore::new());
    }
  };

  match store.ping().await {
    Ok(()) => {
      tracing::info!("Connected to Redis cart cache.");
      Arc::new(store)
    }
    Err(e) => {
      tracing::warn!(error = %e, "Failed to connect to Redis. Falling back to in-process cache.");
      Arc::new(InMemoryCacheStore::new())
    }
  }
}
