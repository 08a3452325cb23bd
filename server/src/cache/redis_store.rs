// server/src/cache/redis_store.rs

use async_trait::async_trait;
use deadpool_redis::{Config, Pool, Runtime};
use estore::{CacheStore, Cart, CartError, CartResult};
use redis::AsyncCommands;
use tracing::{debug, instrument};

use crate::errors::AppError;

/// Cart snapshots stored as JSON strings under `cart:<userId>`, no TTL.
#[derive(Clone)]
pub struct RedisCacheStore {
  pool: Pool,
}

impl RedisCacheStore {
  pub fn new(pool: Pool) -> Self {
    RedisCacheStore { pool }
  }

  pub fn connect(url: &str) -> Result<Self, AppError> {
    let pool = Config::from_url(url)
      .create_pool(Some(Runtime::Tokio1))
      .map_err(|e| AppError::Redis(e.to_string()))?;
    Ok(Self::new(pool))
  }

  /// Checks that a connection can be checked out of the pool.
  pub async fn ping(&self) -> Result<(), AppError> {
    self
      .pool
      .get()
      .await
      .map(|_| ())
      .map_err(|e| AppError::Redis(e.to_string()))
  }
}

#[async_trait]
impl CacheStore for RedisCacheStore {
  #[instrument(name = "redis::get", skip(self))]
  async fn get(&self, key: &str) -> CartResult<Option<Cart>> {
    let mut conn = self.pool.get().await.map_err(CartError::cache)?;
    let raw: Option<String> = conn.get(key).await.map_err(CartError::cache)?;
    match raw {
      Some(json) => {
        let cart = serde_json::from_str(&json).map_err(CartError::cache)?;
        Ok(Some(cart))
      }
      None => {
        debug!("cache miss");
        Ok(None)
      }
    }
  }

  #[instrument(name = "redis::set", skip(self, cart), fields(cart_id = ?cart.id))]
  async fn set(&self, key: &str, cart: &Cart) -> CartResult<()> {
    let json = serde_json::to_string(cart).map_err(CartError::cache)?;
    let mut conn = self.pool.get().await.map_err(CartError::cache)?;
    conn.set::<_, _, ()>(key, json).await.map_err(CartError::cache)?;
    Ok(())
  }
}
