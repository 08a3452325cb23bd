// core/src/store/mod.rs

//! Collaborator contracts consumed by the cart services.
//!
//! The store of record and the catalog are authoritative; the cache store is a
//! best-effort secondary index holding the latest cart snapshot per user.

use async_trait::async_trait;

use crate::error::CartResult;
use crate::model::{Cart, CartItem, Product};

pub mod memory;

pub use memory::{InMemoryCacheStore, InMemoryCartItemRepository, InMemoryCartRepository, InMemoryProductCatalog};

/// Cache key holding the latest cart snapshot for `user_id`.
pub fn cart_cache_key(user_id: i64) -> String {
  format!("cart:{}", user_id)
}

/// Store-of-record access to carts.
#[async_trait]
pub trait CartRepository: Send + Sync {
  async fn find_all(&self) -> CartResult<Vec<Cart>>;

  async fn find_by_id(&self, id: i64) -> CartResult<Option<Cart>>;

  async fn find_all_by_user_id(&self, user_id: i64) -> CartResult<Vec<Cart>>;

  /// Inserts when `cart.id` is `None` (assigning an id), otherwise writes the
  /// row keyed by id. Returns the stored cart.
  async fn save(&self, cart: Cart) -> CartResult<Cart>;

  /// No-op success when `id` does not exist.
  async fn delete_by_id(&self, id: i64) -> CartResult<()>;
}

/// Store-of-record access to cart items.
#[async_trait]
pub trait CartItemRepository: Send + Sync {
  /// Items of a cart in insertion (id) order.
  async fn find_all_by_cart_id(&self, cart_id: i64) -> CartResult<Vec<CartItem>>;

  async fn find_by_id(&self, id: i64) -> CartResult<Option<CartItem>>;

  async fn save(&self, item: CartItem) -> CartResult<CartItem>;

  /// No-op success when `id` does not exist.
  async fn delete_by_id(&self, id: i64) -> CartResult<()>;
}

/// Read-only product lookup. No batch lookup is assumed.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
  async fn find_by_id(&self, product_id: i64) -> CartResult<Option<Product>>;
}

/// Key-value cache of cart snapshots. Values are full overwrites with no TTL.
#[async_trait]
pub trait CacheStore: Send + Sync {
  async fn get(&self, key: &str) -> CartResult<Option<Cart>>;

  async fn set(&self, key: &str, cart: &Cart) -> CartResult<()>;
}
