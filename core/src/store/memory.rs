// core/src/store/memory.rs

//! In-process implementations of the collaborator contracts.
//!
//! Lock guards here are `parking_lot` guards and are never held across an
//! `.await`; every method takes the lock, copies what it needs and returns.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use super::{CacheStore, CartItemRepository, CartRepository, ProductCatalog};
use crate::error::CartResult;
use crate::model::{Cart, CartItem, Product};

/// Hands out ids the way a BIGSERIAL column would, skipping past ids that
/// were written explicitly.
#[derive(Debug)]
struct IdSequence(AtomicI64);

impl IdSequence {
  fn new() -> Self {
    IdSequence(AtomicI64::new(1))
  }

  fn next(&self) -> i64 {
    self.0.fetch_add(1, Ordering::SeqCst)
  }

  fn observe(&self, id: i64) {
    self.0.fetch_max(id + 1, Ordering::SeqCst);
  }
}

#[derive(Debug)]
pub struct InMemoryCartRepository {
  rows: RwLock<BTreeMap<i64, Cart>>,
  ids: IdSequence,
}

impl InMemoryCartRepository {
  pub fn new() -> Self {
    InMemoryCartRepository {
      rows: RwLock::new(BTreeMap::new()),
      ids: IdSequence::new(),
    }
  }

  pub fn len(&self) -> usize {
    self.rows.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.rows.read().is_empty()
  }
}

impl Default for InMemoryCartRepository {
  fn default() -> Self {
    Self::new()
  }
}

#[async_trait]
impl CartRepository for InMemoryCartRepository {
  async fn find_all(&self) -> CartResult<Vec<Cart>> {
    Ok(self.rows.read().values().cloned().collect())
  }

  async fn find_by_id(&self, id: i64) -> CartResult<Option<Cart>> {
    Ok(self.rows.read().get(&id).cloned())
  }

  async fn find_all_by_user_id(&self, user_id: i64) -> CartResult<Vec<Cart>> {
    Ok(
      self
        .rows
        .read()
        .values()
        .filter(|cart| cart.user_id == user_id)
        .cloned()
        .collect(),
    )
  }

  async fn save(&self, mut cart: Cart) -> CartResult<Cart> {
    let id = match cart.id {
      Some(id) => {
        self.ids.observe(id);
        id
      }
      None => self.ids.next(),
    };
    cart.id = Some(id);
    self.rows.write().insert(id, cart.clone());
    Ok(cart)
  }

  async fn delete_by_id(&self, id: i64) -> CartResult<()> {
    self.rows.write().remove(&id);
    Ok(())
  }
}

#[derive(Debug)]
pub struct InMemoryCartItemRepository {
  rows: RwLock<BTreeMap<i64, CartItem>>,
  ids: IdSequence,
}

impl InMemoryCartItemRepository {
  pub fn new() -> Self {
    InMemoryCartItemRepository {
      rows: RwLock::new(BTreeMap::new()),
      ids: IdSequence::new(),
    }
  }
}

impl Default for InMemoryCartItemRepository {
  fn default() -> Self {
    Self::new()
  }
}

#[async_trait]
impl CartItemRepository for InMemoryCartItemRepository {
  async fn find_all_by_cart_id(&self, cart_id: i64) -> CartResult<Vec<CartItem>> {
    Ok(
      self
        .rows
        .read()
        .values()
        .filter(|item| item.cart_id == cart_id)
        .cloned()
        .collect(),
    )
  }

  async fn find_by_id(&self, id: i64) -> CartResult<Option<CartItem>> {
    Ok(self.rows.read().get(&id).cloned())
  }

  async fn save(&self, mut item: CartItem) -> CartResult<CartItem> {
    let id = match item.id {
      Some(id) => {
        self.ids.observe(id);
        id
      }
      None => self.ids.next(),
    };
    item.id = Some(id);
    self.rows.write().insert(id, item.clone());
    Ok(item)
  }

  async fn delete_by_id(&self, id: i64) -> CartResult<()> {
    self.rows.write().remove(&id);
    Ok(())
  }
}

#[derive(Debug, Default)]
pub struct InMemoryProductCatalog {
  products: RwLock<HashMap<i64, Product>>,
}

impl InMemoryProductCatalog {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
    let catalog = Self::new();
    for product in products {
      catalog.insert(product);
    }
    catalog
  }

  pub fn insert(&self, product: Product) {
    self.products.write().insert(product.id, product);
  }

  pub fn remove(&self, product_id: i64) -> Option<Product> {
    self.products.write().remove(&product_id)
  }
}

#[async_trait]
impl ProductCatalog for InMemoryProductCatalog {
  async fn find_by_id(&self, product_id: i64) -> CartResult<Option<Product>> {
    Ok(self.products.read().get(&product_id).cloned())
  }
}

/// Process-local cache store, used when no shared cache is configured.
#[derive(Debug, Default)]
pub struct InMemoryCacheStore {
  entries: RwLock<HashMap<String, Cart>>,
}

impl InMemoryCacheStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize {
    self.entries.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.read().is_empty()
  }
}

#[async_trait]
impl CacheStore for InMemoryCacheStore {
  async fn get(&self, key: &str) -> CartResult<Option<Cart>> {
    Ok(self.entries.read().get(key).cloned())
  }

  async fn set(&self, key: &str, cart: &Cart) -> CartResult<()> {
    self.entries.write().insert(key.to_string(), cart.clone());
    Ok(())
  }
}
