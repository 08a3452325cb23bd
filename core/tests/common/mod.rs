// tests/common/mod.rs
#![allow(dead_code)] // Each test binary uses a different subset

use async_trait::async_trait;
use estore::{
  store::{InMemoryCacheStore, InMemoryCartItemRepository, InMemoryCartRepository, InMemoryProductCatalog},
  CacheDiagnostics, CacheStore, Cart, CartError, CartItemService, CartResult, CartService, Product, ProductCatalog,
};
use parking_lot::Mutex;
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};
use std::time::Duration;
use tracing::Level;

// --- Fixture wiring the services over in-memory collaborators ---
pub struct Fixture {
  pub carts: Arc<InMemoryCartRepository>,
  pub items: Arc<InMemoryCartItemRepository>,
  pub catalog: Arc<InMemoryProductCatalog>,
  pub cache: Arc<InMemoryCacheStore>,
  pub cart_service: CartService,
  pub cart_item_service: CartItemService,
}

impl Fixture {
  pub fn new() -> Self {
    let carts = Arc::new(InMemoryCartRepository::new());
    let items = Arc::new(InMemoryCartItemRepository::new());
    let catalog = Arc::new(InMemoryProductCatalog::new());
    let cache = Arc::new(InMemoryCacheStore::new());
    let cart_service = CartService::new(carts.clone(), cache.clone());
    let cart_item_service = CartItemService::new(items.clone(), catalog.clone());
    Fixture {
      carts,
      items,
      catalog,
      cache,
      cart_service,
      cart_item_service,
    }
  }
}

pub fn product(id: i64, name: &str) -> Product {
  Product {
    id,
    name: name.to_string(),
    description: None,
    price_cents: 1_000 + id as i32,
    stock_quantity: 10,
  }
}

pub fn cart(id: i64, user_id: i64, status: &str) -> Cart {
  Cart {
    id: Some(id),
    user_id,
    status: status.to_string(),
  }
}

/// Waits until `n` detached cache writes have finished.
pub async fn wait_for_cache_writes(diagnostics: &CacheDiagnostics, n: u64) {
  tokio::time::timeout(Duration::from_secs(5), async {
    while diagnostics.completed() < n {
      tokio::time::sleep(Duration::from_millis(5)).await;
    }
  })
  .await
  .expect("detached cache writes did not finish in time");
}

// --- Cache stores with scripted behaviour ---

/// Every operation fails, as an unreachable cache would.
#[derive(Debug, Default)]
pub struct FailingCacheStore {
  pub attempts: AtomicUsize,
}

#[async_trait]
impl CacheStore for FailingCacheStore {
  async fn get(&self, _key: &str) -> CartResult<Option<Cart>> {
    self.attempts.fetch_add(1, Ordering::SeqCst);
    Err(CartError::cache(anyhow::anyhow!("cache unreachable")))
  }

  async fn set(&self, _key: &str, _cart: &Cart) -> CartResult<()> {
    self.attempts.fetch_add(1, Ordering::SeqCst);
    Err(CartError::cache(anyhow::anyhow!("cache unreachable")))
  }
}

/// Returns one scripted state per read; once the script runs out the last
/// state repeats. Writes are ignored.
#[derive(Debug)]
pub struct ScriptedCacheStore {
  states: Vec<Result<Option<Cart>, String>>,
  reads: AtomicUsize,
}

impl ScriptedCacheStore {
  pub fn new(states: Vec<Option<Cart>>) -> Self {
    Self::with_results(states.into_iter().map(Ok).collect())
  }

  /// `Err` entries make that read fail.
  pub fn with_results(states: Vec<Result<Option<Cart>, String>>) -> Self {
    assert!(!states.is_empty(), "script needs at least one state");
    ScriptedCacheStore {
      states,
      reads: AtomicUsize::new(0),
    }
  }

  pub fn reads(&self) -> usize {
    self.reads.load(Ordering::SeqCst)
  }
}

#[async_trait]
impl CacheStore for ScriptedCacheStore {
  async fn get(&self, _key: &str) -> CartResult<Option<Cart>> {
    let idx = self.reads.fetch_add(1, Ordering::SeqCst);
    match &self.states[idx.min(self.states.len() - 1)] {
      Ok(state) => Ok(state.clone()),
      Err(msg) => Err(CartError::cache(anyhow::anyhow!(msg.clone()))),
    }
  }

  async fn set(&self, _key: &str, _cart: &Cart) -> CartResult<()> {
    Ok(())
  }
}

/// Catalog whose lookups fail for chosen product ids.
#[derive(Debug, Default)]
pub struct FlakyCatalog {
  pub products: Vec<Product>,
  pub failing_ids: Vec<i64>,
  pub lookups: Mutex<Vec<i64>>,
}

#[async_trait]
impl ProductCatalog for FlakyCatalog {
  async fn find_by_id(&self, product_id: i64) -> CartResult<Option<Product>> {
    self.lookups.lock().push(product_id);
    if self.failing_ids.contains(&product_id) {
      return Err(anyhow::anyhow!("catalog timed out for {}", product_id).into());
    }
    Ok(self.products.iter().find(|p| p.id == product_id).cloned())
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
