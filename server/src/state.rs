// server/src/state.rs
use crate::config::AppConfig;
use crate::errors::Result;
use estore::{
  store::{InMemoryCacheStore, InMemoryCartItemRepository, InMemoryCartRepository, InMemoryProductCatalog},
  CacheStore, CartItemRepository, CartItemService, CartRepository, CartService, ChangeStreamPublisher,
  ProductCatalog, StatusPolicy,
};
use std::sync::Arc;
use std::time::Duration;

/// Collaborators the services are built over.
#[derive(Clone)]
pub struct Backends {
  pub carts: Arc<dyn CartRepository>,
  pub items: Arc<dyn CartItemRepository>,
  pub catalog: Arc<dyn ProductCatalog>,
  pub cache: Arc<dyn CacheStore>,
}

impl Backends {
  /// Everything in-process, with the given catalog.
  pub fn in_memory(catalog: Arc<InMemoryProductCatalog>) -> Self {
    Backends {
      carts: Arc::new(InMemoryCartRepository::new()),
      items: Arc::new(InMemoryCartItemRepository::new()),
      catalog,
      cache: Arc::new(InMemoryCacheStore::new()),
    }
  }
}

#[derive(Clone)]
pub struct AppState {
  pub cart_service: CartService,
  pub cart_item_service: CartItemService,
  pub change_streams: ChangeStreamPublisher,
}

impl AppState {
  pub fn from_config(backends: Backends, config: &AppConfig) -> Result<Self> {
    Self::new(backends, config.status_policy.clone(), config.stream_poll_period)
  }

  pub fn new(backends: Backends, status_policy: StatusPolicy, poll_period: Duration) -> Result<Self> {
    let change_streams = ChangeStreamPublisher::with_period(Arc::clone(&backends.cache), poll_period)?;
    Ok(AppState {
      cart_service: CartService::new(backends.carts, backends.cache).with_status_policy(status_policy),
      cart_item_service: CartItemService::new(backends.items, backends.catalog),
      change_streams,
    })
  }
}
