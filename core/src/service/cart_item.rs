// core/src/service/cart_item.rs

//! Cart item mutation and the strict enrichment join against the catalog.

use std::sync::Arc;

use futures_util::future::try_join_all;
use tracing::{info, instrument, warn};

use crate::error::{CartError, CartResult};
use crate::model::{CartItem, CartItemWithProduct, NewCartItem};
use crate::store::{CartItemRepository, ProductCatalog};

#[derive(Clone)]
pub struct CartItemService {
  items: Arc<dyn CartItemRepository>,
  catalog: Arc<dyn ProductCatalog>,
}

impl CartItemService {
  pub fn new(items: Arc<dyn CartItemRepository>, catalog: Arc<dyn ProductCatalog>) -> Self {
    CartItemService { items, catalog }
  }

  /// Items of `cart_id`, each joined with its catalog record.
  ///
  /// Lookups run concurrently; results keep the items' order. A single failed
  /// or missing lookup fails the whole listing with `UpstreamLookup`.
  #[instrument(name = "cart_item::list", skip(self))]
  pub async fn list(&self, cart_id: i64) -> CartResult<Vec<CartItemWithProduct>> {
    let items = self.items.find_all_by_cart_id(cart_id).await?;
    let catalog = self.catalog.as_ref();

    let enriched = try_join_all(items.into_iter().map(|item| async move {
      let product_id = item.product_id;
      match catalog.find_by_id(product_id).await {
        Ok(Some(product)) => Ok(CartItemWithProduct::join(item, product)),
        Ok(None) => Err(CartError::UpstreamLookup {
          product_id,
          reason: "product not found".to_string(),
        }),
        Err(e) => Err(CartError::UpstreamLookup {
          product_id,
          reason: e.to_string(),
        }),
      }
    }))
    .await
    .map_err(|e| {
      warn!(error = %e, "Cart item enrichment aborted.");
      e
    })?;

    info!(count = enriched.len(), "Cart items enriched.");
    Ok(enriched)
  }

  /// Stores a new item under `cart_id`. Neither the cart nor the product is
  /// checked for existence here; products are only resolved on listing.
  #[instrument(name = "cart_item::add", skip(self, body), fields(product_id = body.product_id, quantity = body.quantity))]
  pub async fn add(&self, cart_id: i64, body: NewCartItem) -> CartResult<CartItem> {
    let item = CartItem {
      id: None,
      cart_id,
      product_id: body.product_id,
      quantity: body.quantity,
    };
    let saved = self.items.save(item).await?;
    info!(item_id = ?saved.id, "Cart item added.");
    Ok(saved)
  }

  /// Idempotent: removing an unknown item succeeds.
  #[instrument(name = "cart_item::remove", skip(self))]
  pub async fn remove(&self, item_id: i64) -> CartResult<()> {
    self.items.delete_by_id(item_id).await
  }
}
