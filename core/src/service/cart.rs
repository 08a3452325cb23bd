// core/src/service/cart.rs

//! Cart mutation with write-through to the store of record and a best-effort
//! refresh of the per-user cache entry.

use std::sync::Arc;

use tracing::{info, instrument};

use crate::error::{CartError, CartResult};
use crate::model::{Cart, CartPatch, NewCart};
use crate::policy::StatusPolicy;
use crate::refresh::{CacheDiagnostics, CacheRefresher};
use crate::store::{CacheStore, CartRepository};

#[derive(Clone)]
pub struct CartService {
  carts: Arc<dyn CartRepository>,
  refresher: CacheRefresher,
  status_policy: StatusPolicy,
}

impl CartService {
  pub fn new(carts: Arc<dyn CartRepository>, cache: Arc<dyn CacheStore>) -> Self {
    CartService {
      carts,
      refresher: CacheRefresher::new(cache),
      status_policy: StatusPolicy::default(),
    }
  }

  pub fn with_status_policy(mut self, status_policy: StatusPolicy) -> Self {
    self.status_policy = status_policy;
    self
  }

  pub fn cache_diagnostics(&self) -> Arc<CacheDiagnostics> {
    self.refresher.diagnostics()
  }

  /// All carts in the store of record. The cache is not consulted.
  #[instrument(name = "cart::list_all", skip(self))]
  pub async fn list_all(&self) -> CartResult<Vec<Cart>> {
    self.carts.find_all().await
  }

  #[instrument(name = "cart::get_by_id", skip(self))]
  pub async fn get_by_id(&self, id: i64) -> CartResult<Cart> {
    self
      .carts
      .find_by_id(id)
      .await?
      .ok_or_else(|| CartError::cart_not_found(id))
  }

  /// All carts of a user. The cache only holds the latest snapshot, so list
  /// queries always go to the store of record.
  #[instrument(name = "cart::list_by_user", skip(self))]
  pub async fn list_by_user(&self, user_id: i64) -> CartResult<Vec<Cart>> {
    self.carts.find_all_by_user_id(user_id).await
  }

  #[instrument(name = "cart::create", skip(self, body), fields(status = %body.status))]
  pub async fn create(&self, user_id: i64, body: NewCart) -> CartResult<Cart> {
    self.status_policy.check(&body.status)?;

    let saved = self.carts.save(Cart::new(user_id, body.status)).await?;
    info!(cart_id = ?saved.id, "Cart created.");

    self.refresher.refresh(&saved);
    Ok(saved)
  }

  /// Applies only `patch.status`; id and owning user never change.
  #[instrument(name = "cart::update", skip(self, patch), fields(status = %patch.status))]
  pub async fn update(&self, id: i64, patch: CartPatch) -> CartResult<Cart> {
    self.status_policy.check(&patch.status)?;

    let mut existing = self.get_by_id(id).await?;
    existing.status = patch.status;

    let updated = self.carts.save(existing).await?;
    info!(user_id = updated.user_id, "Cart status updated.");

    self.refresher.refresh(&updated);
    Ok(updated)
  }

  /// Deletes from the store of record only. The user's cache entry keeps the
  /// last snapshot until their next successful write.
  #[instrument(name = "cart::delete", skip(self))]
  pub async fn delete(&self, id: i64) -> CartResult<()> {
    let existing = self.get_by_id(id).await?;
    self.carts.delete_by_id(id).await?;
    info!(user_id = existing.user_id, "Cart deleted, cached snapshot left in place.");
    Ok(())
  }
}
