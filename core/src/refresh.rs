// core/src/refresh.rs

//! Best-effort cache refresh after a store-of-record write.
//!
//! The write runs as a detached task. Its outcome goes to the log and to
//! `CacheDiagnostics`; nothing joins it against the caller's result.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, warn, Instrument};

use crate::error::CartError;
use crate::model::Cart;
use crate::store::{cart_cache_key, CacheStore};

/// Local record of how detached cache writes went.
#[derive(Debug, Default)]
pub struct CacheDiagnostics {
  succeeded: AtomicU64,
  failed: AtomicU64,
  last_failure: Mutex<Option<String>>,
}

impl CacheDiagnostics {
  pub fn succeeded(&self) -> u64 {
    self.succeeded.load(Ordering::SeqCst)
  }

  pub fn failed(&self) -> u64 {
    self.failed.load(Ordering::SeqCst)
  }

  /// Total writes that have finished, either way.
  pub fn completed(&self) -> u64 {
    self.succeeded() + self.failed()
  }

  pub fn last_failure(&self) -> Option<String> {
    self.last_failure.lock().clone()
  }

  fn record_success(&self) {
    self.succeeded.fetch_add(1, Ordering::SeqCst);
  }

  fn record_failure(&self, err: &CartError) {
    *self.last_failure.lock() = Some(err.to_string());
    self.failed.fetch_add(1, Ordering::SeqCst);
  }
}

#[derive(Clone)]
pub struct CacheRefresher {
  cache: Arc<dyn CacheStore>,
  diagnostics: Arc<CacheDiagnostics>,
}

impl CacheRefresher {
  pub fn new(cache: Arc<dyn CacheStore>) -> Self {
    CacheRefresher {
      cache,
      diagnostics: Arc::new(CacheDiagnostics::default()),
    }
  }

  pub fn diagnostics(&self) -> Arc<CacheDiagnostics> {
    Arc::clone(&self.diagnostics)
  }

  /// Overwrites `cart:<userId>` with `cart` on a detached task.
  ///
  /// Must be called from within a Tokio runtime. The returned handle may be
  /// dropped; the write still runs to completion.
  pub fn refresh(&self, cart: &Cart) -> JoinHandle<()> {
    let key = cart_cache_key(cart.user_id);
    let snapshot = cart.clone();
    let cache = Arc::clone(&self.cache);
    let diagnostics = Arc::clone(&self.diagnostics);
    let span = tracing::debug_span!("cache_refresh", cache_key = %key, cart_id = ?cart.id);

    tokio::spawn(
      async move {
        match cache.set(&key, &snapshot).await {
          Ok(()) => {
            debug!("Cart snapshot written to cache.");
            diagnostics.record_success();
          }
          Err(e) => {
            // Swallowed: the store of record already holds the write.
            let failure = CartError::CacheWrite(e.to_string());
            warn!(error = %failure, "Cache refresh failed, entry may be stale.");
            diagnostics.record_failure(&failure);
          }
        }
      }
      .instrument(span),
    )
  }
}
