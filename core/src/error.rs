// core/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CartError {
  #[error("{entity} not found: {id}")]
  NotFound { entity: &'static str, id: i64 },

  /// The catalog failed, or had no record, while enriching a cart listing.
  #[error("Product lookup failed for product {product_id}: {reason}")]
  UpstreamLookup { product_id: i64, reason: String },

  #[error("Validation failed: {0}")]
  Validation(String),

  /// Produced only by the cache refresher. Logged and counted, never returned
  /// from a service operation.
  #[error("Cache write failed: {0}")]
  CacheWrite(String),

  #[error("Store of record error. Source: {source}")]
  Store {
    #[source]
    source: AnyhowError,
  },

  #[error("Cache store error. Source: {source}")]
  Cache {
    #[source]
    source: AnyhowError,
  },
}

impl CartError {
  pub fn cart_not_found(id: i64) -> Self {
    CartError::NotFound { entity: "Cart", id }
  }

  pub fn cache(err: impl Into<AnyhowError>) -> Self {
    CartError::Cache { source: err.into() }
  }

  pub fn is_not_found(&self) -> bool {
    matches!(self, CartError::NotFound { .. })
  }
}

// Gateways report driver failures as anyhow errors; they surface as store failures.
impl From<AnyhowError> for CartError {
  fn from(err: AnyhowError) -> Self {
    CartError::Store { source: err }
  }
}

pub type CartResult<T, E = CartError> = std::result::Result<T, E>;
