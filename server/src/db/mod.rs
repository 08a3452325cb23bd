// server/src/db/mod.rs

//! PostgreSQL gateways for the store of record and the product catalog.
//! Queries are runtime-checked (`sqlx::query_as`), so no database is needed
//! at build time.

pub mod cart_item_repository;
pub mod cart_repository;
pub mod product_catalog;

pub use cart_item_repository::PgCartItemRepository;
pub use cart_repository::PgCartRepository;
pub use product_catalog::PgProductCatalog;

use estore::CartError;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::error;

use crate::config::AppConfig;
use crate::errors::Result;

pub async fn connect(config: &AppConfig) -> Result<PgPool> {
  let pool = PgPoolOptions::new()
    .max_connections(config.database_max_connections)
    .connect(&config.database_url)
    .await?;
  Ok(pool)
}

/// Logs a driver failure and turns it into a store-of-record error.
pub(crate) fn store_error(operation: &'static str) -> impl FnOnce(sqlx::Error) -> CartError {
  move |e| {
    error!(operation, error = %e, "Database operation failed.");
    CartError::from(anyhow::Error::new(e).context(operation))
  }
}
