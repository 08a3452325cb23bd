// server/src/db/product_catalog.rs

use async_trait::async_trait;
use estore::{CartResult, Product, ProductCatalog};
use sqlx::{FromRow, PgPool};
use tracing::instrument;

use super::store_error;

#[derive(Debug, FromRow)]
struct ProductRow {
  id: i64,
  name: String,
  description: Option<String>,
  price_cents: i32,
  stock_quantity: i32,
}

impl From<ProductRow> for Product {
  fn from(row: ProductRow) -> Self {
    Product {
      id: row.id,
      name: row.name,
      description: row.description,
      price_cents: row.price_cents,
      stock_quantity: row.stock_quantity,
    }
  }
}

/// Catalog lookups against the `products` table.
#[derive(Clone)]
pub struct PgProductCatalog {
  pool: PgPool,
}

impl PgProductCatalog {
  pub fn new(pool: PgPool) -> Self {
    PgProductCatalog { pool }
  }
}

#[async_trait]
impl ProductCatalog for PgProductCatalog {
  #[instrument(name = "db::products::find_by_id", skip(self))]
  async fn find_by_id(&self, product_id: i64) -> CartResult<Option<Product>> {
    let row: Option<ProductRow> =
      sqlx::query_as("SELECT id, name, description, price_cents, stock_quantity FROM products WHERE id = $1")
        .bind(product_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_error("products.find_by_id"))?;
    Ok(row.map(Product::from))
  }
}
