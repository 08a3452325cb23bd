// server/src/db/cart_item_repository.rs

use async_trait::async_trait;
use estore::{CartItem, CartItemRepository, CartResult};
use sqlx::{FromRow, PgPool};
use tracing::instrument;

use super::store_error;

#[derive(Debug, FromRow)]
struct CartItemRow {
  id: i64,
  cart_id: i64,
  product_id: i64,
  quantity: i32,
}

impl From<CartItemRow> for CartItem {
  fn from(row: CartItemRow) -> Self {
    CartItem {
      id: Some(row.id),
      cart_id: row.cart_id,
      product_id: row.product_id,
      quantity: row.quantity,
    }
  }
}

#[derive(Clone)]
pub struct PgCartItemRepository {
  pool: PgPool,
}

impl PgCartItemRepository {
  pub fn new(pool: PgPool) -> Self {
    PgCartItemRepository { pool }
  }
}

#[async_trait]
impl CartItemRepository for PgCartItemRepository {
  #[instrument(name = "db::cart_items::find_all_by_cart_id", skip(self))]
  async fn find_all_by_cart_id(&self, cart_id: i64) -> CartResult<Vec<CartItem>> {
    let rows: Vec<CartItemRow> =
      sqlx::query_as("SELECT id, cart_id, product_id, quantity FROM cart_items WHERE cart_id = $1 ORDER BY id ASC")
        .bind(cart_id)
        .fetch_all(&self.pool)
        .await
        .map_err(store_error("cart_items.find_all_by_cart_id"))?;
    Ok(rows.into_iter().map(CartItem::from).collect())
  }

  #[instrument(name = "db::cart_items::find_by_id", skip(self))]
  async fn find_by_id(&self, id: i64) -> CartResult<Option<CartItem>> {
    let row: Option<CartItemRow> = sqlx::query_as("SELECT id, cart_id, product_id, quantity FROM cart_items WHERE id = $1")
      .bind(id)
      .fetch_optional(&self.pool)
      .await
      .map_err(store_error("cart_items.find_by_id"))?;
    Ok(row.map(CartItem::from))
  }

  #[instrument(name = "db::cart_items::save", skip(self, item), fields(item_id = ?item.id, cart_id = item.cart_id))]
  async fn save(&self, item: CartItem) -> CartResult<CartItem> {
    let row: CartItemRow = match item.id {
      None => sqlx::query_as(
        "INSERT INTO cart_items (cart_id, product_id, quantity) VALUES ($1, $2, $3) RETURNING id, cart_id, product_id, quantity",
      )
      .bind(item.cart_id)
      .bind(item.product_id)
      .bind(item.quantity)
      .fetch_one(&self.pool)
      .await
      .map_err(store_error("cart_items.insert"))?,
      Some(id) => sqlx::query_as(
        r#"
        INSERT INTO cart_items (id, cart_id, product_id, quantity)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (id) DO UPDATE
        SET cart_id = EXCLUDED.cart_id, product_id = EXCLUDED.product_id, quantity = EXCLUDED.quantity
        RETURNING id, cart_id, product_id, quantity
        "#,
      )
      .bind(id)
      .bind(item.cart_id)
      .bind(item.product_id)
      .bind(item.quantity)
      .fetch_one(&self.pool)
      .await
      .map_err(store_error("cart_items.upsert"))?,
    };
    Ok(row.into())
  }

  #[instrument(name = "db::cart_items::delete_by_id", skip(self))]
  async fn delete_by_id(&self, id: i64) -> CartResult<()> {
    sqlx::query("DELETE FROM cart_items WHERE id = $1")
      .bind(id)
      .execute(&self.pool)
      .await
      .map_err(store_error("cart_items.delete_by_id"))?;
    Ok(())
  }
}
