// server/src/db/cart_repository.rs

use async_trait::async_trait;
use estore::{Cart, CartRepository, CartResult};
use sqlx::{FromRow, PgPool};
use tracing::instrument;

use super::store_error;

#[derive(Debug, FromRow)]
struct CartRow {
  id: i64,
  user_id: i64,
  status: String,
}

impl From<CartRow> for Cart {
  fn from(row: CartRow) -> Self {
    Cart {
      id: Some(row.id),
      user_id: row.user_id,
      status: row.status,
    }
  }
}

#[derive(Clone)]
pub struct PgCartRepository {
  pool: PgPool,
}

impl PgCartRepository {
  pub fn new(pool: PgPool) -> Self {
    PgCartRepository { pool }
  }
}

#[async_trait]
impl CartRepository for PgCartRepository {
  #[instrument(name = "db::carts::find_all", skip(self))]
  async fn find_all(&self) -> CartResult<Vec<Cart>> {
    let rows: Vec<CartRow> = sqlx::query_as("SELECT id, user_id, status FROM carts ORDER BY id ASC")
      .fetch_all(&self.pool)
      .await
      .map_err(store_error("carts.find_all"))?;
    Ok(rows.into_iter().map(Cart::from).collect())
  }

  #[instrument(name = "db::carts::find_by_id", skip(self))]
  async fn find_by_id(&self, id: i64) -> CartResult<Option<Cart>> {
    let row: Option<CartRow> = sqlx::query_as("SELECT id, user_id, status FROM carts WHERE id = $1")
      .bind(id)
      .fetch_optional(&self.pool)
      .await
      .map_err(store_error("carts.find_by_id"))?;
    Ok(row.map(Cart::from))
  }

  #[instrument(name = "db::carts::find_all_by_user_id", skip(self))]
  async fn find_all_by_user_id(&self, user_id: i64) -> CartResult<Vec<Cart>> {
    let rows: Vec<CartRow> = sqlx::query_as("SELECT id, user_id, status FROM carts WHERE user_id = $1 ORDER BY id ASC")
      .bind(user_id)
      .fetch_all(&self.pool)
      .await
      .map_err(store_error("carts.find_all_by_user_id"))?;
    Ok(rows.into_iter().map(Cart::from).collect())
  }

  #[instrument(name = "db::carts::save", skip(self, cart), fields(cart_id = ?cart.id, user_id = cart.user_id))]
  async fn save(&self, cart: Cart) -> CartResult<Cart> {
    let row: CartRow = match cart.id {
      None => sqlx::query_as("INSERT INTO carts (user_id, status) VALUES ($1, $2) RETURNING id, user_id, status")
        .bind(cart.user_id)
        .bind(&cart.status)
        .fetch_one(&self.pool)
        .await
        .map_err(store_error("carts.insert"))?,
      Some(id) => sqlx::query_as(
        r#"
        INSERT INTO carts (id, user_id, status)
        VALUES ($1, $2, $3)
        ON CONFLICT (id) DO UPDATE SET user_id = EXCLUDED.user_id, status = EXCLUDED.status
        RETURNING id, user_id, status
        "#,
      )
      .bind(id)
      .bind(cart.user_id)
      .bind(&cart.status)
      .fetch_one(&self.pool)
      .await
      .map_err(store_error("carts.upsert"))?,
    };
    Ok(row.into())
  }

  #[instrument(name = "db::carts::delete_by_id", skip(self))]
  async fn delete_by_id(&self, id: i64) -> CartResult<()> {
    sqlx::query("DELETE FROM carts WHERE id = $1")
      .bind(id)
      .execute(&self.pool)
      .await
      .map_err(store_error("carts.delete_by_id"))?;
    Ok(())
  }
}
