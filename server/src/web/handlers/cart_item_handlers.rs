// server/src/web/handlers/cart_item_handlers.rs

use actix_web::{web, HttpResponse};
use estore::NewCartItem;
use tracing::instrument;

use crate::errors::AppError;
use crate::state::AppState;

/// Items joined with their products. Any unresolvable product fails the
/// whole response with a 500.
#[instrument(name = "handler::list_cart_items", skip(app_state, path), fields(cart_id = %path.as_ref()))]
pub async fn list_items_handler(app_state: web::Data<AppState>, path: web::Path<i64>) -> Result<HttpResponse, AppError> {
  let items = app_state.cart_item_service.list(path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(items))
}

#[instrument(
    name = "handler::add_cart_item",
    skip(app_state, path, body),
    fields(cart_id = %path.as_ref(), product_id = body.product_id)
)]
pub async fn add_item_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
  body: web::Json<NewCartItem>,
) -> Result<HttpResponse, AppError> {
  let saved = app_state.cart_item_service.add(path.into_inner(), body.into_inner()).await?;
  Ok(HttpResponse::Ok().json(saved))
}

#[instrument(name = "handler::remove_cart_item", skip(app_state, path), fields(item_id = %path.as_ref()))]
pub async fn remove_item_handler(app_state: web::Data<AppState>, path: web::Path<i64>) -> Result<HttpResponse, AppError> {
  app_state.cart_item_service.remove(path.into_inner()).await?;
  Ok(HttpResponse::NoContent().finish())
}
