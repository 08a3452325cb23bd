// server/src/web/handlers/cart_handlers.rs

use actix_web::{web, HttpResponse};
use estore::{CartPatch, NewCart};
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;

#[instrument(name = "handler::get_all_carts", skip(app_state))]
pub async fn get_all_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let carts = app_state.cart_service.list_all().await?;
  info!("Fetched {} carts.", carts.len());
  Ok(HttpResponse::Ok().json(carts))
}

#[instrument(name = "handler::get_cart", skip(app_state, path), fields(cart_id = %path.as_ref()))]
pub async fn get_by_id_handler(app_state: web::Data<AppState>, path: web::Path<i64>) -> Result<HttpResponse, AppError> {
  let cart = app_state.cart_service.get_by_id(path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(cart))
}

#[instrument(name = "handler::get_user_carts", skip(app_state, path), fields(user_id = %path.as_ref()))]
pub async fn get_by_user_handler(app_state: web::Data<AppState>, path: web::Path<i64>) -> Result<HttpResponse, AppError> {
  let carts = app_state.cart_service.list_by_user(path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(carts))
}

#[instrument(
    name = "handler::create_cart",
    skip(app_state, path, body),
    fields(user_id = %path.as_ref(), status = %body.status)
)]
pub async fn create_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
  body: web::Json<NewCart>,
) -> Result<HttpResponse, AppError> {
  // The response does not wait for the cache refresh.
  let saved = app_state.cart_service.create(path.into_inner(), body.into_inner()).await?;
  Ok(HttpResponse::Ok().json(saved))
}

#[instrument(
    name = "handler::update_cart",
    skip(app_state, path, body),
    fields(cart_id = %path.as_ref(), status = %body.status)
)]
pub async fn update_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
  body: web::Json<CartPatch>,
) -> Result<HttpResponse, AppError> {
  let updated = app_state.cart_service.update(path.into_inner(), body.into_inner()).await?;
  Ok(HttpResponse::Ok().json(updated))
}

#[instrument(name = "handler::delete_cart", skip(app_state, path), fields(cart_id = %path.as_ref()))]
pub async fn delete_handler(app_state: web::Data<AppState>, path: web::Path<i64>) -> Result<HttpResponse, AppError> {
  app_state.cart_service.delete(path.into_inner()).await?;
  Ok(HttpResponse::NoContent().finish())
}
