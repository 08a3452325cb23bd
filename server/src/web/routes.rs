// server/src/web/routes.rs

use actix_web::web;

use crate::web::handlers::{cart_handlers, cart_item_handlers, stream_handlers};

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .route("/health", web::get().to(health_check_handler))
    .service(
      web::scope("/carts")
        .route("", web::get().to(cart_handlers::get_all_handler))
        // Literal segments go before `/{id}`, which would otherwise claim them.
        .route("/stream", web::get().to(stream_handlers::stream_cart_updates_handler))
        .route("/user/{user_id}", web::get().to(cart_handlers::get_by_user_handler))
        .route("/user/{user_id}", web::post().to(cart_handlers::create_handler))
        .route("/items/{item_id}", web::delete().to(cart_item_handlers::remove_item_handler))
        .route("/{cart_id}/items", web::get().to(cart_item_handlers::list_items_handler))
        .route("/{cart_id}/items", web::post().to(cart_item_handlers::add_item_handler))
        .route("/{id}", web::get().to(cart_handlers::get_by_id_handler))
        .route("/{id}", web::put().to(cart_handlers::update_handler))
        .route("/{id}", web::delete().to(cart_handlers::delete_handler)),
    );
}
