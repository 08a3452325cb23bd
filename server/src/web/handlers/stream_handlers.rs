// server/src/web/handlers/stream_handlers.rs

use actix_web::{http::header, web, HttpResponse};
use futures_util::StreamExt;
use serde::Deserialize;
use tracing::{error, info, instrument};

use crate::state::AppState;

#[derive(Deserialize, Debug)]
pub struct StreamQuery {
  #[serde(rename = "userId")]
  pub user_id: i64,
}

/// Server-sent events: one `data:` event carrying the full cart JSON per
/// change-stream emission. Polling stops when the client disconnects and
/// actix drops the body stream.
#[instrument(name = "handler::stream_cart_updates", skip(app_state, query), fields(user_id = query.user_id))]
pub async fn stream_cart_updates_handler(app_state: web::Data<AppState>, query: web::Query<StreamQuery>) -> HttpResponse {
  let user_id = query.user_id;
  info!("Opening cart change-stream.");

  let events = app_state.change_streams.subscribe(user_id).map(move |cart| {
    serde_json::to_string(&cart)
      .map(|json| web::Bytes::from(format!("data: {}\n\n", json)))
      .map_err(|e| {
        error!(user_id, error = %e, "Failed to encode cart event.");
        e
      })
  });

  HttpResponse::Ok()
    .content_type("text/event-stream")
    .insert_header((header::CACHE_CONTROL, "no-cache"))
    .streaming(events)
}
