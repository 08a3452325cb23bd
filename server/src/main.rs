// server/src/main.rs

use estore_server::config::{AppConfig, LogFormat};
use estore_server::db::{self, PgCartItemRepository, PgCartRepository, PgProductCatalog};
use estore_server::state::{AppState, Backends};
use estore_server::{cache, web};

use actix_web::{web as actix_data, App, HttpServer}; // Renamed web to actix_data
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing

fn init_tracing(format: LogFormat) {
  let builder = tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE); // Log when spans close, showing duration

  match format {
    LogFormat::Pretty => builder.init(),
    LogFormat::Json => builder.json().init(),
  }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Load application configuration before logging so LOG_FORMAT applies.
  let app_config = match AppConfig::from_env() {
    Ok(cfg) => cfg,
    Err(e) => {
      eprintln!("Configuration error: {}", e);
      std::process::exit(1);
    }
  };
  init_tracing(app_config.log_format);

  tracing::info!("Starting eStore cart server...");

  // Initialize Database Pool
  let db_pool = match db::connect(&app_config).await {
    Ok(pool) => {
      tracing::info!("Successfully connected to the database.");
      pool
    }
    Err(e) => {
      tracing::error!(error = %e, "Failed to connect to the database.");
      return Err(std::io::Error::new(std::io::ErrorKind::Other, e));
    }
  };

  let backends = Backends {
    carts: Arc::new(PgCartRepository::new(db_pool.clone())),
    items: Arc::new(PgCartItemRepository::new(db_pool.clone())),
    catalog: Arc::new(PgProductCatalog::new(db_pool)),
    cache: cache::create_cache_store(&app_config).await,
  };

  let app_state = match AppState::from_config(backends, &app_config) {
    Ok(state) => state,
    Err(e) => {
      tracing::error!(error = %e, "Failed to build application state.");
      return Err(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()));
    }
  };

  let server_address = format!("{}:{}", app_config.server_host, app_config.server_port);
  tracing::info!(
    poll_period_ms = app_config.stream_poll_period.as_millis() as u64,
    "Attempting to bind server to {}...",
    server_address
  );

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}
