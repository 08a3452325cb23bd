// server/src/errors.rs

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use estore::CartError;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  #[error("Cache Error: {0}")]
  Redis(String),

  #[error("Cart Error: {source}")]
  Cart {
    #[from] // Allows `?` on estore service calls
    source: CartError,
  },
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Cart { source } => match source {
        CartError::NotFound { .. } => StatusCode::NOT_FOUND,
        CartError::Validation(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
      },
      _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    tracing::error!(application_error = %self, "Responding with error");
    let status = self.status_code();
    match self {
      AppError::Config(m) => HttpResponse::build(status).json(json!({"error": "Configuration issue", "detail": m})),
      AppError::Sqlx(_) => HttpResponse::build(status).json(json!({"error": "Database operation failed"})),
      AppError::Redis(m) => HttpResponse::build(status).json(json!({"error": "Cache operation failed", "detail": m})),
      AppError::Cart { source } => match source {
        CartError::NotFound { .. } | CartError::Validation(_) => {
          HttpResponse::build(status).json(json!({"error": source.to_string()}))
        }
        CartError::UpstreamLookup { .. } => {
          HttpResponse::build(status).json(json!({"error": format!("Internal error: {}", source)}))
        }
        CartError::Store { .. } => HttpResponse::build(status).json(json!({"error": "Database operation failed"})),
        CartError::Cache { .. } | CartError::CacheWrite(_) => {
          HttpResponse::build(status).json(json!({"error": "Cache operation failed"}))
        }
      },
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
