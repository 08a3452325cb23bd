// server/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use estore::StatusPolicy;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
  Pretty,
  Json,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub database_url: String,
  pub database_max_connections: u32,

  // When unset, carts are cached in-process.
  pub redis_url: Option<String>,

  pub stream_poll_period: Duration,
  pub status_policy: StatusPolicy,
  pub log_format: LogFormat,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the config from any variable source; `from_env` passes the process
  /// environment.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get_env = |var_name: &str| {
      lookup(var_name)
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::Config(format!("Missing environment variable '{}'", var_name)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|_| "8080".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;
    let database_url = get_env("DATABASE_URL")?;
    let database_max_connections = get_env("DATABASE_MAX_CONNECTIONS")
      .unwrap_or_else(|_| "5".to_string())
      .parse::<u32>()
      .map_err(|e| AppError::Config(format!("Invalid DATABASE_MAX_CONNECTIONS: {}", e)))?;

    let redis_url = get_env("REDIS_URL").ok();

    let poll_ms = get_env("CART_STREAM_POLL_MS")
      .unwrap_or_else(|_| "1000".to_string())
      .parse::<u64>()
      .map_err(|e| AppError::Config(format!("Invalid CART_STREAM_POLL_MS: {}", e)))?;
    if poll_ms == 0 {
      return Err(AppError::Config("CART_STREAM_POLL_MS must be greater than zero".to_string()));
    }

    let status_policy = get_env("CART_ALLOWED_STATUSES")
      .map(|list| StatusPolicy::from_list(list.split(',')))
      .unwrap_or_default();

    let log_format = match get_env("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string()).as_str() {
      "pretty" => LogFormat::Pretty,
      "json" => LogFormat::Json,
      other => return Err(AppError::Config(format!("Invalid LOG_FORMAT '{}', expected 'pretty' or 'json'", other))),
    };

    tracing::info!("Application configuration loaded successfully.");
    // database_url and redis_url can carry credentials; they are not logged.

    Ok(Self {
      server_host,
      server_port,
      database_url,
      database_max_connections,
      redis_url,
      stream_poll_period: Duration::from_millis(poll_ms),
      status_policy,
      log_format,
    })
  }
}
