// server/src/lib.rs

//! HTTP host for the eStore cart subsystem: PostgreSQL store of record and
//! catalog, Redis (or in-process) cart cache, and a server-sent-events
//! change-stream per user.

pub mod cache;
pub mod config;
pub mod db;
pub mod errors;
pub mod state;
pub mod web;

pub use crate::config::{AppConfig, LogFormat};
pub use crate::errors::{AppError, Result};
pub use crate::state::{AppState, Backends};
