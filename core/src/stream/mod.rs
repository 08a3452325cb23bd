// core/src/stream/mod.rs

//! Per-subscriber change-stream over the cart cache.

pub mod distinct;
pub mod publisher;

pub use distinct::DistinctUntilChanged;
pub use publisher::{CartStream, ChangeStreamPublisher, DEFAULT_POLL_PERIOD};
