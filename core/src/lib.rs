// src/lib.rs

//! estore: the cart subsystem of the eStore services.
//!
//! Carts and cart items live in a store of record. The latest cart of each
//! user is mirrored into a key-value cache under `cart:<userId>`, and
//! subscribers receive a cart snapshot whenever that cached value changes:
//!  - `CartService` writes through to the store of record, then refreshes the
//!    cache on a detached task whose failure never fails the request.
//!  - `CartItemService` joins cart items with catalog products, strictly:
//!    one missing product fails the whole listing.
//!  - `ChangeStreamPublisher` polls the cache on a fixed period and emits only
//!    values that differ from the previous emission.
//!
//! Collaborators (store of record, catalog, cache) are traits in [`store`];
//! in-memory implementations ship alongside them.

pub mod error;
pub mod model;
pub mod policy;
pub mod refresh;
pub mod service;
pub mod store;
pub mod stream;

// --- Re-exports for the Public API ---

pub use crate::error::{CartError, CartResult};
pub use crate::model::{Cart, CartItem, CartItemWithProduct, CartPatch, NewCart, NewCartItem, Product};
pub use crate::policy::StatusPolicy;
pub use crate::refresh::{CacheDiagnostics, CacheRefresher};
pub use crate::service::{CartItemService, CartService};
pub use crate::store::{cart_cache_key, CacheStore, CartItemRepository, CartRepository, ProductCatalog};
pub use crate::stream::{CartStream, ChangeStreamPublisher, DistinctUntilChanged, DEFAULT_POLL_PERIOD};
