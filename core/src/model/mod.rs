// core/src/model/mod.rs

//! Data carried between the store of record, the catalog, the cache and callers.

pub mod cart;
pub mod cart_item;
pub mod product;

pub use cart::{Cart, CartPatch, NewCart};
pub use cart_item::{CartItem, CartItemWithProduct, NewCartItem};
pub use product::Product;
