// core/src/service/mod.rs

pub mod cart;
pub mod cart_item;

pub use cart::CartService;
pub use cart_item::CartItemService;
