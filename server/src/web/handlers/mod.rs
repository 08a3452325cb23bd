// server/src/web/handlers/mod.rs

pub mod cart_handlers;
pub mod cart_item_handlers;
pub mod stream_handlers;
