// core/src/model/cart_item.rs

use serde::{Deserialize, Serialize};

use super::product::Product;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<i64>,
  pub cart_id: i64,
  pub product_id: i64,
  // Unvalidated, zero and negative values are stored as given.
  pub quantity: i32,
}

/// Request body for adding an item; the owning cart comes from the route.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCartItem {
  pub product_id: i64,
  #[serde(default)]
  pub quantity: i32,
}

/// A cart item joined with its catalog record. Built per read, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemWithProduct {
  pub id: Option<i64>,
  pub cart_id: i64,
  pub quantity: i32,
  pub product: Product,
}

impl CartItemWithProduct {
  pub fn join(item: CartItem, product: Product) -> Self {
    CartItemWithProduct {
      id: item.id,
      cart_id: item.cart_id,
      quantity: item.quantity,
      product,
    }
  }
}
