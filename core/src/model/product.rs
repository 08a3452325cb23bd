// core/src/model/product.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  pub id: i64,
  pub name: String,
  pub description: Option<String>, // Description can be optional
  pub price_cents: i32,
  pub stock_quantity: i32,
}
