// core/src/model/cart.rs

use serde::{Deserialize, Serialize};

/// A cart as held by the store of record and mirrored into the cache.
///
/// `id` is `None` until the store of record assigns one on first save.
/// Equality is full-value: the change-stream relies on it to detect any
/// field change, not just a different identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<i64>,
  pub user_id: i64,
  pub status: String,
}

impl Cart {
  pub fn new(user_id: i64, status: impl Into<String>) -> Self {
    Cart {
      id: None,
      user_id,
      status: status.into(),
    }
  }
}

/// Request body for creating a cart. The owning user comes from the route,
/// so any `userId` in the body is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCart {
  #[serde(default)]
  pub status: String,
}

/// Request body for updating a cart. Only the status is applied; the other
/// fields a client may send (`id`, `userId`) are accepted and ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartPatch {
  pub status: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn cart_json_is_camel_case() {
    let cart = Cart {
      id: Some(4),
      user_id: 1,
      status: "active".to_string(),
    };
    let json = serde_json::to_value(&cart).unwrap();
    assert_eq!(json, serde_json::json!({"id": 4, "userId": 1, "status": "active"}));
  }

  #[test]
  fn patch_ignores_identity_fields() {
    let patch: CartPatch = serde_json::from_str(r#"{"id": 9, "userId": 2, "status": "checked_out"}"#).unwrap();
    assert_eq!(patch.status, "checked_out");
  }
}
