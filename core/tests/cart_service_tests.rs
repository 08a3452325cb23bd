// tests/cart_service_tests.rs
mod common;
use common::*;
use estore::{
  cart_cache_key, store::InMemoryCartRepository, CacheStore, CartError, CartPatch, CartRepository, CartService, NewCart,
  StatusPolicy,
};
use serial_test::serial;
use std::sync::{atomic::Ordering, Arc};

fn new_cart(status: &str) -> NewCart {
  NewCart {
    status: status.to_string(),
  }
}

fn patch(status: &str) -> CartPatch {
  CartPatch {
    status: status.to_string(),
  }
}

#[tokio::test]
#[serial]
async fn test_create_persists_and_refreshes_cache() {
  setup_tracing();
  let fx = Fixture::new();

  let saved = fx.cart_service.create(1, new_cart("active")).await.unwrap();
  assert!(saved.id.is_some());
  assert_eq!(saved.user_id, 1);
  assert_eq!(saved.status, "active");

  wait_for_cache_writes(&fx.cart_service.cache_diagnostics(), 1).await;
  let cached = fx.cache.get(&cart_cache_key(1)).await.unwrap();
  assert_eq!(cached, Some(saved.clone()));
  assert_eq!(fx.carts.find_by_id(saved.id.unwrap()).await.unwrap(), Some(saved));
}

#[tokio::test]
#[serial]
async fn test_create_succeeds_when_cache_write_fails() {
  setup_tracing();
  let carts = Arc::new(InMemoryCartRepository::new());
  let cache = Arc::new(FailingCacheStore::default());
  let service = CartService::new(carts.clone(), cache.clone());

  let saved = service.create(7, new_cart("pending")).await.expect("cache failure must not fail create");

  let diagnostics = service.cache_diagnostics();
  wait_for_cache_writes(&diagnostics, 1).await;
  assert_eq!(diagnostics.failed(), 1);
  assert_eq!(diagnostics.succeeded(), 0);
  assert!(diagnostics.last_failure().unwrap().contains("cache unreachable"));
  assert_eq!(cache.attempts.load(Ordering::SeqCst), 1);

  // Store of record is unaffected by the failed refresh.
  assert_eq!(carts.find_all_by_user_id(7).await.unwrap(), vec![saved]);
}

#[tokio::test]
#[serial]
async fn test_update_changes_only_status() {
  setup_tracing();
  let fx = Fixture::new();
  let original = fx.cart_service.create(101, new_cart("pending")).await.unwrap();
  let id = original.id.unwrap();

  let updated = fx.cart_service.update(id, patch("checked_out")).await.unwrap();
  assert_eq!(updated.id, original.id);
  assert_eq!(updated.user_id, original.user_id);
  assert_eq!(updated.status, "checked_out");

  wait_for_cache_writes(&fx.cart_service.cache_diagnostics(), 2).await;
  let cached = fx.cache.get(&cart_cache_key(101)).await.unwrap().unwrap();
  assert_eq!(cached.status, "checked_out");
}

#[tokio::test]
#[serial]
async fn test_update_missing_cart_is_not_found() {
  setup_tracing();
  let fx = Fixture::new();
  match fx.cart_service.update(404, patch("active")).await {
    Err(CartError::NotFound { entity, id }) => {
      assert_eq!(entity, "Cart");
      assert_eq!(id, 404);
    }
    other => panic!("Expected CartError::NotFound, got {:?}", other),
  }
  assert!(fx.cache.is_empty());
}

#[tokio::test]
#[serial]
async fn test_delete_leaves_stale_cache_entry() {
  setup_tracing();
  let fx = Fixture::new();
  let saved = fx.cart_service.create(102, new_cart("expired")).await.unwrap();
  let id = saved.id.unwrap();
  wait_for_cache_writes(&fx.cart_service.cache_diagnostics(), 1).await;

  fx.cart_service.delete(id).await.unwrap();

  let err = fx.cart_service.get_by_id(id).await.unwrap_err();
  assert!(err.is_not_found());
  // Documented staleness: the snapshot survives until the next write.
  assert_eq!(fx.cache.get(&cart_cache_key(102)).await.unwrap(), Some(saved));
}

#[tokio::test]
#[serial]
async fn test_delete_missing_cart_is_not_found() {
  setup_tracing();
  let fx = Fixture::new();
  assert!(fx.cart_service.delete(9).await.unwrap_err().is_not_found());
}

#[tokio::test]
#[serial]
async fn test_list_queries_ignore_cache() {
  setup_tracing();
  let carts = Arc::new(InMemoryCartRepository::new());
  carts.save(cart(1, 99, "pending")).await.unwrap();
  carts.save(cart(2, 99, "active")).await.unwrap();
  carts.save(cart(3, 5, "active")).await.unwrap();
  let cache = Arc::new(FailingCacheStore::default());
  let service = CartService::new(carts, cache.clone());

  let by_user = service.list_by_user(99).await.unwrap();
  assert_eq!(by_user.len(), 2);
  assert!(by_user.iter().all(|c| c.user_id == 99));
  assert_eq!(service.list_all().await.unwrap().len(), 3);
  assert!(service.list_by_user(12345).await.unwrap().is_empty());
  assert_eq!(cache.attempts.load(Ordering::SeqCst), 0);
}

#[tokio::test]
#[serial]
async fn test_restricted_status_policy() {
  setup_tracing();
  let fx = Fixture::new();
  let service = fx
    .cart_service
    .clone()
    .with_status_policy(StatusPolicy::from_list(["active", "checked_out"]));

  let saved = service.create(3, new_cart("active")).await.unwrap();
  assert!(matches!(
    service.create(3, new_cart("bogus")).await,
    Err(CartError::Validation(_))
  ));
  assert!(matches!(
    service.update(saved.id.unwrap(), patch("bogus")).await,
    Err(CartError::Validation(_))
  ));
  assert_eq!(fx.carts.len(), 1);
}

#[tokio::test]
#[serial]
async fn test_cart_lifecycle_scenario() {
  setup_tracing();
  let fx = Fixture::new();

  fx.cart_service.create(1, new_cart("active")).await.unwrap();
  let carts = fx.cart_service.list_by_user(1).await.unwrap();
  assert_eq!(carts.len(), 1);
  assert_eq!(carts[0].status, "active");
  let id = carts[0].id.unwrap();

  fx.cart_service.update(id, patch("checked_out")).await.unwrap();
  assert_eq!(fx.cart_service.get_by_id(id).await.unwrap().status, "checked_out");

  fx.cart_service.delete(id).await.unwrap();
  assert!(matches!(
    fx.cart_service.get_by_id(id).await,
    Err(CartError::NotFound { .. })
  ));
}
