// tests/order_tests.rs
mod common;

use std::sync::Arc;

use common::*;
use rust_decimal::Decimal;
use storefront::{CartLocks, CoreError, OrderService};

#[tokio::test]
async fn submit_snapshots_cart_items_and_total() {
  let fx = fixture();
  let user = seed_user(&fx, USERNAME).await;
  let item = seed_item(&fx, "Round Widget", price(30));
  fx.carts.add_to_cart(USERNAME, item.id, 10).await.unwrap();

  let order = fx.orders.submit_order(USERNAME).await.unwrap();

  assert_eq!(order.user_id, user.id);
  assert_eq!(order.items.len(), 10);
  assert_eq!(order.total, price(300));
}

#[tokio::test]
async fn submit_leaves_the_source_cart_unmodified() {
  let fx = fixture();
  seed_user(&fx, USERNAME).await;
  let item = seed_item(&fx, "Round Widget", price(30));
  fx.carts.add_to_cart(USERNAME, item.id, 10).await.unwrap();

  fx.orders.submit_order(USERNAME).await.unwrap();

  // Submission is a snapshot, not a transfer: nothing is cleared.
  let user = fx.users.find_by_username(USERNAME).await.unwrap();
  assert_eq!(user.cart.quantity_of(item.id), 10);
  assert_eq!(user.cart.total, price(300));
}

#[tokio::test]
async fn history_returns_submitted_orders() {
  let fx = fixture();
  seed_user(&fx, USERNAME).await;
  let item = seed_item(&fx, "Round Widget", price(30));
  fx.carts.add_to_cart(USERNAME, item.id, 10).await.unwrap();

  let order = fx.orders.submit_order(USERNAME).await.unwrap();
  let history = fx.orders.order_history(USERNAME).await.unwrap();

  assert_eq!(history.len(), 1);
  assert_eq!(history[0], order);
}

#[tokio::test]
async fn later_cart_mutation_does_not_reach_an_existing_order() {
  let fx = fixture();
  seed_user(&fx, USERNAME).await;
  let item = seed_item(&fx, "Round Widget", price(30));
  fx.carts.add_to_cart(USERNAME, item.id, 10).await.unwrap();
  let order = fx.orders.submit_order(USERNAME).await.unwrap();

  fx.carts.remove_from_cart(USERNAME, item.id, 9).await.unwrap();
  fx.carts.add_to_cart(USERNAME, item.id, 2).await.unwrap();

  assert_eq!(order.items.len(), 10);
  assert_eq!(order.total, price(300));
  // The persisted copy is just as frozen as the returned one.
  let history = fx.orders.order_history(USERNAME).await.unwrap();
  assert_eq!(history[0].items.len(), 10);
  assert_eq!(history[0].total, price(300));
}

#[tokio::test]
async fn submitting_an_empty_cart_is_not_an_error() {
  let fx = fixture();
  seed_user(&fx, USERNAME).await;

  let order = fx.orders.submit_order(USERNAME).await.unwrap();

  assert!(order.items.is_empty());
  assert_eq!(order.total, Decimal::ZERO);
}

#[tokio::test]
async fn repeated_submission_produces_distinct_orders() {
  let fx = fixture();
  seed_user(&fx, USERNAME).await;
  let item = seed_item(&fx, "Round Widget", price(30));
  fx.carts.add_to_cart(USERNAME, item.id, 2).await.unwrap();

  let first = fx.orders.submit_order(USERNAME).await.unwrap();
  let second = fx.orders.submit_order(USERNAME).await.unwrap();

  assert_ne!(first.id, second.id);
  assert_eq!(first.total, second.total);
  assert_eq!(fx.orders.order_history(USERNAME).await.unwrap().len(), 2);
}

#[tokio::test]
async fn order_store_outage_surfaces_unchanged_and_records_no_order() {
  let fx = fixture();
  seed_user(&fx, USERNAME).await;
  let item = seed_item(&fx, "Round Widget", price(30));
  fx.carts.add_to_cart(USERNAME, item.id, 2).await.unwrap();

  // Same user data, but the order backend is down.
  let orders = OrderService::new(
    Arc::new(fx.store.clone()),
    Arc::new(FailingOrderStore),
    Arc::new(CartLocks::new()),
  );

  let err = orders.submit_order(USERNAME).await.unwrap_err();
  assert!(matches!(err, CoreError::Store { .. }));
  assert!(err.to_string().contains("order backend offline"));

  let err = orders.order_history(USERNAME).await.unwrap_err();
  assert!(matches!(err, CoreError::Store { .. }));

  // Nothing reached the healthy store, and the cart is untouched.
  assert!(fx.orders.order_history(USERNAME).await.unwrap().is_empty());
  let user = fx.users.find_by_username(USERNAME).await.unwrap();
  assert_eq!(user.cart.quantity_of(item.id), 2);
}

#[tokio::test]
async fn submit_and_history_fail_for_unknown_user() {
  let fx = fixture();

  let err = fx.orders.submit_order("nobody").await.unwrap_err();
  assert!(matches!(err, CoreError::UserNotFound(_)));

  let err = fx.orders.order_history("nobody").await.unwrap_err();
  assert!(matches!(err, CoreError::UserNotFound(_)));
}
