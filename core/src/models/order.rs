// storefront/core/src/models/order.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::cart::Cart;
use super::item::Item;

/// An immutable, point-in-time snapshot of a cart. Items and total are value
/// copies taken at conversion time; later mutation of the source cart never
/// reaches an order that has already been created. Orders are append-only
/// (no update, no delete).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
  pub id: Uuid,
  /// Non-owning reference to the user that submitted the order.
  pub user_id: Uuid,
  pub items: Vec<Item>,
  pub total: Decimal,
  pub created_at: DateTime<Utc>,
}

impl Order {
  /// Snapshots the given cart into a new order. The cart is read, not
  /// consumed: conversion is a snapshot, not a transfer.
  pub fn from_cart(cart: &Cart) -> Self {
    Order {
      id: Uuid::new_v4(),
      user_id: cart.user_id,
      items: cart.items.clone(),
      total: cart.total,
      created_at: Utc::now(),
    }
  }
}
