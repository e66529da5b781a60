// storefront/core/src/models/cart.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::item::Item;

/// A user's in-progress, mutable collection of items destined for purchase.
///
/// The item collection is an ordered multiset: an item appears once per unit
/// held, so duplicates encode quantity. `total` is a cache of the sum of all
/// item prices and is re-derived from scratch after every mutation rather
/// than adjusted incrementally, so it cannot drift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
  pub id: Uuid,
  /// Back-reference to the owning user. Exactly one cart per user; the cart
  /// is created together with the user and never outlives it.
  pub user_id: Uuid,
  pub items: Vec<Item>,
  pub total: Decimal,
}

impl Cart {
  pub fn new(user_id: Uuid) -> Self {
    Cart {
      id: Uuid::new_v4(),
      user_id,
      items: Vec::new(),
      total: Decimal::ZERO,
    }
  }

  /// Appends `quantity` copies of `item` and refreshes the total.
  pub fn add_item(&mut self, item: &Item, quantity: usize) {
    for _ in 0..quantity {
      self.items.push(item.clone());
    }
    self.recompute_total();
  }

  /// Removes up to `quantity` occurrences of the item with `item_id` and
  /// refreshes the total. Removing more than are present simply empties the
  /// item out of the cart; under-removal is not an error.
  pub fn remove_item(&mut self, item_id: Uuid, quantity: usize) {
    let mut remaining = quantity;
    self.items.retain(|item| {
      if remaining > 0 && item.id == item_id {
        remaining -= 1;
        false
      } else {
        true
      }
    });
    self.recompute_total();
  }

  /// Re-derives `total` as the sum of all item prices. An empty cart totals
  /// to zero.
  pub fn recompute_total(&mut self) {
    self.total = self.items.iter().map(|item| item.price).sum();
  }

  /// Number of occurrences of the given item currently in the cart.
  pub fn quantity_of(&self, item_id: Uuid) -> usize {
    self.items.iter().filter(|item| item.id == item_id).count()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }
}
