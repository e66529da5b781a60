// storefront/core/src/models/item.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A catalog entry. Items are immutable once minted; the catalog is the sole
/// owner, and carts/orders only ever hold value copies.
///
/// `price` is an exact decimal and is expected to be non-negative; the catalog
/// is responsible for only minting items that satisfy this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
  pub id: Uuid,
  pub name: String,
  pub price: Decimal,
}

impl Item {
  pub fn new(name: impl Into<String>, price: Decimal) -> Self {
    Item {
      id: Uuid::new_v4(),
      name: name.into(),
      price,
    }
  }
}
