// storefront/core/src/models/user.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::cart::Cart;

/// A registered account. Every user owns exactly one cart, established
/// atomically at creation time (never lazily, never absent). Credential
/// material lives with the authentication layer, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
  pub id: Uuid,
  pub username: String,
  pub created_at: DateTime<Utc>,
  pub cart: Cart,
}

impl User {
  /// Creates a user together with its empty cart, keeping both sides of the
  /// user/cart relationship consistent from the start.
  pub fn new(username: impl Into<String>) -> Self {
    let id = Uuid::new_v4();
    User {
      id,
      username: username.into(),
      created_at: Utc::now(),
      cart: Cart::new(id),
    }
  }
}
