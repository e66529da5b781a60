// storefront/core/src/services/cart_service.rs

//! The cart engine: adds and removes items with quantity semantics while
//! keeping the cart's cached total equal to the sum of its item prices.

use std::sync::Arc;

use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::error::{CoreError, Result};
use crate::models::Cart;
use crate::services::locks::CartLocks;
use crate::stores::{CartStore, ItemStore, UserStore};

pub struct CartService {
  users: Arc<dyn UserStore>,
  catalog: Arc<dyn ItemStore>,
  carts: Arc<dyn CartStore>,
  locks: Arc<CartLocks>,
}

impl CartService {
  pub fn new(
    users: Arc<dyn UserStore>,
    catalog: Arc<dyn ItemStore>,
    carts: Arc<dyn CartStore>,
    locks: Arc<CartLocks>,
  ) -> Self {
    CartService {
      users,
      catalog,
      carts,
      locks,
    }
  }

  /// Appends `quantity` units of the catalog item to the user's cart and
  /// persists the updated cart.
  ///
  /// Fails with [`CoreError::InvalidQuantity`] before any lookup when
  /// `quantity < 1`, with [`CoreError::UserNotFound`] /
  /// [`CoreError::ItemNotFound`] when the respective id does not resolve.
  /// On any failure the cart is left untouched and nothing is persisted.
  #[instrument(name = "cart_service::add_to_cart", skip(self), err(Display))]
  pub async fn add_to_cart(&self, username: &str, item_id: Uuid, quantity: i64) -> Result<Cart> {
    let quantity = check_quantity(quantity)?;

    let lock = self.locks.for_user(username);
    let _cart_guard = lock.lock().await;

    let mut user = self
      .users
      .find_by_username(username)
      .await?
      .ok_or_else(|| CoreError::UserNotFound(username.to_string()))?;
    let item = self
      .catalog
      .find_by_id(item_id)
      .await?
      .ok_or_else(|| CoreError::ItemNotFound(item_id.to_string()))?;

    user.cart.add_item(&item, quantity);
    debug!(
      cart_id = %user.cart.id,
      units = user.cart.items.len(),
      total = %user.cart.total,
      "added {} x '{}' to cart",
      quantity,
      item.name
    );

    self.carts.save(user.cart.clone()).await?;
    Ok(user.cart)
  }

  /// Removes up to `quantity` units of the catalog item from the user's cart
  /// and persists the updated cart.
  ///
  /// Same preconditions as [`CartService::add_to_cart`]. Removing more units
  /// than the cart holds removes all that are present; an item absent from
  /// the cart (but known to the catalog) is a no-op, not an error.
  #[instrument(name = "cart_service::remove_from_cart", skip(self), err(Display))]
  pub async fn remove_from_cart(&self, username: &str, item_id: Uuid, quantity: i64) -> Result<Cart> {
    let quantity = check_quantity(quantity)?;

    let lock = self.locks.for_user(username);
    let _cart_guard = lock.lock().await;

    let mut user = self
      .users
      .find_by_username(username)
      .await?
      .ok_or_else(|| CoreError::UserNotFound(username.to_string()))?;
    let item = self
      .catalog
      .find_by_id(item_id)
      .await?
      .ok_or_else(|| CoreError::ItemNotFound(item_id.to_string()))?;

    let present = user.cart.quantity_of(item.id);
    if present < quantity {
      warn!(
        cart_id = %user.cart.id,
        present,
        requested = quantity,
        "removing more '{}' than the cart holds; clearing what is present",
        item.name
      );
    }
    user.cart.remove_item(item.id, quantity);
    debug!(
      cart_id = %user.cart.id,
      units = user.cart.items.len(),
      total = %user.cart.total,
      "removed up to {} x '{}' from cart",
      quantity,
      item.name
    );

    self.carts.save(user.cart.clone()).await?;
    Ok(user.cart)
  }
}

// Quantity contract shared by both entry points: checked before any store
// lookup so a bad request never even touches the backend.
fn check_quantity(quantity: i64) -> Result<usize> {
  if quantity < 1 {
    return Err(CoreError::InvalidQuantity(quantity));
  }
  Ok(quantity as usize)
}
