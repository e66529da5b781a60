// storefront/core/src/services/order_service.rs

//! Cart-to-order conversion and order history.

use std::sync::Arc;

use tracing::{info, instrument};

use crate::error::{CoreError, Result};
use crate::models::Order;
use crate::services::locks::CartLocks;
use crate::stores::{OrderStore, UserStore};

pub struct OrderService {
  users: Arc<dyn UserStore>,
  orders: Arc<dyn OrderStore>,
  locks: Arc<CartLocks>,
}

impl OrderService {
  pub fn new(users: Arc<dyn UserStore>, orders: Arc<dyn OrderStore>, locks: Arc<CartLocks>) -> Self {
    OrderService { users, orders, locks }
  }

  /// Converts the user's cart into a new, immutable order and persists it.
  ///
  /// The order takes value copies of the cart's items and total; the cart
  /// itself is left exactly as it was (submission is a snapshot, not a
  /// transfer, so the same contents may be submitted again later). An empty
  /// cart submits fine and yields an order with zero items and total zero.
  ///
  /// Holds the cart's mutex while reading, so the snapshot can never observe
  /// a cart mid-mutation.
  #[instrument(name = "order_service::submit_order", skip(self), err(Display))]
  pub async fn submit_order(&self, username: &str) -> Result<Order> {
    let lock = self.locks.for_user(username);
    let _cart_guard = lock.lock().await;

    let user = self
      .users
      .find_by_username(username)
      .await?
      .ok_or_else(|| CoreError::UserNotFound(username.to_string()))?;

    let order = Order::from_cart(&user.cart);
    self.orders.save(order.clone()).await?;
    info!(
      order_id = %order.id,
      user_id = %user.id,
      units = order.items.len(),
      total = %order.total,
      "order submitted"
    );
    Ok(order)
  }

  /// All orders the user has ever submitted, in store-defined order.
  #[instrument(name = "order_service::order_history", skip(self), err(Display))]
  pub async fn order_history(&self, username: &str) -> Result<Vec<Order>> {
    let user = self
      .users
      .find_by_username(username)
      .await?
      .ok_or_else(|| CoreError::UserNotFound(username.to_string()))?;

    Ok(self.orders.find_by_user(user.id).await?)
  }
}
