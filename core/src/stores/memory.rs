// storefront/core/src/stores/memory.rs

//! A shared-backend, in-process implementation of all four store seams.
//!
//! One [`MemoryStore`] value (cheaply cloneable, `Arc` inside) backs users,
//! catalog, carts, and orders out of a single map set, so reads always
//! observe the latest save of an entity. `CartStore::save` re-syncs the
//! embedded cart of the owning user, keeping the user/cart pair consistent
//! the way a relational backend would through its foreign key.
//!
//! Lock guards here are blocking (`parking_lot`) and are never held across
//! an `.await` point; none of these methods suspend while holding one.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::{Cart, Item, Order, User};

use super::{CartStore, ItemStore, OrderStore, UserStore};

#[derive(Debug, Default)]
struct Backend {
  users: HashMap<Uuid, User>,
  // username -> user id, kept in step with `users`
  usernames: HashMap<String, Uuid>,
  items: Vec<Item>,
  orders: Vec<Order>,
}

/// In-memory store for tests and embedding. Clones share the same backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
  inner: Arc<RwLock<Backend>>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Seeds the catalog with an item. Catalog entries are immutable once
  /// inserted; there is deliberately no update or remove.
  pub fn insert_item(&self, item: Item) -> Item {
    let mut backend = self.inner.write();
    backend.items.push(item.clone());
    item
  }
}

#[async_trait]
impl UserStore for MemoryStore {
  async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
    let backend = self.inner.read();
    let user = backend
      .usernames
      .get(username)
      .and_then(|id| backend.users.get(id))
      .cloned();
    Ok(user)
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
    Ok(self.inner.read().users.get(&id).cloned())
  }

  async fn save(&self, user: User) -> Result<(), StoreError> {
    let mut backend = self.inner.write();
    backend.usernames.insert(user.username.clone(), user.id);
    backend.users.insert(user.id, user);
    Ok(())
  }
}

#[async_trait]
impl ItemStore for MemoryStore {
  async fn find_by_id(&self, id: Uuid) -> Result<Option<Item>, StoreError> {
    Ok(self.inner.read().items.iter().find(|item| item.id == id).cloned())
  }

  async fn find_by_name(&self, name: &str) -> Result<Vec<Item>, StoreError> {
    let backend = self.inner.read();
    Ok(
      backend
        .items
        .iter()
        .filter(|item| item.name == name)
        .cloned()
        .collect(),
    )
  }

  async fn list(&self) -> Result<Vec<Item>, StoreError> {
    Ok(self.inner.read().items.clone())
  }
}

#[async_trait]
impl CartStore for MemoryStore {
  async fn save(&self, cart: Cart) -> Result<(), StoreError> {
    let mut backend = self.inner.write();
    match backend.users.get_mut(&cart.user_id) {
      Some(user) => {
        user.cart = cart;
        Ok(())
      }
      // A cart may never outlive its user; an orphan save is a backend bug.
      None => Err(StoreError::unavailable(anyhow!(
        "no owning user {} for cart {}",
        cart.user_id,
        cart.id
      ))),
    }
  }
}

#[async_trait]
impl OrderStore for MemoryStore {
  async fn save(&self, order: Order) -> Result<(), StoreError> {
    self.inner.write().orders.push(order);
    Ok(())
  }

  async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Order>, StoreError> {
    let backend = self.inner.read();
    Ok(
      backend
        .orders
        .iter()
        .filter(|order| order.user_id == user_id)
        .cloned()
        .collect(),
    )
  }
}
