// storefront/core/src/stores/mod.rs

//! Persistence seams consumed by the domain core.
//!
//! The core does not implement storage; callers inject anything that
//! satisfies these traits (a relational backend, a remote service, the
//! bundled [`MemoryStore`]). Absence of an entity is signalled with `None` /
//! an empty list; only genuine backend failure surfaces as [`StoreError`].
//! All stores are expected to provide at-least read-your-writes consistency
//! for a single entity.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::{Cart, Item, Order, User};

pub mod memory;

pub use memory::MemoryStore;

/// Account storage. Usernames are unique.
#[async_trait]
pub trait UserStore: Send + Sync {
  async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;
  async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;
  async fn save(&self, user: User) -> Result<(), StoreError>;
}

/// The catalog. Read-only from the core's perspective.
#[async_trait]
pub trait ItemStore: Send + Sync {
  async fn find_by_id(&self, id: Uuid) -> Result<Option<Item>, StoreError>;
  /// All items carrying the given name; possibly empty.
  async fn find_by_name(&self, name: &str) -> Result<Vec<Item>, StoreError>;
  async fn list(&self) -> Result<Vec<Item>, StoreError>;
}

/// Cart storage. Upsert by cart identity.
#[async_trait]
pub trait CartStore: Send + Sync {
  async fn save(&self, cart: Cart) -> Result<(), StoreError>;
}

/// Order storage. Append-only from the core's perspective.
#[async_trait]
pub trait OrderStore: Send + Sync {
  async fn save(&self, order: Order) -> Result<(), StoreError>;
  async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Order>, StoreError>;
}
