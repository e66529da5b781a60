// tests/common/mod.rs
#![allow(dead_code)] // Allow unused helpers in this common test module

use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;
use rust_decimal::Decimal;
use storefront::{
  Cart, CartLocks, CartService, CartStore, CatalogService, Item, MemoryStore, Order, OrderService, OrderStore,
  StoreError, User, UserService,
};
use tracing::Level;
use uuid::Uuid;

pub const USERNAME: &str = "michael";

/// Everything a test needs: one shared in-memory backend plus the services
/// wired against it. The cart/order services share a lock registry, as they
/// would in a real deployment.
pub struct Fixture {
  pub store: MemoryStore,
  pub users: UserService,
  pub carts: Arc<CartService>,
  pub orders: Arc<OrderService>,
  pub catalog: CatalogService,
}

pub fn fixture() -> Fixture {
  setup_tracing();
  let store = Arc::new(MemoryStore::new());
  let locks = Arc::new(CartLocks::new());
  Fixture {
    store: (*store).clone(),
    users: UserService::new(store.clone(), store.clone()),
    carts: Arc::new(CartService::new(
      store.clone(),
      store.clone(),
      store.clone(),
      locks.clone(),
    )),
    orders: Arc::new(OrderService::new(store.clone(), store.clone(), locks)),
    catalog: CatalogService::new(store),
  }
}

pub async fn seed_user(fx: &Fixture, username: &str) -> User {
  fx.users.create_user(username).await.expect("seeding user")
}

pub fn seed_item(fx: &Fixture, name: &str, price: Decimal) -> Item {
  fx.store.insert_item(Item::new(name, price))
}

/// Whole-unit price helper; use `Decimal::new(cents, 2)` for fractional ones.
pub fn price(units: i64) -> Decimal {
  Decimal::from(units)
}

// --- Dead-backend stubs for store-outage tests ---

/// Cart backend whose saves always fail, as if the database were down.
pub struct FailingCartStore;

#[async_trait]
impl CartStore for FailingCartStore {
  async fn save(&self, _cart: Cart) -> Result<(), StoreError> {
    Err(StoreError::unavailable(anyhow!("cart backend offline")))
  }
}

/// Order backend whose every call fails, as if the database were down.
pub struct FailingOrderStore;

#[async_trait]
impl OrderStore for FailingOrderStore {
  async fn save(&self, _order: Order) -> Result<(), StoreError> {
    Err(StoreError::unavailable(anyhow!("order backend offline")))
  }

  async fn find_by_user(&self, _user_id: Uuid) -> Result<Vec<Order>, StoreError> {
    Err(StoreError::unavailable(anyhow!("order backend offline")))
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
