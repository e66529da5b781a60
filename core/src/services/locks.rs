// storefront/core/src/services/locks.rs

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::Mutex as AsyncMutex;

/// Registry of per-cart mutexes, keyed by username (users and carts are 1:1).
///
/// Every operation that reads-then-writes a cart (add, remove, and the
/// order-submission snapshot) takes the cart's mutex for its whole
/// read-modify-write, so two operations against the same cart serialize
/// while carts of different users proceed in parallel.
///
/// The registry map itself is guarded by a blocking `parking_lot` mutex; the
/// guard is dropped before the caller awaits the returned async mutex.
/// Entries are never evicted, which bounds the map by the number of distinct
/// users operated on in this process.
#[derive(Debug, Default)]
pub struct CartLocks {
  locks: Mutex<HashMap<String, Arc<AsyncMutex<()>>>>,
}

impl CartLocks {
  pub fn new() -> Self {
    Self::default()
  }

  /// Returns the mutex for the given user's cart, minting it on first use.
  pub fn for_user(&self, username: &str) -> Arc<AsyncMutex<()>> {
    let mut locks = self.locks.lock();
    locks
      .entry(username.to_string())
      .or_insert_with(|| Arc::new(AsyncMutex::new(())))
      .clone()
  }
}
