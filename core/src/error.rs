// storefront/core/src/error.rs

use anyhow::Error as AnyhowError;
use thiserror::Error;

/// Failure reported by a store backend (database down, connection refused,
/// and so on). This layer never retries or falls back; a store failure is
/// propagated unchanged to the caller.
#[derive(Debug, Error)]
pub enum StoreError {
  #[error("store unavailable: {source}")]
  Unavailable {
    #[source]
    source: AnyhowError,
  },
}

impl StoreError {
  /// Wraps any backend error into the opaque `Unavailable` variant.
  pub fn unavailable(err: impl Into<AnyhowError>) -> Self {
    StoreError::Unavailable { source: err.into() }
  }
}

/// The error taxonomy of the domain core.
///
/// Every variant is detected before any persistence side effect takes place,
/// so a failed operation never leaves a partially-updated cart behind.
#[derive(Debug, Error)]
pub enum CoreError {
  #[error("user not found: {0}")]
  UserNotFound(String),

  /// The id (or name) does not resolve in the catalog. Distinct from "item
  /// not present in this cart", which is not an error for removal.
  #[error("item not found: {0}")]
  ItemNotFound(String),

  /// Quantity below 1 supplied to add/remove. Rejected outright rather than
  /// treated as a no-op, so the cart total invariant stays auditable.
  #[error("invalid quantity: {0} (must be at least 1)")]
  InvalidQuantity(i64),

  #[error("validation error: {0}")]
  Validation(String),

  #[error("store error: {source}")]
  Store {
    #[from]
    source: StoreError,
  },
}

// Define a Result type alias for the crate
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
