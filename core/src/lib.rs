// src/lib.rs

//! Storefront: the domain core of a small online-store backend.
//!
//! The crate owns the business rules with non-trivial invariants:
//!  - Per-user carts whose item collection is an ordered multiset (one entry
//!    per unit held) with a cached running total that always equals the sum
//!    of the item prices.
//!  - Atomic conversion of a cart into an immutable [`Order`] snapshot,
//!    appended to the user's order history.
//!  - The user/cart association: every user owns exactly one cart from the
//!    moment it is created.
//!  - Read-only catalog lookup by id and by name.
//!
//! Everything around the core (HTTP shaping, authentication, and actual
//! storage) is a collaborator injected through the traits in [`stores`].
//! All monetary arithmetic uses exact decimals ([`rust_decimal::Decimal`]),
//! never binary floating point.
//!
//! Mutations of one cart are serialized through [`CartLocks`], so concurrent
//! operations against the same user cannot lose updates, while different
//! users' carts proceed independently.

pub mod error;
pub mod models;
pub mod services;
pub mod stores;

// --- Re-exports for the Public API ---

pub use crate::error::{CoreError, Result, StoreError};

pub use crate::models::{Cart, Item, Order, User};

pub use crate::services::{CartLocks, CartService, CatalogService, OrderService, UserService};

pub use crate::stores::{CartStore, ItemStore, MemoryStore, OrderStore, UserStore};
