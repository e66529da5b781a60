// storefront/core/src/services/mod.rs

//! The operations of the domain core, one service per component.
//!
//! Services hold no state of their own beyond injected store handles (and
//! the shared per-cart lock registry); all entity state lives behind the
//! store seams.

pub mod cart_service;
pub mod catalog_service;
pub mod locks;
pub mod order_service;
pub mod user_service;

pub use cart_service::CartService;
pub use catalog_service::CatalogService;
pub use locks::CartLocks;
pub use order_service::OrderService;
pub use user_service::UserService;
