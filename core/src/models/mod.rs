// storefront/core/src/models/mod.rs

//! Data structures representing the store's domain entities.

pub mod cart;
pub mod item;
pub mod order;
pub mod user;

// Re-export the model structs for convenient access
pub use cart::Cart;
pub use item::Item;
pub use order::Order;
pub use user::User;
