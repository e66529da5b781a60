// storefront/core/src/services/user_service.rs

//! Account creation and lookup. Creating a user also creates its cart; the
//! two are never persisted apart.

use std::sync::Arc;

use tracing::{debug, instrument};
use uuid::Uuid;

use crate::error::{CoreError, Result};
use crate::models::User;
use crate::stores::{CartStore, UserStore};

pub struct UserService {
  users: Arc<dyn UserStore>,
  carts: Arc<dyn CartStore>,
}

impl UserService {
  pub fn new(users: Arc<dyn UserStore>, carts: Arc<dyn CartStore>) -> Self {
    UserService { users, carts }
  }

  /// Creates a user together with its empty cart and persists both.
  ///
  /// Blank usernames and usernames already taken are rejected with
  /// [`CoreError::Validation`] before anything is written. Password handling
  /// belongs to the authentication layer and never reaches this core.
  #[instrument(name = "user_service::create_user", skip(self), err(Display))]
  pub async fn create_user(&self, username: &str) -> Result<User> {
    if username.trim().is_empty() {
      return Err(CoreError::Validation("username must not be blank".to_string()));
    }
    if self.users.find_by_username(username).await?.is_some() {
      return Err(CoreError::Validation(format!(
        "username '{}' is already taken",
        username
      )));
    }

    let user = User::new(username);
    // The user record embeds the cart, so it goes first; the cart upsert
    // then lands against an existing owner.
    self.users.save(user.clone()).await?;
    self.carts.save(user.cart.clone()).await?;
    debug!(user_id = %user.id, cart_id = %user.cart.id, "user created with empty cart");
    Ok(user)
  }

  #[instrument(name = "user_service::find_by_username", skip(self), err(Display))]
  pub async fn find_by_username(&self, username: &str) -> Result<User> {
    self
      .users
      .find_by_username(username)
      .await?
      .ok_or_else(|| CoreError::UserNotFound(username.to_string()))
  }

  #[instrument(name = "user_service::find_by_id", skip(self), err(Display))]
  pub async fn find_by_id(&self, id: Uuid) -> Result<User> {
    self
      .users
      .find_by_id(id)
      .await?
      .ok_or_else(|| CoreError::UserNotFound(id.to_string()))
  }
}
