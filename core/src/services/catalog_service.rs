// storefront/core/src/services/catalog_service.rs

//! Catalog lookups. The catalog is read-only from this layer; items are
//! minted and retired elsewhere.

use std::sync::Arc;

use tracing::instrument;
use uuid::Uuid;

use crate::error::{CoreError, Result};
use crate::models::Item;
use crate::stores::ItemStore;

pub struct CatalogService {
  catalog: Arc<dyn ItemStore>,
}

impl CatalogService {
  pub fn new(catalog: Arc<dyn ItemStore>) -> Self {
    CatalogService { catalog }
  }

  #[instrument(name = "catalog_service::item_by_id", skip(self), err(Display))]
  pub async fn item_by_id(&self, id: Uuid) -> Result<Item> {
    self
      .catalog
      .find_by_id(id)
      .await?
      .ok_or_else(|| CoreError::ItemNotFound(id.to_string()))
  }

  /// All items carrying the given name. A name no item carries is reported
  /// as not-found rather than as an empty listing.
  #[instrument(name = "catalog_service::items_by_name", skip(self), err(Display))]
  pub async fn items_by_name(&self, name: &str) -> Result<Vec<Item>> {
    let items = self.catalog.find_by_name(name).await?;
    if items.is_empty() {
      return Err(CoreError::ItemNotFound(name.to_string()));
    }
    Ok(items)
  }

  #[instrument(name = "catalog_service::list_items", skip(self), err(Display))]
  pub async fn list_items(&self) -> Result<Vec<Item>> {
    Ok(self.catalog.list().await?)
  }
}
