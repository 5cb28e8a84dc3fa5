use std::{collections::BTreeMap, sync::Arc};

use sea_orm::DatabaseConnection;

use crate::server::{
    data::mods::ModsRepository,
    error::AppError,
    model::mods::Mod,
    outbound::ModCatalog,
    store::Document,
};

/// Parses a catalog mod id.
///
/// Catalog ids are plain numbers; anything else would end up in the catalog URL.
fn catalog_id(id: &str) -> Result<u64, AppError> {
    id.parse::<u64>()
        .map_err(|_| AppError::Validation(format!("Catalog mod id must be numeric, got {id:?}")))
}

pub struct ModsService<'a> {
    db: &'a DatabaseConnection,
    catalog: Arc<dyn ModCatalog>,
}

impl<'a> ModsService<'a> {
    pub fn new(db: &'a DatabaseConnection, catalog: Arc<dyn ModCatalog>) -> Self {
        Self { db, catalog }
    }

    pub async fn get_raw(&self) -> Result<BTreeMap<String, Mod>, AppError> {
        ModsRepository::new(self.db).get_raw().await
    }

    pub async fn get_pack_versions(&self) -> Result<BTreeMap<String, Document>, AppError> {
        ModsRepository::new(self.db).get_pack_versions().await
    }

    /// Logo thumbnail of a mod from the external catalog.
    ///
    /// # Returns
    /// - `Ok(String)` - Thumbnail URL
    /// - `Err(AppError::Validation)` - `id` is not a numeric catalog id
    /// - `Err(AppError::NotFound)` - Catalog has no logo, or a `null` one, for the mod
    /// - `Err(AppError::Upstream)` - Catalog call failed
    pub async fn get_thumbnail(&self, id: &str) -> Result<String, AppError> {
        let response = self.catalog.get_mod(catalog_id(id)?).await?;

        response
            .thumbnail_url()
            .map(str::to_string)
            .ok_or_else(|| AppError::NotFound("No thumbnail found for this mod".to_string()))
    }

    /// Display name of a mod from the external catalog.
    ///
    /// # Returns
    /// - `Ok(String)` - Catalog name
    /// - `Err(AppError::Validation)` - `id` is not a numeric catalog id
    /// - `Err(AppError::NotFound)` - Catalog record carries no name
    /// - `Err(AppError::Upstream)` - Catalog call failed
    pub async fn get_catalog_name(&self, id: &str) -> Result<String, AppError> {
        let response = self.catalog.get_mod(catalog_id(id)?).await?;

        response
            .name()
            .map(str::to_string)
            .ok_or_else(|| AppError::NotFound("No name found for this mod".to_string()))
    }

    pub async fn get_name_in_database(&self, id: &str) -> Result<String, AppError> {
        ModsRepository::new(self.db).get_name(id).await
    }
}
