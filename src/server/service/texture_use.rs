use std::collections::BTreeMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{path::PathRepository, texture_use::UseRepository},
    error::AppError,
    model::{
        path::Path,
        permission::Principal,
        texture_use::{TextureUse, TextureUseParam},
    },
    service::require_catalog_editor,
};

pub struct UseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_raw(&self) -> Result<BTreeMap<String, TextureUse>, AppError> {
        UseRepository::new(self.db).get_raw().await
    }

    /// Uses matching an id, or failing that a name.
    ///
    /// # Returns
    /// - `Ok(Vec<TextureUse>)` - At least one use
    /// - `Err(AppError::NotFound)` - Nothing matched
    pub async fn get_by_id_or_name(&self, id_or_name: &str) -> Result<Vec<TextureUse>, AppError> {
        let found = UseRepository::new(self.db)
            .get_by_id_or_name(id_or_name)
            .await?;

        if found.is_empty() {
            return Err(AppError::NotFound(format!("Use {id_or_name} not found")));
        }

        Ok(found)
    }

    /// Paths of every use matching an id or name.
    pub async fn get_paths_by_id_or_name(&self, id_or_name: &str) -> Result<Vec<Path>, AppError> {
        let paths = PathRepository::new(self.db);
        let mut found = Vec::new();

        for texture_use in self.get_by_id_or_name(id_or_name).await? {
            found.extend(paths.get_by_use(&texture_use.id).await?);
        }

        Ok(found)
    }

    pub async fn get_by_textures_and_edition(
        &self,
        texture_ids: &[i64],
        edition: &str,
    ) -> Result<Vec<TextureUse>, AppError> {
        UseRepository::new(self.db)
            .get_by_textures_and_edition(texture_ids, edition)
            .await
    }

    /// Creates a use under the id it carries.
    ///
    /// # Returns
    /// - `Ok(TextureUse)` - The use as stored
    /// - `Err(AppError::Conflict)` - A use with that id already exists
    /// - `Err(AppError::Validation)` - The referenced texture does not exist
    pub async fn create(
        &self,
        principal: &Principal,
        texture_use: TextureUse,
    ) -> Result<TextureUse, AppError> {
        require_catalog_editor(principal)?;
        let repo = UseRepository::new(self.db);

        if repo.exists(&texture_use.id).await? {
            return Err(AppError::Conflict(format!(
                "Texture use ID {} already exists",
                texture_use.id
            )));
        }

        repo.set(&texture_use).await
    }

    /// Replaces an existing use.
    ///
    /// # Returns
    /// - `Ok(TextureUse)` - The use as stored
    /// - `Err(AppError::NotFound)` - No use with that id
    pub async fn update(
        &self,
        principal: &Principal,
        id: &str,
        params: TextureUseParam,
    ) -> Result<TextureUse, AppError> {
        require_catalog_editor(principal)?;
        let repo = UseRepository::new(self.db);

        if !repo.exists(id).await? {
            return Err(AppError::NotFound(format!("Use {id} not found")));
        }

        repo.set(&params.with_id(id)).await
    }

    /// Deletes a use together with its paths.
    pub async fn delete(&self, principal: &Principal, id: &str) -> Result<(), AppError> {
        require_catalog_editor(principal)?;

        UseRepository::new(self.db).delete(id).await?;
        tracing::info!("User {} deleted use {}", principal.user_id, id);

        Ok(())
    }
}
