use std::collections::BTreeMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{texture::TextureRepository, texture_use::UseRepository},
    error::AppError,
    model::{
        permission::Principal,
        texture::{Texture, TextureCreationParam, TextureSearchParam},
        texture_use::TextureUse,
    },
    service::require_catalog_editor,
};

pub struct TextureService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TextureService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_raw(&self) -> Result<BTreeMap<String, Texture>, AppError> {
        TextureRepository::new(self.db).get_raw().await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Texture, AppError> {
        TextureRepository::new(self.db).get_by_id(id).await
    }

    pub async fn search(&self, params: &TextureSearchParam) -> Result<Vec<Texture>, AppError> {
        TextureRepository::new(self.db).search(params).await
    }

    /// Creates a texture; the name must not be blank.
    pub async fn create(
        &self,
        principal: &Principal,
        params: TextureCreationParam,
    ) -> Result<Texture, AppError> {
        require_catalog_editor(principal)?;
        if params.name.trim().is_empty() {
            return Err(AppError::Validation("Texture name cannot be empty".to_string()));
        }

        let texture = TextureRepository::new(self.db).create(&params).await?;
        tracing::info!("User {} created texture {}", principal.user_id, texture.id);

        Ok(texture)
    }

    /// Replaces name and tags of an existing texture.
    ///
    /// # Returns
    /// - `Ok(Texture)` - The texture as stored after the write
    /// - `Err(AppError::Permission)` - Principal may not edit the catalog
    /// - `Err(AppError::NotFound)` - No texture with that id
    /// - `Err(AppError::Validation)` - Blank name
    pub async fn update(
        &self,
        principal: &Principal,
        id: &str,
        params: TextureCreationParam,
    ) -> Result<Texture, AppError> {
        require_catalog_editor(principal)?;
        if params.name.trim().is_empty() {
            return Err(AppError::Validation("Texture name cannot be empty".to_string()));
        }

        let repo = TextureRepository::new(self.db);
        let existing = repo.get_by_id(id).await?;

        repo.set(&Texture {
            id: existing.id,
            name: params.name,
            tags: params.tags,
        })
        .await
    }

    /// Deletes a texture together with its uses and their paths.
    pub async fn delete(&self, principal: &Principal, id: &str) -> Result<(), AppError> {
        require_catalog_editor(principal)?;

        TextureRepository::new(self.db).delete(id).await?;
        tracing::info!("User {} deleted texture {}", principal.user_id, id);

        Ok(())
    }

    /// Uses of an existing texture.
    pub async fn get_uses(&self, id: &str) -> Result<Vec<TextureUse>, AppError> {
        let texture = self.get_by_id(id).await?;
        let Ok(texture_id) = texture.id.parse::<i64>() else {
            return Ok(Vec::new());
        };

        UseRepository::new(self.db).get_by_texture(texture_id).await
    }
}
