use std::collections::BTreeMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::path::PathRepository,
    error::AppError,
    mapping::{
        self,
        texture_use::{map_use, unmap_use, LegacyUse},
    },
    model::texture_use::TextureUse,
    store::{collections, Collection, Document, DocumentStore},
};

pub struct UseRepository<'a> {
    db: &'a DatabaseConnection,
    uses: Collection<'a>,
}

impl<'a> UseRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            uses: DocumentStore::new(db).collection(collections::USES),
        }
    }

    fn decode(document: Document) -> Result<LegacyUse, AppError> {
        Ok(mapping::decode(collections::USES, document)?)
    }

    fn map(document: Document) -> Result<TextureUse, AppError> {
        Ok(map_use(Self::decode(document)?)?)
    }

    async fn stored(&self) -> Result<Vec<LegacyUse>, AppError> {
        self.uses
            .read_raw()
            .await?
            .into_values()
            .map(Self::decode)
            .collect()
    }

    pub async fn get_raw(&self) -> Result<BTreeMap<String, TextureUse>, AppError> {
        self.uses
            .read_raw()
            .await?
            .into_iter()
            .map(|(id, document)| Ok((id, Self::map(document)?)))
            .collect()
    }

    /// # Returns
    /// - `Ok(TextureUse)` - The mapped use
    /// - `Err(AppError::NotFound)` - No use with that id
    /// - `Err(AppError::Validation)` - Stored use has no edition
    pub async fn get_by_id(&self, id: &str) -> Result<TextureUse, AppError> {
        let document = self
            .uses
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Use {id} not found")))?;

        Self::map(document)
    }

    pub async fn exists(&self, id: &str) -> Result<bool, AppError> {
        Ok(self.uses.get(id).await?.is_some())
    }

    /// Finds a use by id, falling back to every use with that exact name.
    ///
    /// An empty result is not an error here; the service decides.
    pub async fn get_by_id_or_name(&self, id_or_name: &str) -> Result<Vec<TextureUse>, AppError> {
        if let Some(document) = self.uses.get(id_or_name).await? {
            return Ok(vec![Self::map(document)?]);
        }

        Ok(self
            .get_raw()
            .await?
            .into_values()
            .filter(|texture_use| texture_use.name == id_or_name)
            .collect())
    }

    pub async fn get_by_texture(&self, texture_id: i64) -> Result<Vec<TextureUse>, AppError> {
        self.stored()
            .await?
            .into_iter()
            .filter(|stored| stored.texture_id == texture_id)
            .map(|stored| Ok(map_use(stored)?))
            .collect()
    }

    /// Uses belonging to any of `texture_ids` in the given edition.
    pub async fn get_by_textures_and_edition(
        &self,
        texture_ids: &[i64],
        edition: &str,
    ) -> Result<Vec<TextureUse>, AppError> {
        Ok(self
            .get_raw()
            .await?
            .into_values()
            .filter(|u| texture_ids.contains(&u.texture) && u.edition == edition)
            .collect())
    }

    /// Writes `texture_use` under its id after checking that its texture exists.
    ///
    /// # Returns
    /// - `Ok(TextureUse)` - The use as stored
    /// - `Err(AppError::Validation)` - Referenced texture does not exist
    pub async fn set(&self, texture_use: &TextureUse) -> Result<TextureUse, AppError> {
        let texture_id = texture_use.texture.to_string();
        let textures = DocumentStore::new(self.db).collection(collections::TEXTURES);
        if textures.get(&texture_id).await?.is_none() {
            return Err(AppError::Validation(format!(
                "Texture {texture_id} referenced by use {} does not exist",
                texture_use.id
            )));
        }

        let document = mapping::encode(collections::USES, &unmap_use(texture_use))?;
        self.uses.set(&texture_use.id, document).await?;

        self.get_by_id(&texture_use.id).await
    }

    /// Deletes a use and its paths.
    ///
    /// # Returns
    /// - `Ok(())` - Use and paths removed
    /// - `Err(AppError::NotFound)` - No use with that id
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        if !self.uses.remove(id).await? {
            return Err(AppError::NotFound(format!("Use {id} not found")));
        }

        PathRepository::new(self.db).delete_by_use(id).await?;

        Ok(())
    }

    /// Deletes every use of a texture along with their paths.
    ///
    /// Reads the stored layout directly so that uses without an edition are still
    /// cleaned up.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of uses removed
    pub async fn delete_by_texture(&self, texture_id: i64) -> Result<usize, AppError> {
        let paths = PathRepository::new(self.db);
        let mut removed = 0;

        for (id, document) in self.uses.read_raw().await? {
            let Ok(stored) = Self::decode(document) else {
                tracing::warn!("Skipping undecodable use {} during cascade delete", id);
                continue;
            };
            if stored.texture_id != texture_id {
                continue;
            }

            paths.delete_by_use(&stored.id).await?;
            if self.uses.remove(&stored.id).await? {
                removed += 1;
            }
        }

        Ok(removed)
    }
}
