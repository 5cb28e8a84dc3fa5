use std::collections::BTreeMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::texture_use::UseRepository,
    error::AppError,
    mapping::{
        self,
        texture::{map_texture, unmap_texture, unmap_texture_creation, StoredTexture},
    },
    model::texture::{Texture, TextureCreationParam, TextureSearchParam},
    store::{collections, Collection, Document, DocumentStore},
};

pub struct TextureRepository<'a> {
    db: &'a DatabaseConnection,
    textures: Collection<'a>,
}

impl<'a> TextureRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            textures: DocumentStore::new(db).collection(collections::TEXTURES),
        }
    }

    fn map(document: Document) -> Result<Texture, AppError> {
        let stored: StoredTexture = mapping::decode(collections::TEXTURES, document)?;
        Ok(map_texture(stored))
    }

    /// Gets every texture keyed by id.
    pub async fn get_raw(&self) -> Result<BTreeMap<String, Texture>, AppError> {
        self.textures
            .read_raw()
            .await?
            .into_iter()
            .map(|(id, document)| Ok((id, Self::map(document)?)))
            .collect()
    }

    /// Gets a texture by id.
    ///
    /// # Returns
    /// - `Ok(Texture)` - The mapped texture
    /// - `Err(AppError::NotFound)` - No texture with that id
    /// - `Err(AppError::Validation)` - Stored record cannot be mapped
    pub async fn get_by_id(&self, id: &str) -> Result<Texture, AppError> {
        let document = self
            .textures
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Texture {id} not found")))?;

        Self::map(document)
    }

    pub async fn exists(&self, id: &str) -> Result<bool, AppError> {
        Ok(self.textures.get(id).await?.is_some())
    }

    /// Textures matching every filter set in `params`, in id order.
    pub async fn search(&self, params: &TextureSearchParam) -> Result<Vec<Texture>, AppError> {
        Ok(self
            .get_raw()
            .await?
            .into_values()
            .filter(|texture| params.matches(texture))
            .collect())
    }

    /// Creates a texture under a store-assigned id and returns it as stored.
    pub async fn create(&self, params: &TextureCreationParam) -> Result<Texture, AppError> {
        let document = mapping::encode(collections::TEXTURES, &unmap_texture_creation(params))?;
        let id = self.textures.add(document).await?;

        self.get_by_id(&id).await
    }

    /// Writes `texture` under its id, replacing any previous record.
    pub async fn set(&self, texture: &Texture) -> Result<Texture, AppError> {
        let document = mapping::encode(collections::TEXTURES, &unmap_texture(texture))?;
        self.textures.set(&texture.id, document).await?;

        self.get_by_id(&texture.id).await
    }

    /// Deletes a texture together with its uses and their paths.
    ///
    /// The texture is removed first; a texture id that is not numeric cannot be
    /// referenced by any use, so no cascade runs for it.
    ///
    /// # Returns
    /// - `Ok(())` - Texture and dependents removed
    /// - `Err(AppError::NotFound)` - No texture with that id
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        if !self.textures.remove(id).await? {
            return Err(AppError::NotFound(format!("Texture {id} not found")));
        }

        if let Ok(texture_id) = id.parse::<i64>() {
            let removed = UseRepository::new(self.db)
                .delete_by_texture(texture_id)
                .await?;
            tracing::debug!("Deleted texture {} and {} of its uses", id, removed);
        }

        Ok(())
    }
}
