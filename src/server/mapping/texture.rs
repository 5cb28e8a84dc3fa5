use serde::{Deserialize, Serialize};

use crate::server::model::texture::{Texture, TextureCreationParam};

/// Texture as historically stored, with its tags under `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyTexture {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: Vec<String>,
}

/// Stored creation shape; the id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyTextureCreation {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: Vec<String>,
}

/// Any texture document found in the store.
///
/// Part of the collection has already been migrated to the domain layout. Which
/// layout a document uses is decided once, here, by the presence of `type`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum StoredTexture {
    Legacy(LegacyTexture),
    Migrated(Texture),
}

pub fn map_texture(stored: StoredTexture) -> Texture {
    match stored {
        StoredTexture::Legacy(old) => Texture {
            id: old.id,
            name: old.name,
            tags: old.kind,
        },
        StoredTexture::Migrated(texture) => texture,
    }
}

pub fn map_textures(stored: Vec<StoredTexture>) -> Vec<Texture> {
    stored.into_iter().map(map_texture).collect()
}

/// Writes always use the legacy layout, which every reader of the store understands.
pub fn unmap_texture(texture: &Texture) -> LegacyTexture {
    LegacyTexture {
        id: texture.id.clone(),
        name: texture.name.clone(),
        kind: texture.tags.clone(),
    }
}

pub fn unmap_texture_creation(param: &TextureCreationParam) -> LegacyTextureCreation {
    LegacyTextureCreation {
        name: param.name.clone(),
        kind: param.tags.clone(),
    }
}
