use serde::{Deserialize, Serialize};

use crate::server::{error::mapping::MappingError, model::texture_use::TextureUse};

/// Use as stored: name under `textureUseName`, a list of editions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyUse {
    pub id: String,
    #[serde(rename = "textureID")]
    pub texture_id: i64,
    #[serde(rename = "textureUseName")]
    pub name: String,
    pub editions: Vec<String>,
}

/// Maps a stored use to the domain shape.
///
/// Only the first edition is kept. Later editions are dropped and cannot be
/// recovered by [`unmap_use`].
///
/// # Returns
/// - `Ok(TextureUse)` - Mapped use
/// - `Err(MappingError::MissingEdition)` - Stored `editions` list is empty
pub fn map_use(stored: LegacyUse) -> Result<TextureUse, MappingError> {
    let edition = stored
        .editions
        .into_iter()
        .next()
        .ok_or_else(|| MappingError::MissingEdition {
            use_id: stored.id.clone(),
        })?;

    Ok(TextureUse {
        id: stored.id,
        name: stored.name,
        texture: stored.texture_id,
        edition,
    })
}

pub fn map_uses(stored: Vec<LegacyUse>) -> Result<Vec<TextureUse>, MappingError> {
    stored.into_iter().map(map_use).collect()
}

pub fn unmap_use(texture_use: &TextureUse) -> LegacyUse {
    LegacyUse {
        id: texture_use.id.clone(),
        texture_id: texture_use.texture,
        name: texture_use.name.clone(),
        editions: vec![texture_use.edition.clone()],
    }
}
