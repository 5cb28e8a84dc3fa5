//! Texture use domain models.
//!
//! A use is one place a texture appears in an edition of the game. Its `texture`
//! must reference an existing texture; the repository checks this on write.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TextureUse {
    /// Use id, conventionally the texture id followed by a letter (`"12a"`).
    pub id: String,
    pub name: String,
    /// Id of the texture this use belongs to.
    pub texture: i64,
    /// Game edition (`java`, `bedrock`).
    pub edition: String,
}

/// Body for replacing a use; the id comes from the path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TextureUseParam {
    pub name: String,
    pub texture: i64,
    pub edition: String,
}

impl TextureUseParam {
    pub fn with_id(self, id: impl Into<String>) -> TextureUse {
        TextureUse {
            id: id.into(),
            name: self.name,
            texture: self.texture,
            edition: self.edition,
        }
    }
}
