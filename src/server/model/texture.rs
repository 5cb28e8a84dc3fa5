//! Texture domain models.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A texture of the resource pack, described by name and tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Texture {
    /// Store-assigned numeric id, as a string.
    pub id: String,
    pub name: String,
    /// Ordered tags such as `block` or `gui`.
    pub tags: Vec<String>,
}

/// Body for creating or replacing a texture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TextureCreationParam {
    pub name: String,
    pub tags: Vec<String>,
}

/// Optional filters for texture search. Both filters must match when both are given.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct TextureSearchParam {
    /// Case-insensitive substring of the texture name.
    pub name: Option<String>,
    /// Exact tag, compared case-insensitively.
    pub tag: Option<String>,
}

impl TextureSearchParam {
    pub fn matches(&self, texture: &Texture) -> bool {
        let name_ok = self.name.as_ref().map_or(true, |name| {
            texture
                .name
                .to_lowercase()
                .contains(&name.to_lowercase())
        });
        let tag_ok = self.tag.as_ref().map_or(true, |tag| {
            texture.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
        });

        name_ok && tag_ok
    }
}
