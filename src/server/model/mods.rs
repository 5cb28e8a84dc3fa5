//! Mod catalog domain models.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A mod the pack provides textures for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Mod {
    /// CurseForge project id, or a custom id for mods not hosted there.
    pub id: String,
    pub name: String,
    /// Short names such as `IC2`.
    pub aliases: BTreeSet<String>,
    /// CurseForge project page, when the mod is hosted there.
    pub curse_url: Option<String>,
    pub resource_pack: ModResourcePack,
    /// A blacklisted mod gets no textures at all.
    pub blacklisted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ModResourcePack {
    /// Game versions without textures.
    pub blacklist: Vec<String>,
    /// Game versions supported.
    pub versions: Vec<String>,
    /// Repository holding the mod's textures.
    pub git_repository: Option<String>,
}

/// Subset of a CurseForge `GET /v1/mods/{id}` answer.
///
/// Every level is optional because the upstream API returns `null` for missing
/// logos and has been seen returning records without a name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogModResponse {
    pub data: Option<CatalogMod>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogMod {
    pub name: Option<String>,
    pub logo: Option<CatalogLogo>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogLogo {
    #[serde(rename = "thumbnailUrl")]
    pub thumbnail_url: Option<String>,
}

impl CatalogModResponse {
    pub fn name(&self) -> Option<&str> {
        self.data
            .as_ref()
            .and_then(|d| d.name.as_deref())
            .filter(|name| !name.is_empty())
    }

    pub fn thumbnail_url(&self) -> Option<&str> {
        self.data
            .as_ref()
            .and_then(|d| d.logo.as_ref())
            .and_then(|logo| logo.thumbnail_url.as_deref())
            .filter(|url| !url.is_empty())
    }
}
