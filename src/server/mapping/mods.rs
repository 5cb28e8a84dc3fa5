use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::server::model::mods::{Mod, ModResourcePack};

/// Mod as stored.
///
/// `curse_url` and `git_repository` hold an empty string, or are missing, when the
/// mod has none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredMod {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub curse_url: Option<String>,
    pub resource_pack: StoredModResourcePack,
    #[serde(default)]
    pub blacklisted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredModResourcePack {
    #[serde(default)]
    pub blacklist: Vec<String>,
    #[serde(default)]
    pub versions: Vec<String>,
    #[serde(default)]
    pub git_repository: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Maps a stored mod.
///
/// Aliases become a set: duplicates and their stored order are not kept.
pub fn map_mod(stored: StoredMod) -> Mod {
    Mod {
        id: stored.id,
        name: stored.name,
        aliases: stored.aliases.into_iter().collect::<BTreeSet<_>>(),
        curse_url: non_empty(stored.curse_url),
        resource_pack: ModResourcePack {
            blacklist: stored.resource_pack.blacklist,
            versions: stored.resource_pack.versions,
            git_repository: non_empty(stored.resource_pack.git_repository),
        },
        blacklisted: stored.blacklisted,
    }
}

pub fn map_mods(stored: Vec<StoredMod>) -> Vec<Mod> {
    stored.into_iter().map(map_mod).collect()
}

pub fn unmap_mod(m: &Mod) -> StoredMod {
    StoredMod {
        id: m.id.clone(),
        name: m.name.clone(),
        aliases: m.aliases.iter().cloned().collect(),
        curse_url: Some(m.curse_url.clone().unwrap_or_default()),
        resource_pack: StoredModResourcePack {
            blacklist: m.resource_pack.blacklist.clone(),
            versions: m.resource_pack.versions.clone(),
            git_repository: Some(m.resource_pack.git_repository.clone().unwrap_or_default()),
        },
        blacklisted: m.blacklisted,
    }
}
