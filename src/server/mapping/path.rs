use serde::{Deserialize, Serialize};

use crate::server::model::path::{InputPath, Path};

/// Path as stored: use id under `useID`, file path under `path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyPath {
    pub id: String,
    #[serde(rename = "useID")]
    pub use_id: String,
    pub path: String,
    pub versions: Vec<String>,
    pub mcmeta: bool,
}

/// Stored creation shape; the id is either assigned by the store or the key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyPathCreation {
    #[serde(rename = "useID")]
    pub use_id: String,
    pub path: String,
    pub versions: Vec<String>,
    pub mcmeta: bool,
}

pub fn map_path(stored: LegacyPath) -> Path {
    Path {
        id: stored.id,
        use_id: stored.use_id,
        name: stored.path,
        mcmeta: stored.mcmeta,
        versions: stored.versions,
    }
}

pub fn map_paths(stored: Vec<LegacyPath>) -> Vec<Path> {
    stored.into_iter().map(map_path).collect()
}

pub fn unmap_path(path: &InputPath) -> LegacyPathCreation {
    LegacyPathCreation {
        use_id: path.use_id.clone(),
        path: path.name.clone(),
        versions: path.versions.clone(),
        mcmeta: path.mcmeta,
    }
}
