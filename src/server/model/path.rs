//! Texture path domain models.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A file path at which a use's texture lives in the pack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Path {
    pub id: String,
    /// Id of the use this path belongs to.
    #[serde(rename = "use")]
    pub use_id: String,
    /// Filesystem-style path inside the pack.
    pub name: String,
    /// Whether the texture ships with an `.mcmeta` file.
    pub mcmeta: bool,
    /// Game versions the path applies to.
    pub versions: Vec<String>,
}

/// Body for creating or replacing a path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct InputPath {
    #[serde(rename = "use")]
    pub use_id: String,
    pub name: String,
    pub mcmeta: bool,
    pub versions: Vec<String>,
}
