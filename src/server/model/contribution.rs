//! Contribution domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserProfileDto;
use crate::server::model::texture::Texture;

/// Resolution a contribution was made for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    C32,
    C64,
}

/// Record of who drew a texture and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Contribution {
    pub id: String,
    /// Epoch milliseconds on the wire.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    #[schema(value_type = i64)]
    pub date: DateTime<Utc>,
    pub resolution: Resolution,
    #[serde(rename = "textureID")]
    pub texture_id: i64,
    /// Contributor user ids, in credit order.
    pub contributors: Vec<String>,
}

/// Body for recording a contribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ContributionCreationParam {
    /// Epoch milliseconds; defaults to now.
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    #[schema(value_type = Option<i64>)]
    pub date: Option<DateTime<Utc>>,
    pub resolution: Resolution,
    #[serde(rename = "textureID")]
    pub texture_id: i64,
    pub contributors: Vec<String>,
}

/// A contribution joined with its texture and contributor profiles.
///
/// `texture` is `None` when the referenced texture no longer exists; contributors
/// without a user document are left out.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ContributionWithRelations {
    #[serde(flatten)]
    pub contribution: Contribution,
    pub texture: Option<Texture>,
    #[serde(rename = "contributorProfiles")]
    pub contributor_profiles: Vec<UserProfileDto>,
}
