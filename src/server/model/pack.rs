//! Pack and submission domain models.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Packs and their submissions share this id.
pub type PackId = String;

/// Canonical pack record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Pack {
    pub id: PackId,
    pub name: String,
    pub tags: Vec<String>,
    pub resolution: u32,
}

/// Submission settings of a pack, stored under the pack's id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Submission {
    pub id: PackId,
    /// Pack whose textures are shown next to submissions for comparison.
    pub reference: Option<PackId>,
    pub channels: SubmissionChannels,
    /// Days between submission and results.
    pub time_to_results: u32,
    /// Role granted to contributors once a submission passes.
    pub contributor_role: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SubmissionChannels {
    pub submit: String,
    pub results: String,
}

/// Body for creating or replacing submission settings; the id comes from the path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SubmissionParam {
    pub reference: Option<PackId>,
    pub channels: SubmissionChannels,
    pub time_to_results: u32,
    pub contributor_role: Option<String>,
}

impl SubmissionParam {
    pub fn with_id(self, id: impl Into<PackId>) -> Submission {
        Submission {
            id: id.into(),
            reference: self.reference,
            channels: self.channels,
            time_to_results: self.time_to_results,
            contributor_role: self.contributor_role,
        }
    }
}

/// A pack merged with its submission settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PackAll {
    #[serde(flatten)]
    pub pack: Pack,
    pub submission: Submission,
}
