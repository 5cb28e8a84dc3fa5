use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::server::{
    error::mapping::MappingError,
    model::contribution::{Contribution, Resolution},
};

/// Contribution as stored: epoch milliseconds, resolution under `res`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyContribution {
    pub id: String,
    pub date: i64,
    pub res: Resolution,
    #[serde(rename = "textureID")]
    pub texture_id: i64,
    pub contributors: Vec<String>,
}

/// Stored creation shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyContributionCreation {
    pub date: i64,
    pub res: Resolution,
    #[serde(rename = "textureID")]
    pub texture_id: i64,
    pub contributors: Vec<String>,
}

/// # Returns
/// - `Ok(Contribution)` - Mapped contribution
/// - `Err(MappingError::InvalidTimestamp)` - `date` is out of range
pub fn map_contribution(stored: LegacyContribution) -> Result<Contribution, MappingError> {
    let date = DateTime::<Utc>::from_timestamp_millis(stored.date).ok_or_else(|| {
        MappingError::InvalidTimestamp {
            id: stored.id.clone(),
            value: stored.date,
        }
    })?;

    Ok(Contribution {
        id: stored.id,
        date,
        resolution: stored.res,
        texture_id: stored.texture_id,
        contributors: stored.contributors,
    })
}

pub fn map_contributions(
    stored: Vec<LegacyContribution>,
) -> Result<Vec<Contribution>, MappingError> {
    stored.into_iter().map(map_contribution).collect()
}

pub fn unmap_contribution(contribution: &Contribution) -> LegacyContribution {
    LegacyContribution {
        id: contribution.id.clone(),
        date: contribution.date.timestamp_millis(),
        res: contribution.resolution,
        texture_id: contribution.texture_id,
        contributors: contribution.contributors.clone(),
    }
}

pub fn unmap_contribution_creation(
    date: DateTime<Utc>,
    resolution: Resolution,
    texture_id: i64,
    contributors: Vec<String>,
) -> LegacyContributionCreation {
    LegacyContributionCreation {
        date: date.timestamp_millis(),
        res: resolution,
        texture_id,
        contributors,
    }
}
