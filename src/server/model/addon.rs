//! Add-on domain models and the review state machine.
//!
//! ```text
//!            review(approved)
//!          ┌──────────────────▶ approved ─┐
//! pending ─┤                              ├─ reopen ─▶ pending
//!          └──────────────────▶ denied ───┘
//!            review(denied, reason)
//! ```
//!
//! `approved` and `denied` are terminal for `review`; only an explicit `reopen`
//! leads back to `pending`. Who may trigger each transition is decided in
//! [`crate::server::model::permission`], not here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::server::error::review::ReviewError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Pending,
    Approved,
    Denied,
}

impl ReviewStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Approved | Self::Denied)
    }
}

/// Review state of an add-on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AddonApproval {
    pub status: ReviewStatus,
    /// User who made the last transition; `None` for a fresh submission.
    pub author: Option<String>,
    /// Why the add-on was denied. Set only in the `denied` state.
    pub reason: Option<String>,
}

impl AddonApproval {
    /// State of a newly created add-on.
    pub fn pending() -> Self {
        Self {
            status: ReviewStatus::Pending,
            author: None,
            reason: None,
        }
    }

    /// Applies a review decision made by `reviewer`.
    ///
    /// # Returns
    /// - `Ok(AddonApproval)` - The new terminal state
    /// - `Err(ReviewError::AlreadyReviewed)` - Current state is terminal
    /// - `Err(ReviewError::PendingTarget)` - Decision targets `pending`
    /// - `Err(ReviewError::MissingReason)` - Denial without a non-blank reason
    pub fn review(&self, decision: &AddonReviewBody, reviewer: &str) -> Result<Self, ReviewError> {
        if self.status.is_terminal() {
            return Err(ReviewError::AlreadyReviewed(self.status));
        }

        let reason = match decision.status {
            ReviewStatus::Pending => return Err(ReviewError::PendingTarget),
            ReviewStatus::Approved => None,
            ReviewStatus::Denied => {
                let reason = decision
                    .reason
                    .as_deref()
                    .map(str::trim)
                    .filter(|r| !r.is_empty())
                    .ok_or(ReviewError::MissingReason)?;
                Some(reason.to_string())
            }
        };

        Ok(Self {
            status: decision.status,
            author: Some(reviewer.to_string()),
            reason,
        })
    }

    /// Moves a terminal state back to `pending` on behalf of `by`.
    ///
    /// # Returns
    /// - `Ok(AddonApproval)` - Pending state with the previous reason cleared
    /// - `Err(ReviewError::NotReviewed)` - Add-on is already pending
    pub fn reopen(&self, by: &str) -> Result<Self, ReviewError> {
        if !self.status.is_terminal() {
            return Err(ReviewError::NotReviewed);
        }

        Ok(Self {
            status: ReviewStatus::Pending,
            author: Some(by.to_string()),
            reason: None,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AddonOptions {
    pub tags: Vec<String>,
    /// Whether comments are enabled on the add-on page.
    pub comments: bool,
    /// Whether the add-on requires OptiFine.
    pub optifine: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AddonDownload {
    /// Label of the download source.
    pub key: String,
    pub links: Vec<String>,
}

/// A community add-on and its review state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Addon {
    pub id: String,
    pub name: String,
    pub description: String,
    /// User ids credited for the add-on.
    pub authors: Vec<String>,
    pub options: AddonOptions,
    pub downloads: Vec<AddonDownload>,
    pub approval: AddonApproval,
    /// Epoch milliseconds on the wire.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    #[schema(value_type = i64)]
    pub last_updated: DateTime<Utc>,
}

/// Body for creating or editing an add-on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AddonCreationParam {
    pub name: String,
    pub description: String,
    pub authors: Vec<String>,
    #[serde(default)]
    pub options: AddonOptions,
    #[serde(default)]
    pub downloads: Vec<AddonDownload>,
}

impl AddonCreationParam {
    pub fn lists_author(&self, user_id: &str) -> bool {
        self.authors.iter().any(|author| author == user_id)
    }
}

/// Review decision submitted by staff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AddonReviewBody {
    /// `approved` or `denied`.
    pub status: ReviewStatus,
    /// Mandatory when denying.
    pub reason: Option<String>,
}
