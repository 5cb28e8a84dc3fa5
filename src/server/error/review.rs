use thiserror::Error;

use crate::server::{error::AppError, model::addon::ReviewStatus};

/// Rejected add-on review transitions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReviewError {
    /// The add-on was already approved or denied; it must be reopened first.
    #[error("Add-on is already {0:?}; reopen it before reviewing again")]
    AlreadyReviewed(ReviewStatus),

    /// Reopen was requested for an add-on that is still pending.
    #[error("Add-on is still pending review")]
    NotReviewed,

    /// A review decision must approve or deny.
    #[error("A review must approve or deny the add-on; use reopen to return it to pending")]
    PendingTarget,

    /// Denials need a reason the authors can act on.
    #[error("A reason is required when denying an add-on")]
    MissingReason,
}

/// State conflicts map to `Conflict`, malformed decisions to `Validation`.
impl From<ReviewError> for AppError {
    fn from(err: ReviewError) -> Self {
        match err {
            ReviewError::AlreadyReviewed(_) | ReviewError::NotReviewed => {
                AppError::Conflict(err.to_string())
            }
            ReviewError::PendingTarget | ReviewError::MissingReason => {
                AppError::Validation(err.to_string())
            }
        }
    }
}
