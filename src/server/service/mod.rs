//! Service layer for business rules and orchestration.
//!
//! Services sit between the controllers and the repositories. They are the only
//! place where:
//!
//! - **Authorization** is decided, through the predicates in `model::permission`
//! - **Existence and uniqueness** are checked before writes
//! - **Review transitions** of add-ons are applied
//! - **Outbound effects** (email, CDN, mod catalog) are triggered
//!
//! Services hold no state between calls; every operation reads the store, computes
//! and writes back. Read-modify-write sequences are not atomic and the last write wins.

pub mod addon;
pub mod cloudflare;
pub mod contribution;
pub mod mods;
pub mod pack;
pub mod path;
pub mod submission;
pub mod texture;
pub mod texture_use;
pub mod user;

#[cfg(test)]
mod test;

use crate::server::{
    error::AppError,
    model::permission::{can_edit_catalog, Principal},
};

/// Fails with `Permission` unless `principal` may write catalog records.
pub(crate) fn require_catalog_editor(principal: &Principal) -> Result<(), AppError> {
    if !can_edit_catalog(principal) {
        return Err(AppError::Permission(
            "Administrator or Developer role required".to_string(),
        ));
    }
    Ok(())
}
