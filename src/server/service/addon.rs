use std::collections::BTreeMap;

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::addon::AddonRepository,
    error::AppError,
    model::{
        addon::{Addon, AddonCreationParam, AddonReviewBody, ReviewStatus},
        permission::{can_modify_addon, can_review_addon, can_view_addon, Principal},
    },
};

pub struct AddonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AddonService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Every add-on keyed by id, whatever its review state; staff only.
    pub async fn get_raw(&self, viewer: &Principal) -> Result<BTreeMap<String, Addon>, AppError> {
        if !can_review_addon(viewer) {
            return Err(AppError::Permission(
                "Administrator or Moderator role required".to_string(),
            ));
        }

        AddonRepository::new(self.db).get_raw().await
    }

    /// One add-on as seen by `viewer`.
    ///
    /// Pending and denied add-ons are reported as missing unless the viewer is one of
    /// their authors or staff, so an unreviewed id does not reveal that it exists.
    ///
    /// # Returns
    /// - `Ok(Addon)` - The add-on
    /// - `Err(AppError::NotFound)` - No such add-on, or not visible to `viewer`
    pub async fn get_by_id(
        &self,
        id: &str,
        viewer: Option<&Principal>,
    ) -> Result<Addon, AppError> {
        let addon = AddonRepository::new(self.db).get_by_id(id).await?;

        if !can_view_addon(viewer, &addon) {
            return Err(AppError::NotFound(format!("Add-on {id} not found")));
        }

        Ok(addon)
    }

    /// Add-ons in one review state.
    ///
    /// Approved add-ons are public. Pending and denied ones are listed only to staff.
    ///
    /// # Returns
    /// - `Ok(Vec<Addon>)` - Matching add-ons
    /// - `Err(AppError::Permission)` - Non-approved listing requested by non-staff
    pub async fn get_by_status(
        &self,
        status: ReviewStatus,
        viewer: Option<&Principal>,
    ) -> Result<Vec<Addon>, AppError> {
        if status != ReviewStatus::Approved && !viewer.is_some_and(can_review_addon) {
            return Err(AppError::Permission(
                "Only staff can list add-ons awaiting or failing review".to_string(),
            ));
        }

        AddonRepository::new(self.db).get_by_status(status).await
    }

    fn check_body(principal: &Principal, params: &AddonCreationParam) -> Result<(), AppError> {
        if !params.lists_author(&principal.user_id) {
            return Err(AppError::Validation(
                "Addon author must include the authed user".to_string(),
            ));
        }
        if params.name.trim().is_empty() {
            return Err(AppError::Validation("Addon name cannot be empty".to_string()));
        }
        Ok(())
    }

    async fn check_name_free(&self, name: &str, own_id: Option<&str>) -> Result<(), AppError> {
        let existing = AddonRepository::new(self.db).find_by_name(name).await?;

        match existing {
            Some(addon) if Some(addon.id.as_str()) != own_id => Err(AppError::Conflict(format!(
                "An add-on named {} already exists",
                addon.name
            ))),
            _ => Ok(()),
        }
    }

    /// Submits a new add-on for review.
    ///
    /// # Returns
    /// - `Ok(Addon)` - The pending add-on
    /// - `Err(AppError::Validation)` - Requester not among the authors, or blank name
    /// - `Err(AppError::Conflict)` - Name already taken
    pub async fn create(
        &self,
        principal: &Principal,
        params: AddonCreationParam,
    ) -> Result<Addon, AppError> {
        Self::check_body(principal, &params)?;
        self.check_name_free(&params.name, None).await?;

        let addon = AddonRepository::new(self.db).create(params).await?;
        tracing::info!("User {} submitted add-on {}", principal.user_id, addon.id);

        Ok(addon)
    }

    /// Edits the content of a pending add-on.
    ///
    /// The requester must be listed in the new body's authors. Editing someone else's
    /// add-on needs a staff role. Reviewed add-ons must be reopened first.
    ///
    /// # Returns
    /// - `Ok(Addon)` - The add-on as stored, still pending
    /// - `Err(AppError::Validation)` - Requester not among the new authors
    /// - `Err(AppError::NotFound)` - No add-on with that id
    /// - `Err(AppError::Permission)` - Not an author and not staff
    /// - `Err(AppError::Conflict)` - Add-on already reviewed, or name taken
    pub async fn update(
        &self,
        principal: &Principal,
        id: &str,
        params: AddonCreationParam,
    ) -> Result<Addon, AppError> {
        Self::check_body(principal, &params)?;

        let repo = AddonRepository::new(self.db);
        let existing = repo.get_by_id(id).await?;

        if !can_modify_addon(principal, &existing) {
            return Err(AppError::Permission(
                "Only authors or staff can edit this add-on".to_string(),
            ));
        }
        if existing.approval.status.is_terminal() {
            return Err(AppError::Conflict(format!(
                "Add-on {} has already been reviewed; reopen it before editing",
                id
            )));
        }
        self.check_name_free(&params.name, Some(id)).await?;

        repo.set(&Addon {
            id: existing.id,
            name: params.name,
            description: params.description,
            authors: params.authors,
            options: params.options,
            downloads: params.downloads,
            approval: existing.approval,
            last_updated: Utc::now(),
        })
        .await
    }

    /// Deletes an add-on; same authorization as [`Self::update`], in any review state.
    pub async fn delete(&self, principal: &Principal, id: &str) -> Result<(), AppError> {
        let repo = AddonRepository::new(self.db);
        let existing = repo.get_by_id(id).await?;

        if !can_modify_addon(principal, &existing) {
            return Err(AppError::Permission(
                "Only authors or staff can delete this add-on".to_string(),
            ));
        }

        repo.delete(id).await?;
        tracing::info!("User {} deleted add-on {}", principal.user_id, id);

        Ok(())
    }

    /// Approves or denies a pending add-on.
    ///
    /// # Returns
    /// - `Ok(Addon)` - The reviewed add-on
    /// - `Err(AppError::Permission)` - Reviewer is not staff
    /// - `Err(AppError::NotFound)` - No add-on with that id
    /// - `Err(AppError::Conflict)` - Add-on already reviewed
    /// - `Err(AppError::Validation)` - Target is `pending`, or denial without a reason
    pub async fn review(
        &self,
        principal: &Principal,
        id: &str,
        decision: AddonReviewBody,
    ) -> Result<Addon, AppError> {
        if !can_review_addon(principal) {
            return Err(AppError::Permission(
                "Administrator or Moderator role required to review add-ons".to_string(),
            ));
        }

        let repo = AddonRepository::new(self.db);
        let mut addon = repo.get_by_id(id).await?;
        addon.approval = addon.approval.review(&decision, &principal.user_id)?;

        let addon = repo.set(&addon).await?;
        tracing::info!(
            "User {} reviewed add-on {}: {:?}",
            principal.user_id,
            id,
            addon.approval.status
        );

        Ok(addon)
    }

    /// Moves a reviewed add-on back to pending so it can be edited and reviewed again.
    ///
    /// # Returns
    /// - `Ok(Addon)` - The pending add-on
    /// - `Err(AppError::Permission)` - Not an author and not staff
    /// - `Err(AppError::Conflict)` - Add-on is already pending
    pub async fn reopen(&self, principal: &Principal, id: &str) -> Result<Addon, AppError> {
        let repo = AddonRepository::new(self.db);
        let mut addon = repo.get_by_id(id).await?;

        if !can_modify_addon(principal, &addon) {
            return Err(AppError::Permission(
                "Only authors or staff can reopen this add-on".to_string(),
            ));
        }

        addon.approval = addon.approval.reopen(&principal.user_id)?;

        let addon = repo.set(&addon).await?;
        tracing::info!("User {} reopened add-on {}", principal.user_id, id);

        Ok(addon)
    }
}
