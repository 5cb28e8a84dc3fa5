use std::collections::BTreeMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::submission::SubmissionRepository,
    error::AppError,
    model::{
        pack::{PackAll, PackId, Submission, SubmissionParam},
        permission::Principal,
    },
    service::require_catalog_editor,
};

pub struct SubmissionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubmissionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_raw(&self) -> Result<BTreeMap<PackId, Submission>, AppError> {
        SubmissionRepository::new(self.db).get_raw().await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Submission, AppError> {
        SubmissionRepository::new(self.db).get_by_id(id).await
    }

    /// Every submission with its pack; submissions without a readable pack are omitted.
    pub async fn get_every_pack(&self) -> Result<BTreeMap<PackId, PackAll>, AppError> {
        SubmissionRepository::new(self.db).get_every_pack().await
    }

    /// Enables submissions for a pack.
    ///
    /// # Returns
    /// - `Ok(Submission)` - Settings as stored
    /// - `Err(AppError::Permission)` - Principal may not edit the catalog
    /// - `Err(AppError::Conflict)` - The pack already accepts submissions
    pub async fn create(
        &self,
        principal: &Principal,
        id: &str,
        params: SubmissionParam,
    ) -> Result<Submission, AppError> {
        require_catalog_editor(principal)?;
        let repo = SubmissionRepository::new(self.db);

        if repo.exists(id).await? {
            return Err(AppError::Conflict(format!(
                "Pack {id} already accepts submissions"
            )));
        }

        repo.set(id, params).await
    }

    /// Replaces the submission settings of a pack.
    ///
    /// # Returns
    /// - `Ok(Submission)` - Settings as stored
    /// - `Err(AppError::NotFound)` - The pack does not accept submissions
    pub async fn update(
        &self,
        principal: &Principal,
        id: &str,
        params: SubmissionParam,
    ) -> Result<Submission, AppError> {
        require_catalog_editor(principal)?;
        let repo = SubmissionRepository::new(self.db);

        if !repo.exists(id).await? {
            return Err(AppError::NotFound(format!("Submission {id} not found")));
        }

        repo.set(id, params).await
    }

    pub async fn delete(&self, principal: &Principal, id: &str) -> Result<(), AppError> {
        require_catalog_editor(principal)?;

        SubmissionRepository::new(self.db).delete(id).await?;
        tracing::info!("User {} disabled submissions for pack {}", principal.user_id, id);

        Ok(())
    }
}
