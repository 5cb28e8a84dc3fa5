use std::collections::{BTreeMap, HashSet};

use sea_orm::DatabaseConnection;

use crate::server::{
    data::contribution::ContributionRepository,
    error::AppError,
    model::{
        contribution::{Contribution, ContributionCreationParam, ContributionWithRelations},
        permission::Principal,
        user::User,
    },
    service::require_catalog_editor,
};

pub struct ContributionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContributionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_raw(&self) -> Result<BTreeMap<String, Contribution>, AppError> {
        ContributionRepository::new(self.db).get_raw().await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Contribution, AppError> {
        ContributionRepository::new(self.db).get_by_id(id).await
    }

    pub async fn get_by_texture(&self, texture_id: i64) -> Result<Vec<Contribution>, AppError> {
        ContributionRepository::new(self.db)
            .get_by_texture(texture_id)
            .await
    }

    pub async fn get_all_with_relations(&self) -> Result<Vec<ContributionWithRelations>, AppError> {
        ContributionRepository::new(self.db)
            .get_all_with_relations()
            .await
    }

    pub async fn get_contributors(&self, id: &str) -> Result<Vec<User>, AppError> {
        ContributionRepository::new(self.db)
            .get_contributors(id)
            .await
    }

    /// Records a contribution credited to at least one contributor.
    ///
    /// Duplicate contributor ids are collapsed, keeping the first occurrence.
    pub async fn create(
        &self,
        principal: &Principal,
        mut params: ContributionCreationParam,
    ) -> Result<Contribution, AppError> {
        require_catalog_editor(principal)?;

        let mut seen = HashSet::new();
        params.contributors.retain(|id| seen.insert(id.clone()));

        if params.contributors.is_empty() {
            return Err(AppError::Validation(
                "A contribution needs at least one contributor".to_string(),
            ));
        }

        ContributionRepository::new(self.db).create(params).await
    }

    pub async fn delete(&self, principal: &Principal, id: &str) -> Result<(), AppError> {
        require_catalog_editor(principal)?;

        ContributionRepository::new(self.db).delete(id).await?;
        tracing::info!("User {} deleted contribution {}", principal.user_id, id);

        Ok(())
    }
}
