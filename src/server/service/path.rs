use std::collections::BTreeMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{path::PathRepository, texture_use::UseRepository},
    error::AppError,
    model::{
        path::{InputPath, Path},
        permission::Principal,
    },
    service::require_catalog_editor,
};

pub struct PathService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PathService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_raw(&self) -> Result<BTreeMap<String, Path>, AppError> {
        PathRepository::new(self.db).get_raw().await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Path, AppError> {
        PathRepository::new(self.db).get_by_id(id).await
    }

    /// Paths of a use; the use itself must exist.
    pub async fn get_by_use(&self, use_id: &str) -> Result<Vec<Path>, AppError> {
        if !UseRepository::new(self.db).exists(use_id).await? {
            return Err(AppError::NotFound(format!("Use {use_id} not found")));
        }

        PathRepository::new(self.db).get_by_use(use_id).await
    }

    pub async fn create(&self, principal: &Principal, path: InputPath) -> Result<Path, AppError> {
        require_catalog_editor(principal)?;
        if path.name.trim().is_empty() {
            return Err(AppError::Validation("Path cannot be empty".to_string()));
        }

        PathRepository::new(self.db).create(&path).await
    }

    pub async fn update(
        &self,
        principal: &Principal,
        id: &str,
        path: InputPath,
    ) -> Result<Path, AppError> {
        require_catalog_editor(principal)?;
        if path.name.trim().is_empty() {
            return Err(AppError::Validation("Path cannot be empty".to_string()));
        }

        PathRepository::new(self.db).update(id, &path).await
    }

    pub async fn delete(&self, principal: &Principal, id: &str) -> Result<(), AppError> {
        require_catalog_editor(principal)?;

        PathRepository::new(self.db).delete(id).await?;
        tracing::info!("User {} deleted path {}", principal.user_id, id);

        Ok(())
    }
}
