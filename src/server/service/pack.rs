use std::collections::BTreeMap;

use sea_orm::DatabaseConnection;

use crate::server::{data::pack::PackRepository, error::AppError, model::pack::Pack};

pub struct PackService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PackService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_raw(&self) -> Result<BTreeMap<String, Pack>, AppError> {
        PackRepository::new(self.db).get_raw().await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Pack, AppError> {
        PackRepository::new(self.db).get_by_id(id).await
    }
}
