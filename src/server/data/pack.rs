use std::collections::BTreeMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    error::AppError,
    mapping,
    model::pack::Pack,
    store::{collections, Collection, DocumentStore},
};

pub struct PackRepository<'a> {
    packs: Collection<'a>,
}

impl<'a> PackRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            packs: DocumentStore::new(db).collection(collections::PACKS),
        }
    }

    pub async fn get_raw(&self) -> Result<BTreeMap<String, Pack>, AppError> {
        self.packs
            .read_raw()
            .await?
            .into_iter()
            .map(|(id, document)| Ok((id, mapping::decode(collections::PACKS, document)?)))
            .collect()
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Pack, AppError> {
        let document = self
            .packs
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Pack {id} not found")))?;

        Ok(mapping::decode(collections::PACKS, document)?)
    }
}
