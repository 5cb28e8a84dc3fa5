use std::collections::BTreeMap;

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    error::AppError,
    mapping,
    model::addon::{Addon, AddonApproval, AddonCreationParam, ReviewStatus},
    store::{collections, Collection, Document, DocumentStore},
};

pub struct AddonRepository<'a> {
    addons: Collection<'a>,
}

impl<'a> AddonRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            addons: DocumentStore::new(db).collection(collections::ADDONS),
        }
    }

    fn map(document: Document) -> Result<Addon, AppError> {
        Ok(mapping::decode(collections::ADDONS, document)?)
    }

    pub async fn get_raw(&self) -> Result<BTreeMap<String, Addon>, AppError> {
        self.addons
            .read_raw()
            .await?
            .into_iter()
            .map(|(id, document)| Ok((id, Self::map(document)?)))
            .collect()
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Addon, AppError> {
        let document = self
            .addons
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Addon {id} not found")))?;

        Self::map(document)
    }

    pub async fn get_by_status(&self, status: ReviewStatus) -> Result<Vec<Addon>, AppError> {
        Ok(self
            .get_raw()
            .await?
            .into_values()
            .filter(|addon| addon.approval.status == status)
            .collect())
    }

    /// Finds an add-on by name, ignoring case.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Addon>, AppError> {
        let name = name.to_lowercase();

        Ok(self
            .get_raw()
            .await?
            .into_values()
            .find(|addon| addon.name.to_lowercase() == name))
    }

    /// Creates a pending add-on under a store-assigned id.
    pub async fn create(&self, params: AddonCreationParam) -> Result<Addon, AppError> {
        let addon = Addon {
            id: String::new(),
            name: params.name,
            description: params.description,
            authors: params.authors,
            options: params.options,
            downloads: params.downloads,
            approval: AddonApproval::pending(),
            last_updated: Utc::now(),
        };

        let document = mapping::encode(collections::ADDONS, &addon)?;
        let id = self.addons.add(document).await?;

        self.get_by_id(&id).await
    }

    /// Writes `addon` under its id and returns it as stored.
    pub async fn set(&self, addon: &Addon) -> Result<Addon, AppError> {
        let document = mapping::encode(collections::ADDONS, addon)?;
        self.addons.set(&addon.id, document).await?;

        self.get_by_id(&addon.id).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        if !self.addons.remove(id).await? {
            return Err(AppError::NotFound(format!("Addon {id} not found")));
        }

        Ok(())
    }
}
