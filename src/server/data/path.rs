use std::collections::BTreeMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    error::AppError,
    mapping::{
        self,
        path::{map_path, unmap_path, LegacyPath},
    },
    model::path::{InputPath, Path},
    store::{collections, Collection, Document, DocumentStore},
};

pub struct PathRepository<'a> {
    db: &'a DatabaseConnection,
    paths: Collection<'a>,
}

impl<'a> PathRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            paths: DocumentStore::new(db).collection(collections::PATHS),
        }
    }

    fn decode(document: Document) -> Result<LegacyPath, AppError> {
        Ok(mapping::decode(collections::PATHS, document)?)
    }

    pub async fn get_raw(&self) -> Result<BTreeMap<String, Path>, AppError> {
        self.paths
            .read_raw()
            .await?
            .into_iter()
            .map(|(id, document)| Ok((id, map_path(Self::decode(document)?))))
            .collect()
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Path, AppError> {
        let document = self
            .paths
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Path {id} not found")))?;

        Ok(map_path(Self::decode(document)?))
    }

    pub async fn get_by_use(&self, use_id: &str) -> Result<Vec<Path>, AppError> {
        Ok(self
            .get_raw()
            .await?
            .into_values()
            .filter(|path| path.use_id == use_id)
            .collect())
    }

    async fn check_use(&self, path: &InputPath) -> Result<(), AppError> {
        let uses = DocumentStore::new(self.db).collection(collections::USES);
        if uses.get(&path.use_id).await?.is_none() {
            return Err(AppError::Validation(format!(
                "Use {} referenced by path {} does not exist",
                path.use_id, path.name
            )));
        }

        Ok(())
    }

    /// Creates a path under a store-assigned id.
    ///
    /// # Returns
    /// - `Ok(Path)` - The path as stored
    /// - `Err(AppError::Validation)` - Referenced use does not exist
    pub async fn create(&self, path: &InputPath) -> Result<Path, AppError> {
        self.check_use(path).await?;

        let document = mapping::encode(collections::PATHS, &unmap_path(path))?;
        let id = self.paths.add(document).await?;

        self.get_by_id(&id).await
    }

    /// Replaces an existing path.
    ///
    /// # Returns
    /// - `Ok(Path)` - The path as stored
    /// - `Err(AppError::NotFound)` - No path with that id
    /// - `Err(AppError::Validation)` - Referenced use does not exist
    pub async fn update(&self, id: &str, path: &InputPath) -> Result<Path, AppError> {
        if self.paths.get(id).await?.is_none() {
            return Err(AppError::NotFound(format!("Path {id} not found")));
        }
        self.check_use(path).await?;

        let document = mapping::encode(collections::PATHS, &unmap_path(path))?;
        self.paths.set(id, document).await?;

        self.get_by_id(id).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        if !self.paths.remove(id).await? {
            return Err(AppError::NotFound(format!("Path {id} not found")));
        }

        Ok(())
    }

    /// Deletes every path of a use. Paths that cannot be decoded are left alone.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of paths removed
    pub async fn delete_by_use(&self, use_id: &str) -> Result<usize, AppError> {
        let mut removed = 0;

        for (id, document) in self.paths.read_raw().await? {
            let Ok(stored) = Self::decode(document) else {
                tracing::warn!("Skipping undecodable path {} during cascade delete", id);
                continue;
            };

            if stored.use_id == use_id && self.paths.remove(&id).await? {
                removed += 1;
            }
        }

        Ok(removed)
    }
}
