use std::collections::BTreeMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    error::AppError,
    mapping::{
        self,
        mods::{map_mod, StoredMod},
    },
    model::mods::Mod,
    store::{collections, Collection, Document, DocumentStore},
};

pub struct ModsRepository<'a> {
    mods: Collection<'a>,
    pack_versions: Collection<'a>,
}

impl<'a> ModsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let store = DocumentStore::new(db);
        Self {
            mods: store.collection(collections::MODS),
            pack_versions: store.collection(collections::PACK_VERSIONS),
        }
    }

    fn map(document: Document) -> Result<Mod, AppError> {
        let stored: StoredMod = mapping::decode(collections::MODS, document)?;
        Ok(map_mod(stored))
    }

    pub async fn get_raw(&self) -> Result<BTreeMap<String, Mod>, AppError> {
        self.mods
            .read_raw()
            .await?
            .into_iter()
            .map(|(id, document)| Ok((id, Self::map(document)?)))
            .collect()
    }

    /// Pack format versions keyed by id, passed through untyped.
    pub async fn get_pack_versions(&self) -> Result<BTreeMap<String, Document>, AppError> {
        Ok(self.pack_versions.read_raw().await?)
    }

    /// Name of a mod as recorded in the database.
    pub async fn get_name(&self, id: &str) -> Result<String, AppError> {
        let document = self
            .mods
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Mod {id} not found")))?;

        Ok(Self::map(document)?.name)
    }
}
