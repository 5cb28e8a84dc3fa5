use std::collections::BTreeMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    error::AppError,
    mapping,
    model::pack::{Pack, PackAll, PackId, Submission, SubmissionParam},
    store::{collections, Collection, DocumentStore},
};

pub struct SubmissionRepository<'a> {
    submissions: Collection<'a>,
    packs: Collection<'a>,
}

impl<'a> SubmissionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let store = DocumentStore::new(db);
        Self {
            submissions: store.collection(collections::SUBMISSIONS),
            packs: store.collection(collections::PACKS),
        }
    }

    pub async fn get_raw(&self) -> Result<BTreeMap<PackId, Submission>, AppError> {
        self.submissions
            .read_raw()
            .await?
            .into_iter()
            .map(|(id, document)| Ok((id, mapping::decode(collections::SUBMISSIONS, document)?)))
            .collect()
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Submission, AppError> {
        let document = self
            .submissions
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Submission {id} not found")))?;

        Ok(mapping::decode(collections::SUBMISSIONS, document)?)
    }

    pub async fn exists(&self, id: &str) -> Result<bool, AppError> {
        Ok(self.submissions.get(id).await?.is_some())
    }

    /// Writes submission settings under the pack id and returns them as stored.
    pub async fn set(&self, id: &str, params: SubmissionParam) -> Result<Submission, AppError> {
        let document = mapping::encode(collections::SUBMISSIONS, &params.with_id(id))?;
        self.submissions.set(id, document).await?;

        self.get_by_id(id).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        if !self.submissions.remove(id).await? {
            return Err(AppError::NotFound(format!("Submission {id} not found")));
        }

        Ok(())
    }

    /// Every submission merged with the pack stored under the same id.
    ///
    /// Packs are fetched in one batch. A submission whose pack is missing or cannot be
    /// decoded is left out of the result and logged; the call as a whole fails only
    /// when the store itself does or a submission cannot be decoded.
    pub async fn get_every_pack(&self) -> Result<BTreeMap<PackId, PackAll>, AppError> {
        let submissions = self.get_raw().await?;
        let ids: Vec<PackId> = submissions.keys().cloned().collect();

        let mut packs: BTreeMap<PackId, Pack> = BTreeMap::new();
        for document in self.packs.search_keys(&ids).await? {
            match mapping::decode::<Pack>(collections::PACKS, document) {
                Ok(pack) => {
                    packs.insert(pack.id.clone(), pack);
                }
                Err(e) => tracing::warn!("Dropping submission with unreadable pack: {}", e),
            }
        }

        let mut every_pack = BTreeMap::new();
        for (id, submission) in submissions {
            let Some(pack) = packs.remove(&id) else {
                tracing::warn!("Submission {} has no matching pack, leaving it out", id);
                continue;
            };

            every_pack.insert(id, PackAll { pack, submission });
        }

        Ok(every_pack)
    }
}
