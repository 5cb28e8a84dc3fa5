use std::collections::{BTreeMap, BTreeSet};

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{texture::TextureRepository, user::UserRepository},
    error::AppError,
    mapping::{
        self,
        contribution::{map_contribution, unmap_contribution_creation, LegacyContribution},
    },
    model::contribution::{Contribution, ContributionCreationParam, ContributionWithRelations},
    model::user::User,
    store::{collections, Collection, Document, DocumentStore},
};

pub struct ContributionRepository<'a> {
    db: &'a DatabaseConnection,
    contributions: Collection<'a>,
}

impl<'a> ContributionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            contributions: DocumentStore::new(db).collection(collections::CONTRIBUTIONS),
        }
    }

    fn map(document: Document) -> Result<Contribution, AppError> {
        let stored: LegacyContribution = mapping::decode(collections::CONTRIBUTIONS, document)?;
        Ok(map_contribution(stored)?)
    }

    pub async fn get_raw(&self) -> Result<BTreeMap<String, Contribution>, AppError> {
        self.contributions
            .read_raw()
            .await?
            .into_iter()
            .map(|(id, document)| Ok((id, Self::map(document)?)))
            .collect()
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Contribution, AppError> {
        let document = self
            .contributions
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Contribution {id} not found")))?;

        Self::map(document)
    }

    /// Contributions for one texture, oldest first.
    pub async fn get_by_texture(&self, texture_id: i64) -> Result<Vec<Contribution>, AppError> {
        let mut found: Vec<Contribution> = self
            .get_raw()
            .await?
            .into_values()
            .filter(|c| c.texture_id == texture_id)
            .collect();
        found.sort_by_key(|c| c.date);

        Ok(found)
    }

    /// Records a contribution after checking that its texture exists.
    ///
    /// A missing `date` defaults to now.
    ///
    /// # Returns
    /// - `Ok(Contribution)` - The contribution as stored
    /// - `Err(AppError::Validation)` - Referenced texture does not exist
    pub async fn create(&self, params: ContributionCreationParam) -> Result<Contribution, AppError> {
        let texture_id = params.texture_id.to_string();
        if !TextureRepository::new(self.db).exists(&texture_id).await? {
            return Err(AppError::Validation(format!(
                "Texture {texture_id} referenced by contribution does not exist"
            )));
        }

        let stored = unmap_contribution_creation(
            params.date.unwrap_or_else(chrono::Utc::now),
            params.resolution,
            params.texture_id,
            params.contributors,
        );
        let document = mapping::encode(collections::CONTRIBUTIONS, &stored)?;
        let id = self.contributions.add(document).await?;

        self.get_by_id(&id).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        if !self.contributions.remove(id).await? {
            return Err(AppError::NotFound(format!("Contribution {id} not found")));
        }

        Ok(())
    }

    /// Users credited on a contribution, in credit order.
    ///
    /// Contributor ids without a user record are skipped.
    pub async fn get_contributors(&self, id: &str) -> Result<Vec<User>, AppError> {
        let contribution = self.get_by_id(id).await?;

        UserRepository::new(self.db)
            .get_many(&contribution.contributors)
            .await
    }

    /// Every contribution joined with its texture and contributor profiles.
    ///
    /// Uses one read per collection. A contribution whose texture is gone keeps its
    /// place with `texture: None`.
    pub async fn get_all_with_relations(
        &self,
    ) -> Result<Vec<ContributionWithRelations>, AppError> {
        let contributions = self.get_raw().await?;
        let textures = TextureRepository::new(self.db).get_raw().await?;

        let contributor_ids: Vec<String> = contributions
            .values()
            .flat_map(|c| c.contributors.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let users: BTreeMap<String, User> = UserRepository::new(self.db)
            .get_many(&contributor_ids)
            .await?
            .into_iter()
            .map(|user| (user.id.clone(), user))
            .collect();

        Ok(contributions
            .into_values()
            .map(|contribution| {
                let texture = textures.get(&contribution.texture_id.to_string()).cloned();
                let contributor_profiles = contribution
                    .contributors
                    .iter()
                    .filter_map(|id| users.get(id).cloned())
                    .map(User::into_profile)
                    .collect();

                ContributionWithRelations {
                    contribution,
                    texture,
                    contributor_profiles,
                }
            })
            .collect())
    }
}
