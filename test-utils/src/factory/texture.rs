//! Texture factory writing legacy or migrated texture documents.

use sea_orm::{DatabaseConnection, DbErr};

use crate::{factory::helpers::next_id, fixture};

/// Factory for creating texture documents.
///
/// Defaults to the legacy layout (`type` field); call `migrated()` to write the
/// current layout instead.
///
/// # Example
///
/// ```rust,ignore
/// let texture = TextureFactory::new(&db)
///     .name("Stone")
///     .tags(&["block"])
///     .build()
///     .await?;
/// ```
pub struct TextureFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    name: String,
    tags: Vec<String>,
    migrated: bool,
}

impl<'a> TextureFactory<'a> {
    /// Creates a new factory with a unique numeric id and `["block"]` tags.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: id.to_string(),
            name: format!("texture_{}", id),
            tags: vec!["block".to_string()],
            migrated: false,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Writes `tags` instead of the legacy `type` field.
    pub fn migrated(mut self) -> Self {
        self.migrated = true;
        self
    }

    /// Inserts the texture document.
    pub async fn build(self) -> Result<entity::document::Model, DbErr> {
        let tags: Vec<&str> = self.tags.iter().map(String::as_str).collect();
        let record = if self.migrated {
            fixture::texture::migrated(&self.id, &self.name, &tags)
        } else {
            fixture::texture::legacy(&self.id, &self.name, &tags)
        };

        crate::factory::document::insert_document(self.db, "textures", record).await
    }
}

/// Creates a legacy-shaped texture with default values.
pub async fn create_texture(db: &DatabaseConnection) -> Result<entity::document::Model, DbErr> {
    TextureFactory::new(db).build().await
}
