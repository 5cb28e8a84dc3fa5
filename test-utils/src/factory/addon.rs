use sea_orm::{DatabaseConnection, DbErr};

use crate::{factory::helpers::next_id, fixture};

/// Factory for add-on documents.
pub struct AddonFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    name: String,
    authors: Vec<String>,
    status: String,
}

impl<'a> AddonFactory<'a> {
    /// Creates a pending add-on with no authors.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: id.to_string(),
            name: format!("Addon {}", id),
            authors: Vec::new(),
            status: "pending".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn authors(mut self, authors: &[&str]) -> Self {
        self.authors = authors.iter().map(|a| a.to_string()).collect();
        self
    }

    /// Sets the stored review status (`pending`, `approved` or `denied`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::document::Model, DbErr> {
        let authors: Vec<&str> = self.authors.iter().map(String::as_str).collect();
        let record = fixture::addon::stored(&self.id, &self.name, &authors, &self.status);
        crate::factory::document::insert_document(self.db, "addons", record).await
    }
}

/// Creates a pending add-on authored by `authors`.
pub async fn create_addon(
    db: &DatabaseConnection,
    authors: &[&str],
) -> Result<entity::document::Model, DbErr> {
    AddonFactory::new(db).authors(authors).build().await
}
