//! User factory for creating test user documents.

use sea_orm::{DatabaseConnection, DbErr};

use crate::{factory::helpers::next_id, fixture};

/// Factory for creating user documents with customizable fields.
///
/// Defaults to a verified user without roles.
///
/// # Example
///
/// ```rust,ignore
/// let moderator = UserFactory::new(&db)
///     .username("mod")
///     .roles(&["Moderator"])
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    username: String,
    roles: Vec<String>,
    verified: bool,
    verification_token: Option<String>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new factory with defaults.
    ///
    /// Defaults:
    /// - id: auto-incremented counter value
    /// - username: `"user_{id}"`
    /// - roles: none
    /// - verified: `true`, no verification token
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: id.to_string(),
            username: format!("user_{}", id),
            roles: Vec::new(),
            verified: true,
            verification_token: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets the stored role names. Names are written verbatim.
    pub fn roles(mut self, roles: &[&str]) -> Self {
        self.roles = roles.iter().map(|r| r.to_string()).collect();
        self
    }

    /// Marks the user unverified with a pending verification token.
    pub fn unverified(mut self, token: impl Into<String>) -> Self {
        self.verified = false;
        self.verification_token = Some(token.into());
        self
    }

    /// Inserts the user document.
    pub async fn build(self) -> Result<entity::document::Model, DbErr> {
        let roles: Vec<&str> = self.roles.iter().map(String::as_str).collect();
        let record = fixture::user::stored(
            &self.id,
            &self.username,
            &roles,
            self.verified,
            self.verification_token.as_deref(),
        );

        crate::factory::document::insert_document(self.db, "users", record).await
    }
}

/// Creates a verified user without roles.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::document::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a verified user holding `role`.
pub async fn create_user_with_role(
    db: &DatabaseConnection,
    role: &str,
) -> Result<entity::document::Model, DbErr> {
    UserFactory::new(db).roles(&[role]).build().await
}
