use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::server::{
    error::AppError,
    mapping,
    model::user::{Role, User},
    store::{collections, Collection, Document, DocumentStore},
};

/// User as stored: the domain fields plus password material.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredUser {
    #[serde(flatten)]
    user: User,
    #[serde(default)]
    password_hash: String,
    #[serde(default)]
    password_salt: String,
}

/// Values for a new account, hashed and tokenized by the service.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub password_salt: String,
    pub verification_token: String,
}

pub struct UserRepository<'a> {
    users: Collection<'a>,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            users: DocumentStore::new(db).collection(collections::USERS),
        }
    }

    fn map(document: Document) -> Result<User, AppError> {
        let stored: StoredUser = mapping::decode(collections::USERS, document)?;
        Ok(stored.user)
    }

    async fn get_document(&self, id: &str) -> Result<Document, AppError> {
        self.users
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id '{id}' doesn't exist")))
    }

    /// Gets a user by id, or `None` when there is no such user.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        self.users.get(id).await?.map(Self::map).transpose()
    }

    /// # Returns
    /// - `Ok(User)` - The user
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn get_by_id(&self, id: &str) -> Result<User, AppError> {
        Self::map(self.get_document(id).await?)
    }

    /// Users for `ids` in the given order; unknown ids are skipped.
    pub async fn get_many(&self, ids: &[String]) -> Result<Vec<User>, AppError> {
        self.users
            .search_keys(ids)
            .await?
            .into_iter()
            .map(Self::map)
            .collect()
    }

    /// Whether any user already has this username or email.
    ///
    /// Compares the stored fields directly, so records that fail to map still count.
    pub async fn username_or_email_taken(
        &self,
        username: &str,
        email: &str,
    ) -> Result<bool, AppError> {
        let taken = self.users.read_raw().await?.values().any(|document| {
            let field = |name: &str| document.get(name).and_then(Value::as_str);
            field("username") == Some(username)
                || field("email").is_some_and(|e| e.eq_ignore_ascii_case(email))
        });

        Ok(taken)
    }

    /// Inserts a new unverified user without roles.
    pub async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let stored = StoredUser {
            user: User {
                id: String::new(),
                username: new_user.username,
                email: new_user.email,
                roles: Vec::new(),
                is_verified: false,
                verification_token: Some(new_user.verification_token),
            },
            password_hash: new_user.password_hash,
            password_salt: new_user.password_salt,
        };

        let document = mapping::encode(collections::USERS, &stored)?;
        let id = self.users.add(document).await?;

        self.get_by_id(&id).await
    }

    /// Replaces the role list of a user, leaving every other stored field intact.
    ///
    /// # Returns
    /// - `Ok(User)` - The user as stored after the write
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn set_roles(&self, id: &str, roles: &[Role]) -> Result<User, AppError> {
        let mut document = self.get_document(id).await?;
        document.insert("roles".to_string(), serde_json::to_value(roles)?);
        self.users.set(id, document).await?;

        self.get_by_id(id).await
    }

    /// Marks the user verified when `token` matches the stored token exactly.
    ///
    /// # Returns
    /// - `Ok(true)` - Token matched; user verified and token cleared
    /// - `Ok(false)` - Unknown user, no pending token or wrong token; nothing written
    pub async fn verify(&self, id: &str, token: &str) -> Result<bool, AppError> {
        let Some(mut document) = self.users.get(id).await? else {
            return Ok(false);
        };

        let matches = document
            .get("verificationToken")
            .and_then(Value::as_str)
            .is_some_and(|stored| stored == token);
        if !matches {
            return Ok(false);
        }

        document.insert("isVerified".to_string(), Value::Bool(true));
        document.remove("verificationToken");
        self.users.set(id, document).await?;

        Ok(true)
    }

    /// Deletes a user and returns the record as it was.
    ///
    /// # Returns
    /// - `Ok(User)` - The removed user
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn delete(&self, id: &str) -> Result<User, AppError> {
        let user = self.get_by_id(id).await?;

        if !self.users.remove(id).await? {
            return Err(AppError::NotFound(format!("User with id '{id}' doesn't exist")));
        }

        Ok(user)
    }
}
