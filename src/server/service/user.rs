use std::sync::Arc;

use rand::Rng;
use sea_orm::{DatabaseConnection, SqlErr};
use sha2::{Digest, Sha256};

use crate::server::{
    data::user::{NewUser, UserRepository},
    error::AppError,
    model::{
        permission::{can_delete_user, can_manage_roles, Principal},
        user::{with_role, without_role, CreateUserParam, Role, User},
    },
    outbound::{Mail, Mailer},
};

const TOKEN_LENGTH: usize = 26;
const SALT_LENGTH: usize = 16;
const MIN_PASSWORD_LENGTH: usize = 8;

/// Random alphanumeric string of `length` characters.
fn random_string(length: usize) -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                             abcdefghijklmnopqrstuvwxyz\
                             0123456789";

    let mut rng = rand::rng();

    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// Hex SHA-256 of salt followed by password.
fn hash_password(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    mailer: Arc<dyn Mailer>,
    mail_sender: &'a str,
    app_url: &'a str,
}

impl<'a> UserService<'a> {
    /// # Arguments
    /// - `db` - Database connection
    /// - `mailer` - Outbound mailer for verification and deletion emails
    /// - `mail_sender` - Address emails are sent from
    /// - `app_url` - Public base URL used in verification links
    pub fn new(
        db: &'a DatabaseConnection,
        mailer: Arc<dyn Mailer>,
        mail_sender: &'a str,
        app_url: &'a str,
    ) -> Self {
        Self {
            db,
            mailer,
            mail_sender,
            app_url,
        }
    }

    pub async fn get_by_id(&self, id: &str) -> Result<User, AppError> {
        UserRepository::new(self.db).get_by_id(id).await
    }

    /// Sends `mail`; a failure is logged and surfaced as `Upstream`.
    ///
    /// Callers have already committed their store mutation, which stays in place.
    async fn notify(&self, mail: Mail) -> Result<(), AppError> {
        if let Err(e) = self.mailer.send(&mail).await {
            tracing::error!("Failed to send \"{}\" to {}: {}", mail.subject, mail.to, e);
            return Err(AppError::Upstream(format!(
                "The change was saved but the email to {} could not be sent",
                mail.to
            )));
        }
        Ok(())
    }

    /// Registers an account and emails a verification link.
    ///
    /// # Returns
    /// - `Ok(User)` - The unverified user
    /// - `Err(AppError::Validation)` - Blank username, malformed email or short password
    /// - `Err(AppError::Conflict)` - Username or email already used; no email is sent
    /// - `Err(AppError::Upstream)` - User created but the verification email failed
    pub async fn create_user(&self, params: CreateUserParam) -> Result<User, AppError> {
        let username = params.username.trim().to_string();
        let email = params.email.trim().to_string();

        if username.is_empty() {
            return Err(AppError::Validation("Username cannot be empty".to_string()));
        }
        if !email.contains('@') {
            return Err(AppError::Validation(format!("Invalid email address {email}")));
        }
        if params.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::Validation(format!(
                "Password must be at least {MIN_PASSWORD_LENGTH} characters"
            )));
        }

        let repo = UserRepository::new(self.db);
        let conflict = || AppError::Conflict("Username or email already exists".to_string());

        if repo.username_or_email_taken(&username, &email).await? {
            return Err(conflict());
        }

        let salt = random_string(SALT_LENGTH);
        let token = random_string(TOKEN_LENGTH);
        let new_user = NewUser {
            username,
            email,
            password_hash: hash_password(&params.password, &salt),
            password_salt: salt,
            verification_token: token.clone(),
        };

        let user = match repo.create(new_user).await {
            Err(AppError::DbErr(e))
                if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) =>
            {
                return Err(conflict());
            }
            result => result?,
        };

        let verify_url = format!(
            "{}/auth/verify/{}/{}",
            self.app_url.trim_end_matches('/'),
            user.id,
            token
        );
        self.notify(Mail {
            from: self.mail_sender.to_string(),
            to: user.email.clone(),
            subject: "Faithful - Account Email Verification".to_string(),
            body: format!(
                "Please verify your email address by clicking the link below: {verify_url}\n\
                 If you do not verify your email address within 24 hours, your account will be deleted.\n\n\
                 If you did not request this, please ignore this email.\n\n\
                 Thanks,\n\
                 The Faithful Team"
            ),
        })
        .await?;

        Ok(user)
    }

    /// Deletes an account and emails a confirmation.
    ///
    /// # Returns
    /// - `Ok(User)` - The deleted user
    /// - `Err(AppError::Permission)` - Neither the account owner nor an administrator
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::Upstream)` - User deleted but the confirmation email failed
    pub async fn delete(&self, principal: &Principal, id: &str) -> Result<User, AppError> {
        if !can_delete_user(principal, id) {
            return Err(AppError::Permission(
                "Only the account owner or an administrator can delete an account".to_string(),
            ));
        }

        let user = UserRepository::new(self.db).delete(id).await?;
        tracing::info!("User {} deleted account {}", principal.user_id, id);

        self.notify(Mail {
            from: self.mail_sender.to_string(),
            to: user.email.clone(),
            subject: "Faithful - Account Deletion".to_string(),
            body: format!(
                "Your account has been deleted from the database. Everything related to your account has been anonymized.\n\
                 If you did not request this, please contact us at the following email : {}\n\n\
                 Thanks,\n\
                 The Faithful Team",
                self.mail_sender
            ),
        })
        .await?;

        Ok(user)
    }

    async fn change_roles(
        &self,
        principal: &Principal,
        id: &str,
        role: &str,
        change: fn(Vec<Role>, Role) -> Vec<Role>,
    ) -> Result<User, AppError> {
        if !can_manage_roles(principal) {
            return Err(AppError::Permission(
                "Administrator role required to change roles".to_string(),
            ));
        }

        let repo = UserRepository::new(self.db);
        let user = repo.get_by_id(id).await?;
        let role: Role = role.parse()?;

        repo.set_roles(id, &change(user.roles, role)).await
    }

    /// Grants `role`; granting a held role changes nothing.
    ///
    /// # Returns
    /// - `Ok(User)` - The user as stored after the change
    /// - `Err(AppError::Permission)` - Requester is not an administrator
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::Validation)` - Unknown role name
    pub async fn add_role(
        &self,
        principal: &Principal,
        id: &str,
        role: &str,
    ) -> Result<User, AppError> {
        self.change_roles(principal, id, role, with_role).await
    }

    /// Revokes `role`; revoking a role that is not held changes nothing.
    pub async fn delete_role(
        &self,
        principal: &Principal,
        id: &str,
        role: &str,
    ) -> Result<User, AppError> {
        self.change_roles(principal, id, role, without_role).await
    }

    /// Verifies an email address. A wrong token is an answer, not an error.
    pub async fn verify(&self, id: &str, token: &str) -> Result<bool, AppError> {
        UserRepository::new(self.db).verify(id, token).await
    }
}
