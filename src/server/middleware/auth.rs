use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::{permission::Principal, user::User},
};

/// Resolves the authenticated principal of a request.
///
/// Role checks are not done here; services decide with the predicates in
/// [`crate::server::model::permission`].
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Loads the logged-in user.
    ///
    /// # Returns
    /// - `Ok((User, Principal))` - The user document and the principal built from it
    /// - `Err(AuthError::UserNotInSession)` - No user id in the session
    /// - `Err(AuthError::UserNotInDatabase)` - Session names a user that no longer exists
    pub async fn require(&self) -> Result<(User, Principal), AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(&user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        let principal = Principal::from(&user);

        Ok((user, principal))
    }

    /// Like [`Self::require`], but an anonymous request yields `None` instead of an error.
    ///
    /// A session naming a deleted user is still an error.
    pub async fn optional(&self) -> Result<Option<Principal>, AppError> {
        if AuthSession::new(self.session).get_user_id().await?.is_none() {
            return Ok(None);
        }

        let (_, principal) = self.require().await?;
        Ok(Some(principal))
    }
}
