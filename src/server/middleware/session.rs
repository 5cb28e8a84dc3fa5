//! Type-safe session management wrapper.
//!
//! Identity is established by an external login flow which stores the user id in the
//! session under [`SESSION_AUTH_USER_ID`]. This module only reads and clears it, so
//! the key name lives in one place.

use tower_sessions::Session;

use crate::server::error::AppError;

/// Session key holding the authenticated user's id.
pub const SESSION_AUTH_USER_ID: &str = "auth:user";

/// Authentication session management.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user id in the session, establishing a logged-in session.
    ///
    /// # Returns
    /// - `Ok(())` - User id stored
    /// - `Err(AppError::SessionErr(_))` - Failed to write the session
    pub async fn set_user_id(&self, user_id: &str) -> Result<(), AppError> {
        self.session
            .insert(SESSION_AUTH_USER_ID, user_id.to_string())
            .await?;
        Ok(())
    }

    /// Retrieves the authenticated user id.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - A user is logged in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to read the session
    pub async fn get_user_id(&self) -> Result<Option<String>, AppError> {
        let user_id = self.session.get::<String>(SESSION_AUTH_USER_ID).await?;
        Ok(user_id)
    }

    /// Clears all session data, logging the user out.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
