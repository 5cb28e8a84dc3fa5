use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Session key holding the authenticated user id.
///
/// Mirrors the key the application's auth session reads so tests can log a user in
/// without going through an identity provider.
pub const SESSION_AUTH_USER_ID: &str = "auth:user";

/// Test environment holding an in-memory SQLite database and an optional session.
///
/// Both resources are created lazily on first access and live as long as the context.
pub struct TestContext {
    /// Connection to the in-memory SQLite instance, created by `database()`.
    pub db: Option<DatabaseConnection>,

    /// Session stored in the same in-memory database, created by `session()`.
    pub session: Option<Session>,
}

impl TestContext {
    /// Creates an empty test context with no database or session yet.
    pub fn new() -> Self {
        Self {
            db: None,
            session: None,
        }
    }

    /// Gets or creates the in-memory SQLite database connection.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::Database)` - Failed to connect to in-memory SQLite database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = Database::connect("sqlite::memory:").await?;

                let db_ref = self.db.insert(db);

                Ok(&*db_ref)
            }
        }
    }

    /// Executes CREATE TABLE statements in order.
    ///
    /// Called by `TestBuilder::build()`; tests rarely need it directly.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Gets or creates a session backed by the in-memory database.
    ///
    /// The first call migrates the session store table and opens a fresh session with
    /// a seven day inactivity expiry, matching the production session layer.
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        match self.session {
            Some(ref session) => Ok(session),
            None => {
                let db = self.database().await?;

                let pool = db.get_sqlite_connection_pool();
                let session_store = SqliteStore::new(pool.clone());

                session_store
                    .migrate()
                    .await
                    .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

                let session = Session::new(
                    None,
                    Arc::new(session_store),
                    Some(Expiry::OnInactivity(Duration::days(7))),
                );

                let session_ref = self.session.insert(session);

                Ok(&*session_ref)
            }
        }
    }

    /// Gets or creates a session already logged in as `user_id`.
    ///
    /// # Arguments
    /// - `user_id` - Id of a user document that the test has seeded
    ///
    /// # Returns
    /// - `Ok(&Session)` - Session carrying the user id under `auth:user`
    /// - `Err(TestError::Database)` - Failed to create or write the session
    pub async fn authenticated_session(&mut self, user_id: &str) -> Result<&Session, TestError> {
        let session = self.session().await?;

        session
            .insert(SESSION_AUTH_USER_ID, user_id.to_string())
            .await
            .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

        Ok(session)
    }

    /// Gets or creates both the database and the session.
    ///
    /// Avoids the double mutable borrow that calling `database()` and `session()`
    /// separately would cause.
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.database().await?;
        self.session().await?;

        match (self.db.as_ref(), self.session.as_ref()) {
            (Some(db), Some(session)) => Ok((db, session)),
            _ => Err(sea_orm::DbErr::Custom("test context was not initialized".to_string()).into()),
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
