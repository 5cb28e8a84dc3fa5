//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned into each handler through
//! Axum's state extraction. Every field is cheap to clone: the database connection is
//! a pool and the outbound collaborators sit behind `Arc`.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::outbound::Outbound;

#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the document store.
    pub db: DatabaseConnection,

    /// Mail relay, CDN administration and mod catalog clients.
    pub outbound: Outbound,

    /// Public base URL, used to build verification links.
    pub app_url: Arc<str>,

    /// Sender address of outgoing mail.
    pub mail_sender: Arc<str>,
}

impl AppState {
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `outbound` - Outbound collaborators
    /// - `app_url` - Public base URL
    /// - `mail_sender` - Sender address of outgoing mail
    pub fn new(
        db: DatabaseConnection,
        outbound: Outbound,
        app_url: impl Into<Arc<str>>,
        mail_sender: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            db,
            outbound,
            app_url: app_url.into(),
            mail_sender: mail_sender.into(),
        }
    }
}
