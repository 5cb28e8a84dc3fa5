use std::{sync::Arc, time::Duration};

use sea_orm::DatabaseConnection;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::AppError,
    outbound::{
        CloudflareClient, CurseForgeClient, HttpMailer, LogMailer, Mailer, Outbound,
    },
};

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` overrides the default filter, which keeps SQL statement logging quiet.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the `document` table exists before the first
/// request.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer on top of the application's Sqlite pool.
///
/// Sessions expire after seven days of inactivity.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to attach to the router
/// - `Err(AppError::DbErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(7)));

    Ok(session_layer)
}

/// Shared HTTP client for outbound calls.
///
/// Redirects are disabled so upstream responses cannot send requests elsewhere.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(Duration::from_secs(15))
        .build()?;

    Ok(client)
}

/// Wires the production outbound clients.
///
/// Without `MAIL_RELAY_URL` mail is written to the log instead of being sent.
pub fn setup_outbound(config: &Config, http_client: reqwest::Client) -> Outbound {
    let mailer: Arc<dyn Mailer> = match &config.mail_relay_url {
        Some(relay_url) => Arc::new(HttpMailer::new(
            http_client.clone(),
            relay_url.clone(),
            config.mail_relay_key.clone(),
        )),
        None => {
            tracing::warn!("MAIL_RELAY_URL not set, outgoing mail will only be logged");
            Arc::new(LogMailer)
        }
    };

    let cdn = CloudflareClient::new(
        http_client.clone(),
        config.cloudflare_api_token.clone(),
        config.cloudflare_zone_ids.clone(),
    );
    let catalog = CurseForgeClient::new(http_client, config.curseforge_api_key.clone());

    Outbound::new(mailer, Arc::new(cdn), Arc::new(catalog))
}
