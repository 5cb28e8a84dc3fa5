mod model;
mod server;

use crate::server::{config::Config, error::AppError, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let http_client = startup::setup_reqwest_client()?;
    let outbound = startup::setup_outbound(&config, http_client);

    let app = server::router::router()
        .with_state(AppState::new(
            db,
            outbound,
            config.app_url.clone(),
            config.mail_sender.clone(),
        ))
        .layer(session);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
