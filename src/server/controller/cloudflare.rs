use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tower_sessions::Session;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::api::ErrorDto,
    server::{
        error::AppError, middleware::auth::AuthGuard, model::cloudflare::DevMode,
        service::cloudflare::CloudflareService, state::AppState,
    },
};

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(purge))
        .routes(routes!(dev))
}

/// POST /v2/cloudflare/purge - Purge the whole CDN cache
///
/// # Authentication
/// Requires Administrator or Developer
#[utoipa::path(
    post,
    path = "/v2/cloudflare/purge",
    tag = "Cloudflare",
    responses(
        (status = 204, description = "Cache purged"),
        (status = 403, description = "Missing role", body = ErrorDto),
        (status = 502, description = "CDN rejected the call", body = ErrorDto)
    )
)]
pub async fn purge(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let (_, principal) = AuthGuard::new(&state.db, &session).require().await?;

    CloudflareService::new(state.outbound.cdn.clone())
        .purge(&principal)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /v2/cloudflare/dev/{mode} - Switch CDN development mode
///
/// Development mode bypasses the CDN cache and switches itself off after three hours.
///
/// # Authentication
/// Requires Administrator or Developer
#[utoipa::path(
    post,
    path = "/v2/cloudflare/dev/{mode}",
    tag = "Cloudflare",
    params(("mode" = DevMode, Path, description = "`on` or `off`")),
    responses(
        (status = 204, description = "Development mode switched"),
        (status = 403, description = "Missing role", body = ErrorDto),
        (status = 502, description = "CDN rejected the call", body = ErrorDto)
    )
)]
pub async fn dev(
    State(state): State<AppState>,
    session: Session,
    Path(mode): Path<DevMode>,
) -> Result<impl IntoResponse, AppError> {
    let (_, principal) = AuthGuard::new(&state.db, &session).require().await?;

    CloudflareService::new(state.outbound.cdn.clone())
        .dev(&principal, mode)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
