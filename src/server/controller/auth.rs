use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::api::VerifiedDto,
    server::{
        error::AppError, middleware::session::AuthSession, service::user::UserService,
        state::AppState,
    },
};

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(verify))
        .routes(routes!(logout))
}

/// GET /auth/verify/{id}/{token} - Target of the link in the verification email
///
/// Answers `verified: false` for an unknown user, a wrong token, or a token that was
/// already used.
#[utoipa::path(
    get,
    path = "/auth/verify/{id}/{token}",
    tag = "Auth",
    params(
        ("id" = String, Path, description = "User id"),
        ("token" = String, Path, description = "Verification token from the email")
    ),
    responses(
        (status = 200, description = "Whether the address is now verified", body = VerifiedDto)
    )
)]
pub async fn verify(
    State(state): State<AppState>,
    Path((id, token)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let verified = UserService::new(
        &state.db,
        state.outbound.mailer.clone(),
        &state.mail_sender,
        &state.app_url,
    )
    .verify(&id, &token)
    .await?;

    Ok((StatusCode::OK, Json(VerifiedDto { verified })))
}

/// POST /v2/auth/logout - Clear the session
#[utoipa::path(
    post,
    path = "/v2/auth/logout",
    tag = "Auth",
    responses(
        (status = 204, description = "Session cleared")
    )
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(StatusCode::NO_CONTENT)
}
