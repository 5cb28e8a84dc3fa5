use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::api::ErrorDto,
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::addon::{Addon, AddonCreationParam, AddonReviewBody, ReviewStatus},
        service::addon::AddonService,
        state::AppState,
    },
};

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(get_addons, create_addon))
        .routes(routes!(get_raw))
        .routes(routes!(get_addon, update_addon, delete_addon))
        .routes(routes!(review_addon))
        .routes(routes!(reopen_addon))
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct StatusQuery {
    /// Review state to list; defaults to `approved`.
    pub status: Option<ReviewStatus>,
}

/// GET /v2/addons - Add-ons in one review state
///
/// # Authentication
/// Approved add-ons are public. Pending and denied ones require Administrator or Moderator.
#[utoipa::path(
    get,
    path = "/v2/addons",
    tag = "Addons",
    params(StatusQuery),
    responses(
        (status = 200, description = "Matching add-ons", body = Vec<Addon>),
        (status = 403, description = "Listing non-approved add-ons without a staff role", body = ErrorDto)
    )
)]
pub async fn get_addons(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<StatusQuery>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).optional().await?;
    let status = query.status.unwrap_or(ReviewStatus::Approved);

    let addons = AddonService::new(&state.db)
        .get_by_status(status, viewer.as_ref())
        .await?;

    Ok((StatusCode::OK, Json(addons)))
}

/// GET /v2/addons/raw - Every add-on keyed by id
///
/// # Authentication
/// Requires Administrator or Moderator, since the result includes unreviewed add-ons
#[utoipa::path(
    get,
    path = "/v2/addons/raw",
    tag = "Addons",
    responses(
        (status = 200, description = "Add-ons keyed by id", body = BTreeMap<String, Addon>),
        (status = 403, description = "Missing role", body = ErrorDto)
    )
)]
pub async fn get_raw(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let (_, principal) = AuthGuard::new(&state.db, &session).require().await?;

    let addons = AddonService::new(&state.db).get_raw(&principal).await?;

    Ok((StatusCode::OK, Json(addons)))
}

/// GET /v2/addons/{id} - One add-on
///
/// # Authentication
/// Approved add-ons are public. Pending and denied ones are visible to their authors and
/// to Administrator/Moderator; anyone else gets 404.
#[utoipa::path(
    get,
    path = "/v2/addons/{id}",
    tag = "Addons",
    params(("id" = String, Path, description = "Add-on id")),
    responses(
        (status = 200, description = "The add-on", body = Addon),
        (status = 404, description = "No add-on with that id visible to the caller", body = ErrorDto)
    )
)]
pub async fn get_addon(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).optional().await?;

    let addon = AddonService::new(&state.db)
        .get_by_id(&id, viewer.as_ref())
        .await?;

    Ok((StatusCode::OK, Json(addon)))
}

/// POST /v2/addons - Submit an add-on for review
///
/// # Authentication
/// Requires a logged-in user listed in the body's `authors`
#[utoipa::path(
    post,
    path = "/v2/addons",
    tag = "Addons",
    request_body = AddonCreationParam,
    responses(
        (status = 201, description = "Add-on created, pending review", body = Addon),
        (status = 400, description = "Requester not among the authors", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 409, description = "Name already taken", body = ErrorDto)
    )
)]
pub async fn create_addon(
    State(state): State<AppState>,
    session: Session,
    Json(params): Json<AddonCreationParam>,
) -> Result<impl IntoResponse, AppError> {
    let (_, principal) = AuthGuard::new(&state.db, &session).require().await?;

    let addon = AddonService::new(&state.db).create(&principal, params).await?;

    Ok((StatusCode::CREATED, Json(addon)))
}

/// PATCH /v2/addons/{id} - Edit a pending add-on
///
/// # Authentication
/// Authors, or Administrator/Moderator for someone else's add-on
#[utoipa::path(
    patch,
    path = "/v2/addons/{id}",
    tag = "Addons",
    params(("id" = String, Path, description = "Add-on id")),
    request_body = AddonCreationParam,
    responses(
        (status = 200, description = "Add-on updated", body = Addon),
        (status = 400, description = "Requester not among the new authors", body = ErrorDto),
        (status = 403, description = "Not an author and not staff", body = ErrorDto),
        (status = 404, description = "No add-on with that id", body = ErrorDto),
        (status = 409, description = "Add-on already reviewed", body = ErrorDto)
    )
)]
pub async fn update_addon(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Json(params): Json<AddonCreationParam>,
) -> Result<impl IntoResponse, AppError> {
    let (_, principal) = AuthGuard::new(&state.db, &session).require().await?;

    let addon = AddonService::new(&state.db)
        .update(&principal, &id, params)
        .await?;

    Ok((StatusCode::OK, Json(addon)))
}

#[utoipa::path(
    delete,
    path = "/v2/addons/{id}",
    tag = "Addons",
    params(("id" = String, Path, description = "Add-on id")),
    responses(
        (status = 204, description = "Add-on deleted"),
        (status = 403, description = "Not an author and not staff", body = ErrorDto),
        (status = 404, description = "No add-on with that id", body = ErrorDto)
    )
)]
pub async fn delete_addon(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let (_, principal) = AuthGuard::new(&state.db, &session).require().await?;

    AddonService::new(&state.db).delete(&principal, &id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// PUT /v2/addons/{id}/review - Approve or deny a pending add-on
///
/// # Authentication
/// Requires Administrator or Moderator
#[utoipa::path(
    put,
    path = "/v2/addons/{id}/review",
    tag = "Addons",
    params(("id" = String, Path, description = "Add-on id")),
    request_body = AddonReviewBody,
    responses(
        (status = 200, description = "Add-on reviewed", body = Addon),
        (status = 400, description = "Target is pending, or denial without reason", body = ErrorDto),
        (status = 403, description = "Missing role", body = ErrorDto),
        (status = 409, description = "Add-on already reviewed", body = ErrorDto)
    )
)]
pub async fn review_addon(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Json(decision): Json<AddonReviewBody>,
) -> Result<impl IntoResponse, AppError> {
    let (_, principal) = AuthGuard::new(&state.db, &session).require().await?;

    let addon = AddonService::new(&state.db)
        .review(&principal, &id, decision)
        .await?;

    Ok((StatusCode::OK, Json(addon)))
}

/// POST /v2/addons/{id}/reopen - Move a reviewed add-on back to pending
///
/// # Authentication
/// Authors, or Administrator/Moderator
#[utoipa::path(
    post,
    path = "/v2/addons/{id}/reopen",
    tag = "Addons",
    params(("id" = String, Path, description = "Add-on id")),
    responses(
        (status = 200, description = "Add-on pending again", body = Addon),
        (status = 403, description = "Not an author and not staff", body = ErrorDto),
        (status = 409, description = "Add-on is already pending", body = ErrorDto)
    )
)]
pub async fn reopen_addon(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let (_, principal) = AuthGuard::new(&state.db, &session).require().await?;

    let addon = AddonService::new(&state.db).reopen(&principal, &id).await?;

    Ok((StatusCode::OK, Json(addon)))
}
