use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::api::ErrorDto,
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::path::{InputPath, Path as TexturePath},
        service::path::PathService,
        state::AppState,
    },
};

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(create_path))
        .routes(routes!(get_raw))
        .routes(routes!(get_paths_by_use))
        .routes(routes!(get_path, update_path, delete_path))
}

#[utoipa::path(
    get,
    path = "/v2/paths/raw",
    tag = "Paths",
    responses(
        (status = 200, description = "Paths keyed by id", body = BTreeMap<String, TexturePath>)
    )
)]
pub async fn get_raw(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let paths = PathService::new(&state.db).get_raw().await?;

    Ok((StatusCode::OK, Json(paths)))
}

#[utoipa::path(
    get,
    path = "/v2/paths/use/{use_id}",
    tag = "Paths",
    params(("use_id" = String, Path, description = "Use id")),
    responses(
        (status = 200, description = "Paths of the use", body = Vec<TexturePath>),
        (status = 404, description = "No use with that id", body = ErrorDto)
    )
)]
pub async fn get_paths_by_use(
    State(state): State<AppState>,
    Path(use_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let paths = PathService::new(&state.db).get_by_use(&use_id).await?;

    Ok((StatusCode::OK, Json(paths)))
}

#[utoipa::path(
    get,
    path = "/v2/paths/{id}",
    tag = "Paths",
    params(("id" = String, Path, description = "Path id")),
    responses(
        (status = 200, description = "The path", body = TexturePath),
        (status = 404, description = "No path with that id", body = ErrorDto)
    )
)]
pub async fn get_path(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let path = PathService::new(&state.db).get_by_id(&id).await?;

    Ok((StatusCode::OK, Json(path)))
}

/// POST /v2/paths - Create a path for an existing use
///
/// # Authentication
/// Requires Administrator or Developer
#[utoipa::path(
    post,
    path = "/v2/paths",
    tag = "Paths",
    request_body = InputPath,
    responses(
        (status = 201, description = "Path created", body = TexturePath),
        (status = 400, description = "Blank path or unknown use", body = ErrorDto),
        (status = 403, description = "Missing role", body = ErrorDto)
    )
)]
pub async fn create_path(
    State(state): State<AppState>,
    session: Session,
    Json(input): Json<InputPath>,
) -> Result<impl IntoResponse, AppError> {
    let (_, principal) = AuthGuard::new(&state.db, &session).require().await?;

    let path = PathService::new(&state.db).create(&principal, input).await?;

    Ok((StatusCode::CREATED, Json(path)))
}

/// PUT /v2/paths/{id} - Replace a path
///
/// # Authentication
/// Requires Administrator or Developer
#[utoipa::path(
    put,
    path = "/v2/paths/{id}",
    tag = "Paths",
    params(("id" = String, Path, description = "Path id")),
    request_body = InputPath,
    responses(
        (status = 200, description = "Path updated", body = TexturePath),
        (status = 403, description = "Missing role", body = ErrorDto),
        (status = 404, description = "No path with that id", body = ErrorDto)
    )
)]
pub async fn update_path(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Json(input): Json<InputPath>,
) -> Result<impl IntoResponse, AppError> {
    let (_, principal) = AuthGuard::new(&state.db, &session).require().await?;

    let path = PathService::new(&state.db).update(&principal, &id, input).await?;

    Ok((StatusCode::OK, Json(path)))
}

/// DELETE /v2/paths/{id}
///
/// # Authentication
/// Requires Administrator or Developer
#[utoipa::path(
    delete,
    path = "/v2/paths/{id}",
    tag = "Paths",
    params(("id" = String, Path, description = "Path id")),
    responses(
        (status = 204, description = "Path deleted"),
        (status = 403, description = "Missing role", body = ErrorDto),
        (status = 404, description = "No path with that id", body = ErrorDto)
    )
)]
pub async fn delete_path(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let (_, principal) = AuthGuard::new(&state.db, &session).require().await?;

    PathService::new(&state.db).delete(&principal, &id).await?;

    Ok(StatusCode::NO_CONTENT)
}
