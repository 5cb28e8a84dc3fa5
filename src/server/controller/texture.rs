use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
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
        model::{
            texture::{Texture, TextureCreationParam, TextureSearchParam},
            texture_use::TextureUse,
        },
        service::texture::TextureService,
        state::AppState,
    },
};

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(create_texture))
        .routes(routes!(get_raw))
        .routes(routes!(search_textures))
        .routes(routes!(get_texture, update_texture, delete_texture))
        .routes(routes!(get_texture_uses))
}

/// GET /v2/textures/raw - Every texture keyed by id
#[utoipa::path(
    get,
    path = "/v2/textures/raw",
    tag = "Textures",
    responses(
        (status = 200, description = "Textures keyed by id", body = BTreeMap<String, Texture>),
        (status = 400, description = "A stored texture could not be mapped", body = ErrorDto)
    )
)]
pub async fn get_raw(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let textures = TextureService::new(&state.db).get_raw().await?;

    Ok((StatusCode::OK, Json(textures)))
}

/// GET /v2/textures/search - Textures filtered by name substring and tag
#[utoipa::path(
    get,
    path = "/v2/textures/search",
    tag = "Textures",
    params(TextureSearchParam),
    responses(
        (status = 200, description = "Matching textures", body = Vec<Texture>)
    )
)]
pub async fn search_textures(
    State(state): State<AppState>,
    Query(params): Query<TextureSearchParam>,
) -> Result<impl IntoResponse, AppError> {
    let textures = TextureService::new(&state.db).search(&params).await?;

    Ok((StatusCode::OK, Json(textures)))
}

#[utoipa::path(
    get,
    path = "/v2/textures/{id}",
    tag = "Textures",
    params(("id" = String, Path, description = "Texture id")),
    responses(
        (status = 200, description = "The texture", body = Texture),
        (status = 404, description = "No texture with that id", body = ErrorDto)
    )
)]
pub async fn get_texture(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let texture = TextureService::new(&state.db).get_by_id(&id).await?;

    Ok((StatusCode::OK, Json(texture)))
}

#[utoipa::path(
    get,
    path = "/v2/textures/{id}/uses",
    tag = "Textures",
    params(("id" = String, Path, description = "Texture id")),
    responses(
        (status = 200, description = "Uses of the texture", body = Vec<TextureUse>),
        (status = 404, description = "No texture with that id", body = ErrorDto)
    )
)]
pub async fn get_texture_uses(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let uses = TextureService::new(&state.db).get_uses(&id).await?;

    Ok((StatusCode::OK, Json(uses)))
}

/// POST /v2/textures - Create a texture
///
/// # Authentication
/// Requires Administrator or Developer
#[utoipa::path(
    post,
    path = "/v2/textures",
    tag = "Textures",
    request_body = TextureCreationParam,
    responses(
        (status = 201, description = "Texture created", body = Texture),
        (status = 400, description = "Blank name", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing role", body = ErrorDto)
    )
)]
pub async fn create_texture(
    State(state): State<AppState>,
    session: Session,
    Json(params): Json<TextureCreationParam>,
) -> Result<impl IntoResponse, AppError> {
    let (_, principal) = AuthGuard::new(&state.db, &session).require().await?;

    let texture = TextureService::new(&state.db).create(&principal, params).await?;

    Ok((StatusCode::CREATED, Json(texture)))
}

/// PUT /v2/textures/{id} - Replace name and tags of a texture
///
/// # Authentication
/// Requires Administrator or Developer
#[utoipa::path(
    put,
    path = "/v2/textures/{id}",
    tag = "Textures",
    params(("id" = String, Path, description = "Texture id")),
    request_body = TextureCreationParam,
    responses(
        (status = 200, description = "Texture updated", body = Texture),
        (status = 403, description = "Missing role", body = ErrorDto),
        (status = 404, description = "No texture with that id", body = ErrorDto)
    )
)]
pub async fn update_texture(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Json(params): Json<TextureCreationParam>,
) -> Result<impl IntoResponse, AppError> {
    let (_, principal) = AuthGuard::new(&state.db, &session).require().await?;

    let texture = TextureService::new(&state.db).update(&principal, &id, params).await?;

    Ok((StatusCode::OK, Json(texture)))
}

/// DELETE /v2/textures/{id} - Delete a texture with its uses and their paths
///
/// # Authentication
/// Requires Administrator or Developer
#[utoipa::path(
    delete,
    path = "/v2/textures/{id}",
    tag = "Textures",
    params(("id" = String, Path, description = "Texture id")),
    responses(
        (status = 204, description = "Texture deleted"),
        (status = 403, description = "Missing role", body = ErrorDto),
        (status = 404, description = "No texture with that id", body = ErrorDto)
    )
)]
pub async fn delete_texture(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let (_, principal) = AuthGuard::new(&state.db, &session).require().await?;

    TextureService::new(&state.db).delete(&principal, &id).await?;

    Ok(StatusCode::NO_CONTENT)
}
