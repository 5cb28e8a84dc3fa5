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
        model::{
            path::Path as TexturePath,
            texture_use::{TextureUse, TextureUseParam},
        },
        service::texture_use::UseService,
        state::AppState,
    },
};

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(create_use))
        .routes(routes!(get_raw))
        .routes(routes!(get_uses_by_edition))
        .routes(routes!(get_use, update_use, delete_use))
        .routes(routes!(get_use_paths))
}

/// Query of the per-edition lookup.
#[derive(Debug, Deserialize, IntoParams)]
pub struct TextureIdsQuery {
    /// Comma separated texture ids.
    pub textures: String,
}

impl TextureIdsQuery {
    fn ids(&self) -> Result<Vec<i64>, AppError> {
        self.textures
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(|id| {
                id.parse()
                    .map_err(|_| AppError::Validation(format!("Invalid texture id {id}")))
            })
            .collect()
    }
}

#[utoipa::path(
    get,
    path = "/v2/uses/raw",
    tag = "Uses",
    responses(
        (status = 200, description = "Uses keyed by id", body = BTreeMap<String, TextureUse>),
        (status = 400, description = "A stored use could not be mapped", body = ErrorDto)
    )
)]
pub async fn get_raw(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let uses = UseService::new(&state.db).get_raw().await?;

    Ok((StatusCode::OK, Json(uses)))
}

/// GET /v2/uses/edition/{edition} - Uses of the given textures in one edition
#[utoipa::path(
    get,
    path = "/v2/uses/edition/{edition}",
    tag = "Uses",
    params(
        ("edition" = String, Path, description = "Game edition, e.g. java or bedrock"),
        TextureIdsQuery
    ),
    responses(
        (status = 200, description = "Matching uses", body = Vec<TextureUse>),
        (status = 400, description = "Malformed texture id", body = ErrorDto)
    )
)]
pub async fn get_uses_by_edition(
    State(state): State<AppState>,
    Path(edition): Path<String>,
    Query(query): Query<TextureIdsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let ids = query.ids()?;
    let uses = UseService::new(&state.db)
        .get_by_textures_and_edition(&ids, &edition)
        .await?;

    Ok((StatusCode::OK, Json(uses)))
}

/// GET /v2/uses/{id_or_name} - Uses matching an id, or failing that a name
#[utoipa::path(
    get,
    path = "/v2/uses/{id_or_name}",
    tag = "Uses",
    params(("id_or_name" = String, Path, description = "Use id or use name")),
    responses(
        (status = 200, description = "Matching uses", body = Vec<TextureUse>),
        (status = 404, description = "Nothing matched", body = ErrorDto)
    )
)]
pub async fn get_use(
    State(state): State<AppState>,
    Path(id_or_name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let uses = UseService::new(&state.db)
        .get_by_id_or_name(&id_or_name)
        .await?;

    Ok((StatusCode::OK, Json(uses)))
}

#[utoipa::path(
    get,
    path = "/v2/uses/{id_or_name}/paths",
    tag = "Uses",
    params(("id_or_name" = String, Path, description = "Use id or use name")),
    responses(
        (status = 200, description = "Paths of every matching use", body = Vec<TexturePath>),
        (status = 404, description = "Nothing matched", body = ErrorDto)
    )
)]
pub async fn get_use_paths(
    State(state): State<AppState>,
    Path(id_or_name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let paths = UseService::new(&state.db)
        .get_paths_by_id_or_name(&id_or_name)
        .await?;

    Ok((StatusCode::OK, Json(paths)))
}

/// POST /v2/uses - Create a use under the id it carries
///
/// # Authentication
/// Requires Administrator or Developer
#[utoipa::path(
    post,
    path = "/v2/uses",
    tag = "Uses",
    request_body = TextureUse,
    responses(
        (status = 201, description = "Use created", body = TextureUse),
        (status = 400, description = "Referenced texture does not exist", body = ErrorDto),
        (status = 403, description = "Missing role", body = ErrorDto),
        (status = 409, description = "Use id already taken", body = ErrorDto)
    )
)]
pub async fn create_use(
    State(state): State<AppState>,
    session: Session,
    Json(texture_use): Json<TextureUse>,
) -> Result<impl IntoResponse, AppError> {
    let (_, principal) = AuthGuard::new(&state.db, &session).require().await?;

    let created = UseService::new(&state.db).create(&principal, texture_use).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /v2/uses/{id_or_name} - Replace a use
///
/// # Authentication
/// Requires Administrator or Developer
#[utoipa::path(
    put,
    path = "/v2/uses/{id_or_name}",
    tag = "Uses",
    params(("id_or_name" = String, Path, description = "Use id")),
    request_body = TextureUseParam,
    responses(
        (status = 200, description = "Use updated", body = TextureUse),
        (status = 403, description = "Missing role", body = ErrorDto),
        (status = 404, description = "No use with that id", body = ErrorDto)
    )
)]
pub async fn update_use(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Json(params): Json<TextureUseParam>,
) -> Result<impl IntoResponse, AppError> {
    let (_, principal) = AuthGuard::new(&state.db, &session).require().await?;

    let updated = UseService::new(&state.db).update(&principal, &id, params).await?;

    Ok((StatusCode::OK, Json(updated)))
}

/// DELETE /v2/uses/{id_or_name} - Delete a use and its paths
///
/// # Authentication
/// Requires Administrator or Developer
#[utoipa::path(
    delete,
    path = "/v2/uses/{id_or_name}",
    tag = "Uses",
    params(("id_or_name" = String, Path, description = "Use id")),
    responses(
        (status = 204, description = "Use deleted"),
        (status = 403, description = "Missing role", body = ErrorDto),
        (status = 404, description = "No use with that id", body = ErrorDto)
    )
)]
pub async fn delete_use(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let (_, principal) = AuthGuard::new(&state.db, &session).require().await?;

    UseService::new(&state.db).delete(&principal, &id).await?;

    Ok(StatusCode::NO_CONTENT)
}
