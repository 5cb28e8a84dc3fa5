use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::api::ErrorDto,
    server::{
        error::AppError, model::mods::Mod, service::mods::ModsService, state::AppState,
    },
};

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(get_raw))
        .routes(routes!(get_pack_versions))
        .routes(routes!(get_thumbnail))
        .routes(routes!(get_curse_name))
        .routes(routes!(get_name))
}

fn service(state: &AppState) -> ModsService<'_> {
    ModsService::new(&state.db, state.outbound.catalog.clone())
}

#[utoipa::path(
    get,
    path = "/v2/mods/raw",
    tag = "Mods",
    responses(
        (status = 200, description = "Mods keyed by id", body = BTreeMap<String, Mod>)
    )
)]
pub async fn get_raw(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mods = service(&state).get_raw().await?;

    Ok((StatusCode::OK, Json(mods)))
}

/// GET /v2/mods/pack_versions - Pack format per game version, passed through as stored
#[utoipa::path(
    get,
    path = "/v2/mods/pack_versions",
    tag = "Mods",
    responses(
        (status = 200, description = "Pack version records keyed by id", body = Object)
    )
)]
pub async fn get_pack_versions(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let versions = service(&state).get_pack_versions().await?;

    Ok((StatusCode::OK, Json(versions)))
}

/// GET /v2/mods/{id}/thumbnail - Logo thumbnail URL from the mod catalog
#[utoipa::path(
    get,
    path = "/v2/mods/{id}/thumbnail",
    tag = "Mods",
    params(("id" = String, Path, description = "Catalog mod id")),
    responses(
        (status = 200, description = "Thumbnail URL", body = String),
        (status = 404, description = "Mod has no logo", body = ErrorDto),
        (status = 502, description = "Catalog unavailable", body = ErrorDto)
    )
)]
pub async fn get_thumbnail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let url = service(&state).get_thumbnail(&id).await?;

    Ok((StatusCode::OK, Json(url)))
}

#[utoipa::path(
    get,
    path = "/v2/mods/{id}/curse_name",
    tag = "Mods",
    params(("id" = String, Path, description = "Catalog mod id")),
    responses(
        (status = 200, description = "Name in the catalog", body = String),
        (status = 404, description = "Catalog record has no name", body = ErrorDto),
        (status = 502, description = "Catalog unavailable", body = ErrorDto)
    )
)]
pub async fn get_curse_name(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let name = service(&state).get_catalog_name(&id).await?;

    Ok((StatusCode::OK, Json(name)))
}

#[utoipa::path(
    get,
    path = "/v2/mods/{id}/name",
    tag = "Mods",
    params(("id" = String, Path, description = "Mod id")),
    responses(
        (status = 200, description = "Name in the local store", body = String),
        (status = 404, description = "No mod with that id", body = ErrorDto)
    )
)]
pub async fn get_name(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let name = service(&state).get_name_in_database(&id).await?;

    Ok((StatusCode::OK, Json(name)))
}
