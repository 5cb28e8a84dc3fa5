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
    model::{api::ErrorDto, user::UserProfileDto},
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::contribution::{
            Contribution, ContributionCreationParam, ContributionWithRelations,
        },
        service::contribution::ContributionService,
        state::AppState,
    },
};

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(create_contribution))
        .routes(routes!(get_raw))
        .routes(routes!(get_all_with_relations))
        .routes(routes!(get_by_texture))
        .routes(routes!(get_contribution, delete_contribution))
        .routes(routes!(get_contributors))
}

#[utoipa::path(
    get,
    path = "/v2/contributions/raw",
    tag = "Contributions",
    responses(
        (status = 200, description = "Contributions keyed by id", body = BTreeMap<String, Contribution>)
    )
)]
pub async fn get_raw(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let contributions = ContributionService::new(&state.db).get_raw().await?;

    Ok((StatusCode::OK, Json(contributions)))
}

/// GET /v2/contributions/all - Every contribution with its texture and contributor profiles
#[utoipa::path(
    get,
    path = "/v2/contributions/all",
    tag = "Contributions",
    responses(
        (status = 200, description = "Joined contributions", body = Vec<ContributionWithRelations>)
    )
)]
pub async fn get_all_with_relations(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let contributions = ContributionService::new(&state.db)
        .get_all_with_relations()
        .await?;

    Ok((StatusCode::OK, Json(contributions)))
}

#[utoipa::path(
    get,
    path = "/v2/contributions/texture/{texture_id}",
    tag = "Contributions",
    params(("texture_id" = i64, Path, description = "Texture id")),
    responses(
        (status = 200, description = "Contributions to the texture, oldest first", body = Vec<Contribution>)
    )
)]
pub async fn get_by_texture(
    State(state): State<AppState>,
    Path(texture_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let contributions = ContributionService::new(&state.db)
        .get_by_texture(texture_id)
        .await?;

    Ok((StatusCode::OK, Json(contributions)))
}

#[utoipa::path(
    get,
    path = "/v2/contributions/{id}",
    tag = "Contributions",
    params(("id" = String, Path, description = "Contribution id")),
    responses(
        (status = 200, description = "The contribution", body = Contribution),
        (status = 404, description = "No contribution with that id", body = ErrorDto)
    )
)]
pub async fn get_contribution(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let contribution = ContributionService::new(&state.db).get_by_id(&id).await?;

    Ok((StatusCode::OK, Json(contribution)))
}

/// GET /v2/contributions/{id}/contributors - Public profiles of the credited users
///
/// Contributors without a user document are left out.
#[utoipa::path(
    get,
    path = "/v2/contributions/{id}/contributors",
    tag = "Contributions",
    params(("id" = String, Path, description = "Contribution id")),
    responses(
        (status = 200, description = "Contributor profiles", body = Vec<UserProfileDto>),
        (status = 404, description = "No contribution with that id", body = ErrorDto)
    )
)]
pub async fn get_contributors(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let profiles: Vec<UserProfileDto> = ContributionService::new(&state.db)
        .get_contributors(&id)
        .await?
        .into_iter()
        .map(|user| user.into_profile())
        .collect();

    Ok((StatusCode::OK, Json(profiles)))
}

/// POST /v2/contributions - Record a contribution
///
/// # Authentication
/// Requires Administrator or Developer
#[utoipa::path(
    post,
    path = "/v2/contributions",
    tag = "Contributions",
    request_body = ContributionCreationParam,
    responses(
        (status = 201, description = "Contribution recorded", body = Contribution),
        (status = 400, description = "No contributors or unknown texture", body = ErrorDto),
        (status = 403, description = "Missing role", body = ErrorDto)
    )
)]
pub async fn create_contribution(
    State(state): State<AppState>,
    session: Session,
    Json(params): Json<ContributionCreationParam>,
) -> Result<impl IntoResponse, AppError> {
    let (_, principal) = AuthGuard::new(&state.db, &session).require().await?;

    let contribution = ContributionService::new(&state.db).create(&principal, params).await?;

    Ok((StatusCode::CREATED, Json(contribution)))
}

/// DELETE /v2/contributions/{id}
///
/// # Authentication
/// Requires Administrator or Developer
#[utoipa::path(
    delete,
    path = "/v2/contributions/{id}",
    tag = "Contributions",
    params(("id" = String, Path, description = "Contribution id")),
    responses(
        (status = 204, description = "Contribution deleted"),
        (status = 403, description = "Missing role", body = ErrorDto),
        (status = 404, description = "No contribution with that id", body = ErrorDto)
    )
)]
pub async fn delete_contribution(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let (_, principal) = AuthGuard::new(&state.db, &session).require().await?;

    ContributionService::new(&state.db).delete(&principal, &id).await?;

    Ok(StatusCode::NO_CONTENT)
}
