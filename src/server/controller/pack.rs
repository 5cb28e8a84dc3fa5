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
        model::pack::{Pack, PackAll, Submission, SubmissionParam},
        service::{pack::PackService, submission::SubmissionService},
        state::AppState,
    },
};

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(get_packs))
        .routes(routes!(get_pack))
        .routes(routes!(get_submissions))
        .routes(routes!(get_every_pack))
        .routes(routes!(
            get_submission,
            create_submission,
            update_submission,
            delete_submission
        ))
}

#[utoipa::path(
    get,
    path = "/v2/packs/raw",
    tag = "Packs",
    responses(
        (status = 200, description = "Packs keyed by id", body = BTreeMap<String, Pack>)
    )
)]
pub async fn get_packs(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let packs = PackService::new(&state.db).get_raw().await?;

    Ok((StatusCode::OK, Json(packs)))
}

#[utoipa::path(
    get,
    path = "/v2/packs/{id}",
    tag = "Packs",
    params(("id" = String, Path, description = "Pack id")),
    responses(
        (status = 200, description = "The pack", body = Pack),
        (status = 404, description = "No pack with that id", body = ErrorDto)
    )
)]
pub async fn get_pack(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let pack = PackService::new(&state.db).get_by_id(&id).await?;

    Ok((StatusCode::OK, Json(pack)))
}

#[utoipa::path(
    get,
    path = "/v2/submissions/raw",
    tag = "Submissions",
    responses(
        (status = 200, description = "Submission settings keyed by pack id", body = BTreeMap<String, Submission>)
    )
)]
pub async fn get_submissions(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let submissions = SubmissionService::new(&state.db).get_raw().await?;

    Ok((StatusCode::OK, Json(submissions)))
}

/// GET /v2/submissions/all - Every submission joined with its pack
///
/// Submissions whose pack record is missing are left out.
#[utoipa::path(
    get,
    path = "/v2/submissions/all",
    tag = "Submissions",
    responses(
        (status = 200, description = "Pack and submission keyed by pack id", body = BTreeMap<String, PackAll>)
    )
)]
pub async fn get_every_pack(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let packs = SubmissionService::new(&state.db).get_every_pack().await?;

    Ok((StatusCode::OK, Json(packs)))
}

#[utoipa::path(
    get,
    path = "/v2/submissions/{id}",
    tag = "Submissions",
    params(("id" = String, Path, description = "Pack id")),
    responses(
        (status = 200, description = "Submission settings", body = Submission),
        (status = 404, description = "Pack has no submission settings", body = ErrorDto)
    )
)]
pub async fn get_submission(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let submission = SubmissionService::new(&state.db).get_by_id(&id).await?;

    Ok((StatusCode::OK, Json(submission)))
}

/// POST /v2/submissions/{id} - Enable submissions for a pack
///
/// # Authentication
/// Requires Administrator or Developer
#[utoipa::path(
    post,
    path = "/v2/submissions/{id}",
    tag = "Submissions",
    params(("id" = String, Path, description = "Pack id")),
    request_body = SubmissionParam,
    responses(
        (status = 201, description = "Submission settings created", body = Submission),
        (status = 403, description = "Missing role", body = ErrorDto),
        (status = 409, description = "Settings already exist", body = ErrorDto)
    )
)]
pub async fn create_submission(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Json(params): Json<SubmissionParam>,
) -> Result<impl IntoResponse, AppError> {
    let (_, principal) = AuthGuard::new(&state.db, &session).require().await?;

    let submission = SubmissionService::new(&state.db).create(&principal, &id, params).await?;

    Ok((StatusCode::CREATED, Json(submission)))
}

/// PUT /v2/submissions/{id} - Replace submission settings
///
/// # Authentication
/// Requires Administrator or Developer
#[utoipa::path(
    put,
    path = "/v2/submissions/{id}",
    tag = "Submissions",
    params(("id" = String, Path, description = "Pack id")),
    request_body = SubmissionParam,
    responses(
        (status = 200, description = "Submission settings updated", body = Submission),
        (status = 403, description = "Missing role", body = ErrorDto),
        (status = 404, description = "Pack has no submission settings", body = ErrorDto)
    )
)]
pub async fn update_submission(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Json(params): Json<SubmissionParam>,
) -> Result<impl IntoResponse, AppError> {
    let (_, principal) = AuthGuard::new(&state.db, &session).require().await?;

    let submission = SubmissionService::new(&state.db).update(&principal, &id, params).await?;

    Ok((StatusCode::OK, Json(submission)))
}

/// DELETE /v2/submissions/{id}
///
/// # Authentication
/// Requires Administrator or Developer
#[utoipa::path(
    delete,
    path = "/v2/submissions/{id}",
    tag = "Submissions",
    params(("id" = String, Path, description = "Pack id")),
    responses(
        (status = 204, description = "Submission settings deleted"),
        (status = 403, description = "Missing role", body = ErrorDto),
        (status = 404, description = "Pack has no submission settings", body = ErrorDto)
    )
)]
pub async fn delete_submission(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let (_, principal) = AuthGuard::new(&state.db, &session).require().await?;

    SubmissionService::new(&state.db).delete(&principal, &id).await?;

    Ok(StatusCode::NO_CONTENT)
}
