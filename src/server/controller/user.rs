use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateUserDto, RoleDto, UserDto, UserProfileDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::CreateUserParam,
        service::user::UserService,
        state::AppState,
    },
};

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(create_user))
        .routes(routes!(get_me))
        .routes(routes!(get_user, delete_user))
        .routes(routes!(add_role))
        .routes(routes!(delete_role))
}

fn service(state: &AppState) -> UserService<'_> {
    UserService::new(
        &state.db,
        state.outbound.mailer.clone(),
        &state.mail_sender,
        &state.app_url,
    )
}

/// POST /v2/users - Register an account
///
/// The account starts unverified; a verification link is emailed to the given address.
/// A 502 means the account was created but the email could not be sent.
#[utoipa::path(
    post,
    path = "/v2/users",
    tag = "Users",
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Blank username, bad email or short password", body = ErrorDto),
        (status = 409, description = "Username or email already exists", body = ErrorDto),
        (status = 502, description = "Account created but verification email failed", body = ErrorDto)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(dto): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = service(&state)
        .create_user(CreateUserParam {
            username: dto.username,
            email: dto.email,
            password: dto.password,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// GET /v2/users/me - The logged-in account
#[utoipa::path(
    get,
    path = "/v2/users/me",
    tag = "Users",
    responses(
        (status = 200, description = "The logged-in account", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    )
)]
pub async fn get_me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let (user, _) = AuthGuard::new(&state.db, &session).require().await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// GET /v2/users/{id} - Public profile of an account
#[utoipa::path(
    get,
    path = "/v2/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "Public profile", body = UserProfileDto),
        (status = 404, description = "No user with that id", body = ErrorDto)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = service(&state).get_by_id(&id).await?;

    Ok((StatusCode::OK, Json(user.into_profile())))
}

/// DELETE /v2/users/{id} - Delete an account
///
/// # Authentication
/// The account owner, or an Administrator
#[utoipa::path(
    delete,
    path = "/v2/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 204, description = "Account deleted"),
        (status = 403, description = "Neither owner nor administrator", body = ErrorDto),
        (status = 404, description = "No user with that id", body = ErrorDto),
        (status = 502, description = "Account deleted but confirmation email failed", body = ErrorDto)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let (_, principal) = AuthGuard::new(&state.db, &session).require().await?;

    service(&state).delete(&principal, &id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /v2/users/{id}/roles - Grant a role
///
/// # Authentication
/// Requires Administrator
#[utoipa::path(
    post,
    path = "/v2/users/{id}/roles",
    tag = "Users",
    params(("id" = String, Path, description = "User id")),
    request_body = RoleDto,
    responses(
        (status = 200, description = "Roles after the change", body = UserDto),
        (status = 400, description = "Unknown role", body = ErrorDto),
        (status = 403, description = "Missing role", body = ErrorDto),
        (status = 404, description = "No user with that id", body = ErrorDto)
    )
)]
pub async fn add_role(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Json(dto): Json<RoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let (_, principal) = AuthGuard::new(&state.db, &session).require().await?;

    let user = service(&state).add_role(&principal, &id, &dto.role).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// DELETE /v2/users/{id}/roles/{role} - Revoke a role
///
/// # Authentication
/// Requires Administrator
#[utoipa::path(
    delete,
    path = "/v2/users/{id}/roles/{role}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User id"),
        ("role" = String, Path, description = "Role name")
    ),
    responses(
        (status = 200, description = "Roles after the change", body = UserDto),
        (status = 400, description = "Unknown role", body = ErrorDto),
        (status = 403, description = "Missing role", body = ErrorDto),
        (status = 404, description = "No user with that id", body = ErrorDto)
    )
)]
pub async fn delete_role(
    State(state): State<AppState>,
    session: Session,
    Path((id, role)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let (_, principal) = AuthGuard::new(&state.db, &session).require().await?;

    let user = service(&state).delete_role(&principal, &id, &role).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
