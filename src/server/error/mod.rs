//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and the lookup table that
//! turns each error kind into an HTTP status. Repositories and the mapper raise
//! `NotFound`/`Validation`; services add `Permission`, `Conflict` and `Upstream`.
//! Nothing below the controller layer knows about status codes.

pub mod auth;
pub mod config;
pub mod mapping;
pub mod review;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, mapping::MappingError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Infrastructure failures are wrapped
/// transparently; domain failures carry a message that is safe to show the client.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// No authenticated principal could be resolved for the request.
    ///
    /// Delegates to `AuthError::into_response()`.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// JSON (de)serialization failure outside of the mapper.
    #[error(transparent)]
    SerdeErr(#[from] serde_json::Error),

    /// Socket or listener failure while serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Entity absent.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Malformed input: unknown role, empty mandatory field, author-set mismatch,
    /// stored record that cannot be mapped.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    Validation(String),

    /// Authenticated, but not allowed to perform the operation.
    ///
    /// Results in 403 Forbidden with the provided error message.
    #[error("{0}")]
    Permission(String),

    /// Uniqueness violation or a state that forbids the requested transition.
    ///
    /// Results in 409 Conflict with the provided error message.
    #[error("{0}")]
    Conflict(String),

    /// A dependent external call failed or answered with an unexpected shape.
    ///
    /// Results in 502 Bad Gateway with the provided error message.
    #[error("{0}")]
    Upstream(String),
}

/// Transport failures from outbound HTTP calls are upstream failures.
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Upstream(err.to_string())
    }
}

/// Stored records that cannot be mapped are reported as validation failures.
impl From<MappingError> for AppError {
    fn from(err: MappingError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl AppError {
    /// Status code for this error kind.
    ///
    /// Pure lookup; `AuthErr` is resolved by `AuthError` itself and is reported here
    /// as 401 for logging purposes only.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::AuthErr(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Permission(_) => StatusCode::FORBIDDEN,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// Domain errors return their message with the status from [`AppError::status`].
/// Infrastructure errors are logged with full details but return a generic message to
/// avoid information leakage.
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(_)
            | Self::Validation(_)
            | Self::Permission(_)
            | Self::Conflict(_) => {
                let status = self.status();
                (status, Json(ErrorDto { error: self.to_string() })).into_response()
            }
            Self::Upstream(msg) => {
                tracing::warn!("Upstream failure: {}", msg);
                (StatusCode::BAD_GATEWAY, Json(ErrorDto { error: msg })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to
/// the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
