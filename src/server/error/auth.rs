use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The session carries no authenticated user id.
    ///
    /// Identity is established by the external login flow; a request without it
    /// results in a 401 Unauthorized response.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// The session names a user id that has no user document.
    ///
    /// Happens when an account is deleted while a session is still alive.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Both variants result in 401 Unauthorized with a generic message; the detailed
/// reason is logged at debug level only.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: "Authentication required".to_string(),
            }),
        )
            .into_response()
    }
}
