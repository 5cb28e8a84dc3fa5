use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Body of the email verification endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VerifiedDto {
    pub verified: bool,
}
