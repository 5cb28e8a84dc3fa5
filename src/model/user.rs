use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Full account view, returned to the account owner and to administrators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: String,
    pub username: String,
    pub email: String,
    pub roles: Vec<String>,
    #[serde(rename = "isVerified")]
    pub is_verified: bool,
}

/// Public part of an account, used when listing contributors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserProfileDto {
    pub id: String,
    pub username: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateUserDto {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Role name as sent by clients; validated against the fixed role set.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RoleDto {
    pub role: String,
}
