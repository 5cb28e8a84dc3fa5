//! User domain models and parameters.
//!
//! Users carry a closed set of roles. Role mutation is a pure set operation that
//! never reorders or duplicates existing entries.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    model::user::{UserDto, UserProfileDto},
    server::error::AppError,
};

/// Fixed set of roles a user can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Role {
    Administrator,
    Moderator,
    Developer,
    Council,
    Translator,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Administrator,
        Role::Moderator,
        Role::Developer,
        Role::Council,
        Role::Translator,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Administrator => "Administrator",
            Self::Moderator => "Moderator",
            Self::Developer => "Developer",
            Self::Council => "Council",
            Self::Translator => "Translator",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a role name exactly as stored.
///
/// # Returns
/// - `Ok(Role)` - Known role
/// - `Err(AppError::Validation)` - Unknown role, message lists the valid ones
impl FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = Role::ALL.iter().map(|r| r.as_str()).collect();
                AppError::Validation(format!(
                    "Invalid role, must be one of: {}",
                    valid.join(", ")
                ))
            })
    }
}

/// User account as seen by the service layer.
///
/// Password material stays in the repository and never reaches this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub roles: Vec<Role>,
    #[serde(rename = "isVerified")]
    pub is_verified: bool,
    /// Present only while the account is unverified.
    #[serde(
        rename = "verificationToken",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub verification_token: Option<String>,
}

impl User {
    /// Converts the user to the account view. The verification token is left out.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            roles: self.roles.iter().map(|r| r.to_string()).collect(),
            is_verified: self.is_verified,
        }
    }

    pub fn into_profile(self) -> UserProfileDto {
        UserProfileDto {
            id: self.id,
            username: self.username,
        }
    }
}

/// Adds `role` to `roles` unless already present.
///
/// Existing entries keep their position; a new role is appended.
pub fn with_role(mut roles: Vec<Role>, role: Role) -> Vec<Role> {
    if !roles.contains(&role) {
        roles.push(role);
    }
    roles
}

/// Removes `role` from `roles`; absent roles are a no-op.
pub fn without_role(mut roles: Vec<Role>, role: Role) -> Vec<Role> {
    roles.retain(|r| *r != role);
    roles
}

/// Parameters for registering a new account.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub username: String,
    pub email: String,
    pub password: String,
}
