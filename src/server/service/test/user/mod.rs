use std::sync::Arc;

use crate::server::{
    error::AppError,
    model::{permission::Principal, user::{CreateUserParam, Role}},
    outbound::fake::RecordingMailer,
    service::user::UserService,
};
use test_utils::{builder::TestBuilder, factory};

mod create_user;
mod delete;
mod roles;
mod verify;

const SENDER: &str = "noreply@example.com";
const APP_URL: &str = "https://api.example.com";

fn service<'a>(db: &'a sea_orm::DatabaseConnection, mailer: &RecordingMailer) -> UserService<'a> {
    UserService::new(db, Arc::new(mailer.clone()), SENDER, APP_URL)
}

fn admin() -> Principal {
    Principal::new("admin", vec![Role::Administrator])
}

fn signup(username: &str) -> CreateUserParam {
    CreateUserParam {
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password: "correct horse".to_string(),
    }
}
