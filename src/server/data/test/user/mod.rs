use crate::server::{
    data::user::{NewUser, UserRepository},
    error::AppError,
    model::user::Role,
    store::DocumentStore,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod set_roles;
mod verify;
