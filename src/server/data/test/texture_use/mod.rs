use crate::server::{
    data::texture_use::UseRepository, error::AppError, model::texture_use::TextureUse,
    store::DocumentStore,
};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_by_id_or_name;
mod set;
