use crate::server::{
    data::texture::TextureRepository,
    error::AppError,
    model::texture::{Texture, TextureCreationParam, TextureSearchParam},
    store::DocumentStore,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod search;
