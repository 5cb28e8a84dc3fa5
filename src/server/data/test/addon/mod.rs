use crate::server::{
    data::addon::AddonRepository,
    error::AppError,
    model::addon::{AddonCreationParam, AddonOptions, ReviewStatus},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_status;
