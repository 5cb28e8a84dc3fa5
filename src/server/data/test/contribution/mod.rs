use crate::server::{
    data::contribution::ContributionRepository,
    error::AppError,
    model::contribution::{ContributionCreationParam, Resolution},
};
use test_utils::{builder::TestBuilder, factory};
