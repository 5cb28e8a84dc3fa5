use crate::server::{
    data::submission::SubmissionRepository,
    error::AppError,
    model::pack::{SubmissionChannels, SubmissionParam},
};
use test_utils::{builder::TestBuilder, factory};

mod get_every_pack;
