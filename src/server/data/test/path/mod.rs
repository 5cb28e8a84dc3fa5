use crate::server::{data::path::PathRepository, error::AppError, model::path::InputPath};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;

fn input(use_id: &str, name: &str) -> InputPath {
    InputPath {
        use_id: use_id.to_string(),
        name: name.to_string(),
        mcmeta: true,
        versions: vec!["1.20".to_string(), "1.21".to_string()],
    }
}
