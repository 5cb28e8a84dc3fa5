use crate::server::{
    error::AppError,
    model::{
        addon::{AddonCreationParam, AddonOptions, AddonReviewBody, ReviewStatus},
        permission::Principal,
        user::Role,
    },
    service::addon::AddonService,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_id;
mod get_by_status;
mod lifecycle;
mod reopen;
mod review;

fn body(name: &str, authors: &[&str]) -> AddonCreationParam {
    AddonCreationParam {
        name: name.to_string(),
        description: format!("{name} description"),
        authors: authors.iter().map(|a| a.to_string()).collect(),
        options: AddonOptions::default(),
        downloads: vec![],
    }
}

fn author(id: &str) -> Principal {
    Principal::new(id, vec![])
}

fn moderator() -> Principal {
    Principal::new("mod", vec![Role::Moderator])
}

fn deny(reason: &str) -> AddonReviewBody {
    AddonReviewBody {
        status: ReviewStatus::Denied,
        reason: Some(reason.to_string()),
    }
}
