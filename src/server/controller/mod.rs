//! HTTP request handlers.
//!
//! Handlers resolve the principal, call one service operation and wrap the result.
//! Every route is registered with its OpenAPI description through `utoipa-axum`.

pub mod addon;
pub mod auth;
pub mod cloudflare;
pub mod contribution;
pub mod mods;
pub mod pack;
pub mod path;
pub mod texture;
pub mod texture_use;
pub mod user;
