//! Test fixtures providing stored-shape documents without database insertion.
//!
//! Each function returns a `serde_json::Value` laid out exactly as the document store
//! holds it, including the legacy field names that the application's mapper renames.
//! Factories use these as defaults; tests can also feed them straight into mapper
//! functions.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let stone = fixture::texture::legacy("1", "Stone", &["block"]);
//! ```

pub mod addon;
pub mod contribution;
pub mod pack;
pub mod path;
pub mod texture;
pub mod texture_use;
pub mod user;
