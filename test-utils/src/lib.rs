//! Pack API Test Utils
//!
//! Provides shared testing utilities for the pack API. This crate offers a builder for
//! creating test contexts backed by in-memory SQLite databases, plus factories and
//! fixtures that seed the document store with records in their *stored* shape.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Inserts stored-shape documents into the `document` table
//! - **fixture**: Builds stored-shape documents in memory without inserting them
//!
//! Factories deliberately write the legacy layout (`type` instead of `tags`,
//! `textureUseName`/`editions`, `useID`/`path`, ...) so tests read them back through
//! the application's mapper rather than through a shortcut.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn reads_texture() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_document_store().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     factory::texture::create_texture(db).await?;
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
