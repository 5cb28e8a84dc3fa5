//! Factory methods for seeding the document store in tests.
//!
//! Factories insert stored-shape documents (see [`crate::fixture`]) into the `document`
//! table. Unlike the application's repositories they never run the mapper, so a test
//! that reads a factory-created record back through a repository exercises the full
//! stored-to-domain conversion.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let texture = factory::texture::create_texture(&db).await?;
//!     let moderator = factory::user::UserFactory::new(&db)
//!         .roles(&["Moderator"])
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `document` - Insert any JSON object into any collection
//! - `texture` - Legacy or migrated texture documents
//! - `texture_use` / `path` / `contribution` - Texture related records
//! - `user` - User documents with roles and verification state
//! - `addon` - Add-on documents in a chosen review state
//! - `pack` - Packs and their submission settings
//! - `helpers` - Unique id generation and multi-record helpers

pub mod addon;
pub mod contribution;
pub mod document;
pub mod helpers;
pub mod pack;
pub mod path;
pub mod texture;
pub mod texture_use;
pub mod user;

pub use addon::create_addon;
pub use document::insert_document;
pub use texture::create_texture;
pub use user::create_user;
