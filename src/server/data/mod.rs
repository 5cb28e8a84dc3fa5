//! Repository layer for every entity family.
//!
//! Repositories wrap a [`Collection`](crate::server::store::Collection), run the legacy
//! mapper in both directions and return domain models, so nothing above this layer
//! sees a stored layout. They raise `NotFound` for absent records and `Validation`
//! for records that cannot be mapped or that reference a missing parent.
//!
//! The store enforces no relations. Repositories therefore check parents on write
//! (a use's texture, a path's use, a contribution's texture) and cascade deletes
//! downwards (texture → uses → paths).
//!
//! Writes are followed by a fresh read so callers get what the store actually holds.

pub mod addon;
pub mod contribution;
pub mod mods;
pub mod pack;
pub mod path;
pub mod submission;
pub mod texture;
pub mod texture_use;
pub mod user;

#[cfg(test)]
mod test;
