//! Server-side domain models and parameter types.
//!
//! This module contains the domain shape of every entity family. These types never
//! carry legacy field names; the mapper converts stored records into them at the
//! repository boundary. Request and response bodies reuse them directly except where
//! a field must stay private (see `crate::model` for those DTOs).

pub mod addon;
pub mod cloudflare;
pub mod contribution;
pub mod mods;
pub mod pack;
pub mod path;
pub mod permission;
pub mod texture;
pub mod texture_use;
pub mod user;
