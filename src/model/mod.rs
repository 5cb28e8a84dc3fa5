//! Transport DTOs shared by the HTTP layer.
//!
//! Domain types that are returned unchanged live in `server::model` and derive
//! `ToSchema` themselves; the types here exist where the wire shape differs from the
//! domain shape or leaves fields out.

pub mod api;
pub mod user;
