//! Document store client.
//!
//! Generic access to named collections of loosely-typed records, all persisted in the
//! single `document` table. The store enforces no schema, no foreign keys and no
//! cross-collection transactions; typing is imposed by the mapper and repositories
//! above it. Each call is a single statement, so single-document writes are atomic
//! while read-modify-write sequences built on top of them are not.

pub mod collection;

use sea_orm::DatabaseConnection;
use serde_json::{Map, Value};

pub use collection::Collection;

/// An untyped record as held by the store.
pub type Document = Map<String, Value>;

/// Name of the field carrying a record's key on read.
pub const ID_FIELD: &str = "id";

/// Collection names used by the repositories.
pub mod collections {
    pub const ADDONS: &str = "addons";
    pub const CONTRIBUTIONS: &str = "contributions";
    pub const MODS: &str = "mods";
    pub const PACK_VERSIONS: &str = "pack_versions";
    pub const PACKS: &str = "packs";
    pub const PATHS: &str = "paths";
    pub const SUBMISSIONS: &str = "submissions";
    pub const TEXTURES: &str = "textures";
    pub const USERS: &str = "users";
    pub const USES: &str = "uses";
}

/// Entry point handing out collection handles over one database connection.
pub struct DocumentStore<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DocumentStore<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns a handle to the named collection.
    ///
    /// Collections exist implicitly; a handle to an empty collection reads as empty.
    pub fn collection(&self, name: &'static str) -> Collection<'a> {
        Collection::new(self.db, name)
    }
}
