//! Legacy mapper.
//!
//! The document store still holds records in their historical layout. Each submodule
//! defines the stored shape of one entity family as its own type and a pair of pure
//! functions converting between it and the domain model: `map_*` from stored to
//! domain, `unmap_*` back. Batch variants keep order and length.
//!
//! Nothing here performs I/O. Repositories call [`decode`] on a raw document, pass
//! the typed stored record through `map_*`, and run the reverse path on writes.

pub mod contribution;
pub mod mods;
pub mod path;
pub mod texture;
pub mod texture_use;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::server::{
    error::mapping::MappingError,
    store::{Document, ID_FIELD},
};

/// Deserializes a stored document into its typed stored shape.
///
/// # Arguments
/// - `collection` - Collection the document came from, for error reporting
/// - `document` - Raw document with its `id` field injected
///
/// # Returns
/// - `Ok(T)` - Typed stored record
/// - `Err(MappingError::Decode)` - Document does not have the expected layout
pub fn decode<T: DeserializeOwned>(
    collection: &'static str,
    document: Document,
) -> Result<T, MappingError> {
    let id = document
        .get(ID_FIELD)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    serde_json::from_value(Value::Object(document)).map_err(|source| MappingError::Decode {
        collection,
        id,
        source,
    })
}

/// Serializes a typed stored record into a raw document.
///
/// # Returns
/// - `Ok(Document)` - JSON object ready for the store
/// - `Err(MappingError::Encode)` - Record does not serialize to a JSON object
pub fn encode<T: Serialize>(collection: &'static str, record: &T) -> Result<Document, MappingError> {
    match serde_json::to_value(record) {
        Ok(Value::Object(document)) => Ok(document),
        Ok(other) => Err(MappingError::Encode {
            collection,
            reason: format!("expected an object, got {other}"),
        }),
        Err(e) => Err(MappingError::Encode {
            collection,
            reason: e.to_string(),
        }),
    }
}
