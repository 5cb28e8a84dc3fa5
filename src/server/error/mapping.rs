use thiserror::Error;

/// Failures converting between stored and domain record shapes.
///
/// Raised by the pure mapper functions and by the decode/encode helpers the
/// repositories call around them. None of these involve I/O.
#[derive(Error, Debug)]
pub enum MappingError {
    /// A stored use has an empty `editions` list, so it has no edition to map to.
    #[error("Use {use_id} has no editions")]
    MissingEdition {
        /// Id of the offending use
        use_id: String,
    },

    /// A stored epoch-millisecond date is outside the representable range.
    #[error("Record {id} has an invalid timestamp {value}")]
    InvalidTimestamp {
        /// Id of the offending record
        id: String,
        /// The stored value
        value: i64,
    },

    /// A stored document does not have the expected layout.
    #[error("Record {id} in {collection} has an unexpected shape: {source}")]
    Decode {
        /// Collection the record was read from
        collection: &'static str,
        /// Id of the record
        id: String,
        /// The underlying deserialization error
        #[source]
        source: serde_json::Error,
    },

    /// A record could not be turned into a stored document.
    #[error("Record could not be encoded for {collection}: {reason}")]
    Encode {
        /// Collection the record was meant for
        collection: &'static str,
        /// Why encoding failed
        reason: String,
    },
}
