//! Error types for the monitor codec.

use thiserror::Error;

/// Errors that can occur while decoding or encoding monitors.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The payload is not valid JSON, or not shaped like the expected
    /// object.
    #[error("Malformed monitor payload: {0}")]
    Malformed(#[source] serde_json::Error),

    /// A required top-level field (`type` for a monitor, `monitors` for a
    /// list) is absent.
    #[error("Malformed monitor payload: missing field `{0}`")]
    MissingField(&'static str),

    /// The `type` discriminator is not one of the known monitor kinds.
    #[error("unknown monitor type: {0}")]
    UnknownType(String),

    /// A field holds a JSON value of the wrong type.
    #[error("Invalid value for field `{field}`: {source}")]
    FieldType {
        /// Path of the offending field, e.g. `warning` or `scopes[1]`.
        field: String,
        /// The underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },

    /// A monitor could not be serialized.
    #[error("Failed to encode monitor: {0}")]
    Encode(#[source] serde_json::Error),
}
