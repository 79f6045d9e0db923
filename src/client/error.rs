//! Error types for the monitors client.

use thiserror::Error;

use crate::{codec::CodecError, http_client::TransportError};

/// Errors returned by [`super::MonitorClient`] operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The HTTP exchange failed.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The request could not be encoded or the response could not be
    /// decoded.
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),
}
