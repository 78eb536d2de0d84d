//! Error types for oidb-client.

use thiserror::Error;

/// Main error type for all OIDB operations.
///
/// The first three variants are fatal to the enclosing workflow and abort it
/// immediately; unrecognized listing entries are logged and skipped at the
/// mapping layer and never surface here.
#[derive(Debug, Error)]
pub enum OidbError {
    /// Transport produced no response frame (channel-level failure).
    #[error("transport returned no response frame")]
    Transport,

    /// Transport returned a frame, but its payload is absent.
    #[error("response frame carried no payload")]
    EmptyPayload,

    /// Both package decode attempts failed (with and without header skip).
    #[error("response package decode failed: {0}")]
    Decode(#[source] DecodeError),

    /// Request body serialization error.
    #[error("request body encode failed: {0}")]
    Encode(#[from] rmp_serde::encode::Error),
}

/// Failure detail for a single package decode attempt.
///
/// Carried inside [`OidbError::Decode`] once both attempts are exhausted.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The zlib stream failed to inflate.
    #[error("inflate failed: {0}")]
    Inflate(#[from] std::io::Error),

    /// The buffer did not parse as a structured package.
    #[error("malformed package: {0}")]
    Malformed(#[from] rmp_serde::decode::Error),
}

/// Result type alias using OidbError.
pub type Result<T> = std::result::Result<T, OidbError>;
