//! Transport module - the collaborator seam to the command channel.
//!
//! The physical channel that carries envelopes to the remote service lives
//! outside this crate (it owns the session, reconnects and transport-level
//! framing). This module defines the contract that channel must satisfy and
//! the frame shape it hands back.
//!
//! Injecting the trait rather than a concrete channel lets tests substitute
//! a scripted double for the real thing.

use async_trait::async_trait;
use bytes::Bytes;

use crate::protocol::CommandEnvelope;

/// A raw response frame returned by the transport for one command.
#[derive(Debug, Clone, Default)]
pub struct ResponseFrame {
    /// Raw response buffer, when the remote produced one.
    pub payload: Option<Bytes>,
    /// Whether the transport considers the exchange successful.
    pub success: bool,
}

impl ResponseFrame {
    /// A successful frame carrying the given buffer.
    pub fn with_payload(payload: impl Into<Bytes>) -> Self {
        Self {
            payload: Some(payload.into()),
            success: true,
        }
    }

    /// A frame that completed without any usable buffer.
    pub fn empty() -> Self {
        Self {
            payload: None,
            success: true,
        }
    }
}

/// Contract for the command channel.
///
/// `send` resolves to `None` on channel-level failure, including a
/// transport-side timeout; the envelope's `timeout` field tells the channel
/// how long to wait for this particular command.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one command envelope and await its response frame.
    async fn send(&self, envelope: CommandEnvelope) -> Option<ResponseFrame>;
}
