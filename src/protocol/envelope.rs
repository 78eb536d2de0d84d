//! Outbound command envelopes.
//!
//! Every request to the command-routing service travels as an envelope:
//!
//! ```text
//! ┌──────────────┬────────────┬────────────────┬─────────┬─────────┐
//! │ command name │ command id │ sub-command id │ payload │ timeout │
//! │ string       │ u32        │ u32            │ bytes   │ duration│
//! └──────────────┴────────────┴────────────────┴─────────┴─────────┘
//! ```
//!
//! The command id selects the remote operation family, the sub-command id
//! the concrete operation within it; the payload is the structured-binary
//! request body for that sub-command. Envelopes are immutable and built
//! fresh per call.

use std::time::Duration;

use bytes::Bytes;

/// Command name for the group file-storage operation family.
pub const GROUP_FILE_COMMAND: &str = "OidbSvc.0x6d8_1";

/// Command id for the group file-storage operation family (0x6d8).
pub const GROUP_FILE_COMMAND_ID: u32 = 1752;

/// Sub-command: list files and folders.
pub const SUB_CMD_FILE_LIST: u32 = 1;

/// Sub-command: fetch file count.
pub const SUB_CMD_FILE_COUNT: u32 = 2;

/// Sub-command: fetch space usage.
pub const SUB_CMD_SPACE: u32 = 3;

/// Listing sort order: by timestamp.
pub const SORT_BY_TIMESTAMP: u32 = 1;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Timeout for listing requests, which the remote serves noticeably slower
/// than the metadata sub-commands.
pub const FILE_LIST_TIMEOUT: Duration = Duration::from_secs(30);

/// A typed outbound command envelope.
#[derive(Debug, Clone)]
pub struct CommandEnvelope {
    /// Routed command name.
    pub command: String,
    /// Numeric command id.
    pub command_id: u32,
    /// Sub-command id within the command family.
    pub sub_command_id: u32,
    /// Serialized inner request body.
    pub payload: Bytes,
    /// Per-request timeout the transport should apply.
    pub timeout: Duration,
}

/// Builder for [`CommandEnvelope`].
///
/// Purely structural; performs no I/O and retains no state between builds.
///
/// # Example
///
/// ```
/// use oidb_client::protocol::{EnvelopeBuilder, GROUP_FILE_COMMAND,
///     GROUP_FILE_COMMAND_ID, SUB_CMD_FILE_COUNT, DEFAULT_TIMEOUT};
///
/// let envelope = EnvelopeBuilder::new(
///     GROUP_FILE_COMMAND,
///     GROUP_FILE_COMMAND_ID,
///     SUB_CMD_FILE_COUNT,
/// )
/// .payload(vec![0x84])
/// .build();
///
/// assert_eq!(envelope.command_id, 1752);
/// assert_eq!(envelope.timeout, DEFAULT_TIMEOUT);
/// ```
#[derive(Debug)]
pub struct EnvelopeBuilder {
    command: String,
    command_id: u32,
    sub_command_id: u32,
    payload: Bytes,
    timeout: Duration,
}

impl EnvelopeBuilder {
    /// Start an envelope for the given command and sub-command.
    pub fn new(command: impl Into<String>, command_id: u32, sub_command_id: u32) -> Self {
        Self {
            command: command.into(),
            command_id,
            sub_command_id,
            payload: Bytes::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the serialized inner request body.
    pub fn payload(mut self, payload: impl Into<Bytes>) -> Self {
        self.payload = payload.into();
        self
    }

    /// Override the default per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Finish building the envelope.
    pub fn build(self) -> CommandEnvelope {
        CommandEnvelope {
            command: self.command,
            command_id: self.command_id,
            sub_command_id: self.sub_command_id,
            payload: self.payload,
            timeout: self.timeout,
        }
    }
}
