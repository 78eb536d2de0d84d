//! Protocol module - command envelopes and sub-command wire bodies.
//!
//! This module defines the outbound side of the protocol:
//! - Command envelope construction (name, ids, payload, timeout)
//! - Request/response body shapes for the group file sub-commands
//! - Protocol constants (command ids, discriminators, sort orders)

mod body;
mod envelope;

pub use body::{
    FileCountRequest, FileCountResponse, FileInfo, FileListRequest, FileListResponse,
    FolderInfo, ListEntry, SpaceRequest, SpaceResponse, ENTRY_FILE, ENTRY_FOLDER,
};
pub use envelope::{
    CommandEnvelope, EnvelopeBuilder, DEFAULT_TIMEOUT, FILE_LIST_TIMEOUT, GROUP_FILE_COMMAND,
    GROUP_FILE_COMMAND_ID, SORT_BY_TIMESTAMP, SUB_CMD_FILE_COUNT, SUB_CMD_FILE_LIST,
    SUB_CMD_SPACE,
};
