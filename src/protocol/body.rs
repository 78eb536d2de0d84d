//! Request and response body definitions for the group file sub-commands.
//!
//! These are the wire shapes nested inside command envelopes (requests) and
//! decoded packages (responses). All of them are serialized with
//! [`MsgPackCodec`](crate::codec::MsgPackCodec) in named-field format.
//!
//! Wire-level integer widths are preserved here exactly as the remote sends
//! them; notably the per-entry timestamps are 32-bit seconds and are only
//! widened at the mapping layer.

use serde::{Deserialize, Serialize};
use serde_bytes::ByteBuf;

/// Listing entry discriminator: file.
pub const ENTRY_FILE: u32 = 1;

/// Listing entry discriminator: folder.
pub const ENTRY_FOLDER: u32 = 2;

/// Request body for the file-count sub-command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileCountRequest {
    /// Target group code.
    pub group_code: u64,
    /// Application id; always 3 for group file storage.
    pub app_id: u32,
    /// Storage bus id; 0 queries across all buses.
    pub bus_id: u32,
}

/// Request body for the space-usage sub-command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceRequest {
    /// Target group code.
    pub group_code: u64,
    /// Application id; always 3 for group file storage.
    pub app_id: u32,
}

/// Request body for the file-listing sub-command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileListRequest {
    /// Target group code.
    pub group_code: u64,
    /// Application id; always 3 for group file storage.
    pub app_id: u32,
    /// Folder to list; `"/"` is the root.
    pub folder_id: String,
    /// Page size; callers pass the group's current file count to fetch
    /// everything in one page.
    pub file_count: u32,
    /// Unused by this client; the remote expects it present.
    pub all_file_count: u32,
    /// Requesting surface identifier.
    pub req_from: u32,
    /// Sort order, see [`SORT_BY_TIMESTAMP`](super::SORT_BY_TIMESTAMP).
    pub sort_by: u32,
    /// Entry filter; 0 = no filter.
    pub filter_code: u32,
    /// Filter by uploader uin; 0 = everyone.
    pub uin: u64,
    /// Pagination start index.
    pub start_index: u32,
    /// Opaque continuation token from a previous page, empty for the first.
    pub context: ByteBuf,
    /// Whether online-document folders are included.
    pub show_online_doc_folder: u32,
}

/// Response body for the file-count sub-command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileCountResponse {
    /// Number of files currently stored for the group.
    #[serde(default)]
    pub file_count: u32,
    /// Maximum number of files the group may store.
    #[serde(default)]
    pub limit_count: u32,
}

/// Response body for the space-usage sub-command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceResponse {
    /// Total storage space in bytes.
    #[serde(default)]
    pub total_space: u64,
    /// Used storage space in bytes.
    #[serde(default)]
    pub used_space: u64,
}

/// Response body for the file-listing sub-command.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileListResponse {
    /// Listed entries, in server order.
    #[serde(default)]
    pub items: Vec<ListEntry>,
}

/// One tagged entry of a listing response.
///
/// Exactly one of the detail sections is populated for the known
/// discriminators; unknown discriminators may carry neither.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListEntry {
    /// Entry discriminator, see [`ENTRY_FILE`] and [`ENTRY_FOLDER`].
    #[serde(default)]
    pub entry_type: u32,
    /// File detail, present when `entry_type == ENTRY_FILE`.
    #[serde(default)]
    pub file: Option<FileInfo>,
    /// Folder detail, present when `entry_type == ENTRY_FOLDER`.
    #[serde(default)]
    pub folder: Option<FolderInfo>,
}

/// Wire-level file detail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileInfo {
    #[serde(default)]
    pub file_id: String,
    #[serde(default)]
    pub file_name: String,
    #[serde(default)]
    pub file_size: u64,
    #[serde(default)]
    pub bus_id: u32,
    /// Seconds since epoch, 32-bit on the wire.
    #[serde(default)]
    pub upload_time: u32,
    /// Expiry, seconds since epoch, 32-bit on the wire.
    #[serde(default)]
    pub dead_time: u32,
    /// Last modification, seconds since epoch, 32-bit on the wire.
    #[serde(default)]
    pub modify_time: u32,
    #[serde(default)]
    pub download_times: u32,
    #[serde(default)]
    pub uploader_uin: u64,
    #[serde(default)]
    pub uploader_name: String,
    /// Raw SHA-1 digest bytes.
    #[serde(default)]
    pub sha: ByteBuf,
    /// Raw SHA3-256 digest bytes.
    #[serde(default)]
    pub sha3: ByteBuf,
    /// Raw MD5 digest bytes.
    #[serde(default)]
    pub md5: ByteBuf,
}

/// Wire-level folder detail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FolderInfo {
    #[serde(default)]
    pub folder_id: String,
    #[serde(default)]
    pub folder_name: String,
    #[serde(default)]
    pub total_file_count: u32,
    /// Creation, seconds since epoch, 32-bit on the wire.
    #[serde(default)]
    pub create_time: u32,
    #[serde(default)]
    pub create_uin: u64,
    #[serde(default)]
    pub creator_name: String,
}
