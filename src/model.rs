//! Typed domain records returned by the group file workflows.
//!
//! These are the outward-facing shapes: timestamps widened to 64-bit
//! seconds, digests rendered as lowercase hex. All of them are
//! request-scoped values; nothing here outlives a single call.

use serde::{Deserialize, Serialize};

/// Aggregate file-storage metadata for a group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSystemInfo {
    /// Number of files currently stored.
    pub file_count: u32,
    /// Maximum number of files the group may store.
    pub total_count: u32,
    /// Total storage space in bytes.
    pub total_space: u64,
    /// Used storage space in bytes.
    pub used_space: u64,
}

/// One file of a group listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Remote file identifier.
    pub file_id: String,
    /// Display name.
    pub file_name: String,
    /// Size in bytes.
    pub file_size: u64,
    /// Storage bus the file lives on.
    pub bus_id: u32,
    /// Upload time, seconds since epoch.
    pub upload_time: i64,
    /// Expiry time, seconds since epoch; 0 = never.
    pub expire_time: i64,
    /// Last modification time, seconds since epoch.
    pub modify_time: i64,
    /// Download counter.
    pub download_times: u32,
    /// Uploader uin.
    pub uploader: u64,
    /// Uploader display name.
    pub uploader_name: String,
    /// SHA-1 digest, lowercase hex.
    pub sha: String,
    /// SHA3-256 digest, lowercase hex.
    pub sha3: String,
    /// MD5 digest, lowercase hex.
    pub md5: String,
}

/// One folder of a group listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderEntry {
    /// Remote folder identifier.
    pub folder_id: String,
    /// Display name.
    pub folder_name: String,
    /// Number of files inside the folder.
    pub total_file_count: u32,
    /// Creation time, seconds since epoch.
    pub create_time: i64,
    /// Creator uin.
    pub creator: u64,
    /// Creator display name.
    pub creator_name: String,
}

/// A group file listing: files and folders in encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileListResult {
    /// Files, in the order the response listed them.
    pub files: Vec<FileEntry>,
    /// Folders, in the order the response listed them.
    pub folders: Vec<FolderEntry>,
}
