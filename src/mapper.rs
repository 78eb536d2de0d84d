//! Mapping of tagged listing entries to typed domain records.
//!
//! A listing response is a heterogeneous sequence: each entry carries a
//! numeric discriminator and, for the known kinds, a matching detail
//! section. The mapper turns one entry into a [`FileListItem`] and leaves
//! the decision of what to do with unknown kinds explicit at the call site;
//! an unrecognized discriminator must never abort a whole listing.
//!
//! Wire timestamps are 32-bit unsigned seconds. They widen here through
//! `u32 → i64` zero-extension, so values past `i32::MAX` stay positive
//! instead of turning into dates before 1970.

use crate::model::{FileEntry, FolderEntry};
use crate::protocol::{FileInfo, FolderInfo, ListEntry, ENTRY_FILE, ENTRY_FOLDER};

/// One mapped listing entry.
#[derive(Debug, Clone, PartialEq)]
pub enum FileListItem {
    /// A file entry.
    File(FileEntry),
    /// A folder entry.
    Folder(FolderEntry),
    /// An entry with an unrecognized discriminator, carried for logging.
    Unknown(u32),
}

/// Map a wire entry to a typed item.
///
/// A known discriminator whose detail section is missing maps to
/// `Unknown` as well; a half-transmitted entry is no more usable than an
/// unrecognized one.
pub fn map_entry(entry: &ListEntry) -> FileListItem {
    match entry.entry_type {
        ENTRY_FILE => match &entry.file {
            Some(info) => FileListItem::File(map_file(info)),
            None => FileListItem::Unknown(ENTRY_FILE),
        },
        ENTRY_FOLDER => match &entry.folder {
            Some(info) => FileListItem::Folder(map_folder(info)),
            None => FileListItem::Unknown(ENTRY_FOLDER),
        },
        other => FileListItem::Unknown(other),
    }
}

fn map_file(info: &FileInfo) -> FileEntry {
    FileEntry {
        file_id: info.file_id.clone(),
        file_name: info.file_name.clone(),
        file_size: info.file_size,
        bus_id: info.bus_id,
        upload_time: i64::from(info.upload_time),
        expire_time: i64::from(info.dead_time),
        modify_time: i64::from(info.modify_time),
        download_times: info.download_times,
        uploader: info.uploader_uin,
        uploader_name: info.uploader_name.clone(),
        sha: hex::encode(&info.sha),
        sha3: hex::encode(&info.sha3),
        md5: hex::encode(&info.md5),
    }
}

fn map_folder(info: &FolderInfo) -> FolderEntry {
    FolderEntry {
        folder_id: info.folder_id.clone(),
        folder_name: info.folder_name.clone(),
        total_file_count: info.total_file_count,
        create_time: i64::from(info.create_time),
        creator: info.create_uin,
        creator_name: info.creator_name.clone(),
    }
}
