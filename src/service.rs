//! Group file workflows.
//!
//! [`GroupFileService`] drives the end-to-end flows over an injected
//! [`Transport`]: build a typed envelope, send it, classify the outcome,
//! decode the package, translate the body. It holds no state besides the
//! transport handle; every call is an independent logical flow.
//!
//! # Example
//!
//! ```ignore
//! use oidb_client::GroupFileService;
//!
//! let service = GroupFileService::new(channel);
//! let info = service.get_group_file_system_info(981204717).await?;
//! let listing = service.get_group_files(981204717, "/").await?;
//! ```

use bytes::Bytes;

use crate::codec::{MsgPackCodec, PackageCodec};
use crate::error::{OidbError, Result};
use crate::mapper::{map_entry, FileListItem};
use crate::model::{FileListResult, FileSystemInfo};
use crate::protocol::{
    CommandEnvelope, EnvelopeBuilder, FileCountRequest, FileCountResponse, FileListRequest,
    FileListResponse, SpaceRequest, SpaceResponse, FILE_LIST_TIMEOUT, GROUP_FILE_COMMAND,
    GROUP_FILE_COMMAND_ID, SORT_BY_TIMESTAMP, SUB_CMD_FILE_COUNT, SUB_CMD_FILE_LIST,
    SUB_CMD_SPACE,
};
use crate::transport::Transport;

/// Application id for group file storage.
const GROUP_FILE_APP_ID: u32 = 3;

/// `req_from` value identifying this client surface.
const REQ_FROM: u32 = 3;

/// Service for group file-storage metadata and listings.
///
/// Stateless besides the injected transport; cheap to construct per use.
#[derive(Debug)]
pub struct GroupFileService<T> {
    transport: T,
}

impl<T: Transport> GroupFileService<T> {
    /// Create a service over the given command channel.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Fetch aggregate file-storage metadata for a group.
    ///
    /// Issues the file-count and space-usage sub-commands in sequence and
    /// composes their answers. Fails fast on the first step that produces
    /// no frame, an empty payload or an undecodable package.
    ///
    /// # Errors
    ///
    /// [`OidbError::Transport`], [`OidbError::EmptyPayload`] or
    /// [`OidbError::Decode`] from either step.
    pub async fn get_group_file_system_info(&self, group_id: u64) -> Result<FileSystemInfo> {
        let count: FileCountResponse = self
            .round_trip(
                SUB_CMD_FILE_COUNT,
                &FileCountRequest {
                    group_code: group_id,
                    app_id: GROUP_FILE_APP_ID,
                    bus_id: 0,
                },
                None,
            )
            .await?;

        let space: SpaceResponse = self
            .round_trip(
                SUB_CMD_SPACE,
                &SpaceRequest {
                    group_code: group_id,
                    app_id: GROUP_FILE_APP_ID,
                },
                None,
            )
            .await?;

        Ok(FileSystemInfo {
            file_count: count.file_count,
            total_count: count.limit_count,
            total_space: space.total_space,
            used_space: space.used_space,
        })
    }

    /// List the files and folders of a group folder.
    ///
    /// The group's current file count doubles as the page size of the
    /// listing request, so the metadata fetch always runs first. The
    /// listing round trip uses the longer [`FILE_LIST_TIMEOUT`].
    ///
    /// Unrecognized entry kinds are logged and skipped; they never fail
    /// the listing.
    ///
    /// # Errors
    ///
    /// [`OidbError::Transport`], [`OidbError::EmptyPayload`] or
    /// [`OidbError::Decode`] from the metadata or listing round trips.
    pub async fn get_group_files(&self, group_id: u64, folder_id: &str) -> Result<FileListResult> {
        let info = self.get_group_file_system_info(group_id).await?;

        let listing: FileListResponse = self
            .round_trip(
                SUB_CMD_FILE_LIST,
                &FileListRequest {
                    group_code: group_id,
                    app_id: GROUP_FILE_APP_ID,
                    folder_id: folder_id.to_string(),
                    file_count: info.file_count,
                    all_file_count: 0,
                    req_from: REQ_FROM,
                    sort_by: SORT_BY_TIMESTAMP,
                    filter_code: 0,
                    uin: 0,
                    start_index: 0,
                    context: serde_bytes::ByteBuf::new(),
                    show_online_doc_folder: 0,
                },
                Some(FILE_LIST_TIMEOUT),
            )
            .await?;

        let mut result = FileListResult::default();
        for entry in &listing.items {
            match map_entry(entry) {
                FileListItem::File(file) => result.files.push(file),
                FileListItem::Folder(folder) => result.folders.push(folder),
                FileListItem::Unknown(tag) => {
                    tracing::warn!("skipping listing entry with unknown type {}", tag);
                }
            }
        }
        Ok(result)
    }

    /// One request/decode round trip for a group file sub-command.
    ///
    /// Builds the envelope, sends it, classifies the transport outcome and
    /// decodes the response body into `B`.
    async fn round_trip<R, B>(
        &self,
        sub_command_id: u32,
        request: &R,
        timeout: Option<std::time::Duration>,
    ) -> Result<B>
    where
        R: serde::Serialize,
        B: serde::de::DeserializeOwned,
    {
        let body = MsgPackCodec::encode(request)?;

        let mut builder =
            EnvelopeBuilder::new(GROUP_FILE_COMMAND, GROUP_FILE_COMMAND_ID, sub_command_id)
                .payload(body);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let raw = self.send(builder.build()).await?;
        PackageCodec::decode_typed(&raw).map_err(OidbError::Decode)
    }

    /// Send an envelope and extract the raw response buffer.
    async fn send(&self, envelope: CommandEnvelope) -> Result<Bytes> {
        let frame = self
            .transport
            .send(envelope)
            .await
            .ok_or(OidbError::Transport)?;
        frame.payload.ok_or(OidbError::EmptyPayload)
    }
}
