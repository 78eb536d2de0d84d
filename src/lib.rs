//! # oidb-client
//!
//! Client adapter for OIDB-routed group file-storage commands.
//!
//! The crate builds typed command envelopes for a remote command-routing
//! service, decodes its framed and optionally zlib-compressed response
//! packages, and orchestrates the multi-step workflows that fetch group
//! file-storage metadata and listings.
//!
//! ## Architecture
//!
//! - **Protocol** ([`protocol`]): envelope construction and the wire body
//!   shapes of the group file sub-commands
//! - **Codec** ([`codec`]): structured-binary encoding plus the two-phase
//!   resilient package decoder
//! - **Transport** ([`transport`]): the injected command-channel seam
//! - **Service** ([`GroupFileService`]): the end-to-end workflows
//!
//! ## Example
//!
//! ```ignore
//! use oidb_client::GroupFileService;
//!
//! let service = GroupFileService::new(channel);
//! let info = service.get_group_file_system_info(group_id).await?;
//! println!("{} of {} files", info.file_count, info.total_count);
//! ```

pub mod codec;
pub mod error;
pub mod mapper;
pub mod model;
pub mod protocol;
pub mod transport;

mod service;

pub use error::{DecodeError, OidbError};
pub use model::{FileEntry, FileListResult, FileSystemInfo, FolderEntry};
pub use service::GroupFileService;
pub use transport::{ResponseFrame, Transport};
