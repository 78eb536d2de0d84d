//! Integration tests for the group file workflows.
//!
//! These drive [`GroupFileService`] end to end over a scripted transport
//! double, with response buffers fabricated the way the remote frames them
//! (4-byte outer header, optional zlib body).

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use serde_bytes::ByteBuf;
use std::io::Write;

use oidb_client::codec::{MsgPackCodec, Package};
use oidb_client::protocol::{
    CommandEnvelope, FileCountResponse, FileInfo, FileListRequest, FileListResponse,
    FolderInfo, ListEntry, SpaceResponse, ENTRY_FILE, ENTRY_FOLDER, SUB_CMD_FILE_COUNT,
    SUB_CMD_FILE_LIST, SUB_CMD_SPACE,
};
use oidb_client::{GroupFileService, OidbError, ResponseFrame, Transport};

const GROUP: u64 = 981_204_717;

/// Transport double that replays a script of responses and records every
/// envelope it was asked to send.
struct ScriptedTransport {
    script: Mutex<VecDeque<Option<ResponseFrame>>>,
    sent: Mutex<Vec<CommandEnvelope>>,
}

impl ScriptedTransport {
    fn new(script: Vec<Option<ResponseFrame>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            sent: Mutex::new(Vec::new()),
        }
    }

    fn sent(&self) -> Vec<CommandEnvelope> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for &ScriptedTransport {
    async fn send(&self, envelope: CommandEnvelope) -> Option<ResponseFrame> {
        self.sent.lock().unwrap().push(envelope);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .expect("transport script exhausted")
    }
}

/// Wrap a sub-command response body into a raw response buffer:
/// `[4-byte outer header][package]`.
fn frame_response<B: serde::Serialize>(body: &B) -> ResponseFrame {
    let pkg = Package {
        result: 0,
        error_msg: String::new(),
        command: 1752,
        body: ByteBuf::from(MsgPackCodec::encode(body).unwrap()),
    };
    let mut raw = vec![0x00, 0x00, 0x00, 0x2A];
    raw.extend(MsgPackCodec::encode(&pkg).unwrap());
    ResponseFrame::with_payload(raw)
}

/// Same as [`frame_response`], but with a zlib-compressed package body.
fn frame_response_compressed<B: serde::Serialize>(body: &B) -> ResponseFrame {
    let pkg = Package {
        result: 0,
        error_msg: String::new(),
        command: 1752,
        body: ByteBuf::from(MsgPackCodec::encode(body).unwrap()),
    };
    let mut enc = ZlibEncoder::new(Vec::new(), Compression::default());
    enc.write_all(&MsgPackCodec::encode(&pkg).unwrap()).unwrap();
    let compressed = enc.finish().unwrap();

    let mut raw = vec![0xCA, 0xFE, 0xBA, 0xBE];
    raw.extend(compressed);
    ResponseFrame::with_payload(raw)
}

fn count_response(file_count: u32, limit_count: u32) -> ResponseFrame {
    frame_response(&FileCountResponse {
        file_count,
        limit_count,
    })
}

fn space_response(total_space: u64, used_space: u64) -> ResponseFrame {
    frame_response(&SpaceResponse {
        total_space,
        used_space,
    })
}

fn file_info(name: &str) -> FileInfo {
    FileInfo {
        file_id: format!("/{}", name),
        file_name: name.to_string(),
        file_size: 1024,
        bus_id: 102,
        upload_time: 1_690_000_000,
        dead_time: 0,
        modify_time: 1_690_000_001,
        download_times: 3,
        uploader_uin: 10_001,
        uploader_name: "alice".into(),
        sha: ByteBuf::from(vec![0x0A; 20]),
        sha3: ByteBuf::from(vec![0x0B; 32]),
        md5: ByteBuf::from(vec![0x0C; 16]),
    }
}

#[tokio::test]
async fn test_file_system_info_composes_both_steps() {
    let transport = ScriptedTransport::new(vec![
        Some(count_response(17, 3000)),
        Some(space_response(10_737_418_240, 123_456_789)),
    ]);
    let service = GroupFileService::new(&transport);

    let info = service.get_group_file_system_info(GROUP).await.unwrap();

    assert_eq!(info.file_count, 17);
    assert_eq!(info.total_count, 3000);
    assert_eq!(info.total_space, 10_737_418_240);
    assert_eq!(info.used_space, 123_456_789);

    let sent = transport.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].command, "OidbSvc.0x6d8_1");
    assert_eq!(sent[0].command_id, 1752);
    assert_eq!(sent[0].sub_command_id, SUB_CMD_FILE_COUNT);
    assert_eq!(sent[1].sub_command_id, SUB_CMD_SPACE);
}

#[tokio::test]
async fn test_listing_page_size_is_the_fetched_file_count() {
    let transport = ScriptedTransport::new(vec![
        Some(count_response(17, 3000)),
        Some(space_response(1, 1)),
        Some(frame_response(&FileListResponse::default())),
    ]);
    let service = GroupFileService::new(&transport);

    service.get_group_files(GROUP, "/").await.unwrap();

    let sent = transport.sent();
    assert_eq!(sent.len(), 3);

    let listing = &sent[2];
    assert_eq!(listing.sub_command_id, SUB_CMD_FILE_LIST);
    assert_eq!(listing.timeout, Duration::from_secs(30));

    let request: FileListRequest = MsgPackCodec::decode(&listing.payload).unwrap();
    assert_eq!(request.file_count, 17);
    assert_eq!(request.group_code, GROUP);
    assert_eq!(request.folder_id, "/");
    assert_eq!(request.start_index, 0);
    assert!(request.context.is_empty());
}

#[tokio::test]
async fn test_listing_maps_entries_and_skips_unknown() {
    let listing = FileListResponse {
        items: vec![
            ListEntry {
                entry_type: ENTRY_FILE,
                file: Some(file_info("notes.txt")),
                folder: None,
            },
            ListEntry {
                entry_type: ENTRY_FOLDER,
                file: None,
                folder: Some(FolderInfo {
                    folder_id: "/d-1".into(),
                    folder_name: "archive".into(),
                    total_file_count: 5,
                    create_time: 1_600_000_000,
                    create_uin: 20_002,
                    creator_name: "bob".into(),
                }),
            },
            ListEntry {
                entry_type: 99,
                ..ListEntry::default()
            },
        ],
    };
    let transport = ScriptedTransport::new(vec![
        Some(count_response(3, 3000)),
        Some(space_response(1, 1)),
        Some(frame_response(&listing)),
    ]);
    let service = GroupFileService::new(&transport);

    let result = service.get_group_files(GROUP, "/").await.unwrap();

    assert_eq!(result.files.len(), 1);
    assert_eq!(result.folders.len(), 1);
    assert_eq!(result.files[0].file_name, "notes.txt");
    assert_eq!(result.files[0].sha, "0a".repeat(20));
    assert_eq!(result.files[0].md5, "0c".repeat(16));
    assert_eq!(result.folders[0].folder_name, "archive");
}

#[tokio::test]
async fn test_transport_failure_aborts_before_second_step() {
    let transport = ScriptedTransport::new(vec![None]);
    let service = GroupFileService::new(&transport);

    let err = service.get_group_file_system_info(GROUP).await.unwrap_err();

    assert!(matches!(err, OidbError::Transport));
    // The space-usage request must never go out.
    assert_eq!(transport.sent().len(), 1);
}

#[tokio::test]
async fn test_empty_payload_is_distinct_from_transport_failure() {
    let transport = ScriptedTransport::new(vec![
        Some(count_response(1, 1)),
        Some(ResponseFrame::empty()),
    ]);
    let service = GroupFileService::new(&transport);

    let err = service.get_group_file_system_info(GROUP).await.unwrap_err();

    assert!(matches!(err, OidbError::EmptyPayload));
    assert_eq!(transport.sent().len(), 2);
}

#[tokio::test]
async fn test_compressed_responses_decode_transparently() {
    let transport = ScriptedTransport::new(vec![
        Some(frame_response_compressed(&FileCountResponse {
            file_count: 8,
            limit_count: 100,
        })),
        Some(frame_response_compressed(&SpaceResponse {
            total_space: 2048,
            used_space: 512,
        })),
    ]);
    let service = GroupFileService::new(&transport);

    let info = service.get_group_file_system_info(GROUP).await.unwrap();

    assert_eq!(info.file_count, 8);
    assert_eq!(info.total_space, 2048);
}

#[tokio::test]
async fn test_headerless_response_decodes_via_fallback() {
    // A frame without the 4-byte outer header still decodes (phase two).
    let pkg = Package {
        result: 0,
        error_msg: String::new(),
        command: 1752,
        body: ByteBuf::from(
            MsgPackCodec::encode(&FileCountResponse {
                file_count: 5,
                limit_count: 50,
            })
            .unwrap(),
        ),
    };
    let headerless = ResponseFrame::with_payload(MsgPackCodec::encode(&pkg).unwrap());

    let transport =
        ScriptedTransport::new(vec![Some(headerless), Some(space_response(1, 1))]);
    let service = GroupFileService::new(&transport);

    let info = service.get_group_file_system_info(GROUP).await.unwrap();
    assert_eq!(info.file_count, 5);
}

#[tokio::test]
async fn test_undecodable_response_is_a_decode_error() {
    let garbage = ResponseFrame::with_payload(b"\x00\x01not a package at all".to_vec());
    let transport = ScriptedTransport::new(vec![Some(garbage)]);
    let service = GroupFileService::new(&transport);

    let err = service.get_group_file_system_info(GROUP).await.unwrap_err();

    assert!(matches!(err, OidbError::Decode(_)));
}

#[tokio::test]
async fn test_listing_failure_propagates_from_metadata_step() {
    // A dead transport fails get_group_files during its metadata
    // prerequisite; the listing request is never built.
    let transport = ScriptedTransport::new(vec![None]);
    let service = GroupFileService::new(&transport);

    let err = service.get_group_files(GROUP, "/sub").await.unwrap_err();

    assert!(matches!(err, OidbError::Transport));
    assert_eq!(transport.sent().len(), 1);
}
