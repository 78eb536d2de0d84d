//! Response package codec with two-phase resilient decoding.
//!
//! A raw response buffer arrives as:
//!
//! ```text
//! ┌────────────────────────────┬───────────────────────────────┐
//! │ outer transport header     │ body                          │
//! │ 4 bytes (sometimes absent) │ zlib stream or raw package    │
//! └────────────────────────────┴───────────────────────────────┘
//! ```
//!
//! Whether the 4-byte header is present depends on which path the remote
//! routed the response through, and it cannot be told from the buffer
//! itself. The codec therefore decodes in two phases: first assuming the
//! header is there (the common case), then retrying on the full buffer.
//!
//! Compression is detected purely by content: a body whose first byte is
//! `0x78` is a zlib stream and gets inflated before parsing. There is no
//! header flag for this; the magic-byte heuristic is the compatibility
//! contract and must not be second-guessed.

use std::io::Read;

use flate2::read::ZlibDecoder;
use serde::{Deserialize, Serialize};
use serde_bytes::ByteBuf;

use crate::codec::MsgPackCodec;
use crate::error::DecodeError;

/// Leading byte of a zlib stream (deflate with zlib wrapper).
pub const ZLIB_MAGIC: u8 = 0x78;

/// Size of the optional outer transport header.
pub const OUTER_HEADER_SIZE: usize = 4;

/// A decoded response package.
///
/// `body` is itself a structured-binary sub-message whose shape depends on
/// the sub-command that was issued; decode it with
/// [`PackageCodec::decode_typed`] or [`MsgPackCodec::decode`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    /// Remote result code (0 = ok by convention; not enforced here).
    #[serde(default)]
    pub result: u32,
    /// Human-readable error text supplied by the remote, often empty.
    #[serde(default)]
    pub error_msg: String,
    /// Echoed command id.
    #[serde(default)]
    pub command: u32,
    /// Nested sub-command response body.
    #[serde(default)]
    pub body: ByteBuf,
}

/// Codec for response packages.
///
/// Marker struct with static methods, like the payload codecs: there is no
/// state to hold, and callers pick the codec at compile time.
pub struct PackageCodec;

impl PackageCodec {
    /// Decode a raw response buffer into a [`Package`].
    ///
    /// Phase one skips [`OUTER_HEADER_SIZE`] bytes and parses the rest;
    /// if that fails for any reason, phase two parses the full buffer.
    /// Each phase independently inflates the bytes when they lead with
    /// [`ZLIB_MAGIC`]. The error of the full-buffer attempt is returned
    /// when both phases fail.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] when neither interpretation of the buffer
    /// yields a parseable package.
    pub fn decode(raw: &[u8]) -> Result<Package, DecodeError> {
        if raw.len() > OUTER_HEADER_SIZE {
            if let Ok(pkg) = Self::decode_at(&raw[OUTER_HEADER_SIZE..]) {
                return Ok(pkg);
            }
        }
        Self::decode_at(raw)
    }

    /// Decode a raw response buffer and parse the package body into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if the package cannot be decoded or its body
    /// does not parse as `T`.
    pub fn decode_typed<T: serde::de::DeserializeOwned>(raw: &[u8]) -> Result<T, DecodeError> {
        let pkg = Self::decode(raw)?;
        Ok(MsgPackCodec::decode(&pkg.body)?)
    }

    /// Single decode attempt at a fixed offset: sniff, inflate if needed,
    /// parse.
    fn decode_at(buf: &[u8]) -> Result<Package, DecodeError> {
        if buf.first() == Some(&ZLIB_MAGIC) {
            let inflated = Self::inflate(buf)?;
            Ok(MsgPackCodec::decode(&inflated)?)
        } else {
            Ok(MsgPackCodec::decode(buf)?)
        }
    }

    /// Inflate a zlib stream to its full contents.
    fn inflate(buf: &[u8]) -> Result<Vec<u8>, DecodeError> {
        let mut out = Vec::with_capacity(buf.len() * 4);
        ZlibDecoder::new(buf).read_to_end(&mut out)?;
        Ok(out)
    }
}
