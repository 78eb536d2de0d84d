//! Codec module - serialization and response package decoding.
//!
//! This module provides the codecs between raw buffers and typed values:
//!
//! - [`MsgPackCodec`] - the structured-binary encoding (MessagePack,
//!   named-field format) used for request bodies and response sub-messages
//! - [`PackageCodec`] - resilient decode of a raw response buffer into a
//!   [`Package`], handling the ambiguous 4-byte outer header and optional
//!   zlib compression
//!
//! # Design
//!
//! Codecs are implemented as marker structs with static methods rather than
//! trait objects. This allows for compile-time codec selection and keeps the
//! decode paths free of dynamic dispatch.
//!
//! # Example
//!
//! ```
//! use oidb_client::codec::MsgPackCodec;
//!
//! let encoded = MsgPackCodec::encode(&"hello").unwrap();
//! let decoded: String = MsgPackCodec::decode(&encoded).unwrap();
//! assert_eq!(decoded, "hello");
//! ```

mod msgpack;
mod package;

pub use msgpack::MsgPackCodec;
pub use package::{Package, PackageCodec, OUTER_HEADER_SIZE, ZLIB_MAGIC};
